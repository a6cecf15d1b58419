use crate::process::ProcessConfig;
use chrono::Utc;
use portlaunch_core::{LaunchError, LaunchReport, Layout, Result};
use tokio::process::Command;
use tracing::{error, info, warn};
use uuid::Uuid;

/// Starts a project's bundled runtime with its entry script
#[derive(Debug, Clone)]
pub struct Launcher {
    layout: Layout,
}

impl Launcher {
    pub fn new(layout: Layout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Spawn the runtime and wait for it to exit.
    ///
    /// Only the executable is checked up front. A missing executable fails
    /// with [`LaunchError::MissingRuntime`] before anything is spawned; the
    /// child's own exit status is recorded in the report, never treated as
    /// an error.
    pub async fn launch(&self) -> Result<LaunchReport> {
        let executable = self.layout.executable_path();

        if !executable.is_file() {
            warn!(path = %executable.display(), "Runtime executable not found");
            return Err(LaunchError::MissingRuntime { path: executable });
        }

        let config = ProcessConfig::for_layout(&self.layout);

        let launch_id = Uuid::new_v4();
        let entry_script = self.layout.entry_script();
        let started_at = Utc::now();
        let start_instant = std::time::Instant::now();

        info!(
            launch_id = %launch_id,
            executable = %executable.display(),
            entry_script = %entry_script.display(),
            "Starting runtime"
        );

        let mut command = Command::new(&executable);
        command.arg(&entry_script);
        config.apply(&mut command);

        let status = command.status().await.map_err(|source| {
            error!(
                launch_id = %launch_id,
                executable = %executable.display(),
                error = %source,
                "Failed to start runtime"
            );
            LaunchError::Spawn {
                program: executable.clone(),
                source,
            }
        })?;

        let duration_ms = u64::try_from(start_instant.elapsed().as_millis()).unwrap_or(u64::MAX);
        let exit_code = status.code();

        info!(
            launch_id = %launch_id,
            exit_code = ?exit_code,
            duration_ms,
            "Runtime exited"
        );

        Ok(LaunchReport {
            id: launch_id,
            executable,
            entry_script,
            exit_code,
            duration_ms,
            started_at,
            completed_at: Some(Utc::now()),
        })
    }
}
