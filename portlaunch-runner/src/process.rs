// Environment and working directory handed to the runtime process

use portlaunch_core::Layout;
use std::ffi::OsString;
use std::path::PathBuf;
use tokio::process::Command;

#[derive(Debug, Clone, Default)]
pub struct ProcessConfig {
    pub env: Vec<(String, OsString)>,
    pub working_directory: Option<PathBuf>,
}

impl ProcessConfig {
    /// Overlay for a project: the module search path is rebuilt from the
    /// project root and the runtime's library directory, replacing any
    /// inherited value.
    pub fn for_layout(layout: &Layout) -> Self {
        Self {
            env: vec![(layout.settings().search_path_var.clone(), layout.search_path())],
            working_directory: Some(layout.root().to_path_buf()),
        }
    }

    pub fn apply(&self, command: &mut Command) {
        for (key, value) in &self.env {
            command.env(key, value);
        }
        if let Some(dir) = &self.working_directory {
            command.current_dir(dir);
        }
    }
}
