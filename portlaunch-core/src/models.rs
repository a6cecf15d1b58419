use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use uuid::Uuid;

#[cfg(windows)]
const DEFAULT_EXECUTABLE: &str = "python.exe";
#[cfg(not(windows))]
const DEFAULT_EXECUTABLE: &str = "python";

/// Names and switches that describe a project's bundled runtime.
///
/// Path-like fields are relative to the project root and may use either
/// `/` or `\` between components.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct LaunchSettings {
    /// Directory holding the portable interpreter
    pub runtime_dir: String,
    /// Interpreter executable, relative to `runtime_dir`
    pub executable: String,
    /// Script handed to the interpreter as its only argument
    pub entry_script: String,
    /// Module search path variable rebuilt for the child
    pub search_path_var: String,
    /// Library directory, relative to `runtime_dir`
    pub library_dir: String,
    /// Wait for acknowledgment before exiting
    pub pause: bool,
    /// Switch the console to the UTF-8 code page (Windows only)
    pub utf8_console: bool,
}

impl Default for LaunchSettings {
    fn default() -> Self {
        Self {
            runtime_dir: "python".to_string(),
            executable: DEFAULT_EXECUTABLE.to_string(),
            entry_script: "app.py".to_string(),
            search_path_var: "PYTHONPATH".to_string(),
            library_dir: "Lib/site-packages".to_string(),
            pause: true,
            utf8_console: true,
        }
    }
}

impl LaunchSettings {
    pub fn with_runtime_dir(mut self, dir: impl Into<String>) -> Self {
        self.runtime_dir = dir.into();
        self
    }

    pub fn with_executable(mut self, name: impl Into<String>) -> Self {
        self.executable = name.into();
        self
    }

    pub fn with_entry_script(mut self, script: impl Into<String>) -> Self {
        self.entry_script = script.into();
        self
    }

    pub fn with_pause(mut self, pause: bool) -> Self {
        self.pause = pause;
        self
    }
}

/// Record of one delegated run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchReport {
    pub id: Uuid,
    pub executable: PathBuf,
    pub entry_script: PathBuf,
    /// `None` when the child was terminated by a signal
    pub exit_code: Option<i32>,
    pub duration_ms: u64,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = LaunchSettings::default();
        assert_eq!(settings.runtime_dir, "python");
        assert_eq!(settings.executable, DEFAULT_EXECUTABLE);
        assert_eq!(settings.entry_script, "app.py");
        assert_eq!(settings.search_path_var, "PYTHONPATH");
        assert_eq!(settings.library_dir, "Lib/site-packages");
        assert!(settings.pause);
        assert!(settings.utf8_console);
    }

    #[test]
    fn test_settings_builders() {
        let settings = LaunchSettings::default()
            .with_runtime_dir("runtime")
            .with_executable("py")
            .with_entry_script("main.py")
            .with_pause(false);
        assert_eq!(settings.runtime_dir, "runtime");
        assert_eq!(settings.executable, "py");
        assert_eq!(settings.entry_script, "main.py");
        assert!(!settings.pause);
    }
}
