use crate::error::{LaunchError, Result};
use crate::models::LaunchSettings;
use std::fs;
use std::path::Path;

/// Settings file looked up in the project root when no path is given
pub const CONFIG_FILE_NAME: &str = "portlaunch.toml";

impl LaunchSettings {
    /// Parse settings from TOML. Missing fields keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| LaunchError::InvalidConfiguration(e.to_string()))
    }

    /// Load settings from an explicit file, which must exist.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            LaunchError::InvalidConfiguration(format!(
                "failed to read {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// Load `<root>/portlaunch.toml` if present, otherwise the defaults.
    pub fn discover(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE_NAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let settings = LaunchSettings::from_toml_str(
            r#"
runtime_dir = "runtime"
pause = false
"#,
        )
        .unwrap();

        assert_eq!(settings.runtime_dir, "runtime");
        assert!(!settings.pause);
        assert_eq!(settings.entry_script, "app.py");
        assert_eq!(settings.search_path_var, "PYTHONPATH");
    }

    #[test]
    fn test_empty_file_is_default() {
        let settings = LaunchSettings::from_toml_str("").unwrap();
        assert_eq!(settings, LaunchSettings::default());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = LaunchSettings::from_toml_str("interpreter = \"python3\"").unwrap_err();
        assert!(matches!(err, LaunchError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_wrong_type_rejected() {
        let err = LaunchSettings::from_toml_str("pause = \"yes\"").unwrap_err();
        assert!(matches!(err, LaunchError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_discover_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let settings = LaunchSettings::discover(dir.path()).unwrap();
        assert_eq!(settings, LaunchSettings::default());
    }

    #[test]
    fn test_discover_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "entry_script = \"server.py\"\n",
        )
        .unwrap();

        let settings = LaunchSettings::discover(dir.path()).unwrap();
        assert_eq!(settings.entry_script, "server.py");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = LaunchSettings::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, LaunchError::InvalidConfiguration(_)));
    }
}
