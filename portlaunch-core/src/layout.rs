use crate::models::LaunchSettings;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

#[cfg(windows)]
const PATH_LIST_SEPARATOR: &str = ";";
#[cfg(not(windows))]
const PATH_LIST_SEPARATOR: &str = ":";

/// Paths of a deployed project, derived from its root and settings
#[derive(Debug, Clone)]
pub struct Layout {
    root: PathBuf,
    settings: LaunchSettings,
}

impl Layout {
    pub fn new<P: AsRef<Path>>(root: P, settings: LaunchSettings) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            settings,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn settings(&self) -> &LaunchSettings {
        &self.settings
    }

    /// `<root>/<runtime_dir>`
    pub fn runtime_dir(&self) -> PathBuf {
        join_relative(&self.root, &self.settings.runtime_dir)
    }

    /// `<root>/<runtime_dir>/<executable>`
    pub fn executable_path(&self) -> PathBuf {
        join_relative(&self.runtime_dir(), &self.settings.executable)
    }

    /// `<root>/<runtime_dir>/<library_dir>`
    pub fn library_path(&self) -> PathBuf {
        join_relative(&self.runtime_dir(), &self.settings.library_dir)
    }

    /// Entry script as handed to the interpreter, relative to the root
    pub fn entry_script(&self) -> PathBuf {
        join_relative(Path::new(""), &self.settings.entry_script)
    }

    /// Value for the module search path variable: the project root, the
    /// platform path-list separator, then the runtime's library directory.
    ///
    /// Segments are concatenated as-is; a separator inside the root is not
    /// an error.
    pub fn search_path(&self) -> OsString {
        let mut value = OsString::from(self.root.as_os_str());
        value.push(PATH_LIST_SEPARATOR);
        value.push(self.library_path());
        value
    }
}

fn join_relative(base: &Path, relative: &str) -> PathBuf {
    relative
        .split(['/', '\\'])
        .filter(|part| !part.is_empty())
        .fold(base.to_path_buf(), |path, part| path.join(part))
}
