pub mod console;
pub mod launcher;
pub mod process;

pub use launcher::Launcher;
pub use process::ProcessConfig;
