pub mod config;
pub mod error;
pub mod layout;
pub mod models;

pub use config::CONFIG_FILE_NAME;
pub use error::{LaunchError, Result};
pub use layout::Layout;
pub use models::{LaunchReport, LaunchSettings};
