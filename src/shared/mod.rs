// Shared kernel: concerns used by every module

pub mod config;
pub mod errors;
pub mod infrastructure;
pub mod utils;

pub use config::AppConfig;
pub use errors::{AppError, AppResult};
