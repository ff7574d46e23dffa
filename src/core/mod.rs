pub mod config;
mod responses;
mod telemetry;

pub use self::config::{AppConfig, SettingsError};
pub use responses::*;
pub use telemetry::*;
