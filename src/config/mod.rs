#[cfg(feature = "cli")]
pub mod cli;
pub mod settings;

pub use settings::{
    LogConfig, NotificationChannel, NotificationConfig, ProviderConfig, Settings, API_KEY_ENV,
};
