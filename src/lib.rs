pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliArgs;

pub use adapters::notifier::{ContactNotifier, EmailNotifier, SmsNotifier};
pub use adapters::StripeChargeProcessor;
pub use config::Settings;
pub use crate::core::validators::{CustomerValidator, PaymentValidator};
pub use crate::core::{service::PaymentService, transaction_log::TransactionLogger};
pub use domain::model::{Charge, ContactInfo, CustomerData, PaymentData, TransactionRequest};
pub use domain::ports::{Notification, Notifier, PaymentProcessor};
pub use utils::error::{PaymentError, PaymentProviderError, Result, ValidationError};
