pub mod service;
pub mod transaction_log;
pub mod validators;
