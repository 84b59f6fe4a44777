use thiserror::Error;

/// 必填欄位缺失。由 `PaymentService` 攔截，交易放棄但程序不中止。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing name")]
    MissingName,

    #[error("missing contact info")]
    MissingContactInfo,

    #[error("invalid payment data")]
    InvalidPaymentData,
}

impl ValidationError {
    /// 帶上資料類別的完整訊息，例如 `Invalid customer data: missing name`
    pub fn diagnostic(&self) -> String {
        match self {
            ValidationError::MissingName | ValidationError::MissingContactInfo => {
                format!("Invalid customer data: {}", self)
            }
            ValidationError::InvalidPaymentData => "Invalid payment data".to_string(),
        }
    }
}

/// 金流服務商拒絕或無法處理扣款。對當次交易而言是致命錯誤，不重試。
#[derive(Error, Debug)]
pub enum PaymentProviderError {
    #[error("no API key configured (set STRIPE_API_KEY)")]
    MissingApiKey,

    #[error("request to payment provider failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{kind} ({status}): {message}")]
    Api {
        status: u16,
        kind: String,
        code: Option<String>,
        message: String,
    },
}

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Payment provider error: {0}")]
    Provider(#[from] PaymentProviderError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl PaymentError {
    /// 給終端使用者的修正建議
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PaymentError::Validation(_) => "Check the customer and payment fields",
            PaymentError::Provider(PaymentProviderError::MissingApiKey) => {
                "Export STRIPE_API_KEY or set provider.api_key in the config file"
            }
            PaymentError::Provider(PaymentProviderError::Transport(_)) => {
                "Check network connectivity and provider.api_base"
            }
            PaymentError::Provider(PaymentProviderError::Api { .. }) => {
                "Inspect the provider response; the charge was not created"
            }
            PaymentError::IoError(_) => "Check that the transaction log path is writable",
            PaymentError::SerializationError(_) => "Check the JSON input format",
            PaymentError::ConfigError { .. } | PaymentError::InvalidConfigValueError { .. } => {
                "Fix the configuration file and retry"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, PaymentError>;
