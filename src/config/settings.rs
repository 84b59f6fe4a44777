use crate::utils::error::{PaymentError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const API_KEY_ENV: &str = "STRIPE_API_KEY";
pub const DEFAULT_CONFIG_FILE: &str = "charge-flow.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub notification: NotificationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub api_base: String,
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    pub timeout_seconds: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.stripe.com".to_string(),
            api_key: None,
            timeout_seconds: 80,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub path: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            path: "transactions.log".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationChannel {
    #[default]
    Auto,
    Email,
    Sms,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    pub channel: NotificationChannel,
    pub email_sender: String,
    pub sms_gateway: String,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            channel: NotificationChannel::Auto,
            email_sender: "no-reply@example.com".to_string(),
            sms_gateway: "the custom SMS Gateway".to_string(),
        }
    }
}

impl Settings {
    /// 啟動時呼叫一次：有設定檔就讀檔，沒有就用預設值，最後補上環境變數中的 API key
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = match path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(DEFAULT_CONFIG_FILE)?
            }
            None => Self::default(),
        };

        settings.apply_env_api_key(std::env::var(API_KEY_ENV).ok());
        Ok(settings)
    }

    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PaymentError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PaymentError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${STRIPE_API_KEY})。未設定的變數保持原樣。
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PaymentError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 設定檔沒有可用的 key 時才採用環境變數
    pub fn apply_env_api_key(&mut self, env_key: Option<String>) {
        let configured = self
            .provider
            .api_key
            .as_deref()
            .is_some_and(|k| !k.trim().is_empty() && !k.starts_with("${"));

        if !configured {
            self.provider.api_key = env_key.filter(|k| !k.trim().is_empty());
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.provider.api_key.is_some()
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_url("provider.api_base", &self.provider.api_base)?;
        validation::validate_range(
            "provider.timeout_seconds",
            self.provider.timeout_seconds,
            1,
            600,
        )?;
        validation::validate_path("log.path", &self.log.path)?;
        validation::validate_non_empty_string(
            "notification.email_sender",
            &self.notification.email_sender,
        )?;
        validation::validate_non_empty_string(
            "notification.sms_gateway",
            &self.notification.sms_gateway,
        )?;
        Ok(())
    }
}
