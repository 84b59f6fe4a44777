use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 幣別固定為美元，不支援多幣別
pub const USD: &str = "usd";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// 其他聯絡欄位 (例如 `fax`)，保留下來供驗證判斷
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ContactInfo {
    pub fn email(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            ..Self::default()
        }
    }

    pub fn phone(phone: impl Into<String>) -> Self {
        Self {
            phone: Some(phone.into()),
            ..Self::default()
        }
    }

    /// 空字串視同未提供
    pub fn email_address(&self) -> Option<&str> {
        self.email.as_deref().filter(|e| !e.is_empty())
    }

    pub fn phone_number(&self) -> Option<&str> {
        self.phone.as_deref().filter(|p| !p.is_empty())
    }

    /// 完全沒有任何欄位才算空；空字串的 email 仍算有提供
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.phone.is_none() && self.extra.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerData {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub contact_info: Option<ContactInfo>,
}

impl CustomerData {
    pub fn new(name: impl Into<String>, contact_info: ContactInfo) -> Self {
        Self {
            name: Some(name.into()),
            contact_info: Some(contact_info),
        }
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn email_address(&self) -> Option<&str> {
        self.contact_info.as_ref().and_then(ContactInfo::email_address)
    }

    pub fn phone_number(&self) -> Option<&str> {
        self.contact_info.as_ref().and_then(ContactInfo::phone_number)
    }
}

/// 金額以分 (cents) 計。未知欄位 (例如 `cvv`) 會被忽略，也不會送往服務商。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentData {
    pub amount: i64,
    #[serde(default)]
    pub source: Option<String>,
}

impl PaymentData {
    pub fn new(amount: i64, source: impl Into<String>) -> Self {
        Self {
            amount,
            source: Some(source.into()),
        }
    }
}

/// 送往 `POST /v1/charges` 的表單內容
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChargeRequest {
    pub amount: i64,
    pub currency: String,
    pub source: String,
    pub description: String,
}

impl ChargeRequest {
    pub fn for_customer(customer: &CustomerData, payment: &PaymentData) -> Self {
        Self {
            amount: payment.amount,
            currency: USD.to_string(),
            source: payment.source.clone().unwrap_or_default(),
            description: format!("Charge for {}", customer.display_name()),
        }
    }
}

/// 服務商回傳的扣款紀錄，本服務只讀不寫
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Charge {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub amount: i64,
    #[serde(default)]
    pub currency: String,
    pub status: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub paid: bool,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub failure_message: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Charge {
    pub fn succeeded(&self) -> bool {
        self.status == "succeeded"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRequest {
    pub customer: CustomerData,
    pub payment: PaymentData,
}
