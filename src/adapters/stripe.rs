use crate::config::ProviderConfig;
use crate::domain::model::{Charge, ChargeRequest, CustomerData, PaymentData};
use crate::domain::ports::PaymentProcessor;
use crate::utils::error::{PaymentProviderError, Result};
use crate::utils::validation::validate_url;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

const CHARGES_PATH: &str = "/v1/charges";

#[derive(Debug, Default, Deserialize)]
struct ErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Default, Deserialize)]
struct ApiErrorBody {
    #[serde(default, rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// 透過 Stripe `POST /v1/charges` 建立扣款
pub struct StripeChargeProcessor {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl StripeChargeProcessor {
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        validate_url("provider.api_base", &config.api_base)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(PaymentProviderError::Transport)?;

        Ok(Self {
            client,
            endpoint: format!("{}{}", config.api_base.trim_end_matches('/'), CHARGES_PATH),
            api_key: config.api_key.clone().filter(|k| !k.trim().is_empty()),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn create_charge(
        &self,
        request: &ChargeRequest,
    ) -> std::result::Result<Charge, PaymentProviderError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(PaymentProviderError::MissingApiKey)?;

        tracing::debug!(
            "Creating charge at {} (amount: {}, currency: {})",
            self.endpoint,
            request.amount,
            request.currency
        );
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .form(request)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Provider response status: {}", status);

        if status.is_success() {
            return Ok(response.json::<Charge>().await?);
        }

        let body = response.text().await?;
        let error = serde_json::from_str::<ErrorEnvelope>(&body)
            .map(|envelope| envelope.error)
            .unwrap_or_default();

        Err(PaymentProviderError::Api {
            status: status.as_u16(),
            kind: error.kind.unwrap_or_else(|| "api_error".to_string()),
            code: error.code,
            message: error.message.unwrap_or(body),
        })
    }
}

#[async_trait::async_trait]
impl PaymentProcessor for StripeChargeProcessor {
    async fn process_transaction(
        &self,
        customer: &CustomerData,
        payment: &PaymentData,
    ) -> std::result::Result<Charge, PaymentProviderError> {
        let request = ChargeRequest::for_customer(customer, payment);

        match self.create_charge(&request).await {
            Ok(charge) => {
                println!("Payment successful");
                tracing::info!(
                    "💳 Charge {} created for {} ({} {}): {}",
                    charge.id,
                    customer.display_name(),
                    request.amount,
                    request.currency,
                    charge.status
                );
                Ok(charge)
            }
            Err(e) => {
                println!("Payment failed: {}", e);
                tracing::error!("❌ Charge for {} failed: {}", customer.display_name(), e);
                Err(e)
            }
        }
    }
}
