use crate::domain::model::{CustomerData, PaymentData};
use crate::utils::error::ValidationError;

fn reject(error: ValidationError) -> Result<(), ValidationError> {
    println!("{}", error.diagnostic());
    tracing::warn!("⚠️ {}", error.diagnostic());
    Err(error)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CustomerValidator;

impl CustomerValidator {
    pub fn validate(&self, customer: &CustomerData) -> Result<(), ValidationError> {
        if customer.name.as_deref().map_or(true, str::is_empty) {
            return reject(ValidationError::MissingName);
        }

        if customer
            .contact_info
            .as_ref()
            .map_or(true, |info| info.is_empty())
        {
            return reject(ValidationError::MissingContactInfo);
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PaymentValidator;

impl PaymentValidator {
    pub fn validate(&self, payment: &PaymentData) -> Result<(), ValidationError> {
        if payment.source.as_deref().map_or(true, str::is_empty) {
            return reject(ValidationError::InvalidPaymentData);
        }

        Ok(())
    }
}
