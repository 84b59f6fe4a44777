use crate::adapters::{notifier_from_config, StripeChargeProcessor};
use crate::config::Settings;
use crate::core::transaction_log::TransactionLogger;
use crate::core::validators::{CustomerValidator, PaymentValidator};
use crate::domain::model::{Charge, CustomerData, PaymentData};
use crate::domain::ports::{Notification, Notifier, PaymentProcessor};
use crate::utils::error::{Result, ValidationError};

pub struct PaymentService<P: PaymentProcessor, N: Notifier> {
    customer_validator: CustomerValidator,
    payment_validator: PaymentValidator,
    processor: P,
    notifier: N,
    logger: TransactionLogger,
}

impl<P: PaymentProcessor, N: Notifier> PaymentService<P, N> {
    pub fn new(
        customer_validator: CustomerValidator,
        payment_validator: PaymentValidator,
        processor: P,
        notifier: N,
        logger: TransactionLogger,
    ) -> Self {
        Self {
            customer_validator,
            payment_validator,
            processor,
            notifier,
            logger,
        }
    }

    fn validate(
        &self,
        customer: &CustomerData,
        payment: &PaymentData,
    ) -> std::result::Result<(), ValidationError> {
        self.customer_validator.validate(customer)?;
        self.payment_validator.validate(payment)
    }

    /// 驗證 → 扣款 → 通知 → 記錄。
    ///
    /// 驗證失敗時回傳 `Ok(None)`，不會呼叫服務商。服務商錯誤與寫檔錯誤則直接往上拋。
    pub async fn process_transaction(
        &self,
        customer: &CustomerData,
        payment: &PaymentData,
    ) -> Result<Option<Charge>> {
        if let Err(e) = self.validate(customer, payment) {
            println!("Transaction failed: {}", e.diagnostic());
            tracing::warn!("❌ Transaction abandoned: {}", e.diagnostic());
            return Ok(None);
        }

        let charge = self.processor.process_transaction(customer, payment).await?;

        match self.notifier.send_confirmation(customer) {
            Notification::Sent { channel, recipient } => {
                tracing::debug!("Confirmation sent via {} to {}", channel, recipient)
            }
            Notification::Skipped {
                channel: Some(channel),
            } => tracing::debug!("No {} contact, confirmation skipped", channel),
            Notification::Skipped { channel: None } => {
                tracing::debug!("No usable contact, confirmation skipped")
            }
        }

        self.logger.log(customer, payment, &charge)?;

        Ok(Some(charge))
    }
}

impl PaymentService<StripeChargeProcessor, Box<dyn Notifier>> {
    /// 依設定組出預設協作者
    pub fn stripe(settings: &Settings) -> Result<Self> {
        Ok(Self::new(
            CustomerValidator,
            PaymentValidator,
            StripeChargeProcessor::new(&settings.provider)?,
            notifier_from_config(&settings.notification),
            TransactionLogger::new(&settings.log.path),
        ))
    }
}
