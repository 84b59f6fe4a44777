use crate::domain::model::{Charge, CustomerData, PaymentData};
use crate::utils::error::PaymentProviderError;
use async_trait::async_trait;
use std::fmt;

/// 建立扣款的能力。實作不得重試，失敗一律交回呼叫端。
#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    async fn process_transaction(
        &self,
        customer: &CustomerData,
        payment: &PaymentData,
    ) -> std::result::Result<Charge, PaymentProviderError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Email,
    Sms,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Email => write!(f, "email"),
            Channel::Sms => write!(f, "sms"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Sent { channel: Channel, recipient: String },
    Skipped { channel: Option<Channel> },
}

impl Notification {
    pub fn is_sent(&self) -> bool {
        matches!(self, Notification::Sent { .. })
    }
}

/// 付款確認通知。模擬發送，永遠不會失敗。
pub trait Notifier: Send + Sync {
    fn send_confirmation(&self, customer: &CustomerData) -> Notification;
}

impl<N: Notifier + ?Sized> Notifier for Box<N> {
    fn send_confirmation(&self, customer: &CustomerData) -> Notification {
        (**self).send_confirmation(customer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_display() {
        assert_eq!(Channel::Email.to_string(), "email");
        assert_eq!(Channel::Sms.to_string(), "sms");
    }

    #[test]
    fn test_boxed_notifier_delegates() {
        struct Silent;

        impl Notifier for Silent {
            fn send_confirmation(&self, _customer: &CustomerData) -> Notification {
                Notification::Skipped {
                    channel: Some(Channel::Sms),
                }
            }
        }

        let boxed: Box<dyn Notifier> = Box::new(Silent);
        let outcome = boxed.send_confirmation(&CustomerData::default());

        assert!(!outcome.is_sent());
        assert_eq!(
            outcome,
            Notification::Skipped {
                channel: Some(Channel::Sms)
            }
        );
    }
}
