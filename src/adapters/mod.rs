// Adapters layer: concrete implementations of the domain ports (payment provider, notifiers).

pub mod notifier;
pub mod stripe;

use crate::config::{NotificationChannel, NotificationConfig};
use crate::domain::ports::Notifier;
use notifier::{ContactNotifier, EmailNotifier, SmsNotifier};

pub use stripe::StripeChargeProcessor;

/// 依設定挑選通知管道
pub fn notifier_from_config(config: &NotificationConfig) -> Box<dyn Notifier> {
    let email = EmailNotifier::new(config.email_sender.clone());
    let sms = SmsNotifier::new(config.sms_gateway.clone());

    match config.channel {
        NotificationChannel::Email => Box::new(email),
        NotificationChannel::Sms => Box::new(sms),
        NotificationChannel::Auto => Box::new(ContactNotifier::new(email, sms)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{ContactInfo, CustomerData};
    use crate::domain::ports::{Channel, Notification};

    #[test]
    fn test_email_only_channel_skips_phone_customers() {
        let config = NotificationConfig {
            channel: NotificationChannel::Email,
            ..NotificationConfig::default()
        };
        let notifier = notifier_from_config(&config);
        let customer = CustomerData::new("Platzi Python", ContactInfo::phone("1234567890"));

        assert_eq!(
            notifier.send_confirmation(&customer),
            Notification::Skipped {
                channel: Some(Channel::Email)
            }
        );
    }

    #[test]
    fn test_auto_channel_falls_back_to_sms() {
        let notifier = notifier_from_config(&NotificationConfig::default());
        let customer = CustomerData::new("Platzi Python", ContactInfo::phone("1234567890"));

        assert_eq!(
            notifier.send_confirmation(&customer),
            Notification::Sent {
                channel: Channel::Sms,
                recipient: "1234567890".to_string(),
            }
        );
    }
}
