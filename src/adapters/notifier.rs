use crate::config::NotificationConfig;
use crate::domain::model::CustomerData;
use crate::domain::ports::{Channel, Notification, Notifier};

pub const CONFIRMATION_SUBJECT: &str = "Payment Confirmation";
pub const CONFIRMATION_TEXT: &str = "Thank you for your payment.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Clone)]
pub struct EmailNotifier {
    sender: String,
}

impl EmailNotifier {
    pub fn new(sender: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
        }
    }

    pub fn compose(&self, recipient: &str) -> EmailMessage {
        EmailMessage {
            from: self.sender.clone(),
            to: recipient.to_string(),
            subject: CONFIRMATION_SUBJECT.to_string(),
            body: CONFIRMATION_TEXT.to_string(),
        }
    }
}

impl Default for EmailNotifier {
    fn default() -> Self {
        Self::new(NotificationConfig::default().email_sender)
    }
}

impl Notifier for EmailNotifier {
    fn send_confirmation(&self, customer: &CustomerData) -> Notification {
        let Some(email) = customer.email_address() else {
            tracing::debug!("No email for {}, skipping", customer.display_name());
            return Notification::Skipped {
                channel: Some(Channel::Email),
            };
        };

        // 只模擬寄送，不連線 SMTP
        let message = self.compose(email);
        tracing::debug!("Composed email: {:?}", message);
        println!("Email sent to {}", message.to);
        tracing::info!("📧 Confirmation email sent to {}", message.to);

        Notification::Sent {
            channel: Channel::Email,
            recipient: message.to,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SmsNotifier {
    gateway: String,
}

impl SmsNotifier {
    pub fn new(gateway: impl Into<String>) -> Self {
        Self {
            gateway: gateway.into(),
        }
    }
}

impl Default for SmsNotifier {
    fn default() -> Self {
        Self::new(NotificationConfig::default().sms_gateway)
    }
}

impl Notifier for SmsNotifier {
    fn send_confirmation(&self, customer: &CustomerData) -> Notification {
        let Some(phone) = customer.phone_number() else {
            tracing::debug!("No phone for {}, skipping", customer.display_name());
            return Notification::Skipped {
                channel: Some(Channel::Sms),
            };
        };

        println!(
            "send the sms using {}: SMS sent to {}: {}",
            self.gateway, phone, CONFIRMATION_TEXT
        );
        tracing::info!("📱 Confirmation SMS sent to {} via {}", phone, self.gateway);

        Notification::Sent {
            channel: Channel::Sms,
            recipient: phone.to_string(),
        }
    }
}

/// 有 email 走 email，否則退回簡訊
#[derive(Debug, Clone, Default)]
pub struct ContactNotifier {
    email: EmailNotifier,
    sms: SmsNotifier,
}

impl ContactNotifier {
    pub fn new(email: EmailNotifier, sms: SmsNotifier) -> Self {
        Self { email, sms }
    }
}

impl Notifier for ContactNotifier {
    fn send_confirmation(&self, customer: &CustomerData) -> Notification {
        if customer.email_address().is_some() {
            return self.email.send_confirmation(customer);
        }
        if customer.phone_number().is_some() {
            return self.sms.send_confirmation(customer);
        }

        println!("No valid contact information for notification");
        tracing::warn!(
            "⚠️ No valid contact information for {}",
            customer.display_name()
        );
        Notification::Skipped { channel: None }
    }
}
