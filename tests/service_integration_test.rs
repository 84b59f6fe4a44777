use anyhow::Result;
use charge_flow::app::runner::{demo_transactions, run_batch};
use charge_flow::config::{NotificationChannel, Settings};
use charge_flow::{
    ContactInfo, CustomerData, PaymentData, PaymentError, PaymentProviderError, PaymentService,
};
use httpmock::prelude::*;
use tempfile::TempDir;

fn settings_for(server: &MockServer, temp_dir: &TempDir) -> Settings {
    let mut settings = Settings::default();
    settings.provider.api_base = server.base_url();
    settings.provider.api_key = Some("sk_test_integration".to_string());
    settings.provider.timeout_seconds = 5;
    settings.log.path = temp_dir
        .path()
        .join("transactions.log")
        .to_string_lossy()
        .to_string();
    settings
}

#[tokio::test]
async fn test_john_doe_scenario_end_to_end() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start();

    let charge_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/charges")
            .header("authorization", "Bearer sk_test_integration")
            .body_contains("amount=500")
            .body_contains("currency=usd")
            .body_contains("source=tok_mastercard");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "id": "ch_test_1",
                "object": "charge",
                "amount": 500,
                "currency": "usd",
                "status": "succeeded",
                "paid": true,
                "created": 1700000000
            }));
    });

    let settings = settings_for(&server, &temp_dir);
    let service = PaymentService::stripe(&settings)?;

    let customer = CustomerData::new("John Doe", ContactInfo::email("e@mail.com"));
    let charge = service
        .process_transaction(&customer, &PaymentData::new(500, "tok_mastercard"))
        .await?
        .expect("valid transaction should be charged");

    charge_mock.assert();
    assert_eq!(charge.amount, 500);
    assert_eq!(charge.currency, "usd");
    assert_eq!(charge.extra["object"], "charge");

    let log = std::fs::read_to_string(&settings.log.path)?;
    assert_eq!(log, "John Doe paid 500\nPayment status: succeeded\n");

    Ok(())
}

#[tokio::test]
async fn test_demo_batch_logs_both_customers() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start();

    let charge_mock = server.mock(|when, then| {
        when.method(POST).path("/v1/charges");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"status": "succeeded"}));
    });

    let settings = settings_for(&server, &temp_dir);
    let service = PaymentService::stripe(&settings)?;

    let results = run_batch(&service, &demo_transactions()).await?;

    charge_mock.assert_hits(2);
    assert_eq!(results.len(), 2);
    assert!(results.iter().all(Option::is_some));

    let log = std::fs::read_to_string(&settings.log.path)?;
    let lines: Vec<&str> = log.lines().collect();
    assert_eq!(
        lines,
        vec![
            "John Doe paid 500",
            "Payment status: succeeded",
            "Platzi Python paid 500",
            "Payment status: succeeded",
        ]
    );

    Ok(())
}

#[tokio::test]
async fn test_invalid_transaction_never_reaches_provider() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start();

    let charge_mock = server.mock(|when, then| {
        when.method(POST).path("/v1/charges");
        then.status(200)
            .json_body(serde_json::json!({"status": "succeeded"}));
    });

    let mut settings = settings_for(&server, &temp_dir);
    settings.notification.channel = NotificationChannel::Sms;
    let service = PaymentService::stripe(&settings)?;

    let customer = CustomerData::new("John Doe", ContactInfo::email("e@mail.com"));
    let result = service
        .process_transaction(
            &customer,
            &PaymentData {
                amount: 500,
                source: None,
            },
        )
        .await?;

    assert!(result.is_none());
    charge_mock.assert_hits(0);
    assert!(!std::path::Path::new(&settings.log.path).exists());

    Ok(())
}

#[tokio::test]
async fn test_declined_card_aborts_batch_and_leaves_log_unchanged() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start();

    let charge_mock = server.mock(|when, then| {
        when.method(POST).path("/v1/charges");
        then.status(402)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "error": {
                    "type": "card_error",
                    "code": "card_declined",
                    "message": "Your card was declined."
                }
            }));
    });

    let settings = settings_for(&server, &temp_dir);
    let service = PaymentService::stripe(&settings)?;

    let err = run_batch(&service, &demo_transactions())
        .await
        .expect_err("provider failure must propagate");

    // The first failure stops the batch
    charge_mock.assert_hits(1);
    assert!(matches!(
        err,
        PaymentError::Provider(PaymentProviderError::Api { status: 402, .. })
    ));
    assert!(!std::path::Path::new(&settings.log.path).exists());

    Ok(())
}

#[tokio::test]
async fn test_missing_api_key_is_fatal() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start();

    let mut settings = settings_for(&server, &temp_dir);
    settings.provider.api_key = None;
    let service = PaymentService::stripe(&settings)?;

    let customer = CustomerData::new("Platzi Python", ContactInfo::phone("1234567890"));
    let err = service
        .process_transaction(&customer, &PaymentData::new(500, "tok_mastercard"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        PaymentError::Provider(PaymentProviderError::MissingApiKey)
    ));

    Ok(())
}
