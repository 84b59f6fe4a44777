use crate::core::service::PaymentService;
use crate::domain::model::{Charge, ContactInfo, CustomerData, PaymentData, TransactionRequest};
use crate::domain::ports::{Notifier, PaymentProcessor};
use crate::utils::error::Result;
use std::path::Path;

pub const SEPARATOR: &str = "================================";

/// 兩筆示範交易：一位留 email，一位留電話
pub fn demo_transactions() -> Vec<TransactionRequest> {
    let payment = PaymentData::new(500, "tok_mastercard");

    vec![
        TransactionRequest {
            customer: CustomerData::new("John Doe", ContactInfo::email("e@mail.com")),
            payment: payment.clone(),
        },
        TransactionRequest {
            customer: CustomerData::new("Platzi Python", ContactInfo::phone("1234567890")),
            payment,
        },
    ]
}

/// 讀取 `[{"customer": {...}, "payment": {...}}, ...]` 格式的 JSON
pub fn load_transactions<P: AsRef<Path>>(path: P) -> Result<Vec<TransactionRequest>> {
    let content = std::fs::read_to_string(path)?;
    let requests = serde_json::from_str(&content)?;
    Ok(requests)
}

/// 依序處理每筆交易。服務商錯誤會中止整批。
pub async fn run_batch<P: PaymentProcessor, N: Notifier>(
    service: &PaymentService<P, N>,
    requests: &[TransactionRequest],
) -> Result<Vec<Option<Charge>>> {
    let mut results = Vec::with_capacity(requests.len());

    for (index, request) in requests.iter().enumerate() {
        if index > 0 {
            println!("{}", SEPARATOR);
        }
        tracing::info!(
            "🚀 Processing transaction {}/{} for {}",
            index + 1,
            requests.len(),
            request.customer.display_name()
        );

        let result = service
            .process_transaction(&request.customer, &request.payment)
            .await?;
        results.push(result);
    }

    let charged = results.iter().filter(|r| r.is_some()).count();
    tracing::info!(
        "✅ Batch finished: {} charged, {} rejected",
        charged,
        results.len() - charged
    );

    Ok(results)
}
