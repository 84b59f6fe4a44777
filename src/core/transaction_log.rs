use crate::domain::model::{Charge, CustomerData, PaymentData};
use crate::utils::error::Result;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// 只追加的交易紀錄檔，每次呼叫開檔、寫入、關檔
#[derive(Debug, Clone)]
pub struct TransactionLogger {
    path: PathBuf,
}

impl TransactionLogger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn log(&self, customer: &CustomerData, payment: &PaymentData, charge: &Charge) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        writeln!(file, "{} paid {}", customer.display_name(), payment.amount)?;
        writeln!(file, "Payment status: {}", charge.status)?;
        file.flush()?;

        tracing::debug!("Transaction recorded in {}", self.path.display());
        Ok(())
    }
}
