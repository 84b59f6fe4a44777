use charge_flow::app::runner::{demo_transactions, load_transactions, run_batch};
use charge_flow::utils::{logger, validation::Validate};
use charge_flow::{CliArgs, PaymentService, Settings};
use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // 初始化日誌
    if args.json_logs {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("Starting charge-flow");

    // 設定只在啟動時載入一次
    let mut settings = Settings::load(args.config.as_deref())?;
    args.apply_overrides(&mut settings);

    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    if !settings.has_api_key() {
        tracing::warn!("⚠️ No payment provider API key configured; charges will fail");
    }
    tracing::debug!(
        "Provider: {}, transaction log: {}, notification: {:?}",
        settings.provider.api_base,
        settings.log.path,
        settings.notification.channel
    );

    let requests = match &args.transactions {
        Some(path) => {
            tracing::info!("📁 Loading transactions from: {}", path.display());
            load_transactions(path)?
        }
        None => demo_transactions(),
    };

    let service = PaymentService::stripe(&settings)?;

    match run_batch(&service, &requests).await {
        Ok(results) => {
            for charge in results.iter().flatten() {
                tracing::debug!("Charge result: {:?}", charge);
            }
            Ok(())
        }
        Err(e) => {
            tracing::error!("❌ Transaction processing aborted: {}", e);
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            Err(e.into())
        }
    }
}
