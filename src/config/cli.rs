use crate::config::Settings;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "charge-flow")]
#[command(about = "Validate, charge, notify and log payment transactions")]
pub struct CliArgs {
    /// Path to TOML configuration file (defaults to ./charge-flow.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// JSON file with an array of {customer, payment} objects; runs the demo when omitted
    #[arg(short, long)]
    pub transactions: Option<PathBuf>,

    /// Override log.path from config
    #[arg(long)]
    pub log_file: Option<String>,

    /// Override provider.api_base from config
    #[arg(long)]
    pub api_base: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}

impl CliArgs {
    /// 命令列參數優先於設定檔
    pub fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(path) = &self.log_file {
            tracing::info!("🔧 Transaction log overridden to: {}", path);
            settings.log.path = path.clone();
        }
        if let Some(api_base) = &self.api_base {
            tracing::info!("🔧 Provider API base overridden to: {}", api_base);
            settings.provider.api_base = api_base.clone();
        }
    }
}
