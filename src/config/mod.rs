pub mod toml_config;

pub use toml_config::ServiceConfig;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "case-maintenance")]
#[command(about = "Case maintenance service for divorce petitions")]
pub struct CliConfig {
    #[arg(long, default_value = "config/case-maintenance.toml")]
    pub config: String,

    #[arg(long, help = "Override the bind address from the config file")]
    pub bind: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit JSON logs")]
    pub json_logs: bool,
}
