use case_maintenance::utils::{logger, validation::Validate};
use case_maintenance::{router, AppState, CliConfig, ServiceConfig};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 設定檔載入失敗時日誌尚未初始化，只能直接輸出
    let config = match ServiceConfig::from_file(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load {}: {}", cli.config, e);
            std::process::exit(1);
        }
    };

    let verbose = cli.verbose || config.verbose_logs();
    if cli.json_logs || config.json_logs() {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::info!("Starting case-maintenance service");
    if verbose {
        tracing::debug!("Service config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {} (Category: {:?})", e, e.category());
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let state = match AppState::from_config(&config) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("❌ Failed to build upstream clients: {}", e);
            std::process::exit(3);
        }
    };

    let bind_address = cli
        .bind
        .clone()
        .unwrap_or_else(|| config.bind_address().to_string());
    let listener = match tokio::net::TcpListener::bind(&bind_address).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("❌ Cannot bind {}: {}", bind_address, e);
            std::process::exit(2);
        }
    };

    tracing::info!("🚀 Listening on {}", bind_address);
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("✅ Shut down cleanly");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("❌ Failed to listen for shutdown signal: {}", e);
    }
}
