use birthday_countdown::utils::{logger, validation::Validate};
use birthday_countdown::ServerConfig;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting birthday-countdown server");
    if config.verbose {
        tracing::debug!("Server config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("🚀 API available at http://{}/api/nextbirthday", addr);

    axum::serve(listener, birthday_countdown::api::router()).await?;

    Ok(())
}
