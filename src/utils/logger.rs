use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn default_filter(verbose: bool) -> EnvFilter {
    let directives = if verbose {
        "birthday_countdown=debug,info"
    } else {
        "birthday_countdown=info"
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives))
}

pub fn init_cli_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(default_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .init();
}

/// JSON output for the serverless runtime's log aggregation.
pub fn init_lambda_logger() {
    tracing_subscriber::registry()
        .with(default_filter(false))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .json(),
        )
        .init();
}
