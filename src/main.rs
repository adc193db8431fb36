use datahub_client::utils::{logger, validation::Validate};
use datahub_client::ClientConfig;

fn main() {
    logger::init_cli_logger();

    tracing::info!("Starting datahub-client bootstrap");

    let config = match ClientConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration loading failed: {}", e);
            eprintln!("{}", e.user_friendly_message());
            eprintln!("Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e.user_friendly_message());
        eprintln!("Suggestion: {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let ctx = config.to_context();

    tracing::info!("Context configured for project {}", ctx.project());
    tracing::debug!("Outbound headers: {}", ctx.headers().len());
}
