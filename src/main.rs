use assistant_lib::config::{self, constants::default_config_path, models::Config};
use assistant_lib::{routes, state::AppState};
use std::sync::Arc;
use tower_http::trace::{DefaultMakeSpan, TraceLayer};
use tracing::{error, info, Level};

fn load_initial_config() -> anyhow::Result<Config> {
    let config = match default_config_path() {
        Some(path) => {
            info!("Loading configuration from {}", path);
            config::load_config(&path).map_err(|e| {
                anyhow::anyhow!("Failed to load YAML configuration from {}: {}", path, e)
            })?
        }
        None => {
            info!("CONFIG_FILE_PATH not set. Loading configuration from environment.");
            Config::from_env()
                .map_err(|e| anyhow::anyhow!("Failed to read configuration from environment: {}", e))?
        }
    };

    if let Err(val_errors) = config::validation::validate_config(&config) {
        error!("Configuration is invalid: {:?}. Halting.", val_errors);
        return Err(anyhow::anyhow!("Invalid config: {:?}", val_errors));
    }
    info!("Configuration validated successfully.");
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    info!("Starting scheduling assistant...");

    let config = load_initial_config()?;
    let port = config.server.port;
    info!(
        model = %config.model.model,
        scheduling_base_url = %config.scheduling.base_url,
        event_type_id = config.scheduling.event_type_id,
        "Clients configured"
    );

    let app_state = Arc::new(
        AppState::new(config).map_err(|e| anyhow::anyhow!("Failed to create app state: {}", e))?,
    );

    let app_with_tracing = routes::create_router(app_state).layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_response(()),
    );

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to port {}: {}", port, e))?;

    info!("Server is running on port {}", port);
    axum::serve(listener, app_with_tracing.into_make_service()).await?;

    Ok(())
}
