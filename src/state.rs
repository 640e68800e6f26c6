use crate::config::models::Config;
use crate::conversation::Orchestrator;
use crate::providers::{OpenAIProvider, Provider};
use crate::scheduling::{CalClient, SchedulingClient};
use crate::tools::ToolDispatcher;
use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub orchestrator: Arc<Orchestrator>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let timeout = Duration::from_secs(config.server.request_timeout_secs);
        let provider = Arc::new(OpenAIProvider::new(&config.model, timeout)?);
        let scheduler = Arc::new(CalClient::new(&config.scheduling, timeout)?);
        Ok(Self::with_clients(config, provider, scheduler))
    }

    /// Builds the state around already-constructed clients.
    pub fn with_clients(
        config: Config,
        provider: Arc<dyn Provider>,
        scheduler: Arc<dyn SchedulingClient>,
    ) -> Self {
        let orchestrator = Orchestrator::new(
            provider,
            ToolDispatcher::new(scheduler),
            config.model.model.clone(),
        );

        Self {
            config: Arc::new(config),
            orchestrator: Arc::new(orchestrator),
        }
    }
}
