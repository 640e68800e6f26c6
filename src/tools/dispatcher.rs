use std::sync::Arc;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{error, info, warn};

use super::{ToolError, ToolName, ToolOutcome};
use crate::models::booking::BookingResponses;
use crate::scheduling::SchedulingClient;

#[derive(Debug, Deserialize)]
struct BookEventArgs {
    start: String,
    responses: BookingResponses,
    #[serde(rename = "timeZone")]
    time_zone: String,
    language: String,
}

#[derive(Debug, Deserialize)]
struct CancelEventArgs {
    event_time: String,
    email: String,
}

fn parse_args<T: DeserializeOwned>(tool: ToolName, args: &Value) -> Result<T, ToolError> {
    serde_json::from_value(args.clone()).map_err(|e| ToolError::InvalidArguments {
        tool,
        message: e.to_string(),
    })
}

/// Routes tool calls requested by the model to the scheduling client.
///
/// Never fails: every error is turned into text the model can read.
#[derive(Clone)]
pub struct ToolDispatcher {
    client: Arc<dyn SchedulingClient>,
}

impl ToolDispatcher {
    pub fn new(client: Arc<dyn SchedulingClient>) -> Self {
        Self { client }
    }

    pub async fn dispatch(&self, name: &str, args: &Value) -> ToolOutcome {
        let tool = match name.parse::<ToolName>() {
            Ok(tool) => tool,
            Err(e) => {
                warn!(tool = name, "Model requested an undeclared tool");
                return ToolOutcome::Failure(e.to_string());
            }
        };

        match self.execute(tool, args).await {
            Ok(text) => {
                info!(tool = %tool, "Tool call succeeded");
                ToolOutcome::Success(text)
            }
            Err(e) => {
                error!(tool = %tool, error = %e, "Tool call failed");
                ToolOutcome::Failure(e.to_string())
            }
        }
    }

    async fn execute(&self, tool: ToolName, args: &Value) -> Result<String, ToolError> {
        match tool {
            ToolName::BookEvent => {
                let args: BookEventArgs = parse_args(tool, args)?;
                let confirmation = self
                    .client
                    .create(&args.start, args.responses, &args.time_zone, &args.language)
                    .await?;
                Ok(confirmation.to_string())
            }
            ToolName::ListEvents => Ok(self.client.list().await?.to_string()),
            ToolName::CancelEvent => {
                let args: CancelEventArgs = parse_args(tool, args)?;
                let outcome = self.client.cancel(&args.event_time, &args.email).await?;
                Ok(outcome.to_string())
            }
        }
    }
}
