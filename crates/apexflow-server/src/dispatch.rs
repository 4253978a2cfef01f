//! Assistant turn dispatch.
//!
//! The latest user message goes through the intent parser first. A parsed
//! automation is returned for confirmation without contacting the relay;
//! anything else is forwarded as chat.

use apexflow_core::AutomationDetails;
use apexflow_relay::{ChatMessage, ChatRequest};
use apexflow_telemetry::Metrics;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::state::AppState;

/// Outcome of one assistant turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AssistantReply {
    /// Automation awaiting user confirmation.
    Automation { automation: AutomationDetails },
    /// Chat reply. `error` marks a synthetic reply standing in for a
    /// failed relay call.
    Reply {
        message: ChatMessage,
        #[serde(default, skip_serializing_if = "std::ops::Not::not")]
        error: bool,
    },
}

/// Run the intent parser on `prompt` and record the outcome.
pub fn parse_prompt(state: &AppState, prompt: &str) -> Option<AutomationDetails> {
    let automation = state.parser().parse(prompt);
    Metrics::intent_parsed(automation.as_ref().map(|a| a.action.as_str()));
    automation
}

/// Handle one assistant turn.
pub async fn dispatch(state: &AppState, request: &ChatRequest) -> AssistantReply {
    if let Some(prompt) = request.latest_user_message() {
        if let Some(automation) = parse_prompt(state, prompt) {
            debug!(summary = %automation.summary, "Returning automation for confirmation");
            return AssistantReply::Automation { automation };
        }
    }

    match state.relay().reply(request).await {
        Ok(content) => AssistantReply::Reply {
            message: ChatMessage::assistant(content),
            error: false,
        },
        Err(e) => {
            warn!(error = %e, status = e.status_code(), "Relay failed, replying with error message");
            AssistantReply::Reply {
                message: e.as_assistant_message(),
                error: true,
            }
        }
    }
}
