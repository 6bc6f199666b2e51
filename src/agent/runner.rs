//! Bounded tool-calling loop.

use std::sync::Arc;

use rmcp::handler::server::wrapper::Parameters;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{json, Value};

use crate::{
    agent::model::{ChatMessage, ChatModel, ToolCall, ToolSpec},
    error::Result,
    mcp::{GetTokenAddressInput, GetTokenSymbolInput, SwapTokensInput, TokenSwapServer},
};

/// Persona given to the model on every conversation.
pub const SYSTEM_PROMPT: &str = "You are a stall keeper at a night market who can swap tokens \
     for visitors on Celo and Rootstock. Be quirky and fun. No text formatting, just keep it \
     simple plain text.";

/// One executed tool call.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolResult {
    pub tool_call_id: String,
    pub tool_name: String,
    pub args: Value,
    pub result: Value,
}

/// Final answer of an agent run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentReply {
    /// Last text produced by the model.
    pub response: String,
    /// Tool results, one list per model step.
    pub tool_results: Vec<Vec<ToolResult>>,
}

/// Conversational agent that can call the swap tools.
#[derive(Clone)]
pub struct MarketAgent {
    server: TokenSwapServer,
    model: Arc<dyn ChatModel>,
    tools: Vec<ToolSpec>,
    max_steps: usize,
}

impl MarketAgent {
    /// Create an agent offering every tool of `server`.
    pub fn new(server: TokenSwapServer, model: Arc<dyn ChatModel>, max_steps: usize) -> Self {
        let tools = server.tools().iter().map(ToolSpec::from).collect();
        Self { server, model, tools, max_steps: max_steps.max(1) }
    }

    /// Answer one prompt, executing tool calls until the model replies with
    /// plain text or the step budget runs out.
    ///
    /// `is_rootstock` is passed to tools whose arguments leave it unset.
    pub async fn run(&self, prompt: &str, is_rootstock: Option<bool>) -> Result<AgentReply> {
        let mut messages = vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(prompt)];
        let mut tool_results = Vec::new();
        let mut response = String::new();

        for step in 0..self.max_steps {
            let reply = self.model.complete(&messages, &self.tools).await?;
            let calls = reply.requested_calls().to_vec();
            response = reply.content.clone().unwrap_or_default();
            messages.push(reply);

            let mut step_results = Vec::with_capacity(calls.len());
            for call in &calls {
                let executed = self.execute(call, is_rootstock).await;
                messages.push(ChatMessage::tool(&call.id, executed.result.to_string()));
                step_results.push(executed);
            }

            tracing::info!(step, tool_calls = step_results.len(), "Agent step finished");
            tool_results.push(step_results);

            if calls.is_empty() {
                return Ok(AgentReply { response, tool_results });
            }
        }

        tracing::warn!(max_steps = self.max_steps, "Agent stopped at step limit");
        Ok(AgentReply { response, tool_results })
    }

    async fn execute(&self, call: &ToolCall, is_rootstock: Option<bool>) -> ToolResult {
        let name = call.function.name.as_str();

        let args = match parse_arguments(&call.function.arguments, is_rootstock) {
            Ok(args) => args,
            Err(message) => {
                tracing::warn!(tool = %name, error = %message, "Bad tool arguments");
                return ToolResult {
                    tool_call_id: call.id.clone(),
                    tool_name: name.to_string(),
                    args: Value::String(call.function.arguments.clone()),
                    result: json!({ "error": message }),
                };
            }
        };

        let outcome = match name {
            "swap_tokens" => match decode::<SwapTokensInput>(&args) {
                Ok(input) => self.server.swap_tokens(Parameters(input)).await,
                Err(e) => Err(e),
            },
            "get_token_address" => match decode::<GetTokenAddressInput>(&args) {
                Ok(input) => self.server.get_token_address(Parameters(input)).await,
                Err(e) => Err(e),
            },
            "get_token_symbol" => match decode::<GetTokenSymbolInput>(&args) {
                Ok(input) => self.server.get_token_symbol(Parameters(input)).await,
                Err(e) => Err(e),
            },
            other => Err(rmcp::ErrorData::invalid_params(format!("Unknown tool: {}", other), None)),
        };

        let result = match outcome {
            Ok(text) => serde_json::from_str(&text).unwrap_or(Value::String(text)),
            Err(err) => json!({ "error": err.message }),
        };

        tracing::debug!(tool = %name, result = %result, "Tool executed");

        ToolResult { tool_call_id: call.id.clone(), tool_name: name.to_string(), args, result }
    }
}

/// Decode tool arguments and fill in `isRootstock` from the request.
fn parse_arguments(raw: &str, is_rootstock: Option<bool>) -> std::result::Result<Value, String> {
    let mut args = if raw.trim().is_empty() {
        json!({})
    } else {
        serde_json::from_str::<Value>(raw).map_err(|e| format!("Arguments are not JSON: {}", e))?
    };

    let object =
        args.as_object_mut().ok_or_else(|| "Arguments must be a JSON object".to_string())?;

    if let Some(flag) = is_rootstock {
        let unset = object.get("isRootstock").map_or(true, Value::is_null);
        if unset {
            object.insert("isRootstock".to_string(), Value::Bool(flag));
        }
    }

    Ok(args)
}

fn decode<T: DeserializeOwned>(args: &Value) -> std::result::Result<T, rmcp::ErrorData> {
    T::deserialize(args).map_err(|e| {
        rmcp::ErrorData::invalid_params(format!("Invalid arguments: {}", e), None)
    })
}
