//! LLM Client: the single point of entry for all Claude API calls in the job board.
//!
//! ARCHITECTURAL RULE: No other module may call the Anthropic API directly.
//! Skill extraction and talent matching both go through this module.
//!
//! Model: claude-sonnet-4-5 (hardcoded, not configurable)
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
/// The model used for all LLM calls.
pub const MODEL: &str = "claude-sonnet-4-5";
const MAX_TOKENS: u32 = 2048;
const MAX_RETRIES: u32 = 3;
/// Upper bound on model ↔ tool round trips in a single `call_json_with_tools`.
const MAX_TOOL_ROUNDS: usize = 4;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Rate limited after {retries} retries")]
    RateLimited { retries: u32 },

    #[error("LLM returned empty content")]
    EmptyContent,

    #[error("Tool '{name}' failed: {message}")]
    Tool { name: String, message: String },

    #[error("Model kept requesting tools after {rounds} rounds")]
    ToolLoop { rounds: usize },
}

/// A tool the model may call during a conversation.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Value,
}

#[derive(Debug, Serialize)]
pub(crate) struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: &'a [AnthropicMessage],
    #[serde(skip_serializing_if = "no_tools")]
    tools: &'a [ToolDefinition],
}

fn no_tools(tools: &&[ToolDefinition]) -> bool {
    tools.is_empty()
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct AnthropicMessage {
    role: &'static str,
    content: Value,
}

#[derive(Debug, Deserialize)]
pub struct LlmResponse {
    pub content: Vec<ContentBlock>,
    #[serde(default)]
    pub stop_reason: Option<String>,
    pub usage: Usage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl LlmResponse {
    /// Extracts the text content from the first text block.
    pub fn text(&self) -> Option<&str> {
        self.content
            .iter()
            .find(|b| b.block_type == "text")
            .and_then(|b| b.text.as_deref())
    }

    /// The `tool_use` blocks the model emitted, in order.
    pub fn tool_uses(&self) -> impl Iterator<Item = &ContentBlock> {
        self.content.iter().filter(|b| b.block_type == "tool_use")
    }

    pub fn wants_tools(&self) -> bool {
        self.stop_reason.as_deref() == Some("tool_use")
    }
}

#[derive(Debug, Deserialize)]
struct AnthropicError {
    error: AnthropicErrorBody,
}

#[derive(Debug, Deserialize)]
struct AnthropicErrorBody {
    message: String,
}

/// One Messages API round trip. `HttpTransport` is the real one; tests script
/// responses through their own implementation.
#[async_trait]
pub(crate) trait MessagesTransport: Send + Sync {
    async fn create_message(&self, request: &AnthropicRequest<'_>)
        -> Result<LlmResponse, LlmError>;
}

/// The single LLM client used by all collaborators.
/// Wraps the Anthropic Messages API with a tool-use loop and structured output
/// helpers.
#[derive(Clone)]
pub struct LlmClient {
    transport: Arc<dyn MessagesTransport>,
}

impl LlmClient {
    pub fn new(api_key: String) -> Result<Self, LlmError> {
        Ok(Self::with_transport(Arc::new(HttpTransport::new(api_key)?)))
    }

    pub(crate) fn with_transport(transport: Arc<dyn MessagesTransport>) -> Self {
        Self { transport }
    }

    /// Makes a raw single-turn call to the Claude API.
    pub async fn call(&self, prompt: &str, system: &str) -> Result<LlmResponse, LlmError> {
        let messages = [user_text(prompt)];
        self.send(system, &messages, &[]).await
    }

    /// Calls the LLM and deserializes the text response as JSON.
    /// The prompt must instruct the model to return valid JSON.
    pub async fn call_json<T: DeserializeOwned>(
        &self,
        prompt: &str,
        system: &str,
    ) -> Result<T, LlmError> {
        let response = self.call(prompt, system).await?;
        parse_json_text(&response)
    }

    /// Runs a conversation in which the model may call `tools`. Every tool
    /// request is answered through `run_tool(name, input)` and sent back until
    /// the model produces a final answer, which is deserialized as JSON.
    pub async fn call_json_with_tools<T, F>(
        &self,
        prompt: &str,
        system: &str,
        tools: &[ToolDefinition],
        run_tool: F,
    ) -> Result<T, LlmError>
    where
        T: DeserializeOwned,
        F: Fn(&str, &Value) -> Result<Value, String>,
    {
        let mut messages = vec![user_text(prompt)];

        for round in 0..=MAX_TOOL_ROUNDS {
            let response = self.send(system, &messages, tools).await?;

            // A tool_use stop with no tool_use block has nothing to answer.
            if !response.wants_tools() || response.tool_uses().next().is_none() {
                return parse_json_text(&response);
            }
            if round == MAX_TOOL_ROUNDS {
                break;
            }

            let results = answer_tool_uses(&response, &run_tool)?;
            debug!("Answered {} tool call(s) in round {}", results.len(), round + 1);

            messages.push(AnthropicMessage {
                role: "assistant",
                content: serde_json::to_value(&response.content)?,
            });
            messages.push(AnthropicMessage {
                role: "user",
                content: Value::Array(results),
            });
        }

        Err(LlmError::ToolLoop {
            rounds: MAX_TOOL_ROUNDS,
        })
    }

    async fn send(
        &self,
        system: &str,
        messages: &[AnthropicMessage],
        tools: &[ToolDefinition],
    ) -> Result<LlmResponse, LlmError> {
        let request = AnthropicRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            system,
            messages,
            tools,
        };
        self.transport.create_message(&request).await
    }
}

/// reqwest-backed transport against the public Messages endpoint.
struct HttpTransport {
    client: Client,
    api_key: String,
}

impl HttpTransport {
    fn new(api_key: String) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()?,
            api_key,
        })
    }
}

#[async_trait]
impl MessagesTransport for HttpTransport {
    /// Retries on 429 (rate limit) and 5xx errors with exponential backoff.
    async fn create_message(
        &self,
        request: &AnthropicRequest<'_>,
    ) -> Result<LlmResponse, LlmError> {
        let mut last_error: Option<LlmError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s, 4s
                let delay = std::time::Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "LLM call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = self
                .client
                .post(ANTHROPIC_API_URL)
                .header("x-api-key", &self.api_key)
                .header("anthropic-version", ANTHROPIC_VERSION)
                .header("content-type", "application/json")
                .json(request)
                .send()
                .await;

            let response = match response {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(LlmError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("LLM API returned {}: {}", status, body);
                last_error = Some(LlmError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                let message = serde_json::from_str::<AnthropicError>(&body)
                    .map(|e| e.error.message)
                    .unwrap_or(body);
                return Err(LlmError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let llm_response: LlmResponse = response.json().await?;

            debug!(
                "LLM call succeeded: input_tokens={}, output_tokens={}, stop_reason={:?}",
                llm_response.usage.input_tokens,
                llm_response.usage.output_tokens,
                llm_response.stop_reason
            );

            return Ok(llm_response);
        }

        Err(last_error.unwrap_or(LlmError::RateLimited {
            retries: MAX_RETRIES,
        }))
    }
}

fn user_text(prompt: &str) -> AnthropicMessage {
    AnthropicMessage {
        role: "user",
        content: Value::String(prompt.to_string()),
    }
}

fn parse_json_text<T: DeserializeOwned>(response: &LlmResponse) -> Result<T, LlmError> {
    let text = response.text().ok_or(LlmError::EmptyContent)?;
    serde_json::from_str(strip_json_fences(text)).map_err(LlmError::Parse)
}

/// Runs every `tool_use` block through `run_tool` and builds the matching
/// `tool_result` blocks. A tool failure is reported back to the model as an
/// error result; a malformed block aborts the conversation.
fn answer_tool_uses<F>(response: &LlmResponse, run_tool: &F) -> Result<Vec<Value>, LlmError>
where
    F: Fn(&str, &Value) -> Result<Value, String>,
{
    let empty_input = Value::Object(Default::default());

    response
        .tool_uses()
        .map(|block| {
            let (Some(id), Some(name)) = (block.id.as_deref(), block.name.as_deref()) else {
                return Err(LlmError::Tool {
                    name: block.name.clone().unwrap_or_default(),
                    message: "tool_use block without id or name".to_string(),
                });
            };
            let input = block.input.as_ref().unwrap_or(&empty_input);

            Ok(match run_tool(name, input) {
                Ok(output) => json!({
                    "type": "tool_result",
                    "tool_use_id": id,
                    "content": output.to_string(),
                }),
                Err(message) => {
                    warn!("Tool '{name}' failed: {message}");
                    json!({
                        "type": "tool_result",
                        "tool_use_id": id,
                        "content": message,
                        "is_error": true,
                    })
                }
            })
        })
        .collect()
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use super::*;

    /// Replays canned responses in order and records every request body.
    pub struct ScriptedTransport {
        responses: Mutex<VecDeque<LlmResponse>>,
        requests: Mutex<Vec<Value>>,
    }

    impl ScriptedTransport {
        pub fn new(responses: Vec<LlmResponse>) -> Arc<Self> {
            Arc::new(Self {
                responses: Mutex::new(responses.into()),
                requests: Mutex::default(),
            })
        }

        pub fn requests(&self) -> Vec<Value> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl MessagesTransport for ScriptedTransport {
        async fn create_message(
            &self,
            request: &AnthropicRequest<'_>,
        ) -> Result<LlmResponse, LlmError> {
            self.requests
                .lock()
                .unwrap()
                .push(serde_json::to_value(request)?);
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .ok_or(LlmError::Api {
                    status: 500,
                    message: "script exhausted".to_string(),
                })
        }
    }

    pub fn client(transport: &Arc<ScriptedTransport>) -> LlmClient {
        LlmClient::with_transport(transport.clone())
    }

    /// A final answer carrying `text`.
    pub fn text_response(text: &str) -> LlmResponse {
        serde_json::from_value(json!({
            "content": [{"type": "text", "text": text}],
            "stop_reason": "end_turn",
            "usage": {"input_tokens": 10, "output_tokens": 5}
        }))
        .unwrap()
    }

    /// A turn that asks for tool `name` under call id `id`.
    pub fn tool_use_response(id: &str, name: &str) -> LlmResponse {
        serde_json::from_value(json!({
            "content": [
                {"type": "text", "text": "Checking."},
                {"type": "tool_use", "id": id, "name": name, "input": {}}
            ],
            "stop_reason": "tool_use",
            "usage": {"input_tokens": 10, "output_tokens": 5}
        }))
        .unwrap()
    }
}
