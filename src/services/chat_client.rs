use std::env;
use std::fmt;

use futures::StreamExt;
use serde_json::json;

const DEFAULT_BASE_URL: &str = "https://api-inference.modelscope.cn/v1";
const DEFAULT_MODEL: &str = "deepseek-ai/DeepSeek-V3.2-Exp";

#[derive(Debug)]
pub enum GenerationError {
    EnvironmentError(String),
    HttpError(reqwest::Error),
    ApiError { status: u16, body: String },
    StreamError(String),
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationError::EnvironmentError(msg) => write!(f, "Environment error: {}", msg),
            GenerationError::HttpError(err) => write!(f, "HTTP error: {}", err),
            GenerationError::ApiError { status, body } => {
                write!(f, "API error ({}): {}", status, body)
            }
            GenerationError::StreamError(msg) => write!(f, "Stream error: {}", msg),
        }
    }
}

impl std::error::Error for GenerationError {}

impl From<reqwest::Error> for GenerationError {
    fn from(err: reqwest::Error) -> Self {
        GenerationError::HttpError(err)
    }
}

/// Endpoint, credential and model identifier for the chat-completion API.
/// Passed into the client at construction time instead of living in globals.
#[derive(Debug, Clone)]
pub struct ChatConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

impl ChatConfig {
    pub fn from_env() -> Result<Self, GenerationError> {
        let api_key = env::var("CHAT_API_KEY")
            .map_err(|_| GenerationError::EnvironmentError("CHAT_API_KEY not set".to_string()))?;
        let base_url =
            env::var("CHAT_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model = env::var("CHAT_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Ok(Self {
            base_url,
            api_key,
            model,
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SamplingParams {
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Clone)]
pub struct ChatClient {
    client: reqwest::Client,
    config: ChatConfig,
}

impl ChatClient {
    pub fn new(config: ChatConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Runs one chat completion with `stream: true` and accumulates the token
    /// deltas into the full reply. Returns only after the stream has ended;
    /// no partial results are surfaced. No retries, and no timeout beyond the
    /// transport default.
    pub async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        params: SamplingParams,
    ) -> Result<String, GenerationError> {
        let url = if self.config.base_url.ends_with('/') {
            format!("{}chat/completions", self.config.base_url)
        } else {
            format!("{}/chat/completions", self.config.base_url)
        };

        let body = json!({
            "model": self.config.model,
            "messages": [
                {
                    "role": "system",
                    "content": system_prompt
                },
                {
                    "role": "user",
                    "content": user_prompt
                }
            ],
            "stream": true,
            "temperature": params.temperature,
            "max_tokens": params.max_tokens,
        });

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::ApiError { status, body });
        }

        let mut stream = response.bytes_stream();
        let mut accumulator = EventAccumulator::new();

        while let Some(chunk) = stream.next().await {
            accumulator.push_chunk(&chunk?)?;
        }

        accumulator.finish()
    }
}

/// Collects raw stream bytes and folds completed events into the reply text.
/// Network chunks can end mid-character, so bytes are decoded only once a
/// full line is available; a partial multi-byte character is held back with
/// its partial line instead of being decoded early.
struct EventAccumulator {
    pending: Vec<u8>,
    text: String,
}

impl EventAccumulator {
    fn new() -> Self {
        Self {
            pending: Vec::new(),
            text: String::new(),
        }
    }

    fn push_chunk(&mut self, chunk: &[u8]) -> Result<(), GenerationError> {
        self.pending.extend_from_slice(chunk);
        while let Some(pos) = self.pending.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = self.pending.drain(..=pos).collect();
            self.consume_line(&line)?;
        }
        Ok(())
    }

    fn finish(mut self) -> Result<String, GenerationError> {
        let leftover = std::mem::take(&mut self.pending);
        self.consume_line(&leftover)?;
        Ok(self.text)
    }

    fn consume_line(&mut self, raw: &[u8]) -> Result<(), GenerationError> {
        let line = String::from_utf8_lossy(raw);
        if let Some(delta) = parse_event_line(line.trim())? {
            self.text.push_str(&delta);
        }
        Ok(())
    }
}

/// Pulls the `choices[0].delta.content` fragment out of one server-sent-event
/// line, ignoring keep-alives and the terminal `[DONE]` marker.
fn parse_event_line(line: &str) -> Result<Option<String>, GenerationError> {
    let payload = match line.strip_prefix("data:") {
        Some(rest) => rest.trim(),
        None => return Ok(None),
    };

    if payload.is_empty() || payload == "[DONE]" {
        return Ok(None);
    }

    let value: serde_json::Value = serde_json::from_str(payload)
        .map_err(|err| GenerationError::StreamError(format!("Unparsable stream event: {}", err)))?;

    Ok(value["choices"][0]["delta"]["content"]
        .as_str()
        .map(|s| s.to_string()))
}
