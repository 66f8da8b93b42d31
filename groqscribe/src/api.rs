use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use tracing::{debug, info};

use crate::audio::AudioSource;
use crate::config::TranscribeOptions;
use crate::error::{Error, Result};
use crate::types::Transcript;

/// Groq's OpenAI-compatible transcription endpoint.
const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/audio/transcriptions";

/// Environment variable holding the API credential.
const API_KEY_ENV: &str = "GROQ_API_KEY";

/// Request timeout, covering upload and transcription of long audio.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

/// Capability interface for speech-to-text backends.
///
/// The driver functions in the crate root take `&dyn SpeechToText`, so
/// tests can substitute a canned implementation and never touch the
/// network.
#[async_trait]
pub trait SpeechToText: Send + Sync {
    /// Transcribe one audio upload into text and timestamped segments.
    async fn transcribe(
        &self,
        audio: AudioSource,
        options: &TranscribeOptions,
    ) -> Result<Transcript>;
}

/// Client for the Groq transcription API.
///
/// Holds the credential and a connection-pooling HTTP client; construct
/// once and pass by reference.
pub struct GroqClient {
    http: reqwest::Client,
    api_key: String,
    endpoint: String,
}

impl GroqClient {
    /// Create a client with an explicit API key. Blank keys are rejected
    /// here so the failure surfaces before any network call.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(Error::MissingApiKey);
        }

        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            api_key,
            endpoint: GROQ_API_URL.to_string(),
        })
    }

    /// Create a client from the `GROQ_API_KEY` environment variable.
    /// A `.env` file in the working directory (or any parent) is read
    /// first, and its entry wins over an already-exported variable.
    pub fn from_env() -> Result<Self> {
        // dotenv() will not override an exported variable, so the file
        // entries are read directly.
        let from_file = dotenv::dotenv_iter().ok().and_then(|entries| {
            entries
                .filter_map(|entry| entry.ok())
                .find(|(name, _)| name == API_KEY_ENV)
                .map(|(_, value)| value)
        });
        let api_key = match from_file {
            Some(key) => key,
            None => std::env::var(API_KEY_ENV).map_err(|_| Error::MissingApiKey)?,
        };
        Self::new(api_key)
    }

    /// Override the endpoint URL. Used to point tests at a local server.
    pub fn with_endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint = url.into();
        self
    }
}

#[async_trait]
impl SpeechToText for GroqClient {
    async fn transcribe(
        &self,
        audio: AudioSource,
        options: &TranscribeOptions,
    ) -> Result<Transcript> {
        let file = Part::bytes(audio.bytes).file_name(audio.filename);

        let mut form = Form::new()
            .part("file", file)
            .text("model", options.model.id())
            .text("response_format", "verbose_json")
            .text("temperature", options.temperature.to_string());

        if let Some(prompt) = &options.prompt {
            form = form.text("prompt", prompt.clone());
        }
        if let Some(code) = options.language.code() {
            form = form.text("language", code.to_string());
        }

        debug!(model = options.model.id(), "sending transcription request");

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(Error::Api {
                status,
                message: body,
            });
        }

        let transcript: Transcript = serde_json::from_str(&body)?;
        info!(segments = transcript.segments.len(), "transcription received");

        Ok(transcript)
    }
}
