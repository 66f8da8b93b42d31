use std::fmt;

/// Whisper models served by the transcription API.
#[derive(Debug, Clone)]
pub enum Model {
    /// `whisper-large-v3`, multilingual.
    WhisperLargeV3,
    /// `distil-whisper-large-v3-en`, English-only and faster.
    DistilWhisperLargeV3En,
}

impl Model {
    /// Model identifier as the API expects it.
    pub fn id(&self) -> &'static str {
        match self {
            Model::WhisperLargeV3 => "whisper-large-v3",
            Model::DistilWhisperLargeV3En => "distil-whisper-large-v3-en",
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Language hint for transcription.
///
/// Use `Language::Auto` to let the service detect the language from the
/// audio, or `Language::new("en")` for a specific one. Codes are passed
/// through as-is; validation is the service's job.
#[derive(Debug, Clone)]
pub enum Language {
    /// Auto-detect language from audio.
    Auto,
    /// An ISO 639-1 code (e.g. "en", "de", "ja").
    Code(String),
}

impl Language {
    /// Create a language hint from a code. An empty string or "auto" (any
    /// case) means auto-detection.
    pub fn new(lang: &str) -> Self {
        let code = lang.trim();
        if code.is_empty() || code.eq_ignore_ascii_case("auto") {
            Language::Auto
        } else {
            Language::Code(code.to_string())
        }
    }

    /// Get the language code to send with the request, or None for Auto.
    pub fn code(&self) -> Option<&str> {
        match self {
            Language::Auto => None,
            Language::Code(code) => Some(code),
        }
    }

    /// Whether this is auto-detection mode.
    pub fn is_auto(&self) -> bool {
        matches!(self, Language::Auto)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Auto => write!(f, "auto"),
            Language::Code(code) => write!(f, "{code}"),
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::Auto
    }
}

/// Builder for transcription options.
pub struct TranscribeOptions {
    pub model: Model,
    pub prompt: Option<String>,
    pub language: Language,
    pub temperature: f32,
}

impl Default for TranscribeOptions {
    fn default() -> Self {
        Self {
            model: Model::WhisperLargeV3,
            prompt: None,
            language: Language::Auto,
            temperature: 0.0,
        }
    }
}

impl TranscribeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    /// Set a prompt to guide spelling, style, or domain vocabulary.
    /// Omitted from the request when unset.
    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    /// Set the language hint. Accepts a code ("en", "de") or "auto".
    pub fn language(mut self, lang: &str) -> Self {
        self.language = Language::new(lang);
        self
    }

    /// Sampling temperature, forwarded to the service unmodified.
    pub fn temperature(mut self, temp: f32) -> Self {
        self.temperature = temp;
        self
    }
}
