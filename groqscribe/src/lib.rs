//! Remote speech-to-text: audio file in, transcript plus subtitles out.
//!
//! groqscribe uploads a local audio file to Groq's whisper API and renders
//! the result in three formats next to the input: plain text (`.txt`),
//! WebVTT (`.vtt`), and SubRip (`.srt`).
//!
//! # Quick start
//!
//! ```rust,no_run
//! # #[tokio::main]
//! # async fn main() -> groqscribe::Result<()> {
//! use groqscribe::{GroqClient, TranscribeOptions};
//!
//! let client = GroqClient::from_env()?;
//! let options = TranscribeOptions::new().language("en");
//!
//! let (transcript, files) =
//!     groqscribe::transcribe_to_files(&client, "meeting.mp3", &options).await?;
//!
//! println!("{}", transcript.text);
//! println!("subtitles at {}", files.srt.display());
//! # Ok(())
//! # }
//! ```
//!
//! The backend is behind the [`SpeechToText`] trait, so anything that can
//! produce a [`Transcript`] from audio bytes plugs into the same pipeline.

pub mod api;
pub mod audio;
pub mod config;
pub mod error;
pub mod output;
pub mod types;

pub use api::{GroqClient, SpeechToText};
pub use audio::AudioSource;
pub use config::{Language, Model, TranscribeOptions};
pub use error::{Error, Result};
pub use output::{write_transcript_files, OutputFiles};
pub use types::{Segment, Transcript};

use std::path::Path;

use tracing::info;

/// Transcribe a local audio file with default options.
pub async fn transcribe_file(
    client: &dyn SpeechToText,
    path: impl AsRef<Path>,
) -> Result<Transcript> {
    transcribe_file_with_options(client, path, &TranscribeOptions::default()).await
}

/// Transcribe a local audio file with custom options.
///
/// Reads the whole file into memory and issues a single request; there are
/// no retries.
pub async fn transcribe_file_with_options(
    client: &dyn SpeechToText,
    path: impl AsRef<Path>,
    options: &TranscribeOptions,
) -> Result<Transcript> {
    let path = path.as_ref();
    let audio = AudioSource::read(path)?;

    info!(file = %path.display(), model = options.model.id(), "transcribing");
    client.transcribe(audio, options).await
}

/// Transcribe a local audio file and write the `.txt`, `.vtt`, and `.srt`
/// siblings next to it.
///
/// Nothing is written unless transcription succeeds.
pub async fn transcribe_to_files(
    client: &dyn SpeechToText,
    path: impl AsRef<Path>,
    options: &TranscribeOptions,
) -> Result<(Transcript, OutputFiles)> {
    let path = path.as_ref();

    let transcript = transcribe_file_with_options(client, path, options).await?;
    let files = output::write_transcript_files(path, &transcript)?;

    Ok((transcript, files))
}
