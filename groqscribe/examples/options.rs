//! Transcribe with an explicit model, language, and prompt, then print the
//! timestamped segments.
//!
//! Usage: cargo run --example options -- path/to/audio.mp3

use groqscribe::{GroqClient, Model, TranscribeOptions};

#[tokio::main]
async fn main() -> groqscribe::Result<()> {
    let path = std::env::args()
        .nth(1)
        .expect("usage: options <audio-file>");

    let client = GroqClient::from_env()?;
    let options = TranscribeOptions::new()
        .model(Model::DistilWhisperLargeV3En)
        .language("en")
        .prompt("Technical podcast about fermentation.");

    let transcript = groqscribe::transcribe_file_with_options(&client, &path, &options).await?;

    for segment in &transcript.segments {
        println!(
            "[{:7.2}s - {:7.2}s] {}",
            segment.start,
            segment.end,
            segment.text.trim()
        );
    }

    Ok(())
}
