//! Print a transcript as SRT and WebVTT without writing any files.
//!
//! Usage: cargo run --example formats -- path/to/audio.mp3

use groqscribe::GroqClient;

#[tokio::main]
async fn main() -> groqscribe::Result<()> {
    let path = std::env::args()
        .nth(1)
        .expect("usage: formats <audio-file>");

    let client = GroqClient::from_env()?;
    let transcript = groqscribe::transcribe_file(&client, &path).await?;

    println!("=== SRT ===");
    println!("{}", transcript.to_srt());
    println!("=== WebVTT ===");
    println!("{}", transcript.to_vtt());

    Ok(())
}
