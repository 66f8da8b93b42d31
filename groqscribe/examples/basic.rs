//! Transcribe a local audio file and print the text.
//!
//! Usage: cargo run --example basic -- path/to/audio.mp3
//! Requires GROQ_API_KEY in the environment or a .env file.

use groqscribe::GroqClient;

#[tokio::main]
async fn main() -> groqscribe::Result<()> {
    let path = std::env::args()
        .nth(1)
        .expect("usage: basic <audio-file>");

    let client = GroqClient::from_env()?;
    let transcript = groqscribe::transcribe_file(&client, &path).await?;

    println!("{}", transcript.text);

    Ok(())
}
