use std::path::PathBuf;

use clap::{CommandFactory, Parser, ValueEnum};
use groqscribe::{GroqClient, Model, TranscribeOptions};

#[derive(Parser)]
#[command(
    name = "groqscribe",
    about = "Transcribe an audio file to text, WebVTT, and SRT via the Groq API"
)]
struct Cli {
    /// Path to the audio file to transcribe.
    file_path: PathBuf,

    /// Whisper model to use.
    #[arg(short, long, default_value = "w")]
    model: ModelArg,

    /// Prompt to guide spelling, style, or domain vocabulary.
    #[arg(short, long)]
    prompt: Option<String>,

    /// Language code (e.g. "en", "de"); auto-detected when omitted.
    #[arg(short, long)]
    language: Option<String>,

    /// Sampling temperature.
    #[arg(short, long, default_value = "0.0")]
    temperature: f32,
}

#[derive(Clone, ValueEnum)]
enum ModelArg {
    /// distil-whisper-large-v3-en (English-only, faster)
    D,
    /// whisper-large-v3 (multilingual)
    W,
}

impl From<ModelArg> for Model {
    fn from(arg: ModelArg) -> Self {
        match arg {
            ModelArg::D => Model::DistilWhisperLargeV3En,
            ModelArg::W => Model::WhisperLargeV3,
        }
    }
}

#[tokio::main]
async fn main() {
    // A bare invocation shows help and exits cleanly; argument errors
    // still exit with the usual usage status.
    if std::env::args_os().len() <= 1 {
        let _ = Cli::command().print_help();
        return;
    }

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("groqscribe=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    // The credential is checked before the input file is read or any
    // request goes out.
    let client = match GroqClient::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let mut options = TranscribeOptions::new()
        .model(cli.model.into())
        .temperature(cli.temperature);
    if let Some(prompt) = cli.prompt {
        options = options.prompt(prompt);
    }
    if let Some(language) = &cli.language {
        options = options.language(language);
    }

    let result = groqscribe::transcribe_to_files(&client, &cli.file_path, &options).await;

    let (transcript, files) = match result {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    eprintln!(
        "Transcription complete: {} segments, model: {}",
        transcript.segments.len(),
        options.model,
    );

    println!("{}", transcript.text);

    eprintln!(
        "Written to {}, {}, {}",
        files.txt.display(),
        files.vtt.display(),
        files.srt.display()
    );
}
