use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;
use crate::types::Transcript;

/// Paths of the three artifacts written for one input file.
#[derive(Debug, Clone)]
pub struct OutputFiles {
    pub txt: PathBuf,
    pub vtt: PathBuf,
    pub srt: PathBuf,
}

/// Write the transcript next to the input file as `.txt`, `.vtt`, and
/// `.srt`, each derived by replacing the input's extension.
///
/// Existing files are overwritten. The three writes happen in that order
/// with no rollback: if one fails, files already written stay on disk.
pub fn write_transcript_files(input: &Path, transcript: &Transcript) -> Result<OutputFiles> {
    let txt = input.with_extension("txt");
    std::fs::write(&txt, &transcript.text)?;
    debug!(path = %txt.display(), "wrote transcript text");

    let vtt = input.with_extension("vtt");
    std::fs::write(&vtt, transcript.to_vtt())?;
    debug!(path = %vtt.display(), "wrote WebVTT subtitles");

    let srt = input.with_extension("srt");
    std::fs::write(&srt, transcript.to_srt())?;
    debug!(path = %srt.display(), "wrote SRT subtitles");

    Ok(OutputFiles { txt, vtt, srt })
}
