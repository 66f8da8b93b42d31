use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

/// Raw audio ready for upload: the file's bytes plus the filename the
/// service uses as a format hint.
///
/// Nothing is decoded or validated locally. The service accepts the common
/// containers (mp3, wav, m4a, ogg, flac, webm) and rejects anything it
/// cannot read.
#[derive(Debug, Clone)]
pub struct AudioSource {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl AudioSource {
    /// Read an audio file into memory.
    pub fn read(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::AudioNotFound {
                path: path.to_path_buf(),
            });
        }

        let bytes = std::fs::read(path)?;
        let filename = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("audio")
            .to_string();

        debug!(file = %filename, bytes = bytes.len(), "loaded audio file");

        Ok(Self { filename, bytes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_read_loads_bytes_and_filename() {
        let tmp = std::env::temp_dir().join("groqscribe_test_audio.mp3");
        fs::write(&tmp, b"not really an mp3").unwrap();

        let audio = AudioSource::read(&tmp).unwrap();
        assert_eq!(audio.filename, "groqscribe_test_audio.mp3");
        assert_eq!(audio.bytes, b"not really an mp3");

        fs::remove_file(&tmp).ok();
    }

    #[test]
    fn test_read_missing_file() {
        let result = AudioSource::read(Path::new("/nonexistent/dir/audio.mp3"));
        assert!(matches!(result.unwrap_err(), Error::AudioNotFound { .. }));
    }

    #[test]
    fn test_read_empty_file() {
        let tmp = std::env::temp_dir().join("groqscribe_test_empty.wav");
        fs::write(&tmp, b"").unwrap();

        let audio = AudioSource::read(&tmp).unwrap();
        assert!(audio.bytes.is_empty());

        fs::remove_file(&tmp).ok();
    }
}
