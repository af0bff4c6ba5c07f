//! Atomic WAV file writer.

use std::io::Write;
use std::path::Path;

use pcmbridge_dsp::{DspError, PcmBuffer};
use tempfile::NamedTempFile;

use crate::encode::{encode_wav, samples_to_pcm16, WavFormat};
use crate::error::{WavError, WavResult};

/// Writes a float32 PCM buffer to `path` as a 16-bit PCM WAV file,
/// overwriting any existing file.
///
/// The file is staged as a temporary file in the destination directory and
/// renamed into place, so `path` either ends up holding a complete WAV or
/// is left untouched. On success the file is exactly
/// `44 + frames * channels * 2` bytes.
///
/// # Errors
/// - [`WavError::Contract`] if the buffer's sample count does not match its
///   declared geometry (checked before anything touches the filesystem)
/// - [`WavError::InvalidPath`] if `path` has no parent directory
/// - [`WavError::Io`] for any filesystem failure
pub fn write_wav_file(path: &Path, buffer: &PcmBuffer) -> WavResult<()> {
    let expected = buffer.frames as usize * buffer.channels as usize;
    if buffer.samples.len() != expected {
        return Err(WavError::Contract(DspError::length_mismatch(
            buffer.frames,
            buffer.channels,
            buffer.samples.len(),
        )));
    }

    // An empty parent means a path like "" that no write can succeed on;
    // a bare filename resolves to ".".
    let parent = match path.parent() {
        Some(p) if p.as_os_str().is_empty() => Path::new("."),
        Some(p) => p,
        None => {
            return Err(WavError::InvalidPath {
                path: path.display().to_string(),
            })
        }
    };

    let format = WavFormat::new(buffer.sample_rate, buffer.channels);
    let pcm = samples_to_pcm16(&buffer.samples);

    let mut tmp = NamedTempFile::new_in(parent)?;
    encode_wav(&mut tmp, &format, &pcm)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| WavError::Io(e.error))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatched_buffer_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.wav");

        let mut buffer = PcmBuffer::silence(44100, 2, 10).unwrap();
        buffer.samples.truncate(15);

        let err = write_wav_file(&path, &buffer).unwrap_err();
        assert!(matches!(err, WavError::Contract(_)));
        assert!(!path.exists());
    }

    #[test]
    fn test_unwritable_destination() {
        let buffer = PcmBuffer::silence(44100, 1, 4).unwrap();
        let path = Path::new("/nonexistent-dir-pcmbridge/out.wav");
        let err = write_wav_file(path, &buffer).unwrap_err();
        assert!(matches!(err, WavError::Io(_)));
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.wav");
        std::fs::write(&path, b"stale contents that are not a wav").unwrap();

        let buffer = PcmBuffer::silence(44100, 2, 10).unwrap();
        write_wav_file(&path, &buffer).unwrap();

        let written = std::fs::read(&path).unwrap();
        assert_eq!(written.len(), 44 + 10 * 2 * 2);
        assert_eq!(&written[0..4], b"RIFF");
    }
}
