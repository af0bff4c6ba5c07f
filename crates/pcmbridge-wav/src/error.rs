//! Error types for WAV export.

use pcmbridge_dsp::DspError;
use thiserror::Error;

/// Result type for WAV operations.
pub type WavResult<T> = Result<T, WavError>;

/// Errors that can occur while encoding or writing a WAV file.
#[derive(Debug, Error)]
pub enum WavError {
    /// The buffer violates its declared geometry; nothing was written.
    #[error(transparent)]
    Contract(#[from] DspError),

    /// The destination path has no parent directory to stage the write in.
    #[error("invalid destination path: {path}")]
    InvalidPath {
        /// The offending path.
        path: String,
    },

    /// I/O failure creating, writing, or renaming the output file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
