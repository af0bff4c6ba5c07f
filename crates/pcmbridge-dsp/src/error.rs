//! Error types for the DSP core.

use thiserror::Error;

/// Result type for DSP operations.
pub type DspResult<T> = Result<T, DspError>;

/// Errors that can occur while building or processing PCM buffers.
#[derive(Debug, Error)]
pub enum DspError {
    /// Buffer length does not match the declared frame/channel geometry.
    #[error("buffer length mismatch: expected {expected} samples ({frames} frames x {channels} channels), found {found}")]
    LengthMismatch {
        /// Expected sample count (`frames * channels`).
        expected: usize,
        /// Actual sample count supplied.
        found: usize,
        /// Declared frame count.
        frames: u32,
        /// Declared channel count.
        channels: u16,
    },

    /// Channel count of zero is not a valid stream geometry.
    #[error("invalid channel count: 0")]
    ZeroChannels,

    /// Sample rate of zero is not a valid stream geometry.
    #[error("invalid sample rate: 0")]
    ZeroSampleRate,
}

impl DspError {
    /// Creates a length-mismatch error for the given geometry.
    pub fn length_mismatch(frames: u32, channels: u16, found: usize) -> Self {
        Self::LengthMismatch {
            expected: frames as usize * channels as usize,
            found,
            frames,
            channels,
        }
    }
}
