//! Interleaved float32 PCM sample container.

use crate::error::{DspError, DspResult};

/// An interleaved multi-channel float32 PCM buffer.
///
/// Sample index `i * channels + c` holds frame `i`, channel `c`. The length
/// invariant `samples.len() == frames * channels` is checked at construction
/// and holds for the buffer's whole lifetime; transforms produce a new
/// buffer instead of mutating in place.
#[derive(Debug, Clone, PartialEq)]
pub struct PcmBuffer {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of interleaved channels (>= 1).
    pub channels: u16,
    /// Number of frames (one sample per channel per frame).
    pub frames: u32,
    /// Interleaved samples, length `frames * channels`.
    pub samples: Vec<f32>,
}

impl PcmBuffer {
    /// Creates a buffer from declared geometry and an interleaved sample
    /// vector.
    ///
    /// # Errors
    /// Returns [`DspError::LengthMismatch`] if `samples.len()` does not
    /// equal `frames * channels`, and rejects zero channels / zero sample
    /// rate outright. A mismatched buffer is a caller bug; failing here is
    /// what keeps every downstream loop in bounds.
    pub fn new(sample_rate: u32, channels: u16, frames: u32, samples: Vec<f32>) -> DspResult<Self> {
        if channels == 0 {
            return Err(DspError::ZeroChannels);
        }
        if sample_rate == 0 {
            return Err(DspError::ZeroSampleRate);
        }
        let expected = frames as usize * channels as usize;
        if samples.len() != expected {
            return Err(DspError::length_mismatch(frames, channels, samples.len()));
        }
        Ok(Self {
            sample_rate,
            channels,
            frames,
            samples,
        })
    }

    /// Creates a silent (all-zero) buffer of the given geometry.
    pub fn silence(sample_rate: u32, channels: u16, frames: u32) -> DspResult<Self> {
        let len = frames as usize * channels as usize;
        Self::new(sample_rate, channels, frames, vec![0.0; len])
    }

    /// Total sample count across all channels.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if the buffer holds no frames.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration of the buffer in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.frames as f64 / self.sample_rate as f64
    }

    /// Returns a new buffer with the same geometry but different samples.
    ///
    /// # Errors
    /// Fails if `samples` does not match this buffer's geometry.
    pub fn with_samples(&self, samples: Vec<f32>) -> DspResult<Self> {
        Self::new(self.sample_rate, self.channels, self.frames, samples)
    }
}
