//! Test-signal generation.

use std::f32::consts::TAU;

use crate::buffer::PcmBuffer;
use crate::error::DspResult;

/// Generates a full-scale sine wave as an interleaved buffer.
///
/// Every channel of a frame carries the same value. Phase is derived from
/// the frame index, so the output is deterministic for a given geometry.
///
/// # Errors
/// Rejects zero channels and zero sample rate, the same geometry policy
/// [`PcmBuffer::new`] enforces.
pub fn generate_sine(
    sample_rate: u32,
    frames: u32,
    channels: u16,
    freq_hz: f32,
) -> DspResult<PcmBuffer> {
    // Validate geometry up front so the fill loop below cannot divide by a
    // zero sample rate.
    let mut buffer = PcmBuffer::silence(sample_rate, channels, frames)?;

    for i in 0..frames {
        let s = (TAU * freq_hz * i as f32 / sample_rate as f32).sin();
        let base = i as usize * channels as usize;
        buffer.samples[base..base + channels as usize].fill(s);
    }

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DspError;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sine_geometry() {
        let buf = generate_sine(44100, 100, 2, 440.0).unwrap();
        assert_eq!(buf.len(), 200);
        assert_eq!(buf.frames, 100);
        assert_eq!(buf.channels, 2);
    }

    #[test]
    fn test_sine_rejects_invalid_geometry() {
        // Same policy as the PcmBuffer constructor.
        assert!(matches!(
            generate_sine(44100, 100, 0, 440.0).unwrap_err(),
            DspError::ZeroChannels
        ));
        assert!(matches!(
            generate_sine(0, 100, 2, 440.0).unwrap_err(),
            DspError::ZeroSampleRate
        ));
    }

    #[test]
    fn test_sine_starts_at_zero() {
        let buf = generate_sine(44100, 10, 1, 440.0).unwrap();
        assert_eq!(buf.samples[0], 0.0);
    }

    #[test]
    fn test_sine_channels_identical() {
        let buf = generate_sine(48000, 64, 2, 1000.0).unwrap();
        for frame in buf.samples.chunks_exact(2) {
            assert_eq!(frame[0], frame[1]);
        }
    }

    #[test]
    fn test_sine_within_full_scale() {
        let buf = generate_sine(44100, 4410, 1, 997.0).unwrap();
        assert!(buf.samples.iter().all(|s| s.abs() <= 1.0));
    }

    #[test]
    fn test_sine_quarter_period_peak() {
        // 11025 Hz at 44100 Hz sample rate: frame 1 sits on the positive peak.
        let buf = generate_sine(44100, 4, 1, 11025.0).unwrap();
        assert!((buf.samples[1] - 1.0).abs() < 1e-6);
    }
}
