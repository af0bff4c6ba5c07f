//! Gain + soft-clip block processor.
//!
//! The transform is `tanh(sample * gain)` per sample: continuous, odd
//! (`f(-x) = -f(x)`), monotonic, unity slope at the origin, asymptotic to
//! +/-1. Small signals pass through nearly linearly; hot signals are
//! compressed smoothly instead of wrapping or hard-truncating.

use std::time::Instant;

use crate::buffer::PcmBuffer;
use crate::error::{DspError, DspResult};

/// Output of one [`process`] call.
#[derive(Debug, Clone)]
pub struct ProcessResult {
    /// Processed buffer, same geometry as the input.
    pub output: PcmBuffer,
    /// Wall-clock nanoseconds spent in the transform itself (copy time for
    /// the bypass path). Excludes allocation and validation.
    pub processing_time_ns: u64,
}

/// Applies the soft-clip nonlinearity to a single sample.
pub fn soft_clip(x: f32) -> f32 {
    x.tanh()
}

/// Processes one PCM block: gain + soft clip, or a verbatim copy when
/// `bypass` is set.
///
/// Gain is documented for [0.0, 2.0] but not enforced; values outside the
/// range just drive the clipper harder (or quieter). Output geometry always
/// equals input geometry.
///
/// # Errors
/// Returns [`DspError::LengthMismatch`] if the buffer's sample count does
/// not match its declared geometry. The fields of [`PcmBuffer`] are public,
/// so the invariant is re-checked here rather than trusting the caller.
pub fn process(input: &PcmBuffer, gain: f32, bypass: bool) -> DspResult<ProcessResult> {
    let expected = input.frames as usize * input.channels as usize;
    if input.samples.len() != expected {
        return Err(DspError::length_mismatch(
            input.frames,
            input.channels,
            input.samples.len(),
        ));
    }

    let (samples, processing_time_ns) = process_samples(&input.samples, gain, bypass);
    let output = input.with_samples(samples)?;

    Ok(ProcessResult {
        output,
        processing_time_ns,
    })
}

/// Raw-slice entry point for callers holding a bare interleaved buffer
/// (the shape that crosses a foreign-function boundary).
///
/// Returns the transformed samples and the nanoseconds spent transforming.
pub fn process_samples(input: &[f32], gain: f32, bypass: bool) -> (Vec<f32>, u64) {
    let start = Instant::now();
    let output = if bypass {
        input.to_vec()
    } else {
        input.iter().map(|&s| soft_clip(s * gain)).collect()
    };
    let elapsed_ns = start.elapsed().as_nanos() as u64;

    (output, elapsed_ns)
}
