//! Render command implementation
//!
//! Generates a sine test signal, runs the DSP stage, and writes the result
//! to a WAV file.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use pcmbridge_dsp::{generate_sine, process};
use pcmbridge_wav::write_wav_file;

/// Run the render command.
///
/// # Returns
/// Exit code: 0 success, 1 invalid parameters or write failure.
#[allow(clippy::too_many_arguments)]
pub fn run(
    out: &str,
    freq: f32,
    duration: f64,
    sample_rate: u32,
    channels: u16,
    gain: f32,
    bypass: bool,
) -> Result<ExitCode> {
    if duration < 0.0 || !duration.is_finite() {
        anyhow::bail!("duration must be a non-negative number of seconds, got {duration}");
    }
    let frames = (duration * sample_rate as f64).round() as u32;

    println!(
        "{} {} Hz sine, {} frames, {} ch @ {} Hz",
        "Generating:".cyan().bold(),
        freq,
        frames,
        channels,
        sample_rate
    );
    let input = generate_sine(sample_rate, frames, channels, freq)
        .context("invalid stream geometry")?;

    let result = process(&input, gain, bypass).context("processing failed")?;
    if bypass {
        println!(
            "{} bypass copy in {} ns",
            "Processed:".cyan().bold(),
            result.processing_time_ns
        );
    } else {
        println!(
            "{} gain {} + soft clip in {} ns",
            "Processed:".cyan().bold(),
            gain,
            result.processing_time_ns
        );
    }

    let path = Path::new(out);
    write_wav_file(path, &result.output)
        .with_context(|| format!("failed to write {}", path.display()))?;

    let bytes = 44 + result.output.len() as u64 * 2;
    println!(
        "{} {} ({} bytes, {:.3} s)",
        "Wrote:".green().bold(),
        path.display(),
        bytes,
        result.output.duration_seconds()
    );

    Ok(ExitCode::SUCCESS)
}
