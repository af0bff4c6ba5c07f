//! Header command implementation
//!
//! Builds the 128-byte shared control header from scalar parameters and
//! either writes the raw bytes to a file or prints the decoded field view.

use anyhow::{Context, Result};
use colored::Colorize;
use std::process::ExitCode;

use pcmbridge_shm::{build_header, total_shm_size, SharedHeader, Status, HEADER_SIZE};

/// Run the header command.
///
/// # Returns
/// Exit code: 0 success, 1 write failure.
pub fn run(
    sample_rate: u32,
    channels: u32,
    frames: u32,
    gain: f32,
    bypass: bool,
    out: Option<&str>,
) -> Result<ExitCode> {
    let bytes = build_header(sample_rate, channels, frames, gain, bypass);

    if let Some(path) = out {
        std::fs::write(path, bytes).with_context(|| format!("failed to write {path}"))?;
        println!(
            "{} {} ({} bytes)",
            "Wrote:".green().bold(),
            path,
            HEADER_SIZE
        );
        return Ok(ExitCode::SUCCESS);
    }

    // Decode what was just encoded so the printout reflects the actual
    // wire bytes, not the inputs.
    let hdr = SharedHeader::decode(&bytes).expect("encoder output must decode");

    println!("{}", "Shared control header".cyan().bold());
    println!("  sample_rate:        {}", hdr.sample_rate);
    println!("  channels:           {}", hdr.channels);
    println!("  frames:             {}", hdr.frames);
    println!("  format:             {} (float32)", hdr.format);
    println!("  input_offset:       {}", hdr.input_offset);
    println!("  output_offset:      {}", hdr.output_offset);
    let status = Status::from_raw(hdr.status)
        .map_or_else(|| format!("unknown ({})", hdr.status), |s| format!("{s:?}"));
    println!("  status:             {status}");
    println!("  processing_time_ns: {}", hdr.processing_time_ns);
    println!("  gain:               {}", hdr.gain);
    println!("  bypass:             {}", hdr.bypass);
    println!(
        "  total shm size:     {} bytes",
        total_shm_size(frames, channels)
    );

    Ok(ExitCode::SUCCESS)
}
