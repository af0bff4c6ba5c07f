//! pcmbridge CLI - demo driver for the PCM processing core
//!
//! Exercises the pipeline end to end: generate a sine test signal, run it
//! through the gain + soft-clip stage, write the result as a WAV file, and
//! build or inspect the 128-byte shared control header.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

mod commands;

/// pcmbridge - PCM processing, shared-header codec, WAV export
#[derive(Parser)]
#[command(name = "pcmbridge")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a sine wave, process it, and write a WAV file
    Render {
        /// Output WAV path
        #[arg(short, long)]
        out: String,

        /// Sine frequency in Hz
        #[arg(long, default_value_t = 440.0)]
        freq: f32,

        /// Duration in seconds
        #[arg(long, default_value_t = 1.0)]
        duration: f64,

        /// Sample rate in Hz
        #[arg(long, default_value_t = 44100)]
        sample_rate: u32,

        /// Channel count
        #[arg(long, default_value_t = 2)]
        channels: u16,

        /// Linear gain to apply (nominal range 0.0 to 2.0)
        #[arg(long, default_value_t = 1.0)]
        gain: f32,

        /// Skip processing and write the raw signal
        #[arg(long)]
        bypass: bool,
    },

    /// Build a 128-byte shared control header
    Header {
        /// Sample rate in Hz
        #[arg(long, default_value_t = 44100)]
        sample_rate: u32,

        /// Channel count
        #[arg(long, default_value_t = 2)]
        channels: u32,

        /// Frame count
        #[arg(long)]
        frames: u32,

        /// Gain field value
        #[arg(long, default_value_t = 1.0)]
        gain: f32,

        /// Set the bypass flag
        #[arg(long)]
        bypass: bool,

        /// Write the raw 128 bytes to this path instead of printing fields
        #[arg(short, long)]
        out: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render {
            out,
            freq,
            duration,
            sample_rate,
            channels,
            gain,
            bypass,
        } => commands::render::run(&out, freq, duration, sample_rate, channels, gain, bypass),
        Commands::Header {
            sample_rate,
            channels,
            frames,
            gain,
            bypass,
            out,
        } => commands::header::run(sample_rate, channels, frames, gain, bypass, out.as_deref()),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_render() {
        let cli = Cli::try_parse_from([
            "pcmbridge", "render", "--out", "a.wav", "--gain", "1.5", "--bypass",
        ])
        .unwrap();
        match cli.command {
            Commands::Render {
                out, gain, bypass, ..
            } => {
                assert_eq!(out, "a.wav");
                assert_eq!(gain, 1.5);
                assert!(bypass);
            }
            _ => panic!("expected render command"),
        }
    }

    #[test]
    fn test_cli_parses_header() {
        let cli = Cli::try_parse_from(["pcmbridge", "header", "--frames", "1000"]).unwrap();
        match cli.command {
            Commands::Header { frames, out, .. } => {
                assert_eq!(frames, 1000);
                assert!(out.is_none());
            }
            _ => panic!("expected header command"),
        }
    }

    #[test]
    fn test_render_requires_out() {
        assert!(Cli::try_parse_from(["pcmbridge", "render"]).is_err());
    }
}
