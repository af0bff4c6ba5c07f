//! pcmbridge WAV export
//!
//! Converts interleaved float32 PCM to 16-bit integer PCM and writes it as
//! a canonical RIFF/WAVE file: a 44-byte header (RIFF / WAVE / "fmt " /
//! "data" chunks, format code 1, 16 bits per sample, little-endian
//! throughout) followed by the sample stream.
//!
//! File writes are atomic: the encoder writes to a temporary file in the
//! destination directory and renames it into place, so a failed write never
//! leaves a truncated WAV behind. I/O problems and buffer-shape violations
//! come back as [`WavError`] values; nothing in this crate panics across
//! the API boundary.

pub mod encode;
pub mod error;
pub mod writer;

// Re-export main types at crate root
pub use encode::{encode_wav, encode_wav_to_vec, samples_to_pcm16, WavFormat, WAV_HEADER_SIZE};
pub use error::{WavError, WavResult};
pub use writer::write_wav_file;
