//! pcmbridge DSP core
//!
//! Stateless block processing over interleaved float32 PCM:
//!
//! - [`PcmBuffer`] - the shared sample container (interleaved, multi-channel)
//! - [`process`] - gain + soft-clip transform with a bypass path and
//!   per-call timing
//! - [`generate_sine`] - test-signal generator
//!
//! # Statelessness
//!
//! Every call is independent: there is no filter memory carried between
//! blocks, so concurrent calls on distinct buffers need no coordination.
//! If block-to-block continuity is ever needed (attack/release memory for a
//! true streaming limiter), it should arrive as an explicit session object
//! passed by the caller, not as module state.
//!
//! # Example
//!
//! ```
//! use pcmbridge_dsp::{generate_sine, process};
//!
//! let input = generate_sine(44100, 1024, 2, 440.0).unwrap();
//! let result = process(&input, 1.5, false).unwrap();
//!
//! assert_eq!(result.output.samples.len(), input.samples.len());
//! assert!(result.output.samples.iter().all(|s| s.abs() <= 1.0));
//! ```

pub mod buffer;
pub mod engine;
pub mod error;
pub mod signal;

// Re-export main types at crate root
pub use buffer::PcmBuffer;
pub use engine::{process, process_samples, soft_clip, ProcessResult};
pub use error::{DspError, DspResult};
pub use signal::generate_sine;
