//! pcmbridge shared-memory control header
//!
//! The host and the DSP service share one memory region laid out as:
//!
//! ```text
//! [ control header (128 bytes)                         ]
//! [ input  float32 PCM (frames * channels * 4 bytes)   ]
//! [ output float32 PCM (frames * channels * 4 bytes)   ]
//! ```
//!
//! This crate is the codec for the control header: a fixed 128-byte,
//! little-endian, packed layout. Encoding is pure and deterministic (same
//! fields, same bytes); decoding validates magic and version so a stale or
//! foreign mapping is rejected instead of misread.
//!
//! Byte layout (offsets are part of the wire contract; the peer reads them
//! directly with fixed-offset views):
//!
//! ```text
//!   0  magic               u32    0x41534844
//!   4  version             u32    currently 1
//!   8  sample_rate         u32
//!  12  channels            u32
//!  16  frames              u32
//!  20  format              u32    0 = float32 PCM
//!  24  input_offset        u32    byte offset of input PCM from region start
//!  28  output_offset       u32    byte offset of output PCM from region start
//!  32  status              i32    written by the DSP side
//!  36  processing_time_ns  i64    written by the DSP side
//!  44  gain                f32
//!  48  bypass              u32    0 = process, nonzero = bypass
//!  52  padding             [u8; 76]   always zero
//! 128  end
//! ```

pub mod error;
pub mod header;

pub use error::{HeaderError, HeaderResult};
pub use header::{
    build_header, total_shm_size, SharedHeader, Status, FORMAT_FLOAT32, HEADER_SIZE, MAGIC,
    VERSION,
};
