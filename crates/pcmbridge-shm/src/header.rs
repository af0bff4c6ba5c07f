//! Fixed-layout encode/decode for the 128-byte control header.

use crate::error::{HeaderError, HeaderResult};

/// Magic at offset 0. Reads as the bytes "DHSA" in memory order.
pub const MAGIC: u32 = 0x4153_4844;

/// Header layout version this codec reads and writes.
pub const VERSION: u32 = 1;

/// Total serialized header size in bytes, independent of field values.
pub const HEADER_SIZE: usize = 128;

/// PCM sample format tag: interleaved float32.
pub const FORMAT_FLOAT32: u32 = 0;

mod offset {
    pub const MAGIC: usize = 0;
    pub const VERSION: usize = 4;
    pub const SAMPLE_RATE: usize = 8;
    pub const CHANNELS: usize = 12;
    pub const FRAMES: usize = 16;
    pub const FORMAT: usize = 20;
    pub const INPUT: usize = 24;
    pub const OUTPUT: usize = 28;
    pub const STATUS: usize = 32;
    pub const PROC_TIME_NS: usize = 36;
    pub const GAIN: usize = 44;
    pub const BYPASS: usize = 48;
}

/// Processing status written into the header by the DSP side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum Status {
    /// No request in flight.
    Idle = 0,
    /// DSP side is working on the block.
    Processing = 1,
    /// Output region holds a finished block.
    Done = 2,
    /// Processing failed; output region is undefined.
    Error = -1,
}

impl Status {
    /// Maps a raw status word to a known status, if it is one.
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(Status::Idle),
            1 => Some(Status::Processing),
            2 => Some(Status::Done),
            -1 => Some(Status::Error),
            _ => None,
        }
    }
}

/// Decoded view of the shared control header.
#[derive(Debug, Clone, PartialEq)]
pub struct SharedHeader {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Channel count.
    pub channels: u32,
    /// Frame count per block.
    pub frames: u32,
    /// Sample format tag ([`FORMAT_FLOAT32`]).
    pub format: u32,
    /// Byte offset of the input PCM region from the start of the mapping.
    pub input_offset: u32,
    /// Byte offset of the output PCM region from the start of the mapping.
    pub output_offset: u32,
    /// Raw status word (see [`Status`]).
    pub status: i32,
    /// Nanoseconds the DSP side spent processing the last block.
    pub processing_time_ns: i64,
    /// Gain to apply, nominally in [0.0, 2.0].
    pub gain: f32,
    /// Bypass flag; zero means process, any nonzero value means bypass.
    pub bypass: u32,
}

impl SharedHeader {
    /// Creates a header describing a fresh stream: input PCM directly after
    /// the header, output PCM directly after the input, status idle.
    ///
    /// Offset arithmetic wraps at u32 like the rest of the fixed-width
    /// layout; callers own keeping `frames * channels` in range.
    pub fn new(sample_rate: u32, channels: u32, frames: u32, gain: f32, bypass: bool) -> Self {
        let pcm_bytes = frames.wrapping_mul(channels).wrapping_mul(4);
        Self {
            sample_rate,
            channels,
            frames,
            format: FORMAT_FLOAT32,
            input_offset: HEADER_SIZE as u32,
            output_offset: (HEADER_SIZE as u32).wrapping_add(pcm_bytes),
            status: Status::Idle as i32,
            processing_time_ns: 0,
            gain,
            bypass: bypass as u32,
        }
    }

    /// Returns true if the bypass flag requests pass-through.
    pub fn is_bypassed(&self) -> bool {
        self.bypass != 0
    }

    /// Serializes the header to its fixed 128-byte form.
    ///
    /// Pure and deterministic; all bytes not covered by a field are zero.
    pub fn encode(&self) -> [u8; HEADER_SIZE] {
        let mut buf = [0u8; HEADER_SIZE];

        put_u32(&mut buf, offset::MAGIC, MAGIC);
        put_u32(&mut buf, offset::VERSION, VERSION);
        put_u32(&mut buf, offset::SAMPLE_RATE, self.sample_rate);
        put_u32(&mut buf, offset::CHANNELS, self.channels);
        put_u32(&mut buf, offset::FRAMES, self.frames);
        put_u32(&mut buf, offset::FORMAT, self.format);
        put_u32(&mut buf, offset::INPUT, self.input_offset);
        put_u32(&mut buf, offset::OUTPUT, self.output_offset);
        buf[offset::STATUS..offset::STATUS + 4].copy_from_slice(&self.status.to_le_bytes());
        buf[offset::PROC_TIME_NS..offset::PROC_TIME_NS + 8]
            .copy_from_slice(&self.processing_time_ns.to_le_bytes());
        buf[offset::GAIN..offset::GAIN + 4].copy_from_slice(&self.gain.to_le_bytes());
        put_u32(&mut buf, offset::BYPASS, self.bypass);

        buf
    }

    /// Decodes a header from the first 128 bytes of `data`.
    ///
    /// # Errors
    /// Rejects short input, a wrong magic, and an unsupported version.
    pub fn decode(data: &[u8]) -> HeaderResult<Self> {
        if data.len() < HEADER_SIZE {
            return Err(HeaderError::TooShort {
                expected: HEADER_SIZE,
                found: data.len(),
            });
        }

        let magic = get_u32(data, offset::MAGIC);
        if magic != MAGIC {
            return Err(HeaderError::BadMagic {
                expected: MAGIC,
                found: magic,
            });
        }

        let version = get_u32(data, offset::VERSION);
        if version != VERSION {
            return Err(HeaderError::UnsupportedVersion {
                found: version,
                supported: VERSION,
            });
        }

        Ok(Self {
            sample_rate: get_u32(data, offset::SAMPLE_RATE),
            channels: get_u32(data, offset::CHANNELS),
            frames: get_u32(data, offset::FRAMES),
            format: get_u32(data, offset::FORMAT),
            input_offset: get_u32(data, offset::INPUT),
            output_offset: get_u32(data, offset::OUTPUT),
            status: i32::from_le_bytes(data[offset::STATUS..offset::STATUS + 4].try_into().unwrap()),
            processing_time_ns: i64::from_le_bytes(
                data[offset::PROC_TIME_NS..offset::PROC_TIME_NS + 8]
                    .try_into()
                    .unwrap(),
            ),
            gain: f32::from_le_bytes(data[offset::GAIN..offset::GAIN + 4].try_into().unwrap()),
            bypass: get_u32(data, offset::BYPASS),
        })
    }
}

/// Builds the 128-byte header for a fresh stream in one call.
pub fn build_header(sample_rate: u32, channels: u32, frames: u32, gain: f32, bypass: bool) -> [u8; HEADER_SIZE] {
    SharedHeader::new(sample_rate, channels, frames, gain, bypass).encode()
}

/// Total shared-memory size for a stream: header plus input and output PCM
/// regions. Wraps at u32 like the offset fields.
pub fn total_shm_size(frames: u32, channels: u32) -> u32 {
    (HEADER_SIZE as u32).wrapping_add(2u32.wrapping_mul(frames).wrapping_mul(channels).wrapping_mul(4))
}

fn put_u32(buf: &mut [u8], offset: usize, value: u32) {
    buf[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

fn get_u32(data: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes(data[offset..offset + 4].try_into().unwrap())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_encoded_size_is_fixed() {
        let bytes = build_header(44100, 2, 1000, 1.0, false);
        assert_eq!(bytes.len(), 128);

        let bytes = build_header(u32::MAX, u32::MAX, u32::MAX, f32::MAX, true);
        assert_eq!(bytes.len(), 128);
    }

    #[test]
    fn test_round_trip() {
        let bytes = build_header(44100, 2, 1000, 1.0, false);
        let hdr = SharedHeader::decode(&bytes).unwrap();

        assert_eq!(hdr.sample_rate, 44100);
        assert_eq!(hdr.channels, 2);
        assert_eq!(hdr.frames, 1000);
        assert_eq!(hdr.gain, 1.0);
        assert_eq!(hdr.bypass, 0);
        assert_eq!(hdr.format, FORMAT_FLOAT32);
        assert_eq!(hdr.status, Status::Idle as i32);
        assert_eq!(hdr.processing_time_ns, 0);
    }

    #[test]
    fn test_fixed_field_offsets() {
        let bytes = build_header(44100, 2, 1000, 0.5, true);

        // Offsets are a wire contract; check a few against raw bytes.
        assert_eq!(u32::from_le_bytes(bytes[0..4].try_into().unwrap()), MAGIC);
        assert_eq!(u32::from_le_bytes(bytes[4..8].try_into().unwrap()), 1);
        assert_eq!(u32::from_le_bytes(bytes[8..12].try_into().unwrap()), 44100);
        assert_eq!(u32::from_le_bytes(bytes[16..20].try_into().unwrap()), 1000);
        assert_eq!(f32::from_le_bytes(bytes[44..48].try_into().unwrap()), 0.5);
        assert_eq!(u32::from_le_bytes(bytes[48..52].try_into().unwrap()), 1);
    }

    #[test]
    fn test_pcm_region_offsets() {
        let hdr = SharedHeader::new(48000, 2, 256, 1.0, false);
        assert_eq!(hdr.input_offset, 128);
        assert_eq!(hdr.output_offset, 128 + 256 * 2 * 4);
    }

    #[test]
    fn test_padding_is_zero() {
        let bytes = build_header(96000, 8, u32::MAX, 2.0, true);
        assert!(bytes[52..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_determinism() {
        let a = build_header(22050, 1, 512, 1.25, false);
        let b = build_header(22050, 1, 512, 1.25, false);
        assert_eq!(a, b);
    }

    #[test]
    fn test_decode_too_short() {
        let err = SharedHeader::decode(&[0u8; 64]).unwrap_err();
        assert_eq!(
            err,
            HeaderError::TooShort {
                expected: 128,
                found: 64
            }
        );
    }

    #[test]
    fn test_decode_bad_magic() {
        let mut bytes = build_header(44100, 2, 100, 1.0, false);
        bytes[0] ^= 0xff;
        let err = SharedHeader::decode(&bytes).unwrap_err();
        assert!(matches!(err, HeaderError::BadMagic { .. }));
    }

    #[test]
    fn test_decode_bad_version() {
        let mut bytes = build_header(44100, 2, 100, 1.0, false);
        bytes[4] = 9;
        let err = SharedHeader::decode(&bytes).unwrap_err();
        assert!(matches!(
            err,
            HeaderError::UnsupportedVersion { found: 9, .. }
        ));
    }

    #[test]
    fn test_status_from_raw() {
        assert_eq!(Status::from_raw(0), Some(Status::Idle));
        assert_eq!(Status::from_raw(2), Some(Status::Done));
        assert_eq!(Status::from_raw(-1), Some(Status::Error));
        assert_eq!(Status::from_raw(7), None);
    }

    #[test]
    fn test_total_shm_size() {
        // 128 + 2 * 256 frames * 2 ch * 4 bytes
        assert_eq!(total_shm_size(256, 2), 128 + 4096);
        assert_eq!(total_shm_size(0, 2), 128);
    }

    #[test]
    fn test_nonzero_bypass_is_truthy() {
        let mut bytes = build_header(44100, 2, 100, 1.0, false);
        bytes[48] = 3;
        let hdr = SharedHeader::decode(&bytes).unwrap();
        assert!(hdr.is_bypassed());
    }
}
