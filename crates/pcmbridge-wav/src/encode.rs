//! float32 -> PCM16 conversion and RIFF/WAVE encoding.

use std::io::{self, Write};

/// Size of the canonical WAV header (RIFF + fmt + data chunk headers).
pub const WAV_HEADER_SIZE: usize = 44;

/// WAV file format parameters.
///
/// Bits per sample is fixed at 16; this encoder only emits integer PCM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    /// Number of channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
}

impl WavFormat {
    /// Creates a format description.
    pub fn new(sample_rate: u32, channels: u16) -> Self {
        Self {
            channels,
            sample_rate,
        }
    }

    /// Bits per encoded sample.
    pub fn bits_per_sample(&self) -> u16 {
        16
    }

    /// Block align: bytes per sample frame.
    fn block_align(&self) -> u16 {
        self.channels * 2
    }

    /// Byte rate: bytes per second of audio.
    fn byte_rate(&self) -> u32 {
        self.sample_rate * self.block_align() as u32
    }
}

/// Converts float32 samples to 16-bit PCM bytes, little-endian.
///
/// Each sample is scaled by 32767, rounded, and clamped to
/// [-32768, 32767]. The clamp is the file-level safety net: even an input
/// of +3.0 encodes as 32767 rather than wrapping negative. Inputs are
/// normally in [-1.0, 1.0] already (the DSP stage soft-clips), but this
/// layer does not rely on that.
pub fn samples_to_pcm16(samples: &[f32]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * 2);

    for &sample in samples {
        let scaled = (sample * 32767.0).round().clamp(-32768.0, 32767.0);
        let value = scaled as i16;
        pcm.extend_from_slice(&value.to_le_bytes());
    }

    pcm
}

/// Writes a complete WAV file (header + PCM16 payload) to a writer.
///
/// # Errors
/// Propagates any I/O error from the underlying writer.
pub fn encode_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm_data: &[u8]) -> io::Result<()> {
    let data_size = pcm_data.len() as u32;
    let riff_size = 36 + data_size; // file size minus the 8-byte RIFF chunk header

    // RIFF header
    writer.write_all(b"RIFF")?;
    writer.write_all(&riff_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    // fmt chunk
    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?; // chunk size for PCM
    writer.write_all(&1u16.to_le_bytes())?; // format code 1 = integer PCM
    writer.write_all(&format.channels.to_le_bytes())?;
    writer.write_all(&format.sample_rate.to_le_bytes())?;
    writer.write_all(&format.byte_rate().to_le_bytes())?;
    writer.write_all(&format.block_align().to_le_bytes())?;
    writer.write_all(&format.bits_per_sample().to_le_bytes())?;

    // data chunk
    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;
    writer.write_all(pcm_data)?;

    Ok(())
}

/// Encodes a WAV file into a byte vector.
pub fn encode_wav_to_vec(format: &WavFormat, pcm_data: &[u8]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(WAV_HEADER_SIZE + pcm_data.len());
    encode_wav(&mut buffer, format, pcm_data).expect("writing to Vec should not fail");
    buffer
}
