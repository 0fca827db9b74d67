//! In-memory WAV render.

use std::io;

use super::format::WavFormat;
use super::pcm::pcm_hash;
use super::writer::{pcm16_to_bytes, write_wav_to_vec, HEADER_LEN};

/// A complete WAV file held in memory.
#[derive(Debug, Clone)]
pub struct WavResult {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of the PCM payload only.
    pub pcm_hash: String,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of samples.
    pub num_samples: usize,
}

impl WavResult {
    /// Packs quantized mono samples into a WAV file.
    pub fn from_pcm16(samples: &[i16], sample_rate: u32) -> io::Result<Self> {
        let pcm = pcm16_to_bytes(samples);
        let format = WavFormat::mono(sample_rate);
        let wav_data = write_wav_to_vec(&format, &pcm)?;

        Ok(Self {
            wav_data,
            pcm_hash: pcm_hash(&pcm),
            sample_rate,
            num_samples: samples.len(),
        })
    }

    /// Returns the PCM payload.
    pub fn pcm_data(&self) -> &[u8] {
        &self.wav_data[HEADER_LEN..]
    }
}
