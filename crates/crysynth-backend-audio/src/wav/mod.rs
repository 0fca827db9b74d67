//! Deterministic WAV file writer.
//!
//! Writes mono 16-bit PCM WAV files with no timestamps or variable metadata,
//! so identical samples always give identical files. The BLAKE3 hash of the
//! PCM payload fingerprints a render independently of the header.

mod format;
mod pcm;
mod result;
mod writer;

#[cfg(test)]
mod tests;

pub use format::WavFormat;
pub use pcm::{compute_pcm_hash, extract_pcm_data, pcm_hash};
pub use result::WavResult;
pub use writer::{pcm16_to_bytes, write_wav, write_wav_file, write_wav_to_vec, HEADER_LEN};
