//! Core WAV writing and PCM packing functions.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use super::format::WavFormat;

/// Size of the canonical header written before the PCM payload.
pub const HEADER_LEN: usize = 44;

/// Builds the canonical 44-byte header: `RIFF`, a 16-byte PCM `fmt ` chunk,
/// and the `data` chunk header.
fn header(format: &WavFormat, data_size: u32) -> [u8; HEADER_LEN] {
    let mut header = [0u8; HEADER_LEN];
    let fields: [&[u8]; 13] = [
        b"RIFF",
        &(data_size + 36).to_le_bytes(),
        b"WAVE",
        b"fmt ",
        &16u32.to_le_bytes(),
        &1u16.to_le_bytes(), // PCM
        &format.channels.to_le_bytes(),
        &format.sample_rate.to_le_bytes(),
        &format.byte_rate().to_le_bytes(),
        &format.block_align().to_le_bytes(),
        &format.bits_per_sample.to_le_bytes(),
        b"data",
        &data_size.to_le_bytes(),
    ];

    let mut at = 0;
    for field in fields {
        header[at..at + field.len()].copy_from_slice(field);
        at += field.len();
    }
    header
}

/// Writes a complete WAV file to a writer.
///
/// # Arguments
/// * `writer` - Output writer
/// * `format` - WAV format parameters
/// * `pcm_data` - Raw PCM samples as bytes
///
/// # Returns
/// `InvalidInput` if the payload does not fit the RIFF size fields, otherwise
/// any error from the writer
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm_data: &[u8]) -> io::Result<()> {
    let data_size = u32::try_from(pcm_data.len())
        .ok()
        .filter(|size| size.checked_add(36).is_some())
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "PCM payload too large for a RIFF file",
            )
        })?;

    writer.write_all(&header(format, data_size))?;
    writer.write_all(pcm_data)
}

/// Writes a WAV file to a byte vector.
///
/// # Arguments
/// * `format` - WAV format parameters
/// * `pcm_data` - Raw PCM samples as bytes
///
/// # Returns
/// Complete WAV file as bytes
pub fn write_wav_to_vec(format: &WavFormat, pcm_data: &[u8]) -> io::Result<Vec<u8>> {
    let mut buffer = Vec::with_capacity(HEADER_LEN + pcm_data.len());
    write_wav(&mut buffer, format, pcm_data)?;
    Ok(buffer)
}

/// Writes a WAV file to `path`, creating or truncating it.
///
/// The file is flushed and synced before returning.
///
/// # Arguments
/// * `path` - Destination file
/// * `format` - WAV format parameters
/// * `pcm_data` - Raw PCM samples as bytes
///
/// # Returns
/// Result indicating success or I/O error
pub fn write_wav_file(path: &Path, format: &WavFormat, pcm_data: &[u8]) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_wav(&mut writer, format, pcm_data)?;
    let file = writer.into_inner().map_err(io::IntoInnerError::into_error)?;
    file.sync_all()
}

/// Packs 16-bit samples as little-endian bytes.
///
/// # Arguments
/// * `samples` - Quantized mono samples
///
/// # Returns
/// PCM data as little-endian 16-bit samples
pub fn pcm16_to_bytes(samples: &[i16]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * 2);
    for sample in samples {
        pcm.extend_from_slice(&sample.to_le_bytes());
    }
    pcm
}
