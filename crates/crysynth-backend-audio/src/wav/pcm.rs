//! Locating and fingerprinting the PCM payload of a WAV buffer.

const RIFF_HEADER_LEN: usize = 12;
const CHUNK_HEADER_LEN: usize = 8;

/// BLAKE3 hash of raw PCM bytes, as lowercase hex.
pub fn pcm_hash(pcm_data: &[u8]) -> String {
    blake3::hash(pcm_data).to_hex().to_string()
}

fn le_u32_at(bytes: &[u8], at: usize) -> Option<usize> {
    let b = bytes.get(at..at.checked_add(4)?)?;
    Some(u32::from_le_bytes([b[0], b[1], b[2], b[3]]) as usize)
}

/// Returns the `data` chunk of a RIFF/WAVE buffer.
///
/// Chunks before `data` are skipped. Anything that is not a RIFF/WAVE buffer
/// with a complete `data` chunk gives `None`.
pub fn extract_pcm_data(wav_data: &[u8]) -> Option<&[u8]> {
    if wav_data.get(0..4)? != b"RIFF" || wav_data.get(8..12)? != b"WAVE" {
        return None;
    }

    let mut offset = RIFF_HEADER_LEN;
    loop {
        let id = wav_data.get(offset..offset.checked_add(4)?)?;
        let size = le_u32_at(wav_data, offset + 4)?;
        let body = offset.checked_add(CHUNK_HEADER_LEN)?;
        let end = body.checked_add(size)?;

        if id == b"data" {
            return wav_data.get(body..end);
        }
        // odd-sized chunks carry one pad byte
        offset = end.checked_add(size & 1)?;
    }
}

/// PCM hash of a complete WAV buffer, or `None` if it has no `data` chunk.
pub fn compute_pcm_hash(wav_data: &[u8]) -> Option<String> {
    extract_pcm_data(wav_data).map(pcm_hash)
}
