//! Tests for the WAV writer module.

use super::format::WavFormat;
use super::pcm::{compute_pcm_hash, extract_pcm_data};
use super::result::WavResult;
use super::writer::{pcm16_to_bytes, write_wav, write_wav_file, write_wav_to_vec, HEADER_LEN};

// =========================================================================
// Format tests
// =========================================================================

#[test]
fn test_wav_format_mono() {
    let format = WavFormat::mono(44100);
    assert_eq!(format.channels, 1);
    assert_eq!(format.sample_rate, 44100);
    assert_eq!(format.bits_per_sample, 16);
    assert_eq!(format.bytes_per_sample(), 2);
    assert_eq!(format.block_align(), 2);
    // 44100 samples/sec * 1 channel * 2 bytes/sample
    assert_eq!(format.byte_rate(), 88200);
}

// =========================================================================
// PCM packing tests
// =========================================================================

#[test]
fn test_pcm16_to_bytes_little_endian() {
    let pcm = pcm16_to_bytes(&[0, 1, -1, i16::MAX, i16::MIN]);
    assert_eq!(pcm, vec![0, 0, 1, 0, 0xFF, 0xFF, 0xFF, 0x7F, 0x00, 0x80]);
}

// =========================================================================
// Header tests
// =========================================================================

#[test]
fn test_header_layout() {
    let format = WavFormat::mono(22050);
    let pcm = pcm16_to_bytes(&[100; 10]);
    let wav = write_wav_to_vec(&format, &pcm).unwrap();

    assert_eq!(wav.len(), 44 + 20);
    assert_eq!(&wav[0..4], b"RIFF");
    assert_eq!(u32::from_le_bytes([wav[4], wav[5], wav[6], wav[7]]), 36 + 20);
    assert_eq!(&wav[8..12], b"WAVE");
    assert_eq!(&wav[12..16], b"fmt ");
    assert_eq!(u32::from_le_bytes([wav[16], wav[17], wav[18], wav[19]]), 16);
    assert_eq!(u16::from_le_bytes([wav[20], wav[21]]), 1); // PCM
    assert_eq!(u16::from_le_bytes([wav[22], wav[23]]), 1); // mono
    assert_eq!(
        u32::from_le_bytes([wav[24], wav[25], wav[26], wav[27]]),
        22050
    );
    assert_eq!(
        u32::from_le_bytes([wav[28], wav[29], wav[30], wav[31]]),
        44100
    );
    assert_eq!(u16::from_le_bytes([wav[32], wav[33]]), 2);
    assert_eq!(u16::from_le_bytes([wav[34], wav[35]]), 16);
    assert_eq!(&wav[36..40], b"data");
    assert_eq!(u32::from_le_bytes([wav[40], wav[41], wav[42], wav[43]]), 20);
}

#[test]
fn test_empty_payload_is_header_only() {
    let wav = write_wav_to_vec(&WavFormat::mono(44100), &[]).unwrap();
    assert_eq!(wav.len(), 44);
    assert_eq!(u32::from_le_bytes([wav[40], wav[41], wav[42], wav[43]]), 0);
}

#[test]
fn test_write_wav_to_writer_matches_vec() {
    let format = WavFormat::mono(44100);
    let pcm = pcm16_to_bytes(&[1, 2, 3]);

    let mut cursor = std::io::Cursor::new(Vec::new());
    write_wav(&mut cursor, &format, &pcm).unwrap();

    assert_eq!(cursor.into_inner(), write_wav_to_vec(&format, &pcm).unwrap());
}

#[test]
fn test_write_wav_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.wav");
    let format = WavFormat::mono(44100);
    let pcm = pcm16_to_bytes(&[5, -5]);

    write_wav_file(&path, &format, &pcm).unwrap();

    let on_disk = std::fs::read(&path).unwrap();
    assert_eq!(on_disk, write_wav_to_vec(&format, &pcm).unwrap());
}

#[test]
fn test_write_wav_file_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("out.wav");
    let result = write_wav_file(&path, &WavFormat::mono(44100), &[]);
    assert!(result.is_err());
    assert!(!path.exists());
}

// =========================================================================
// PCM extraction and hashing tests
// =========================================================================

#[test]
fn test_extract_pcm_data() {
    let pcm = pcm16_to_bytes(&[7; 100]);
    let wav = write_wav_to_vec(&WavFormat::mono(44100), &pcm).unwrap();

    assert_eq!(extract_pcm_data(&wav), Some(pcm.as_slice()));
}

#[test]
fn test_extract_pcm_data_rejects_garbage() {
    assert_eq!(extract_pcm_data(b"RIFF"), None);
    assert_eq!(extract_pcm_data(&[0u8; 64]), None);
}

#[test]
fn test_compute_pcm_hash_matches_result() {
    let samples = [0, 1000, -1000, 32767];
    let result = WavResult::from_pcm16(&samples, 44100).unwrap();

    assert_eq!(result.pcm_hash.len(), 64);
    assert_eq!(compute_pcm_hash(&result.wav_data), Some(result.pcm_hash.clone()));
}

#[test]
fn test_wav_result() {
    let samples = vec![0i16; 22050];
    let result = WavResult::from_pcm16(&samples, 44100).unwrap();

    assert_eq!(result.sample_rate, 44100);
    assert_eq!(result.num_samples, 22050);
    assert_eq!(result.pcm_data().len(), 44100);
    assert_eq!(result.wav_data.len(), HEADER_LEN + 44100);
}

#[test]
fn test_hash_ignores_sample_rate() {
    let samples = [1, 2, 3];
    let a = WavResult::from_pcm16(&samples, 44100).unwrap();
    let b = WavResult::from_pcm16(&samples, 48000).unwrap();

    assert_eq!(a.pcm_hash, b.pcm_hash);
    assert_ne!(a.wav_data, b.wav_data);
}
