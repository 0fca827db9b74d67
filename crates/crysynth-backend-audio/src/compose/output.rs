//! Rendering a request to WAV bytes or to a file.

use std::path::Path;

use crysynth_spec::{SynthesisRequest, SynthesisResult};
use rand_pcg::Pcg32;
use tracing::{info, warn};

use crate::error::{AudioError, AudioResult};
use crate::wav::{pcm16_to_bytes, pcm_hash, write_wav_file, WavFormat, WavResult};

use super::quantize::{quantize, QuantizedPcm};
use super::{compose, Composition};

/// An in-memory render.
#[derive(Debug, Clone)]
pub struct Rendered {
    /// The complete WAV file.
    pub wav: WavResult,
    /// The result record; `saved` is false and `path` is `None`.
    pub result: SynthesisResult,
}

fn compose_and_quantize(
    request: &SynthesisRequest,
    rng: &mut Pcg32,
) -> AudioResult<(Composition, QuantizedPcm)> {
    let composition = compose(request, rng)?;
    let pcm = quantize(
        &composition.signal,
        request.amplitude_multiplier,
        request.overflow,
    )?;
    if pcm.clipped > 0 {
        warn!(
            output_id = %request.output_id,
            clipped = pcm.clipped,
            "samples clamped to the 16-bit range"
        );
    }
    Ok((composition, pcm))
}

fn result_record(
    request: &SynthesisRequest,
    composition: &Composition,
    pcm: &QuantizedPcm,
    pcm_hash: String,
) -> SynthesisResult {
    SynthesisResult {
        output_id: request.output_id.clone(),
        saved: false,
        fundamental_hz: request.fundamental_hz,
        formants: composition.formants,
        sub_harmonic_hz: composition.sub_harmonic_hz,
        path: None,
        num_samples: pcm.samples.len(),
        clipped_samples: pcm.clipped,
        pcm_hash,
    }
}

/// Renders `request` to an in-memory WAV file without touching disk.
pub fn render(request: &SynthesisRequest, rng: &mut Pcg32) -> AudioResult<Rendered> {
    let (composition, pcm) = compose_and_quantize(request, rng)?;
    let wav = WavResult::from_pcm16(&pcm.samples, request.sample_rate)?;
    let result = result_record(request, &composition, &pcm, wav.pcm_hash.clone());
    Ok(Rendered { wav, result })
}

/// Renders `request` and writes it to `<out_dir>/<output_id>.wav`.
///
/// Everything that can fail before I/O (validation, overflow) fails before
/// the file is created. An I/O error is returned as-is; a partially written
/// file is left in place but never reported as saved.
pub fn synthesize_to_file(
    request: &SynthesisRequest,
    out_dir: &Path,
    rng: &mut Pcg32,
) -> AudioResult<SynthesisResult> {
    let (composition, pcm) = compose_and_quantize(request, rng)?;
    let bytes = pcm16_to_bytes(&pcm.samples);
    let path = out_dir.join(request.file_name());

    write_wav_file(&path, &WavFormat::mono(request.sample_rate), &bytes)
        .map_err(|e| AudioError::write(&path, e))?;

    info!(
        output_id = %request.output_id,
        path = %path.display(),
        samples = pcm.samples.len(),
        "wrote cry"
    );

    let mut result = result_record(request, &composition, &pcm, pcm_hash(&bytes));
    result.saved = true;
    result.path = Some(path);
    Ok(result)
}
