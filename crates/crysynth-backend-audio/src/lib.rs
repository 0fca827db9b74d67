//! crysynth Audio Backend
//!
//! Turns a [`SynthesisRequest`](crysynth_spec::SynthesisRequest) into a mono
//! 16-bit WAV file that sounds roughly like an infant cry.
//!
//! # Overview
//!
//! Every cry is built additively from sine components:
//!
//! - **Fundamental** - A sine at F0, amplitude 1
//! - **Formants** - Five sines near `2..=6` times F0, each randomly detuned
//! - **Noise** - Optional uniform white noise at amplitude 0.3
//! - **Sub-harmonic** - Optional sine near F0/2
//!
//! Sines are produced by tiling a single precomputed period, so the cost of
//! each component is dominated by copying rather than by `sin` calls.
//!
//! # Determinism
//!
//! Given the same request and seed the output is byte-identical. All
//! randomness comes from a PCG32 generator passed in by the caller; per-request
//! seeds are derived with BLAKE3 (see [`rng`]).
//!
//! # Example
//!
//! ```no_run
//! use crysynth_backend_audio::{rng, synthesize_to_file};
//! use crysynth_spec::SynthesisRequest;
//!
//! let request = SynthesisRequest::new("A", 440.0);
//! let mut rng = rng::create_request_rng(16_081_991, &request.output_id);
//! let result = synthesize_to_file(&request, std::path::Path::new("."), &mut rng)?;
//! println!("PCM hash: {}", result.pcm_hash);
//! # Ok::<(), crysynth_backend_audio::AudioError>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`compose`] - Summing, quantizing, and writing a cry
//! - [`rng`] - Deterministic RNG with seed derivation
//! - [`synthesis`] - Sine and noise components
//! - [`wav`] - Deterministic WAV file writer

pub mod compose;
pub mod error;
pub mod rng;
pub mod synthesis;
pub mod wav;

// Re-export main types at crate root
pub use compose::{compose, quantize, render, synthesize_to_file, Composition, Rendered};
pub use error::{AudioError, AudioResult};
pub use wav::WavResult;
