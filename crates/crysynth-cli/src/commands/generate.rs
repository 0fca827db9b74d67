//! Generate command implementation
//!
//! Loads a preset file (or the built-in presets), validates it, and renders
//! each preset to `<out_dir>/<output_id>.wav` in file order.

use anyhow::Result;
use colored::Colorize;
use crysynth_backend_audio::rng::{create_rng, derive_request_seed};
use crysynth_backend_audio::{synthesize_to_file, AudioError};
use crysynth_spec::{PlannedRequest, PresetFile, ValidationResult};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;
use tracing::debug;

use super::json_output::{
    audio_error_to_json, error_codes, input_error_to_json, print_json,
    validation_error_to_json, validation_warning_to_json, GenerateOutput, GeneratedFile,
    JsonError,
};
use super::reporting::{print_generated, print_validation_results};
use crate::input::{load_presets, InputError, SourceKind};

/// Exit code for a failure while rendering or writing a file.
pub const GENERATION_FAILED: u8 = 2;

/// Default output directory.
pub const DEFAULT_OUT_DIR: &str = ".";

/// Run the generate command
///
/// # Arguments
/// * `presets_path` - Preset file; `None` renders the built-in presets
/// * `out_dir` - Output directory (default: current directory)
/// * `seed` - Base seed overriding the file's `settings.seed`
/// * `only` - Output ids to render; empty renders all
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 if every file was written, 1 on load or validation errors,
/// 2 if a file failed to render or write
pub fn run(
    presets_path: Option<&str>,
    out_dir: Option<&str>,
    seed: Option<u32>,
    only: &[String],
    json_output: bool,
) -> Result<ExitCode> {
    let out_dir = PathBuf::from(out_dir.unwrap_or(DEFAULT_OUT_DIR));
    if json_output {
        run_json(presets_path, &out_dir, seed, only)
    } else {
        run_human(presets_path, &out_dir, seed, only)
    }
}

/// Presets after loading, filtering, and validation.
struct Prepared {
    presets: PresetFile,
    source_kind: SourceKind,
    source_hash: Option<String>,
    validation: ValidationResult,
}

/// Why presets could not be prepared.
#[derive(Debug)]
enum PrepareError {
    Input(InputError),
    UnknownPresets(Vec<String>),
}

impl std::fmt::Display for PrepareError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PrepareError::Input(e) => write!(f, "{}", e),
            PrepareError::UnknownPresets(ids) => {
                write!(f, "no preset with output id: {}", ids.join(", "))
            }
        }
    }
}

impl std::error::Error for PrepareError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PrepareError::Input(e) => Some(e),
            PrepareError::UnknownPresets(_) => None,
        }
    }
}

impl PrepareError {
    fn to_json(&self) -> JsonError {
        match self {
            PrepareError::Input(e) => input_error_to_json(e),
            PrepareError::UnknownPresets(_) => {
                JsonError::new(error_codes::UNKNOWN_PRESET, self.to_string())
            }
        }
    }
}

fn prepare(
    presets_path: Option<&str>,
    seed: Option<u32>,
    only: &[String],
) -> Result<Prepared, PrepareError> {
    let loaded = load_presets(presets_path.map(Path::new)).map_err(PrepareError::Input)?;
    let mut presets = loaded.presets;

    if let Some(seed) = seed {
        presets.settings.seed = seed;
    }
    if !only.is_empty() {
        let missing = presets.retain_ids(only);
        if !missing.is_empty() {
            return Err(PrepareError::UnknownPresets(missing));
        }
    }

    let validation = presets.validate();
    Ok(Prepared {
        presets,
        source_kind: loaded.source_kind,
        source_hash: loaded.source_hash,
        validation,
    })
}

/// Seed for one request: the preset's own seed, or one derived from the base.
pub fn request_seed(base_seed: u32, planned: &PlannedRequest) -> u32 {
    planned
        .seed
        .unwrap_or_else(|| derive_request_seed(base_seed, &planned.request.output_id))
}

/// A preset that failed to render.
struct RenderFailure {
    output_id: String,
    error: AudioError,
}

/// Renders every preset in order, stopping at the first failure.
fn render_all(
    presets: &PresetFile,
    out_dir: &Path,
    mut on_file: impl FnMut(&GeneratedFile),
) -> Result<(Vec<GeneratedFile>, Option<RenderFailure>)> {
    let base_seed = presets.settings.seed;
    let planned = presets.requests()?;
    debug!(base_seed, count = planned.len(), out_dir = %out_dir.display(), "rendering presets");

    let mut files = Vec::with_capacity(planned.len());
    for planned in &planned {
        let seed = request_seed(base_seed, planned);
        let mut rng = create_rng(seed);
        match synthesize_to_file(&planned.request, out_dir, &mut rng) {
            Ok(result) => {
                let file = GeneratedFile { seed, result };
                on_file(&file);
                files.push(file);
            }
            Err(error) => {
                let failure = RenderFailure {
                    output_id: planned.request.output_id.clone(),
                    error,
                };
                return Ok((files, Some(failure)));
            }
        }
    }
    Ok((files, None))
}

/// Run generate with human-readable (colored) output
fn run_human(
    presets_path: Option<&str>,
    out_dir: &Path,
    seed: Option<u32>,
    only: &[String],
) -> Result<ExitCode> {
    let start = Instant::now();

    println!(
        "{} {}",
        "Generating:".cyan().bold(),
        presets_path.unwrap_or("built-in presets")
    );

    let prepared = prepare(presets_path, seed, only)?;
    match &prepared.source_hash {
        Some(hash) => println!(
            "{} {} ({})",
            "Source:".dimmed(),
            prepared.source_kind,
            &hash[..16]
        ),
        None => println!("{} {}", "Source:".dimmed(), prepared.source_kind),
    }

    print_validation_results(&prepared.validation);
    if !prepared.validation.is_ok() {
        println!(
            "\n{} Presets have {} error(s)",
            "FAILED".red().bold(),
            prepared.validation.errors.len()
        );
        return Ok(ExitCode::from(1));
    }

    if let Err(e) = fs::create_dir_all(out_dir) {
        println!(
            "\n{} Could not create {}: {}",
            "FAILED".red().bold(),
            out_dir.display(),
            e
        );
        return Ok(ExitCode::from(GENERATION_FAILED));
    }

    println!(
        "{} {} (base seed {})\n",
        "Output:".dimmed(),
        out_dir.display(),
        prepared.presets.settings.seed
    );

    let (files, failure) = render_all(&prepared.presets, out_dir, |file| {
        print_generated(&file.result, file.seed)
    })?;
    let duration_ms = start.elapsed().as_millis() as u64;

    if let Some(failure) = failure {
        println!(
            "  {} {}: {}",
            "x".red(),
            failure.output_id.bold(),
            failure.error
        );
        println!(
            "\n{} Wrote {} of {} file(s) ({}ms)",
            "FAILED".red().bold(),
            files.len(),
            prepared.presets.presets.len(),
            duration_ms
        );
        return Ok(ExitCode::from(GENERATION_FAILED));
    }

    println!(
        "\n{} Wrote {} file(s) ({}ms)",
        "SUCCESS".green().bold(),
        files.len(),
        duration_ms
    );
    Ok(ExitCode::SUCCESS)
}

/// Run generate with machine-readable JSON output
fn run_json(
    presets_path: Option<&str>,
    out_dir: &Path,
    seed: Option<u32>,
    only: &[String],
) -> Result<ExitCode> {
    let start = Instant::now();

    let prepared = match prepare(presets_path, seed, only) {
        Ok(prepared) => prepared,
        Err(e) => {
            print_json(&GenerateOutput::failure(vec![e.to_json()], vec![]))?;
            return Ok(ExitCode::from(1));
        }
    };

    let warnings = prepared
        .validation
        .warnings
        .iter()
        .map(validation_warning_to_json)
        .collect();

    if !prepared.validation.is_ok() {
        let errors = prepared
            .validation
            .errors
            .iter()
            .map(validation_error_to_json)
            .collect();
        let mut output = GenerateOutput::failure(errors, warnings);
        output.source_kind = Some(prepared.source_kind);
        output.source_hash = prepared.source_hash;
        print_json(&output)?;
        return Ok(ExitCode::from(1));
    }

    let mut output = GenerateOutput {
        success: false,
        errors: Vec::new(),
        warnings,
        source_kind: Some(prepared.source_kind),
        out_dir: Some(out_dir.display().to_string()),
        base_seed: Some(prepared.presets.settings.seed),
        files: Vec::new(),
        source_hash: prepared.source_hash.clone(),
        duration_ms: 0,
    };

    if let Err(e) = fs::create_dir_all(out_dir) {
        output.errors.push(
            JsonError::new(
                error_codes::OUTPUT_DIR,
                format!("could not create {}: {}", out_dir.display(), e),
            )
            .with_file(out_dir.display().to_string()),
        );
        output.duration_ms = start.elapsed().as_millis() as u64;
        print_json(&output)?;
        return Ok(ExitCode::from(GENERATION_FAILED));
    }

    let (files, failure) = render_all(&prepared.presets, out_dir, |_| {})?;
    output.files = files;
    output.duration_ms = start.elapsed().as_millis() as u64;

    let code = match failure {
        Some(failure) => {
            output
                .errors
                .push(audio_error_to_json(&failure.error, &failure.output_id));
            ExitCode::from(GENERATION_FAILED)
        }
        None => {
            output.success = true;
            ExitCode::SUCCESS
        }
    };

    print_json(&output)?;
    Ok(code)
}
