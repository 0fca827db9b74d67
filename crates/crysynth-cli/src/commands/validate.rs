//! Validate command implementation
//!
//! Loads a preset file and checks every preset without rendering anything.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{
    input_error_to_json, print_json, validation_error_to_json, validation_warning_to_json,
    ValidateOutput,
};
use super::reporting::print_validation_results;
use crate::input::{load_presets, LoadResult};

/// Run the validate command
///
/// # Arguments
/// * `presets_path` - Path to the preset file
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 if valid, 1 if invalid
pub fn run(presets_path: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(presets_path)
    } else {
        run_human(presets_path)
    }
}

/// Run validate with human-readable (colored) output
fn run_human(presets_path: &str) -> Result<ExitCode> {
    println!("{} {}", "Validating:".cyan().bold(), presets_path);

    let LoadResult {
        presets,
        source_hash,
        ..
    } = load_presets(Some(Path::new(presets_path)))
        .with_context(|| format!("Failed to load preset file: {}", presets_path))?;

    if let Some(hash) = &source_hash {
        println!("{} {}", "Source:".dimmed(), &hash[..16]);
    }

    let result = presets.validate();
    print_validation_results(&result);

    if result.is_ok() {
        let ids: Vec<&str> = presets.presets.iter().map(|p| p.output_id.as_str()).collect();
        println!(
            "\n{} {} preset(s) valid: {}",
            "SUCCESS".green().bold(),
            ids.len(),
            ids.join(", ")
        );
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "\n{} Presets have {} error(s)",
            "FAILED".red().bold(),
            result.errors.len()
        );
        Ok(ExitCode::from(1))
    }
}

/// Run validate with machine-readable JSON output
fn run_json(presets_path: &str) -> Result<ExitCode> {
    let loaded = match load_presets(Some(Path::new(presets_path))) {
        Ok(loaded) => loaded,
        Err(e) => {
            let output = ValidateOutput {
                success: false,
                errors: vec![input_error_to_json(&e)],
                warnings: Vec::new(),
                presets: Vec::new(),
                source_hash: None,
            };
            print_json(&output)?;
            return Ok(ExitCode::from(1));
        }
    };

    let result = loaded.presets.validate();
    let output = ValidateOutput {
        success: result.is_ok(),
        errors: result.errors.iter().map(validation_error_to_json).collect(),
        warnings: result
            .warnings
            .iter()
            .map(validation_warning_to_json)
            .collect(),
        presets: loaded
            .presets
            .presets
            .iter()
            .map(|p| p.output_id.clone())
            .collect(),
        source_hash: loaded.source_hash,
    };
    print_json(&output)?;

    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}
