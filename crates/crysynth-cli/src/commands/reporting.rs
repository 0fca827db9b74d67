use colored::Colorize;
use crysynth_spec::{SynthesisResult, ValidationResult};

/// Prints validation errors and warnings in the colored human format.
pub(crate) fn print_validation_results(result: &ValidationResult) {
    if !result.errors.is_empty() {
        println!("\n{}", "Errors:".red().bold());
        for error in &result.errors {
            let path_info = error
                .path
                .as_ref()
                .map(|p| format!(" at {}", p))
                .unwrap_or_default();
            println!(
                "  {} [{}]{}: {}",
                "x".red(),
                error.code.to_string().red(),
                path_info.dimmed(),
                error.message
            );
        }
    }

    if !result.warnings.is_empty() {
        println!("\n{}", "Warnings:".yellow().bold());
        for warning in &result.warnings {
            let path_info = warning
                .path
                .as_ref()
                .map(|p| format!(" at {}", p))
                .unwrap_or_default();
            println!(
                "  {} [{}]{}: {}",
                "!".yellow(),
                warning.code.to_string().yellow(),
                path_info.dimmed(),
                warning.message
            );
        }
    }
}

/// Formats realized frequencies as a short comma-separated list.
pub(crate) fn format_frequencies(frequencies: &[f64]) -> String {
    frequencies
        .iter()
        .map(|f| format!("{:.0}", f))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Prints one generated file.
pub(crate) fn print_generated(result: &SynthesisResult, seed: u32) {
    let path = result
        .path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| format!("{}.wav", result.output_id));

    println!("  {} {}", "+".green(), path.bold());
    println!(
        "    {} {:.0} Hz  {} [{}]",
        "F0".dimmed(),
        result.fundamental_hz,
        "formants".dimmed(),
        format_frequencies(&result.formants)
    );
    if let Some(sub) = result.sub_harmonic_hz {
        println!("    {} {:.0} Hz", "sub-harmonic".dimmed(), sub);
    }
    println!(
        "    {} {}  {} {}  {} {}",
        "samples".dimmed(),
        result.num_samples,
        "seed".dimmed(),
        seed,
        "pcm".dimmed(),
        &result.pcm_hash[..16.min(result.pcm_hash.len())]
    );
    if result.clipped_samples > 0 {
        println!(
            "    {} {} sample(s) clamped",
            "!".yellow(),
            result.clipped_samples
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_frequencies() {
        assert_eq!(
            format_frequencies(&[880.0, 1319.6, 1760.0]),
            "880, 1320, 1760"
        );
        assert_eq!(format_frequencies(&[]), "");
    }
}
