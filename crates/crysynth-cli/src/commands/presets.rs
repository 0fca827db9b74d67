//! Presets command implementation
//!
//! Prints the built-in preset file as JSON, ready to be saved and edited.

use anyhow::Result;
use crysynth_spec::PresetFile;
use std::process::ExitCode;

/// Renders the built-in presets as JSON.
pub fn builtin_json(pretty: bool) -> Result<String> {
    let presets = PresetFile::default();
    Ok(if pretty {
        presets.to_json_pretty()?
    } else {
        serde_json::to_string(&presets)?
    })
}

/// Run the presets command
pub fn run(pretty: bool) -> Result<ExitCode> {
    println!("{}", builtin_json(pretty)?);
    Ok(ExitCode::SUCCESS)
}
