//! Loading preset files.
//!
//! Presets come either from a JSON file on disk or from the built-in set.
//! Loading only reads and parses; validation is left to the commands so they
//! can report every problem with its path.

use crysynth_spec::{PresetFile, SpecError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where a preset file came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// The four presets compiled into the binary.
    BuiltIn,
    /// A JSON file on disk.
    File,
}

impl SourceKind {
    /// Returns the string representation for reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::BuiltIn => "built_in",
            SourceKind::File => "file",
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A parsed, not yet validated, preset file.
#[derive(Debug)]
pub struct LoadResult {
    /// The presets.
    pub presets: PresetFile,
    /// Where they came from.
    pub source_kind: SourceKind,
    /// BLAKE3 hash of the file content (hex); `None` for built-in presets.
    pub source_hash: Option<String>,
}

/// Errors that can occur while loading a preset file.
#[derive(Debug)]
pub enum InputError {
    /// File could not be read.
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// File is not a well-formed preset document.
    Parse { path: PathBuf, source: SpecError },
}

impl InputError {
    /// Path of the file that failed to load.
    pub fn path(&self) -> &Path {
        match self {
            InputError::FileRead { path, .. } | InputError::Parse { path, .. } => path,
        }
    }
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::FileRead { path, source } => {
                write!(f, "failed to read file '{}': {}", path.display(), source)
            }
            InputError::Parse { path, source } => {
                write!(f, "failed to parse '{}': {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::FileRead { source, .. } => Some(source),
            InputError::Parse { source, .. } => Some(source),
        }
    }
}

/// Loads presets from `path`, or the built-in presets when `path` is `None`.
///
/// # Example
/// ```no_run
/// use std::path::Path;
/// use crysynth_cli::input::load_presets;
///
/// let loaded = load_presets(Some(Path::new("cries.json"))).unwrap();
/// println!("{} preset(s)", loaded.presets.presets.len());
/// ```
pub fn load_presets(path: Option<&Path>) -> Result<LoadResult, InputError> {
    let Some(path) = path else {
        return Ok(LoadResult {
            presets: PresetFile::default(),
            source_kind: SourceKind::BuiltIn,
            source_hash: None,
        });
    };

    let content = std::fs::read_to_string(path).map_err(|e| InputError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let source_hash = blake3::hash(content.as_bytes()).to_hex().to_string();
    let presets = PresetFile::from_json(&content).map_err(|e| InputError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(LoadResult {
        presets,
        source_kind: SourceKind::File,
        source_hash: Some(source_hash),
    })
}
