//! crysynth CLI library.
//!
//! This crate provides the core functionality for the `crysynth` binary:
//! preset loading, logging setup, and the `generate`, `validate` and
//! `presets` commands.

pub mod commands;
pub mod input;
pub mod logging;
