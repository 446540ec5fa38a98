//! Run configuration: the five pass toggles plus the resolved I/O
//! paths. Grounded on `shnarazk-splr/src/config.rs`'s field-grouped
//! `Config` struct and its `Default` impl, trimmed down to the surface
//! SPEC_FULL.md names (the teacher's `structopt` attributes were
//! inert — gated on a feature its own `Cargo.toml` never declares —
//! so this crate wires `clap` directly instead, see `cli.rs`).

use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub extract_gates: bool,
    pub eliminate_xors: bool,
    pub compact_variables: bool,
    pub quiet: bool,
    pub no_write: bool,
    pub input_path: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
    pub extend_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            extract_gates: true,
            eliminate_xors: true,
            compact_variables: true,
            quiet: false,
            no_write: false,
            input_path: None,
            output_path: None,
            extend_path: None,
        }
    }
}
