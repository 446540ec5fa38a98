//! Command-line argument parsing. Grounded on `clap`'s `derive` API as
//! used in `teeaychem-otter_sat/Cargo.toml` (a `clap = { features =
//! ["derive"] }` CLI sibling to this crate's own solver-adjacent
//! domain) — a deliberate addition over the teacher's inert
//! `structopt`-gated `Config` (see DESIGN.md).

use crate::config::Config;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cnf2xnf", version, about = "Extracts XOR constraints from a CNF formula and emits extended DIMACS (XNF)")]
pub struct Cli {
    /// Skip AIG (Tseitin gate) XOR extraction.
    #[arg(long)]
    pub no_gates: bool,

    /// Skip Gaussian elimination of XOR-only variables.
    #[arg(long)]
    pub no_eliminate: bool,

    /// Skip dense variable renumbering.
    #[arg(long)]
    pub no_compact: bool,

    /// Parse and transform but do not write the output formula.
    #[arg(short = 'n', long)]
    pub no_write: bool,

    /// Suppress progress logging.
    #[arg(short, long)]
    pub quiet: bool,

    /// Input DIMACS CNF file, or `-` for stdin.
    pub input: Option<PathBuf>,

    /// Output XNF file, or `-` for stdout.
    pub output: Option<PathBuf>,

    /// Extension-stack journal file.
    pub extend: Option<PathBuf>,
}

impl Cli {
    pub fn into_config(self) -> Config {
        Config {
            extract_gates: !self.no_gates,
            eliminate_xors: !self.no_eliminate,
            compact_variables: !self.no_compact,
            quiet: self.quiet,
            no_write: self.no_write,
            input_path: self.input,
            output_path: self.output,
            extend_path: self.extend,
        }
    }
}
