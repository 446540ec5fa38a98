/*!
# A CNF-to-XNF transformer

Recognizes groups of clauses in a DIMACS CNF formula that encode parity
(XOR) constraints — either directly, as the `2^(k-1)` clauses of a
size-`k` XOR, or as a Tseitin-style AND-gate encoding of a 3-XOR —
replaces them with explicit XOR constraints, eliminates variables that
occur only inside XORs, renumbers the survivors into a contiguous
range, and emits the result as extended DIMACS (a `p xnf` formula
mixing ordinary clauses and `x`-prefixed XOR lines). An optional
extension-stack journal records every weakened constraint so a
satisfying assignment of the output can be lifted back to one of the
input.

# Example

```
use cnf2xnf::{run_pipeline, config::Config};
use std::io::Cursor;

let input = b"p cnf 2 2\n1 -2 0\n-1 2 0\n".to_vec();
let mut output = Vec::new();
let mut journal = cnf2xnf::journal::Journal::discarding();
// Elimination is disabled here to show the extracted XOR directly:
// with it enabled, this lone 2-variable component (both variables
// occur nowhere else) is fully absorbed during elimination, since
// the whole pair is free modulo the extension stack.
let config = Config { eliminate_xors: false, ..Config::default() };
run_pipeline(Cursor::new(input), &mut output, &mut journal, &config).unwrap();
assert_eq!(String::from_utf8(output).unwrap(), "p xnf 2 1\nx -1 2 0\n");
```
*/

/// Command-line argument parsing.
pub mod cli;
/// Dense variable re-indexing.
pub mod compact;
/// Run configuration.
pub mod config;
/// DIMACS/XNF text I/O and compressed-pipe handling.
pub mod dimacs;
/// Gaussian-style elimination of XOR-only variables.
pub mod eliminate;
/// XOR-recognition passes.
pub mod extract;
/// The extension-stack journal.
pub mod journal;
/// The constraint store and occurrence index.
pub mod store;
/// Shared building blocks: literals, flags, errors.
pub mod types;

use config::Config;
use journal::Journal;
use std::io::{Read, Write};
use types::TransformResult;

/// Run the full pipeline — parse, extract (direct then gates), eliminate,
/// compact, emit — honoring `config`'s pass toggles. `journal` receives
/// every weakened-constraint and remap record.
pub fn run_pipeline<R: Read, W: Write, J: Write>(
    input: R,
    output: &mut W,
    journal: &mut Journal<J>,
    config: &Config,
) -> TransformResult<()> {
    let mut store = dimacs::read_dimacs(input)?;
    log::info!(
        "parsed {} variables, {} clauses",
        store.num_vars,
        store.kept
    );

    extract::run_direct(&mut store, journal);
    log::info!(
        "direct extraction: {} XORs ({} equivalences)",
        store.stats.direct,
        store.stats.equivalences
    );

    if config.extract_gates {
        extract::run_gates(&mut store, journal);
        log::info!("gate extraction: {} XORs", store.stats.gates);
    }

    if config.eliminate_xors && !store.inconsistent {
        use eliminate::{EliminateIF, Eliminator};
        let schedule = Eliminator::prepare(&mut store);
        Eliminator::run(&mut store, journal, schedule);
        log::info!("eliminated {} XOR-only variables", store.stats.eliminated);
    }

    if store.inconsistent {
        log::warn!("formula is inconsistent by parity analysis");
    }

    compact::compact(&mut store, journal, config.compact_variables);

    if !config.no_write {
        dimacs::write_output(&store, output)?;
    }
    Ok(())
}

#[macro_use]
extern crate bitflags;
