//! The extension stack: an append-only journal of weakened constraints
//! and compaction remaps, written so a satisfying assignment of the
//! output formula can be lifted back to one of the input. Grounded on
//! `examples/original_source/cnf2xnf/cnf2xnf.c`'s `weaken_constraint()`
//! and `compact()` record formats.

use crate::types::Lit;
use std::io::{self, Write};

pub struct Journal<W: Write = io::Sink> {
    sink: W,
}

impl Journal<io::Sink> {
    pub fn discarding() -> Self {
        Journal { sink: io::sink() }
    }
}

impl<W: Write> Journal<W> {
    pub fn new(sink: W) -> Self {
        Journal { sink }
    }

    /// Record a weakened constraint. The first literal of `literals` is
    /// the pivot that defines the eliminated/substituted variable.
    pub fn record_weaken(&mut self, is_xor: bool, parity: bool, literals: &[Lit]) {
        let tag = if !is_xor {
            "o"
        } else if parity {
            "x"
        } else {
            "x -"
        };
        let _ = write!(self.sink, "{tag} ");
        for lit in literals {
            let _ = write!(self.sink, "{lit} ");
        }
        let _ = writeln!(self.sink, "0");
    }

    /// Record a compaction remap: the old variable `old` is now `new`.
    pub fn record_remap(&mut self, old: u32, new: u32) {
        let _ = writeln!(self.sink, "x -{old} {new} 0");
    }
}
