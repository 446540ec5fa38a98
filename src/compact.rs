//! Dense variable re-indexing. Grounded on
//! `examples/original_source/cnf2xnf/cnf2xnf.c`'s `compact()`: variables
//! that still occur in some surviving constraint are renumbered in
//! ascending order of their old index; every renumbered variable gets an
//! `x -old new 0` extension-stack record.

use crate::journal::Journal;
use crate::store::Store;
use crate::types::Lit;
use std::io::Write;

/// Compact `store`'s variable numbering in place if `enable`, otherwise
/// leave it untouched (identity map). Returns the old-index -> new-index
/// map (`0` for variables that did not survive and were dropped).
pub fn compact<W: Write>(store: &mut Store, journal: &mut Journal<W>, enable: bool) -> Vec<u32> {
    let n = store.num_vars;
    if !enable {
        return (0..=n).collect();
    }

    let mut used = vec![false; n as usize + 1];
    for c in &store.constraints {
        if c.is_garbage() {
            continue;
        }
        for lit in &c.literals {
            used[lit.var() as usize] = true;
        }
    }

    let mut map = vec![0u32; n as usize + 1];
    let mut next = 1u32;
    for v in 1..=n {
        if used[v as usize] {
            map[v as usize] = next;
            if next != v {
                journal.record_remap(v, next);
            }
            next += 1;
        }
    }

    for c in &mut store.constraints {
        if c.is_garbage() {
            continue;
        }
        for lit in &mut c.literals {
            let new_var = map[lit.var() as usize];
            *lit = if lit.is_positive() {
                Lit::new(new_var as i32)
            } else {
                Lit::new(-(new_var as i32))
            };
        }
    }

    store.num_vars = next - 1;
    map
}
