//! Gaussian-style elimination of variables that, after extraction, occur
//! only inside XOR constraints. Grounded on the activate/prepare/run
//! lifecycle of `shnarazk-splr/src/processor/mod.rs`'s `EliminateIF`
//! trait and `Eliminator` struct.

pub mod heap;

use crate::journal::Journal;
use crate::store::Store;
use crate::types::*;
use heap::Schedule;
use std::collections::HashSet;
use std::io::Write;

/// API mirrored from the teacher's `EliminateIF`: a prepare step that
/// builds the schedule, and a run step that drains it.
pub trait EliminateIF {
    fn prepare(store: &mut Store) -> Schedule;
    fn run<W: Write>(store: &mut Store, journal: &mut Journal<W>, schedule: Schedule);
}

pub struct Eliminator;

impl EliminateIF for Eliminator {
    fn prepare(store: &mut Store) -> Schedule {
        store.occ.clear_all();
        store.clausal.iter_mut().for_each(|c| *c = false);

        for c in &store.constraints {
            if c.is_garbage() || c.is_xor() {
                continue;
            }
            for lit in &c.literals {
                store.clausal[lit.var() as usize] = true;
            }
        }

        let n = store.constraints.len();
        for i in 0..n {
            let cid = crate::store::ConstraintId(i as u32);
            if store[cid].is_garbage() || !store[cid].is_xor() {
                continue;
            }
            let literals = store[cid].literals.clone();
            store.occ.connect(cid, &literals);
        }

        let mut entries = Vec::new();
        for v in 1..=store.num_vars {
            if store.clausal[v as usize] {
                continue;
            }
            let count = store.occ.count(Lit::new(v as i32));
            if count > 0 {
                entries.push((v, count));
            }
        }
        Schedule::build(entries)
    }

    fn run<W: Write>(store: &mut Store, journal: &mut Journal<W>, mut schedule: Schedule) {
        while let Some(v) = schedule.pop() {
            if store.inconsistent {
                return;
            }
            let lit_v = Lit::new(v as i32);
            let occs: Vec<_> = store.occ.list(lit_v).to_vec();
            if occs.is_empty() {
                continue;
            }

            let mut pivot_idx = 0;
            let mut pivot_size = usize::MAX;
            for (i, &cid) in occs.iter().enumerate() {
                let sz = store[cid].len();
                if sz < pivot_size {
                    pivot_size = sz;
                    pivot_idx = i;
                }
            }
            let xp = occs[pivot_idx];
            let xp_vars: HashSet<VarId> = store[xp].literals.iter().map(|l| l.var()).collect();
            let xp_parity = store[xp].parity();

            for (i, &xd) in occs.iter().enumerate() {
                if i == pivot_idx {
                    continue;
                }
                let xd_vars: HashSet<VarId> = store[xd].literals.iter().map(|l| l.var()).collect();
                let new_parity = xp_parity ^ store[xd].parity();
                let mut sym_diff: Vec<VarId> =
                    xp_vars.symmetric_difference(&xd_vars).copied().collect();
                sym_diff.sort_unstable();

                if sym_diff.is_empty() {
                    if new_parity {
                        store.inconsistent = true;
                    } else {
                        store.stats.trivial += 1;
                    }
                } else {
                    let new_lits: Vec<Lit> =
                        sym_diff.iter().map(|&w| Lit::new(w as i32)).collect();
                    store.new_xor(new_parity, new_lits);
                }

                store[xd].make_pivot_first(v);
                store.weaken(xd, journal);
                store.stats.substituted += 1;

                if store.inconsistent {
                    return;
                }
            }

            store[xp].make_pivot_first(v);
            store.weaken(xp, journal);
            store.stats.eliminated += 1;
        }
    }
}
