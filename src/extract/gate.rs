//! AIG-encoded (Tseitin gate) XOR extraction: recognizes a 3-XOR
//! flattened into 9 clauses via three AND gates. Grounded on
//! `examples/original_source/cnf2xnf/cnf2xnf.c`'s
//! `find_and_gate`/`find_xor_gate`/`extract_aig_encoding_from_base_clause()`.

use crate::journal::Journal;
use crate::store::{ConstraintId, Store};
use crate::types::*;
use std::io::Write;

/// Attempt gate extraction starting from base clause `base` (must have
/// exactly 3 literals). Returns `true` iff the 9-clause fingerprint was
/// found and replaced by a 3-XOR.
pub fn try_extract<W: Write>(store: &mut Store, journal: &mut Journal<W>, base: ConstraintId) -> bool {
    if store[base].is_garbage() || store[base].is_xor() || store[base].len() != 3 {
        return false;
    }
    let l = store[base].literals.clone();
    let rotations = [
        (l[0], !l[1], !l[2]),
        (l[1], !l[0], !l[2]),
        (l[2], !l[0], !l[1]),
    ];
    for (lhs, r0, r1) in rotations {
        if let Some(plan) = probe(store, base, lhs, r0, r1) {
            apply(store, journal, plan);
            return true;
        }
    }
    false
}

struct Plan {
    top: [ConstraintId; 3],
    r0_gate: [ConstraintId; 3],
    r1_gate: [ConstraintId; 3],
    pivots: (VarId, VarId), // r0's variable, r1's variable
    vars: (VarId, VarId, VarId), // lhs, a, b
    parity: bool,
}

fn probe(store: &Store, base: ConstraintId, lhs: Lit, r0: Lit, r1: Lit) -> Option<Plan> {
    let top0 = find_binary(store, !lhs, r0)?;
    let top1 = find_binary(store, !lhs, r1)?;

    if store.occ.count(r0) != 3 || store.occ.count(!r0) != 2 {
        return None;
    }
    if store.occ.count(r1) != 3 || store.occ.count(!r1) != 2 {
        return None;
    }

    for &cid in store.occ.list(!r0) {
        let c = &store[cid];
        if c.is_garbage() || c.is_xor() || c.len() != 3 {
            continue;
        }
        let others: Vec<Lit> = c.literals.iter().copied().filter(|&x| x != !r0).collect();
        if others.len() != 2 {
            continue;
        }
        let (a, b) = (others[0], others[1]);
        let b_r0_a = find_binary(store, r0, !a);
        let b_r0_b = find_binary(store, r0, !b);
        let b_r1_a = find_binary(store, r1, a);
        let b_r1_b = find_binary(store, r1, b);
        let tern_r1 = find_ternary(store, !r1, !a, !b);
        if let (Some(ba), Some(bb), Some(ca), Some(cb), Some(tr)) =
            (b_r0_a, b_r0_b, b_r1_a, b_r1_b, tern_r1)
        {
            // lhs ↔ a⊕b as a value identity rearranges to
            // var_lhs ⊕ var_a ⊕ var_b = s_lhs ⊕ s_a ⊕ s_b, where `s_x`
            // is 1 exactly when literal `x` is negative.
            let parity = !lhs.is_positive() ^ !a.is_positive() ^ !b.is_positive();
            return Some(Plan {
                top: [base, top0, top1],
                r0_gate: [cid, ba, bb],
                r1_gate: [tr, ca, cb],
                pivots: (r0.var(), r1.var()),
                vars: (lhs.var(), a.var(), b.var()),
                parity,
            });
        }
    }
    None
}

fn find_binary(store: &Store, a: Lit, b: Lit) -> Option<ConstraintId> {
    for &cid in store.occ.list(a) {
        let c = &store[cid];
        if c.is_garbage() || c.is_xor() || c.len() != 2 {
            continue;
        }
        if c.literals.contains(&b) {
            return Some(cid);
        }
    }
    None
}

fn find_ternary(store: &Store, a: Lit, b: Lit, c_lit: Lit) -> Option<ConstraintId> {
    for &cid in store.occ.list(a) {
        let c = &store[cid];
        if c.is_garbage() || c.is_xor() || c.len() != 3 {
            continue;
        }
        if c.literals.contains(&b) && c.literals.contains(&c_lit) {
            return Some(cid);
        }
    }
    None
}

fn apply<W: Write>(store: &mut Store, journal: &mut Journal<W>, plan: Plan) {
    let (lhs, a, b) = plan.vars;
    let xor_lits = vec![Lit::new(lhs as i32), Lit::new(a as i32), Lit::new(b as i32)];
    store.new_xor(plan.parity, xor_lits);

    let (r0_var, r1_var) = plan.pivots;
    for &cid in &plan.r0_gate {
        store[cid].make_pivot_first(r0_var);
        store.weaken(cid, journal);
    }
    for &cid in &plan.r1_gate {
        store[cid].make_pivot_first(r1_var);
        store.weaken(cid, journal);
    }
    for &cid in &plan.top {
        store.mark_garbage(cid);
    }

    store.stats.extracted += 1;
    store.stats.gates += 1;
}
