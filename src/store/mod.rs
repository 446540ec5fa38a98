//! The constraint store: a flat arena of clauses and XORs plus the
//! per-literal occurrence index that every pass queries and mutates.

use crate::types::*;
use std::ops::{Index, IndexMut};

/// Index into [`Store`]'s constraint arena. Stable for the constraint's
/// whole lifetime; never reused, even after the constraint is tombstoned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ConstraintId(pub u32);

/// API for Constraint, providing literal accessors, mirroring the
/// teacher's `ClauseIF`.
pub trait ConstraintIF {
    fn is_empty(&self) -> bool;
    fn len(&self) -> usize;
    fn iter(&self) -> std::slice::Iter<'_, Lit>;
}

#[derive(Clone, Debug)]
pub struct Constraint {
    pub literals: Vec<Lit>,
    flags: FlagConstraint,
}

impl Default for Constraint {
    fn default() -> Self {
        Constraint {
            literals: Vec::new(),
            flags: FlagConstraint::empty(),
        }
    }
}

impl Index<usize> for Constraint {
    type Output = Lit;
    fn index(&self, i: usize) -> &Lit {
        &self.literals[i]
    }
}

impl IndexMut<usize> for Constraint {
    fn index_mut(&mut self, i: usize) -> &mut Lit {
        &mut self.literals[i]
    }
}

impl ConstraintIF for Constraint {
    fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }
    fn len(&self) -> usize {
        self.literals.len()
    }
    fn iter(&self) -> std::slice::Iter<'_, Lit> {
        self.literals.iter()
    }
}

impl FlagIF for Constraint {
    type FlagType = FlagConstraint;
    fn is(&self, flag: FlagConstraint) -> bool {
        self.flags.contains(flag)
    }
    fn set(&mut self, f: FlagConstraint, b: bool) {
        self.flags.set(f, b);
    }
    fn turn_off(&mut self, flag: FlagConstraint) {
        self.flags.remove(flag);
    }
    fn turn_on(&mut self, flag: FlagConstraint) {
        self.flags.insert(flag);
    }
}

impl Constraint {
    pub fn clause(literals: Vec<Lit>) -> Self {
        Constraint {
            literals,
            flags: FlagConstraint::empty(),
        }
    }
    pub fn xor(parity: bool, literals: Vec<Lit>) -> Self {
        debug_assert!(literals.iter().all(|l| l.is_positive()));
        let mut flags = FlagConstraint::XOR;
        flags.set(FlagConstraint::PARITY, parity);
        Constraint { literals, flags }
    }
    pub fn is_garbage(&self) -> bool {
        self.is(FlagConstraint::GARBAGE)
    }
    pub fn is_xor(&self) -> bool {
        self.is(FlagConstraint::XOR)
    }
    pub fn parity(&self) -> bool {
        self.is(FlagConstraint::PARITY)
    }
    pub fn mark_garbage(&mut self) {
        self.turn_on(FlagConstraint::GARBAGE);
    }
}

/// Per-literal occurrence lists, grounded on the teacher's `LitOccurs`
/// (`pos_occurs`/`neg_occurs: Vec<ClauseId>`), but keyed by the full
/// signed literal range via an offset so a single `Vec` serves both
/// phases without a branch at every access.
#[derive(Clone, Debug, Default)]
pub struct OccurrenceIndex {
    num_vars: u32,
    occ: Vec<Vec<ConstraintId>>,
}

impl OccurrenceIndex {
    pub fn new(num_vars: u32) -> Self {
        OccurrenceIndex {
            num_vars,
            occ: vec![Vec::new(); 2 * num_vars as usize + 1],
        }
    }
    fn slot(&self, lit: Lit) -> usize {
        let v = lit.var() as i64;
        let signed = if lit.is_positive() { v } else { -v };
        (signed + self.num_vars as i64) as usize
    }
    pub fn list(&self, lit: Lit) -> &[ConstraintId] {
        &self.occ[self.slot(lit)]
    }
    pub fn connect(&mut self, cid: ConstraintId, literals: &[Lit]) {
        for &lit in literals {
            self.occ[self.slot(lit)].push(cid);
        }
    }
    /// Remove `cid` from every literal's list except `keep` (pass `None`
    /// to remove from all). Mirrors the teacher's by-value `REMOVE`.
    pub fn disconnect(&mut self, cid: ConstraintId, literals: &[Lit], keep: Option<Lit>) {
        for &lit in literals {
            if Some(lit) == keep {
                continue;
            }
            let slot = self.slot(lit);
            if let Some(pos) = self.occ[slot].iter().position(|&c| c == cid) {
                self.occ[slot].swap_remove(pos);
            }
        }
    }
    pub fn count(&self, lit: Lit) -> usize {
        self.occ[self.slot(lit)].len()
    }
    pub fn clear_all(&mut self) {
        for l in &mut self.occ {
            l.clear();
        }
    }
}

/// The constraint arena plus the bookkeeping every pass shares: the
/// occurrence index, the mark array, the clausal mask and the running
/// kept-clause count. Grounded on `shnarazk-splr`'s `ClauseDB` (a flat
/// `Vec<Clause>` plus side tables for watchers/stats).
pub struct Store {
    pub num_vars: u32,
    pub constraints: Vec<Constraint>,
    pub occ: OccurrenceIndex,
    /// scratch array, indexed by `VarId`; must be all-zero between calls.
    pub mark: Vec<i8>,
    /// `clausal[v]` iff `v` occurs in some non-garbage clause.
    pub clausal: Vec<bool>,
    /// number of original (non-extracted) clauses still live.
    pub kept: usize,
    pub stats: Stats,
    pub inconsistent: bool,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Stats {
    pub extracted: usize,
    pub direct: usize,
    pub gates: usize,
    pub equivalences: usize,
    pub eliminated: usize,
    pub substituted: usize,
    pub trivial: usize,
}

impl Store {
    pub fn new(num_vars: u32) -> Self {
        Store {
            num_vars,
            constraints: Vec::new(),
            occ: OccurrenceIndex::new(num_vars),
            mark: vec![0; num_vars as usize + 1],
            clausal: vec![false; num_vars as usize + 1],
            kept: 0,
            stats: Stats::default(),
            inconsistent: false,
        }
    }

    pub fn new_clause(&mut self, literals: Vec<Lit>) -> ConstraintId {
        let id = ConstraintId(self.constraints.len() as u32);
        self.occ.connect(id, &literals);
        self.constraints.push(Constraint::clause(literals));
        self.kept += 1;
        id
    }

    pub fn new_xor(&mut self, parity: bool, literals: Vec<Lit>) -> ConstraintId {
        let id = ConstraintId(self.constraints.len() as u32);
        self.occ.connect(id, &literals);
        self.constraints.push(Constraint::xor(parity, literals));
        id
    }

    /// Tombstone `id` without journaling: used when a rewrite is exactly
    /// equivalent (direct-encoding extraction, the "top" clauses of a
    /// gate extraction).
    pub fn mark_garbage(&mut self, id: ConstraintId) {
        let literals = self.constraints[id.0 as usize].literals.clone();
        self.occ.disconnect(id, &literals, None);
        if !self.constraints[id.0 as usize].is_xor() {
            self.kept -= 1;
        }
        self.constraints[id.0 as usize].mark_garbage();
    }

    /// Tombstone `id` and append a journal record. The constraint's first
    /// literal must already be the pivot (callers arrange this via
    /// [`Constraint::make_pivot_first`] before calling).
    pub fn weaken<W: std::io::Write>(&mut self, id: ConstraintId, journal: &mut crate::journal::Journal<W>) {
        let c = &self.constraints[id.0 as usize];
        journal.record_weaken(c.is_xor(), c.parity(), &c.literals);
        let literals = c.literals.clone();
        self.occ.disconnect(id, &literals, None);
        if !self.constraints[id.0 as usize].is_xor() {
            self.kept -= 1;
        }
        self.constraints[id.0 as usize].mark_garbage();
    }
}

impl Constraint {
    /// Rotate `literals` so that `pivot` (or its negation) becomes the
    /// first element, as required before weakening. Grounded on
    /// `cnf2xnf.c`'s `make_pivot_first_literal()`.
    pub fn make_pivot_first(&mut self, pivot_var: VarId) {
        if let Some(pos) = self.literals.iter().position(|l| l.var() == pivot_var) {
            self.literals.swap(0, pos);
        }
    }
}

impl Index<ConstraintId> for Store {
    type Output = Constraint;
    fn index(&self, id: ConstraintId) -> &Constraint {
        &self.constraints[id.0 as usize]
    }
}

impl IndexMut<ConstraintId> for Store {
    fn index_mut(&mut self, id: ConstraintId) -> &mut Constraint {
        &mut self.constraints[id.0 as usize]
    }
}
