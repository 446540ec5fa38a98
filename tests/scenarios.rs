//! End-to-end pipeline scenarios, one per case named in SPEC_FULL.md §8.

use cnf2xnf::config::Config;
use cnf2xnf::journal::Journal;
use cnf2xnf::run_pipeline;
use std::io::Cursor;

fn transform(input: &str, config: &Config) -> String {
    let mut output = Vec::new();
    let mut journal = Journal::discarding();
    run_pipeline(Cursor::new(input.as_bytes().to_vec()), &mut output, &mut journal, config).unwrap();
    String::from_utf8(output).unwrap()
}

/// A config isolating extraction: both the size-2 and size-3 examples
/// here are single free-standing XOR components (their variables occur
/// nowhere else), so with elimination enabled they would be fully
/// absorbed rather than surviving as an explicit XOR line — matching
/// the reference tool's own `eliminate_variable()`, which weakens even
/// a variable's sole occurrence. Disabling elimination isolates the
/// extraction pass these scenarios are about.
fn extraction_only() -> Config {
    Config {
        eliminate_xors: false,
        ..Config::default()
    }
}

/// S1: size-2 equivalence extracts to a parity-0 XOR.
#[test]
fn s1_size_two_equivalence() {
    let out = transform("p cnf 2 2\n1 -2 0\n-1 2 0\n", &extraction_only());
    assert_eq!(out, "p xnf 2 1\nx -1 2 0\n");
}

/// S2: a 4-clause direct 3-XOR encoding extracts to parity 0.
#[test]
fn s2_three_xor_parity_zero() {
    let out = transform(
        "p cnf 3 4\n1 2 -3 0\n1 -2 3 0\n-1 2 3 0\n-1 -2 -3 0\n",
        &extraction_only(),
    );
    assert_eq!(out, "p xnf 3 1\nx -1 2 3 0\n");
}

/// S3: eliminating a shared variable between two direct-extracted XORs
/// that disagree on parity collapses the formula to the canonical UNSAT.
#[test]
fn s3_trivially_unsatisfiable_parity() {
    // a⊕b = 0 (from `a -b`, `-a b`) and a⊕b = 1 (from `a b`, `-a -b`)
    // share variable `a`; eliminating it sums the two XORs to `0 = 1`.
    let out = transform(
        "p cnf 2 4\n1 -2 0\n-1 2 0\n1 2 0\n-1 -2 0\n",
        &Config::default(),
    );
    assert_eq!(out, "p cnf 0 1\n0\n");
}

/// S4: compaction closes a gap in the variable numbering; without it the
/// gap survives in the header.
#[test]
fn s4_no_compact_vs_compact() {
    // A single clause over `{1, 3}` with two positive literals: the
    // direct-extraction base-clause restriction (at most one positive
    // literal) rules it out as an XOR candidate, so it survives
    // untouched and only compaction acts on it.
    let input = "p cnf 3 1\n1 3 0\n";

    let no_compact = Config {
        compact_variables: false,
        ..Config::default()
    };
    let out = transform(input, &no_compact);
    assert!(out.starts_with("p cnf 3 "), "header: {out}");

    let mut output = Vec::new();
    let mut journal_buf = Vec::new();
    let mut journal = Journal::new(&mut journal_buf);
    run_pipeline(
        Cursor::new(input.as_bytes().to_vec()),
        &mut output,
        &mut journal,
        &Config::default(),
    )
    .unwrap();
    let out = String::from_utf8(output).unwrap();
    assert!(out.starts_with("p cnf 2 "), "header: {out}");
    let journal_text = String::from_utf8(journal_buf).unwrap();
    assert!(journal_text.contains("x -3 2 0"), "journal: {journal_text}");
}

/// S5: a 9-clause Tseitin AND-gate encoding of `z = x ⊕ y` extracts to a
/// single 3-XOR with no surviving clauses.
#[test]
fn s5_gate_encoding() {
    // Base C = 1 -4 -5 0 (lhs=1, r0=4, r1=5); top gate `1 = 4 ∧ 5`.
    // r0's own gate is `4 = 2 ∨ 3` (¬4 = ¬2 ∧ ¬3): ternary -4 2 3, binaries
    // 4 -2 / 4 -3. r1's own gate is `5 = ¬2 ∨ ¬3` (¬5 = 2 ∧ 3): ternary
    // -5 -2 -3, binaries 5 2 / 5 3. Together `1 = (2∨3) ∧ (¬2∨¬3) = 2⊕3`.
    let input = "p cnf 5 9\n\
         1 -4 -5 0\n\
         -1 4 0\n\
         -1 5 0\n\
         -4 2 3 0\n\
         4 -2 0\n\
         4 -3 0\n\
         -5 -2 -3 0\n\
         5 2 0\n\
         5 3 0\n";
    let config = Config {
        eliminate_xors: false,
        compact_variables: false,
        ..Config::default()
    };
    let out = transform(input, &config);
    let mut lines: Vec<&str> = out.lines().collect();
    let header = lines.remove(0);
    assert_eq!(header, "p xnf 5 1");
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0], "x -1 2 3 0");
}

/// S6: an unrecognized clause passes through untouched.
#[test]
fn s6_mixed_unrecognized() {
    let out = transform("p cnf 4 1\n-1 2 3 4 0\n", &Config::default());
    assert_eq!(out, "p cnf 4 1\n-1 2 3 4 0\n");
}
