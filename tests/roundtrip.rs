//! Round-trip equisatisfiability check (SPEC_FULL.md §8, property 7):
//! transform F to F', expand every surviving XOR back to CNF with the
//! test-only expander, and brute-force check the result is
//! equisatisfiable with the original F.

#[path = "support.rs"]
mod support;

use cnf2xnf::config::Config;
use cnf2xnf::journal::Journal;
use cnf2xnf::run_pipeline;
use std::io::Cursor;

fn parse_cnf_or_xnf(text: &str) -> (usize, Vec<Vec<i32>>, Vec<(Vec<i32>, bool)>) {
    let mut lines = text.lines();
    let header = lines.next().unwrap();
    let mut header_it = header.split_whitespace();
    assert_eq!(header_it.next(), Some("p"));
    header_it.next(); // "cnf" or "xnf"
    let num_vars: usize = header_it.next().unwrap().parse().unwrap();

    let mut clauses = Vec::new();
    let mut xors = Vec::new();
    for line in lines {
        if line.is_empty() {
            continue;
        }
        if let Some(rest) = line.strip_prefix("x -") {
            let nums: Vec<i32> = rest
                .split_whitespace()
                .map(|t| t.parse().unwrap())
                .collect();
            let vars = nums[..nums.len() - 1].to_vec();
            xors.push((vars, false));
        } else if let Some(rest) = line.strip_prefix("x ") {
            let nums: Vec<i32> = rest
                .split_whitespace()
                .map(|t| t.parse().unwrap())
                .collect();
            let vars = nums[..nums.len() - 1].to_vec();
            xors.push((vars, true));
        } else {
            let nums: Vec<i32> = line
                .split_whitespace()
                .map(|t| t.parse().unwrap())
                .collect();
            clauses.push(nums[..nums.len() - 1].to_vec());
        }
    }
    (num_vars, clauses, xors)
}

fn satisfiable(num_vars: usize, clauses: &[Vec<i32>]) -> bool {
    if num_vars == 0 {
        return clauses.is_empty();
    }
    (0..1u32 << num_vars).any(|mask| {
        let assignment: Vec<bool> = (0..num_vars).map(|i| (mask >> i) & 1 == 1).collect();
        clauses.iter().all(|clause| {
            clause.iter().any(|&lit| {
                let v = lit.unsigned_abs() as usize - 1;
                (lit > 0) == assignment[v]
            })
        })
    })
}

fn check_round_trip(input: &str) {
    let mut output = Vec::new();
    let mut journal = Journal::discarding();
    run_pipeline(
        Cursor::new(input.as_bytes().to_vec()),
        &mut output,
        &mut journal,
        &Config::default(),
    )
    .unwrap();
    let out_text = String::from_utf8(output).unwrap();

    let (in_vars, in_clauses, _) = parse_cnf_or_xnf(input);
    let input_sat = satisfiable(in_vars, &in_clauses);

    if out_text.starts_with("p cnf 0 1") {
        assert!(!input_sat, "transformer declared UNSAT but input was SAT");
        return;
    }

    let (out_vars, out_clauses, out_xors) = parse_cnf_or_xnf(&out_text);
    let mut expanded = out_clauses;
    for (vars, parity) in out_xors {
        expanded.extend(support::expand_xor(&vars, parity));
    }
    let output_sat = satisfiable(out_vars, &expanded);
    assert_eq!(
        output_sat, input_sat,
        "round-trip diverged for input {input:?} (got {out_text:?})"
    );
}

#[test]
fn round_trip_size_two_equivalence() {
    check_round_trip("p cnf 2 2\n1 -2 0\n-1 2 0\n");
}

#[test]
fn round_trip_three_xor() {
    check_round_trip("p cnf 3 4\n1 2 -3 0\n1 -2 3 0\n-1 2 3 0\n-1 -2 -3 0\n");
}

#[test]
fn round_trip_inconsistent_pair() {
    check_round_trip("p cnf 2 4\n1 -2 0\n-1 2 0\n1 2 0\n-1 -2 0\n");
}

#[test]
fn round_trip_plain_clause() {
    check_round_trip("p cnf 4 1\n-1 2 3 4 0\n");
}
