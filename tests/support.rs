//! Test-only XOR-to-CNF expander, used solely to drive the round-trip
//! equisatisfiability property (SPEC_FULL.md §8, property 7). Grounded
//! on the same direct k-XOR encoding `cnf2xnf.c`/`src/extract/direct.rs`
//! recognize in the forward direction, run in reverse: rather than
//! porting `xnf2cnf3.c`'s Tseitin recursion (which introduces fresh
//! variables to keep every clause ternary), this expands a k-XOR
//! directly into its `2^(k-1)` clauses — correct for any `k`, and
//! sufficient for the modest XOR sizes this crate's own extraction and
//! elimination ever produce.

/// The `2^(k-1)` clauses equivalent to `vars[0] ⊕ ... ⊕ vars[k-1] = parity`
/// (`parity` true means the sum is 1). Each clause is a list of signed
/// literals built from `vars` (assumed positive, distinct).
pub fn expand_xor(vars: &[i32], parity: bool) -> Vec<Vec<i32>> {
    let k = vars.len();
    assert!(k >= 1, "an XOR needs at least one variable");
    let target = if parity { 1 } else { 0 };
    let base_parity = (k + 1 + target) % 2;

    let mut clauses = Vec::with_capacity(1usize << (k.saturating_sub(1)));
    for sigma in 0u32..(1 << k) {
        if (sigma.count_ones() as usize) % 2 != base_parity {
            continue;
        }
        let clause: Vec<i32> = vars
            .iter()
            .enumerate()
            .map(|(i, &v)| if (sigma >> i) & 1 == 1 { v } else { -v })
            .collect();
        clauses.push(clause);
    }
    clauses
}

#[cfg(test)]
mod tests {
    use super::expand_xor;

    fn satisfies(clause: &[i32], assignment: &[bool]) -> bool {
        clause.iter().any(|&lit| {
            let v = lit.unsigned_abs() as usize - 1;
            (lit > 0) == assignment[v]
        })
    }

    fn all_assignments(n: usize) -> Vec<Vec<bool>> {
        (0..1u32 << n)
            .map(|mask| (0..n).map(|i| (mask >> i) & 1 == 1).collect())
            .collect()
    }

    #[test]
    fn size_two_parity_zero_matches_direct_family() {
        let clauses = expand_xor(&[1, 2], false);
        let mut sorted: Vec<Vec<i32>> = clauses;
        sorted.sort();
        assert_eq!(sorted, vec![vec![-1, 2], vec![1, -2]]);
    }

    #[test]
    fn size_three_parity_zero_matches_corrected_example() {
        let mut clauses = expand_xor(&[1, 2, 3], false);
        clauses.sort();
        let mut expected = vec![
            vec![1, 2, -3],
            vec![1, -2, 3],
            vec![-1, 2, 3],
            vec![-1, -2, -3],
        ];
        expected.sort();
        assert_eq!(clauses, expected);
    }

    #[test]
    fn expansion_is_equisatisfiable_for_every_k_up_to_six() {
        for k in 1..=6usize {
            let vars: Vec<i32> = (1..=k as i32).collect();
            for &parity in &[false, true] {
                let clauses = expand_xor(&vars, parity);
                for assignment in all_assignments(k) {
                    let sum_is_one = assignment.iter().filter(|&&b| b).count() % 2 == 1;
                    let cnf_satisfied = clauses.iter().all(|c| satisfies(c, &assignment));
                    assert_eq!(cnf_satisfied, sum_is_one == parity, "k={k} parity={parity} assignment={assignment:?}");
                }
            }
        }
    }
}
