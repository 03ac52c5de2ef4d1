//! Composition metrics over an uppercase nucleotide string.

use crate::formulas::{self, SeqType};
use crate::types::NucleotideCounts;

/// Round half away from zero to `places` decimals.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

pub fn nucleotide_counts(sequence: &str) -> NucleotideCounts {
    sequence
        .bytes()
        .fold(NucleotideCounts::default(), |mut counts, base| {
            match base {
                b'A' => counts.a += 1,
                b'T' => counts.t += 1,
                b'C' => counts.c += 1,
                b'G' => counts.g += 1,
                _ => {}
            }
            counts
        })
}

pub fn gc_content(sequence: &str) -> f64 {
    round_to(formulas::gc_fraction(sequence) * 100.0, 2)
}

pub fn at_content(gc_content: f64) -> f64 {
    round_to(100.0 - gc_content, 2)
}

pub fn n_count(sequence: &str) -> u64 {
    sequence.bytes().filter(|&b| b == b'N').count() as u64
}

/// Non-overlapping left-to-right count of `CG`.
pub fn cpg_count(sequence: &str) -> u64 {
    sequence.matches("CG").count() as u64
}

/// Molecular weight with `N` stripped, rounded to two decimals.
///
/// A sequence made only of `N` has nothing to weigh and yields 0.0. Any
/// other symbol outside ACGT is passed through to the formula and reported.
pub fn molecular_weight(sequence: &str) -> Result<f64, formulas::FormulaError> {
    let clean = sequence.replace('N', "");
    if clean.is_empty() {
        return Ok(0.0);
    }
    formulas::molecular_weight(&clean, SeqType::Dna).map(|w| round_to(w, 2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formulas::FormulaError;

    #[test]
    fn counts_atcgatcg() {
        let seq = "ATCGATCG";
        let counts = nucleotide_counts(seq);
        assert_eq!(
            counts,
            NucleotideCounts {
                a: 2,
                t: 2,
                c: 2,
                g: 2
            }
        );
        assert_eq!(gc_content(seq), 50.0);
        assert_eq!(at_content(gc_content(seq)), 50.0);
        assert_eq!(n_count(seq), 0);
        assert_eq!(cpg_count(seq), 2);
    }

    #[test]
    fn ambiguous_symbols_fall_outside_counts() {
        let seq = "ACGTNRYN";
        let counts = nucleotide_counts(seq);
        assert_eq!(counts.total(), 4);
        assert_eq!(n_count(seq), 2);
        assert!(counts.total() + n_count(seq) <= seq.len() as u64);
    }

    #[test]
    fn cpg_is_literal_substring_count() {
        assert_eq!(cpg_count("CGCG"), 2);
        assert_eq!(cpg_count("CCGG"), 1);
        assert_eq!(cpg_count("GCGC"), 1);
        assert_eq!(cpg_count("ATAT"), 0);
    }

    #[test]
    fn gc_and_at_sum_to_hundred() {
        for seq in ["A", "GGC", "ACGTTGCAAN", "GATTACA", "CCCCCCCCCT"] {
            let gc = gc_content(seq);
            let at = at_content(gc);
            assert!((gc + at - 100.0).abs() < 1e-9, "{seq}: {gc} + {at}");
        }
    }

    #[test]
    fn gc_content_rounds_to_two_places() {
        // 1 of 3 symbols
        assert_eq!(gc_content("GAA"), 33.33);
        assert_eq!(at_content(33.33), 66.67);
    }

    #[test]
    fn molecular_weight_of_all_n_is_zero() {
        assert_eq!(molecular_weight("NNNN"), Ok(0.0));
    }

    #[test]
    fn molecular_weight_ignores_n() {
        assert_eq!(molecular_weight("ANNA"), molecular_weight("AA"));
        assert_eq!(molecular_weight("AA"), Ok(round_to(2.0 * 331.2218 - 18.0153, 2)));
    }

    #[test]
    fn molecular_weight_reports_other_ambiguity() {
        assert_eq!(
            molecular_weight("ACRN"),
            Err(FormulaError::InvalidBase('R'))
        );
    }
}
