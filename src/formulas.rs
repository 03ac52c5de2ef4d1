//! Scientific formulas over a nucleotide string.
//!
//! These are the black-box collaborators of the analyzer: each takes a
//! sequence and returns a number, or a [`FormulaError`] describing the input
//! it cannot handle. Callers decide which failures are fatal.

use thiserror::Error;

/// Average monophosphate weights (Da) for single-stranded DNA.
const DNA_WEIGHTS: [(u8, f64); 4] = [
    (b'A', 331.2218),
    (b'C', 307.1971),
    (b'G', 347.2212),
    (b'T', 322.2085),
];

/// Average weight of the water lost per phosphodiester bond.
const WATER: f64 = 18.0153;

const STRICT_AMBIGUOUS: &[u8] = b"BDHKMNRVY";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormulaError {
    #[error("empty sequence")]
    EmptySequence,

    #[error("'{0}' is not a valid unambiguous DNA base")]
    InvalidBase(char),

    #[error("ambiguous base '{0}' not allowed in strict mode")]
    AmbiguousBase(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeqType {
    Dna,
}

pub fn gc_fraction(seq: &str) -> f64 {
    if seq.is_empty() {
        return 0.0;
    }
    let gc = seq
        .bytes()
        .filter(|b| matches!(b.to_ascii_uppercase(), b'G' | b'C'))
        .count();
    gc as f64 / seq.len() as f64
}

/// Molecular weight in Daltons of a linear single-stranded molecule.
pub fn molecular_weight(seq: &str, seq_type: SeqType) -> Result<f64, FormulaError> {
    if seq.is_empty() {
        return Err(FormulaError::EmptySequence);
    }
    let table = match seq_type {
        SeqType::Dna => &DNA_WEIGHTS,
    };

    let mut weight = 0.0;
    for base in seq.bytes() {
        let upper = base.to_ascii_uppercase();
        let residue = table
            .iter()
            .find(|(b, _)| *b == upper)
            .map(|(_, w)| *w)
            .ok_or(FormulaError::InvalidBase(base as char))?;
        weight += residue;
    }

    Ok(weight - (seq.len() as f64 - 1.0) * WATER)
}

/// Wallace rule melting temperature: `4 * (G + C) + 2 * (A + T)`.
///
/// Input is uppercased, whitespace is dropped and `U` reads as `T`. `S` and
/// `W` count as strong and weak bases. Any other IUPAC ambiguity code is
/// rejected.
pub fn tm_wallace(seq: &str) -> Result<f64, FormulaError> {
    let mut strong = 0u64;
    let mut weak = 0u64;
    let mut seen = 0usize;

    for base in seq.bytes().filter(|b| !b.is_ascii_whitespace()) {
        seen += 1;
        match base.to_ascii_uppercase() {
            b'G' | b'C' | b'S' => strong += 1,
            b'A' | b'T' | b'U' | b'W' => weak += 1,
            b if STRICT_AMBIGUOUS.contains(&b) => {
                return Err(FormulaError::AmbiguousBase(b as char))
            }
            _ => {}
        }
    }

    if seen == 0 {
        return Err(FormulaError::EmptySequence);
    }
    Ok(4.0 * strong as f64 + 2.0 * weak as f64)
}
