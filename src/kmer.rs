//! K-mer frequency profiling with length-based sampling.
//!
//! Long sequences are downsampled deterministically before the scan: every
//! `len / 5`-th symbol is kept and the result is cut to the sample limit.
//! Windows holding any symbol outside ACGT are skipped.

use std::borrow::Cow;
use std::collections::HashMap;

use log::debug;

use crate::types::KmerFrequency;

pub const DEFAULT_K: usize = 4;
pub const DEFAULT_MAX_LENGTH: usize = 100_000;
pub const DEFAULT_TOP_N: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KmerProfiler {
    pub k: usize,
    pub max_length: usize,
    pub top_n: usize,
}

impl Default for KmerProfiler {
    fn default() -> Self {
        Self {
            k: DEFAULT_K,
            max_length: DEFAULT_MAX_LENGTH,
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl KmerProfiler {
    pub fn new(k: usize, max_length: usize, top_n: usize) -> Self {
        Self {
            k,
            max_length,
            top_n,
        }
    }

    pub fn sample<'a>(&self, sequence: &'a [u8]) -> Cow<'a, [u8]> {
        if sequence.len() <= self.max_length {
            return Cow::Borrowed(sequence);
        }
        let step = (sequence.len() / 5).max(1);
        let sampled: Vec<u8> = sequence
            .iter()
            .step_by(step)
            .take(self.max_length)
            .copied()
            .collect();
        debug!(
            "Sampled {} of {} bases for k-mer profiling (step {})",
            sampled.len(),
            sequence.len(),
            step
        );
        Cow::Owned(sampled)
    }

    /// Every valid k-mer with its count, in first-seen order.
    pub fn count(&self, sequence: &str) -> Vec<(String, u64)> {
        let mut counts: Vec<(String, u64)> = Vec::new();
        if self.k == 0 {
            return counts;
        }

        let sampled = self.sample(sequence.as_bytes());
        if sampled.len() < self.k {
            return counts;
        }

        let mut index: HashMap<&[u8], usize> = HashMap::new();
        for window in sampled.windows(self.k) {
            if !window.iter().all(|&b| matches!(b, b'A' | b'C' | b'G' | b'T')) {
                continue;
            }
            match index.get(window) {
                Some(&i) => counts[i].1 += 1,
                None => {
                    index.insert(window, counts.len());
                    // ACGT-only, so always valid UTF-8
                    counts.push((String::from_utf8_lossy(window).into_owned(), 1));
                }
            }
        }
        counts
    }

    /// Top `top_n` k-mers by descending count; ties keep first-seen order.
    pub fn profile(&self, sequence: &str) -> KmerFrequency {
        let mut counts = self.count(sequence);
        // sort_by is stable
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts.truncate(self.top_n);
        KmerFrequency(counts)
    }
}

pub fn kmer_frequencies(sequence: &str) -> KmerFrequency {
    KmerProfiler::default().profile(sequence)
}
