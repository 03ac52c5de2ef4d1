//! Per-genome analysis: pick the primary record of an uploaded FASTA file
//! and compute its metrics, base composition and k-mer profile.

use log::{debug, info, warn};

use crate::error::{AnalysisError, Result};
use crate::fasta::{parse_records, primary_record};
use crate::formulas;
use crate::kmer::{KmerProfiler, DEFAULT_K, DEFAULT_MAX_LENGTH, DEFAULT_TOP_N};
use crate::metrics::{self, round_to};
use crate::types::{GenomeAnalysisResult, MetricSet};

pub const DEFAULT_TM_WINDOW: usize = 1000;

/// Tunables for [`analyze_with`]. `Default` gives the standard analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisConfig {
    pub kmer_size: usize,
    pub kmer_sample_limit: usize,
    pub top_kmers: usize,
    /// Leading bases used for the melting temperature estimate.
    pub tm_window: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            kmer_size: DEFAULT_K,
            kmer_sample_limit: DEFAULT_MAX_LENGTH,
            top_kmers: DEFAULT_TOP_N,
            tm_window: DEFAULT_TM_WINDOW,
        }
    }
}

impl AnalysisConfig {
    pub fn validate(&self) -> Result<()> {
        if self.kmer_size == 0 {
            return Err(AnalysisError::invalid_parameter(
                "kmer_size",
                self.kmer_size,
                "must be at least 1",
            ));
        }
        Ok(())
    }

    fn profiler(&self) -> KmerProfiler {
        KmerProfiler::new(self.kmer_size, self.kmer_sample_limit, self.top_kmers)
    }
}

/// Analyze raw FASTA bytes with the default configuration.
pub fn analyze(content: &[u8], filename: &str) -> Result<GenomeAnalysisResult> {
    analyze_with(content, filename, &AnalysisConfig::default())
}

pub fn analyze_with(
    content: &[u8],
    filename: &str,
    config: &AnalysisConfig,
) -> Result<GenomeAnalysisResult> {
    config.validate()?;

    let text = std::str::from_utf8(content).map_err(|source| AnalysisError::Decode {
        filename: filename.to_string(),
        source,
    })?;

    let records = parse_records(text);
    let record = primary_record(&records).ok_or_else(|| AnalysisError::NoSequences {
        filename: filename.to_string(),
    })?;
    if record.is_empty() {
        return Err(AnalysisError::EmptySequence {
            filename: filename.to_string(),
        });
    }
    if records.len() > 1 {
        info!(
            "{}: {} records, using longest '{}' ({} bp)",
            filename,
            records.len(),
            record.id,
            record.len()
        );
    }

    let sequence = record.sequence.to_ascii_uppercase();

    let gc_content = metrics::gc_content(&sequence);
    let mol_weight =
        metrics::molecular_weight(&sequence).map_err(|source| AnalysisError::Formula {
            filename: filename.to_string(),
            metric: "mol_weight",
            source,
        })?;

    let metric_set = MetricSet {
        size_bp: record.len() as u64,
        gc_content,
        at_content: metrics::at_content(gc_content),
        n_count: metrics::n_count(&sequence),
        cpg_count: metrics::cpg_count(&sequence),
        mol_weight,
        tm_wallace: melting_temperature(&record.sequence, config.tm_window),
    };
    debug!("{}: {:?}", filename, metric_set);

    Ok(GenomeAnalysisResult {
        filename: filename.to_string(),
        metrics: metric_set,
        nucleotide_counts: metrics::nucleotide_counts(&sequence),
        kmer_freq: config.profiler().profile(&sequence),
    })
}

/// Wallace Tm over the leading `window` symbols of `sequence` with `N` removed.
///
/// Falls back to 0.0 when nothing is left after cleaning or the formula
/// rejects the sample.
pub fn melting_temperature(sequence: &str, window: usize) -> f64 {
    let end = sequence
        .char_indices()
        .nth(window)
        .map_or(sequence.len(), |(i, _)| i);
    let sample = sequence[..end].replace('N', "");
    if sample.is_empty() {
        return 0.0;
    }

    match formulas::tm_wallace(&sample) {
        Ok(tm) => round_to(tm, 2),
        Err(e) => {
            warn!("Melting temperature unavailable, using 0.0: {}", e);
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tm_uses_leading_window() {
        let seq = format!("{}{}", "G".repeat(10), "A".repeat(10));
        assert_eq!(melting_temperature(&seq, 10), 40.0);
        assert_eq!(melting_temperature(&seq, 1000), 60.0);
    }

    #[test]
    fn tm_all_n_is_zero() {
        assert_eq!(melting_temperature("NNNN", 1000), 0.0);
    }

    #[test]
    fn tm_ambiguous_sample_falls_back() {
        assert_eq!(melting_temperature("ACGTRY", 1000), 0.0);
        // lowercase n is not stripped and the formula rejects it
        assert_eq!(melting_temperature("ACGTn", 1000), 0.0);
    }

    #[test]
    fn tm_ignores_ambiguity_past_window() {
        assert_eq!(melting_temperature("ACGTRRRR", 4), 12.0);
    }

    #[test]
    fn zero_k_is_rejected() {
        let config = AnalysisConfig {
            kmer_size: 0,
            ..AnalysisConfig::default()
        };
        let err = analyze_with(b">s\nACGT\n", "s.fa", &config).unwrap_err();
        assert!(err.is_parse_error());
    }
}
