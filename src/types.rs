use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRecord {
    pub id: String,
    pub sequence: String,
}

impl SequenceRecord {
    pub fn new(id: String, sequence: String) -> Self {
        Self { id, sequence }
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    pub filename: String,
    pub content: Vec<u8>,
}

impl Upload {
    pub fn new(filename: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            content,
        }
    }
}

/// The seven radar metrics, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    SizeBp,
    GcContent,
    AtContent,
    NCount,
    CpgCount,
    MolWeight,
    TmWallace,
}

impl Metric {
    pub const ALL: [Metric; 7] = [
        Metric::SizeBp,
        Metric::GcContent,
        Metric::AtContent,
        Metric::NCount,
        Metric::CpgCount,
        Metric::MolWeight,
        Metric::TmWallace,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Metric::SizeBp => "size_bp",
            Metric::GcContent => "gc_content",
            Metric::AtContent => "at_content",
            Metric::NCount => "n_count",
            Metric::CpgCount => "cpg_count",
            Metric::MolWeight => "mol_weight",
            Metric::TmWallace => "tm_wallace",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricSet {
    pub size_bp: u64,
    pub gc_content: f64,
    pub at_content: f64,
    pub n_count: u64,
    pub cpg_count: u64,
    pub mol_weight: f64,
    pub tm_wallace: f64,
}

impl MetricSet {
    pub fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::SizeBp => self.size_bp as f64,
            Metric::GcContent => self.gc_content,
            Metric::AtContent => self.at_content,
            Metric::NCount => self.n_count as f64,
            Metric::CpgCount => self.cpg_count as f64,
            Metric::MolWeight => self.mol_weight,
            Metric::TmWallace => self.tm_wallace,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NucleotideCounts {
    #[serde(rename = "A")]
    pub a: u64,
    #[serde(rename = "T")]
    pub t: u64,
    #[serde(rename = "C")]
    pub c: u64,
    #[serde(rename = "G")]
    pub g: u64,
}

impl NucleotideCounts {
    pub fn total(&self) -> u64 {
        self.a + self.t + self.c + self.g
    }
}

/// Ranked k-mer counts, highest first. Serialized as a JSON object in rank order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KmerFrequency(pub Vec<(String, u64)>);

impl KmerFrequency {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, kmer: &str) -> Option<u64> {
        self.0
            .iter()
            .find(|(k, _)| k == kmer)
            .map(|(_, count)| *count)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(k, c)| (k.as_str(), *c))
    }
}

impl Serialize for KmerFrequency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (kmer, count) in &self.0 {
            map.serialize_entry(kmer, count)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenomeAnalysisResult {
    pub filename: String,
    pub metrics: MetricSet,
    pub nucleotide_counts: NucleotideCounts,
    pub kmer_freq: KmerFrequency,
}

/// One genome's side of a normalized pair, indexed like [`Metric::ALL`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedValues(pub [f64; 7]);

impl NormalizedValues {
    pub fn get(&self, metric: Metric) -> f64 {
        self.0[metric as usize]
    }
}

impl Serialize for NormalizedValues {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Metric::ALL.len()))?;
        for (metric, value) in Metric::ALL.iter().zip(self.0.iter()) {
            map.serialize_entry(metric.key(), value)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NormalizedMetrics {
    pub genome_a_normalized: NormalizedValues,
    pub genome_b_normalized: NormalizedValues,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonReport {
    pub genome_a: GenomeAnalysisResult,
    pub genome_b: GenomeAnalysisResult,
    pub normalized_metrics: NormalizedMetrics,
}
