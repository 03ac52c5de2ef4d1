//! Descriptive statistics for a FASTA genome and a normalized comparison of two.

pub mod analyzer;
pub mod compare;
pub mod error;
pub mod fasta;
pub mod formulas;
pub mod io;
pub mod kmer;
pub mod metrics;
pub mod output;
pub mod types;

pub use analyzer::{analyze, analyze_with, AnalysisConfig};
pub use compare::{compare_genomes, normalize};
pub use error::{AnalysisError, ErrorKind};
