use std::io;
use thiserror::Error;

use crate::formulas::FormulaError;

/// How a caller should treat a failed analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The uploaded content or a parameter was bad; the caller's fault.
    Parse,
    /// Anything else; a fault on our side.
    Unexpected,
}

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("No filename provided")]
    MissingFilename,

    #[error("Invalid file type: {filename}. Please upload FASTA files (.fasta, .fa, .fna)")]
    InvalidFileType { filename: String },

    #[error("Could not decompress {filename}: {source}")]
    Decompress {
        filename: String,
        #[source]
        source: io::Error,
    },

    #[error("Could not decode {filename} as UTF-8 text")]
    Decode {
        filename: String,
        #[source]
        source: std::str::Utf8Error,
    },

    #[error("No valid sequences found in {filename}")]
    NoSequences { filename: String },

    #[error("Primary sequence in {filename} is empty")]
    EmptySequence { filename: String },

    #[error("Invalid parameter: {name} = {value}, {message}")]
    InvalidParameter {
        name: String,
        value: String,
        message: String,
    },

    #[error("Cannot compute {metric} for {filename}: {source}")]
    Formula {
        filename: String,
        metric: &'static str,
        #[source]
        source: FormulaError,
    },
}

pub type Result<T> = std::result::Result<T, AnalysisError>;

impl AnalysisError {
    pub fn invalid_parameter(
        name: impl Into<String>,
        value: impl ToString,
        message: impl Into<String>,
    ) -> Self {
        AnalysisError::InvalidParameter {
            name: name.into(),
            value: value.to_string(),
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AnalysisError::MissingFilename
            | AnalysisError::InvalidFileType { .. }
            | AnalysisError::Decompress { .. }
            | AnalysisError::Decode { .. }
            | AnalysisError::NoSequences { .. }
            | AnalysisError::EmptySequence { .. }
            | AnalysisError::InvalidParameter { .. }
            | AnalysisError::Formula { .. } => ErrorKind::Parse,
            AnalysisError::Io(_) => ErrorKind::Unexpected,
        }
    }

    pub fn is_parse_error(&self) -> bool {
        self.kind() == ErrorKind::Parse
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_errors_name_the_file() {
        let err = AnalysisError::NoSequences {
            filename: "empty.fasta".into(),
        };
        assert_eq!(err.to_string(), "No valid sequences found in empty.fasta");
        assert!(err.is_parse_error());
    }

    #[test]
    fn unweighable_bases_are_input_faults() {
        let err = AnalysisError::Formula {
            filename: "iupac.fa".into(),
            metric: "mol_weight",
            source: FormulaError::InvalidBase('R'),
        };
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert!(err.to_string().contains("mol_weight"));
        assert!(err.to_string().contains("iupac.fa"));
    }

    #[test]
    fn io_failures_are_unexpected() {
        let err = AnalysisError::from(io::Error::new(io::ErrorKind::Other, "disk"));
        assert_eq!(err.kind(), ErrorKind::Unexpected);
        assert!(!err.is_parse_error());
    }
}
