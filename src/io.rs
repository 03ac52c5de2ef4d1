use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use flate2::read::GzDecoder;
use log::info;

use crate::error::{AnalysisError, Result};
use crate::types::Upload;

pub const FASTA_EXTENSIONS: [&str; 3] = [".fasta", ".fa", ".fna"];

/// Accept `.fasta`, `.fa` and `.fna`, case-insensitively, optionally gzipped.
pub fn validate_filename(filename: &str) -> Result<()> {
    if filename.is_empty() {
        return Err(AnalysisError::MissingFilename);
    }
    let lower = filename.to_lowercase();
    let stem = lower.strip_suffix(".gz").unwrap_or(&lower);
    if FASTA_EXTENSIONS.iter().any(|ext| stem.ends_with(ext)) {
        Ok(())
    } else {
        Err(AnalysisError::InvalidFileType {
            filename: filename.to_string(),
        })
    }
}

pub fn load_upload<P>(path: P) -> Result<Upload>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    validate_filename(&filename)?;

    let mut file = BufReader::new(File::open(path)?);
    let mut content = Vec::new();
    if filename.to_lowercase().ends_with(".gz") {
        GzDecoder::new(file)
            .read_to_end(&mut content)
            .map_err(|source| AnalysisError::Decompress {
                filename: filename.clone(),
                source,
            })?;
    } else {
        file.read_to_end(&mut content)?;
    }
    info!("Read {}: {} bytes", filename, content.len());

    Ok(Upload::new(filename, content))
}
