use std::{
    io::{BufWriter, Write},
    path::Path,
};

use anyhow::{anyhow, Context, Result};
use serde::Serialize;

/// Serialize `report` as JSON to `writer`, followed by a newline.
pub fn write_json<W: Write, T: Serialize>(writer: W, report: &T, pretty: bool) -> Result<()> {
    let mut writer = BufWriter::new(writer);
    if pretty {
        serde_json::to_writer_pretty(&mut writer, report)?;
    } else {
        serde_json::to_writer(&mut writer, report)?;
    }
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Write `report` to `outpath`, or to stdout when no path is given.
pub fn emit<P: AsRef<Path>, T: Serialize>(outpath: Option<P>, report: &T, pretty: bool) -> Result<()> {
    match outpath {
        Some(outpath) => {
            let outpath = outpath.as_ref();
            if let Some(parent) = outpath.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| anyhow!("Could not create directory: {:?}", parent))?;
            }
            let outfile = std::fs::File::create(outpath)
                .with_context(|| anyhow!("Could not create file: {:?}", outpath))?;
            write_json(outfile, report, pretty)
        }
        None => write_json(std::io::stdout().lock(), report, pretty),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{KmerFrequency, NormalizedValues};

    #[test]
    fn kmer_frequency_keeps_rank_order() {
        let freq = KmerFrequency(vec![("TTTT".into(), 5), ("AAAA".into(), 2)]);
        let mut buf = Vec::new();
        write_json(&mut buf, &freq, false).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "{\"TTTT\":5,\"AAAA\":2}\n");
    }

    #[test]
    fn normalized_values_use_metric_keys() {
        let values = NormalizedValues([0.5, 0.0, 1.0, 0.5, 0.25, 0.5, 0.5]);
        let json = serde_json::to_value(values).unwrap();
        assert_eq!(json["size_bp"], 0.5);
        assert_eq!(json["gc_content"], 0.0);
        assert_eq!(json["at_content"], 1.0);
        assert_eq!(json["cpg_count"], 0.25);
        assert_eq!(json.as_object().unwrap().len(), 7);
    }

    #[test]
    fn emit_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested").join("report.json");
        emit(Some(&out), &KmerFrequency::default(), true).unwrap();
        assert_eq!(std::fs::read_to_string(&out).unwrap().trim(), "{}");
    }
}
