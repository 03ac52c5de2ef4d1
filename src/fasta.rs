use log::warn;
use seq_io::fasta::{Reader, Record};

use crate::types::SequenceRecord;

/// Parse FASTA text into records, in file order.
///
/// Lines before the first header are skipped and whitespace inside
/// sequence lines is dropped. Malformed input ends the parse early;
/// whatever was read before the problem is returned, possibly nothing.
/// Callers decide whether zero records is an error.
pub fn parse_records(text: &str) -> Vec<SequenceRecord> {
    let start = if text.starts_with('>') {
        0
    } else {
        match text.find("\n>") {
            Some(pos) => pos + 1,
            None => return Vec::new(),
        }
    };
    let mut reader = Reader::new(text[start..].as_bytes());
    let mut records = Vec::new();

    while let Some(record) = reader.next() {
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                warn!("Stopped reading FASTA after {} records: {}", records.len(), e);
                break;
            }
        };

        let id = match record.id() {
            Ok(id) => id.to_string(),
            Err(e) => {
                warn!("Skipping record with undecodable id: {}", e);
                continue;
            }
        };
        let seq: Vec<u8> = record
            .owned_seq()
            .into_iter()
            .filter(|b| !b.is_ascii_whitespace())
            .collect();
        // input was &str, so the joined sequence lines are valid UTF-8 too
        let sequence = String::from_utf8_lossy(&seq).into_owned();
        records.push(SequenceRecord::new(id, sequence));
    }

    records
}

/// The longest record; the first one wins ties.
pub fn primary_record(records: &[SequenceRecord]) -> Option<&SequenceRecord> {
    records.iter().fold(None, |best: Option<&SequenceRecord>, r| match best {
        Some(b) if b.len() >= r.len() => Some(b),
        _ => Some(r),
    })
}
