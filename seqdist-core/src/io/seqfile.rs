//! Loader for the one-record-per-line sequence format: each non-empty line
//! is `>` followed by a label and the sequence, whitespace separated. The
//! sequence portion may be split into several chunks, which are concatenated.

use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::Path;

use crate::error::{SeqDistError, SeqDistResult};
use crate::seq::{DnaSeq, SeqRecord};

pub fn read_records_from_reader<R: BufRead>(reader: R) -> SeqDistResult<Vec<SeqRecord>> {
    let mut records = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let line_no = idx + 1;
        let body = line.strip_prefix('>').ok_or_else(|| {
            SeqDistError::malformed(format!("line {line_no}: expected '>' record marker"))
        })?;

        let mut parts = body.split_whitespace();
        let label = parts.next().ok_or_else(|| {
            SeqDistError::malformed(format!("line {line_no}: empty record after '>'"))
        })?;

        let mut seq_buf = Vec::new();
        for chunk in parts {
            seq_buf.extend_from_slice(chunk.as_bytes());
        }
        if seq_buf.is_empty() {
            return Err(SeqDistError::malformed(format!(
                "line {line_no}: record '{label}' has no sequence"
            )));
        }

        let seq = DnaSeq::new(seq_buf)?;
        records.push(SeqRecord::new(capitalize(label), seq));
    }
    Ok(records)
}

pub fn read_records_from_path(path: impl AsRef<Path>) -> SeqDistResult<Vec<SeqRecord>> {
    let file = File::open(path)?;
    read_records_from_reader(BufReader::new(file))
}

pub fn read_records_from_bytes(data: &[u8]) -> SeqDistResult<Vec<SeqRecord>> {
    read_records_from_reader(BufReader::new(Cursor::new(data)))
}

/// Labels are normalized to lowercase with the first character uppercased.
fn capitalize(label: &str) -> String {
    let lower = label.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
