//! Delimited-text serialization of records
//!
//! Fixed column order: name, sex, age, height, weight. The header line is
//! always written and is skipped on read when present.

use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};
use std::fs;
use std::path::Path;
use tempfile::NamedTempFile;

use crate::error::{BioError, Result};
use crate::models::{Candidate, Record};

/// Column names in file order
pub const HEADER: [&str; 5] = ["name", "sex", "age", "height", "weight"];

/// Read every record in the file, in file order
pub fn read_records(path: &Path) -> Result<Vec<Record>> {
    let load_err = |detail: String| BioError::StoreLoad(format!("{}: {}", path.display(), detail));

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_path(path)
        .map_err(|e| load_err(e.to_string()))?;

    let mut records = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let row = row.map_err(|e| load_err(e.to_string()))?;
        let line = row.position().map_or(index as u64 + 1, |p| p.line());

        if index == 0 && is_header(&row) {
            continue;
        }

        if row.len() != HEADER.len() {
            return Err(load_err(format!(
                "line {}: expected {} fields, found {}",
                line,
                HEADER.len(),
                row.len()
            )));
        }

        let record = Candidate::new(&row[0], &row[1], &row[2], &row[3], &row[4])
            .into_record()
            .map_err(|e| load_err(format!("line {}: {}", line, e)))?;
        records.push(record);
    }

    Ok(records)
}

/// Replace the file with the given records
///
/// Rows go to a temporary file next to `path` which is then renamed over
/// it, so a failure leaves the previous content in place.
pub fn write_records<'a>(path: &Path, records: impl IntoIterator<Item = &'a Record>) -> Result<()> {
    let flush_err = |detail: String| BioError::StoreFlush(format!("{}: {}", path.display(), detail));

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(|e| flush_err(e.to_string()))?;

    // the temp file is created 0600; carry over the data file's mode
    if let Ok(metadata) = fs::metadata(path) {
        temp.as_file()
            .set_permissions(metadata.permissions())
            .map_err(|e| flush_err(e.to_string()))?;
    }

    {
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .from_writer(temp.as_file_mut());

        writer
            .write_record(HEADER)
            .map_err(|e| flush_err(e.to_string()))?;
        for record in records {
            writer
                .serialize(record)
                .map_err(|e| flush_err(e.to_string()))?;
        }
        writer.flush().map_err(|e| flush_err(e.to_string()))?;
    }

    temp.as_file()
        .sync_all()
        .map_err(|e| flush_err(e.to_string()))?;
    temp.persist(path)
        .map_err(|e| flush_err(e.error.to_string()))?;

    Ok(())
}

fn is_header(row: &StringRecord) -> bool {
    row.len() == HEADER.len()
        && row
            .iter()
            .zip(HEADER)
            .all(|(field, name)| field.eq_ignore_ascii_case(name))
}
