// src/output.rs

use anyhow::{Context, Result};
use csv::WriterBuilder;
use std::path::Path;
use tracing::debug;

use crate::extract::FeeRecord;

/// Destination file, written into the working directory.
pub const OUTPUT_FILE: &str = "sodaigomi.csv";

/// Column labels, matching the source table.
const HEADERS: [&str; 3] = ["分類", "品目名", "料金"];

/// Write the header plus one row per record to `path`, truncating any
/// existing file. An empty record set still produces the header line.
pub fn write_csv(path: impl AsRef<Path>, records: &[FeeRecord]) -> Result<()> {
    let path = path.as_ref();
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("failed to open {} for writing", path.display()))?;

    writer.write_record(HEADERS)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer
        .flush()
        .with_context(|| format!("failed to flush {}", path.display()))?;

    debug!(rows = records.len(), path = %path.display(), "csv written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use csv::ReaderBuilder;
    use std::fs;
    use tempfile::tempdir;

    fn sample_records() -> Vec<FeeRecord> {
        vec![
            FeeRecord {
                category: "家具類".into(),
                item_name: "いす".into(),
                price: "300円".into(),
            },
            FeeRecord {
                category: "電化製品".into(),
                item_name: "扇風機, 小型".into(),
                price: "300円 (税込)".into(),
            },
        ]
    }

    #[test]
    fn writes_header_and_rows_in_order() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("out.csv");
        write_csv(&path, &sample_records())?;

        let content = fs::read_to_string(&path)?;
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("分類,品目名,料金"));
        assert_eq!(content.lines().count(), 3);
        Ok(())
    }

    #[test]
    fn empty_record_set_yields_header_only() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("out.csv");
        write_csv(&path, &[])?;

        let content = fs::read_to_string(&path)?;
        assert_eq!(content, "分類,品目名,料金\n");
        Ok(())
    }

    #[test]
    fn overwrites_previous_output() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("out.csv");
        fs::write(&path, "stale contents\nfrom a previous run\n")?;
        write_csv(&path, &sample_records())?;

        let content = fs::read_to_string(&path)?;
        assert!(!content.contains("stale"));
        assert_eq!(content.lines().count(), 3);
        Ok(())
    }

    #[test]
    fn round_trips_through_a_csv_reader() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("out.csv");
        let records = sample_records();
        write_csv(&path, &records)?;

        // headers are the Japanese labels, so map fields by position
        let mut reader = ReaderBuilder::new().has_headers(false).from_path(&path)?;
        let read_back: Vec<FeeRecord> = reader
            .deserialize()
            .skip(1)
            .collect::<std::result::Result<_, _>>()?;
        assert_eq!(read_back, records);
        Ok(())
    }
}
