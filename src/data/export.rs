use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};

use super::model::Record;

/// Write records to a file. Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – canonical column labels as header, missing cells left empty
/// * `.json` – `[{ "Volcano Name": ..., "Country": ..., ... }, ...]`
pub fn export_records(path: &Path, records: &[Record]) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => write_csv(path, records),
        "json" => write_json(path, records),
        other => bail!("Unsupported export extension: .{other}"),
    }
}

fn write_csv(path: &Path, records: &[Record]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).context("creating CSV file")?;
    for rec in records {
        writer.serialize(rec).context("writing CSV row")?;
    }
    writer.flush().context("flushing CSV file")?;
    Ok(())
}

fn write_json(path: &Path, records: &[Record]) -> Result<()> {
    let file = File::create(path).context("creating JSON file")?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records).context("writing JSON")?;
    writer.flush().context("flushing JSON file")?;
    Ok(())
}
