use crate::core::gc::format_percent;
use crate::core::model::{FASTA_SUFFIX, REPORT_SUFFIX, ReportRow};
use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// `dir/sample.fa` -> `dir/sample_GC.csv`.
pub fn output_path(input: &Path) -> Result<PathBuf> {
    let name = input
        .file_name()
        .and_then(|s| s.to_str())
        .with_context(|| format!("invalid input file name {}", input.display()))?;
    let stem = name.strip_suffix(FASTA_SUFFIX).unwrap_or(name);
    Ok(input.with_file_name(format!("{}{}", stem, REPORT_SUFFIX)))
}

/// Writes headerless `name,gc` rows, replacing whatever is at `path`.
pub fn write(path: &Path, rows: &[ReportRow]) -> Result<()> {
    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp_path = PathBuf::from(tmp_name);

    let result = write_rows(&tmp_path, rows).and_then(|_| {
        fs::rename(&tmp_path, path)
            .with_context(|| format!("failed to move report to {}", path.display()))
    });
    match result {
        Ok(()) => Ok(()),
        Err(e) => {
            let _ = fs::remove_file(&tmp_path);
            Err(e)
        }
    }
}

fn write_rows(path: &Path, rows: &[ReportRow]) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut w = BufWriter::new(file);
    for row in rows {
        writeln!(w, "{},{}", escape_field(&row.name), format_percent(row.gc_percent))?;
    }
    w.flush()
        .with_context(|| format!("failed to flush {}", path.display()))?;
    Ok(())
}

fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
