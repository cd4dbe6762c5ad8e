use crate::core::fasta;
use crate::core::gc;
use crate::core::model::{FileOutcome, ReportRow, has_fasta_suffix};
use crate::report;
use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Processes `files` in order; one file's failure never stops the rest.
pub fn process_batch<P: AsRef<Path>>(files: &[P]) -> Vec<(PathBuf, FileOutcome)> {
    files
        .iter()
        .map(|f| {
            let path = f.as_ref();
            (path.to_path_buf(), process_file(path))
        })
        .collect()
}

pub fn process_file(path: &Path) -> FileOutcome {
    let stats = stats_enabled();
    let name = path.to_string_lossy();
    if !has_fasta_suffix(&name) {
        return FileOutcome::NotFasta;
    }

    let t0 = Instant::now();
    let outcome = match collect_rows(path).and_then(|rows| write_report(path, &rows)) {
        Ok((output, rows)) => FileOutcome::Written { output, rows },
        Err(reason) => FileOutcome::Failed { reason },
    };
    if stats {
        match &outcome {
            FileOutcome::Written { rows, .. } => eprintln!(
                "GCFROMDNA_STATS input={} rows={} time={}",
                path.display(),
                rows,
                fmt_dur(t0.elapsed())
            ),
            FileOutcome::Failed { reason } => eprintln!(
                "GCFROMDNA_STATS input={} error={:#}",
                path.display(),
                reason
            ),
            FileOutcome::NotFasta => {}
        }
    }
    outcome
}

/// All rows of a file, or the first error; partial rows are dropped with it.
pub fn collect_rows(path: &Path) -> Result<Vec<ReportRow>> {
    let mut rows = Vec::new();
    fasta::try_for_each_record(path, |record| {
        let gc_percent = gc::gc_percent(&record.sequence)
            .with_context(|| format!("record '{}'", record.description))?;
        rows.push(ReportRow {
            name: gc::format_name(&record.description),
            gc_percent,
        });
        Ok(())
    })?;
    Ok(rows)
}

fn write_report(path: &Path, rows: &[ReportRow]) -> Result<(PathBuf, usize)> {
    let output = report::gc_csv::output_path(path)?;
    report::gc_csv::write(&output, rows)
        .with_context(|| format!("failed to write {}", output.display()))?;
    Ok((output, rows.len()))
}

pub fn stats_enabled() -> bool {
    matches!(env::var("GCFROMDNA_STATS").as_deref(), Ok("1"))
}

pub fn fmt_dur(d: Duration) -> String {
    if d.as_secs_f64() < 1.0 {
        format!("{}ms", d.as_millis())
    } else {
        format!("{:.3}s", d.as_secs_f64())
    }
}
