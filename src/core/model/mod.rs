use std::path::PathBuf;

/// Suffix an input file must carry to be parsed.
pub const FASTA_SUFFIX: &str = ".fa";

/// Appended to the input stem to name its report.
pub const REPORT_SUFFIX: &str = "_GC.csv";

#[derive(Clone, Debug, PartialEq)]
pub struct ReportRow {
    pub name: String,
    pub gc_percent: f64,
}

#[derive(Debug)]
pub enum FileOutcome {
    Written { output: PathBuf, rows: usize },
    NotFasta,
    Failed { reason: anyhow::Error },
}

impl FileOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, FileOutcome::Written { .. })
    }
}

pub fn has_fasta_suffix(name: &str) -> bool {
    name.ends_with(FASTA_SUFFIX)
}
