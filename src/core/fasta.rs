use crate::core::io::InputSource;
use anyhow::{Context, Result};
use bio::io::fasta;
use std::io::Read;
use std::path::Path;

/// One FASTA entry: the header text after `>` and its residues.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SequenceRecord {
    pub description: String,
    pub sequence: Vec<u8>,
}

impl SequenceRecord {
    pub fn from_record(record: &fasta::Record) -> Self {
        let description = match record.desc() {
            Some(desc) => format!("{} {}", record.id(), desc),
            None => record.id().to_string(),
        };
        Self {
            description,
            sequence: record.seq().to_vec(),
        }
    }
}

/// Streams every record of `path` into `f`, stopping at the first error.
pub fn try_for_each_record<F>(path: &Path, f: F) -> Result<()>
where
    F: FnMut(SequenceRecord) -> Result<()>,
{
    let mut source = InputSource::open(path)?;
    visit(source.reader(), f).with_context(|| format!("failed to parse {}", path.display()))
}

pub fn visit<R, F>(reader: R, mut f: F) -> Result<()>
where
    R: Read,
    F: FnMut(SequenceRecord) -> Result<()>,
{
    for (i, record) in fasta::Reader::new(reader).records().enumerate() {
        let record = record.with_context(|| format!("malformed FASTA record #{}", i + 1))?;
        f(SequenceRecord::from_record(&record))?;
    }
    Ok(())
}
