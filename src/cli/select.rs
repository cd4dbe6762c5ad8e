use crate::core::model::has_fasta_suffix;
use anyhow::{Context, Result};
use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;

pub const QUIT: &str = "q";
pub const ALL: &str = "all";

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Selection {
    Quit,
    All,
    Index(usize),
    Name(String),
    Invalid,
}

/// Visible `.fa` entries of `dir`, sorted by name.
pub fn list_candidates(dir: &Path) -> Result<Vec<String>> {
    let mut files = Vec::new();
    let entries =
        fs::read_dir(dir).with_context(|| format!("failed to list {}", dir.display()))?;
    for entry in entries {
        let entry = entry.with_context(|| format!("failed to list {}", dir.display()))?;
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        if name.starts_with('.') || !has_fasta_suffix(&name) {
            continue;
        }
        files.push(name);
    }
    files.sort();
    Ok(files)
}

pub fn classify(response: &str, files: &[String]) -> Selection {
    if response == QUIT {
        return Selection::Quit;
    }
    if response == ALL {
        return Selection::All;
    }
    // Signed parse so `-0` and `+1` pick entries as well.
    if let Ok(i) = response.trim().parse::<i64>() {
        if let Ok(i) = usize::try_from(i) {
            if i < files.len() {
                return Selection::Index(i);
            }
        }
    }
    if files.iter().any(|f| f == response) {
        return Selection::Name(response.to_string());
    }
    Selection::Invalid
}

/// Prompts until a usable answer arrives. `None` means quit (or input closed).
pub fn prompt<R, W>(files: &[String], mut input: R, mut out: W) -> Result<Option<Vec<String>>>
where
    R: BufRead,
    W: Write,
{
    let mut line = String::new();
    loop {
        writeln!(out, "This folder contains:")?;
        for (i, f) in files.iter().enumerate() {
            writeln!(out, "  {} {}", i, f)?;
        }
        writeln!(out)?;
        writeln!(out, "Select fasta file by number or name...")?;
        write!(out, " ...or type '{}' to parse all or '{}' to quit: ", ALL, QUIT)?;
        out.flush()?;

        line.clear();
        let n = input
            .read_line(&mut line)
            .with_context(|| "failed to read selection")?;
        writeln!(out)?;
        if n == 0 {
            return Ok(None);
        }
        let response = line.trim_end_matches(['\n', '\r']);

        match classify(response, files) {
            Selection::Quit => return Ok(None),
            Selection::All => return Ok(Some(files.to_vec())),
            Selection::Index(i) => return Ok(Some(vec![files[i].clone()])),
            Selection::Name(name) => return Ok(Some(vec![name])),
            Selection::Invalid => {
                writeln!(out, "* Bad selection *")?;
                writeln!(out)?;
            }
        }
    }
}
