use crate::cli::args::Cli;
use crate::cli::select;
use crate::core::engine::{self, fmt_dur, stats_enabled};
use crate::core::model::{FASTA_SUFFIX, FileOutcome};
use anyhow::{Context, Result};
use clap::Parser;
use std::env;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

pub fn entry() -> Result<()> {
    let cli = Cli::parse();
    compute(cli.files)
}

/// Processes `files`, or asks which `.fa` files of the current directory to use
/// when none are given.
pub fn compute<I, P>(files: I) -> Result<()>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let files: Vec<PathBuf> = files.into_iter().map(|f| f.as_ref().to_path_buf()).collect();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    banner(&mut out)?;

    if files.is_empty() {
        let cwd = env::current_dir().with_context(|| "failed to resolve current directory")?;
        let stdin = io::stdin();
        interactive(&cwd, stdin.lock(), &mut out)?;
    } else {
        parse_files(&files, None, &mut out)?;
    }

    writeln!(out)?;
    writeln!(out, "Exiting...")?;
    writeln!(out)?;
    Ok(())
}

fn banner(out: &mut dyn Write) -> Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "#---------------- GCfromDNA version {} -------------------#",
        env!("CARGO_PKG_VERSION")
    )?;
    writeln!(out, "#--Determine GC-content of DNA sequences from fasta files--#")?;
    writeln!(out)?;
    Ok(())
}

fn interactive<R: io::BufRead>(dir: &Path, input: R, out: &mut dyn Write) -> Result<()> {
    let t_list = Instant::now();
    let files = select::list_candidates(dir)?;
    stage_done(stats_enabled(), "list", t_list);

    if files.is_empty() {
        writeln!(
            out,
            "No files with {} suffix found in current directory.",
            FASTA_SUFFIX
        )?;
        return Ok(());
    }

    match select::prompt(&files, input, &mut *out)? {
        Some(picked) => {
            let picked: Vec<PathBuf> = picked.into_iter().map(|f| dir.join(f)).collect();
            parse_files(&picked, Some(dir), out)
        }
        None => Ok(()),
    }
}

/// `base` is the listing directory for interactive picks, stripped again when echoing names.
fn parse_files(files: &[PathBuf], base: Option<&Path>, out: &mut dyn Write) -> Result<()> {
    let stats = stats_enabled();
    let t0 = Instant::now();

    writeln!(out, "Notes from file operations:")?;
    let outcomes = engine::process_batch(files);
    for (input, outcome) in &outcomes {
        let input = display_name(input, base);
        match outcome {
            FileOutcome::Written { output, .. } => writeln!(
                out,
                "  New doc '{}' written from file '{}'.",
                display_name(output, base),
                input
            )?,
            FileOutcome::NotFasta => writeln!(
                out,
                "  '{}' not fasta ({}) file (not parsed).",
                input, FASTA_SUFFIX
            )?,
            FileOutcome::Failed { .. } => writeln!(
                out,
                "  Problem parsing file '{}'. Check filename.",
                input
            )?,
        }
    }

    if stats {
        let written = outcomes.iter().filter(|(_, o)| o.is_written()).count();
        eprintln!(
            "GCFROMDNA_STATS files={} written={} total={}",
            outcomes.len(),
            written,
            fmt_dur(t0.elapsed())
        );
    }
    Ok(())
}

fn stage_done(stats: bool, name: &str, t: Instant) {
    if stats {
        eprintln!("GCFROMDNA_STATS stage={} time={}", name, fmt_dur(t.elapsed()));
    }
}

fn display_name(path: &Path, base: Option<&Path>) -> String {
    base.and_then(|b| path.strip_prefix(b).ok())
        .unwrap_or(path)
        .display()
        .to_string()
}
