use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "gcfromdna",
    version,
    about = "GC content of DNA sequences from FASTA (.fa) files",
    long_about = "GC content of DNA sequences from FASTA (.fa) files.\n\n\
        Each input `name.fa` gets a report `name_GC.csv` with one `sequence,gc_percent` \
        row per record. Without FILES, the .fa files of the current directory are listed \
        for interactive selection."
)]
pub struct Cli {
    /// FASTA files to process (e.g. `*.fa`).
    #[arg(allow_hyphen_values = true)]
    pub files: Vec<PathBuf>,
}
