pub mod cli;
pub mod core;
pub mod report;

pub use crate::cli::run::compute;
