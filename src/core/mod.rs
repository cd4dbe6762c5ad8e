pub mod engine;
pub mod fasta;
pub mod gc;
pub mod io;
pub mod model;
