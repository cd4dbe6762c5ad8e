use anyhow::{Result, bail};

/// Counts G and C in either case.
pub fn count_gc(seq: &[u8]) -> u64 {
    let mut gc = 0u64;
    for &b in seq {
        match b & 0xDF {
            b'G' | b'C' => gc += 1,
            _ => {}
        }
    }
    gc
}

/// GC percentage truncated (not rounded) to two decimals: 1/3 gives 33.33.
pub fn gc_percent(seq: &[u8]) -> Result<f64> {
    if seq.is_empty() {
        bail!("zero-length sequence");
    }
    let hundredths = count_gc(seq) * 10_000 / seq.len() as u64;
    Ok(hundredths as f64 / 100.0)
}

/// Compact identifier from a FASTA header: the first two tokens joined by `_`.
pub fn format_name(description: &str) -> String {
    description
        .split_whitespace()
        .take(2)
        .collect::<Vec<_>>()
        .join("_")
}

/// Whole numbers keep one decimal (`50.0`); anything else prints its shortest form.
pub fn format_percent(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}
