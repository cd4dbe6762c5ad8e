use anyhow::{Context, Result};
use flate2::read::MultiGzDecoder;
use memmap2::Mmap;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

pub struct MmapSource {
    mmap: Mmap,
}

impl MmapSource {
    pub fn open(path: &Path) -> Result<Self> {
        let file =
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
        // SAFETY: read-only file mapping.
        let mmap = unsafe { Mmap::map(&file) }
            .with_context(|| format!("mmap failed for {}", path.display()))?;
        Ok(Self { mmap })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.mmap
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputKind {
    Empty,
    Plain,
    Gzip,
}

pub enum InputSource {
    Empty,
    Mmap(MmapSource),
    Gzip(MultiGzDecoder<BufReader<File>>),
}

impl InputSource {
    pub fn open(path: &Path) -> Result<Self> {
        match detect_input_kind(path)? {
            InputKind::Empty => Ok(InputSource::Empty),
            InputKind::Plain => Ok(InputSource::Mmap(MmapSource::open(path)?)),
            InputKind::Gzip => {
                let file = File::open(path)
                    .with_context(|| format!("failed to open {}", path.display()))?;
                Ok(InputSource::Gzip(MultiGzDecoder::new(BufReader::new(file))))
            }
        }
    }

    pub fn reader(&mut self) -> Box<dyn Read + '_> {
        match self {
            InputSource::Empty => Box::new(io::empty()),
            InputSource::Mmap(source) => Box::new(source.bytes()),
            InputSource::Gzip(decoder) => Box::new(decoder),
        }
    }
}

/// Sniffs the gzip magic; the `.fa` name says nothing about compression.
pub fn detect_input_kind(path: &Path) -> Result<InputKind> {
    let mut file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let len = file
        .metadata()
        .with_context(|| format!("failed to stat {}", path.display()))?
        .len();
    if len == 0 {
        return Ok(InputKind::Empty);
    }
    let mut magic = [0u8; 2];
    let n = file
        .read(&mut magic)
        .with_context(|| "failed to read magic bytes")?;
    if n == 2 && magic == GZIP_MAGIC {
        Ok(InputKind::Gzip)
    } else {
        Ok(InputKind::Plain)
    }
}
