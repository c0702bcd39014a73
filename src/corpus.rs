//! Fuzz corpus generation.
//!
//! A corpus is a set of files derived from one [`ImageSpec`], each encoded
//! with a different chunk size override. Entry 0 is always the faithful
//! file. The overrides are drawn up front from one RNG seeded with `seed`,
//! so the corpus is identical no matter how rayon schedules the encoding.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rand::prelude::*;
use rayon::prelude::*;

use crate::fli::EncodeError;
use crate::schema::{ConfigError, CorpusConfig};

/// One generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusEntry {
    pub index: usize,
    pub size_override: i32,
    pub bytes: Vec<u8>,
}

impl CorpusEntry {
    /// File name used when the corpus is written to disk.
    pub fn file_name(&self) -> String {
        format!("{:04}.fli", self.index)
    }
}

/// Corpus generation errors.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("Invalid corpus configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Encoding failed: {0}")]
    Encode(#[from] EncodeError),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Size overrides for every corpus entry, in index order.
///
/// Entry 0 is always 0. The rest come from a single RNG stream, so
/// neighbouring seeds give unrelated corpora.
pub fn entry_overrides(config: &CorpusConfig) -> Vec<i32> {
    let (min, max) = config.override_range;
    let mut rng = StdRng::seed_from_u64(config.seed);
    (0..config.count)
        .map(|index| if index == 0 { 0 } else { rng.gen_range(min..=max) })
        .collect()
}

/// Encode every corpus entry in parallel.
pub fn generate_corpus(config: &CorpusConfig) -> Result<Vec<CorpusEntry>, CorpusError> {
    config.validate()?;

    let overrides = entry_overrides(config);
    let entries = overrides
        .into_par_iter()
        .enumerate()
        .map(|(index, size_override)| -> Result<CorpusEntry, EncodeError> {
            let bytes = config.base.encode_with_override(size_override)?;
            Ok(CorpusEntry {
                index,
                size_override,
                bytes,
            })
        })
        .collect::<Result<Vec<_>, EncodeError>>()?;

    log::info!(
        "generated {} corpus entries (seed {}, overrides {:?})",
        entries.len(),
        config.seed,
        config.override_range
    );

    Ok(entries)
}

/// Write entries into `dir` as `NNNN.fli`, creating the directory if needed.
pub fn write_corpus<P: AsRef<Path>>(
    entries: &[CorpusEntry],
    dir: P,
) -> Result<Vec<PathBuf>, CorpusError> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    let mut paths = Vec::with_capacity(entries.len());
    for entry in entries {
        let path = dir.join(entry.file_name());
        fs::write(&path, &entry.bytes)?;
        log::debug!(
            "wrote {} ({} bytes, override {})",
            path.display(),
            entry.bytes.len(),
            entry.size_override
        );
        paths.push(path);
    }

    Ok(paths)
}
