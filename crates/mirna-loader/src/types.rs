//! Loader-specific types: errors, file locations and load statistics.

use std::path::{Path, PathBuf};

use mirna_types::MapKind;
use thiserror::Error;

/// Errors that can occur while loading interaction tables.
#[derive(Error, Debug)]
pub enum MapError {
    /// I/O error reading a mapping file.
    #[error("IO error reading mapping file: {0}")]
    Io(#[from] std::io::Error),

    /// Tokenizer error.
    #[error("Error reading record: {0}")]
    Csv(#[from] csv::Error),

    /// Mapping file missing or not readable.
    #[error("FILE NOT FOUND: {path}")]
    FileNotFound {
        /// The path that could not be opened.
        path: String,
    },
}

impl MapError {
    /// Process exit status for a fatal load failure.
    ///
    /// A missing table exits with `2`, anything else with `1`.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound { .. } => 2,
            _ => 1,
        }
    }

    /// Returns true if this error is a missing mapping file.
    pub fn is_file_not_found(&self) -> bool {
        matches!(self, Self::FileNotFound { .. })
    }
}

/// Result type for mapping operations.
pub type MapResult<T> = Result<T, MapError>;

/// Locations of the two interaction tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapFiles {
    /// Path to the miRNA-keyed table.
    pub mirna: PathBuf,
    /// Path to the gene-keyed table.
    pub gene: PathBuf,
}

impl MapFiles {
    /// Uses the conventional file names inside `dir`.
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self {
            mirna: dir.join(MapKind::Mirna.default_file_name()),
            gene: dir.join(MapKind::Gene.default_file_name()),
        }
    }

    /// Returns the path configured for `kind`.
    pub fn path(&self, kind: MapKind) -> &Path {
        match kind {
            MapKind::Mirna => &self.mirna,
            MapKind::Gene => &self.gene,
        }
    }
}

impl Default for MapFiles {
    fn default() -> Self {
        Self::in_dir(".")
    }
}

/// Statistics from loading one mapping file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Non-empty lines handed over by the tokenizer.
    pub records_read: usize,
    /// Whitespace-only lines skipped.
    pub blank_records: usize,
    /// Keys that replaced an earlier line with the same key.
    pub duplicate_keys: usize,
    /// Total value tokens across stored entries.
    pub values: usize,
}

impl LoadStats {
    /// Number of lines that produced an entry.
    pub fn records_used(&self) -> usize {
        self.records_read - self.blank_records
    }
}
