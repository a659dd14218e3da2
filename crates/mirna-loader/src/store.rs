//! In-memory interaction store.
//!
//! Holds the miRNA-keyed and gene-keyed tables side by side and answers
//! point queries against both.
//!
//! ```
//! use mirna_loader::{InteractionMap, InteractionStore, Lookup};
//!
//! let (mirna, _) = InteractionMap::from_reader("hsa-mir-125b-5p\tP04637\n".as_bytes())?;
//! let (gene, _) = InteractionMap::from_reader("P04637\thsa-mir-125b-5p\n".as_bytes())?;
//! let store = InteractionStore::new(mirna, gene);
//!
//! assert_eq!(store.find("p04637").to_string(), "HSA-MIR-125B-5P");
//! assert_eq!(store.find("unknown"), Lookup::NotFound);
//! assert_eq!(store.find("unknown").to_string(), "Query not found");
//! # Ok::<(), mirna_loader::MapError>(())
//! ```

use std::fmt;
use std::path::Path;

use mirna_types::{normalize, well_known, Identifier, MapKind};

use crate::mapping::InteractionMap;
use crate::types::{MapFiles, MapResult};

/// Both interaction tables, loaded once and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct InteractionStore {
    /// Keyed by miRNA, values are genes.
    mirna: InteractionMap,
    /// Keyed by gene, values are miRNAs.
    gene: InteractionMap,
}

impl InteractionStore {
    /// Creates a store from already built tables.
    pub fn new(mirna: InteractionMap, gene: InteractionMap) -> Self {
        Self { mirna, gene }
    }

    /// Loads both tables, the miRNA table first.
    ///
    /// Fails on the first table that cannot be loaded; no partial store is returned.
    pub fn load_all(files: &MapFiles) -> MapResult<Self> {
        let mirna = load_map(MapKind::Mirna, &files.mirna)?;
        let gene = load_map(MapKind::Gene, &files.gene)?;
        Ok(Self::new(mirna, gene))
    }

    /// Looks a query up, gene table first.
    ///
    /// The query is trimmed and uppercased here, so raw input is accepted.
    /// A key present in both tables resolves to the gene table.
    pub fn find(&self, query: &str) -> Lookup<'_> {
        let query = normalize(query);

        if let Some(values) = self.gene.get(&query) {
            Lookup::Gene(values)
        } else if let Some(values) = self.mirna.get(&query) {
            Lookup::Mirna(values)
        } else {
            Lookup::NotFound
        }
    }

    /// Returns the miRNA-keyed table.
    pub fn mirna_map(&self) -> &InteractionMap {
        &self.mirna
    }

    /// Returns the gene-keyed table.
    pub fn gene_map(&self) -> &InteractionMap {
        &self.gene
    }

    /// Returns the table of the given kind.
    pub fn map(&self, kind: MapKind) -> &InteractionMap {
        match kind {
            MapKind::Mirna => &self.mirna,
            MapKind::Gene => &self.gene,
        }
    }
}

impl fmt::Display for InteractionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", MapKind::Mirna.section_label())?;
        write!(f, "{}", self.mirna)?;
        writeln!(f)?;
        writeln!(f, "{}:", MapKind::Gene.section_label())?;
        write!(f, "{}", self.gene)
    }
}

fn load_map(kind: MapKind, path: &Path) -> MapResult<InteractionMap> {
    let (map, stats) = InteractionMap::load(path)?;

    tracing::info!(
        "Loaded {} {} keys ({} values) from {}",
        map.len(),
        kind,
        stats.values,
        path.display()
    );
    if stats.blank_records > 0 {
        tracing::debug!("Skipped {} blank lines in {}", stats.blank_records, path.display());
    }
    if stats.duplicate_keys > 0 {
        tracing::warn!(
            "{} duplicate keys in {}; later lines replaced earlier ones",
            stats.duplicate_keys,
            path.display()
        );
    }

    Ok(map)
}

/// Outcome of a single query.
///
/// A key that matched with no partners (`Gene(&[])`) is kept apart from a
/// key that did not match at all (`NotFound`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    /// Matched a gene key; values are miRNAs.
    Gene(&'a [Identifier]),
    /// Matched a miRNA key; values are genes.
    Mirna(&'a [Identifier]),
    /// Matched neither table.
    NotFound,
}

impl<'a> Lookup<'a> {
    /// Values to report. `NotFound` yields the single sentinel value.
    pub fn values(&self) -> Vec<&'a str> {
        match *self {
            Self::Gene(values) | Self::Mirna(values) => {
                values.iter().map(String::as_str).collect()
            }
            Self::NotFound => vec![well_known::NOT_FOUND],
        }
    }

    /// Which table answered, if any.
    pub fn kind(&self) -> Option<MapKind> {
        match self {
            Self::Gene(_) => Some(MapKind::Gene),
            Self::Mirna(_) => Some(MapKind::Mirna),
            Self::NotFound => None,
        }
    }
}

/// Tab-joined values, as printed by the shell.
impl fmt::Display for Lookup<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.values().join("\t"))
    }
}
