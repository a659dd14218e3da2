//! Mapping file kinds.

/// Which direction an interaction table maps.
///
/// # Examples
///
/// ```
/// use mirna_types::MapKind;
///
/// assert_eq!(MapKind::Gene.default_file_name(), "geneMap.txt");
/// assert_eq!(MapKind::Mirna.to_string(), "miRNA");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MapKind {
    /// Keyed by miRNA, values are genes (`mirMap.txt`).
    Mirna,
    /// Keyed by Uniprot gene, values are miRNAs (`geneMap.txt`).
    Gene,
}

impl MapKind {
    /// Conventional file name of the table for this kind.
    pub fn default_file_name(self) -> &'static str {
        match self {
            Self::Mirna => crate::well_known::MIR_MAP_FILE,
            Self::Gene => crate::well_known::GENE_MAP_FILE,
        }
    }

    /// Label used when rendering a whole table (`mirMap` / `geneMap`).
    pub fn section_label(self) -> &'static str {
        match self {
            Self::Mirna => "mirMap",
            Self::Gene => "geneMap",
        }
    }
}

impl std::fmt::Display for MapKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mirna => f.write_str("miRNA"),
            Self::Gene => f.write_str("gene"),
        }
    }
}
