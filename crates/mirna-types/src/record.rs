//! Interaction table record type.
//!
//! This module provides the `MapRecord` struct representing one line of a
//! miRNA or gene mapping file.

use crate::{normalize, Identifier};

/// One record of a mapping file: a key followed by its interaction partners.
///
/// Represents a line such as `P04637\tHSA-MIR-125B-5P\tHSA-MIR-504` from
/// `geneMap.txt`, or the reverse direction from `mirMap.txt`.
///
/// # Examples
///
/// ```
/// use mirna_types::MapRecord;
///
/// let record = MapRecord::from_tokens(["gene1", "mir1", "Mir2"]).unwrap();
/// assert_eq!(record.key, "GENE1");
/// assert_eq!(record.values, vec!["MIR1", "MIR2"]);
/// assert!(!record.is_key_only());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapRecord {
    /// Normalized key (first token of the line).
    pub key: Identifier,
    /// Normalized values in the order they appear on the line.
    pub values: Vec<Identifier>,
}

impl MapRecord {
    /// Builds a record from raw tokens, normalizing each one.
    ///
    /// Returns `None` when there are no tokens at all.
    pub fn from_tokens<I, S>(tokens: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tokens = tokens.into_iter();
        let key = normalize(tokens.next()?.as_ref());
        let values = tokens.map(|t| normalize(t.as_ref())).collect();
        Some(Self { key, values })
    }

    /// Returns true if the line carried a key but no interaction partners.
    pub fn is_key_only(&self) -> bool {
        self.values.is_empty()
    }
}
