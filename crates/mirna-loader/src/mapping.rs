//! In-memory interaction table.

use std::collections::btree_map::{self, BTreeMap, Entry};
use std::fmt;
use std::io::Read;
use std::path::Path;

use mirna_types::{Identifier, MapRecord};

use crate::parser::MapParser;
use crate::types::{LoadStats, MapResult};

/// One interaction table: normalized key to its interaction partners.
///
/// Keys iterate in sorted order; values keep the order of the source line.
/// Every key maps to a list, which may be empty.
///
/// # Example
///
/// ```
/// use mirna_loader::InteractionMap;
///
/// let (map, stats) = InteractionMap::from_reader("gene1\tmir1\tmir2\n".as_bytes()).unwrap();
/// assert_eq!(map.get("GENE1"), Some(&["MIR1".to_string(), "MIR2".to_string()][..]));
/// assert_eq!(stats.values, 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionMap {
    entries: BTreeMap<Identifier, Vec<Identifier>>,
}

impl InteractionMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a mapping file in a single pass.
    ///
    /// The file is closed before this returns, whether loading succeeded or not.
    pub fn load<P: AsRef<Path>>(path: P) -> MapResult<(Self, LoadStats)> {
        let parser = MapParser::from_path(path)?;
        Self::from_parser(parser)
    }

    /// Builds a map from any reader holding mapping-file content.
    pub fn from_reader<R: Read>(reader: R) -> MapResult<(Self, LoadStats)> {
        Self::from_parser(MapParser::from_reader(reader))
    }

    fn from_parser<R: Read>(mut parser: MapParser<R>) -> MapResult<(Self, LoadStats)> {
        let mut map = Self::new();
        let mut stats = LoadStats::default();

        for record in parser.by_ref() {
            if map.insert(record?).is_some() {
                stats.duplicate_keys += 1;
            }
        }

        stats.records_read = parser.records_read();
        stats.blank_records = parser.blank_records();
        stats.values = map.entries.values().map(Vec::len).sum();

        Ok((map, stats))
    }

    /// Inserts a record, returning the values it replaced if the key was already present.
    fn insert(&mut self, record: MapRecord) -> Option<Vec<Identifier>> {
        match self.entries.entry(record.key) {
            Entry::Occupied(mut entry) => {
                tracing::debug!(key = %entry.key(), "Duplicate key replaced earlier line");
                Some(entry.insert(record.values))
            }
            Entry::Vacant(entry) => {
                entry.insert(record.values);
                None
            }
        }
    }

    /// Returns the values for a normalized key.
    pub fn get(&self, key: &str) -> Option<&[Identifier]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    /// Returns true if the normalized key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no keys were loaded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &Identifier> {
        self.entries.keys()
    }

    /// Iterates over entries in sorted key order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }
}

/// Iterator over the entries of an [`InteractionMap`].
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, Identifier, Vec<Identifier>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a Identifier, &'a [Identifier]);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k, v.as_slice()))
    }
}

impl<'a> IntoIterator for &'a InteractionMap {
    type Item = (&'a Identifier, &'a [Identifier]);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One line per key: `KEY:` followed by each value after a tab.
impl fmt::Display for InteractionMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, values) in self {
            write!(f, "{key}:")?;
            for value in values {
                write!(f, "\t{value}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
