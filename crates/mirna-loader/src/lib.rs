//! # mirna-loader
//!
//! Parser and in-memory lookup store for miRNA / gene interaction tables.
//!
//! Each table is a whitespace-delimited text file with one record per line:
//! a key followed by the identifiers it interacts with. Both tables are
//! loaded once into an [`InteractionStore`] and queried with
//! [`InteractionStore::find`].

#![warn(missing_docs)]

mod loader;
mod mapping;
mod parser;
mod store;
mod types;

pub use loader::discover_map_files;
pub use mapping::{InteractionMap, Iter};
pub use parser::MapParser;
pub use store::{InteractionStore, Lookup};
pub use types::{LoadStats, MapError, MapFiles, MapResult};

// Re-export mirna-types for convenience
pub use mirna_types;
