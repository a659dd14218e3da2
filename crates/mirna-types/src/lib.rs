//! # mirna-types
//!
//! Type definitions for miRNA / gene interaction tables.
//!
//! Two tab-delimited tables describe the same interactions from both sides:
//! one keyed by miRNA, one keyed by gene (Uniprot format). This crate holds
//! the record and identifier types shared by the loader and the shell.
//!
//! ## Features
//!
//! - `serde` (default): Enables serialization/deserialization support via serde.
//!
//! ## Usage
//!
//! ```rust
//! use mirna_types::{normalize, well_known, MapKind, MapRecord};
//!
//! let record = MapRecord::from_tokens("P04637\thsa-mir-125b-5p".split('\t')).unwrap();
//! assert_eq!(record.values, vec!["HSA-MIR-125B-5P"]);
//!
//! assert_eq!(normalize("quit"), well_known::QUIT);
//! assert_eq!(MapKind::Mirna.default_file_name(), well_known::MIR_MAP_FILE);
//! ```

#![warn(missing_docs)]

mod enums;
mod identifier;
mod record;
pub mod well_known;

pub use enums::MapKind;
pub use identifier::{normalize, Identifier};
pub use record::MapRecord;
