//! Well-known file names and console strings.
//!
//! # Examples
//!
//! ```
//! use mirna_types::well_known;
//!
//! assert_eq!(well_known::NOT_FOUND, "Query not found");
//! assert_eq!(well_known::QUIT, "QUIT");
//! ```

/// Conventional file name of the miRNA-to-gene table.
pub const MIR_MAP_FILE: &str = "mirMap.txt";

/// Conventional file name of the gene-to-miRNA table.
pub const GENE_MAP_FILE: &str = "geneMap.txt";

/// Placeholder returned in place of a result set when a query matches nothing.
pub const NOT_FOUND: &str = "Query not found";

/// Normalized input that ends the interactive session.
pub const QUIT: &str = "QUIT";

/// Instruction line printed before every query.
pub const PROMPT: &str = "Input a miRNA or protein (Uniprot) name ('quit' to exit)";
