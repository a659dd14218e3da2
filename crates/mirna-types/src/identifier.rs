//! Identifier type and normalization.
//!
//! Identifiers are stored uppercased so that lookups are case-insensitive
//! regardless of how the source files or the user spell them.

/// A normalized miRNA or gene identifier.
///
/// # Examples
///
/// ```
/// use mirna_types::Identifier;
///
/// let mirna: Identifier = "HSA-MIR-21-5P".to_string();
/// let gene: Identifier = "P04637".to_string();
/// ```
pub type Identifier = String;

/// Normalizes a raw token or query into an [`Identifier`].
///
/// Surrounding whitespace is trimmed and the remainder uppercased.
///
/// # Examples
///
/// ```
/// use mirna_types::normalize;
///
/// assert_eq!(normalize("  hsa-miR-21-5p\n"), "HSA-MIR-21-5P");
/// ```
pub fn normalize(raw: &str) -> Identifier {
    raw.trim().to_uppercase()
}
