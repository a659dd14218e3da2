//! Mapping file discovery.

use std::path::Path;

use mirna_types::MapKind;

use crate::types::MapFiles;

/// Resolves the conventional mapping files inside a data directory.
///
/// Nothing is checked here beyond logging. A missing table, or a missing
/// directory, is reported as [`MapError::FileNotFound`](crate::MapError::FileNotFound)
/// naming the table when it is loaded, miRNA table first.
pub fn discover_map_files<P: AsRef<Path>>(path: P) -> MapFiles {
    let files = MapFiles::in_dir(path);
    for kind in [MapKind::Mirna, MapKind::Gene] {
        if !files.path(kind).is_file() {
            tracing::debug!("No {} table at {}", kind, files.path(kind).display());
        }
    }
    files
}
