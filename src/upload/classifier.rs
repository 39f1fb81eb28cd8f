//! Filename role heuristics

use super::types::FileRole;

/// Infer a file's role from its name.
///
/// The extension is whatever follows the last `.`. A name containing
/// "dictionary" with a csv extension is the data dictionary; otherwise a
/// name containing "mapping" with a yaml/yml/json extension is the mapping
/// file; everything else is the primary input. The dictionary check runs
/// first, so a name matching both rules resolves to dictionary. This is a
/// heuristic, not a guarantee.
pub fn classify(filename: &str) -> FileRole {
    let extension = filename.rsplit('.').next().unwrap_or_default();

    if filename.contains("dictionary") && extension == "csv" {
        FileRole::Dictionary
    } else if filename.contains("mapping") && ["yaml", "yml", "json"].contains(&extension) {
        FileRole::Mapping
    } else {
        FileRole::Input
    }
}
