use std::path::{Path, PathBuf};
use std::time::SystemTime;

use walkdir::WalkDir;

/// True for files with a `csv` extension, in any case.
#[must_use]
pub fn is_measurement_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

/// Newest measurement file directly inside `dir`.
///
/// Subdirectories are not searched. Files with the same modification time
/// are ordered by name, the last one winning. Returns `None` when the
/// directory is missing or holds no CSV file.
#[must_use]
pub fn newest_csv(dir: &Path) -> Option<PathBuf> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_type().is_file() && is_measurement_file(e.path()))
        .map(|e| {
            let modified = e
                .metadata()
                .ok()
                .and_then(|m| m.modified().ok())
                .unwrap_or(SystemTime::UNIX_EPOCH);
            (modified, e.into_path())
        })
        .max_by(|(a_time, a_path), (b_time, b_path)| {
            a_time.cmp(b_time).then_with(|| a_path.file_name().cmp(&b_path.file_name()))
        })
        .map(|(_, path)| path)
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
