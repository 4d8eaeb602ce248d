use crate::utils::error::Result;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Summary of a completed merge run.
#[derive(Debug, Clone, Copy, Default)]
pub struct MergeStats {
    pub files_merged: usize,
    pub bytes_written: u64,
}

/// A name qualifies when it carries the suffix and is not the destination
/// file's own name.
fn qualifies(name: &str, suffix: &str, dest_name: &str) -> bool {
    name.ends_with(suffix) && name != dest_name
}

/// Concatenates every qualifying entry of `source_dir` into `dest_path`,
/// in directory-enumeration order, with no separators between contents.
///
/// The destination is truncated before anything is read. Any I/O failure
/// aborts the run immediately; a mid-run failure leaves the destination
/// holding whatever was appended before it.
pub fn merge(source_dir: &Path, dest_path: &Path, suffix: &str) -> Result<MergeStats> {
    let dest_name = dest_path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();

    let mut dest = File::create(dest_path)?;
    let mut stats = MergeStats::default();

    for entry in fs::read_dir(source_dir)? {
        let entry = entry?;
        let file_name = entry.file_name();
        // A name that is not valid UTF-8 cannot match a UTF-8 suffix.
        let Some(name) = file_name.to_str() else {
            continue;
        };
        if !qualifies(name, suffix, dest_name) {
            continue;
        }

        tracing::debug!("Merging {}", name);
        // Entry types are not checked before the read: a directory whose
        // name carries the suffix aborts the run here.
        let content = fs::read(entry.path())?;
        dest.write_all(&content)?;

        stats.files_merged += 1;
        stats.bytes_written += content.len() as u64;
    }

    Ok(stats)
}
