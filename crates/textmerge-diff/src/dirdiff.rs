//! Directory-level comparison
//!
//! Classifies every file under two roots as added, removed, unchanged or
//! modified. The comparison is byte-level only, with a size short-circuit
//! before content is read; callers wanting line diffs of modified files run
//! the two-way engine on them afterwards.

use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

use textmerge_core::domain::DiffType;

use crate::error::DirDiffError;

/// Chunk size for byte-level content comparison
const COMPARE_CHUNK_SIZE: usize = 8192;

/// Classification of every file found under either root
#[derive(Debug, Default)]
pub struct DirDiffResult {
    /// Relative path to classification, for every readable file
    pub entries: BTreeMap<String, DiffType>,
    /// Relative path to error, for paths that could not be read
    pub unreadable: BTreeMap<String, DirDiffError>,
}

/// Compares the files under two directory trees.
///
/// Directories themselves are never classified; only leaf files appear in
/// the result, keyed by their path relative to the root they were found
/// under. A path that cannot be read is reported in
/// [`DirDiffResult::unreadable`] instead of being misclassified, and the
/// traversal continues. An unreadable root aborts with `Err`.
pub fn diff_dirs(dir_a: &Path, dir_b: &Path) -> Result<DirDiffResult, DirDiffError> {
    let mut result = DirDiffResult::default();

    let files_a = collect_files(dir_a, &mut result)?;
    let files_b = collect_files(dir_b, &mut result)?;

    for path in &files_a {
        if files_b.contains(path) {
            match files_equal(&dir_a.join(path), &dir_b.join(path)) {
                Ok(true) => {
                    result.entries.insert(path.clone(), DiffType::Unchanged);
                }
                Ok(false) => {
                    result.entries.insert(path.clone(), DiffType::Modified);
                }
                Err(err) => {
                    result.unreadable.insert(path.clone(), err);
                }
            }
        } else {
            result.entries.insert(path.clone(), DiffType::Removed);
        }
    }

    for path in files_b.difference(&files_a) {
        result.entries.insert(path.clone(), DiffType::Added);
    }

    debug!(
        left = files_a.len(),
        right = files_b.len(),
        unreadable = result.unreadable.len(),
        "compared directory trees"
    );

    Ok(result)
}

/// Enumerates the files under `root` as root-relative paths.
///
/// Walk errors below the root are recorded as unreadable and skipped; an
/// error on the root itself is returned.
fn collect_files(
    root: &Path,
    result: &mut DirDiffResult,
) -> Result<BTreeSet<String>, DirDiffError> {
    let mut files = BTreeSet::new();

    for entry in WalkDir::new(root) {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_file() {
                    files.insert(relative_key(root, entry.path()));
                }
            }
            Err(err) => {
                let depth = err.depth();
                let path = err
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| root.to_path_buf());
                let relative = relative_key(root, &path);
                let source = err
                    .into_io_error()
                    .unwrap_or_else(|| std::io::Error::other("filesystem loop detected"));
                let error = DirDiffError::ReadDir { path, source };

                if depth == 0 {
                    return Err(error);
                }
                result.unreadable.insert(relative, error);
            }
        }
    }

    Ok(files)
}

fn relative_key(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}

/// Byte-equality of two files: size check first, then chunked content
/// comparison
fn files_equal(file_a: &Path, file_b: &Path) -> Result<bool, DirDiffError> {
    let meta_a =
        std::fs::metadata(file_a).map_err(|err| DirDiffError::read_file(file_a, err))?;
    let meta_b =
        std::fs::metadata(file_b).map_err(|err| DirDiffError::read_file(file_b, err))?;
    if meta_a.len() != meta_b.len() {
        return Ok(false);
    }

    let mut reader_a = File::open(file_a).map_err(|err| DirDiffError::read_file(file_a, err))?;
    let mut reader_b = File::open(file_b).map_err(|err| DirDiffError::read_file(file_b, err))?;

    let mut chunk_a = [0u8; COMPARE_CHUNK_SIZE];
    let mut chunk_b = [0u8; COMPARE_CHUNK_SIZE];

    loop {
        let len_a =
            read_chunk(&mut reader_a, &mut chunk_a).map_err(|err| DirDiffError::read_file(file_a, err))?;
        let len_b =
            read_chunk(&mut reader_b, &mut chunk_b).map_err(|err| DirDiffError::read_file(file_b, err))?;

        if len_a != len_b || chunk_a[..len_a] != chunk_b[..len_b] {
            return Ok(false);
        }
        if len_a == 0 {
            return Ok(true);
        }
    }
}

/// Reads until the buffer is full or the file ends
fn read_chunk(reader: &mut impl Read, buffer: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buffer.len() {
        let read = reader.read(&mut buffer[filled..])?;
        if read == 0 {
            break;
        }
        filled += read;
    }
    Ok(filled)
}
