//! Pre-flight schema validation.
//!
//! Every check here runs before the first data row is read, so a render
//! cannot stream half a catalog and then die on an unreadable file or a
//! missing column.

use std::fs::File;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::catalog::{ChunkedReader, ColumnMap};
use crate::error::{Result, UraniaError};

/// Validate a catalog file set against the required field names.
///
/// Fails if the file list is empty, if any file cannot be opened for
/// reading, or if the header of the first (representative sample) file
/// lacks a required field. No data rows are read.
pub fn check_files(files: &[PathBuf], required_fields: &[&str]) -> Result<()> {
    info!(file_count = files.len(), "Checking catalog files");

    if files.is_empty() {
        return Err(UraniaError::Schema {
            message: "No catalog files found in the input directory".to_string(),
        });
    }

    for file in files {
        File::open(file).map_err(|e| UraniaError::Schema {
            message: format!("Cannot read file {}: {}", file.display(), e),
        })?;
    }

    check_header(&files[0], required_fields)?;

    info!("All catalog files checked");
    Ok(())
}

/// Validate that one file's header contains every required field
fn check_header(file: &Path, required_fields: &[&str]) -> Result<()> {
    let reader = ChunkedReader::open(file, 1)?;
    ColumnMap::resolve(reader.headers(), required_fields, file)?;
    Ok(())
}

/// The union of two field lists, first-occurrence order, no duplicates
pub fn union_fields(a: &'static [&'static str], b: &'static [&'static str]) -> Vec<&'static str> {
    let mut fields: Vec<&'static str> = Vec::with_capacity(a.len() + b.len());
    for field in a.iter().chain(b.iter()) {
        if !fields.contains(field) {
            fields.push(field);
        }
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        let mut f = File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_empty_file_list_fails() {
        let err = check_files(&[], &["ra", "dec"]).unwrap_err();
        assert!(matches!(err, UraniaError::Schema { .. }));
    }

    #[test]
    fn test_valid_files_pass() {
        let dir = tempdir().unwrap();
        let a = write_file(dir.path(), "a.csv", "ra,dec,bp_rp\n0.0,0.0,1.0\n");
        let b = write_file(dir.path(), "b.csv", "ra,dec,bp_rp\n1.0,1.0,2.0\n");

        check_files(&[a, b], &["ra", "dec", "bp_rp"]).unwrap();
    }

    #[test]
    fn test_missing_required_column_fails_before_streaming() {
        let dir = tempdir().unwrap();
        let a = write_file(dir.path(), "a.csv", "ra,dec\n0.0,0.0\n");

        let err = check_files(&[a], &["ra", "dec", "parallax"]).unwrap_err();
        match err {
            UraniaError::MissingColumn { column, .. } => assert_eq!(column, "parallax"),
            other => panic!("Expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn test_nonexistent_file_fails() {
        let dir = tempdir().unwrap();
        let ghost = dir.path().join("ghost.csv");

        let err = check_files(&[ghost], &["ra"]).unwrap_err();
        assert!(matches!(err, UraniaError::Schema { .. }));
    }

    #[test]
    fn test_union_fields_deduplicates() {
        let union = union_fields(&["ra", "dec"], &["bp_rp", "ra", "parallax"]);
        assert_eq!(union, vec!["ra", "dec", "bp_rp", "parallax"]);
    }
}
