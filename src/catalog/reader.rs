//! Chunked, header-aware CSV streaming.
//!
//! The reader yields fixed-size batches of rows so peak memory stays
//! bounded no matter how large the catalog is. Field access goes through a
//! [`ColumnMap`] resolved per file, because column order varies between
//! files.

use std::fs::File;
use std::path::Path;

use csv::StringRecord;

use crate::error::{Result, UraniaError};

/// A CSV reader that yields rows in fixed-size chunks
pub struct ChunkedReader {
    reader: csv::Reader<File>,
    headers: StringRecord,
    chunk_size: usize,
}

impl ChunkedReader {
    /// Open a catalog file for chunked streaming
    pub fn open(path: &Path, chunk_size: usize) -> Result<Self> {
        // Rows with a deviant field count are data-quality noise, handled
        // at extraction time, not a parse abort.
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)?;
        let headers = reader.headers()?.clone();

        Ok(Self {
            reader,
            headers,
            chunk_size,
        })
    }

    /// The file's header row
    pub fn headers(&self) -> &StringRecord {
        &self.headers
    }

    /// Read the next chunk of up to `chunk_size` rows.
    ///
    /// Returns `Ok(None)` once the file is exhausted.
    pub fn next_chunk(&mut self) -> Result<Option<Vec<StringRecord>>> {
        let mut chunk = Vec::with_capacity(self.chunk_size);

        for record in self.reader.records().take(self.chunk_size) {
            chunk.push(record?);
        }

        if chunk.is_empty() {
            Ok(None)
        } else {
            Ok(Some(chunk))
        }
    }
}

/// Column positions for a set of named fields within one file
#[derive(Debug)]
pub struct ColumnMap {
    indices: Vec<usize>,
}

impl ColumnMap {
    /// Resolve field names against a file's header row
    pub fn resolve(headers: &StringRecord, fields: &[&str], file: &Path) -> Result<Self> {
        let indices = fields
            .iter()
            .map(|field| {
                headers
                    .iter()
                    .position(|h| h == *field)
                    .ok_or_else(|| UraniaError::MissingColumn {
                        column: field.to_string(),
                        file: file.display().to_string(),
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { indices })
    }

    /// Extract the mapped values from a row into `out`, in field order.
    ///
    /// Returns `false` (leaving `out` unspecified) if any value is missing:
    /// absent, empty, unparseable, or non-finite.
    pub fn extract(&self, record: &StringRecord, out: &mut Vec<f64>) -> bool {
        out.clear();
        for &idx in &self.indices {
            match parse_value(record.get(idx)) {
                Some(v) => out.push(v),
                None => return false,
            }
        }
        true
    }
}

/// Parse one raw CSV value; `None` for anything absent or non-finite
pub fn parse_value(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_file(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        let mut f = File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value(Some("1.5")), Some(1.5));
        assert_eq!(parse_value(Some(" 2.0 ")), Some(2.0));
        assert_eq!(parse_value(Some("")), None);
        assert_eq!(parse_value(Some("abc")), None);
        assert_eq!(parse_value(Some("NaN")), None);
        assert_eq!(parse_value(Some("inf")), None);
        assert_eq!(parse_value(None), None);
    }

    #[test]
    fn test_chunked_reading() {
        let dir = tempdir().unwrap();
        let rows: String = (0..25).map(|i| format!("{},{}\n", i, i * 2)).collect();
        let path = write_file(dir.path(), "chunks.csv", &format!("a,b\n{}", rows));

        let mut reader = ChunkedReader::open(&path, 10).unwrap();
        assert_eq!(reader.next_chunk().unwrap().unwrap().len(), 10);
        assert_eq!(reader.next_chunk().unwrap().unwrap().len(), 10);
        assert_eq!(reader.next_chunk().unwrap().unwrap().len(), 5);
        assert!(reader.next_chunk().unwrap().is_none());
    }

    #[test]
    fn test_column_map_resolves_by_name_not_position() {
        let dir = tempdir().unwrap();
        let path = write_file(dir.path(), "shuffled.csv", "dec,bp_rp,ra\n-30.0,1.2,45.0\n");

        let mut reader = ChunkedReader::open(&path, 100).unwrap();
        let map = ColumnMap::resolve(reader.headers(), &["ra", "dec"], &path).unwrap();

        let chunk = reader.next_chunk().unwrap().unwrap();
        let mut values = Vec::new();
        assert!(map.extract(&chunk[0], &mut values));
        assert_eq!(values, vec![45.0, -30.0]);
    }

    #[test]
    fn test_missing_column_names_file_and_field() {
        let dir = tempdir().unwrap();
        let path = write_file(dir.path(), "partial.csv", "ra,dec\n1.0,2.0\n");

        let reader = ChunkedReader::open(&path, 100).unwrap();
        let err = ColumnMap::resolve(reader.headers(), &["ra", "parallax"], &path).unwrap_err();
        match err {
            UraniaError::MissingColumn { column, file } => {
                assert_eq!(column, "parallax");
                assert!(file.contains("partial.csv"));
            }
            other => panic!("Expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn test_extract_rejects_missing_values() {
        let dir = tempdir().unwrap();
        let path = write_file(
            dir.path(),
            "gaps.csv",
            "ra,dec\n1.0,2.0\n,2.0\n1.0,NaN\n3.0,4.0\n",
        );

        let mut reader = ChunkedReader::open(&path, 100).unwrap();
        let map = ColumnMap::resolve(reader.headers(), &["ra", "dec"], &path).unwrap();

        let chunk = reader.next_chunk().unwrap().unwrap();
        let mut values = Vec::new();
        let complete: Vec<bool> = chunk
            .iter()
            .map(|row| map.extract(row, &mut values))
            .collect();
        assert_eq!(complete, vec![true, false, false, true]);
    }

    #[test]
    fn test_short_row_is_missing_not_fatal() {
        let dir = tempdir().unwrap();
        let path = write_file(dir.path(), "short.csv", "ra,dec\n1.0,2.0\n5.0\n");

        let mut reader = ChunkedReader::open(&path, 100).unwrap();
        let map = ColumnMap::resolve(reader.headers(), &["ra", "dec"], &path).unwrap();

        let chunk = reader.next_chunk().unwrap().unwrap();
        let mut values = Vec::new();
        assert!(map.extract(&chunk[0], &mut values));
        assert!(!map.extract(&chunk[1], &mut values));
    }
}
