//! Test data generation utilities.
//!
//! Builds small catalog CSV files with known star positions so integration
//! tests can assert exact pixel outcomes.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use urania::Config;

/// Write one catalog CSV file with the given header and data rows
pub fn write_catalog(dir: &Path, name: &str, header: &str, rows: &[String]) -> PathBuf {
    let path = dir.join(name);
    let mut file = File::create(&path).unwrap();
    writeln!(file, "{}", header).unwrap();
    for row in rows {
        writeln!(file, "{}", row).unwrap();
    }
    path
}

/// Format a star row for the standard `ra,dec,bp_rp` header
pub fn star_row(ra: f64, dec: f64, bp_rp: f64) -> String {
    format!("{},{},{}", ra, dec, bp_rp)
}

/// A small test configuration rendering into `dir/out.png`
pub fn test_config(dir: &Path, width: u32, height: u32) -> Config {
    let mut config = Config::default();
    config.output.path = dir.join("out.png");
    config.output.width = width;
    config.output.height = height;
    config.render.chunk_size = 3;
    config
}
