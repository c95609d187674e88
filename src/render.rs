//! The streaming render loop.
//!
//! Drives a full render: file discovery, schema validation, chunked row
//! streaming through the projection and coloring stages, and crash-safe
//! persistence of the canvas. The canvas is saved exactly once on every
//! exit path, so partial work survives both errors and interrupts.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, error, info, warn};

use crate::canvas::Canvas;
use crate::catalog::{ChunkedReader, ColumnMap};
use crate::coloring::{get_coloring, Coloring};
use crate::config::Config;
use crate::error::{Result, UraniaError};
use crate::projection::{get_projection, Projection};
use crate::schema;

/// Counters accumulated over one render run
#[derive(Debug, Default, Clone)]
pub struct RenderStats {
    /// Catalog files fully processed
    pub files_processed: usize,
    /// Rows written to the canvas
    pub rows_rendered: u64,
    /// Rows dropped for missing or non-finite required values
    pub rows_skipped: u64,
    /// Whether the run stopped early on a cancellation request
    pub interrupted: bool,
}

/// Render the catalog under `input_dir` onto the configured canvas.
///
/// `cancel` is polled between chunks; once set, the loop stops and the
/// canvas is persisted through the normal finalization step, leaving a
/// resumable partial image.
pub fn run_render(config: &Config, input_dir: &Path, cancel: &AtomicBool) -> Result<RenderStats> {
    let projection = get_projection(&config.render.projection)?;
    let coloring = get_coloring(&config.render.coloring)?;

    let files = discover_files(input_dir)?;
    let required = schema::union_fields(projection.required_fields(), coloring.required_fields());
    schema::check_files(&files, &required)?;

    let mut canvas = Canvas::open(&config.output.path, config.output.width, config.output.height)?;
    let mut stats = RenderStats::default();

    let result = stream_files(
        &files,
        projection.as_ref(),
        coloring.as_ref(),
        &mut canvas,
        config.render.chunk_size,
        cancel,
        &mut stats,
    );

    // Finalization: persist exactly once, success or not. A failed save
    // must not mask an earlier streaming error.
    if let Err(save_err) = canvas.save(&config.output.path) {
        if let Err(stream_err) = result {
            error!(error = %save_err, "Could not persist canvas after render failure");
            return Err(stream_err);
        }
        return Err(save_err);
    }

    result.map(|_| stats)
}

/// Resolve the set of catalog files: regular `.csv` files directly under
/// `dir`, sorted by name for a deterministic write order.
fn discover_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(UraniaError::Config {
            message: format!("Input path is not a directory: {}", dir.display()),
        });
    }

    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file())
        .filter(|path| {
            path.extension()
                .map(|ext| ext.eq_ignore_ascii_case("csv"))
                .unwrap_or(false)
        })
        .collect();

    files.sort();
    Ok(files)
}

/// Stream every file through the projection and coloring stages
fn stream_files(
    files: &[PathBuf],
    projection: &dyn Projection,
    coloring: &dyn Coloring,
    canvas: &mut Canvas,
    chunk_size: usize,
    cancel: &AtomicBool,
    stats: &mut RenderStats,
) -> Result<()> {
    let total = files.len();

    for (index, file) in files.iter().enumerate() {
        debug!(file = %file.display(), "Processing catalog file");

        let keep_going =
            process_file(file, projection, coloring, canvas, chunk_size, cancel, stats)?;

        if !keep_going {
            stats.interrupted = true;
            warn!(
                files_processed = stats.files_processed,
                total, "Render cancelled, saving partial image"
            );
            return Ok(());
        }

        stats.files_processed += 1;
        info!(file = index + 1, total, "Catalog file processed");
    }

    debug!(
        rows_skipped = stats.rows_skipped,
        "Streaming finished, rows with missing values were skipped"
    );
    Ok(())
}

/// Stream one file in chunks; returns `false` if cancellation was requested
fn process_file(
    path: &Path,
    projection: &dyn Projection,
    coloring: &dyn Coloring,
    canvas: &mut Canvas,
    chunk_size: usize,
    cancel: &AtomicBool,
    stats: &mut RenderStats,
) -> Result<bool> {
    let mut reader = ChunkedReader::open(path, chunk_size)?;

    let coo_map = ColumnMap::resolve(reader.headers(), projection.required_fields(), path)?;
    let rgb_map = ColumnMap::resolve(reader.headers(), coloring.required_fields(), path)?;

    let width = canvas.width();
    let height = canvas.height();

    let mut coo_values = Vec::with_capacity(projection.required_fields().len());
    let mut rgb_values = Vec::with_capacity(coloring.required_fields().len());

    while !cancel.load(Ordering::Relaxed) {
        let chunk = match reader.next_chunk()? {
            Some(chunk) => chunk,
            None => return Ok(true),
        };

        for row in &chunk {
            if !coo_map.extract(row, &mut coo_values) || !rgb_map.extract(row, &mut rgb_values) {
                stats.rows_skipped += 1;
                continue;
            }

            let (x, y) = projection.project(&coo_values, width, height);
            let rgb = coloring.colorize(&rgb_values);

            canvas.set(x, y, rgb);
            stats.rows_rendered += 1;
        }
    }

    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_file(dir: &Path, name: &str, contents: &str) {
        let mut f = File::create(dir.join(name)).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
    }

    fn test_config(dir: &Path, width: u32, height: u32) -> Config {
        let mut config = Config::default();
        config.output.path = dir.join("out.png");
        config.output.width = width;
        config.output.height = height;
        config.render.chunk_size = 4;
        config
    }

    #[test]
    fn test_discover_files_filters_and_sorts() {
        let dir = tempdir().unwrap();
        write_file(dir.path(), "b.csv", "ra,dec\n");
        write_file(dir.path(), "a.csv", "ra,dec\n");
        write_file(dir.path(), "notes.txt", "not a catalog\n");
        std::fs::create_dir(dir.path().join("sub.csv")).unwrap();

        let files = discover_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["a.csv", "b.csv"]);
    }

    #[test]
    fn test_discover_files_rejects_missing_directory() {
        let dir = tempdir().unwrap();
        let err = discover_files(&dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, UraniaError::Config { .. }));
    }

    #[test]
    fn test_render_writes_expected_pixel() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("catalog");
        std::fs::create_dir(&input).unwrap();
        write_file(&input, "stars.csv", "ra,dec,bp_rp\n0.0,0.0,1.0\n");

        let config = test_config(dir.path(), 64, 32);
        let cancel = AtomicBool::new(false);
        let stats = run_render(&config, &input, &cancel).unwrap();

        assert_eq!(stats.rows_rendered, 1);
        assert_eq!(stats.rows_skipped, 0);

        let canvas = Canvas::open(&config.output.path, 64, 32).unwrap();
        let rgb = canvas.get(0, 16);
        assert_eq!(rgb[0], 255);
    }

    #[test]
    fn test_missing_values_skip_rows_silently() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("catalog");
        std::fs::create_dir(&input).unwrap();
        write_file(
            &input,
            "stars.csv",
            "ra,dec,bp_rp\n10.0,NaN,1.0\n10.0,20.0,\n30.0,40.0,1.5\n",
        );

        let config = test_config(dir.path(), 64, 32);
        let cancel = AtomicBool::new(false);
        let stats = run_render(&config, &input, &cancel).unwrap();

        assert_eq!(stats.rows_rendered, 1);
        assert_eq!(stats.rows_skipped, 2);
    }

    #[test]
    fn test_schema_failure_aborts_before_any_write() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("catalog");
        std::fs::create_dir(&input).unwrap();
        write_file(&input, "stars.csv", "ra,dec\n0.0,0.0\n");

        let mut config = test_config(dir.path(), 64, 32);
        config.render.coloring = "temperature-distance".to_string();

        let cancel = AtomicBool::new(false);
        let err = run_render(&config, &input, &cancel).unwrap_err();
        assert!(matches!(err, UraniaError::MissingColumn { .. }));
        // Validation failed before the canvas was opened
        assert!(!config.output.path.exists());
    }

    #[test]
    fn test_empty_directory_fails() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("catalog");
        std::fs::create_dir(&input).unwrap();

        let config = test_config(dir.path(), 64, 32);
        let cancel = AtomicBool::new(false);
        let err = run_render(&config, &input, &cancel).unwrap_err();
        assert!(matches!(err, UraniaError::Schema { .. }));
    }

    #[test]
    fn test_cancelled_run_still_saves() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("catalog");
        std::fs::create_dir(&input).unwrap();
        write_file(&input, "stars.csv", "ra,dec,bp_rp\n0.0,0.0,1.0\n");

        let config = test_config(dir.path(), 64, 32);
        let cancel = AtomicBool::new(true);
        let stats = run_render(&config, &input, &cancel).unwrap();

        assert!(stats.interrupted);
        assert_eq!(stats.rows_rendered, 0);
        assert!(config.output.path.is_file());
    }

    #[test]
    fn test_last_write_wins_in_file_order() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("catalog");
        std::fs::create_dir(&input).unwrap();
        // Both rows land on the same pixel; b.csv streams after a.csv.
        write_file(&input, "a.csv", "ra,dec,bp_rp\n0.0,0.0,-0.4\n");
        write_file(&input, "b.csv", "ra,dec,bp_rp\n0.0,0.0,4.0\n");

        let config = test_config(dir.path(), 64, 32);
        let cancel = AtomicBool::new(false);
        run_render(&config, &input, &cancel).unwrap();

        let canvas = Canvas::open(&config.output.path, 64, 32).unwrap();
        let expected = crate::coloring::get_coloring("temperature")
            .unwrap()
            .colorize(&[4.0]);
        assert_eq!(canvas.get(0, 16), expected);
    }
}
