//! Logging utilities for the urania renderer.
//!
//! Structured logging keeps long catalog runs observable: per-file progress
//! at info, row-level noise only in aggregate at debug.

use std::time::Instant;
use tracing::{debug, error, info};

use uuid::Uuid;

use crate::render::RenderStats;

/// Initialize the tracing subscriber with the given log level
pub fn init_tracing(log_level: &str) {
    let filter = match std::env::var("RUST_LOG") {
        Ok(val) => val,
        Err(_) => log_level.to_string(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

/// Log an operation with timing and result in a single statement
pub fn log_timed_operation<F, R>(operation: &str, f: F) -> R
where
    F: FnOnce() -> R,
{
    let start = Instant::now();
    let run_id = Uuid::new_v4();

    debug!(operation = operation, run_id = %run_id, "Starting operation");

    let result = f();

    let duration = start.elapsed();

    info!(
        operation = operation,
        run_id = %run_id,
        duration_ms = duration.as_secs_f64() * 1000.0,
        "Operation completed"
    );

    result
}

/// Log the outcome of a render run
pub fn log_render_stats(stats: &RenderStats, output_path: &str) {
    info!(
        operation = "render",
        files_processed = stats.files_processed,
        rows_rendered = stats.rows_rendered,
        rows_skipped = stats.rows_skipped,
        interrupted = stats.interrupted,
        output = output_path,
        "Render finished"
    );
}

/// Log an error with context
pub fn log_error(error: &crate::error::UraniaError, context: &str) {
    error!(
        error = %error,
        context = context,
        "Error occurred"
    );
}
