//! urania - a streaming, crash-safe star-map renderer
//!
//! This is the main entry point for the urania application.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{info, warn};

use urania::{
    init_tracing, log_error, log_render_stats, log_timed_operation, run_render, Config, Result,
    UraniaError,
};

fn main() -> Result<()> {
    // Load configuration
    let (config, input_dir) = Config::load()?;

    // Validate configuration
    config.validate().map_err(|e| {
        eprintln!("Invalid configuration: {}", e);
        e
    })?;

    init_tracing(&config.log_level);

    info!("Starting urania v{}", env!("CARGO_PKG_VERSION"));
    info!(
        projection = %config.render.projection,
        coloring = %config.render.coloring,
        resolution = format!("{}x{}", config.output.width, config.output.height),
        input = %input_dir.display(),
        output = %config.output.path.display(),
        "Render configuration"
    );
    warn!("Starting render. This process might be slow.");

    // Route Ctrl+C through the render loop's finalization step so an
    // interrupted run still saves a resumable partial image.
    let cancel = Arc::new(AtomicBool::new(false));
    let handler_flag = Arc::clone(&cancel);
    ctrlc::set_handler(move || {
        handler_flag.store(true, Ordering::Relaxed);
    })
    .map_err(|e| UraniaError::Config {
        message: format!("Failed to install interrupt handler: {}", e),
    })?;

    let stats = log_timed_operation("render", || run_render(&config, &input_dir, &cancel))
        .map_err(|e| {
            log_error(&e, "render");
            e
        })?;

    log_render_stats(&stats, &config.output.path.display().to_string());

    if stats.interrupted {
        warn!("Render was interrupted; the partial image is resumable");
    } else {
        info!(
            finished_at = %chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            "Image saved at: {}", config.output.path.display()
        );
    }

    Ok(())
}
