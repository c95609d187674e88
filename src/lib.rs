//! # urania
//!
//! A streaming, crash-safe star-map renderer for large astronomical
//! catalogs.
//!
//! This library turns a directory of tabular catalog files into a full-sky
//! image: each record is projected to a pixel coordinate by a chosen sky
//! projection and colored by a chosen physical-property mapping, then
//! written into a resumable pixel buffer.
//!
//! ## Key Features
//!
//! - **Bounded memory**: catalogs of any size stream through fixed-size
//!   row chunks
//! - **Crash-safe partial output**: the canvas is persisted on every exit
//!   path, so interrupted runs resume where they stopped
//! - **Pluggable transforms**: projections and colorings declare their
//!   required catalog fields, validated up front against the input schema
//!
//! ## Architecture
//!
//! - **Catalog layer**: chunked, header-aware CSV streaming
//! - **Transform layer**: pure projection and coloring functions
//! - **Sink layer**: an RGB canvas with load/save and resume semantics

pub mod canvas;
pub mod catalog;
pub mod coloring;
pub mod config;
pub mod error;
pub mod logging;
pub mod projection;
pub mod render;
pub mod schema;

pub use canvas::Canvas;
pub use config::Config;
pub use error::{Result, UraniaError};
pub use logging::{init_tracing, log_error, log_render_stats, log_timed_operation};
pub use render::{run_render, RenderStats};
