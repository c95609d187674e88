//! Configuration management for urania.
//!
//! This module handles the layered configuration system with the following
//! precedence:
//! 1. Command-line arguments (highest priority)
//! 2. Environment variables
//! 3. JSON config file
//! 4. Default values (lowest priority)

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{Result, UraniaError};

/// Projection names accepted by the render configuration
pub const PROJECTIONS: [&str; 3] = ["plate-carree", "mollweide", "hammer-aitoff"];

/// Coloring names accepted by the render configuration
pub const COLORINGS: [&str; 6] = [
    "temperature",
    "temperature-distance",
    "spectral",
    "metallicity",
    "age",
    "source-id",
];

/// Command-line arguments for urania
#[derive(Parser, Debug)]
#[command(name = "urania")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory of catalog CSV files to render
    pub input_dir: PathBuf,

    /// Path of the output image
    #[arg(short, long, env = "URANIA_OUTPUT", default_value = "renders/starmap.png")]
    pub output: PathBuf,

    /// Output image width in pixels
    #[arg(long, env = "URANIA_WIDTH", default_value_t = 3840)]
    pub width: u32,

    /// Output image height in pixels
    #[arg(long, env = "URANIA_HEIGHT", default_value_t = 2160)]
    pub height: u32,

    /// Sky projection (plate-carree, mollweide, hammer-aitoff)
    #[arg(short, long, env = "URANIA_PROJECTION", default_value = "plate-carree")]
    pub projection: String,

    /// Color mapping (temperature, temperature-distance, spectral,
    /// metallicity, age, source-id)
    #[arg(long, env = "URANIA_COLORING", default_value = "temperature")]
    pub coloring: String,

    /// Rows per streaming chunk
    #[arg(long, env = "URANIA_CHUNK_SIZE", default_value_t = 10_000)]
    pub chunk_size: usize,

    /// Path to JSON configuration file
    #[arg(short, long, env = "URANIA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "URANIA_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

/// Output image configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Path of the output image
    #[serde(default = "default_output_path")]
    pub path: PathBuf,

    /// Image width in pixels
    #[serde(default = "default_width")]
    pub width: u32,

    /// Image height in pixels
    #[serde(default = "default_height")]
    pub height: u32,
}

/// Render pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Sky projection name
    #[serde(default = "default_projection")]
    pub projection: String,

    /// Color mapping name
    #[serde(default = "default_coloring")]
    pub coloring: String,

    /// Rows per streaming chunk
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
}

/// Complete configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Output image configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Render pipeline configuration
    #[serde(default)]
    pub render: RenderConfig,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Config {
    /// Load configuration from all sources with proper precedence
    pub fn load() -> Result<(Self, PathBuf)> {
        let args = Args::parse();

        // Start with defaults
        let mut config = Config::default();

        // Load from JSON file if provided
        if let Some(config_path) = &args.config {
            let json_config = Self::load_from_file(config_path)?;
            config.merge(json_config);
        }

        // Override with command-line arguments
        config.output.path = args.output;
        config.output.width = args.width;
        config.output.height = args.height;
        config.render.projection = args.projection;
        config.render.coloring = args.coloring;
        config.render.chunk_size = args.chunk_size;
        config.log_level = args.log_level;

        // Input directory comes from the command line only
        let input_dir = args.input_dir;

        Ok((config, input_dir))
    }

    /// Load configuration from a JSON file
    fn load_from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        self.output = other.output;
        self.render = other.render;
        self.log_level = other.log_level;
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.output.width == 0 || self.output.height == 0 {
            return Err(UraniaError::Config {
                message: "Output resolution cannot be zero".to_string(),
            });
        }

        if self.render.chunk_size == 0 {
            return Err(UraniaError::Config {
                message: "Chunk size cannot be zero".to_string(),
            });
        }

        if !PROJECTIONS.contains(&self.render.projection.as_str()) {
            return Err(UraniaError::Config {
                message: format!(
                    "Invalid projection: {}. Must be one of: {}",
                    self.render.projection,
                    PROJECTIONS.join(", ")
                ),
            });
        }

        if !COLORINGS.contains(&self.render.coloring.as_str()) {
            return Err(UraniaError::Config {
                message: format!(
                    "Invalid coloring: {}. Must be one of: {}",
                    self.render.coloring,
                    COLORINGS.join(", ")
                ),
            });
        }

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(UraniaError::Config {
                    message: format!(
                        "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                        self.log_level
                    ),
                });
            }
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: OutputConfig::default(),
            render: RenderConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            width: default_width(),
            height: default_height(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            projection: default_projection(),
            coloring: default_coloring(),
            chunk_size: default_chunk_size(),
        }
    }
}

// Default value functions for serde
fn default_output_path() -> PathBuf {
    PathBuf::from("renders/starmap.png")
}

fn default_width() -> u32 {
    3840
}

fn default_height() -> u32 {
    2160
}

fn default_projection() -> String {
    "plate-carree".to_string()
}

fn default_coloring() -> String {
    "temperature".to_string()
}

fn default_chunk_size() -> usize {
    10_000
}

fn default_log_level() -> String {
    "info".to_string()
}
