//! Catalog input handling.
//!
//! Tabular catalog files are streamed in bounded-memory chunks; fields are
//! looked up by header name, since column order is not fixed across files.
//! A separate fixed-order decoder exists for the legacy Gaia EDR3 schema.

pub mod gaia;
pub mod reader;

pub use gaia::{GaiaSource, GAIA_EDR3_COLUMNS};
pub use reader::{parse_value, ChunkedReader, ColumnMap};
