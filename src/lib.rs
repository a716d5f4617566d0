//! chart-table: declarative tables with style cascading for chart hosts.
//!
//! A caller builds a [`table::Table`] document, the [`resolve`] pass folds
//! table → column → row → cell styles into one effective style per cell, and a
//! [`render::TableRenderer`] applies the resulting frame to a host widget.

pub mod api;
pub mod color;
pub mod error;
pub mod extensions;
pub mod render;
pub mod resolve;
pub mod style;
pub mod table;
pub mod telemetry;

pub use api::TablePainter;
pub use color::{Color, ContrastPalette};
pub use error::{TableError, TableResult};
pub use resolve::{ResolveConfig, resolve_table};
pub use style::{CellAlign, LineStyle, TableStyle, TextStyle};
pub use table::{Cell, Column, Row, Table, TablePosition};
