//! stat-charts: layout engine for simple statistical charts.
//!
//! Line, pie and bar charts are laid out from an append-only value history.
//! Every mutation recomputes the whole layout and hands a fresh set of
//! drawable primitives to a host-provided [`render::Surface`].

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{Chart, ChartConfig, ChartKind};
pub use error::{ChartError, ChartResult};
