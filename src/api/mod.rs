mod bar_layout_engine;
mod chart;
mod chart_config;
mod chart_kind;
mod chart_snapshot;
mod layout_engine;
mod line_layout_engine;
mod pie_layout_engine;

pub use bar_layout_engine::BarLayoutEngine;
pub use chart::Chart;
pub use chart_config::{ChartConfig, ChartStyle};
pub use chart_kind::ChartKind;
pub use chart_snapshot::ChartSnapshot;
pub use layout_engine::{ChartLayout, LayoutEngine, format_value};
pub use line_layout_engine::LineLayoutEngine;
pub use pie_layout_engine::PieLayoutEngine;
