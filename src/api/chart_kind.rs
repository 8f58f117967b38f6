use std::fmt;

use serde::{Deserialize, Serialize};

use super::{BarLayoutEngine, LayoutEngine, LineLayoutEngine, PieLayoutEngine};

/// Chart variant selected explicitly by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Line,
    Pie,
    Bar,
}

impl ChartKind {
    pub const ALL: [Self; 3] = [Self::Line, Self::Pie, Self::Bar];

    #[must_use]
    pub fn engine(self) -> &'static dyn LayoutEngine {
        match self {
            Self::Line => &LineLayoutEngine,
            Self::Pie => &PieLayoutEngine,
            Self::Bar => &BarLayoutEngine,
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Line => "line",
            Self::Pie => "pie",
            Self::Bar => "bar",
        };
        f.write_str(name)
    }
}
