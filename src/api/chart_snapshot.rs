use serde::Serialize;

use crate::core::SurfaceBounds;
use crate::error::{ChartError, ChartResult};
use crate::render::Surface;

use super::{Chart, ChartConfig, ChartKind, ChartLayout};

/// Deterministic layout snapshot for regression tests and debug dumps.
///
/// Snapshots are write-only: chart state is never reloaded from them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSnapshot {
    pub kind: ChartKind,
    pub config: ChartConfig,
    pub bounds: SurfaceBounds,
    pub values: Vec<f64>,
    pub layout: ChartLayout,
}

impl<S: Surface> Chart<S> {
    pub fn snapshot(&self) -> ChartResult<ChartSnapshot> {
        Ok(ChartSnapshot {
            kind: self.kind(),
            config: self.config().clone(),
            bounds: self.layout_bounds()?,
            values: self.values().to_vec(),
            layout: self.layout()?,
        })
    }
}

impl ChartSnapshot {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
