use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Ordered, append-only list of values added to one chart.
///
/// This is the only persistent chart state; every layout is derived from it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScalarHistory {
    values: Vec<f64>,
}

impl ScalarHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a history from existing values, rejecting the first invalid one.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> ChartResult<Self> {
        let mut history = Self::new();
        for value in values {
            history.push(value)?;
        }
        Ok(history)
    }

    /// Appends a value and returns its insertion index.
    pub fn push(&mut self, value: f64) -> ChartResult<usize> {
        validate_value(value)?;
        self.values.push(value);
        Ok(self.values.len() - 1)
    }

    pub(crate) fn pop(&mut self) -> Option<f64> {
        self.values.pop()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn max(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::max)
    }
}

pub fn validate_value(value: f64) -> ChartResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ChartError::InvalidValue { value });
    }
    Ok(())
}

pub fn validate_values(values: &[f64]) -> ChartResult<()> {
    values.iter().try_for_each(|value| validate_value(*value))
}
