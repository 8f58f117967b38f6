use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::core::history::validate_values;
use crate::error::{ChartError, ChartResult};

/// Linear value-to-extent scale anchored at zero and the running maximum.
///
/// The largest value maps exactly onto `extent`; everything else lands
/// proportionally lower. A history whose maximum is zero maps every value
/// to zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueScale {
    max_value: f64,
    extent: f64,
}

impl ValueScale {
    pub fn new(max_value: f64, extent: f64) -> ChartResult<Self> {
        if !max_value.is_finite() || max_value < 0.0 {
            return Err(ChartError::InvalidValue { value: max_value });
        }
        if !extent.is_finite() || extent <= 0.0 {
            return Err(ChartError::InvalidData(
                "scale extent must be finite and > 0".to_owned(),
            ));
        }

        Ok(Self { max_value, extent })
    }

    /// Fits a scale to the maximum of `values`.
    pub fn from_values(values: &[f64], extent: f64) -> ChartResult<Self> {
        validate_values(values)?;
        let max_value = values.iter().copied().fold(0.0, f64::max);
        Self::new(max_value, extent)
    }

    #[must_use]
    pub fn max_value(self) -> f64 {
        self.max_value
    }

    #[must_use]
    pub fn extent(self) -> f64 {
        self.extent
    }

    /// Value units per pixel; zero for a flat all-zero history.
    #[must_use]
    pub fn denominator(self) -> f64 {
        self.max_value / self.extent
    }

    #[must_use]
    pub fn value_to_extent(self, value: f64) -> f64 {
        if self.max_value == 0.0 {
            return 0.0;
        }
        (value / self.max_value) * self.extent
    }
}

/// Rounds to two decimal places, half-to-even.
pub fn round_to_hundredths(value: f64) -> ChartResult<f64> {
    let decimal = Decimal::from_f64(value).ok_or_else(|| {
        ChartError::InvalidData(format!("{value} cannot be represented as decimal"))
    })?;
    decimal
        .round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven)
        .to_f64()
        .ok_or_else(|| ChartError::InvalidData("rounded value cannot be represented as f64".to_owned()))
}
