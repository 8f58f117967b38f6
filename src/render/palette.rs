use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

const GOLDEN_RATIO_CONJUGATE: f64 = 0.618_033_988_749_895;
const SATURATION: f64 = 0.55;
const BRIGHTNESS: f64 = 0.9;

/// Fill colors keyed by a value's insertion index.
///
/// Because history is append-only, an insertion index never changes, so a
/// value keeps its color across reflows even when pie sorting moves it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ColorPalette {
    /// Golden-ratio hue walk starting at `start_hue` (0..1). Every channel
    /// stays above ~0.4, so fills never read as black.
    GoldenHue { start_hue: f64 },
    /// Explicit colors, repeated when the history outgrows the list.
    Cycle(Vec<Color>),
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::GoldenHue { start_hue: 0.1 }
    }
}

impl ColorPalette {
    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Self::GoldenHue { start_hue } => {
                if !start_hue.is_finite() {
                    return Err(ChartError::InvalidData(
                        "palette start hue must be finite".to_owned(),
                    ));
                }
                Ok(())
            }
            Self::Cycle(colors) => {
                if colors.is_empty() {
                    return Err(ChartError::InvalidData(
                        "palette cycle must not be empty".to_owned(),
                    ));
                }
                colors.iter().try_for_each(|color| color.validate())
            }
        }
    }

    #[must_use]
    pub fn color_at(&self, index: usize) -> Color {
        match self {
            Self::GoldenHue { start_hue } => {
                let hue = (start_hue + index as f64 * GOLDEN_RATIO_CONJUGATE).rem_euclid(1.0);
                hsv_to_rgb(hue, SATURATION, BRIGHTNESS)
            }
            Self::Cycle(colors) => match colors.len() {
                0 => Color::BLACK,
                len => colors[index % len],
            },
        }
    }
}

fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> Color {
    let sector = hue * 6.0;
    let chroma = value * saturation;
    let secondary = chroma * (1.0 - (sector.rem_euclid(2.0) - 1.0).abs());
    let floor = value - chroma;
    let (red, green, blue) = match sector as u8 {
        0 => (chroma, secondary, 0.0),
        1 => (secondary, chroma, 0.0),
        2 => (0.0, chroma, secondary),
        3 => (0.0, secondary, chroma),
        4 => (secondary, 0.0, chroma),
        _ => (chroma, 0.0, secondary),
    };
    Color::rgb(red + floor, green + floor, blue + floor)
}
