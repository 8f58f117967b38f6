pub mod bar_layout;
pub mod geometry;
pub mod history;
pub mod line_layout;
pub mod pie_layout;
pub mod scale;
pub mod types;

pub use bar_layout::{BarDatum, layout_bars};
pub use geometry::{Point, degrees_to_radians, radians_to_degrees, rotate_about};
pub use history::{ScalarHistory, validate_value};
pub use line_layout::{PointDatum, layout_line_points, segment_width};
pub use pie_layout::{
    MAX_SECTOR_SPAN_DEGREES, PathSegment, SectorDatum, WedgeGeometry, layout_pie_sectors,
    pie_radius, wedge_geometry,
};
pub use scale::{ValueScale, round_to_hundredths};
pub use types::{ChartDimensions, SurfaceBounds};
