pub mod polygon_2d;

pub use polygon_2d::Polygon2D;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f32>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f32>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f32>;

/// Minimum number of points for a path to enclose an area.
pub const MIN_POLYGON_POINTS: usize = 3;
