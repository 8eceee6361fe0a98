use super::{Point2, Point3, Vector2, MIN_POLYGON_POINTS};
use crate::error::GeometryError;

/// An ordered, closed 2D path with at least [`MIN_POLYGON_POINTS`] points.
///
/// Point order defines the winding and is significant for hashing.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon2D {
    points: Vec<Point2>,
}

impl Polygon2D {
    /// Creates a polygon from an ordered point sequence.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::TooFewPoints`] if fewer than
    /// [`MIN_POLYGON_POINTS`] points are given.
    pub fn new(points: Vec<Point2>) -> Result<Self, GeometryError> {
        if points.len() < MIN_POLYGON_POINTS {
            return Err(GeometryError::TooFewPoints {
                len: points.len(),
                min: MIN_POLYGON_POINTS,
            });
        }
        Ok(Self { points })
    }

    /// Creates an axis-aligned rectangle centred on the origin.
    ///
    /// Corners are emitted as `(-hx,-hy), (hx,-hy), (hx,hy), (-hx,hy)`.
    #[must_use]
    pub fn rectangle(half_extents: Vector2) -> Self {
        let (hx, hy) = (half_extents.x, half_extents.y);
        Self {
            points: vec![
                Point2::new(-hx, -hy),
                Point2::new(hx, -hy),
                Point2::new(hx, hy),
                Point2::new(-hx, hy),
            ],
        }
    }

    /// Returns the points in path order.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the polygon has no points.
    ///
    /// Always `false` for a constructed polygon, which holds at least
    /// [`MIN_POLYGON_POINTS`] points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Promotes the path into 3D on the `z = 0` plane.
    #[must_use]
    pub fn to_3d(&self) -> Vec<Point3> {
        self.points.iter().map(|p| Point3::new(p.x, p.y, 0.0)).collect()
    }
}
