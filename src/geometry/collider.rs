use crate::math::{Point2, Vector2};

/// A 2D collider attached to a scene object, described by its outline data.
///
/// Paths are in the collider's local space. The list of colliders on an
/// object is kept in attachment order.
#[derive(Debug, Clone, PartialEq)]
pub enum Collider {
    /// Merged outline of several child colliders; one entry per sub-path.
    Composite { paths: Vec<Vec<Point2>> },
    /// Hand-authored polygon outline; one entry per sub-path.
    Polygon { paths: Vec<Vec<Point2>> },
    /// Axis-aligned box centred on the local origin.
    Box { size: Vector2 },
}

impl Collider {
    /// Creates a composite collider from its sub-paths.
    #[must_use]
    pub fn composite(paths: Vec<Vec<Point2>>) -> Self {
        Self::Composite { paths }
    }

    /// Creates a polygon collider from its sub-paths.
    #[must_use]
    pub fn polygon(paths: Vec<Vec<Point2>>) -> Self {
        Self::Polygon { paths }
    }

    /// Creates a box collider with the given full width and height.
    #[must_use]
    pub fn boxed(width: f32, height: f32) -> Self {
        Self::Box {
            size: Vector2::new(width, height),
        }
    }

    /// Returns the box half-extents, or `None` for path colliders.
    #[must_use]
    pub fn half_extents(&self) -> Option<Vector2> {
        match self {
            Self::Box { size } => Some(size * 0.5),
            Self::Composite { .. } | Self::Polygon { .. } => None,
        }
    }
}
