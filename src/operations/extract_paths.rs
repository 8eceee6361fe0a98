use crate::error::Result;
use crate::geometry::Collider;
use crate::math::{Point2, Polygon2D};
use crate::scene::{ObjectId, Scene};

/// Collects the collider outlines of a host object as closed polygons.
///
/// Output order is stable for unchanged input: composite sub-paths first,
/// then polygon sub-paths grouped by collider, then box rectangles, each
/// group in attachment order. Sub-paths with fewer than three points are
/// dropped.
pub struct ExtractPaths {
    host: ObjectId,
}

impl ExtractPaths {
    /// Creates a new `ExtractPaths` operation.
    #[must_use]
    pub fn new(host: ObjectId) -> Self {
        Self { host }
    }

    /// Executes the extraction against the host's attached colliders.
    ///
    /// An empty result means the host has no valid paths.
    ///
    /// # Errors
    ///
    /// Returns an error if the host does not exist.
    pub fn execute<S: Scene + ?Sized>(&self, scene: &S) -> Result<Vec<Polygon2D>> {
        Ok(collect_polygons(scene.colliders(self.host)?))
    }
}

/// Normalizes a list of colliders into polygons, in extraction order.
///
/// Box rectangles are always emitted, even for non-finite sizes.
#[must_use]
pub fn collect_polygons(colliders: &[Collider]) -> Vec<Polygon2D> {
    let mut polygons = Vec::new();

    for collider in colliders {
        if let Collider::Composite { paths } = collider {
            push_paths(&mut polygons, paths);
        }
    }

    for collider in colliders {
        if let Collider::Polygon { paths } = collider {
            push_paths(&mut polygons, paths);
        }
    }

    polygons.extend(
        colliders
            .iter()
            .filter_map(Collider::half_extents)
            .map(Polygon2D::rectangle),
    );

    polygons
}

fn push_paths(polygons: &mut Vec<Polygon2D>, paths: &[Vec<Point2>]) {
    polygons.extend(paths.iter().filter_map(|path| Polygon2D::new(path.clone()).ok()));
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::BakeError;
    use approx::assert_relative_eq;
    use crate::scene::{ObjectData, SceneStore};

    fn square(offset: f32) -> Vec<Point2> {
        vec![
            Point2::new(offset, 0.0),
            Point2::new(offset + 1.0, 0.0),
            Point2::new(offset + 1.0, 1.0),
            Point2::new(offset, 1.0),
        ]
    }

    fn segment() -> Vec<Point2> {
        vec![Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)]
    }

    #[test]
    fn no_colliders_yields_nothing() {
        assert!(collect_polygons(&[]).is_empty());
    }

    #[test]
    fn composite_drops_short_subpaths() {
        let polys = collect_polygons(&[Collider::composite(vec![square(0.0), segment()])]);
        assert_eq!(polys.len(), 1);
        assert_eq!(polys[0].points(), square(0.0).as_slice());
    }

    #[test]
    fn box_yields_fixed_winding() {
        let polys = collect_polygons(&[Collider::boxed(4.0, 2.0)]);
        assert_eq!(polys.len(), 1);
        assert_eq!(
            polys[0].points(),
            &[
                Point2::new(-2.0, -1.0),
                Point2::new(2.0, -1.0),
                Point2::new(2.0, 1.0),
                Point2::new(-2.0, 1.0),
            ]
        );
    }

    #[test]
    fn kinds_are_grouped_regardless_of_attachment_order() {
        let colliders = [
            Collider::boxed(2.0, 2.0),
            Collider::polygon(vec![square(10.0)]),
            Collider::composite(vec![square(20.0), square(30.0)]),
            Collider::polygon(vec![square(40.0), segment(), square(50.0)]),
            Collider::boxed(6.0, 6.0),
        ];
        let polys = collect_polygons(&colliders);
        let first_x: Vec<f32> = polys.iter().map(|p| p.points()[0].x).collect();
        assert_eq!(first_x, vec![20.0, 30.0, 10.0, 40.0, 50.0, -1.0, -3.0]);
    }

    #[test]
    fn non_finite_box_still_yields_rectangle() {
        let polys = collect_polygons(&[
            Collider::polygon(vec![square(0.0)]),
            Collider::boxed(f32::INFINITY, 1.0),
        ]);
        assert_eq!(polys.len(), 2);
        let corner = polys[1].points()[0];
        assert_eq!(corner.x, f32::NEG_INFINITY);
        assert_relative_eq!(corner.y, -0.5);

        let polys = collect_polygons(&[Collider::boxed(f32::NAN, 1.0)]);
        assert_eq!(polys.len(), 1);
        assert!(polys[0].points()[0].x.is_nan());
    }

    #[test]
    fn reads_host_colliders_from_scene() {
        let mut scene = SceneStore::new();
        let host = scene.add_root(ObjectData::new("host"));
        scene
            .add_collider(host, Collider::polygon(vec![square(0.0)]))
            .unwrap();
        scene.add_collider(host, Collider::boxed(1.0, 1.0)).unwrap();

        let polys = ExtractPaths::new(host).execute(&scene).unwrap();
        assert_eq!(polys.len(), 2);
    }

    #[test]
    fn missing_host_is_an_error() {
        let mut scene = SceneStore::new();
        let host = scene.add_root(ObjectData::new("host"));
        scene.destroy(host).unwrap();
        assert!(matches!(
            ExtractPaths::new(host).execute(&scene),
            Err(BakeError::Scene(_))
        ));
    }
}
