use tracing::{debug, info, warn};

use crate::config::BakeConfig;
use crate::error::Result;
use crate::math::{Point3, Polygon2D, MIN_POLYGON_POINTS};
use crate::scene::{LayerId, LayerTable, ObjectId, Scene, ShadowCaster};

use super::{path_hash, CleanupGenerated, ExtractPaths, ResolveLayers};

/// A baked shadow caster shape, owned by the baker until handed to the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct BakedShape {
    /// Name of the generated object.
    pub name: String,
    /// Source outline promoted to the `z = 0` plane.
    pub path: Vec<Point3>,
    /// Fingerprint of `path`.
    pub hash: i32,
    /// Sorting layers, in precedence order, without duplicates.
    pub layers: Vec<LayerId>,
    pub self_shadows: bool,
}

impl BakedShape {
    /// Bakes one polygon into a named shape.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        polygon: &Polygon2D,
        layers: &[LayerId],
        self_shadows: bool,
    ) -> Self {
        let path = polygon.to_3d();
        let hash = path_hash(&path);
        Self {
            name: name.into(),
            path,
            hash,
            layers: layers.to_vec(),
            self_shadows,
        }
    }
}

impl From<&BakedShape> for ShadowCaster {
    fn from(shape: &BakedShape) -> Self {
        Self {
            path: shape.path.clone(),
            path_hash: shape.hash,
            applicable_layers: shape.layers.clone(),
            self_shadows: shape.self_shadows,
        }
    }
}

/// Objects created by one bake.
#[derive(Debug, Clone)]
pub struct BakeReport {
    pub host: ObjectId,
    /// Number of previously generated children removed by the sweep.
    pub removed: usize,
    /// Created objects and their shapes, in creation order.
    pub shapes: Vec<(ObjectId, BakedShape)>,
}

impl BakeReport {
    /// Returns the number of shapes created.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns `true` if no shapes were created.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

/// Result of a single host bake.
#[derive(Debug, Clone)]
pub enum BakeOutcome {
    /// The host had no valid collider paths. Only the sweep ran.
    NoPaths { removed: usize },
    /// Shapes were generated.
    Baked(BakeReport),
}

impl BakeOutcome {
    /// Returns the number of shapes created.
    #[must_use]
    pub fn shape_count(&self) -> usize {
        match self {
            Self::NoPaths { .. } => 0,
            Self::Baked(report) => report.len(),
        }
    }

    /// Returns the number of old children removed by the sweep.
    #[must_use]
    pub fn removed(&self) -> usize {
        match self {
            Self::NoPaths { removed } => *removed,
            Self::Baked(report) => report.removed,
        }
    }
}

/// Replaces a host's generated shadow casters with freshly baked ones.
///
/// Old output is swept first, then one child is created per valid collider
/// polygon, named `<prefix><index>` with a contiguous zero-based index.
/// Running it again on unchanged input yields the same names, hashes and
/// layers on new objects.
///
/// The bake is not transactional: if the scene fails part way, the objects
/// already created stay, and the next bake sweeps them.
pub struct BakeShadowCasters<'a> {
    host: ObjectId,
    config: &'a BakeConfig,
}

impl<'a> BakeShadowCasters<'a> {
    /// Creates a new `BakeShadowCasters` operation.
    #[must_use]
    pub fn new(host: ObjectId, config: &'a BakeConfig) -> Self {
        Self { host, config }
    }

    /// Executes the bake.
    ///
    /// # Errors
    ///
    /// Returns an error if the host does not exist or
    /// the scene fails to create or edit an object. No retry is attempted.
    pub fn execute<S: Scene + LayerTable + ?Sized>(&self, scene: &mut S) -> Result<BakeOutcome> {
        let mut cleanup = CleanupGenerated::new(self.host);
        if self.config.sweep_by_prefix {
            cleanup = cleanup.with_name_prefix(&self.config.name_prefix);
        }
        let removed = cleanup.execute(scene)?;

        let polygons = ExtractPaths::new(self.host).execute(&*scene)?;
        if polygons.is_empty() {
            warn!(host = ?self.host, "no valid collider paths, nothing to bake");
            return Ok(BakeOutcome::NoPaths { removed });
        }

        let layers =
            ResolveLayers::new(&self.config.layer_a, &self.config.layer_b).execute(&*scene);

        let mut shapes = Vec::with_capacity(polygons.len());
        for polygon in polygons.iter().filter(|p| p.len() >= MIN_POLYGON_POINTS) {
            let name = self.config.output_name(shapes.len());
            let shape = BakedShape::new(name, polygon, &layers, self.config.self_shadows);
            let id = self.emit(scene, &shape)?;
            debug!(
                host = ?self.host,
                name = %shape.name,
                hash = shape.hash,
                "created shadow caster"
            );
            shapes.push((id, shape));
        }

        info!(host = ?self.host, count = shapes.len(), "baked shadow casters");
        Ok(BakeOutcome::Baked(BakeReport {
            host: self.host,
            removed,
            shapes,
        }))
    }

    fn emit<S: Scene + ?Sized>(&self, scene: &mut S, shape: &BakedShape) -> Result<ObjectId> {
        let id = scene.create_child(self.host, &shape.name)?;
        scene.mark_generated(id)?;
        if self.config.editor_only {
            scene.mark_editor_only(id)?;
        }
        scene.set_shadow_caster(id, ShadowCaster::from(shape))?;
        Ok(id)
    }
}
