use crate::config::BakeConfig;
use crate::geometry::Collider;

use super::ShadowCaster;

slotmap::new_key_type! {
    /// Unique identifier for an object in the scene store.
    pub struct ObjectId;
}

/// Data associated with a scene object.
#[derive(Debug, Clone, Default)]
pub struct ObjectData {
    pub name: String,
    pub parent: Option<ObjectId>,
    /// Direct children in creation order.
    pub children: Vec<ObjectId>,
    /// Attached colliders in attachment order.
    pub colliders: Vec<Collider>,
    pub shadow_caster: Option<ShadowCaster>,
    /// Present on objects that host a shadow bake.
    pub bake_config: Option<BakeConfig>,
    /// Set on objects created by the baker.
    pub generated: bool,
    /// Excluded from runtime builds.
    pub editor_only: bool,
}

impl ObjectData {
    /// Creates an object with the given name and no components.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}
