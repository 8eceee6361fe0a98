pub mod layer;
pub mod object;
pub mod shadow_caster;

pub use layer::{LayerId, LayerTable, SortingLayer};
pub use object::{ObjectData, ObjectId};
pub use shadow_caster::ShadowCaster;

use crate::config::BakeConfig;
use crate::error::SceneError;
use crate::geometry::Collider;
use slotmap::SlotMap;

/// Object graph operations the baker needs from its host environment.
pub trait Scene {
    /// Creates an empty child under `parent` with no transform offset.
    ///
    /// # Errors
    ///
    /// Returns an error if `parent` does not exist or the scene refuses the
    /// creation.
    fn create_child(&mut self, parent: ObjectId, name: &str) -> Result<ObjectId, SceneError>;

    /// Returns the object's name.
    ///
    /// # Errors
    ///
    /// Returns an error if the object does not exist.
    fn name(&self, id: ObjectId) -> Result<&str, SceneError>;

    /// Returns the object's direct children in creation order.
    ///
    /// # Errors
    ///
    /// Returns an error if the object does not exist.
    fn children(&self, id: ObjectId) -> Result<&[ObjectId], SceneError>;

    /// Returns the object's colliders in attachment order.
    ///
    /// # Errors
    ///
    /// Returns an error if the object does not exist.
    fn colliders(&self, id: ObjectId) -> Result<&[Collider], SceneError>;

    /// Returns the object's shadow caster, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the object does not exist.
    fn shadow_caster(&self, id: ObjectId) -> Result<Option<&ShadowCaster>, SceneError>;

    /// Attaches or replaces the object's shadow caster.
    ///
    /// # Errors
    ///
    /// Returns an error if the object does not exist.
    fn set_shadow_caster(&mut self, id: ObjectId, caster: ShadowCaster) -> Result<(), SceneError>;

    /// Returns `true` if the object was created by the baker.
    ///
    /// # Errors
    ///
    /// Returns an error if the object does not exist.
    fn is_generated(&self, id: ObjectId) -> Result<bool, SceneError>;

    /// Marks the object as baker output.
    ///
    /// # Errors
    ///
    /// Returns an error if the object does not exist.
    fn mark_generated(&mut self, id: ObjectId) -> Result<(), SceneError>;

    /// Excludes the object from runtime builds.
    ///
    /// # Errors
    ///
    /// Returns an error if the object does not exist.
    fn mark_editor_only(&mut self, id: ObjectId) -> Result<(), SceneError>;

    /// Destroys the object and its descendants immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if the object does not exist or the scene refuses the
    /// removal.
    fn destroy(&mut self, id: ObjectId) -> Result<(), SceneError>;

    /// Returns every object carrying a [`BakeConfig`], in scene order.
    fn bake_hosts(&self) -> Vec<ObjectId>;

    /// Returns the object's bake configuration, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the object does not exist.
    fn bake_config(&self, id: ObjectId) -> Result<Option<&BakeConfig>, SceneError>;
}

/// In-memory scene graph.
///
/// Objects reference each other via typed IDs (generational indices), so a
/// destroyed object's ID never resolves to a later object.
#[derive(Debug, Default)]
pub struct SceneStore {
    objects: SlotMap<ObjectId, ObjectData>,
    roots: Vec<ObjectId>,
    layers: Vec<SortingLayer>,
}

impl SceneStore {
    /// Creates a new, empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scene with the given sorting layer table.
    #[must_use]
    pub fn with_layers(layers: Vec<SortingLayer>) -> Self {
        Self {
            layers,
            ..Self::default()
        }
    }

    /// Appends a sorting layer to the layer table.
    pub fn add_layer(&mut self, layer: SortingLayer) {
        self.layers.push(layer);
    }

    /// Inserts a root object and returns its ID.
    pub fn add_root(&mut self, data: ObjectData) -> ObjectId {
        let id = self.objects.insert(ObjectData {
            parent: None,
            children: Vec::new(),
            ..data
        });
        self.roots.push(id);
        id
    }

    /// Inserts an object under `parent` and returns its ID.
    ///
    /// # Errors
    ///
    /// Returns an error if `parent` is not in the store.
    pub fn add_child(&mut self, parent: ObjectId, data: ObjectData) -> Result<ObjectId, SceneError> {
        if !self.objects.contains_key(parent) {
            return Err(not_found(parent));
        }
        let id = self.objects.insert(ObjectData {
            parent: Some(parent),
            children: Vec::new(),
            ..data
        });
        self.object_mut(parent)?.children.push(id);
        Ok(id)
    }

    /// Attaches a collider after any existing ones.
    ///
    /// # Errors
    ///
    /// Returns an error if the object is not in the store.
    pub fn add_collider(&mut self, id: ObjectId, collider: Collider) -> Result<(), SceneError> {
        self.object_mut(id)?.colliders.push(collider);
        Ok(())
    }

    /// Attaches or replaces the object's bake configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the object is not in the store.
    pub fn set_bake_config(&mut self, id: ObjectId, config: BakeConfig) -> Result<(), SceneError> {
        self.object_mut(id)?.bake_config = Some(config);
        Ok(())
    }

    /// Returns a reference to the object data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the object is not in the store.
    pub fn object(&self, id: ObjectId) -> Result<&ObjectData, SceneError> {
        self.objects.get(id).ok_or_else(|| not_found(id))
    }

    /// Returns a mutable reference to the object data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the object is not in the store.
    pub fn object_mut(&mut self, id: ObjectId) -> Result<&mut ObjectData, SceneError> {
        self.objects.get_mut(id).ok_or_else(|| not_found(id))
    }

    /// Returns `true` if the object is in the store.
    #[must_use]
    pub fn contains(&self, id: ObjectId) -> bool {
        self.objects.contains_key(id)
    }

    /// Returns the total number of objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns `true` if the scene has no objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Returns all objects depth-first, roots in creation order.
    #[must_use]
    pub fn traverse(&self) -> Vec<ObjectId> {
        let mut order = Vec::with_capacity(self.objects.len());
        let mut stack: Vec<ObjectId> = self.roots.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            let Some(data) = self.objects.get(id) else {
                continue;
            };
            order.push(id);
            stack.extend(data.children.iter().rev().copied());
        }
        order
    }

    fn remove_subtree(&mut self, id: ObjectId) {
        if let Some(data) = self.objects.remove(id) {
            for child in data.children {
                self.remove_subtree(child);
            }
        }
    }
}

fn not_found(id: ObjectId) -> SceneError {
    SceneError::ObjectNotFound(format!("{id:?}"))
}

impl Scene for SceneStore {
    fn create_child(&mut self, parent: ObjectId, name: &str) -> Result<ObjectId, SceneError> {
        self.add_child(parent, ObjectData::new(name))
    }

    fn name(&self, id: ObjectId) -> Result<&str, SceneError> {
        Ok(&self.object(id)?.name)
    }

    fn children(&self, id: ObjectId) -> Result<&[ObjectId], SceneError> {
        Ok(&self.object(id)?.children)
    }

    fn colliders(&self, id: ObjectId) -> Result<&[Collider], SceneError> {
        Ok(&self.object(id)?.colliders)
    }

    fn shadow_caster(&self, id: ObjectId) -> Result<Option<&ShadowCaster>, SceneError> {
        Ok(self.object(id)?.shadow_caster.as_ref())
    }

    fn set_shadow_caster(&mut self, id: ObjectId, caster: ShadowCaster) -> Result<(), SceneError> {
        self.object_mut(id)?.shadow_caster = Some(caster);
        Ok(())
    }

    fn is_generated(&self, id: ObjectId) -> Result<bool, SceneError> {
        Ok(self.object(id)?.generated)
    }

    fn mark_generated(&mut self, id: ObjectId) -> Result<(), SceneError> {
        self.object_mut(id)?.generated = true;
        Ok(())
    }

    fn mark_editor_only(&mut self, id: ObjectId) -> Result<(), SceneError> {
        self.object_mut(id)?.editor_only = true;
        Ok(())
    }

    fn destroy(&mut self, id: ObjectId) -> Result<(), SceneError> {
        let parent = self.object(id)?.parent;
        match parent {
            Some(parent) => {
                if let Some(data) = self.objects.get_mut(parent) {
                    data.children.retain(|&c| c != id);
                }
            }
            None => self.roots.retain(|&r| r != id),
        }
        self.remove_subtree(id);
        Ok(())
    }

    fn bake_hosts(&self) -> Vec<ObjectId> {
        self.traverse()
            .into_iter()
            .filter(|&id| {
                self.objects
                    .get(id)
                    .is_some_and(|data| data.bake_config.is_some())
            })
            .collect()
    }

    fn bake_config(&self, id: ObjectId) -> Result<Option<&BakeConfig>, SceneError> {
        Ok(self.object(id)?.bake_config.as_ref())
    }
}

impl LayerTable for SceneStore {
    fn sorting_layers(&self) -> &[SortingLayer] {
        &self.layers
    }
}
