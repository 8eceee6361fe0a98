use tracing::debug;

use crate::error::Result;
use crate::scene::{ObjectId, Scene};

/// Removes every direct child of a host that the baker considers its output.
///
/// A child matches if it carries the generated marker or a shadow caster.
/// With a name prefix set, a child whose name starts with it also matches.
/// Matching children are destroyed immediately, together with their
/// descendants; other children are left untouched.
pub struct CleanupGenerated<'a> {
    host: ObjectId,
    name_prefix: Option<&'a str>,
}

impl<'a> CleanupGenerated<'a> {
    /// Creates a new `CleanupGenerated` operation.
    #[must_use]
    pub fn new(host: ObjectId) -> Self {
        Self {
            host,
            name_prefix: None,
        }
    }

    /// Also matches children by name prefix. An empty prefix is ignored.
    #[must_use]
    pub fn with_name_prefix(mut self, prefix: &'a str) -> Self {
        self.name_prefix = Some(prefix).filter(|p| !p.is_empty());
        self
    }

    /// Executes the sweep, returning the number of children removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the host does not exist or the scene refuses a
    /// removal.
    pub fn execute<S: Scene + ?Sized>(&self, scene: &mut S) -> Result<usize> {
        let children = scene.children(self.host)?.to_vec();
        let mut matched = Vec::new();
        for child in children {
            if self.matches(&*scene, child)? {
                matched.push(child);
            }
        }

        for &child in &matched {
            debug!(host = ?self.host, child = ?child, "removing generated child");
            scene.destroy(child)?;
        }
        Ok(matched.len())
    }

    fn matches<S: Scene + ?Sized>(&self, scene: &S, child: ObjectId) -> Result<bool> {
        if scene.is_generated(child)? || scene.shadow_caster(child)?.is_some() {
            return Ok(true);
        }
        match self.name_prefix {
            Some(prefix) => Ok(scene.name(child)?.starts_with(prefix)),
            None => Ok(false),
        }
    }
}
