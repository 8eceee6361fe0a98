use tracing::info;

use crate::error::Result;
use crate::scene::{LayerTable, Scene};

use super::BakeShadowCasters;

/// Totals for a bulk bake.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BakeAllSummary {
    /// Hosts visited.
    pub hosts: usize,
    /// Hosts that produced at least one shape.
    pub baked_hosts: usize,
    /// Shapes created across all hosts.
    pub shapes: usize,
}

/// Bakes every host in the scene that carries a bake configuration.
///
/// Hosts are baked one at a time in scene order, each with its own
/// configuration. The first error stops the run; hosts already baked keep
/// their output.
#[derive(Debug, Default)]
pub struct BakeAll;

impl BakeAll {
    /// Creates a new `BakeAll` operation.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the bulk bake.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a host bake.
    pub fn execute<S: Scene + LayerTable + ?Sized>(&self, scene: &mut S) -> Result<BakeAllSummary> {
        let mut summary = BakeAllSummary::default();
        for host in scene.bake_hosts() {
            let Some(config) = scene.bake_config(host)?.cloned() else {
                continue;
            };
            let outcome = BakeShadowCasters::new(host, &config).execute(scene)?;
            summary.hosts += 1;
            if outcome.shape_count() > 0 {
                summary.baked_hosts += 1;
            }
            summary.shapes += outcome.shape_count();
        }
        info!(
            hosts = summary.hosts,
            baked = summary.baked_hosts,
            shapes = summary.shapes,
            "bulk bake finished"
        );
        Ok(summary)
    }
}
