use crate::scene::{LayerId, LayerTable, SortingLayer};

/// Resolves up to two sorting layer names into layer IDs.
///
/// The first name is resolved before the second and the output keeps that
/// order. Empty names, unknown names and the sentinel ID resolve to nothing;
/// a second ID equal to the first is dropped.
pub struct ResolveLayers<'a> {
    layer_a: &'a str,
    layer_b: &'a str,
}

impl<'a> ResolveLayers<'a> {
    /// Creates a new `ResolveLayers` query.
    #[must_use]
    pub fn new(layer_a: &'a str, layer_b: &'a str) -> Self {
        Self { layer_a, layer_b }
    }

    /// Executes the query against the current layer table.
    #[must_use]
    pub fn execute<T: LayerTable + ?Sized>(&self, table: &T) -> Vec<LayerId> {
        let layers = table.sorting_layers();
        let mut ids = Vec::with_capacity(2);
        for name in [self.layer_a, self.layer_b] {
            if let Some(id) = find_layer(layers, name) {
                if !ids.contains(&id) {
                    ids.push(id);
                }
            }
        }
        ids
    }
}

/// Returns the ID of the first layer named `name`, skipping the sentinel.
fn find_layer(layers: &[SortingLayer], name: &str) -> Option<LayerId> {
    if name.is_empty() {
        return None;
    }
    layers
        .iter()
        .find(|layer| layer.name == name)
        .map(|layer| layer.id)
        .filter(|id| !id.is_none())
}
