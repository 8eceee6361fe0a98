/// Stable numeric identifier of a sorting layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayerId(pub i32);

impl LayerId {
    /// Sentinel returned by layer tables for "no such layer".
    pub const NONE: Self = Self(0);

    /// Returns `true` for the "no such layer" sentinel.
    #[must_use]
    pub fn is_none(self) -> bool {
        self == Self::NONE
    }
}

/// A named sorting layer as listed by the layer table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortingLayer {
    pub name: String,
    pub id: LayerId,
}

impl SortingLayer {
    /// Creates a sorting layer entry.
    #[must_use]
    pub fn new(name: impl Into<String>, id: i32) -> Self {
        Self {
            name: name.into(),
            id: LayerId(id),
        }
    }
}

/// Source of the current, ordered sorting layer table.
pub trait LayerTable {
    /// Returns the layers in table order.
    fn sorting_layers(&self) -> &[SortingLayer];
}

impl LayerTable for [SortingLayer] {
    fn sorting_layers(&self) -> &[SortingLayer] {
        self
    }
}

impl LayerTable for Vec<SortingLayer> {
    fn sorting_layers(&self) -> &[SortingLayer] {
        self
    }
}
