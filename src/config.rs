use serde::Deserialize;

use crate::error::{ConfigError, Result};

/// Default name prefix for generated shadow caster objects.
pub const DEFAULT_NAME_PREFIX: &str = "ShadowCaster2D_";

/// Per-host bake settings.
///
/// Supplied once per bake and never changed while the bake runs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BakeConfig {
    /// Whether generated casters also shadow their own sprite.
    pub self_shadows: bool,
    /// First sorting layer the casters apply to.
    pub layer_a: String,
    /// Second sorting layer the casters apply to.
    pub layer_b: String,
    /// Name prefix for generated child objects; the index is appended.
    pub name_prefix: String,
    /// Exclude generated objects from runtime builds.
    pub editor_only: bool,
    /// Also sweep children whose name starts with `name_prefix`.
    ///
    /// Only needed for output baked before generated objects were marked.
    pub sweep_by_prefix: bool,
}

impl Default for BakeConfig {
    fn default() -> Self {
        Self {
            self_shadows: false,
            layer_a: "Default".into(),
            layer_b: String::new(),
            name_prefix: DEFAULT_NAME_PREFIX.into(),
            editor_only: true,
            sweep_by_prefix: false,
        }
    }
}

impl BakeConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the input is not valid JSON for this type.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e).into())
    }

    /// Sets the self-shadow flag.
    #[must_use]
    pub fn with_self_shadows(mut self, self_shadows: bool) -> Self {
        self.self_shadows = self_shadows;
        self
    }

    /// Sets both sorting layer names.
    #[must_use]
    pub fn with_layers(mut self, layer_a: impl Into<String>, layer_b: impl Into<String>) -> Self {
        self.layer_a = layer_a.into();
        self.layer_b = layer_b.into();
        self
    }

    /// Sets the generated object name prefix.
    #[must_use]
    pub fn with_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.name_prefix = prefix.into();
        self
    }

    /// Sets whether generated objects are excluded from runtime builds.
    #[must_use]
    pub fn with_editor_only(mut self, editor_only: bool) -> Self {
        self.editor_only = editor_only;
        self
    }

    /// Sets whether the cleanup sweep also matches by name prefix.
    #[must_use]
    pub fn with_sweep_by_prefix(mut self, sweep_by_prefix: bool) -> Self {
        self.sweep_by_prefix = sweep_by_prefix;
        self
    }

    /// Returns the output name for the shape at `index`.
    #[must_use]
    pub fn output_name(&self, index: usize) -> String {
        format!("{}{index}", self.name_prefix)
    }
}
