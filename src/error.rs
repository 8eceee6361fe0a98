use thiserror::Error;

/// Top-level error type for shadow caster baking.
#[derive(Debug, Error)]
pub enum BakeError {
    #[error(transparent)]
    Scene(#[from] SceneError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised by the scene collaborator while creating, editing or
/// destroying objects.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("object not found: {0}")]
    ObjectNotFound(String),

    #[error("scene rejected operation: {0}")]
    Rejected(String),
}

/// Errors related to collider geometry.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("polygon has {len} points, at least {min} required")]
    TooFewPoints { len: usize, min: usize },
}

/// Errors related to bake configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid bake configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Convenience type alias for results using [`BakeError`].
pub type Result<T> = std::result::Result<T, BakeError>;
