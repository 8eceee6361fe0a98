pub mod config;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod scene;

pub use config::BakeConfig;
pub use error::{BakeError, Result};
