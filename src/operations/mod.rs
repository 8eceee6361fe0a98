mod bake;
mod bake_all;
mod cleanup;
mod extract_paths;
mod resolve_layers;
mod shape_hash;

pub use bake::{BakeOutcome, BakeReport, BakeShadowCasters, BakedShape};
pub use bake_all::{BakeAll, BakeAllSummary};
pub use cleanup::CleanupGenerated;
pub use extract_paths::{collect_polygons, ExtractPaths};
pub use resolve_layers::ResolveLayers;
pub use shape_hash::{float_hash, path_hash, HASH_FACTOR, HASH_SEED};
