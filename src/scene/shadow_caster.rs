use crate::math::Point3;

use super::LayerId;

/// Shadow caster capability attached to a scene object.
///
/// This is the record the renderer consumes. Its presence on an object also
/// marks the object as baker output for the cleanup sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct ShadowCaster {
    /// Outline on the `z = 0` plane, in path order.
    pub path: Vec<Point3>,
    /// Fingerprint of `path`.
    pub path_hash: i32,
    /// Sorting layers the caster applies to, in precedence order.
    pub applicable_layers: Vec<LayerId>,
    pub self_shadows: bool,
}
