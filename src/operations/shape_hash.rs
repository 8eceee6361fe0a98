use crate::math::Point3;

/// Initial accumulator value.
pub const HASH_SEED: i32 = 17;

/// Multiplier applied before each coordinate is mixed in.
pub const HASH_FACTOR: i32 = 31;

/// Canonical bit pattern every NaN hashes to.
const NAN_HASH: i32 = 0x7F80_0000;

/// Computes the fingerprint of a caster path.
///
/// Every coordinate of every point is folded into the accumulator in path
/// order with wrapping `i32` arithmetic, so the result depends on point order
/// and is identical across runs for identical input.
#[must_use]
pub fn path_hash(points: &[Point3]) -> i32 {
    points.iter().fold(HASH_SEED, |acc, p| {
        let acc = mix(acc, p.x);
        let acc = mix(acc, p.y);
        mix(acc, p.z)
    })
}

/// Hashes an `f32` by its IEEE-754 bit pattern.
///
/// `+0.0` and `-0.0` both hash to `0`, and every NaN hashes to the same
/// value, so values that compare equal hash equal.
#[must_use]
pub fn float_hash(value: f32) -> i32 {
    let bits = value.to_bits();
    if bits & 0x7FFF_FFFF == 0 {
        0
    } else if value.is_nan() {
        NAN_HASH
    } else {
        i32::from_ne_bytes(bits.to_ne_bytes())
    }
}

fn mix(acc: i32, value: f32) -> i32 {
    acc.wrapping_mul(HASH_FACTOR).wrapping_add(float_hash(value))
}
