use glam::{Vec2, Vec3};

/// Raw IEEE-754 bit patterns of a [`Vec3`], usable as an exact hash key.
///
/// `0.0` and `-0.0` map to different keys and `NaN` payloads are kept
/// distinct, so two vertices only collide when their floats are identical.
#[inline]
#[must_use]
pub fn vec3_bits(v: Vec3) -> [u32; 3] {
    [v.x.to_bits(), v.y.to_bits(), v.z.to_bits()]
}

/// Raw IEEE-754 bit patterns of a [`Vec2`].
#[inline]
#[must_use]
pub fn vec2_bits(v: Vec2) -> [u32; 2] {
    [v.x.to_bits(), v.y.to_bits()]
}
