/// One corner of a parsed face: independent indices into a shape's
/// position, texture-coordinate and normal arrays (0-based, in tuples).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawIndex {
    /// Index into the position tuples.
    pub position: usize,
    /// Index into the texture-coordinate tuples, if the corner has one.
    pub tex_coord: Option<usize>,
    /// Index into the normal tuples, if the corner has one.
    pub normal: Option<usize>,
}

impl RawIndex {
    /// Corner with only a position.
    #[must_use]
    pub const fn position_only(position: usize) -> Self {
        Self {
            position,
            tex_coord: None,
            normal: None,
        }
    }

    /// Corner with every attribute index given explicitly.
    #[must_use]
    pub const fn new(
        position: usize,
        tex_coord: Option<usize>,
        normal: Option<usize>,
    ) -> Self {
        Self {
            position,
            tex_coord,
            normal,
        }
    }
}

/// Geometry of one parsed shape, exactly as the parser produced it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawShape {
    /// Object name from the source file.
    pub name: Option<String>,
    /// Material name the shape's faces use.
    pub material: Option<String>,
    /// Flat `x y z` positions.
    pub positions: Vec<f32>,
    /// Flat `x y z` normals.
    pub normals: Vec<f32>,
    /// Flat `u v` texture coordinates.
    pub tex_coords: Vec<f32>,
    /// Triangles.
    pub faces: Vec<[RawIndex; 3]>,
}
