use glam::{Vec2, Vec3};

use super::Mesh;

/// The 20 faces of the icosahedron built by [`Mesh::sub_div_sphere`],
/// wound counter-clockwise when seen from outside.
const ICOSAHEDRON_FACES: [[u32; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

/// Icosahedron corners from three orthogonal golden rectangles.
fn icosahedron_vertices() -> [Vec3; 12] {
    let t = (1.0 + 5.0_f32.sqrt()) / 4.0;
    [
        Vec3::new(-0.5, t, 0.0),
        Vec3::new(0.5, t, 0.0),
        Vec3::new(-0.5, -t, 0.0),
        Vec3::new(0.5, -t, 0.0),
        Vec3::new(0.0, -0.5, t),
        Vec3::new(0.0, 0.5, t),
        Vec3::new(0.0, -0.5, -t),
        Vec3::new(0.0, 0.5, -t),
        Vec3::new(t, 0.0, -0.5),
        Vec3::new(t, 0.0, 0.5),
        Vec3::new(-t, 0.0, -0.5),
        Vec3::new(-t, 0.0, 0.5),
    ]
}

impl Mesh {
    /// Geodesic sphere of radius `size`: a unit icosahedron subdivided
    /// `level` times, then scaled. Level 0 is the bare icosahedron.
    ///
    /// The result has `20 * 4^level` faces and `10 * 4^level + 2` vertices.
    #[must_use]
    pub fn sub_div_sphere(size: f32, level: u8) -> Self {
        let mut sphere = Self::new();
        for corner in icosahedron_vertices() {
            let _ = sphere.add_normalized_vertex(corner);
        }
        for face in ICOSAHEDRON_FACES {
            sphere.add_face(face);
        }

        if level > 0 {
            sphere.subdivide(level);
        }
        sphere.scale(size);

        log::debug!(
            "icosphere level {level}: {} vertices, {} faces",
            sphere.vertex_count(),
            sphere.face_count()
        );
        sphere
    }

    /// Square in the XZ plane centred on the origin, `2 * half_extent` wide,
    /// with texture coordinates equal to the XZ position so a repeating
    /// texture tiles once per unit.
    #[must_use]
    pub fn plane(half_extent: f32) -> Self {
        let h = half_extent;
        let mut plane = Self::new();
        plane.add_vertex_positions(&[
            Vec3::new(-h, 0.0, -h),
            Vec3::new(h, 0.0, -h),
            Vec3::new(h, 0.0, h),
            Vec3::new(-h, 0.0, h),
        ]);
        plane.add_vertex_tex_coords(&[
            Vec2::new(-h, -h),
            Vec2::new(h, -h),
            Vec2::new(h, h),
            Vec2::new(-h, h),
        ]);
        plane.add_face([0, 1, 2]);
        plane.add_face([2, 3, 0]);
        plane
    }
}
