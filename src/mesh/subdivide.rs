use std::collections::hash_map::Entry;

use rustc_hash::FxHashMap;

use super::Mesh;

impl Mesh {
    /// Split every triangle into four, `levels` times.
    ///
    /// Each edge midpoint is normalized onto the unit sphere and shared by
    /// the two faces adjoining that edge, so one level of an icosahedron
    /// grows from 12 to 42 vertices. Every level multiplies the face count by
    /// exactly four. When the mesh carries normals or texture coordinates,
    /// midpoints get the normalized mean normal and the mean texture
    /// coordinate of their edge.
    ///
    /// # Panics
    ///
    /// If `levels` is zero, if an edge's endpoints are antipodal (the
    /// midpoint cannot be projected onto the sphere), or if an edge's two
    /// normals cancel out.
    pub fn subdivide(&mut self, levels: u8) {
        assert!(levels > 0, "subdivide needs at least one level");

        for _ in 0..levels {
            let faces = self.take_faces();
            let mut midpoints: FxHashMap<(u32, u32), u32> =
                FxHashMap::default();
            let mut new_faces = Vec::with_capacity(faces.len() * 4);

            for [v0, v1, v2] in faces {
                let m01 = self.midpoint(&mut midpoints, v0, v1);
                let m12 = self.midpoint(&mut midpoints, v1, v2);
                let m20 = self.midpoint(&mut midpoints, v2, v0);

                new_faces.push([v0, m01, m20]);
                new_faces.push([m01, v1, m12]);
                new_faces.push([m20, m12, v2]);
                new_faces.push([m01, m12, m20]);
            }

            self.set_faces(new_faces);
        }
    }

    /// Index of the midpoint vertex of edge `a`-`b`, creating it on first
    /// use within the current level.
    fn midpoint(
        &mut self,
        cache: &mut FxHashMap<(u32, u32), u32>,
        a: u32,
        b: u32,
    ) -> u32 {
        let edge = if a < b { (a, b) } else { (b, a) };
        match cache.entry(edge) {
            Entry::Occupied(entry) => *entry.get(),
            Entry::Vacant(entry) => *entry.insert(self.push_midpoint(a, b)),
        }
    }

    fn push_midpoint(&mut self, a: u32, b: u32) -> u32 {
        let (a, b) = (a as usize, b as usize);
        let position = (self.positions()[a] + self.positions()[b]) / 2.0;

        let normal = if self.has_normals() {
            let sum = self.normals()[a] + self.normals()[b];
            assert!(
                sum.length_squared() > 0.0,
                "edge {a}-{b} has opposing normals"
            );
            Some(sum.normalize())
        } else {
            None
        };

        let index = self.add_normalized_vertex(position);
        if let Some(n) = normal {
            self.add_vertex_normal(n.x, n.y, n.z);
        }

        if self.has_tex_coords() {
            let tex_coord = (self.tex_coords()[a] + self.tex_coords()[b]) / 2.0;
            self.push_tex_coord(tex_coord);
        }

        index
    }
}
