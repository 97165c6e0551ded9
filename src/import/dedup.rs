use std::collections::hash_map::Entry;

use glam::{Vec2, Vec3};
use rustc_hash::FxHashMap;

use super::raw::{RawIndex, RawShape};
use super::ImportError;
use crate::mesh::Mesh;
use crate::util::hash::{vec2_bits, vec3_bits};

/// Identity of an imported vertex: the bit patterns of all its attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct VertexKey {
    position: [u32; 3],
    normal: Option<[u32; 3]>,
    tex_coord: Option<[u32; 2]>,
}

/// A face corner with its attribute values looked up.
#[derive(Debug, Clone, Copy)]
struct ResolvedVertex {
    position: Vec3,
    normal: Option<Vec3>,
    tex_coord: Option<Vec2>,
}

impl ResolvedVertex {
    fn key(&self) -> VertexKey {
        VertexKey {
            position: vec3_bits(self.position),
            normal: self.normal.map(vec3_bits),
            tex_coord: self.tex_coord.map(vec2_bits),
        }
    }
}

/// Which optional attributes every corner of a shape carries.
#[derive(Debug, Clone, Copy)]
struct Layout {
    normals: bool,
    tex_coords: bool,
}

/// Validated, tuple-shaped view of a [`RawShape`]'s attribute arrays.
struct Attributes {
    positions: Vec<Vec3>,
    normals: Vec<Vec3>,
    tex_coords: Vec<Vec2>,
}

impl Attributes {
    fn from_raw(shape: &RawShape) -> Result<Self, ImportError> {
        Ok(Self {
            positions: vec3_tuples(&shape.positions, "position")?,
            normals: vec3_tuples(&shape.normals, "normal")?,
            tex_coords: vec2_tuples(&shape.tex_coords, "texture coordinate")?,
        })
    }

    fn resolve(
        &self,
        corner: RawIndex,
        layout: Layout,
    ) -> Result<ResolvedVertex, ImportError> {
        if corner.normal.is_some() != layout.normals {
            return Err(ImportError::MixedAttributes {
                attribute: "normal",
            });
        }
        if corner.tex_coord.is_some() != layout.tex_coords {
            return Err(ImportError::MixedAttributes {
                attribute: "texture coordinate",
            });
        }

        Ok(ResolvedVertex {
            position: lookup(&self.positions, corner.position, "position")?,
            normal: corner
                .normal
                .map(|i| lookup(&self.normals, i, "normal"))
                .transpose()?,
            tex_coord: corner
                .tex_coord
                .map(|i| lookup(&self.tex_coords, i, "texture coordinate"))
                .transpose()?,
        })
    }
}

fn lookup<T: Copy>(
    values: &[T],
    index: usize,
    attribute: &'static str,
) -> Result<T, ImportError> {
    values
        .get(index)
        .copied()
        .ok_or(ImportError::IndexOutOfRange {
            attribute,
            index,
            count: values.len(),
        })
}

fn vec3_tuples(
    flat: &[f32],
    attribute: &'static str,
) -> Result<Vec<Vec3>, ImportError> {
    if flat.len() % 3 != 0 {
        return Err(ImportError::RaggedAttribute {
            attribute,
            len: flat.len(),
            stride: 3,
        });
    }
    Ok(flat
        .chunks_exact(3)
        .map(|c| Vec3::new(c[0], c[1], c[2]))
        .collect())
}

fn vec2_tuples(
    flat: &[f32],
    attribute: &'static str,
) -> Result<Vec<Vec2>, ImportError> {
    if flat.len() % 2 != 0 {
        return Err(ImportError::RaggedAttribute {
            attribute,
            len: flat.len(),
            stride: 2,
        });
    }
    Ok(flat.chunks_exact(2).map(|c| Vec2::new(c[0], c[1])).collect())
}

fn push_vertex(mesh: &mut Mesh, vertex: &ResolvedVertex) -> u32 {
    let index = mesh.vertex_count() as u32;
    let p = vertex.position;
    mesh.add_vertex_position(p.x, p.y, p.z);
    if let Some(n) = vertex.normal {
        mesh.add_vertex_normal(n.x, n.y, n.z);
    }
    if let Some(t) = vertex.tex_coord {
        mesh.add_vertex_tex_coord(t.x, t.y);
    }
    index
}

/// Build a deduplicated mesh from one parsed shape.
///
/// Corners whose position, normal and texture coordinate are bit-for-bit
/// identical share one vertex; local indices are handed out in order of
/// first appearance, so the same input always yields the same mesh. The
/// first corner decides whether the mesh has normals and texture
/// coordinates, and every other corner must agree.
///
/// # Errors
///
/// Returns [`ImportError`] for ragged attribute arrays, out-of-range
/// indices or corners that disagree on which attributes they carry.
pub fn import_shape(shape: &RawShape) -> Result<Mesh, ImportError> {
    let attributes = Attributes::from_raw(shape)?;
    let mut mesh = Mesh::new();
    mesh.set_material(shape.material.clone());

    let Some(first) = shape.faces.first() else {
        return Ok(mesh);
    };
    let layout = Layout {
        normals: first[0].normal.is_some(),
        tex_coords: first[0].tex_coord.is_some(),
    };

    let mut seen: FxHashMap<VertexKey, u32> = FxHashMap::default();
    for raw_face in &shape.faces {
        let mut face = [0u32; 3];
        for (slot, &corner) in face.iter_mut().zip(raw_face) {
            let vertex = attributes.resolve(corner, layout)?;
            *slot = match seen.entry(vertex.key()) {
                Entry::Occupied(entry) => *entry.get(),
                Entry::Vacant(entry) => {
                    *entry.insert(push_vertex(&mut mesh, &vertex))
                }
            };
        }
        mesh.add_face(face);
    }

    log::debug!(
        "imported shape {:?}: {} corners -> {} vertices, {} faces",
        shape.name.as_deref().unwrap_or("<unnamed>"),
        shape.faces.len() * 3,
        mesh.vertex_count(),
        mesh.face_count()
    );
    Ok(mesh)
}

/// Import every shape into its own mesh, in source order.
///
/// Shapes without faces are skipped.
///
/// # Errors
///
/// Any inconsistent shape fails the whole import; see [`import_shape`].
pub fn import_shapes(shapes: &[RawShape]) -> Result<Vec<Mesh>, ImportError> {
    let mut meshes = Vec::with_capacity(shapes.len());
    for shape in shapes {
        if shape.faces.is_empty() {
            log::warn!(
                "skipping shape {:?} with no faces",
                shape.name.as_deref().unwrap_or("<unnamed>")
            );
            continue;
        }
        meshes.push(import_shape(shape)?);
    }
    Ok(meshes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corner(position: usize, normal: usize) -> RawIndex {
        RawIndex::new(position, None, Some(normal))
    }

    /// Two triangles sharing the edge 1-2, every corner with the same
    /// normal.
    fn shared_edge_shape() -> RawShape {
        RawShape {
            name: Some("quad".to_owned()),
            positions: vec![
                0.0, 0.0, 0.0, //
                1.0, 0.0, 0.0, //
                0.0, 1.0, 0.0, //
                1.0, 1.0, 0.0,
            ],
            normals: vec![0.0, 0.0, 1.0],
            faces: vec![
                [corner(0, 0), corner(1, 0), corner(2, 0)],
                [corner(2, 0), corner(1, 0), corner(3, 0)],
            ],
            ..RawShape::default()
        }
    }

    #[test]
    fn shared_edge_merges_vertices() {
        let mesh = import_shape(&shared_edge_shape()).unwrap();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.face_count(), 2);
        assert_eq!(mesh.faces(), &[[0, 1, 2], [2, 1, 3]]);
        assert_eq!(mesh.normals().len(), 4);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn import_is_deterministic() {
        let shape = shared_edge_shape();
        let a = import_shape(&shape).unwrap();
        let b = import_shape(&shape).unwrap();
        assert_eq!(a.positions(), b.positions());
        assert_eq!(a.faces(), b.faces());
    }

    #[test]
    fn same_position_different_normal_stays_split() {
        let mut shape = shared_edge_shape();
        shape.normals.extend_from_slice(&[0.0, 0.0, -1.0]);
        shape.faces[1] = [corner(2, 1), corner(1, 1), corner(3, 1)];
        let mesh = import_shape(&shape).unwrap();
        assert_eq!(mesh.vertex_count(), 6);
    }

    #[test]
    fn duplicate_values_at_different_indices_merge() {
        let mut shape = shared_edge_shape();
        // Position 4 repeats position 1, normal 1 repeats normal 0.
        shape.positions.extend_from_slice(&[1.0, 0.0, 0.0]);
        shape.normals.extend_from_slice(&[0.0, 0.0, 1.0]);
        shape.faces[1] = [corner(2, 1), corner(4, 1), corner(3, 0)];
        let mesh = import_shape(&shape).unwrap();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.faces()[1], [2, 1, 3]);
    }

    #[test]
    fn tex_coords_are_carried_through() {
        let shape = RawShape {
            positions: vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
            tex_coords: vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0],
            faces: vec![[
                RawIndex::new(0, Some(0), None),
                RawIndex::new(1, Some(1), None),
                RawIndex::new(2, Some(2), None),
            ]],
            ..RawShape::default()
        };
        let mesh = import_shape(&shape).unwrap();
        assert!(!mesh.has_normals());
        assert_eq!(mesh.tex_coords(), &[Vec2::ZERO, Vec2::X, Vec2::Y]);
    }

    #[test]
    fn mixed_normals_are_rejected() {
        let mut shape = shared_edge_shape();
        shape.faces[1][2] = RawIndex::position_only(3);
        assert_eq!(
            import_shape(&shape),
            Err(ImportError::MixedAttributes {
                attribute: "normal"
            })
        );
    }

    #[test]
    fn mixed_tex_coords_are_rejected() {
        let shape = RawShape {
            positions: vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
            tex_coords: vec![0.0, 0.0, 1.0, 0.0],
            faces: vec![[
                RawIndex::new(0, Some(0), None),
                RawIndex::new(1, Some(1), None),
                RawIndex::position_only(2),
            ]],
            ..RawShape::default()
        };
        assert_eq!(
            import_shape(&shape),
            Err(ImportError::MixedAttributes {
                attribute: "texture coordinate"
            })
        );
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let mut shape = shared_edge_shape();
        shape.faces[0][0] = corner(7, 0);
        assert_eq!(
            import_shape(&shape),
            Err(ImportError::IndexOutOfRange {
                attribute: "position",
                index: 7,
                count: 4
            })
        );
    }

    #[test]
    fn ragged_array_is_rejected() {
        let mut shape = shared_edge_shape();
        shape.normals.push(1.0);
        assert!(matches!(
            import_shape(&shape),
            Err(ImportError::RaggedAttribute {
                attribute: "normal",
                stride: 3,
                ..
            })
        ));
    }

    #[test]
    fn one_mesh_per_shape_and_empty_shapes_skipped() {
        let mut textured = shared_edge_shape();
        textured.material = Some("brick.png".to_owned());
        let shapes = vec![shared_edge_shape(), RawShape::default(), textured];
        let meshes = import_shapes(&shapes).unwrap();
        assert_eq!(meshes.len(), 2);
        assert_eq!(meshes[0].material(), None);
        assert_eq!(meshes[1].material(), Some("brick.png"));
    }
}
