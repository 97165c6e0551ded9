use std::path::Path;

use rustc_hash::FxHashMap;
use wavefront_obj::mtl;
use wavefront_obj::obj::{self, ObjSet, Object, Primitive};

use super::raw::{RawIndex, RawShape};
use super::{import_shapes, ImportError};
use crate::error::MeshcamError;
use crate::mesh::Mesh;
use crate::options::PathOptions;

/// Parse OBJ text into one [`RawShape`] per (object, material group).
///
/// Polygons arrive already triangulated by the parser; point and line
/// elements are dropped with a warning.
///
/// # Errors
///
/// Returns [`MeshcamError::ObjParse`] with the parser's line number.
pub fn parse_obj(source: &str) -> Result<Vec<RawShape>, MeshcamError> {
    Ok(raw_shapes(&parse_set(source)?))
}

fn parse_set(source: &str) -> Result<ObjSet, MeshcamError> {
    obj::parse(source).map_err(|e| MeshcamError::ObjParse {
        line: e.line_number,
        message: e.message,
    })
}

/// Diffuse texture map of each material, keyed by material name.
pub type DiffuseMaps = FxHashMap<String, Option<String>>;

/// Parse MTL text into each material's diffuse map (`map_Kd`).
///
/// # Errors
///
/// Returns [`MeshcamError::MtlParse`] with the parser's line number.
pub fn parse_mtl(source: &str) -> Result<DiffuseMaps, MeshcamError> {
    let set = mtl::parse(source).map_err(|e| MeshcamError::MtlParse {
        line: e.line_number,
        message: e.message,
    })?;
    Ok(set
        .materials
        .into_iter()
        .map(|m| (m.name, m.diffuse_map))
        .collect())
}

/// Replace each shape's material name with its diffuse map, joined onto
/// `dir` (the OBJ's directory, relative to the asset root).
///
/// Materials without a map, and names the library does not define, leave
/// the shape untextured.
pub fn apply_diffuse_maps(
    shapes: &mut [RawShape],
    maps: &DiffuseMaps,
    dir: &Path,
) {
    for shape in shapes {
        let Some(name) = shape.material.take() else {
            continue;
        };
        match maps.get(&name) {
            Some(Some(map)) => {
                shape.material =
                    Some(dir.join(map).to_string_lossy().into_owned());
            }
            Some(None) => {}
            None => log::warn!("material '{name}' is not in the library"),
        }
    }
}

/// Read the material library next to the OBJ. A missing library is not
/// fatal: the model loads untextured.
fn load_diffuse_maps(
    library: &Path,
    paths: &PathOptions,
) -> Result<DiffuseMaps, MeshcamError> {
    let resolved = paths.asset_path(library);
    match std::fs::read_to_string(&resolved) {
        Ok(source) => parse_mtl(&source),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::warn!("material library {} not found", resolved.display());
            Ok(DiffuseMaps::default())
        }
        Err(e) => Err(e.into()),
    }
}

fn raw_shapes(set: &ObjSet) -> Vec<RawShape> {
    let mut shapes = Vec::new();
    for object in &set.objects {
        let positions = flatten_positions(object);
        let normals: Vec<f32> = object
            .normals
            .iter()
            .flat_map(|n| [n.x as f32, n.y as f32, n.z as f32])
            .collect();
        let tex_coords: Vec<f32> = object
            .tex_vertices
            .iter()
            .flat_map(|t| [t.u as f32, t.v as f32])
            .collect();

        for geometry in &object.geometry {
            let mut skipped = 0usize;
            let faces: Vec<[RawIndex; 3]> = geometry
                .shapes
                .iter()
                .filter_map(|shape| match &shape.primitive {
                    Primitive::Triangle(a, b, c) => {
                        Some([raw_index(*a), raw_index(*b), raw_index(*c)])
                    }
                    Primitive::Point(_) | Primitive::Line(..) => {
                        skipped += 1;
                        None
                    }
                })
                .collect();
            if skipped > 0 {
                log::warn!(
                    "object '{}': ignored {skipped} point/line elements",
                    object.name
                );
            }
            if faces.is_empty() {
                continue;
            }

            shapes.push(RawShape {
                name: Some(object.name.clone()),
                material: geometry.material_name.clone(),
                positions: positions.clone(),
                normals: normals.clone(),
                tex_coords: tex_coords.clone(),
                faces,
            });
        }
    }
    shapes
}

fn flatten_positions(object: &Object) -> Vec<f32> {
    object
        .vertices
        .iter()
        .flat_map(|v| [v.x as f32, v.y as f32, v.z as f32])
        .collect()
}

fn raw_index(
    (position, tex_coord, normal): (usize, Option<usize>, Option<usize>),
) -> RawIndex {
    RawIndex::new(position, tex_coord, normal)
}

/// Read, parse and import an OBJ file: one mesh per object/material group.
///
/// Relative paths are resolved against the asset root. Each mesh's material
/// becomes the diffuse map its `usemtl` names in the `mtllib`, relative to
/// the asset root, or `None` when there is no such map. A file that yields
/// no triangles is an error.
///
/// # Errors
///
/// Returns [`MeshcamError`] if the file cannot be read or parsed, if its
/// data is inconsistent, or if it holds no triangles.
pub fn load_obj(
    path: &Path,
    paths: &PathOptions,
) -> Result<Vec<Mesh>, MeshcamError> {
    let start = web_time::Instant::now();
    let resolved = paths.asset_path(path);

    let source = std::fs::read_to_string(&resolved)?;
    let set = parse_set(&source)?;
    let mut shapes = raw_shapes(&set);

    let dir = path.parent().unwrap_or_else(|| Path::new(""));
    let maps = match &set.material_library {
        Some(library) => load_diffuse_maps(&dir.join(library), paths)?,
        None => DiffuseMaps::default(),
    };
    apply_diffuse_maps(&mut shapes, &maps, dir);

    let meshes = import_shapes(&shapes)?;
    if meshes.is_empty() {
        return Err(ImportError::NoMeshes.into());
    }

    let vertex_count: usize = meshes.iter().map(Mesh::vertex_count).sum();
    let face_count: usize = meshes.iter().map(Mesh::face_count).sum();
    log::info!(
        "Loaded {} meshes with {vertex_count} vertices and {face_count} \
         faces from {}",
        meshes.len(),
        resolved.display()
    );
    log::info!("Loading time: {} ms", start.elapsed().as_millis());
    Ok(meshes)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    const CUBE_FACE: &str = "\
o Panel
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
vn 0 0 1
vt 0 0
vt 1 0
vt 1 1
vt 0 1
usemtl brick
f 1/1/1 2/2/1 3/3/1
f 1/1/1 3/3/1 4/4/1
";

    #[test]
    fn parses_and_dedups_a_quad() {
        let shapes = parse_obj(CUBE_FACE).unwrap();
        assert_eq!(shapes.len(), 1);
        assert_eq!(shapes[0].name.as_deref(), Some("Panel"));
        assert_eq!(shapes[0].material.as_deref(), Some("brick"));

        let meshes = import_shapes(&shapes).unwrap();
        assert_eq!(meshes[0].vertex_count(), 4);
        assert_eq!(meshes[0].face_count(), 2);
        assert!(meshes[0].has_normals());
        assert!(meshes[0].has_tex_coords());
    }

    #[test]
    fn parse_errors_carry_a_line() {
        let err = parse_obj("v 0 0 0\nf 1 x 3\n").unwrap_err();
        assert!(matches!(err, MeshcamError::ObjParse { .. }));
    }

    #[test]
    fn load_resolves_against_asset_root() {
        let root = std::env::temp_dir()
            .join(format!("meshcam-assets-{}", std::process::id()));
        std::fs::create_dir_all(&root).unwrap();
        std::fs::write(root.join("panel.obj"), CUBE_FACE).unwrap();
        let paths = PathOptions {
            asset_root: root.clone(),
            ..PathOptions::default()
        };

        let meshes = load_obj(Path::new("panel.obj"), &paths).unwrap();
        assert_eq!(meshes.len(), 1);
        assert_eq!(meshes[0].face_count(), 2);
        std::fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn missing_file_is_io_error() {
        let paths = PathOptions::default();
        let err =
            load_obj(Path::new("does/not/exist.obj"), &paths).unwrap_err();
        assert!(matches!(err, MeshcamError::Io(_)));
    }

    const MATERIALS: &str = "\
newmtl brick
Ns 10.0
Ka 0.0 0.0 0.0
Kd 0.8 0.8 0.8
Ks 0.0 0.0 0.0
d 1.0
illum 1
map_Kd brick.png

newmtl plain
Ns 10.0
Ka 0.0 0.0 0.0
Kd 0.5 0.5 0.5
Ks 0.0 0.0 0.0
d 1.0
illum 1
";

    fn temp_root(name: &str) -> PathBuf {
        let root = std::env::temp_dir()
            .join(format!("meshcam-{name}-{}", std::process::id()));
        std::fs::create_dir_all(&root).unwrap();
        root
    }

    #[test]
    fn materials_resolve_to_diffuse_maps() {
        let maps = parse_mtl(MATERIALS).unwrap();
        assert_eq!(maps.len(), 2);
        assert_eq!(maps["brick"].as_deref(), Some("brick.png"));
        assert_eq!(maps["plain"], None);

        let mut shapes = parse_obj(CUBE_FACE).unwrap();
        let mut plain = shapes[0].clone();
        plain.material = Some("plain".to_owned());
        let mut unknown = shapes[0].clone();
        unknown.material = Some("marble".to_owned());
        shapes.extend([plain, unknown]);

        apply_diffuse_maps(&mut shapes, &maps, Path::new("models"));
        assert_eq!(shapes[0].material.as_deref(), Some("models/brick.png"));
        assert_eq!(shapes[1].material, None);
        assert_eq!(shapes[2].material, None);
    }

    #[test]
    fn mtl_errors_carry_a_line() {
        let err = parse_mtl("newmtl broken\nNs ten\n").unwrap_err();
        assert!(matches!(err, MeshcamError::MtlParse { .. }));
    }

    #[test]
    fn load_textures_from_the_material_library() {
        let root = temp_root("mtl");
        std::fs::create_dir_all(root.join("models")).unwrap();
        std::fs::write(
            root.join("models/panel.obj"),
            format!("mtllib panel.mtl\n{CUBE_FACE}"),
        )
        .unwrap();
        std::fs::write(root.join("models/panel.mtl"), MATERIALS).unwrap();
        let paths = PathOptions {
            asset_root: root.clone(),
            ..PathOptions::default()
        };

        let meshes = load_obj(Path::new("models/panel.obj"), &paths).unwrap();
        assert_eq!(meshes[0].material(), Some("models/brick.png"));
        std::fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn missing_library_loads_untextured() {
        let root = temp_root("no-mtl");
        std::fs::write(
            root.join("panel.obj"),
            format!("mtllib gone.mtl\n{CUBE_FACE}"),
        )
        .unwrap();
        let paths = PathOptions {
            asset_root: root.clone(),
            ..PathOptions::default()
        };

        let meshes = load_obj(Path::new("panel.obj"), &paths).unwrap();
        assert_eq!(meshes[0].material(), None);
        std::fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn vertices_only_file_is_an_import_error() {
        let root = temp_root("empty");
        std::fs::write(root.join("empty.obj"), "o Empty\nv 0 0 0\nv 1 0 0\n")
            .unwrap();
        let paths = PathOptions {
            asset_root: root.clone(),
            ..PathOptions::default()
        };

        let err = load_obj(Path::new("empty.obj"), &paths).unwrap_err();
        assert!(matches!(err, MeshcamError::Import(ImportError::NoMeshes)));
        std::fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn objects_import_separately_and_quads_split() {
        let source = "\
o Quad
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
f 1 2 3 4
o Tri
v 5 0 0
v 6 0 0
v 5 1 0
f 5 6 7
";
        let shapes = parse_obj(source).unwrap();
        assert_eq!(shapes.len(), 2);
        let meshes = import_shapes(&shapes).unwrap();
        assert_eq!(meshes[0].vertex_count(), 4);
        assert_eq!(meshes[0].face_count(), 2);
        assert_eq!(meshes[1].vertex_count(), 3);
        assert_eq!(meshes[1].faces(), &[[0, 1, 2]]);
        assert_eq!(meshes[1].positions()[0], glam::Vec3::new(5.0, 0.0, 0.0));
    }

    #[test]
    fn vertices_without_faces_yield_no_shapes() {
        let shapes = parse_obj("o Empty\nv 0 0 0\nv 1 0 0\n").unwrap();
        assert!(shapes.is_empty());
    }
}
