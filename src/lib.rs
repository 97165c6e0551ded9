// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code (geometric preconditions use `assert!`)
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! First-person camera math and an indexed triangle-mesh builder for a
//! small real-time 3D viewport.
//!
//! The crate is the renderer-independent core of the viewport: it turns
//! input deltas into a view matrix and raw geometry (procedural spheres or
//! parsed Wavefront OBJ data) into compact, deduplicated meshes. Buffer
//! upload, shaders and windowing belong to the host application.
//!
//! # Key entry points
//!
//! - [`camera::Camera`] - yaw/pitch camera with a cached view matrix
//! - [`camera::CameraController`] - per-tick input to camera mutations
//! - [`mesh::Mesh`] - append-only mesh builder with midpoint subdivision
//!   and the [`mesh::Mesh::sub_div_sphere`] icosphere generator
//! - [`import`] - bit-exact vertex deduplication for parsed OBJ shapes
//! - [`scene::Scene`] - render objects composed from meshes and transforms
//! - [`options::Options`] - TOML-backed configuration (camera, paths,
//!   geometry, key bindings)
//!
//! # Example
//!
//! ```
//! use glam::Vec3;
//! use meshcam::camera::Camera;
//! use meshcam::mesh::Mesh;
//!
//! let mut camera = Camera::new(Vec3::new(1.0, 1.0, 0.5));
//! camera.change_yaw(15.0);
//! camera.move_forward(0.25);
//! let _view = camera.view();
//!
//! let sphere = Mesh::sub_div_sphere(2.0, 1);
//! assert_eq!(sphere.face_count(), 80);
//! ```

pub mod camera;
pub mod error;
pub mod import;
pub mod input;
pub mod mesh;
pub mod options;
pub mod scene;
pub mod util;

pub use error::MeshcamError;
