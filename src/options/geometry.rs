use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Geometry", inline)]
#[serde(default)]
/// Procedural geometry parameters for the demo scene.
pub struct GeometryOptions {
    /// Icosphere radius.
    #[schemars(title = "Sphere Size", range(min = 0.05, max = 10.0), extend("step" = 0.05))]
    pub sphere_size: f32,
    /// Icosphere subdivision level (0 = plain icosahedron).
    #[schemars(title = "Sphere Detail", range(min = 0, max = 6))]
    pub sphere_level: u8,
    /// Half the edge length of the ground plane.
    #[schemars(skip)]
    pub ground_half_extent: f32,
}

impl Default for GeometryOptions {
    fn default() -> Self {
        Self {
            sphere_size: 0.5,
            sphere_level: 4,
            ground_half_extent: 8.0,
        }
    }
}
