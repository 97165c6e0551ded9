use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Search roots for assets and shaders.
///
/// Passed explicitly to loaders instead of being read from process-wide
/// settings. Relative roots are resolved against the working directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Paths", inline)]
#[serde(default)]
pub struct PathOptions {
    /// Root directory for models and textures.
    pub asset_root: PathBuf,
    /// Root directory for shader sources.
    pub shader_root: PathBuf,
}

impl Default for PathOptions {
    fn default() -> Self {
        Self {
            asset_root: PathBuf::from("assets"),
            shader_root: PathBuf::from("src/shaders"),
        }
    }
}

impl PathOptions {
    /// Resolve an asset path. Absolute paths are returned unchanged.
    #[must_use]
    pub fn asset_path(&self, path: impl AsRef<Path>) -> PathBuf {
        resolve(&self.asset_root, path.as_ref())
    }

    /// Resolve a shader file name against the shader root.
    #[must_use]
    pub fn shader_path(&self, path: impl AsRef<Path>) -> PathBuf {
        resolve(&self.shader_root, path.as_ref())
    }
}

fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
