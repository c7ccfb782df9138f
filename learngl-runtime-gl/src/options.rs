use learngl_common::{ClearColor, FilterMode, WrapMode};
use std::path::PathBuf;

/// Options for building a scene.
#[derive(Debug, Clone)]
pub struct SceneOptions {
    /// Directory that shader and image paths are resolved against.
    pub assets: PathBuf,
    /// Drain `glGetError` after every frame and log what was found.
    pub validate: bool,
    pub clear_color: ClearColor,
}

impl Default for SceneOptions {
    fn default() -> Self {
        SceneOptions {
            assets: PathBuf::from("."),
            validate: false,
            clear_color: ClearColor::default(),
        }
    }
}

/// Sampling state baked into a texture at creation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TextureOptions {
    pub wrap_mode: WrapMode,
    pub filter: FilterMode,
    pub mipmap: bool,
}

impl Default for TextureOptions {
    fn default() -> Self {
        TextureOptions {
            wrap_mode: WrapMode::Repeat,
            filter: FilterMode::Linear,
            mipmap: true,
        }
    }
}
