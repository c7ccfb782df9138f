//! OpenGL renderers for the learngl demos, built on [glow](https://docs.rs/glow).
//!
//! Every GPU object is owned by a wrapper that deletes it on drop, so a scene that
//! fails halfway through construction only releases what it created.

mod error;
mod options;
mod program;
mod texture;
mod util;
mod vertex_array;

pub mod scene;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_context;

pub use error::{GlError, ProgramError, Result, SceneError, TextureError};
pub use options::{SceneOptions, TextureOptions};
pub use program::{ShaderProgram, ShaderStage};
pub use texture::Texture;
pub use vertex_array::VertexArray;
