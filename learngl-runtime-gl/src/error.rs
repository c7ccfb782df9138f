//! OpenGL renderer errors.
use crate::program::ShaderStage;
use learngl_runtime::image::ImageError;
use std::path::PathBuf;
use thiserror::Error;

/// A GL object could not be created.
#[derive(Error, Debug)]
pub enum GlError {
    #[error("failed to create vertex array: {0}")]
    VertexArray(String),
    #[error("failed to create buffer: {0}")]
    Buffer(String),
    #[error("failed to create texture: {0}")]
    Texture(String),
    #[error("failed to create shader: {0}")]
    Shader(String),
    #[error("failed to create program: {0}")]
    Program(String),
}

/// Errors that can occur while loading a texture.
#[derive(Error, Debug)]
pub enum TextureError {
    #[error("failed to load texture {}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: ImageError,
    },
    #[error("texture object error")]
    Gl(#[from] GlError),
}

/// Errors that can occur while building a shader program.
#[derive(Error, Debug)]
pub enum ProgramError {
    #[error("failed to read shader source {}", .0.display())]
    Io(PathBuf, #[source] std::io::Error),
    #[error("{stage} shader failed to compile: {log}")]
    Compile { stage: ShaderStage, log: String },
    #[error("shader program failed to link: {0}")]
    Link(String),
    #[error("uniform `{0}` was not found in the program")]
    MissingUniform(String),
    #[error("shader object error")]
    Gl(#[from] GlError),
}

/// Cumulative error type for scene construction.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("texture error")]
    Texture(#[from] TextureError),
    #[error("shader program error")]
    Program(#[from] ProgramError),
    #[error("gl object error")]
    Gl(#[from] GlError),
}

/// Result type for scene construction.
pub type Result<T> = std::result::Result<T, SceneError>;
