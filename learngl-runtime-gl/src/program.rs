use crate::error::{GlError, ProgramError};
use crate::util;
use glam::Mat4;
use glow::HasContext;
use std::fmt::{Display, Formatter};
use std::path::Path;
use std::sync::Arc;

/// A programmable pipeline stage.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl From<ShaderStage> for u32 {
    fn from(value: ShaderStage) -> Self {
        match value {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        }
    }
}

impl Display for ShaderStage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// A linked vertex + fragment program.
pub struct ShaderProgram {
    context: Arc<glow::Context>,
    program: glow::Program,
}

impl ShaderProgram {
    /// Compile and link a program from GLSL files on disk.
    pub fn from_files(
        context: &Arc<glow::Context>,
        vertex: impl AsRef<Path>,
        fragment: impl AsRef<Path>,
    ) -> Result<Self, ProgramError> {
        let read = |path: &Path| {
            std::fs::read_to_string(path).map_err(|e| ProgramError::Io(path.to_path_buf(), e))
        };

        let vertex = read(vertex.as_ref())?;
        let fragment = read(fragment.as_ref())?;
        Self::from_sources(context, &vertex, &fragment)
    }

    /// Compile and link a program from GLSL source strings.
    pub fn from_sources(
        context: &Arc<glow::Context>,
        vertex: &str,
        fragment: &str,
    ) -> Result<Self, ProgramError> {
        unsafe {
            let vertex = util::gl_compile_shader(context, ShaderStage::Vertex, vertex)?;
            let fragment = match util::gl_compile_shader(context, ShaderStage::Fragment, fragment)
            {
                Ok(fragment) => fragment,
                Err(e) => {
                    context.delete_shader(vertex);
                    return Err(e);
                }
            };

            let program = match context.create_program() {
                Ok(program) => program,
                Err(e) => {
                    context.delete_shader(vertex);
                    context.delete_shader(fragment);
                    return Err(GlError::Program(e).into());
                }
            };

            context.attach_shader(program, vertex);
            context.attach_shader(program, fragment);
            context.link_program(program);

            // the shaders are no longer needed once linked
            context.detach_shader(program, vertex);
            context.detach_shader(program, fragment);
            context.delete_shader(vertex);
            context.delete_shader(fragment);

            if !context.get_program_link_status(program) {
                let log = context.get_program_info_log(program);
                context.delete_program(program);
                return Err(ProgramError::Link(log));
            }

            log::debug!("linked shader program {program:?}");
            Ok(ShaderProgram {
                context: Arc::clone(context),
                program,
            })
        }
    }

    pub fn handle(&self) -> glow::Program {
        self.program
    }

    /// Make this the active program.
    pub fn use_program(&self) {
        unsafe { self.context.use_program(Some(self.program)) }
    }

    pub fn uniform_location(&self, name: &str) -> Option<glow::UniformLocation> {
        unsafe { self.context.get_uniform_location(self.program, name) }
    }

    /// Look up a uniform that the program must expose.
    pub fn require_uniform(&self, name: &str) -> Result<glow::UniformLocation, ProgramError> {
        self.uniform_location(name)
            .ok_or_else(|| ProgramError::MissingUniform(name.to_string()))
    }

    /// Set an `int` (or sampler) uniform by name. The program must be in use.
    ///
    /// Returns `false` if the program has no active uniform with that name.
    pub fn set_int(&self, name: &str, value: i32) -> bool {
        let Some(location) = self.uniform_location(name) else {
            log::warn!("uniform `{name}` is not active in program {:?}", self.program);
            return false;
        };

        unsafe { self.context.uniform_1_i32(Some(&location), value) }
        true
    }

    /// Upload a `mat4` uniform in column-major order. The program must be in use.
    pub fn set_mat4(&self, location: &glow::UniformLocation, matrix: &Mat4) {
        unsafe {
            self.context
                .uniform_matrix_4_f32_slice(Some(location), false, &matrix.to_cols_array())
        }
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        unsafe { self.context.delete_program(self.program) }
    }
}
