use crate::error::{GlError, ProgramError};
use crate::program::ShaderStage;
use glow::HasContext;

pub unsafe fn gl_compile_shader(
    context: &glow::Context,
    stage: ShaderStage,
    source: &str,
) -> Result<glow::Shader, ProgramError> {
    unsafe {
        let shader = context
            .create_shader(stage.into())
            .map_err(GlError::Shader)?;

        context.shader_source(shader, source);
        context.compile_shader(shader);

        if !context.get_shader_compile_status(shader) {
            let log = context.get_shader_info_log(shader);
            context.delete_shader(shader);
            return Err(ProgramError::Compile { stage, log });
        }

        Ok(shader)
    }
}

/// Run `f` with `GL_UNPACK_ALIGNMENT` set to `alignment`, restoring the previous value after.
pub unsafe fn with_unpack_alignment<T>(
    context: &glow::Context,
    alignment: i32,
    f: impl FnOnce() -> T,
) -> T {
    unsafe {
        let previous = context.get_parameter_i32(glow::UNPACK_ALIGNMENT);
        context.pixel_store_i32(glow::UNPACK_ALIGNMENT, alignment);
        let result = f();
        context.pixel_store_i32(glow::UNPACK_ALIGNMENT, previous);
        result
    }
}
