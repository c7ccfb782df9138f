//! Optional runtime checking of GL errors.
use glow::HasContext;

/// A human readable name for a `glGetError` code.
pub fn error_name(code: u32) -> &'static str {
    match code {
        glow::INVALID_ENUM => "GL_INVALID_ENUM",
        glow::INVALID_VALUE => "GL_INVALID_VALUE",
        glow::INVALID_OPERATION => "GL_INVALID_OPERATION",
        glow::INVALID_FRAMEBUFFER_OPERATION => "GL_INVALID_FRAMEBUFFER_OPERATION",
        glow::OUT_OF_MEMORY => "GL_OUT_OF_MEMORY",
        glow::STACK_UNDERFLOW => "GL_STACK_UNDERFLOW",
        glow::STACK_OVERFLOW => "GL_STACK_OVERFLOW",
        _ => "unknown GL error",
    }
}

/// Drain every pending GL error, logging each one. Returns how many were found.
pub fn drain_errors(context: &glow::Context, frame_count: usize) -> usize {
    let mut found = 0;
    loop {
        let code = unsafe { context.get_error() };
        if code == glow::NO_ERROR {
            break;
        }

        log::warn!(
            "frame {frame_count}: {} (0x{code:04x})",
            error_name(code)
        );
        found += 1;

        // a lost context reports errors forever
        if found >= 32 {
            break;
        }
    }
    found
}

fn debug_callback(_source: u32, _err_type: u32, id: u32, severity: u32, message: &str) {
    match severity {
        glow::DEBUG_SEVERITY_HIGH => log::error!("[gl {id}] {message}"),
        glow::DEBUG_SEVERITY_MEDIUM => log::warn!("[gl {id}] {message}"),
        glow::DEBUG_SEVERITY_LOW => log::info!("[gl {id}] {message}"),
        _ => log::trace!("[gl {id}] {message}"),
    }
}

/// Forward driver debug messages to `log`, if the context supports `KHR_debug`.
///
/// Returns whether the callback was installed.
pub fn install_debug_callback(context: &mut glow::Context) -> bool {
    if !context.supports_debug() {
        log::info!("GL debug output is not supported by this context");
        return false;
    }

    unsafe {
        context.enable(glow::DEBUG_OUTPUT);
        context.enable(glow::DEBUG_OUTPUT_SYNCHRONOUS);
        context.debug_message_callback(debug_callback);
        context.debug_message_control(glow::DONT_CARE, glow::DONT_CARE, glow::DONT_CARE, &[], true);
    }
    true
}
