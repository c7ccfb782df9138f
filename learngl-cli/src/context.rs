use glfw::{
    Action, Context, Glfw, GlfwReceiver, Key, OpenGlProfileHint, PWindow, WindowEvent, WindowHint,
    WindowMode,
};
use glow::HasContext;
use learngl_runtime::frame::RenderWindow;
use learngl_runtime_gl::validation;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

/// An OpenGL context version, `major.minor`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct GLVersion(pub u32, pub u32);

impl Display for GLVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.0, self.1)
    }
}

#[derive(Error, Debug, Clone, Eq, PartialEq)]
#[error("expected a version of the form MAJOR.MINOR, got `{0}`")]
pub struct ParseVersionError(String);

impl FromStr for GLVersion {
    type Err = ParseVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseVersionError(s.to_string());
        let (major, minor) = s.split_once('.').ok_or_else(err)?;
        let major = major.trim().parse().map_err(|_| err())?;
        let minor = minor.trim().parse().map_err(|_| err())?;
        Ok(GLVersion(major, minor))
    }
}

/// Window and context creation options.
#[derive(Debug, Clone)]
pub struct ContextOptions {
    pub version: GLVersion,
    pub width: u32,
    pub height: u32,
    pub title: String,
    /// Request a debug context and forward driver messages to the log.
    pub validate: bool,
}

impl Default for ContextOptions {
    fn default() -> Self {
        ContextOptions {
            version: GLVersion(3, 3),
            width: 800,
            height: 600,
            title: String::from("LearnOpenGL"),
            validate: false,
        }
    }
}

/// Fatal errors while bringing up the window and GL context.
#[derive(Error, Debug)]
pub enum ContextError {
    #[error("failed to initialize GLFW")]
    Init(#[from] glfw::InitError),
    #[error("failed to create a window with an OpenGL {0} core context")]
    WindowCreation(GLVersion),
    #[error("failed to load OpenGL function pointers")]
    Loader,
}

/// A glfw window with a current OpenGL core context.
pub struct GlfwContext {
    pub gl: Arc<glow::Context>,
    events: GlfwReceiver<(f64, WindowEvent)>,
    wnd: PWindow,
    glfw: Glfw,
}

impl GlfwContext {
    pub fn new(options: &ContextOptions) -> Result<Self, ContextError> {
        let mut glfw = glfw::init(|err: glfw::Error, description: String| {
            log::error!("[glfw] {err:?}: {description}")
        })?;

        let GLVersion(major, minor) = options.version;
        glfw.window_hint(WindowHint::ContextVersion(major, minor));
        glfw.window_hint(WindowHint::OpenGlProfile(OpenGlProfileHint::Core));
        glfw.window_hint(WindowHint::OpenGlForwardCompat(true));
        glfw.window_hint(WindowHint::OpenGlDebugContext(options.validate));

        let (mut wnd, events) = glfw
            .create_window(
                options.width,
                options.height,
                &options.title,
                WindowMode::Windowed,
            )
            .ok_or(ContextError::WindowCreation(options.version))?;

        wnd.make_current();
        wnd.set_framebuffer_size_polling(true);

        if wnd.get_proc_address("glGetString").is_null() {
            return Err(ContextError::Loader);
        }

        let mut gl =
            unsafe { glow::Context::from_loader_function(|proc| wnd.get_proc_address(proc) as _) };

        if options.validate {
            validation::install_debug_callback(&mut gl);
        }

        unsafe {
            log::info!(
                "created OpenGL {} context on {}",
                gl.get_parameter_string(glow::VERSION),
                gl.get_parameter_string(glow::RENDERER)
            );

            let (width, height) = wnd.get_framebuffer_size();
            gl.viewport(0, 0, width, height);
        }

        Ok(Self {
            gl: Arc::new(gl),
            events,
            wnd,
            glfw,
        })
    }

    fn resize(&self, width: i32, height: i32) {
        log::debug!("framebuffer resized to {width}x{height}");
        unsafe { self.gl.viewport(0, 0, width, height) }
    }
}

impl RenderWindow for GlfwContext {
    fn should_close(&self) -> bool {
        self.wnd.should_close()
    }

    fn exit_requested(&self) -> bool {
        self.wnd.get_key(Key::Escape) == Action::Press
    }

    fn request_close(&mut self) {
        self.wnd.set_should_close(true)
    }

    fn elapsed_seconds(&self) -> f64 {
        self.glfw.get_time()
    }

    fn present(&mut self) {
        self.wnd.swap_buffers();
    }

    fn poll_events(&mut self) {
        self.glfw.poll_events();
        for (_, event) in glfw::flush_messages(&self.events) {
            if let WindowEvent::FramebufferSize(width, height) = event {
                self.resize(width, height);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_round_trips_through_display() {
        let version: GLVersion = "3.3".parse().unwrap();
        assert_eq!(version, GLVersion(3, 3));
        assert_eq!(version.to_string(), "3.3");
        assert_eq!("4.6".parse(), Ok(GLVersion(4, 6)));
    }

    #[test]
    fn malformed_versions_are_rejected() {
        for input in ["3", "three.three", "3.", ".3", ""] {
            assert!(input.parse::<GLVersion>().is_err(), "{input}");
        }
    }
}
