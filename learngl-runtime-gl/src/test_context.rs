use glfw::{Context, Glfw, OpenGlProfileHint, PWindow, WindowHint, WindowMode};
use std::sync::{Arc, Mutex, MutexGuard};

// glfw must not be initialized from two test threads at once
static GLFW_LOCK: Mutex<()> = Mutex::new(());

/// A hidden 3.3 core window for tests that need a live GL context.
pub struct TestContext {
    pub gl: Arc<glow::Context>,
    _window: PWindow,
    _glfw: Glfw,
    _guard: MutexGuard<'static, ()>,
}

impl TestContext {
    /// Returns `None` when no display or no 3.3 core context is available, so the
    /// calling test can skip itself on headless machines.
    pub fn new() -> Option<Self> {
        let guard = GLFW_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        let mut glfw = match glfw::init(|err: glfw::Error, description: String| {
            eprintln!("[glfw] {err:?}: {description}")
        }) {
            Ok(glfw) => glfw,
            Err(e) => {
                eprintln!("skipping: glfw unavailable ({e:?})");
                return None;
            }
        };

        glfw.window_hint(WindowHint::ContextVersion(3, 3));
        glfw.window_hint(WindowHint::OpenGlProfile(OpenGlProfileHint::Core));
        glfw.window_hint(WindowHint::OpenGlForwardCompat(true));
        glfw.window_hint(WindowHint::Visible(false));

        let Some((mut window, _events)) =
            glfw.create_window(64, 64, env!("CARGO_PKG_NAME"), WindowMode::Windowed)
        else {
            eprintln!("skipping: no 3.3 core context");
            return None;
        };

        window.make_current();
        let gl =
            unsafe { glow::Context::from_loader_function(|proc| window.get_proc_address(proc) as _) };

        Some(TestContext {
            gl: Arc::new(gl),
            _window: window,
            _glfw: glfw,
            _guard: guard,
        })
    }
}
