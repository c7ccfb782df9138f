//! A polling frame loop, generic over the window and the renderer.
//!
//! Each iteration checks input, renders, presents and then processes window events.
//! The loop terminates only through the window's close flag.

/// The state of a [`FrameLoop`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LoopState {
    Running,
    Terminated,
}

/// Per-frame values passed to a [`FrameRenderer`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameContext {
    /// The number of frames rendered before this one.
    pub frame_count: usize,
    /// Seconds since the window was created.
    pub elapsed: f32,
}

/// A window that owns the presentation surface and the input state.
pub trait RenderWindow {
    /// Whether the close flag is set.
    fn should_close(&self) -> bool;

    /// Whether the designated exit key is currently held.
    fn exit_requested(&self) -> bool;

    /// Set the close flag. Takes effect at the next iteration boundary.
    fn request_close(&mut self);

    /// Seconds since the window was created.
    fn elapsed_seconds(&self) -> f64;

    /// Swap the back buffer to the screen.
    fn present(&mut self);

    /// Process pending window and input events.
    fn poll_events(&mut self);
}

/// Something that draws one frame at a time.
pub trait FrameRenderer {
    fn render(&mut self, frame: &FrameContext);

    /// Release everything the renderer owns.
    ///
    /// Called once by [`FrameLoop::run`] after the loop exits.
    fn teardown(self)
    where
        Self: Sized,
    {
    }
}

/// Drives a [`FrameRenderer`] against a [`RenderWindow`] until the window closes.
#[derive(Debug)]
pub struct FrameLoop {
    state: LoopState,
    frame_count: usize,
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameLoop {
    pub fn new() -> Self {
        FrameLoop {
            state: LoopState::Running,
            frame_count: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// Run a single iteration of the loop.
    ///
    /// Returns [`LoopState::Terminated`] without rendering if the window was asked to close.
    pub fn step<W, R>(&mut self, window: &mut W, renderer: &mut R) -> LoopState
    where
        W: RenderWindow + ?Sized,
        R: FrameRenderer + ?Sized,
    {
        if self.state == LoopState::Terminated {
            return self.state;
        }

        if window.should_close() {
            log::debug!("close requested after {} frames", self.frame_count);
            self.state = LoopState::Terminated;
            return self.state;
        }

        if window.exit_requested() {
            window.request_close();
        }

        let frame = FrameContext {
            frame_count: self.frame_count,
            elapsed: window.elapsed_seconds() as f32,
        };

        renderer.render(&frame);
        window.present();
        window.poll_events();

        self.frame_count += 1;
        self.state
    }

    /// Run until the window closes, then tear the renderer down.
    ///
    /// Returns the number of frames rendered.
    pub fn run<W, R>(mut self, window: &mut W, mut renderer: R) -> usize
    where
        W: RenderWindow + ?Sized,
        R: FrameRenderer,
    {
        while self.step(window, &mut renderer) == LoopState::Running {}

        renderer.teardown();
        self.frame_count
    }
}
