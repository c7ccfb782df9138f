use crate::options::SceneOptions;
use crate::validation;
use learngl_runtime::frame::{FrameContext, FrameRenderer};
use std::sync::Arc;

/// Clears the window to the background color every frame.
pub struct ClearScene {
    context: Arc<glow::Context>,
    options: SceneOptions,
}

impl ClearScene {
    pub fn new(context: &Arc<glow::Context>, options: &SceneOptions) -> Self {
        ClearScene {
            context: Arc::clone(context),
            options: options.clone(),
        }
    }
}

impl FrameRenderer for ClearScene {
    fn render(&mut self, frame: &FrameContext) {
        super::clear(&self.context, self.options.clear_color);

        if self.options.validate {
            validation::drain_errors(&self.context, frame.frame_count);
        }
    }
}
