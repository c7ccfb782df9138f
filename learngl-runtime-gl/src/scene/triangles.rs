use crate::error::Result;
use crate::options::SceneOptions;
use crate::program::ShaderProgram;
use crate::validation;
use crate::vertex_array::VertexArray;
use learngl_runtime::frame::{FrameContext, FrameRenderer};
use std::sync::Arc;

const VERTEX_SHADER: &str = "#version 330 core
layout (location = 0) in vec3 aPos;
void main()
{
   gl_Position = vec4(aPos.x, aPos.y, aPos.z, 1.0);
}
";

const FRAGMENT_SHADER: &str = "#version 330 core
out vec4 FragColor;
void main()
{
   FragColor = vec4(1.0f, 0.5f, 0.2f, 1.0f);
}
";

/// Two flat orange triangles from a single unindexed buffer.
pub struct TriangleScene {
    context: Arc<glow::Context>,
    program: ShaderProgram,
    triangles: VertexArray,
    options: SceneOptions,
}

impl TriangleScene {
    pub fn new(context: &Arc<glow::Context>, options: &SceneOptions) -> Result<Self> {
        let program = ShaderProgram::from_sources(context, VERTEX_SHADER, FRAGMENT_SHADER)?;
        let triangles = VertexArray::triangles(context)?;

        Ok(TriangleScene {
            context: Arc::clone(context),
            program,
            triangles,
            options: options.clone(),
        })
    }
}

impl FrameRenderer for TriangleScene {
    fn render(&mut self, frame: &FrameContext) {
        super::clear(&self.context, self.options.clear_color);

        self.program.use_program();
        self.triangles.draw_range(0, 3);
        self.triangles.draw_range(3, 3);

        if self.options.validate {
            validation::drain_errors(&self.context, frame.frame_count);
        }
    }

    fn teardown(self) {
        log::debug!("releasing triangle scene");
    }
}
