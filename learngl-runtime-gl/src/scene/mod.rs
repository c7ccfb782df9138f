//! Renderers for each demo, driven by [`learngl_runtime::frame::FrameLoop`].

mod clear;
mod textured_quad;
mod triangles;

pub use clear::ClearScene;
pub use textured_quad::{TexturedQuadScene, TEXTURE_UNIFORMS, TRANSFORM_UNIFORM};
pub use triangles::TriangleScene;

use glow::HasContext;
use learngl_common::ClearColor;

fn clear(context: &glow::Context, ClearColor([r, g, b, a]): ClearColor) {
    unsafe {
        context.clear_color(r, g, b, a);
        context.clear(glow::COLOR_BUFFER_BIT);
    }
}
