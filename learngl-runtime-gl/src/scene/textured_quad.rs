use crate::error::Result;
use crate::options::{SceneOptions, TextureOptions};
use crate::program::ShaderProgram;
use crate::texture::Texture;
use crate::validation;
use crate::vertex_array::VertexArray;
use learngl_runtime::frame::{FrameContext, FrameRenderer};
use learngl_runtime::image::UVDirection;
use learngl_runtime::transform::quad_transform;
use std::sync::Arc;

/// Sampler uniforms, in texture unit order.
pub const TEXTURE_UNIFORMS: [&str; 2] = ["texture1", "texture2"];

/// The `mat4` uniform that receives the per-frame model transform.
pub const TRANSFORM_UNIFORM: &str = "transform";

/// Two textures blended on a quad that spins about its center, offset to the bottom right.
pub struct TexturedQuadScene {
    context: Arc<glow::Context>,
    program: ShaderProgram,
    quad: VertexArray,
    textures: [Texture; 2],
    transform: glow::UniformLocation,
    options: SceneOptions,
}

impl TexturedQuadScene {
    /// Load the shaders and textures from `options.assets`.
    ///
    /// Expects `texture.vs`, `texture.fs`, `texture.jpg` and `awesomeface.png`.
    pub fn load(context: &Arc<glow::Context>, options: &SceneOptions) -> Result<Self> {
        let assets = &options.assets;
        log::info!("loading textured quad assets from {}", assets.display());

        let program = ShaderProgram::from_files(
            context,
            assets.join("texture.vs"),
            assets.join("texture.fs"),
        )?;
        let quad = VertexArray::quad(context)?;

        let texture_options = TextureOptions::default();
        let container = Texture::load(
            context,
            assets.join("texture.jpg"),
            UVDirection::TopLeft,
            &texture_options,
        )?;
        let face = Texture::load(
            context,
            assets.join("awesomeface.png"),
            UVDirection::BottomLeft,
            &texture_options,
        )?;

        Self::new(context, program, quad, [container, face], options)
    }

    /// Assemble the scene from already created objects and bind the sampler uniforms once.
    pub fn new(
        context: &Arc<glow::Context>,
        program: ShaderProgram,
        quad: VertexArray,
        textures: [Texture; 2],
        options: &SceneOptions,
    ) -> Result<Self> {
        program.use_program();
        for (unit, name) in TEXTURE_UNIFORMS.iter().enumerate() {
            program.set_int(name, unit as i32);
        }
        let transform = program.require_uniform(TRANSFORM_UNIFORM)?;

        Ok(TexturedQuadScene {
            context: Arc::clone(context),
            program,
            quad,
            textures,
            transform,
            options: options.clone(),
        })
    }

    pub fn textures(&self) -> &[Texture; 2] {
        &self.textures
    }
}

impl FrameRenderer for TexturedQuadScene {
    fn render(&mut self, frame: &FrameContext) {
        super::clear(&self.context, self.options.clear_color);

        for (unit, texture) in self.textures.iter().enumerate() {
            texture.bind(unit as u32);
        }

        let transform = quad_transform(frame.elapsed);
        self.program.use_program();
        self.program.set_mat4(&self.transform, &transform);

        self.quad.draw();

        if self.options.validate {
            validation::drain_errors(&self.context, frame.frame_count);
        }
    }

    fn teardown(self) {
        log::info!("releasing textured quad scene");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ProgramError, SceneError};
    use crate::test_context::TestContext;
    use learngl_runtime::image::Image;

    const VERTEX: &str = "#version 330 core
layout (location = 0) in vec3 aPos;
layout (location = 1) in vec2 aTexCoord;
out vec2 TexCoord;
uniform mat4 transform;
void main()
{
    gl_Position = transform * vec4(aPos, 1.0);
    TexCoord = aTexCoord;
}
";

    const FRAGMENT: &str = "#version 330 core
out vec4 FragColor;
in vec2 TexCoord;
uniform sampler2D texture1;
uniform sampler2D texture2;
void main()
{
    FragColor = mix(texture(texture1, TexCoord), texture(texture2, TexCoord), 0.2);
}
";

    fn png(width: u32, height: u32, pixel: [u8; 4]) -> Vec<u8> {
        use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
        let mut bytes = Vec::new();
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, Rgba(pixel)))
            .write_to(&mut std::io::Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    fn textures(context: &Arc<glow::Context>) -> [Texture; 2] {
        let options = TextureOptions::default();
        [(2, [255, 0, 0, 255]), (4, [0, 0, 255, 128])].map(|(size, pixel)| {
            let image =
                Image::load_from_memory(&png(size, size, pixel), UVDirection::TopLeft).unwrap();
            Texture::from_image(context, &image, &options).unwrap()
        })
    }

    #[test]
    fn renders_frames_without_gl_errors() {
        let Some(test) = TestContext::new() else {
            return;
        };

        let program = ShaderProgram::from_sources(&test.gl, VERTEX, FRAGMENT).unwrap();
        let quad = VertexArray::quad(&test.gl).unwrap();
        let mut scene = TexturedQuadScene::new(
            &test.gl,
            program,
            quad,
            textures(&test.gl),
            &SceneOptions::default(),
        )
        .unwrap();

        let [first, second] = scene.textures();
        assert_ne!(first.handle(), second.handle());

        for frame_count in 0..3 {
            scene.render(&FrameContext {
                frame_count,
                elapsed: frame_count as f32 * 0.25,
            });
            assert_eq!(validation::drain_errors(&test.gl, frame_count), 0);
        }

        scene.teardown();
        assert_eq!(validation::drain_errors(&test.gl, 3), 0);
    }

    #[test]
    fn missing_transform_uniform_is_an_error() {
        let Some(test) = TestContext::new() else {
            return;
        };

        let vertex = "#version 330 core
layout (location = 0) in vec3 aPos;
void main()
{
    gl_Position = vec4(aPos, 1.0);
}
";
        let program = ShaderProgram::from_sources(&test.gl, vertex, FRAGMENT).unwrap();
        let quad = VertexArray::quad(&test.gl).unwrap();
        let result = TexturedQuadScene::new(
            &test.gl,
            program,
            quad,
            textures(&test.gl),
            &SceneOptions::default(),
        );

        assert!(matches!(
            result,
            Err(SceneError::Program(ProgramError::MissingUniform(name))) if name == TRANSFORM_UNIFORM
        ));
    }

    #[test]
    fn missing_assets_fail_before_rendering() {
        let Some(test) = TestContext::new() else {
            return;
        };

        let options = SceneOptions {
            assets: std::env::temp_dir().join("learngl-no-such-assets"),
            ..SceneOptions::default()
        };

        assert!(matches!(
            TexturedQuadScene::load(&test.gl, &options),
            Err(SceneError::Program(ProgramError::Io(..)))
        ));
    }
}
