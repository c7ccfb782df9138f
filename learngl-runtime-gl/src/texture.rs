use crate::error::{GlError, TextureError};
use crate::options::TextureOptions;
use crate::util;
use glow::{HasContext, PixelUnpackData};
use learngl_common::{PixelFormat, Size};
use learngl_runtime::image::{Image, UVDirection};
use std::path::Path;
use std::sync::Arc;

/// A 2D texture resident on the GPU.
pub struct Texture {
    context: Arc<glow::Context>,
    handle: glow::Texture,
    size: Size<u32>,
    format: PixelFormat,
}

impl Texture {
    /// Decode the image at `path` and upload it into a new texture.
    ///
    /// If decoding fails nothing is created on the GPU. The decoded pixels are
    /// dropped before this returns.
    pub fn load(
        context: &Arc<glow::Context>,
        path: impl AsRef<Path>,
        direction: UVDirection,
        options: &TextureOptions,
    ) -> Result<Self, TextureError> {
        let path = path.as_ref();
        let image = Image::load(path, direction).map_err(|source| TextureError::Load {
            path: path.to_path_buf(),
            source,
        })?;

        let texture = Self::from_image(context, &image, options)?;
        log::debug!(
            "loaded texture {} ({}x{}, {:?})",
            path.display(),
            texture.size.width,
            texture.size.height,
            texture.format
        );
        Ok(texture)
    }

    /// Upload an already decoded image into a new texture.
    pub fn from_image(
        context: &Arc<glow::Context>,
        image: &Image,
        options: &TextureOptions,
    ) -> Result<Self, GlError> {
        let format = u32::from(image.format);
        let wrap = u32::from(options.wrap_mode) as i32;
        let filter = u32::from(options.filter) as i32;

        let handle = unsafe {
            let handle = context.create_texture().map_err(GlError::Texture)?;
            context.bind_texture(glow::TEXTURE_2D, Some(handle));

            context.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_S, wrap);
            context.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_T, wrap);
            context.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MIN_FILTER, filter);
            context.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MAG_FILTER, filter);

            util::with_unpack_alignment(context, unpack_alignment(image), || {
                context.tex_image_2d(
                    glow::TEXTURE_2D,
                    0,
                    format as i32,
                    image.size.width as i32,
                    image.size.height as i32,
                    0,
                    format,
                    glow::UNSIGNED_BYTE,
                    PixelUnpackData::Slice(Some(image.bytes.as_slice())),
                )
            });

            if options.mipmap {
                context.generate_mipmap(glow::TEXTURE_2D);
            }

            context.bind_texture(glow::TEXTURE_2D, None);
            handle
        };

        Ok(Texture {
            context: Arc::clone(context),
            handle,
            size: image.size,
            format: image.format,
        })
    }

    /// Bind the texture to the given texture unit.
    pub fn bind(&self, unit: u32) {
        unsafe {
            self.context.active_texture(glow::TEXTURE0 + unit);
            self.context.bind_texture(glow::TEXTURE_2D, Some(self.handle));
        }
    }

    pub fn handle(&self) -> glow::Texture {
        self.handle
    }

    pub fn size(&self) -> Size<u32> {
        self.size
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }
}

/// The largest of 4, 2 or 1 that divides the row pitch.
///
/// Rows of 1 and 3 channel images are not 4 byte aligned in general.
fn unpack_alignment(image: &Image) -> i32 {
    match image.row_pitch() {
        pitch if pitch % 4 == 0 => 4,
        pitch if pitch % 2 == 0 => 2,
        _ => 1,
    }
}

impl Drop for Texture {
    fn drop(&mut self) {
        unsafe { self.context.delete_texture(self.handle) }
    }
}
