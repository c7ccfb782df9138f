use learngl_common::{PixelFormat, Size, UnsupportedChannelCount};
use std::path::Path;
use thiserror::Error;

use image::{DynamicImage, ImageReader};

/// Errors that can occur while decoding an image.
#[derive(Error, Debug)]
pub enum ImageError {
    #[error("image decode error")]
    Decode(#[from] image::ImageError),
    #[error("image has no supported pixel format")]
    UnsupportedChannelCount(#[from] UnsupportedChannelCount),
}

/// A decoded image with 8 bits per channel, tightly packed.
pub struct Image {
    pub bytes: Vec<u8>,
    pub size: Size<u32>,
    pub format: PixelFormat,
}

/// The direction of UV coordinates to load the image for.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum UVDirection {
    /// Origin is at the top left. Rows are kept in file order.
    #[default]
    TopLeft,
    /// Origin is at the bottom left (OpenGL). Rows are flipped vertically.
    BottomLeft,
}

impl From<bool> for UVDirection {
    fn from(flip_vertical: bool) -> Self {
        if flip_vertical {
            UVDirection::BottomLeft
        } else {
            UVDirection::TopLeft
        }
    }
}

impl Image {
    /// Load the image from the path, keeping its channel count.
    ///
    /// The container format is sniffed from the file contents, not the extension.
    /// The flip is applied to this load only; there is no decoder state shared between calls.
    pub fn load(path: impl AsRef<Path>, direction: UVDirection) -> Result<Self, ImageError> {
        let image = ImageReader::open(path.as_ref())
            .and_then(ImageReader::with_guessed_format)
            .map_err(image::ImageError::IoError)?
            .decode()?;
        Self::from_dynamic(image, direction)
    }

    /// Decode an encoded image held in memory.
    pub fn load_from_memory(bytes: &[u8], direction: UVDirection) -> Result<Self, ImageError> {
        let image = image::load_from_memory(bytes)?;
        Self::from_dynamic(image, direction)
    }

    fn from_dynamic(mut image: DynamicImage, direction: UVDirection) -> Result<Self, ImageError> {
        let format = PixelFormat::from_channels(image.color().channel_count())?;

        if direction == UVDirection::BottomLeft {
            image = image.flipv();
        }

        let size = Size::new(image.width(), image.height());

        // wider sample types are narrowed to 8 bits per channel
        let bytes = match format {
            PixelFormat::Red => image.into_luma8().into_raw(),
            PixelFormat::Rgb => image.into_rgb8().into_raw(),
            PixelFormat::Rgba => image.into_rgba8().into_raw(),
        };

        Ok(Image {
            bytes,
            size,
            format,
        })
    }

    /// The number of bytes in one row of texels.
    pub fn row_pitch(&self) -> usize {
        self.size.width as usize * self.format.channels() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayAlphaImage, GrayImage, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
    use std::io::Cursor;
    use std::path::PathBuf;

    const RED: [u8; 4] = [255, 0, 0, 255];
    const BLUE: [u8; 4] = [0, 0, 255, 255];

    fn encode_png(image: DynamicImage) -> Vec<u8> {
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    /// A 1x2 image with a red top row and a blue bottom row.
    fn red_over_blue() -> DynamicImage {
        let mut image = RgbaImage::new(1, 2);
        image.put_pixel(0, 0, Rgba(RED));
        image.put_pixel(0, 1, Rgba(BLUE));
        DynamicImage::ImageRgba8(image)
    }

    fn fixture_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("learngl-{}-{name}", std::process::id()))
    }

    #[test]
    fn rgba_image_reports_size_and_format() {
        let bytes = encode_png(DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            2,
            2,
            Rgba([10, 20, 30, 40]),
        )));
        let image = Image::load_from_memory(&bytes, UVDirection::TopLeft).unwrap();

        assert_eq!(image.size, Size::new(2, 2));
        assert_eq!(image.format, PixelFormat::Rgba);
        assert_eq!(image.bytes.len(), 2 * 2 * 4);
        assert_eq!(image.row_pitch(), 8);
    }

    #[test]
    fn channel_count_selects_format() {
        let gray = encode_png(DynamicImage::ImageLuma8(GrayImage::new(3, 1)));
        let rgb = encode_png(DynamicImage::ImageRgb8(RgbImage::from_pixel(
            3,
            1,
            Rgb([1, 2, 3]),
        )));

        let gray = Image::load_from_memory(&gray, UVDirection::TopLeft).unwrap();
        let rgb = Image::load_from_memory(&rgb, UVDirection::TopLeft).unwrap();

        assert_eq!(gray.format, PixelFormat::Red);
        assert_eq!(gray.bytes.len(), 3);
        assert_eq!(rgb.format, PixelFormat::Rgb);
        assert_eq!(rgb.bytes, vec![1, 2, 3, 1, 2, 3, 1, 2, 3]);
    }

    #[test]
    fn two_channel_images_are_rejected() {
        let bytes = encode_png(DynamicImage::ImageLumaA8(GrayAlphaImage::new(1, 1)));
        let result = Image::load_from_memory(&bytes, UVDirection::TopLeft);

        assert!(matches!(
            result,
            Err(ImageError::UnsupportedChannelCount(UnsupportedChannelCount(2)))
        ));
    }

    #[test]
    fn flip_does_not_leak_into_the_next_load() {
        let path = fixture_path("red_over_blue.png");
        red_over_blue().save(&path).unwrap();

        let flipped = Image::load(&path, UVDirection::BottomLeft).unwrap();
        let unflipped = Image::load(&path, UVDirection::TopLeft).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(&flipped.bytes[..4], &BLUE);
        assert_eq!(&flipped.bytes[4..], &RED);
        assert_eq!(&unflipped.bytes[..4], &RED);
        assert_eq!(&unflipped.bytes[4..], &BLUE);
    }

    #[test]
    fn format_comes_from_contents_not_extension() {
        let path = fixture_path("png-named.jpg");
        let bytes = encode_png(DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            2,
            2,
            Rgba(RED),
        )));
        std::fs::write(&path, bytes).unwrap();

        let result = Image::load(&path, UVDirection::TopLeft);
        std::fs::remove_file(&path).ok();

        let image = result.unwrap();
        assert_eq!(image.size, Size::new(2, 2));
        assert_eq!(image.format, PixelFormat::Rgba);
        assert_eq!(&image.bytes[..4], &RED);
    }

    #[test]
    fn missing_file_is_a_decode_error() {
        let result = Image::load(fixture_path("does-not-exist.png"), UVDirection::TopLeft);
        assert!(matches!(result, Err(ImageError::Decode(_))));
    }

    #[test]
    fn flip_flag_maps_to_direction() {
        assert_eq!(UVDirection::from(true), UVDirection::BottomLeft);
        assert_eq!(UVDirection::from(false), UVDirection::TopLeft);
    }
}
