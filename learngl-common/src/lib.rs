//! Common types shared between the learngl runtime crates.

/// OpenGL enum conversions for common types.
#[cfg(feature = "opengl")]
pub mod gl;

use thiserror::Error;

/// The texel layout of an 8-bit-per-channel image, chosen by channel count.
#[repr(u32)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PixelFormat {
    /// One channel (`GL_RED`).
    Red = 1,
    /// Three channels (`GL_RGB`).
    Rgb = 3,
    /// Four channels (`GL_RGBA`).
    Rgba = 4,
}

/// A decoded image had a channel count with no matching [`PixelFormat`].
#[derive(Error, Debug, Copy, Clone, Eq, PartialEq)]
#[error("unsupported channel count {0}, expected 1, 3 or 4")]
pub struct UnsupportedChannelCount(pub u8);

impl PixelFormat {
    /// Select the pixel format for an image with the given number of channels.
    pub fn from_channels(channels: u8) -> Result<Self, UnsupportedChannelCount> {
        match channels {
            1 => Ok(PixelFormat::Red),
            3 => Ok(PixelFormat::Rgb),
            4 => Ok(PixelFormat::Rgba),
            n => Err(UnsupportedChannelCount(n)),
        }
    }

    /// The number of channels per texel.
    pub fn channels(&self) -> u8 {
        *self as u8
    }
}

#[repr(i32)]
#[derive(Copy, Clone, Default, Debug, Eq, PartialEq, Hash)]
pub enum FilterMode {
    #[default]
    Linear = 0,
    Nearest,
}

#[repr(i32)]
#[derive(Copy, Clone, Default, Debug, Eq, PartialEq, Hash)]
pub enum WrapMode {
    ClampToBorder = 0,
    ClampToEdge,
    #[default]
    Repeat,
    MirroredRepeat,
}

#[derive(Default, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Size<T> {
    pub width: T,
    pub height: T,
}

impl<T> Size<T> {
    pub fn new(width: T, height: T) -> Self {
        Size { width, height }
    }
}

/// A color used to clear the framebuffer.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ClearColor(pub [f32; 4]);

impl Default for ClearColor {
    fn default() -> Self {
        ClearColor([0.2, 0.3, 0.3, 1.0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supported_channels_map_to_formats() {
        assert_eq!(PixelFormat::from_channels(1), Ok(PixelFormat::Red));
        assert_eq!(PixelFormat::from_channels(3), Ok(PixelFormat::Rgb));
        assert_eq!(PixelFormat::from_channels(4), Ok(PixelFormat::Rgba));

        for channels in [1u8, 3, 4] {
            let format = PixelFormat::from_channels(channels);
            assert_eq!(format.map(|f| f.channels()), Ok(channels));
        }
    }

    #[test]
    fn unsupported_channels_are_rejected() {
        for channels in [0u8, 2, 5, 255] {
            assert_eq!(
                PixelFormat::from_channels(channels),
                Err(UnsupportedChannelCount(channels))
            );
        }
    }

    #[test]
    fn sampling_defaults_are_repeat_and_linear() {
        assert_eq!(WrapMode::default(), WrapMode::Repeat);
        assert_eq!(FilterMode::default(), FilterMode::Linear);
    }
}
