use crate::{FilterMode, PixelFormat, WrapMode};

impl From<PixelFormat> for u32 {
    fn from(format: PixelFormat) -> Self {
        match format {
            PixelFormat::Red => glow::RED,
            PixelFormat::Rgb => glow::RGB,
            PixelFormat::Rgba => glow::RGBA,
        }
    }
}

impl From<WrapMode> for u32 {
    fn from(value: WrapMode) -> Self {
        match value {
            WrapMode::ClampToBorder => glow::CLAMP_TO_BORDER,
            WrapMode::ClampToEdge => glow::CLAMP_TO_EDGE,
            WrapMode::Repeat => glow::REPEAT,
            WrapMode::MirroredRepeat => glow::MIRRORED_REPEAT,
        }
    }
}

impl From<FilterMode> for u32 {
    fn from(value: FilterMode) -> Self {
        match value {
            FilterMode::Linear => glow::LINEAR,
            FilterMode::Nearest => glow::NEAREST,
        }
    }
}
