//! Texture loading
//!
//! Images are decoded with the `image` crate and always expanded to four
//! channels. 32-bit float images (hdr, exr) keep their float data, everything
//! else is converted to 8 bits per channel.

use crate::filesystem::FileSystem;
use image::{ColorType, DynamicImage};
use log::{error, info};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::Path;
use tracing::instrument;

#[derive(Debug)]
pub enum TextureError {
    Io(io::Error),
    Decode(image::ImageError),
}

impl Error for TextureError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TextureError::Io(error) => Some(error),
            TextureError::Decode(error) => Some(error),
        }
    }
}

impl Display for TextureError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TextureError::Io(error) => write!(f, "IO error: {error}"),
            TextureError::Decode(error) => write!(f, "Image decode error: {error}"),
        }
    }
}

impl From<io::Error> for TextureError {
    fn from(error: io::Error) -> Self {
        TextureError::Io(error)
    }
}

impl From<image::ImageError> for TextureError {
    fn from(error: image::ImageError) -> Self {
        TextureError::Decode(error)
    }
}

/// Component type of the pixel data, as passed to `glTexImage2D`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelType {
    UnsignedByte,
    Float,
}

impl PixelType {
    pub fn gl_enum(&self) -> u32 {
        match self {
            PixelType::UnsignedByte => 0x1401,
            PixelType::Float => 0x1406,
        }
    }
}

/// RGBA pixels, row by row starting at the top
#[derive(Debug, Clone, PartialEq)]
pub enum TextureData {
    U8(Vec<u8>),
    F32(Vec<f32>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    pub width: u32,
    pub height: u32,
    pub data: TextureData,
}

impl Texture {
    /// Converts a decoded image to RGBA, keeping float precision for 32-bit float images.
    pub fn from_image(image: DynamicImage) -> Self {
        let width = image.width();
        let height = image.height();
        let data = match image.color() {
            ColorType::Rgb32F | ColorType::Rgba32F => {
                TextureData::F32(image.into_rgba32f().into_raw())
            }
            _ => TextureData::U8(image.into_rgba8().into_raw()),
        };
        Texture {
            width,
            height,
            data,
        }
    }

    pub fn pixel_type(&self) -> PixelType {
        match self.data {
            TextureData::U8(_) => PixelType::UnsignedByte,
            TextureData::F32(_) => PixelType::Float,
        }
    }

    pub fn bytes(&self) -> &[u8] {
        match &self.data {
            TextureData::U8(data) => data.as_slice(),
            TextureData::F32(data) => bytemuck::cast_slice(data),
        }
    }

    /// RGBA components of the pixel at `(x, y)` scaled to `0.0..=1.0` for 8-bit data
    pub fn pixel(&self, x: u32, y: u32) -> Option<[f32; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = ((y * self.width + x) * 4) as usize;
        Some(match &self.data {
            TextureData::U8(data) => {
                let p = &data[offset..offset + 4];
                [p[0], p[1], p[2], p[3]].map(|c| c as f32 / 255.0)
            }
            TextureData::F32(data) => {
                let p = &data[offset..offset + 4];
                [p[0], p[1], p[2], p[3]]
            }
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Filter {
    Nearest,
    #[default]
    Linear,
}

impl Filter {
    pub fn gl_enum(&self) -> u32 {
        match self {
            Filter::Nearest => 0x2600,
            Filter::Linear => 0x2601,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Wrap {
    #[default]
    Repeat,
    MirroredRepeat,
    ClampToEdge,
}

impl Wrap {
    pub fn gl_enum(&self) -> u32 {
        match self {
            Wrap::Repeat => 0x2901,
            Wrap::MirroredRepeat => 0x8370,
            Wrap::ClampToEdge => 0x812F,
        }
    }
}

/// Sampler state applied when a texture is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TextureSampling {
    pub min_filter: Filter,
    pub mag_filter: Filter,
    pub wrap_s: Wrap,
    pub wrap_t: Wrap,
}

impl TextureSampling {
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.min_filter = filter;
        self.mag_filter = filter;
        self
    }

    pub fn with_wrap(mut self, wrap: Wrap) -> Self {
        self.wrap_s = wrap;
        self.wrap_t = wrap;
        self
    }
}

/// Decodes an in-memory image, the format is guessed from its signature.
pub fn decode_texture(data: &[u8]) -> Result<Texture, TextureError> {
    let image = image::load_from_memory(data)?;
    Ok(Texture::from_image(image))
}

#[instrument(skip(path, fs), fields(path = %path.display()))]
pub fn load_texture(path: &Path, fs: &dyn FileSystem) -> Result<Texture, TextureError> {
    let result = fs
        .read_file(path)
        .map_err(TextureError::from)
        .and_then(|data| decode_texture(&data));
    match &result {
        Ok(texture) => info!(
            "Loaded texture {} ({}x{}, {:?})",
            path.display(),
            texture.width,
            texture.height,
            texture.pixel_type()
        ),
        Err(e) => error!("Failed to load texture {}: {}", path.display(), e),
    }
    result
}
