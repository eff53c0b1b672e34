use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::codec::color::argb_to_rgba;
use crate::codec::palette::Palette;
use crate::codec::pixels::PixelBuffer;
use crate::codec::stream::ByteStream;
use crate::error::{ExpandError, FormatError, InfoError};

pub const TIM_MAGIC: u32 = 0x10;
/// Little-endian encoding of [`TIM_MAGIC`], as found at the start of every TIM file.
pub const TIM_SIGNATURE: [u8; 4] = [0x10, 0x00, 0x00, 0x00];

pub const FLAG_HAS_PALETTE: u32 = 0x8;
pub const DEPTH_SELECTOR_MASK: u32 = 0x7;

/// Opaque sub-header preceding both the palette block and the pixel region.
pub const SUB_HEADER_SIZE: u64 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub magic: u32,
    pub flags: u32,
}

impl Header {
    pub const SIZE: usize = 2 * std::mem::size_of::<u32>();

    /// Consumes the magic and flags words, rejecting anything that is not a TIM.
    pub fn read<R: Read>(stream: &mut ByteStream<R>) -> Result<Self, FormatError> {
        let magic = stream.read_u32("magic")?;
        let flags = stream.read_u32("flags")?;
        if magic != TIM_MAGIC {
            return Err(FormatError::BadMagic { magic });
        }
        Ok(Self { magic, flags })
    }

    pub fn has_palette(&self) -> bool {
        self.flags & FLAG_HAS_PALETTE != 0
    }

    pub fn depth_selector(&self) -> u32 {
        self.flags & DEPTH_SELECTOR_MASK
    }

    /// `None` when the selector names no known pixel layout.
    pub fn depth(&self) -> Option<BitDepth> {
        BitDepth::from_selector(self.depth_selector())
    }
}

/// Pixel layout of the image data region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BitDepth {
    /// Two palette indices per byte, low nibble first.
    Indexed4,
    /// One palette index per byte.
    Indexed8,
    /// One packed 5551 color per little-endian word.
    Direct16,
}

impl BitDepth {
    pub const fn from_selector(selector: u32) -> Option<Self> {
        match selector {
            1 => Some(Self::Indexed4),
            2 => Some(Self::Indexed8),
            3 => Some(Self::Direct16),
            _ => None,
        }
    }

    pub const fn bits(self) -> u8 {
        match self {
            Self::Indexed4 => 4,
            Self::Indexed8 => 8,
            Self::Direct16 => 16,
        }
    }

    pub const fn is_indexed(self) -> bool {
        !matches!(self, Self::Direct16)
    }

    /// The raw width field counts storage units, not pixels.
    pub const fn effective_width(self, raw_width: u16) -> u16 {
        match self {
            Self::Indexed4 => raw_width / 4,
            Self::Indexed8 => raw_width / 2,
            Self::Direct16 => raw_width,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl From<Size> for (u16, u16) {
    fn from(size: Size) -> Self {
        (size.width, size.height)
    }
}

/// Everything known about an image except its pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageInfo {
    pub width: u16,
    pub height: u16,
    pub depth: BitDepth,
    pub colors_per_palette: u16,
    pub palette_count: u16,
}

impl ImageInfo {
    pub fn size(&self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, InfoError> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, InfoError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u16,
    pub height: u16,
    pub depth: BitDepth,
    pub pixels: PixelBuffer,
    /// Present only for indexed depths whose file carries a palette block.
    pub palette: Option<Palette>,
}

impl DecodedImage {
    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    pub fn depth(&self) -> BitDepth {
        self.depth
    }

    pub fn info(&self) -> ImageInfo {
        let (colors_per_palette, palette_count) = self
            .palette
            .as_ref()
            .map_or((0, 0), |p| (p.colors_per_palette, p.palette_count));
        ImageInfo {
            width: self.width,
            height: self.height,
            depth: self.depth,
            colors_per_palette,
            palette_count,
        }
    }

    /// Resolves every pixel to a packed `0xAARRGGBB` color.
    ///
    /// # Errors
    /// - Returns `ExpandError::InvalidPaletteIndex` if an indexed pixel points past the palette
    pub fn to_argb32(&self) -> Result<Vec<u32>, ExpandError> {
        match &self.pixels {
            PixelBuffer::Direct(colors) => Ok(colors.clone()),
            PixelBuffer::Indexed(indices) => {
                let colors = self.palette.as_ref().map_or(&[][..], |p| &p.entries[..]);
                indices
                    .iter()
                    .map(|&index| {
                        colors
                            .get(index as usize)
                            .copied()
                            .ok_or(ExpandError::InvalidPaletteIndex(index as usize, colors.len()))
                    })
                    .collect()
            }
        }
    }

    /// Same as [`Self::to_argb32`], flattened to `[r, g, b, a]` bytes.
    pub fn to_rgba8(&self) -> Result<Vec<u8>, ExpandError> {
        Ok(self
            .to_argb32()?
            .into_iter()
            .flat_map(argb_to_rgba)
            .collect())
    }
}
