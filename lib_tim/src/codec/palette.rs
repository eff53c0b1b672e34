use std::io::Read;

use log::debug;

use super::color::expand_5551;
use super::stream::ByteStream;
use crate::error::FormatError;
use crate::image::format::SUB_HEADER_SIZE;

// Cap on up-front allocation; larger palettes still grow as entries arrive.
const PREALLOCATE_ENTRIES: usize = 4096;

/// Color lookup table of a TIM image.
///
/// All banks are stored back to back: entry `i` is the color referenced by
/// pixel value `i`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Palette {
    pub colors_per_palette: u16,
    pub palette_count: u16,
    pub entries: Vec<u32>, // Array of expanded 0xAARRGGBB colors
}

impl Palette {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn colors(&self) -> &[u32] {
        &self.entries
    }
}

/// Reads the palette block that follows the header when the palette flag is set.
///
/// # Parameters
/// - `stream`: the stream, positioned right after the header.
/// - `max_entries`: upper bound on `colors_per_palette * palette_count`.
///
/// # Errors
/// - Returns `FormatError::Truncated` if the stream ends inside the block
/// - Returns `FormatError::PaletteTooLarge` if the declared entry count exceeds `max_entries`
pub fn load_palette<R: Read>(
    stream: &mut ByteStream<R>,
    max_entries: usize,
) -> Result<Palette, FormatError> {
    stream.skip(SUB_HEADER_SIZE, "palette sub-header")?;
    let colors_per_palette = stream.read_u16("palette color count")?;
    let palette_count = stream.read_u16("palette count")?;
    debug!("Colors: {}", colors_per_palette);
    debug!("Palettes: {}", palette_count);

    let total = colors_per_palette as usize * palette_count as usize;
    if total > max_entries {
        return Err(FormatError::PaletteTooLarge {
            entries: total,
            limit: max_entries,
        });
    }

    let mut entries = Vec::with_capacity(total.min(PREALLOCATE_ENTRIES));
    for _ in 0..total {
        let raw = stream.read_u16("palette entry")?;
        entries.push(expand_5551(raw));
    }

    Ok(Palette {
        colors_per_palette,
        palette_count,
        entries,
    })
}
