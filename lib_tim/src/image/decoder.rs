use std::io::{Read, Seek};

use log::{debug, error, info};

use super::format::{DecodedImage, Header, Size, SUB_HEADER_SIZE};
use super::sniff;
use crate::codec::{load_palette, unpack, ByteStream, NoopObserver, PixelObserver};
use crate::error::FormatError;

/// Limits applied before trusting sizes declared by the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Largest accepted `width * height`, checked before allocating pixels.
    pub max_pixels: usize,
    /// Largest accepted `colors_per_palette * palette_count`.
    pub max_palette_entries: usize,
}

impl DecodeOptions {
    pub const DEFAULT_MAX_PIXELS: usize = 4096 * 4096;
    pub const DEFAULT_MAX_PALETTE_ENTRIES: usize = 65536;
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_pixels: Self::DEFAULT_MAX_PIXELS,
            max_palette_entries: Self::DEFAULT_MAX_PALETTE_ENTRIES,
        }
    }
}

/// TIM decoder that remembers the dimensions of its last successful decode.
#[derive(Debug, Clone, Default)]
pub struct TimDecoder {
    options: DecodeOptions,
    last_size: Option<Size>,
}

impl TimDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: DecodeOptions) -> Self {
        Self {
            options,
            last_size: None,
        }
    }

    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Dimensions of the last successfully decoded image.
    pub fn size(&self) -> Option<Size> {
        self.last_size
    }

    pub fn can_decode<R: Read + Seek + ?Sized>(&self, stream: &mut R) -> bool {
        sniff::can_decode(stream)
    }

    pub fn decode<R: Read>(&mut self, stream: R) -> Result<DecodedImage, FormatError> {
        self.decode_with_observer(stream, &mut NoopObserver)
    }

    /// Decodes one image, reporting every unpacked pixel to `observer`.
    ///
    /// Consumes exactly the bytes the image occupies. Nothing is returned
    /// on failure and the cached size keeps its previous value.
    pub fn decode_with_observer<R: Read, O: PixelObserver + ?Sized>(
        &mut self,
        stream: R,
        observer: &mut O,
    ) -> Result<DecodedImage, FormatError> {
        let image = self.read_image(stream, observer).map_err(|e| {
            error!("Decode failed: {}", e);
            e
        })?;
        info!("Decoded {}x{} {:?} image", image.width, image.height, image.depth);

        self.last_size = Some(Size {
            width: image.width,
            height: image.height,
        });
        Ok(image)
    }

    fn read_image<R: Read, O: PixelObserver + ?Sized>(
        &self,
        stream: R,
        observer: &mut O,
    ) -> Result<DecodedImage, FormatError> {
        let mut stream = ByteStream::new(stream);

        // Step 1: Magic and flags
        let header = Header::read(&mut stream)?;
        debug!("Magic: {:#x}", header.magic);
        debug!("Has CLUT: {}", header.has_palette());
        debug!("Depth selector: {}", header.depth_selector());

        // Step 2: Palette block
        let palette = if header.has_palette() {
            Some(load_palette(&mut stream, self.options.max_palette_entries)?)
        } else {
            None
        };

        // Step 3: Pixel region header
        stream.skip(SUB_HEADER_SIZE, "pixel sub-header")?;
        let raw_width = stream.read_u16("width")?;
        let height = stream.read_u16("height")?;

        let selector = header.depth_selector();
        let depth = header
            .depth()
            .ok_or(FormatError::UnsupportedDepth { selector })?;
        let width = depth.effective_width(raw_width);
        debug!("Bits per pixel: {}", depth.bits());
        debug!("Width: {} (raw {})", width, raw_width);
        debug!("Height: {}", height);

        let pixel_count = width as usize * height as usize;
        if pixel_count > self.options.max_pixels {
            return Err(FormatError::TooLarge {
                width,
                height,
                limit: self.options.max_pixels,
            });
        }

        // Step 4: Pixel data
        let pixels = unpack(&mut stream, depth, width, height, observer)?;
        debug!("Consumed {} bytes", stream.consumed());

        Ok(DecodedImage {
            width,
            height,
            depth,
            pixels,
            palette: palette.filter(|_| depth.is_indexed()),
        })
    }
}

/// Decodes one TIM image from `stream` with default options.
pub fn decode<R: Read>(stream: R) -> Result<DecodedImage, FormatError> {
    TimDecoder::new().decode(stream)
}

/// Non-destructive signature check, see [`sniff::can_decode`].
pub fn can_decode<R: Read + Seek + ?Sized>(stream: &mut R) -> bool {
    sniff::can_decode(stream)
}
