use std::io::Read;

use super::color::expand_5551;
use super::observer::PixelObserver;
use super::stream::ByteStream;
use crate::error::FormatError;
use crate::image::format::BitDepth;

/// Decoded pixels in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PixelBuffer {
    /// Palette indices, not validated against the palette length.
    Indexed(Vec<u8>),
    /// Expanded `0xAARRGGBB` colors.
    Direct(Vec<u32>),
}

impl PixelBuffer {
    pub fn len(&self) -> usize {
        match self {
            Self::Indexed(indices) => indices.len(),
            Self::Direct(colors) => colors.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_indexed(&self) -> Option<&[u8]> {
        match self {
            Self::Indexed(indices) => Some(indices),
            Self::Direct(_) => None,
        }
    }

    pub fn as_direct(&self) -> Option<&[u32]> {
        match self {
            Self::Direct(colors) => Some(colors),
            Self::Indexed(_) => None,
        }
    }
}

/// Unpacks a `width` x `height` pixel region laid out as `depth`.
///
/// The caller is responsible for bounding `width * height` before calling.
pub fn unpack<R: Read, O: PixelObserver + ?Sized>(
    stream: &mut ByteStream<R>,
    depth: BitDepth,
    width: u16,
    height: u16,
    observer: &mut O,
) -> Result<PixelBuffer, FormatError> {
    match depth {
        BitDepth::Indexed4 => unpack_indexed4(stream, width, height, observer),
        BitDepth::Indexed8 => unpack_indexed8(stream, width, height, observer),
        BitDepth::Direct16 => unpack_direct16(stream, width, height, observer),
    }
}

fn unpack_indexed4<R: Read, O: PixelObserver + ?Sized>(
    stream: &mut ByteStream<R>,
    width: u16,
    height: u16,
    observer: &mut O,
) -> Result<PixelBuffer, FormatError> {
    let mut indices = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height {
        for x in (0..width).step_by(2) {
            let packed = stream.read_u8("4-bit pixel data")?;

            let first = packed & 0x0f;
            indices.push(first);
            observer.pixel(x, y, first as u32);

            // The high nibble has no column to land in on odd widths.
            if x + 1 < width {
                let second = packed >> 4;
                indices.push(second);
                observer.pixel(x + 1, y, second as u32);
            }
        }
        observer.row_done(y);
    }
    Ok(PixelBuffer::Indexed(indices))
}

fn unpack_indexed8<R: Read, O: PixelObserver + ?Sized>(
    stream: &mut ByteStream<R>,
    width: u16,
    height: u16,
    observer: &mut O,
) -> Result<PixelBuffer, FormatError> {
    let mut indices = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height {
        for x in 0..width {
            let index = stream.read_u8("8-bit pixel data")?;
            indices.push(index);
            observer.pixel(x, y, index as u32);
        }
        observer.row_done(y);
    }
    Ok(PixelBuffer::Indexed(indices))
}

fn unpack_direct16<R: Read, O: PixelObserver + ?Sized>(
    stream: &mut ByteStream<R>,
    width: u16,
    height: u16,
    observer: &mut O,
) -> Result<PixelBuffer, FormatError> {
    let mut colors = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height {
        for x in 0..width {
            let color = expand_5551(stream.read_u16("16-bit pixel data")?);
            colors.push(color);
            observer.pixel(x, y, color);
        }
        observer.row_done(y);
    }
    Ok(PixelBuffer::Direct(colors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::observer::NoopObserver;

    #[derive(Default)]
    struct Recorder {
        pixels: Vec<(u16, u16, u32)>,
        rows: Vec<u16>,
    }

    impl PixelObserver for Recorder {
        fn pixel(&mut self, x: u16, y: u16, value: u32) {
            self.pixels.push((x, y, value));
        }

        fn row_done(&mut self, y: u16) {
            self.rows.push(y);
        }
    }

    fn run(
        depth: BitDepth,
        width: u16,
        height: u16,
        data: &[u8],
    ) -> Result<PixelBuffer, FormatError> {
        let mut stream = ByteStream::new(data);
        unpack(&mut stream, depth, width, height, &mut NoopObserver)
    }

    #[test]
    fn test_indexed4_low_nibble_first() {
        let pixels = run(BitDepth::Indexed4, 4, 1, &[0x21, 0x43]).unwrap();
        assert_eq!(pixels, PixelBuffer::Indexed(vec![1, 2, 3, 4]));
    }

    #[test]
    fn test_indexed4_odd_width() {
        let data: [u8; 2] = [0x21, 0x43];
        let mut stream = ByteStream::new(&data[..]);
        let mut recorder = Recorder::default();

        let pixels = unpack(&mut stream, BitDepth::Indexed4, 3, 1, &mut recorder).unwrap();
        assert_eq!(pixels, PixelBuffer::Indexed(vec![1, 2, 3]));
        assert_eq!(recorder.pixels, vec![(0, 0, 1), (1, 0, 2), (2, 0, 3)]);
        assert_eq!(stream.consumed(), 2);
    }

    #[test]
    fn test_indexed4_odd_width_multiple_rows() {
        // every row consumes two bytes, the last high nibble is dropped
        let pixels = run(BitDepth::Indexed4, 3, 2, &[0x21, 0xF3, 0x65, 0xE7]).unwrap();
        assert_eq!(pixels, PixelBuffer::Indexed(vec![1, 2, 3, 5, 6, 7]));
    }

    #[test]
    fn test_indexed8_passthrough() {
        let pixels = run(BitDepth::Indexed8, 2, 2, &[0, 17, 200, 255]).unwrap();
        assert_eq!(pixels.as_indexed(), Some(&[0, 17, 200, 255][..]));
    }

    #[test]
    fn test_direct16() {
        let pixels = run(BitDepth::Direct16, 2, 1, &[0x00, 0x00, 0xff, 0xff]).unwrap();
        assert_eq!(pixels.as_direct(), Some(&[0xFF00_0000, 0xF7FF_FFFF][..]));
    }

    #[test]
    fn test_rows_reported_top_to_bottom() {
        let data: [u8; 6] = [1, 2, 3, 4, 5, 6];
        let mut stream = ByteStream::new(&data[..]);
        let mut recorder = Recorder::default();

        unpack(&mut stream, BitDepth::Indexed8, 2, 3, &mut recorder).unwrap();
        assert_eq!(recorder.rows, vec![0, 1, 2]);
        assert_eq!(recorder.pixels[3], (1, 1, 4));
    }

    #[test]
    fn test_truncated_region() {
        for depth in [BitDepth::Indexed4, BitDepth::Indexed8, BitDepth::Direct16] {
            let result = run(depth, 4, 4, &[0x11, 0x22, 0x33]);
            assert!(matches!(result, Err(FormatError::Truncated { .. })));
        }
    }

    #[test]
    fn test_empty_region() {
        let pixels = run(BitDepth::Direct16, 0, 10, &[]).unwrap();
        assert!(pixels.is_empty());
    }
}
