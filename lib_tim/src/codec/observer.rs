use log::trace;

/// Receives every pixel as it is unpacked.
///
/// `value` is the palette index for indexed depths and the expanded
/// `0xAARRGGBB` color for direct color. Observers never affect decoding.
pub trait PixelObserver {
    fn pixel(&mut self, _x: u16, _y: u16, _value: u32) {}

    fn row_done(&mut self, _y: u16) {}
}

/// Default observer, ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PixelObserver for NoopObserver {}

/// Dumps unpacked pixels to the `trace` log level.
#[derive(Debug, Default)]
pub struct LogObserver {
    row: Vec<u32>,
}

impl PixelObserver for LogObserver {
    fn pixel(&mut self, _x: u16, _y: u16, value: u32) {
        self.row.push(value);
    }

    fn row_done(&mut self, y: u16) {
        trace!("Row {}: {:?}", y, self.row);
        self.row.clear();
    }
}
