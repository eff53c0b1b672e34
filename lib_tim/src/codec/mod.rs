pub mod color;
pub mod observer;
pub mod palette;
pub mod pixels;
pub mod stream;

pub use color::expand_5551;
pub use observer::{LogObserver, NoopObserver, PixelObserver};
pub use palette::{load_palette, Palette};
pub use pixels::{unpack, PixelBuffer};
pub use stream::ByteStream;
