pub mod codec;
pub mod error;
pub mod image;

use log::*;
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub use crate::codec::{LogObserver, NoopObserver, Palette, PixelBuffer, PixelObserver};
pub use crate::error::{ExpandError, FormatError, InfoError, LoggingError};
pub use crate::image::format::{BitDepth, DecodedImage, ImageInfo, Size};
pub use crate::image::{can_decode, decode, DecodeOptions, TimDecoder};

/// Sends `lib_tim` debug output to the file at `path`.
///
/// Decoding works without it; this only installs a global `env_logger`.
pub fn init_logging(path: impl AsRef<Path>) -> Result<(), LoggingError> {
    let target = Box::new(File::create(path)?);

    env_logger::Builder::new()
        .target(env_logger::Target::Pipe(target))
        .filter(Some("lib_tim"), LevelFilter::Debug)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}:{}] {}",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .try_init()?;
    Ok(())
}
