use std::io;

use thiserror::Error;

/// Reasons a TIM decode can fail. Every variant is terminal for the decode call.
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("Invalid magic: expected 0x10, got {magic:#x}")]
    BadMagic { magic: u32 },
    #[error("Unexpected end of stream while reading {context}")]
    Truncated { context: &'static str },
    #[error("Unsupported depth selector {selector}")]
    UnsupportedDepth { selector: u32 },
    #[error("Image dimensions {width}x{height} exceed the limit of {limit} pixels")]
    TooLarge { width: u16, height: u16, limit: usize },
    #[error("Palette of {entries} entries exceeds the limit of {limit}")]
    PaletteTooLarge { entries: usize, limit: usize },

    #[error("Stream read failed")]
    Io(#[from] io::Error),
}

#[derive(Error, Debug)]
pub enum ExpandError {
    #[error("Invalid palette index: {0} exceeds palette size of {1}")]
    InvalidPaletteIndex(usize, usize),
}

#[derive(Error, Debug)]
pub enum InfoError {
    #[error("Failed to (de)serialize image info")]
    Serialization(#[from] bincode::Error),
}

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Can't create log file")]
    LogFile(#[from] io::Error),
    #[error("A logger is already installed")]
    AlreadyInstalled(#[from] log::SetLoggerError),
}
