#![allow(dead_code)]

pub const MAGIC: [u8; 4] = [0x10, 0x00, 0x00, 0x00];

pub const FLAGS_4BPP: u32 = 0x1;
pub const FLAGS_8BPP: u32 = 0x2;
pub const FLAGS_16BPP: u32 = 0x3;
pub const FLAG_CLUT: u32 = 0x8;

pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Builds TIM byte streams field by field.
pub struct TimBuilder {
    data: Vec<u8>,
}

impl TimBuilder {
    pub fn new(flags: u32) -> Self {
        let mut data = MAGIC.to_vec();
        data.extend_from_slice(&flags.to_le_bytes());
        Self { data }
    }

    pub fn palette(mut self, colors: u16, banks: u16, entries: &[u16]) -> Self {
        self.data.extend_from_slice(&[0xEE; 8]);
        self.data.extend_from_slice(&colors.to_le_bytes());
        self.data.extend_from_slice(&banks.to_le_bytes());
        for entry in entries {
            self.data.extend_from_slice(&entry.to_le_bytes());
        }
        self
    }

    pub fn region(mut self, raw_width: u16, height: u16) -> Self {
        self.data.extend_from_slice(&[0xDD; 8]);
        self.data.extend_from_slice(&raw_width.to_le_bytes());
        self.data.extend_from_slice(&height.to_le_bytes());
        self
    }

    pub fn bytes(mut self, bytes: &[u8]) -> Self {
        self.data.extend_from_slice(bytes);
        self
    }

    pub fn words(mut self, words: &[u16]) -> Self {
        for word in words {
            self.data.extend_from_slice(&word.to_le_bytes());
        }
        self
    }

    pub fn build(self) -> Vec<u8> {
        self.data
    }
}
