/// Alpha produced when the 5551 alpha-select bit is clear.
pub const ALPHA_OPAQUE: u8 = 255;
/// Alpha produced when the 5551 alpha-select bit is set.
pub const ALPHA_SELECTED: u8 = 247;

const CHANNEL_MASK: u16 = 0x1f;
const ALPHA_SELECT_BIT: u16 = 0x8000;

/// Scales a 5-bit channel to 8 bits by replicating its high bits.
#[inline]
pub const fn scale5to8(v: u16) -> u8 {
    let v = v & CHANNEL_MASK;
    ((v << 3) | (v >> 2)) as u8
}

/// Expands a packed 5551 color into `0xAARRGGBB`.
///
/// Bits 0-4 are red, 5-9 green, 10-14 blue, bit 15 selects the alpha.
#[inline]
pub const fn expand_5551(c: u16) -> u32 {
    let r = scale5to8(c) as u32;
    let g = scale5to8(c >> 5) as u32;
    let b = scale5to8(c >> 10) as u32;
    let a = if c & ALPHA_SELECT_BIT == 0 {
        ALPHA_OPAQUE as u32
    } else {
        ALPHA_SELECTED as u32
    };

    (a << 24) | (r << 16) | (g << 8) | b
}

/// Splits `0xAARRGGBB` into `[r, g, b, a]`.
#[inline]
pub const fn argb_to_rgba(argb: u32) -> [u8; 4] {
    [
        (argb >> 16) as u8,
        (argb >> 8) as u8,
        argb as u8,
        (argb >> 24) as u8,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_black() {
        assert_eq!(expand_5551(0x0000), 0xFF00_0000);
    }

    #[test]
    fn test_expand_white_with_alpha_bit() {
        assert_eq!(expand_5551(0xFFFF), 0xF7FF_FFFF);
    }

    #[test]
    fn test_expand_channels() {
        // red = 31, green = 0, blue = 16
        let c = 0x1f | (16 << 10);
        assert_eq!(expand_5551(c), 0xFFFF_0084);

        // green only, alpha bit set
        let c = 0x8000 | (1 << 5);
        assert_eq!(expand_5551(c), 0xF700_0800);
    }

    #[test]
    fn test_scale5to8_endpoints() {
        assert_eq!(scale5to8(0), 0);
        assert_eq!(scale5to8(1), 8);
        assert_eq!(scale5to8(31), 255);
    }

    #[test]
    fn test_argb_to_rgba() {
        assert_eq!(argb_to_rgba(0xF711_2233), [0x11, 0x22, 0x33, 0xF7]);
    }
}
