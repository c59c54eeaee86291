// 3x5 bitmaps, one byte per row, bit 2 is the leftmost column.
const DIGITS: [[u8; 5]; 10] = [
    [0b111, 0b101, 0b101, 0b101, 0b111],
    [0b010, 0b110, 0b010, 0b010, 0b111],
    [0b111, 0b001, 0b111, 0b100, 0b111],
    [0b111, 0b001, 0b011, 0b001, 0b111],
    [0b101, 0b101, 0b111, 0b001, 0b001],
    [0b111, 0b100, 0b111, 0b001, 0b111],
    [0b111, 0b100, 0b111, 0b101, 0b111],
    [0b111, 0b001, 0b010, 0b010, 0b010],
    [0b111, 0b101, 0b111, 0b101, 0b111],
    [0b111, 0b101, 0b111, 0b001, 0b111],
];
const COLON: [u8; 5] = [0b000, 0b010, 0b000, 0b010, 0b000];
const MINUS: [u8; 5] = [0b000, 0b000, 0b111, 0b000, 0b000];

pub const GLYPH_WIDTH: u32 = 3;
pub const GLYPH_HEIGHT: u32 = 5;
/// Glyph width plus one column of spacing.
pub const GLYPH_ADVANCE: u32 = GLYPH_WIDTH + 1;

/// Rows of the bitmap for `c`; `None` for characters without a glyph,
/// which still take up one advance.
pub fn glyph(c: char) -> Option<[u8; 5]> {
    match c {
        '0'..='9' => c.to_digit(10).map(|d| DIGITS[d as usize]),
        ':' => Some(COLON),
        '-' => Some(MINUS),
        _ => None,
    }
}

pub fn text_width(text: &str, scale: u32) -> u32 {
    (text.chars().count() as u32 * GLYPH_ADVANCE).saturating_sub(1) * scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_charset_is_covered() {
        for c in "0123456789:-".chars() {
            assert!(glyph(c).is_some(), "{c}");
        }
        assert_eq!(None, glyph('x'));
    }

    #[test]
    fn width_of_label() {
        assert_eq!(11, text_width("1:1", 1));
        assert_eq!(30, text_width("-1:2", 2));
        assert_eq!(0, text_width("", 3));
    }
}
