//! Embedded 5x7 bitmap font.
//!
//! Each glyph is seven rows of five bits, bit 4 being the leftmost column. The
//! font is fixed width: every character, including unknown ones, advances the
//! pen by the same amount.

use super::canvas::Canvas;

pub const GLYPH_WIDTH: i32 = 5;
pub const GLYPH_HEIGHT: i32 = 7;
/// Blank columns between neighbouring glyphs.
pub const GLYPH_SPACING: i32 = 1;

pub type Glyph = [u8; GLYPH_HEIGHT as usize];

const BLANK: Glyph = [0; GLYPH_HEIGHT as usize];

/// Looks up the glyph for `ch`. Lowercase letters share the uppercase shapes;
/// characters outside the font map to `None`.
pub fn glyph(ch: char) -> Option<&'static Glyph> {
    let glyph: &'static Glyph = match ch.to_ascii_uppercase() {
        'A' => &[0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => &[0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => &[0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => &[0b11100, 0b10010, 0b10001, 0b10001, 0b10001, 0b10010, 0b11100],
        'E' => &[0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => &[0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => &[0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111],
        'H' => &[0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => &[0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'J' => &[0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => &[0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => &[0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => &[0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'N' => &[0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001],
        'O' => &[0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => &[0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => &[0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => &[0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => &[0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'T' => &[0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => &[0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => &[0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => &[0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010],
        'X' => &[0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => &[0b10001, 0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100],
        'Z' => &[0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '0' => &[0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => &[0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => &[0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => &[0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => &[0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => &[0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => &[0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => &[0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => &[0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => &[0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        ' ' => &BLANK,
        '.' => &[0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100],
        ',' => &[0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b00100, 0b01000],
        '!' => &[0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100],
        '?' => &[0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b00000, 0b00100],
        ':' => &[0b00000, 0b01100, 0b01100, 0b00000, 0b01100, 0b01100, 0b00000],
        ';' => &[0b00000, 0b01100, 0b01100, 0b00000, 0b01100, 0b00100, 0b01000],
        '\'' => &[0b01100, 0b00100, 0b01000, 0b00000, 0b00000, 0b00000, 0b00000],
        '"' => &[0b01010, 0b01010, 0b01010, 0b00000, 0b00000, 0b00000, 0b00000],
        '-' => &[0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        '+' => &[0b00000, 0b00100, 0b00100, 0b11111, 0b00100, 0b00100, 0b00000],
        '=' => &[0b00000, 0b00000, 0b11111, 0b00000, 0b11111, 0b00000, 0b00000],
        '/' => &[0b00000, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b00000],
        '(' => &[0b00010, 0b00100, 0b01000, 0b01000, 0b01000, 0b00100, 0b00010],
        ')' => &[0b01000, 0b00100, 0b00010, 0b00010, 0b00010, 0b00100, 0b01000],
        '#' => &[0b01010, 0b01010, 0b11111, 0b01010, 0b11111, 0b01010, 0b01010],
        '%' => &[0b11000, 0b11001, 0b00010, 0b00100, 0b01000, 0b10011, 0b00011],
        '&' => &[0b01100, 0b10010, 0b10100, 0b01000, 0b10101, 0b10010, 0b01101],
        '*' => &[0b00000, 0b00100, 0b10101, 0b01110, 0b10101, 0b00100, 0b00000],
        '_' => &[0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b11111],
        '<' => &[0b00010, 0b00100, 0b01000, 0b10000, 0b01000, 0b00100, 0b00010],
        '>' => &[0b01000, 0b00100, 0b00010, 0b00001, 0b00010, 0b00100, 0b01000],
        _ => return None,
    };
    Some(glyph)
}

fn advance(scale: i32) -> i32 {
    (GLYPH_WIDTH + GLYPH_SPACING) * scale
}

fn effective_scale(scale: u8) -> i32 {
    i32::from(scale.max(1))
}

/// Draws `text` with its top left corner at `(x, y)` and returns the pen
/// position after the last character.
pub fn draw_text(canvas: &mut Canvas, text: &str, x: i32, y: i32, scale: u8, value: bool) -> i32 {
    let scale = effective_scale(scale);
    let mut pen = x;

    for ch in text.chars() {
        if let Some(glyph) = glyph(ch) {
            draw_glyph(canvas, glyph, pen, y, scale, value);
        }
        pen += advance(scale);
    }

    pen
}

fn draw_glyph(canvas: &mut Canvas, glyph: &Glyph, x: i32, y: i32, scale: i32, value: bool) {
    for (row, bits) in glyph.iter().enumerate() {
        for column in 0..GLYPH_WIDTH {
            if bits & (1 << (GLYPH_WIDTH - 1 - column)) == 0 {
                continue;
            }
            canvas.draw_rect(
                x + column * scale,
                y + row as i32 * scale,
                scale,
                scale,
                true,
                value,
            );
        }
    }
}

/// Horizontal advance of `text`, identical to how far [`draw_text`] moves the pen.
pub fn text_width(text: &str, scale: u8) -> i32 {
    text.chars().count() as i32 * advance(effective_scale(scale))
}

pub fn text_height(scale: u8) -> i32 {
    GLYPH_HEIGHT * effective_scale(scale)
}

/// Draws `text` horizontally centred on `center_x`.
pub fn draw_text_centered(
    canvas: &mut Canvas,
    text: &str,
    center_x: i32,
    y: i32,
    scale: u8,
    value: bool,
) -> i32 {
    // The trailing spacing column is not ink, leave it out when centring.
    let ink = (text_width(text, scale) - GLYPH_SPACING * effective_scale(scale)).max(0);
    draw_text(canvas, text, center_x - ink / 2, y, scale, value)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn empty_text_has_no_width() {
        assert_eq!(text_width("", 1), 0);
        assert_eq!(text_width("", 4), 0);
    }

    #[test]
    fn font_is_fixed_width() {
        assert_eq!(text_width("AB", 1), 2 * text_width("A", 1));
        assert_eq!(text_width("W.", 2), text_width("I!", 2));
        assert_eq!(text_width("A", 3), 18);
    }

    #[test]
    fn covers_letters_digits_and_punctuation() {
        for ch in ('A'..='Z').chain('0'..='9').chain(" .,!?:-'".chars()) {
            assert!(glyph(ch).is_some(), "missing glyph for {ch:?}");
        }
        assert_eq!(glyph('q'), glyph('Q'));
        assert!(glyph('~').is_none());
    }

    #[test]
    fn glyph_rows_fit_the_cell() {
        for ch in ('A'..='Z').chain('0'..='9') {
            let glyph = glyph(ch).unwrap();
            assert!(glyph.iter().all(|row| *row < 1 << GLYPH_WIDTH));
        }
    }

    #[test]
    fn scaled_pixels_become_blocks() {
        let mut canvas = Canvas::new(40, 20);
        draw_text(&mut canvas, "I", 0, 0, 2, true);
        // Top bar of "I" is columns 1..=3, so 2x scale covers x 2..8, y 0..2.
        for y in 0..2 {
            for x in 2..8 {
                assert!(canvas.pixel(x, y));
            }
        }
        assert!(!canvas.pixel(0, 0));
        assert!(!canvas.pixel(8, 0));
    }

    #[test]
    fn unknown_characters_advance_without_ink() {
        let mut canvas = Canvas::new(40, 10);
        let end = draw_text(&mut canvas, "~~", 1, 1, 1, true);
        assert_eq!(end, 1 + text_width("~~", 1));
        assert_eq!(canvas.count_set(), 0);
    }

    #[test]
    fn centered_text_is_balanced() {
        let mut canvas = Canvas::new(21, 9);
        draw_text_centered(&mut canvas, "H", 10, 1, 1, true);
        assert!(canvas.pixel(8, 1));
        assert!(canvas.pixel(12, 1));
        assert!(!canvas.pixel(7, 1));
        assert!(!canvas.pixel(13, 1));
    }

    proptest! {
        #[test]
        fn width_matches_pen_advance(text in "[ -~]{0,24}", x in -40i32..40, scale in 0u8..4) {
            let mut canvas = Canvas::new(32, 16);
            let end = draw_text(&mut canvas, &text, x, 2, scale, true);
            prop_assert_eq!(end - x, text_width(&text, scale));
        }
    }
}
