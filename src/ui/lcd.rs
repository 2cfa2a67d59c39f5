//! Seven-segment rendering of display text.
//!
//! Segment bits, lowest first: top, upper right, lower right, bottom,
//! lower left, upper left, middle.
//!
//! ```text
//!  _
//! |_|
//! |_|
//! ```

const TOP: u8 = 1 << 0;
const UPPER_RIGHT: u8 = 1 << 1;
const LOWER_RIGHT: u8 = 1 << 2;
const BOTTOM: u8 = 1 << 3;
const LOWER_LEFT: u8 = 1 << 4;
const UPPER_LEFT: u8 = 1 << 5;
const MIDDLE: u8 = 1 << 6;

/// Rows of one rendered line of glyphs.
pub const GLYPH_ROWS: usize = 3;

/// Segment mask for a character, `None` if it has no seven-segment form.
pub fn segments(ch: char) -> Option<u8> {
    let mask = match ch {
        '0' => TOP | UPPER_RIGHT | LOWER_RIGHT | BOTTOM | LOWER_LEFT | UPPER_LEFT,
        '1' => UPPER_RIGHT | LOWER_RIGHT,
        '2' => TOP | UPPER_RIGHT | MIDDLE | LOWER_LEFT | BOTTOM,
        '3' => TOP | UPPER_RIGHT | MIDDLE | LOWER_RIGHT | BOTTOM,
        '4' => UPPER_LEFT | MIDDLE | UPPER_RIGHT | LOWER_RIGHT,
        '5' => TOP | UPPER_LEFT | MIDDLE | LOWER_RIGHT | BOTTOM,
        '6' => TOP | UPPER_LEFT | MIDDLE | LOWER_LEFT | LOWER_RIGHT | BOTTOM,
        '7' => TOP | UPPER_RIGHT | LOWER_RIGHT,
        '8' => TOP | UPPER_RIGHT | LOWER_RIGHT | BOTTOM | LOWER_LEFT | UPPER_LEFT | MIDDLE,
        '9' => TOP | UPPER_RIGHT | LOWER_RIGHT | BOTTOM | UPPER_LEFT | MIDDLE,
        '-' => MIDDLE,
        // Letters that show up in "Infinity", "NaN" and exponents.
        'I' => UPPER_LEFT | LOWER_LEFT,
        'N' => LOWER_LEFT | UPPER_LEFT | TOP | UPPER_RIGHT | LOWER_RIGHT,
        'a' => TOP | UPPER_RIGHT | MIDDLE | LOWER_LEFT | LOWER_RIGHT | BOTTOM,
        'e' => TOP | UPPER_RIGHT | UPPER_LEFT | MIDDLE | LOWER_LEFT | BOTTOM,
        'f' => TOP | UPPER_LEFT | MIDDLE | LOWER_LEFT,
        'i' => LOWER_RIGHT,
        'n' => LOWER_LEFT | MIDDLE | LOWER_RIGHT,
        't' => UPPER_LEFT | MIDDLE | LOWER_LEFT | BOTTOM,
        'y' => UPPER_LEFT | MIDDLE | UPPER_RIGHT | LOWER_RIGHT | BOTTOM,
        _ => return None,
    };
    Some(mask)
}

/// First `max_chars` characters of `text`.
pub fn visible_text(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

fn glyph(ch: char) -> [String; GLYPH_ROWS] {
    if ch == '.' {
        return [" ".to_string(), " ".to_string(), ".".to_string()];
    }
    let Some(mask) = segments(ch) else {
        return ["   ".to_string(), format!(" {ch} "), "   ".to_string()];
    };
    let on = |bit: u8, mark: char| if mask & bit != 0 { mark } else { ' ' };
    [
        [' ', on(TOP, '_'), ' '].iter().collect(),
        [on(UPPER_LEFT, '|'), on(MIDDLE, '_'), on(UPPER_RIGHT, '|')]
            .iter()
            .collect(),
        [on(LOWER_LEFT, '|'), on(BOTTOM, '_'), on(LOWER_RIGHT, '|')]
            .iter()
            .collect(),
    ]
}

/// Render `text` as rows of seven-segment glyphs separated by one column.
pub fn render_rows(text: &str) -> [String; GLYPH_ROWS] {
    let mut rows: [String; GLYPH_ROWS] = Default::default();
    for (index, ch) in text.chars().enumerate() {
        let cells = glyph(ch);
        for (row, cell) in rows.iter_mut().zip(cells) {
            if index > 0 && ch != '.' {
                row.push(' ');
            }
            row.push_str(&cell);
        }
    }
    rows
}
