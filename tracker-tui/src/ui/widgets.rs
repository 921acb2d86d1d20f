use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

/// `Key: label` pairs with the key in yellow. Disabled entries are greyed out.
pub fn key_hints(hints: &[(&'static str, &'static str, bool)]) -> Line<'static> {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (i, (key, label, enabled)) in hints.iter().enumerate() {
        let (key_style, label_style) = if *enabled {
            (Style::default().fg(Color::Yellow), Style::default())
        } else {
            (
                Style::default().fg(Color::DarkGray),
                Style::default().fg(Color::DarkGray),
            )
        };
        let separator = if i + 1 < hints.len() { "  " } else { "" };
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::styled(format!(": {label}{separator}"), label_style));
    }
    Line::from(spans)
}

/// Text with a block cursor between `before` and `after`.
pub fn with_cursor(before: &str, after: &str) -> String {
    format!("{before}█{after}")
}

// 3x5 glyphs, row-major, most significant bit is the top-left cell.
const GLYPH_ROWS: usize = 5;
const GLYPH_COLS: usize = 3;

fn glyph(c: char) -> u16 {
    match c {
        '0' => 0b111_101_101_101_111,
        '1' => 0b010_110_010_010_111,
        '2' => 0b111_001_111_100_111,
        '3' => 0b111_001_111_001_111,
        '4' => 0b101_101_111_001_001,
        '5' => 0b111_100_111_001_111,
        '6' => 0b111_100_111_101_111,
        '7' => 0b111_001_001_001_001,
        '8' => 0b111_101_111_101_111,
        '9' => 0b111_101_111_001_111,
        ':' => 0b000_010_000_010_000,
        _ => 0,
    }
}

/// Render digits and colons as five lines of block characters.
pub fn big_text(text: &str) -> Vec<String> {
    (0..GLYPH_ROWS)
        .map(|row| {
            text.chars()
                .map(|c| {
                    let bits = glyph(c);
                    (0..GLYPH_COLS)
                        .map(|col| {
                            let shift = GLYPH_ROWS * GLYPH_COLS - 1 - (row * GLYPH_COLS + col);
                            if bits >> shift & 1 == 1 {
                                "██"
                            } else {
                                "  "
                            }
                        })
                        .collect::<String>()
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}
