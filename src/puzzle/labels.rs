//! Button labels and their mapping onto the module's glyph textures

use super::{Selection, BUTTON_COUNT};
use crate::rules::DataType;

/// Glyph slots per row
pub const ROW_WIDTH: usize = 10;

/// Letters that have a glyph texture, in texture order
pub const ALPHABET: [char; 22] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'l', 'm', 'n', 'o', 'p', 'r', 's', 't', 'u', 'v',
    'w', 'x', 'y',
];

/// Number of font variants cycled by the animation
pub const FONT_COUNT: usize = 3;

/// Texture index of the blank glyph; it follows every font's letters
pub const BLANK_TEXTURE: usize = ALPHABET.len() * FONT_COUNT;

/// One glyph slot on the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    /// Index into [`ALPHABET`]
    Letter(u8),
    Blank,
}

impl Glyph {
    /// Glyph for a character; characters outside the alphabet are blank
    pub fn from_char(c: char) -> Self {
        let lower = c.to_ascii_lowercase();
        ALPHABET
            .iter()
            .position(|&letter| letter == lower)
            .map_or(Glyph::Blank, |i| Glyph::Letter(i as u8))
    }

    /// Texture to show for this glyph under a font offset
    pub fn texture_index(self, font_offset: usize) -> usize {
        match self {
            Glyph::Letter(i) => font_offset + usize::from(i),
            Glyph::Blank => BLANK_TEXTURE,
        }
    }
}

/// A full display frame: one row of glyphs per button
pub type GlyphRows = [[Glyph; ROW_WIDTH]; BUTTON_COUNT];

/// Text shown on a button row, padded to [`ROW_WIDTH`]
pub fn row_text(row: usize, state: bool, selection: &Selection, solved: bool) -> String {
    let text: String = match row {
        0 => data_type_label(selection),
        1 | 5 if solved => "Is".into(),
        2 if solved => "Convention".into(),
        3 if solved => String::new(),
        4 if solved => "Module".into(),
        6 if solved => "Solved".into(),
        1..=6 => toggle_label(row, state).into(),
        _ => unreachable!("row {} out of range", row),
    };
    format!("{:<width$}", text, width = ROW_WIDTH)
}

/// Label for a toggle button in a given state, without padding
pub fn toggle_label(button: usize, state: bool) -> &'static str {
    match button {
        1 if state => "PascalCase",
        1 => "camelCase",
        5 if state => "Alphameric",
        5 => "Numeric",
        _ => bool_label(state),
    }
}

fn bool_label(state: bool) -> &'static str {
    if state {
        "True"
    } else {
        "False"
    }
}

fn data_type_label(selection: &Selection) -> String {
    let mut name = selection.data_type.name().to_string();
    if selection.data_type == DataType::Constructor && selection.index < name.len() {
        name.remove(selection.index);
    }
    name
}

/// Map every row of the module onto glyphs
pub fn glyph_rows(states: &[bool; BUTTON_COUNT], selection: &Selection, solved: bool) -> GlyphRows {
    let mut rows = [[Glyph::Blank; ROW_WIDTH]; BUTTON_COUNT];
    for (row, glyphs) in rows.iter_mut().enumerate() {
        let text = row_text(row, states[row], selection, solved);
        for (slot, c) in glyphs.iter_mut().zip(text.chars()) {
            *slot = Glyph::from_char(c);
        }
    }
    rows
}
