//! Glyph classification tables
//!
//! Every table is a `match` over literal characters, so membership tests
//! compile to constant lookups and nothing is built at runtime.

use super::{Corner, Dialect};

/// ASCII glyphs with diagram meaning. Space is reserved too.
pub const ASCII_RESERVED: &[char] = &[
    '-', '_', '|', 'v', '^', '>', '<', 'o', '*', '+', '.', '\'', '/', '\\', ')', '(', ' ',
];

/// Returns true if `ch` has diagram meaning in the given dialect
pub fn is_reserved(ch: char, dialect: Dialect) -> bool {
    match dialect {
        Dialect::Ascii => ASCII_RESERVED.contains(&ch),
        Dialect::Unicode => ch == ' ' || unicode_equivalent(ch).is_some(),
    }
}

/// Characters where several segments may meet
pub fn is_joint(ch: char) -> bool {
    matches!(ch, '.' | '\'' | '+' | '*' | 'o')
}

/// Circle glyphs
pub fn is_dot(ch: char) -> bool {
    matches!(ch, 'o' | '*')
}

/// Arrowhead glyphs
pub fn is_triangle(ch: char) -> bool {
    matches!(ch, '^' | 'v' | '<' | '>')
}

/// Glyphs that only read as diagram syntax when given room on either side
pub fn is_wide(ch: char) -> bool {
    matches!(ch, 'o' | '*' | 'v' | '^' | ')' | '(' | '.')
}

/// Block glyphs drawn as filled cells instead of text
pub fn is_shade(ch: char) -> bool {
    matches!(ch, '▉' | '▓' | '▒' | '░')
}

/// ASCII equivalent of a box-drawing glyph, if it has one
///
/// Corners, tees and crosses all collapse to `+`. Line and corner detection
/// in the Unicode dialect read [`box_arms`] and [`arc_corner`] instead, so
/// the collapse only matters to arrowhead walls and colouring.
pub fn unicode_equivalent(ch: char) -> Option<char> {
    let ascii = match ch {
        '│' | '╷' | '╵' => '|',
        '─' | '╶' | '╴' => '-',
        '┌' | '┐' | '└' | '┘' | '╭' | '╮' | '╰' | '╯' | '┬' | '┴' | '┤' | '├' | '┼' => '+',
        '▼' => 'v',
        '▲' => '^',
        '◀' | '◄' => '<',
        '▶' | '►' => '>',
        '●' => '*',
        '○' => 'o',
        _ => return None,
    };
    Some(ascii)
}

/// Directions a box-drawing glyph reaches out of its cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Arms {
    pub north: bool,
    pub south: bool,
    pub east: bool,
    pub west: bool,
}

impl Arms {
    const fn new(north: bool, south: bool, east: bool, west: bool) -> Self {
        Self {
            north,
            south,
            east,
            west,
        }
    }
}

/// Arms of a box-drawing line, corner, tee or cross
pub fn box_arms(ch: char) -> Option<Arms> {
    let arms = match ch {
        '─' => Arms::new(false, false, true, true),
        '╶' => Arms::new(false, false, true, false),
        '╴' => Arms::new(false, false, false, true),
        '│' => Arms::new(true, true, false, false),
        '╷' => Arms::new(false, true, false, false),
        '╵' => Arms::new(true, false, false, false),
        '┌' | '╭' => Arms::new(false, true, true, false),
        '┐' | '╮' => Arms::new(false, true, false, true),
        '└' | '╰' => Arms::new(true, false, true, false),
        '┘' | '╯' => Arms::new(true, false, false, true),
        '┬' => Arms::new(false, true, true, true),
        '┴' => Arms::new(true, false, true, true),
        '├' => Arms::new(true, true, true, false),
        '┤' => Arms::new(true, true, false, true),
        '┼' => Arms::new(true, true, true, true),
        _ => return None,
    };
    Some(arms)
}

/// Quadrant drawn by an arc corner glyph
pub fn arc_corner(ch: char) -> Option<Corner> {
    match ch {
        '╭' => Some(Corner::NorthWest),
        '╮' => Some(Corner::NorthEast),
        '╯' => Some(Corner::SouthEast),
        '╰' => Some(Corner::SouthWest),
        _ => None,
    }
}

/// The glyph the detectors see for a graphics cell holding `ch`
pub fn normalize(ch: char, dialect: Dialect) -> char {
    match dialect {
        Dialect::Ascii => ch,
        Dialect::Unicode => unicode_equivalent(ch).unwrap_or(ch),
    }
}
