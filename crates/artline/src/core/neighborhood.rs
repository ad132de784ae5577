//! Local neighbourhood predicates shared by the classifier and the detectors

use super::{glyphs::is_joint, Glyphs, Position};

/// True if a `|` run passes through `pos`
pub fn part_of_vertical_line<G: Glyphs + ?Sized>(g: &G, pos: Position) -> bool {
    let this = g.glyph(pos);
    let north = g.glyph(pos.north());
    let south = g.glyph(pos.south());

    north == '|' || (this == '|' && is_joint(north)) || south == '|' || (this == '|' && is_joint(south))
}

/// True if a `/` or `\` run passes through `pos`
pub fn part_of_diagonal_line<G: Glyphs + ?Sized>(g: &G, pos: Position) -> bool {
    let n = g.glyph(pos.north());
    let s = g.glyph(pos.south());
    let ne = g.glyph(pos.north_east());
    let nw = g.glyph(pos.north_west());
    let se = g.glyph(pos.south_east());
    let sw = g.glyph(pos.south_west());

    match g.glyph(pos) {
        '/' => ne == '/' || sw == '/' || is_joint(ne) || is_joint(sw) || n == '\\' || s == '\\',
        '\\' => nw == '\\' || se == '\\' || is_joint(nw) || is_joint(se) || n == '/' || s == '/',
        _ => nw == '\\' || ne == '/' || sw == '/' || se == '\\',
    }
}

/// True for a `-` or `|` that could be an arm of a rounded corner
pub fn part_of_rounded_corner<G: Glyphs + ?Sized>(g: &G, pos: Position) -> bool {
    match g.glyph(pos) {
        '-' => {
            let west = g.glyph(pos.west());
            let east = g.glyph(pos.east());
            matches!(west, '.' | '\'') || matches!(east, '.' | '\'')
        }
        '|' => {
            g.glyph(pos.north_west()) == '.'
                || g.glyph(pos.north_east()) == '.'
                || g.glyph(pos.south_west()) == '\''
                || g.glyph(pos.south_east()) == '\''
        }
        _ => false,
    }
}

/// True if the glyph at `pos` joins something besides a horizontal line
pub fn has_line_above_or_below<G: Glyphs + ?Sized>(g: &G, pos: Position) -> bool {
    match g.glyph(pos) {
        '*' | 'o' | '+' | 'v' | '^' => part_of_diagonal_line(g, pos) || part_of_vertical_line(g, pos),
        '|' => part_of_vertical_line(g, pos) || part_of_rounded_corner(g, pos),
        '/' | '\\' => part_of_diagonal_line(g, pos),
        '-' => part_of_rounded_corner(g, pos),
        '(' | ')' => part_of_vertical_line(g, pos),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CellMap;

    fn cells(rows: &[&str]) -> CellMap {
        let mut map = CellMap::new();
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                if ch != ' ' {
                    map.insert(Position::new(x as i32, y as i32), ch);
                }
            }
        }
        map
    }

    #[test]
    fn test_vertical_through_joint() {
        let map = cells(&["+", "|"]);
        assert!(part_of_vertical_line(&map, Position::new(0, 0)));
        assert!(part_of_vertical_line(&map, Position::new(0, 1)));
    }

    #[test]
    fn test_lone_pipe_is_not_vertical() {
        let map = cells(&["|"]);
        assert!(!part_of_vertical_line(&map, Position::new(0, 0)));
    }

    #[test]
    fn test_diagonal_neighbors() {
        let map = cells(&[" /", "/ "]);
        assert!(part_of_diagonal_line(&map, Position::new(1, 0)));
        assert!(part_of_diagonal_line(&map, Position::new(0, 1)));

        let map = cells(&["\\ ", " v"]);
        assert!(part_of_diagonal_line(&map, Position::new(1, 1)));
    }

    #[test]
    fn test_rounded_corner_arms() {
        let map = cells(&[".-", "| "]);
        assert!(part_of_rounded_corner(&map, Position::new(1, 0)));

        let map = cells(&[" .", "|"]);
        assert!(part_of_rounded_corner(&map, Position::new(0, 1)));
    }

    #[test]
    fn test_has_line_above_or_below() {
        let map = cells(&["|", "o"]);
        assert!(has_line_above_or_below(&map, Position::new(0, 1)));

        let map = cells(&["-o-"]);
        assert!(!has_line_above_or_below(&map, Position::new(1, 0)));

        let map = cells(&["a"]);
        assert!(!has_line_above_or_below(&map, Position::new(0, 0)));
    }
}
