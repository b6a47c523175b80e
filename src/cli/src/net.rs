//! Draws a cube unfolded onto the terminal:
//!
//! ```text
//!       W W W
//!       W W W
//!       W W W
//! R R R G G G O O O Y Y Y
//! R R R G G G O O O Y Y Y
//! R R R G G G O O O Y Y Y
//!       B B B
//!       B B B
//!       B B B
//! ```

use itertools::Itertools;
use magic_cube::{CellColor, Cube, Face, Side};
use owo_colors::OwoColorize;

const BELT: [Side; 4] = [Side::Left, Side::Front, Side::Right, Side::Back];

fn paint(color: CellColor, colored: bool) -> String {
    let symbol = color.symbol();
    if !colored {
        return symbol.to_string();
    }
    match color {
        CellColor::Green => symbol.green().bold().to_string(),
        CellColor::White => symbol.white().bold().to_string(),
        CellColor::Orange => symbol.truecolor(255, 140, 0).bold().to_string(),
        CellColor::Yellow => symbol.yellow().bold().to_string(),
        CellColor::Blue => symbol.blue().bold().to_string(),
        CellColor::Red => symbol.red().bold().to_string(),
    }
}

fn face_row(face: &Face, row: usize, colored: bool) -> String {
    face.cells()
        .filter(|cell| cell.row == row)
        .map(|cell| paint(cell.color, colored))
        .join(" ")
}

pub fn render(cube: &Cube, colored: bool) -> String {
    // one face and its trailing space
    let indent = " ".repeat(6);
    let mut lines = vec![];

    for row in 1..=3 {
        lines.push(format!("{indent}{}", face_row(&cube[Side::Top], row, colored)));
    }
    for row in 1..=3 {
        lines.push(
            BELT.iter()
                .map(|&side| face_row(&cube[side], row, colored))
                .join(" "),
        );
    }
    for row in 1..=3 {
        lines.push(format!("{indent}{}", face_row(&cube[Side::Down], row, colored)));
    }

    lines.join("\n")
}
