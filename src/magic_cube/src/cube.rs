use std::{fmt, ops::Index, str::FromStr};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CubeError {
    #[error("A face has exactly 9 cells but {0} were given")]
    WrongCellCount(usize),
    #[error("Cell ({row}, {column}) is outside of the face; rows and columns go from 1 to 3")]
    CellOutOfRange { row: usize, column: usize },
    #[error("Cell index {0} is outside of the face; indices go from 0 to 8")]
    IndexOutOfRange(usize),
    #[error("`{0}` is not a cell color; expected one of G, W, O, Y, B, R")]
    UnknownColor(char),
    #[error("Expected a single color letter but got `{0}`")]
    NotAColor(String),
    #[error("A cube has exactly 54 facelets but {0} were given")]
    WrongFaceletCount(usize),
}

/// The color of a single sticker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellColor {
    Green,
    White,
    Orange,
    Yellow,
    Blue,
    Red,
}

impl CellColor {
    pub const ALL: [CellColor; 6] = [
        CellColor::Green,
        CellColor::White,
        CellColor::Orange,
        CellColor::Yellow,
        CellColor::Blue,
        CellColor::Red,
    ];

    /// The single letter used in facelet strings.
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            CellColor::Green => 'G',
            CellColor::White => 'W',
            CellColor::Orange => 'O',
            CellColor::Yellow => 'Y',
            CellColor::Blue => 'B',
            CellColor::Red => 'R',
        }
    }
}

impl TryFrom<char> for CellColor {
    type Error = CubeError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol.to_ascii_uppercase() {
            'G' => Ok(CellColor::Green),
            'W' => Ok(CellColor::White),
            'O' => Ok(CellColor::Orange),
            'Y' => Ok(CellColor::Yellow),
            'B' => Ok(CellColor::Blue),
            'R' => Ok(CellColor::Red),
            _ => Err(CubeError::UnknownColor(symbol)),
        }
    }
}

impl FromStr for CellColor {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => CellColor::try_from(symbol),
            _ => Err(CubeError::NotAColor(s.to_owned())),
        }
    }
}

impl fmt::Display for CellColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The six fixed labels of the faces, relative to the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Front,
    Top,
    Right,
    Back,
    Down,
    Left,
}

impl Side {
    pub const ALL: [Side; 6] = [
        Side::Front,
        Side::Top,
        Side::Right,
        Side::Back,
        Side::Down,
        Side::Left,
    ];

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// The color this side has on the canonical solved cube.
    #[must_use]
    pub fn solved_color(self) -> CellColor {
        CellColor::ALL[self.index()]
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Side::Front => "Front",
            Side::Top => "Top",
            Side::Right => "Right",
            Side::Back => "Back",
            Side::Down => "Down",
            Side::Left => "Left",
        };
        f.write_str(name)
    }
}

/// One cell of a face, as seen by a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub row: usize,
    pub column: usize,
    pub color: CellColor,
}

fn flat_index(row: usize, column: usize) -> Result<usize, CubeError> {
    if (1..=3).contains(&row) && (1..=3).contains(&column) {
        Ok((row - 1) * 3 + (column - 1))
    } else {
        Err(CubeError::CellOutOfRange { row, column })
    }
}

/// A 3x3 grid of stickers. Rows and columns are numbered from 1, flat
/// indices from 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Face {
    cells: [CellColor; 9],
}

impl Face {
    pub fn new(cells: &[CellColor]) -> Result<Face, CubeError> {
        let cells = <[CellColor; 9]>::try_from(cells)
            .map_err(|_| CubeError::WrongCellCount(cells.len()))?;
        Ok(Face { cells })
    }

    #[must_use]
    pub const fn filled(color: CellColor) -> Face {
        Face { cells: [color; 9] }
    }

    pub fn at(&self, index: usize) -> Result<CellColor, CubeError> {
        self.cells
            .get(index)
            .copied()
            .ok_or(CubeError::IndexOutOfRange(index))
    }

    pub fn get(&self, row: usize, column: usize) -> Result<CellColor, CubeError> {
        Ok(self.cells[flat_index(row, column)?])
    }

    pub fn set(&mut self, row: usize, column: usize, color: CellColor) -> Result<(), CubeError> {
        self.cells[flat_index(row, column)?] = color;
        Ok(())
    }

    /// Unchecked access for the fixed coordinates used by the move algebra
    /// and the goal predicates.
    pub(crate) fn cell(&self, row: usize, column: usize) -> CellColor {
        debug_assert!((1..=3).contains(&row) && (1..=3).contains(&column));
        self.cells[(row - 1) * 3 + (column - 1)]
    }

    pub(crate) fn row(&self, row: usize) -> [CellColor; 3] {
        let start = (row - 1) * 3;
        [self.cells[start], self.cells[start + 1], self.cells[start + 2]]
    }

    pub(crate) fn set_row(&mut self, row: usize, colors: [CellColor; 3]) {
        let start = (row - 1) * 3;
        self.cells[start..start + 3].copy_from_slice(&colors);
    }

    /// The center never moves, so it names the color the face stands for.
    #[must_use]
    pub fn center_color(&self) -> CellColor {
        self.cells[4]
    }

    #[must_use]
    pub fn is_fill(&self, color: CellColor) -> bool {
        self.cells.iter().all(|&cell| cell == color)
    }

    #[must_use]
    pub fn is_uniform(&self) -> bool {
        self.is_fill(self.center_color())
    }

    /// Returns the face turned a quarter. Clockwise sends (i, j) to
    /// (j, 4 - i), counter-clockwise sends it to (4 - j, i).
    #[must_use]
    pub fn rotate_quarter(&self, clockwise: bool) -> Face {
        let mut cells = self.cells;
        for row in 0..3 {
            for column in 0..3 {
                let (new_row, new_column) = if clockwise {
                    (column, 2 - row)
                } else {
                    (2 - column, row)
                };
                cells[new_row * 3 + new_column] = self.cells[row * 3 + column];
            }
        }
        Face { cells }
    }

    #[must_use]
    pub fn rotate_half(&self) -> Face {
        self.rotate_quarter(true).rotate_quarter(true)
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().enumerate().map(|(index, &color)| Cell {
            row: index / 3 + 1,
            column: index % 3 + 1,
            color,
        })
    }

    #[must_use]
    pub fn as_slice(&self) -> &[CellColor] {
        &self.cells
    }
}

impl From<[CellColor; 9]> for Face {
    fn from(cells: [CellColor; 9]) -> Self {
        Face { cells }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for color in &self.cells {
            write!(f, "{color}")?;
        }
        Ok(())
    }
}

/// A whole cube. Every move returns a new value, so a cube can be shared
/// freely between search nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cube {
    faces: [Face; 6],
}

impl Cube {
    #[must_use]
    pub fn new(front: Face, top: Face, right: Face, back: Face, down: Face, left: Face) -> Cube {
        Cube {
            faces: [front, top, right, back, down, left],
        }
    }

    pub(crate) fn from_faces(faces: [Face; 6]) -> Cube {
        Cube { faces }
    }

    #[must_use]
    pub fn solved() -> Cube {
        Cube {
            faces: Side::ALL.map(|side| Face::filled(side.solved_color())),
        }
    }

    #[must_use]
    pub fn face(&self, side: Side) -> &Face {
        &self.faces[side.index()]
    }

    pub(crate) fn face_array(&self) -> [Face; 6] {
        self.faces
    }

    pub fn color(&self, side: Side, row: usize, column: usize) -> Result<CellColor, CubeError> {
        self.face(side).get(row, column)
    }

    pub(crate) fn cell(&self, side: Side, row: usize, column: usize) -> CellColor {
        self.face(side).cell(row, column)
    }

    #[must_use]
    pub fn center(&self, side: Side) -> CellColor {
        self.face(side).center_color()
    }

    /// Returns a copy of the cube with one cell recolored.
    pub fn with_color(
        &self,
        side: Side,
        row: usize,
        column: usize,
        color: CellColor,
    ) -> Result<Cube, CubeError> {
        let mut faces = self.faces;
        faces[side.index()].set(row, column, color)?;
        Ok(Cube { faces })
    }

    pub fn faces(&self) -> impl Iterator<Item = (Side, &Face)> {
        Side::ALL.into_iter().zip(self.faces.iter())
    }

    /// Every face is a single color.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.faces.iter().all(Face::is_uniform)
    }
}

impl Index<Side> for Cube {
    type Output = Face;

    fn index(&self, side: Side) -> &Self::Output {
        self.face(side)
    }
}

/// Writes the 54 facelets face by face (Front, Top, Right, Back, Down,
/// Left), separated by `/`.
impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, face) in self.faces.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            write!(f, "{face}")?;
        }
        Ok(())
    }
}

impl FromStr for Cube {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let colors = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .map(CellColor::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        if colors.len() != 54 {
            return Err(CubeError::WrongFaceletCount(colors.len()));
        }

        let mut faces = [Face::filled(CellColor::Green); 6];
        for (face, chunk) in faces.iter_mut().zip(colors.chunks_exact(9)) {
            *face = Face::new(chunk)?;
        }
        Ok(Cube { faces })
    }
}
