use std::{borrow::Cow, fmt};

use itertools::Itertools;

use crate::{
    cube::Cube,
    movement::{Layer, Spin, TurnTo},
};

/// An elementary operation of the move algebra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Turn(TurnTo),
    Rotation(TurnTo, Layer),
    TurnToCorner(Spin),
    RotateFace(Spin),
}

impl Move {
    #[must_use]
    pub fn apply(self, cube: &Cube) -> Cube {
        match self {
            Move::Turn(direction) => cube.turn(direction),
            Move::Rotation(direction, layer) => cube.rotation(direction, layer),
            Move::TurnToCorner(spin) => cube.turn_to_corner(spin),
            Move::RotateFace(spin) => cube.rotate_face(spin),
        }
    }

    /// Whether this only changes the viewpoint, not the puzzle.
    #[must_use]
    pub fn is_reorientation(self) -> bool {
        matches!(self, Move::Turn(_) | Move::TurnToCorner(_))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Turn(direction) => write!(f, "T{direction}"),
            Move::Rotation(direction, layer) => write!(f, "R{direction}{layer}"),
            Move::TurnToCorner(spin) => write!(f, "K{spin}"),
            Move::RotateFace(spin) => write!(f, "F{spin}"),
        }
    }
}

/// A macro: an ordered list of moves applied left to right, with an
/// optional label for tracing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Command {
    label: Option<&'static str>,
    moves: Cow<'static, [Move]>,
}

impl Command {
    #[must_use]
    pub const fn labeled(label: &'static str, moves: &'static [Move]) -> Command {
        Command {
            label: Some(label),
            moves: Cow::Borrowed(moves),
        }
    }

    #[must_use]
    pub const fn from_static(moves: &'static [Move]) -> Command {
        Command {
            label: None,
            moves: Cow::Borrowed(moves),
        }
    }

    #[must_use]
    pub fn new(moves: Vec<Move>) -> Command {
        Command {
            label: None,
            moves: Cow::Owned(moves),
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: &'static str) -> Self {
        self.label = Some(label);
        self
    }

    #[must_use]
    pub fn turn(direction: TurnTo) -> Command {
        Move::Turn(direction).into()
    }

    #[must_use]
    pub fn rotation(direction: TurnTo, layer: Layer) -> Command {
        Move::Rotation(direction, layer).into()
    }

    #[must_use]
    pub fn turn_to_corner(spin: Spin) -> Command {
        Move::TurnToCorner(spin).into()
    }

    #[must_use]
    pub fn rotate_face(spin: Spin) -> Command {
        Move::RotateFace(spin).into()
    }

    #[must_use]
    pub fn label(&self) -> Option<&'static str> {
        self.label
    }

    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    #[must_use]
    pub fn execute(&self, cube: &Cube) -> Cube {
        self.moves.iter().fold(*cube, |cube, mv| mv.apply(&cube))
    }
}

impl From<Move> for Command {
    fn from(mv: Move) -> Self {
        Command::new(vec![mv])
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let moves = self.moves.iter().join(" ");
        match self.label {
            Some(label) => write!(f, "{label} [{moves}]"),
            None => f.write_str(&moves),
        }
    }
}
