//! The move algebra. Every operation takes a cube by reference and returns a
//! brand new one.

use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::cube::{Cube, Face, Side};

/// The direction of a whole-cube turn or a layer rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnTo {
    Left,
    Right,
    Up,
    Down,
}

impl TurnTo {
    pub const ALL: [TurnTo; 4] = [TurnTo::Left, TurnTo::Right, TurnTo::Up, TurnTo::Down];

    #[must_use]
    pub fn is_horizontal(self) -> bool {
        matches!(self, TurnTo::Left | TurnTo::Right)
    }

    pub(crate) fn symbol(self) -> char {
        match self {
            TurnTo::Left => 'L',
            TurnTo::Right => 'R',
            TurnTo::Up => 'U',
            TurnTo::Down => 'D',
        }
    }
}

impl FromStr for TurnTo {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "L" | "Left" | "left" => Ok(TurnTo::Left),
            "R" | "Right" | "right" => Ok(TurnTo::Right),
            "U" | "Up" | "up" => Ok(TurnTo::Up),
            "D" | "Down" | "down" => Ok(TurnTo::Down),
            _ => Err(MoveError::UnknownDirection(s.to_owned())),
        }
    }
}

impl fmt::Display for TurnTo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The horizontal half of [`TurnTo`]. Operations that only make sense left
/// or right take this instead, so a vertical request cannot be expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Spin {
    Left,
    Right,
}

impl Spin {
    pub const ALL: [Spin; 2] = [Spin::Left, Spin::Right];
}

impl From<Spin> for TurnTo {
    fn from(spin: Spin) -> Self {
        match spin {
            Spin::Left => TurnTo::Left,
            Spin::Right => TurnTo::Right,
        }
    }
}

impl TryFrom<TurnTo> for Spin {
    type Error = MoveError;

    fn try_from(direction: TurnTo) -> Result<Self, Self::Error> {
        match direction {
            TurnTo::Left => Ok(Spin::Left),
            TurnTo::Right => Ok(Spin::Right),
            TurnTo::Up | TurnTo::Down => Err(MoveError::VerticalSpin(direction)),
        }
    }
}

impl fmt::Display for Spin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        TurnTo::from(*self).fmt(f)
    }
}

/// One of the three slices along an axis. `First` is the top row for
/// horizontal rotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    First,
    Second,
    Third,
}

impl Layer {
    pub const ALL: [Layer; 3] = [Layer::First, Layer::Second, Layer::Third];

    /// The 1-based row this layer covers on a side face.
    pub(crate) fn row(self) -> usize {
        match self {
            Layer::First => 1,
            Layer::Second => 2,
            Layer::Third => 3,
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.row())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("Only left and right are allowed here, got {0}")]
    VerticalSpin(TurnTo),
    #[error("Unknown direction `{0}`")]
    UnknownDirection(String),
}

const HORIZONTAL_CYCLE: [Side; 4] = [Side::Front, Side::Left, Side::Back, Side::Right];
const VERTICAL_CYCLE: [Side; 4] = [Side::Front, Side::Top, Side::Back, Side::Down];

/// The side whose content moves onto `cycle[i]`.
fn source(cycle: &[Side; 4], i: usize, forward: bool) -> Side {
    if forward {
        cycle[(i + 1) % 4]
    } else {
        cycle[(i + 3) % 4]
    }
}

impl Cube {
    /// Reorients the whole cube in hand. No sticker changes its place
    /// relative to the others.
    #[must_use]
    pub fn turn(&self, direction: TurnTo) -> Cube {
        let old = self.face_array();
        let mut new = old;
        let at = |side: Side| old[side.index()];

        if direction.is_horizontal() {
            let forward = direction == TurnTo::Right;
            for (i, side) in HORIZONTAL_CYCLE.iter().enumerate() {
                new[side.index()] = at(source(&HORIZONTAL_CYCLE, i, forward));
            }
            new[Side::Top.index()] = at(Side::Top).rotate_quarter(direction == TurnTo::Left);
            new[Side::Down.index()] = at(Side::Down).rotate_quarter(direction == TurnTo::Right);
        } else {
            let forward = direction == TurnTo::Down;
            for (i, side) in VERTICAL_CYCLE.iter().enumerate() {
                new[side.index()] = at(source(&VERTICAL_CYCLE, i, forward));
            }
            // The back is read from behind, so whatever crosses it flips.
            let flip = |face: &mut Face| *face = face.rotate_half();
            flip(&mut new[Side::Back.index()]);
            match direction {
                TurnTo::Down => flip(&mut new[Side::Top.index()]),
                _ => flip(&mut new[Side::Down.index()]),
            }
            new[Side::Right.index()] = at(Side::Right).rotate_quarter(direction == TurnTo::Up);
            new[Side::Left.index()] = at(Side::Left).rotate_quarter(direction == TurnTo::Down);
        }

        Cube::from_faces(new)
    }

    /// Turns a single physical layer a quarter.
    #[must_use]
    pub fn rotation(&self, direction: TurnTo, layer: Layer) -> Cube {
        match direction {
            TurnTo::Left | TurnTo::Right => self.horizontal_rotation(direction, layer),
            TurnTo::Up => self
                .turn_to_corner(Spin::Right)
                .horizontal_rotation(TurnTo::Right, layer)
                .turn_to_corner(Spin::Left),
            TurnTo::Down => self
                .turn_to_corner(Spin::Right)
                .horizontal_rotation(TurnTo::Left, layer)
                .turn_to_corner(Spin::Left),
        }
    }

    fn horizontal_rotation(&self, direction: TurnTo, layer: Layer) -> Cube {
        let old = self.face_array();
        let mut new = old;

        match layer {
            Layer::First => {
                new[Side::Top.index()] =
                    old[Side::Top.index()].rotate_quarter(direction == TurnTo::Left);
            }
            Layer::Third => {
                new[Side::Down.index()] =
                    old[Side::Down.index()].rotate_quarter(direction == TurnTo::Right);
            }
            Layer::Second => {}
        }

        let row = layer.row();
        let forward = direction == TurnTo::Right;
        for (i, side) in HORIZONTAL_CYCLE.iter().enumerate() {
            let from = source(&HORIZONTAL_CYCLE, i, forward);
            new[side.index()].set_row(row, old[from.index()].row(row));
        }

        Cube::from_faces(new)
    }

    /// Reorients the cube about the front axis, so that a vertical
    /// relationship becomes a horizontal one.
    #[must_use]
    pub fn turn_to_corner(&self, spin: Spin) -> Cube {
        self.turn(TurnTo::Down)
            .turn(spin.into())
            .turn(TurnTo::Up)
    }

    /// Turns the front face a quarter; `Spin::Right` is clockwise.
    #[must_use]
    pub fn rotate_face(&self, spin: Spin) -> Cube {
        self.turn(TurnTo::Down)
            .rotation(spin.into(), Layer::Third)
            .turn(TurnTo::Up)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spin_rejects_vertical_directions() {
        assert_eq!(Spin::try_from(TurnTo::Left), Ok(Spin::Left));
        assert_eq!(
            Spin::try_from(TurnTo::Up),
            Err(MoveError::VerticalSpin(TurnTo::Up))
        );
        assert_eq!(
            Spin::try_from(TurnTo::Down),
            Err(MoveError::VerticalSpin(TurnTo::Down))
        );
    }

    #[test]
    fn direction_parsing() {
        assert_eq!("U".parse::<TurnTo>(), Ok(TurnTo::Up));
        assert_eq!("left".parse::<TurnTo>(), Ok(TurnTo::Left));
        assert!("sideways".parse::<TurnTo>().is_err());
    }
}
