use fastrand::Rng;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    command::Move,
    cube::Cube,
    movement::{Layer, Spin, TurnTo},
};

pub const DEFAULT_SCRAMBLE_LENGTH: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrambleConfig {
    /// The number of layer moves in a scramble.
    pub length: usize,
    /// Makes scrambles reproducible when set.
    pub seed: Option<u64>,
}

impl Default for ScrambleConfig {
    fn default() -> Self {
        ScrambleConfig {
            length: DEFAULT_SCRAMBLE_LENGTH,
            seed: None,
        }
    }
}

/// Produces solved and scrambled cubes. Scrambles only ever apply legal
/// moves to the solved cube, so every cube it returns can be solved.
#[derive(Debug, Clone)]
pub struct CubeGenerator {
    rng: Rng,
    length: usize,
}

impl Default for CubeGenerator {
    fn default() -> Self {
        CubeGenerator::new(Rng::new())
    }
}

impl CubeGenerator {
    #[must_use]
    pub fn new(rng: Rng) -> Self {
        CubeGenerator {
            rng,
            length: DEFAULT_SCRAMBLE_LENGTH,
        }
    }

    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        CubeGenerator::new(Rng::with_seed(seed))
    }

    #[must_use]
    pub fn from_config(config: ScrambleConfig) -> Self {
        let rng = config.seed.map_or_else(Rng::new, Rng::with_seed);
        CubeGenerator::new(rng).with_length(config.length)
    }

    #[must_use]
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    #[must_use]
    pub fn solved_cube(&self) -> Cube {
        Cube::solved()
    }

    pub fn random_cube(&mut self) -> Cube {
        self.scramble().1
    }

    /// Returns the moves of a fresh scramble and the cube they produce. Every
    /// second layer move is followed by a random reorientation.
    pub fn scramble(&mut self) -> (Vec<Move>, Cube) {
        let mut moves = Vec::with_capacity(self.length + self.length / 2);
        for i in 0..self.length {
            moves.push(self.random_layer_move());
            if i % 2 == 1 {
                moves.push(self.random_reorientation());
            }
        }
        let cube = moves
            .iter()
            .fold(Cube::solved(), |cube, mv| mv.apply(&cube));
        debug!("Scrambled the cube with {} moves", moves.len());
        (moves, cube)
    }

    fn random_spin(&mut self) -> Spin {
        Spin::ALL[self.rng.usize(..Spin::ALL.len())]
    }

    fn random_direction(&mut self) -> TurnTo {
        TurnTo::ALL[self.rng.usize(..TurnTo::ALL.len())]
    }

    fn random_layer_move(&mut self) -> Move {
        if self.rng.bool() {
            Move::RotateFace(self.random_spin())
        } else {
            let direction = self.random_direction();
            Move::Rotation(direction, Layer::ALL[self.rng.usize(..Layer::ALL.len())])
        }
    }

    fn random_reorientation(&mut self) -> Move {
        if self.rng.bool() {
            Move::TurnToCorner(self.random_spin())
        } else {
            Move::Turn(self.random_direction())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_scrambles_repeat() {
        let mut first = CubeGenerator::with_seed(7);
        let mut second = CubeGenerator::with_seed(7);
        assert_eq!(first.scramble(), second.scramble());
        assert_eq!(first.random_cube(), second.random_cube());
    }

    #[test]
    fn scramble_length() {
        let (moves, cube) = CubeGenerator::with_seed(1).scramble();
        assert_eq!(moves.len(), 60);
        assert_eq!(
            moves.iter().filter(|mv| !mv.is_reorientation()).count(),
            DEFAULT_SCRAMBLE_LENGTH
        );
        assert!(!cube.is_solved());

        let (moves, cube) = CubeGenerator::with_seed(1).with_length(0).scramble();
        assert!(moves.is_empty());
        assert!(cube.is_solved());
    }
}
