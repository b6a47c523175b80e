//! The entry point for front ends: hand out cubes, solve them, and flatten
//! the solution into single moves that can be played back one at a time.

use log::warn;
use thiserror::Error;

use crate::{
    command::Move,
    cube::{Cube, Side},
    generator::CubeGenerator,
    movement::{Spin, TurnTo},
    solver::{SolveError, Solver, SolverConfig},
};

/// The only error a well formed solve request can produce.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("The cube could not be solved")]
pub struct SolveFailure {
    #[from]
    source: SolveError,
}

impl SolveFailure {
    #[must_use]
    pub fn reason(&self) -> &SolveError {
        &self.source
    }
}

/// A solution flattened into single moves. `states[0]` is the cube that was
/// solved and `states[i + 1]` is `actions[i]` applied to `states[i]`.
#[derive(Debug, Clone)]
pub struct Playback {
    pub actions: Vec<Move>,
    pub states: Vec<Cube>,
    /// How many actions changed the puzzle rather than the viewpoint.
    pub rotation_count: usize,
}

impl Playback {
    #[must_use]
    pub fn final_state(&self) -> &Cube {
        // `states` always holds at least the starting cube
        &self.states[self.states.len() - 1]
    }
}

#[derive(Debug, Clone, Default)]
pub struct RubikCubeApi {
    generator: CubeGenerator,
    solver: Solver,
}

impl RubikCubeApi {
    #[must_use]
    pub fn new(generator: CubeGenerator, config: SolverConfig) -> Self {
        RubikCubeApi {
            generator,
            solver: Solver::new(config),
        }
    }

    #[must_use]
    pub fn solved_cube(&self) -> Cube {
        self.generator.solved_cube()
    }

    pub fn random_cube(&mut self) -> Cube {
        self.generator.random_cube()
    }

    #[must_use]
    pub fn solver(&self) -> &Solver {
        &self.solver
    }

    pub fn solve(&self, cube: &Cube) -> Result<Playback, SolveFailure> {
        let solution = self.solver.solve_cube(cube).inspect_err(|err| {
            warn!("Giving up on the cube: {err}");
        })?;

        let actions: Vec<Move> = solution
            .actions
            .iter()
            .flat_map(|command| command.moves().iter().copied())
            .collect();
        let mut states = Vec::with_capacity(actions.len() + 1);
        states.push(*cube);
        for action in &actions {
            let next = action.apply(&states[states.len() - 1]);
            states.push(next);
        }

        Ok(Playback {
            rotation_count: rotation_count(&states),
            actions,
            states,
        })
    }
}

/// Counts the consecutive pairs of states that are not the same physical
/// cube.
#[must_use]
pub fn rotation_count(states: &[Cube]) -> usize {
    states
        .windows(2)
        .filter(|pair| !same_cube(&pair[0], &pair[1]))
        .count()
}

/// Whether `b` is `a` seen from another side. Each face of `b` is brought
/// to the front in turn; only those matching the front center of `a` are
/// spun about the front axis and compared.
#[must_use]
pub fn same_cube(a: &Cube, b: &Cube) -> bool {
    let front = a.center(Side::Front);
    let left = b.turn(TurnTo::Left);
    let candidates = [
        *b,
        left,
        left.turn(TurnTo::Left),
        b.turn(TurnTo::Right),
        b.turn(TurnTo::Up),
        b.turn(TurnTo::Down),
    ];

    candidates
        .iter()
        .filter(|candidate| candidate.center(Side::Front) == front)
        .any(|candidate| {
            let mut spun = *candidate;
            for _ in 0..4 {
                if spun == *a {
                    return true;
                }
                spun = spun.turn_to_corner(Spin::Right);
            }
            false
        })
}
