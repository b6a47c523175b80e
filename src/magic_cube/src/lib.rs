#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

//! A 3x3x3 cube model with a layer-by-layer solver.
//!
//! The solver works the way a person would: it reorients the cube so that
//! every sub-problem can be phrased relative to the front face, then uses
//! small breadth-first searches over hand-written macros to bring each piece
//! into place.

pub mod algorithms;
pub mod api;
pub mod command;
pub mod cube;
pub mod generator;
pub mod movement;
pub mod path_search;
pub mod solver;

pub use api::{Playback, RubikCubeApi, SolveFailure, rotation_count, same_cube};
pub use command::{Command, Move};
pub use cube::{Cell, CellColor, Cube, CubeError, Face, Side};
pub use generator::{CubeGenerator, ScrambleConfig};
pub use movement::{Layer, MoveError, Spin, TurnTo};
pub use path_search::{PathSearcher, SearchConfig, SearchError, SearchResult};
pub use solver::{SearchStats, SolutionItem, SolveError, Solver, SolverConfig};

#[macro_export]
macro_rules! start {
    ($msg:expr) => {
        concat!("⏳ ", $msg)
    };
}

#[macro_export]
macro_rules! working {
    ($msg:expr) => {
        concat!("🛠  ", $msg)
    };
}

#[macro_export]
macro_rules! success {
    ($msg:expr) => {
        concat!("✅ ", $msg)
    };
}
