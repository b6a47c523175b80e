//! The layer-by-layer solving pipeline.
//!
//! Every phase is a pair of bounded searches: one that brings a piece to a
//! staging position below its slot, and one that finishes it from there. The
//! searches only see the front of the cube; the whole cube is turned between
//! the four sides.

mod lower;
mod middle;
mod upper;

use std::time::Instant;

use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    algorithms,
    command::{Command, Move},
    cube::{CellColor, Cube, Side},
    movement::TurnTo,
    path_search::{PathSearcher, SearchConfig, SearchError},
    start, success, working,
};

const FLIP: Command = Command::labeled(
    "flip the cube",
    &[Move::Turn(TurnTo::Up), Move::Turn(TurnTo::Up)],
);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error("Could not {phase}: {source}")]
    Search {
        phase: &'static str,
        #[source]
        source: SearchError,
    },
    #[error("Every phase finished but the cube is still not solved")]
    Unsolved,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub search: SearchConfig,
}

/// Diagnostics accumulated over the searches of a solution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub searches: usize,
    pub nodes_expanded: usize,
    pub peak_nodes: usize,
}

impl SearchStats {
    fn record(&mut self, expanded: usize) {
        self.searches += 1;
        self.nodes_expanded += expanded;
        self.peak_nodes = self.peak_nodes.max(expanded);
    }

    fn merge(&mut self, other: SearchStats) {
        self.searches += other.searches;
        self.nodes_expanded += other.nodes_expanded;
        self.peak_nodes = self.peak_nodes.max(other.peak_nodes);
    }
}

/// The commands of one or more phases and the cube they lead to.
#[derive(Debug, Clone)]
pub struct SolutionItem {
    pub actions: Vec<Command>,
    pub goal_state: Cube,
    pub stats: SearchStats,
}

impl SolutionItem {
    #[must_use]
    pub fn empty(cube: Cube) -> Self {
        SolutionItem {
            actions: vec![],
            goal_state: cube,
            stats: SearchStats::default(),
        }
    }

    /// Continues this solution with one that starts from its goal state.
    #[must_use]
    pub fn then(mut self, next: SolutionItem) -> Self {
        self.actions.extend(next.actions);
        self.goal_state = next.goal_state;
        self.stats.merge(next.stats);
        self
    }

    #[must_use]
    pub fn then_command(mut self, command: Command) -> Self {
        self.goal_state = command.execute(&self.goal_state);
        self.actions.push(command);
        self
    }

    /// The number of elementary moves over all actions.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.actions.iter().map(|command| command.moves().len()).sum()
    }
}

fn turned_left(cube: &Cube, times: usize) -> Cube {
    (0..times).fold(*cube, |cube, _| cube.turn(TurnTo::Left))
}

/// What a search has to leave alone: the orientation of the cube, the
/// neighbouring slots of the same kind that were already filled, and the
/// earlier layers that were already solved when the search started.
struct Keep {
    front: CellColor,
    slot: Option<fn(&Cube) -> bool>,
    solved_sides: Vec<usize>,
    layers: Vec<fn(&Cube) -> bool>,
}

impl Keep {
    fn new(cube: &Cube) -> Self {
        Keep {
            front: cube.center(Side::Front),
            slot: None,
            solved_sides: vec![],
            layers: vec![],
        }
    }

    fn slots(mut self, cube: &Cube, slot: fn(&Cube) -> bool) -> Self {
        self.slot = Some(slot);
        self.solved_sides = (1..4)
            .filter(|&times| slot(&turned_left(cube, times)))
            .collect();
        self
    }

    fn layers(mut self, cube: &Cube, layers: &[fn(&Cube) -> bool]) -> Self {
        self.layers = layers.iter().copied().filter(|layer| layer(cube)).collect();
        self
    }

    fn holds(&self, cube: &Cube) -> bool {
        cube.center(Side::Front) == self.front
            && self.slot.is_none_or(|slot| {
                self.solved_sides
                    .iter()
                    .all(|&times| slot(&turned_left(cube, times)))
            })
            && self.layers.iter().all(|layer| layer(cube))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Solver {
    searcher: PathSearcher,
}

impl Solver {
    #[must_use]
    pub fn new(config: SolverConfig) -> Self {
        Solver {
            searcher: PathSearcher::new(config.search),
        }
    }

    /// Solves the whole cube: the upper layer, the middle layer, then the
    /// cube is flipped over and the remaining layer is solved from the top.
    ///
    /// # Errors
    ///
    /// Fails when one of the searches runs out of states, which does not
    /// happen for cubes reachable from the solved state.
    pub fn solve_cube(&self, cube: &Cube) -> Result<SolutionItem, SolveError> {
        if algorithms::is_solved_cube(cube) {
            info!(success!("The cube is already solved"));
            return Ok(SolutionItem::empty(*cube));
        }

        info!(start!("Solving the cube"));
        let solve_start = Instant::now();

        let upper = self.solve_upper_layer(cube)?;
        let middle = self.solve_middle_layer(&upper.goal_state)?;
        let flipped = upper.then(middle).then_command(FLIP);
        let lower = self.solve_lower_layer(&flipped.goal_state)?;
        let solution = flipped.then(lower);

        if !algorithms::is_solved_cube(&solution.goal_state) {
            return Err(SolveError::Unsolved);
        }

        info!(
            success!("Solved in {:.3}s with {} commands ({} moves)"),
            solve_start.elapsed().as_secs_f64(),
            solution.actions.len(),
            solution.move_count()
        );
        debug!(
            working!("{} searches recorded {} states, at most {} at once"),
            solution.stats.searches,
            solution.stats.nodes_expanded,
            solution.stats.peak_nodes
        );
        Ok(solution)
    }

    /// Runs one search and wraps its result.
    fn find(
        &self,
        phase: &'static str,
        cube: &Cube,
        commands: &[Command],
        goal: impl Fn(&Cube) -> bool,
    ) -> Result<SolutionItem, SolveError> {
        let result = self
            .searcher
            .search(cube, commands, goal)
            .map_err(|source| SolveError::Search { phase, source })?;
        let mut stats = SearchStats::default();
        stats.record(result.expanded);
        Ok(SolutionItem {
            actions: result.path,
            goal_state: result.goal_state,
            stats,
        })
    }

    /// Applies `solve` to each of the four sides in turn, turning the whole
    /// cube left in between.
    fn solve_four_sides(
        &self,
        cube: &Cube,
        solve: impl Fn(&Self, &Cube) -> Result<SolutionItem, SolveError>,
    ) -> Result<SolutionItem, SolveError> {
        let mut solution = SolutionItem::empty(*cube);
        for side in 0..4 {
            if side > 0 {
                solution = solution.then_command(Command::turn(TurnTo::Left));
            }
            let next = solve(self, &solution.goal_state)?;
            solution = solution.then(next);
        }
        Ok(solution)
    }

    /// Skips a piece that is already in its slot, otherwise stages it and
    /// finishes it from there.
    fn find_and_move_if_needed(
        &self,
        cube: &Cube,
        on_point: fn(&Cube) -> bool,
        move_to_start: fn(&Self, &Cube) -> Result<SolutionItem, SolveError>,
        move_to_point: fn(&Self, &Cube) -> Result<SolutionItem, SolveError>,
    ) -> Result<SolutionItem, SolveError> {
        if on_point(cube) {
            return Ok(SolutionItem::empty(*cube));
        }
        let staged = move_to_start(self, cube)?;
        let finished = move_to_point(self, &staged.goal_state)?;
        Ok(staged.then(finished))
    }

    fn timed(
        name: &'static str,
        phase: impl FnOnce() -> Result<SolutionItem, SolveError>,
    ) -> Result<SolutionItem, SolveError> {
        info!(start!("Solving the {}"), name);
        let phase_start = Instant::now();
        let solution = phase()?;
        info!(
            success!("Solved the {} in {:.3}s with {} commands"),
            name,
            phase_start.elapsed().as_secs_f64(),
            solution.actions.len()
        );
        Ok(solution)
    }
}
