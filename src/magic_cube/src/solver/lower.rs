use super::{Keep, SolutionItem, SolveError, Solver};
use crate::{
    algorithms::{
        LOWER_CORNER_TWIST_BY_LEFT, LOWER_CORNER_TWIST_BY_RIGHT, LOWER_CORNERS_CYCLE_BY_LEFT,
        LOWER_CORNERS_CYCLE_BY_RIGHT, LOWER_EDGE_FLIP, LOWER_EDGES_CYCLE,
        are_lower_corners_on_point, are_lower_corners_on_start, are_lower_layers_intact,
        is_lower_cross_on_start, is_solved_lower_cross,
    },
    command::{Command, Move},
    cube::Cube,
    movement::{Layer, TurnTo},
};

const TOP_LEFT: Command = Command::from_static(&[Move::Rotation(TurnTo::Left, Layer::First)]);
const TOP_RIGHT: Command = Command::from_static(&[Move::Rotation(TurnTo::Right, Layer::First)]);

const LOWER_CROSS_TO_START: [Command; 5] = [
    TOP_LEFT,
    TOP_RIGHT,
    Command::from_static(&[Move::Turn(TurnTo::Left)]),
    Command::from_static(&[Move::Turn(TurnTo::Right)]),
    LOWER_EDGES_CYCLE,
];

const LOWER_CROSS_TO_POINT: [Command; 3] = [TOP_LEFT, TOP_RIGHT, LOWER_EDGE_FLIP];

const LOWER_CORNERS_TO_START: [Command; 4] = [
    TOP_LEFT,
    TOP_RIGHT,
    LOWER_CORNERS_CYCLE_BY_LEFT,
    LOWER_CORNERS_CYCLE_BY_RIGHT,
];

const LOWER_CORNERS_TO_POINT: [Command; 4] = [
    TOP_LEFT,
    TOP_RIGHT,
    LOWER_CORNER_TWIST_BY_LEFT,
    LOWER_CORNER_TWIST_BY_RIGHT,
];

impl Solver {
    /// Solves the last layer. The cube must already be flipped so that the
    /// unsolved layer is on top.
    pub fn solve_lower_layer(&self, cube: &Cube) -> Result<SolutionItem, SolveError> {
        let cross = Self::timed("lower cross", || self.solve_lower_cross(cube))?;
        let corners = Self::timed("lower corners", || {
            self.solve_lower_corners(&cross.goal_state)
        })?;
        Ok(cross.then(corners))
    }

    pub fn solve_lower_cross(&self, cube: &Cube) -> Result<SolutionItem, SolveError> {
        let start = self.move_lower_cross_to_start(cube)?;
        let point = self.move_lower_cross_to_point(&start.goal_state)?;
        Ok(start.then(point))
    }

    pub fn move_lower_cross_to_start(&self, cube: &Cube) -> Result<SolutionItem, SolveError> {
        let keep = Keep::new(cube).layers(cube, &[are_lower_layers_intact]);
        self.find(
            "place the lower edges",
            cube,
            &LOWER_CROSS_TO_START,
            |cube| is_lower_cross_on_start(cube) && keep.holds(cube),
        )
    }

    pub fn move_lower_cross_to_point(&self, cube: &Cube) -> Result<SolutionItem, SolveError> {
        let keep =
            Keep::new(cube).layers(cube, &[are_lower_layers_intact, is_lower_cross_on_start]);
        self.find(
            "orient the lower edges",
            cube,
            &LOWER_CROSS_TO_POINT,
            |cube| is_solved_lower_cross(cube) && keep.holds(cube),
        )
    }

    pub fn solve_lower_corners(&self, cube: &Cube) -> Result<SolutionItem, SolveError> {
        let start = self.move_lower_corners_to_start(cube)?;
        let point = self.move_lower_corners_to_point(&start.goal_state)?;
        Ok(start.then(point))
    }

    pub fn move_lower_corners_to_start(&self, cube: &Cube) -> Result<SolutionItem, SolveError> {
        let keep = Keep::new(cube).layers(
            cube,
            &[
                are_lower_layers_intact,
                is_lower_cross_on_start,
                is_solved_lower_cross,
            ],
        );
        self.find(
            "place the lower corners",
            cube,
            &LOWER_CORNERS_TO_START,
            |cube| are_lower_corners_on_start(cube) && keep.holds(cube),
        )
    }

    pub fn move_lower_corners_to_point(&self, cube: &Cube) -> Result<SolutionItem, SolveError> {
        let keep = Keep::new(cube).layers(
            cube,
            &[
                are_lower_layers_intact,
                is_lower_cross_on_start,
                is_solved_lower_cross,
            ],
        );
        self.find(
            "orient the lower corners",
            cube,
            &LOWER_CORNERS_TO_POINT,
            |cube| are_lower_corners_on_point(cube) && keep.holds(cube),
        )
    }
}
