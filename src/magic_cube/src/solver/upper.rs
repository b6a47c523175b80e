use super::{Keep, SolutionItem, SolveError, Solver};
use crate::{
    algorithms::{
        UPPER_CORNER_DOWN_ORIENTED_REORIENT, UPPER_CORNER_FRONT_ORIENTED_TO_POINT,
        UPPER_CORNER_FRONT_TO_LOWER, UPPER_CORNER_RIGHT_ORIENTED_TO_POINT,
        UPPER_MIDDLE_FLIPPED_TO_POINT, UPPER_MIDDLE_RIGHT_TO_LOWER, UPPER_MIDDLE_TOP_TO_LOWER,
        is_solved_upper_cross, is_upper_corner_on_point, is_upper_corner_on_start,
        is_upper_middle_on_point, is_upper_middle_on_start,
    },
    command::{Command, Move},
    cube::Cube,
    movement::{Layer, Spin, TurnTo},
};

const UPPER_MIDDLE_TO_START: [Command; 6] = [
    Command::from_static(&[Move::Rotation(TurnTo::Left, Layer::Third)]),
    Command::from_static(&[Move::Rotation(TurnTo::Right, Layer::Third)]),
    Command::from_static(&[Move::Turn(TurnTo::Right)]),
    Command::from_static(&[Move::Turn(TurnTo::Left)]),
    UPPER_MIDDLE_TOP_TO_LOWER,
    UPPER_MIDDLE_RIGHT_TO_LOWER,
];

const UPPER_MIDDLE_TO_POINT: [Command; 2] = [
    Command::from_static(&[Move::RotateFace(Spin::Right)]),
    UPPER_MIDDLE_FLIPPED_TO_POINT,
];

const UPPER_CORNER_TO_START: [Command; 5] = [
    Command::from_static(&[Move::Rotation(TurnTo::Left, Layer::Third)]),
    Command::from_static(&[Move::Rotation(TurnTo::Right, Layer::Third)]),
    Command::from_static(&[Move::Turn(TurnTo::Left)]),
    Command::from_static(&[Move::Turn(TurnTo::Right)]),
    UPPER_CORNER_FRONT_TO_LOWER,
];

const UPPER_CORNER_TO_POINT: [Command; 3] = [
    UPPER_CORNER_FRONT_ORIENTED_TO_POINT,
    UPPER_CORNER_RIGHT_ORIENTED_TO_POINT,
    UPPER_CORNER_DOWN_ORIENTED_REORIENT,
];

impl Solver {
    pub fn solve_upper_layer(&self, cube: &Cube) -> Result<SolutionItem, SolveError> {
        let cross = Self::timed("upper cross", || self.solve_upper_cross(cube))?;
        let corners = Self::timed("upper corners", || {
            self.solve_upper_corners(&cross.goal_state)
        })?;
        Ok(cross.then(corners))
    }

    pub fn solve_upper_cross(&self, cube: &Cube) -> Result<SolutionItem, SolveError> {
        self.solve_four_sides(cube, Self::solve_upper_middle)
    }

    /// Puts the edge between the front and top faces in place.
    pub fn solve_upper_middle(&self, cube: &Cube) -> Result<SolutionItem, SolveError> {
        self.find_and_move_if_needed(
            cube,
            is_upper_middle_on_point,
            Self::move_upper_middle_to_start,
            Self::move_upper_middle_from_start_to_point,
        )
    }

    pub fn move_upper_middle_to_start(&self, cube: &Cube) -> Result<SolutionItem, SolveError> {
        let keep = Keep::new(cube).slots(cube, is_upper_middle_on_point);
        self.find(
            "stage an upper edge",
            cube,
            &UPPER_MIDDLE_TO_START,
            |cube| is_upper_middle_on_start(cube) && keep.holds(cube),
        )
    }

    pub fn move_upper_middle_from_start_to_point(
        &self,
        cube: &Cube,
    ) -> Result<SolutionItem, SolveError> {
        let keep = Keep::new(cube).slots(cube, is_upper_middle_on_point);
        self.find(
            "finish an upper edge",
            cube,
            &UPPER_MIDDLE_TO_POINT,
            |cube| is_upper_middle_on_point(cube) && keep.holds(cube),
        )
    }

    pub fn solve_upper_corners(&self, cube: &Cube) -> Result<SolutionItem, SolveError> {
        self.solve_four_sides(cube, Self::solve_upper_corner)
    }

    /// Puts the front-top-right corner in place.
    pub fn solve_upper_corner(&self, cube: &Cube) -> Result<SolutionItem, SolveError> {
        self.find_and_move_if_needed(
            cube,
            is_upper_corner_on_point,
            Self::move_upper_corner_to_start,
            Self::move_upper_corner_from_start_to_point,
        )
    }

    pub fn move_upper_corner_to_start(&self, cube: &Cube) -> Result<SolutionItem, SolveError> {
        let keep = Keep::new(cube)
            .slots(cube, is_upper_corner_on_point)
            .layers(cube, &[is_solved_upper_cross]);
        self.find(
            "stage an upper corner",
            cube,
            &UPPER_CORNER_TO_START,
            |cube| is_upper_corner_on_start(cube) && keep.holds(cube),
        )
    }

    pub fn move_upper_corner_from_start_to_point(
        &self,
        cube: &Cube,
    ) -> Result<SolutionItem, SolveError> {
        let keep = Keep::new(cube)
            .slots(cube, is_upper_corner_on_point)
            .layers(cube, &[is_solved_upper_cross]);
        self.find(
            "finish an upper corner",
            cube,
            &UPPER_CORNER_TO_POINT,
            |cube| is_upper_corner_on_point(cube) && keep.holds(cube),
        )
    }
}
