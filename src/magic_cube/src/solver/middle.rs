use super::{Keep, SolutionItem, SolveError, Solver};
use crate::{
    algorithms::{
        MIDDLE_EDGE_FLIPPED_TO_POINT, MIDDLE_EDGE_TO_POINT, is_middle_edge_on_point,
        is_middle_edge_on_start, is_solved_upper_layer,
    },
    command::{Command, Move},
    cube::Cube,
    movement::{Layer, TurnTo},
};

const MIDDLE_EDGE_TO_START: [Command; 5] = [
    Command::from_static(&[Move::Rotation(TurnTo::Left, Layer::Third)]),
    Command::from_static(&[Move::Rotation(TurnTo::Right, Layer::Third)]),
    Command::from_static(&[Move::Turn(TurnTo::Right)]),
    Command::from_static(&[Move::Turn(TurnTo::Left)]),
    MIDDLE_EDGE_TO_POINT,
];

const MIDDLE_EDGE_FINISH: [Command; 2] = [MIDDLE_EDGE_TO_POINT, MIDDLE_EDGE_FLIPPED_TO_POINT];

impl Solver {
    /// Solves the four edges between the upper and lower layers. Expects a
    /// solved upper layer, which is kept.
    pub fn solve_middle_layer(&self, cube: &Cube) -> Result<SolutionItem, SolveError> {
        Self::timed("middle layer", || {
            self.solve_four_sides(cube, Self::solve_middle_edge)
        })
    }

    pub fn solve_middle_edge(&self, cube: &Cube) -> Result<SolutionItem, SolveError> {
        self.find_and_move_if_needed(
            cube,
            is_middle_edge_on_point,
            Self::move_middle_edge_to_start,
            Self::move_middle_edge_from_start_to_point,
        )
    }

    pub fn move_middle_edge_to_start(&self, cube: &Cube) -> Result<SolutionItem, SolveError> {
        let keep = Keep::new(cube)
            .slots(cube, is_middle_edge_on_point)
            .layers(cube, &[is_solved_upper_layer]);
        self.find(
            "stage a middle edge",
            cube,
            &MIDDLE_EDGE_TO_START,
            |cube| is_middle_edge_on_start(cube) && keep.holds(cube),
        )
    }

    pub fn move_middle_edge_from_start_to_point(
        &self,
        cube: &Cube,
    ) -> Result<SolutionItem, SolveError> {
        let keep = Keep::new(cube)
            .slots(cube, is_middle_edge_on_point)
            .layers(cube, &[is_solved_upper_layer]);
        self.find(
            "finish a middle edge",
            cube,
            &MIDDLE_EDGE_FINISH,
            |cube| is_middle_edge_on_point(cube) && keep.holds(cube),
        )
    }
}
