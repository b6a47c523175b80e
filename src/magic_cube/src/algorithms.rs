//! Goal predicates and the fixed macros the solver searches with.
//!
//! Everything here is phrased for the front face: a predicate asks whether
//! the piece belonging between the front and some neighbour is in place, and
//! the solver reorients the cube to ask the same question of the other
//! sides. All checks compare cells against center colors, never against the
//! canonical solved colors, so they hold for any orientation of the cube.

use crate::{
    command::{Command, Move},
    cube::{CellColor, Cube, Side},
    movement::{
        Layer::{self, First, Second, Third},
        Spin, TurnTo,
    },
};

const fn rot(direction: TurnTo, layer: Layer) -> Move {
    Move::Rotation(direction, layer)
}

const FRONT_CW: Move = Move::RotateFace(Spin::Right);
const FRONT_CCW: Move = Move::RotateFace(Spin::Left);

fn any_of(colors: &[CellColor], cells: &[CellColor]) -> bool {
    cells.iter().all(|cell| colors.contains(cell))
}

/// Holds on the cube as seen from each of its four sides.
pub fn on_all_sides(cube: &Cube, predicate: impl Fn(&Cube) -> bool) -> bool {
    let left = cube.turn(TurnTo::Left);
    predicate(cube)
        && predicate(&left)
        && predicate(&left.turn(TurnTo::Left))
        && predicate(&cube.turn(TurnTo::Right))
}

const TOP_EDGES: [(usize, usize); 4] = [(1, 2), (2, 1), (2, 3), (3, 2)];
const TOP_CORNERS: [(usize, usize); 4] = [(1, 1), (1, 3), (3, 1), (3, 3)];
const SIDES: [Side; 4] = [Side::Front, Side::Right, Side::Back, Side::Left];

fn top_matches(cube: &Cube, cells: &[(usize, usize)]) -> bool {
    let top = cube.center(Side::Top);
    cells
        .iter()
        .all(|&(row, column)| cube.cell(Side::Top, row, column) == top)
}

// Upper cross

pub const UPPER_MIDDLE_TOP_TO_LOWER: Command =
    Command::labeled("upper edge: top to lower", &[FRONT_CW, FRONT_CW]);

pub const UPPER_MIDDLE_RIGHT_TO_LOWER: Command = Command::labeled(
    "upper edge: right to lower",
    &[
        rot(TurnTo::Down, Third),
        rot(TurnTo::Left, Third),
        rot(TurnTo::Up, Third),
    ],
);

pub const UPPER_MIDDLE_FLIPPED_TO_POINT: Command = Command::labeled(
    "upper edge: flipped to point",
    &[
        rot(TurnTo::Down, Third),
        rot(TurnTo::Right, Third),
        rot(TurnTo::Up, Third),
        FRONT_CCW,
    ],
);

/// The front-top edge sits below the front face, in either orientation.
#[must_use]
pub fn is_upper_middle_on_start(cube: &Cube) -> bool {
    any_of(
        &[cube.center(Side::Front), cube.center(Side::Top)],
        &[
            cube.cell(Side::Front, 3, 2),
            cube.cell(Side::Down, 1, 2),
        ],
    )
}

#[must_use]
pub fn is_upper_middle_on_point(cube: &Cube) -> bool {
    cube.cell(Side::Front, 1, 2) == cube.center(Side::Front)
        && cube.cell(Side::Top, 3, 2) == cube.center(Side::Top)
}

#[must_use]
pub fn is_solved_upper_cross(cube: &Cube) -> bool {
    top_matches(cube, &TOP_EDGES)
        && SIDES
            .iter()
            .all(|&side| cube.cell(side, 1, 2) == cube.center(side))
}

// Upper corners

pub const UPPER_CORNER_FRONT_TO_LOWER: Command = Command::labeled(
    "upper corner: front to lower",
    &[
        rot(TurnTo::Down, Third),
        rot(TurnTo::Left, Third),
        rot(TurnTo::Up, Third),
    ],
);

pub const UPPER_CORNER_FRONT_ORIENTED_TO_POINT: Command = Command::labeled(
    "upper corner: front oriented to point",
    &[
        rot(TurnTo::Left, Third),
        rot(TurnTo::Down, Third),
        rot(TurnTo::Right, Third),
        rot(TurnTo::Up, Third),
    ],
);

pub const UPPER_CORNER_RIGHT_ORIENTED_TO_POINT: Command = Command::labeled(
    "upper corner: right oriented to point",
    &[
        rot(TurnTo::Right, Third),
        FRONT_CW,
        rot(TurnTo::Left, Third),
        FRONT_CCW,
    ],
);

pub const UPPER_CORNER_DOWN_ORIENTED_REORIENT: Command = Command::labeled(
    "upper corner: reorient down facing",
    &[
        rot(TurnTo::Left, Third),
        rot(TurnTo::Left, Third),
        rot(TurnTo::Down, Third),
        rot(TurnTo::Left, Third),
        rot(TurnTo::Up, Third),
    ],
);

/// The front-top-right corner sits below its slot, in any orientation.
#[must_use]
pub fn is_upper_corner_on_start(cube: &Cube) -> bool {
    any_of(
        &[
            cube.center(Side::Front),
            cube.center(Side::Top),
            cube.center(Side::Right),
        ],
        &[
            cube.cell(Side::Front, 3, 3),
            cube.cell(Side::Right, 3, 1),
            cube.cell(Side::Down, 1, 3),
        ],
    )
}

#[must_use]
pub fn is_upper_corner_on_point(cube: &Cube) -> bool {
    cube.cell(Side::Front, 1, 3) == cube.center(Side::Front)
        && cube.cell(Side::Top, 3, 3) == cube.center(Side::Top)
        && cube.cell(Side::Right, 1, 1) == cube.center(Side::Right)
}

#[must_use]
pub fn is_solved_upper_corners(cube: &Cube) -> bool {
    top_matches(cube, &TOP_CORNERS)
        && SIDES.iter().all(|&side| {
            let center = cube.center(side);
            cube.cell(side, 1, 1) == center && cube.cell(side, 1, 3) == center
        })
}

#[must_use]
pub fn is_solved_upper_layer(cube: &Cube) -> bool {
    is_solved_upper_cross(cube) && is_solved_upper_corners(cube)
}

// Middle layer

pub const MIDDLE_EDGE_TO_POINT: Command = Command::labeled(
    "middle edge: to point",
    &[
        rot(TurnTo::Left, Third),
        rot(TurnTo::Down, Third),
        rot(TurnTo::Right, Third),
        rot(TurnTo::Up, Third),
        rot(TurnTo::Right, Third),
        FRONT_CW,
        rot(TurnTo::Left, Third),
        FRONT_CCW,
    ],
);

pub const MIDDLE_EDGE_FLIPPED_TO_POINT: Command = Command::labeled(
    "middle edge: flipped to point",
    &[
        rot(TurnTo::Right, Third),
        rot(TurnTo::Right, Third),
        FRONT_CW,
        rot(TurnTo::Left, Third),
        FRONT_CCW,
        rot(TurnTo::Left, Third),
        rot(TurnTo::Down, Third),
        rot(TurnTo::Right, Third),
        rot(TurnTo::Up, Third),
    ],
);

/// The front-right edge sits below the front face.
#[must_use]
pub fn is_middle_edge_on_start(cube: &Cube) -> bool {
    any_of(
        &[cube.center(Side::Front), cube.center(Side::Right)],
        &[
            cube.cell(Side::Front, 3, 2),
            cube.cell(Side::Down, 1, 2),
        ],
    )
}

#[must_use]
pub fn is_middle_edge_on_point(cube: &Cube) -> bool {
    cube.cell(Side::Front, 2, 3) == cube.center(Side::Front)
        && cube.cell(Side::Right, 2, 1) == cube.center(Side::Right)
}

#[must_use]
pub fn is_solved_middle_layer(cube: &Cube) -> bool {
    on_all_sides(cube, is_middle_edge_on_point)
}

// Lower layer. The solver flips the cube first, so the lower layer is worked
// on from the top.

pub const LOWER_EDGES_CYCLE: Command = Command::labeled(
    "lower edges: cycle",
    &[
        rot(TurnTo::Left, First),
        FRONT_CW,
        rot(TurnTo::Up, Third),
        rot(TurnTo::Left, First),
        rot(TurnTo::Down, Third),
        rot(TurnTo::Right, First),
        FRONT_CCW,
    ],
);

pub const LOWER_EDGE_FLIP: Command = Command::labeled(
    "lower edge: flip",
    &[
        rot(TurnTo::Up, Third),
        rot(TurnTo::Right, Second),
        rot(TurnTo::Up, Third),
        rot(TurnTo::Right, Second),
        rot(TurnTo::Up, Third),
        rot(TurnTo::Right, Second),
        rot(TurnTo::Up, Third),
        rot(TurnTo::Right, Second),
    ],
);

pub const LOWER_CORNERS_CYCLE_BY_RIGHT: Command = Command::labeled(
    "lower corners: cycle by right",
    &[
        rot(TurnTo::Down, Third),
        FRONT_CCW,
        rot(TurnTo::Up, First),
        FRONT_CW,
        rot(TurnTo::Up, Third),
        FRONT_CCW,
        rot(TurnTo::Down, First),
        FRONT_CW,
    ],
);

pub const LOWER_CORNERS_CYCLE_BY_LEFT: Command = Command::labeled(
    "lower corners: cycle by left",
    &[
        FRONT_CCW,
        rot(TurnTo::Up, First),
        FRONT_CW,
        rot(TurnTo::Down, Third),
        FRONT_CCW,
        rot(TurnTo::Down, First),
        FRONT_CW,
        rot(TurnTo::Up, Third),
    ],
);

pub const LOWER_CORNER_TWIST_BY_RIGHT: Command = Command::labeled(
    "lower corner: twist by right",
    &[
        rot(TurnTo::Up, Third),
        FRONT_CCW,
        rot(TurnTo::Down, Third),
        FRONT_CW,
        rot(TurnTo::Up, Third),
        FRONT_CCW,
        rot(TurnTo::Down, Third),
        FRONT_CW,
    ],
);

pub const LOWER_CORNER_TWIST_BY_LEFT: Command = Command::labeled(
    "lower corner: twist by left",
    &[
        FRONT_CCW,
        rot(TurnTo::Up, Third),
        FRONT_CW,
        rot(TurnTo::Down, Third),
        FRONT_CCW,
        rot(TurnTo::Up, Third),
        FRONT_CW,
        rot(TurnTo::Down, Third),
    ],
);

/// The front edge of the top layer is the front's, whichever way it faces.
#[must_use]
pub fn is_lower_edge_on_start(cube: &Cube) -> bool {
    let front = cube.center(Side::Front);
    cube.cell(Side::Front, 1, 2) == front || cube.cell(Side::Top, 3, 2) == front
}

#[must_use]
pub fn is_lower_cross_on_start(cube: &Cube) -> bool {
    on_all_sides(cube, is_lower_edge_on_start)
}

#[must_use]
pub fn is_solved_lower_cross(cube: &Cube) -> bool {
    top_matches(cube, &TOP_EDGES)
}

/// The back-left corner of the top layer belongs between the left and back
/// edges next to it.
#[must_use]
pub fn is_lower_corner_on_start(cube: &Cube) -> bool {
    any_of(
        &[
            cube.cell(Side::Left, 1, 2),
            cube.cell(Side::Back, 1, 2),
            cube.center(Side::Top),
        ],
        &[
            cube.cell(Side::Top, 1, 1),
            cube.cell(Side::Left, 1, 1),
            cube.cell(Side::Back, 1, 3),
        ],
    )
}

#[must_use]
pub fn are_lower_corners_on_start(cube: &Cube) -> bool {
    on_all_sides(cube, is_lower_corner_on_start)
}

#[must_use]
pub fn are_lower_corners_on_point(cube: &Cube) -> bool {
    on_all_sides(cube, is_upper_corner_on_point)
}

#[must_use]
pub fn is_solved_lower_layer(cube: &Cube) -> bool {
    on_all_sides(cube, |cube| {
        let front = cube.center(Side::Front);
        cube.face(Side::Front).row(1).iter().all(|&cell| cell == front)
    })
}

/// With the cube flipped, everything below the top layer is still solved:
/// the middle layer, the down face and the bottom row of every side.
#[must_use]
pub fn are_lower_layers_intact(cube: &Cube) -> bool {
    is_solved_middle_layer(cube)
        && cube.face(Side::Down).is_uniform()
        && on_all_sides(cube, |cube| {
            let front = cube.center(Side::Front);
            cube.face(Side::Front).row(3).iter().all(|&cell| cell == front)
        })
}

#[must_use]
pub fn is_solved_cube(cube: &Cube) -> bool {
    cube.is_solved()
}
