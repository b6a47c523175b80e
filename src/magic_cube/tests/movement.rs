use magic_cube::{CellColor, Cube, Face, Layer, Side, Spin, TurnTo};

fn rows(top: CellColor, middle: CellColor, bottom: CellColor) -> Face {
    Face::from([top, top, top, middle, middle, middle, bottom, bottom, bottom])
}

fn columns(left: CellColor, middle: CellColor, right: CellColor) -> Face {
    Face::from([left, middle, right, left, middle, right, left, middle, right])
}

fn solved_with(side: Side, row: usize, column: usize, color: CellColor) -> Cube {
    Cube::solved().with_color(side, row, column, color).unwrap()
}

#[test_log::test]
fn horizontal_layer_rotations() {
    let solved = Cube::solved();

    let cube = solved.rotation(TurnTo::Left, Layer::First);
    assert_eq!(
        cube[Side::Front],
        rows(CellColor::Orange, CellColor::Green, CellColor::Green)
    );

    let cube = solved.rotation(TurnTo::Left, Layer::Third);
    assert_eq!(
        cube[Side::Back],
        rows(CellColor::Yellow, CellColor::Yellow, CellColor::Red)
    );

    let cube = solved.rotation(TurnTo::Right, Layer::Second);
    assert_eq!(
        cube[Side::Right],
        rows(CellColor::Orange, CellColor::Green, CellColor::Orange)
    );
}

#[test_log::test]
fn vertical_layer_rotations() {
    let solved = Cube::solved();

    let cube = solved.rotation(TurnTo::Up, Layer::First);
    assert_eq!(
        cube[Side::Back],
        columns(CellColor::Yellow, CellColor::Yellow, CellColor::White)
    );

    let cube = solved.rotation(TurnTo::Down, Layer::Third);
    assert_eq!(
        cube[Side::Down],
        columns(CellColor::Blue, CellColor::Blue, CellColor::Green)
    );
}

#[test_log::test]
fn outer_layer_rotations_turn_the_pole_face() {
    let cube = solved_with(Side::Top, 1, 1, CellColor::Red).rotation(TurnTo::Left, Layer::First);
    assert_eq!(cube.color(Side::Top, 1, 3).unwrap(), CellColor::Red);

    let cube =
        solved_with(Side::Down, 1, 1, CellColor::White).rotation(TurnTo::Left, Layer::Third);
    assert_eq!(cube.color(Side::Down, 3, 1).unwrap(), CellColor::White);
}

#[test_log::test]
fn whole_cube_turns() {
    let solved = Cube::solved();
    assert!(solved.turn(TurnTo::Right)[Side::Front].is_fill(CellColor::Red));
    assert!(solved.turn(TurnTo::Left)[Side::Front].is_fill(CellColor::Orange));
    assert!(solved.turn(TurnTo::Up)[Side::Front].is_fill(CellColor::Blue));
    assert!(solved.turn(TurnTo::Down)[Side::Down].is_fill(CellColor::Green));

    let cases = [
        (Side::Top, 1, 1, TurnTo::Right, Side::Top, 3, 1),
        (Side::Down, 1, 1, TurnTo::Right, Side::Down, 1, 3),
        (Side::Top, 1, 1, TurnTo::Left, Side::Top, 1, 3),
        (Side::Back, 1, 1, TurnTo::Down, Side::Top, 3, 3),
        (Side::Top, 1, 2, TurnTo::Up, Side::Back, 3, 2),
        (Side::Back, 2, 3, TurnTo::Up, Side::Down, 2, 1),
        (Side::Front, 1, 3, TurnTo::Up, Side::Top, 1, 3),
        (Side::Front, 1, 1, TurnTo::Down, Side::Down, 1, 1),
    ];
    for (side, row, column, direction, to_side, to_row, to_column) in cases {
        let cube = solved_with(side, row, column, CellColor::Red).turn(direction);
        assert_eq!(
            cube.color(to_side, to_row, to_column).unwrap(),
            CellColor::Red,
            "{side} ({row}, {column}) turned {direction}"
        );
    }
}

#[test_log::test]
fn four_turns_are_the_identity() {
    let cube = Cube::solved()
        .rotation(TurnTo::Right, Layer::First)
        .rotate_face(Spin::Left)
        .rotation(TurnTo::Up, Layer::Second);
    for direction in TurnTo::ALL {
        let turned = (0..4).fold(cube, |cube, _| cube.turn(direction));
        assert_eq!(turned, cube, "{direction}");
    }
    for spin in Spin::ALL {
        let turned = (0..4).fold(cube, |cube, _| cube.turn_to_corner(spin));
        assert_eq!(turned, cube, "{spin}");
        let turned = (0..4).fold(cube, |cube, _| cube.rotate_face(spin));
        assert_eq!(turned, cube, "{spin}");
    }
    for direction in TurnTo::ALL {
        for layer in Layer::ALL {
            let turned = (0..4).fold(cube, |cube, _| cube.rotation(direction, layer));
            assert_eq!(turned, cube, "{direction}{layer}");
        }
    }
}

#[test_log::test]
fn opposite_moves_cancel() {
    let cube = Cube::solved().rotation(TurnTo::Down, Layer::First);
    assert_eq!(cube.turn(TurnTo::Left).turn(TurnTo::Right), cube);
    assert_eq!(cube.turn(TurnTo::Up).turn(TurnTo::Down), cube);
    assert_eq!(
        cube.turn_to_corner(Spin::Left).turn_to_corner(Spin::Right),
        cube
    );
    assert_eq!(cube.rotate_face(Spin::Left).rotate_face(Spin::Right), cube);
    for layer in Layer::ALL {
        assert_eq!(
            cube.rotation(TurnTo::Left, layer)
                .rotation(TurnTo::Right, layer),
            cube
        );
        assert_eq!(
            cube.rotation(TurnTo::Up, layer).rotation(TurnTo::Down, layer),
            cube
        );
    }
}

#[test_log::test]
fn turn_to_corner() {
    let cube = solved_with(Side::Front, 1, 1, CellColor::White);
    assert_eq!(
        cube.turn_to_corner(Spin::Right)
            .color(Side::Front, 1, 3)
            .unwrap(),
        CellColor::White
    );
    assert_eq!(
        cube.turn_to_corner(Spin::Left)
            .color(Side::Front, 3, 1)
            .unwrap(),
        CellColor::White
    );
    assert!(Cube::solved().turn_to_corner(Spin::Left)[Side::Top].is_fill(CellColor::Orange));
}

#[test_log::test]
fn rotate_face() {
    let cube = Cube::solved().rotate_face(Spin::Left);
    assert_eq!(cube.color(Side::Right, 3, 1).unwrap(), CellColor::Blue);
    assert!(cube[Side::Front].is_fill(CellColor::Green));
    assert!(cube[Side::Back].is_fill(CellColor::Yellow));
}

#[test_log::test]
fn moves_never_touch_centers() {
    let cube = Cube::solved()
        .rotation(TurnTo::Left, Layer::First)
        .rotation(TurnTo::Down, Layer::Third)
        .rotate_face(Spin::Right);
    for side in Side::ALL {
        assert_eq!(cube.center(side), side.solved_color());
    }
}

#[test_log::test]
fn quarter_rotations_of_a_face() {
    use CellColor::{Blue, Green, Orange, Red, White, Yellow};

    let face = Face::from([Green, White, Orange, Yellow, Blue, Red, Green, Green, White]);
    let clockwise = (0..4).scan(face, |face, _| {
        *face = face.rotate_quarter(true);
        Some(*face)
    });
    let turns: Vec<Face> = clockwise.collect();
    assert_eq!(turns[1], face.rotate_half());
    assert_eq!(turns[3], face);
    assert_eq!(turns[0], face.rotate_quarter(false).rotate_half());
    assert_eq!(turns[0].get(1, 3).unwrap(), Green);
    assert_eq!(turns[0].center_color(), Blue);
}
