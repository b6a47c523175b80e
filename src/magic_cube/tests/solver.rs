use magic_cube::{
    CellColor, Command, Cube, Face, Layer, SearchConfig, Side, SolutionItem, SolveError, Solver,
    SolverConfig, TurnTo, algorithms,
};

const SCRAMBLED: &str = "WRGWYBWOR/RGBWWYOGO/BWRRRRYRR/YBBWGYWGB/OBWYBYYOG/GOYBOGOOG";

/// Every cell yellow except the centers, so a test can place just the pieces
/// it cares about.
fn skeleton(cells: &[(Side, usize, usize, CellColor)]) -> Cube {
    let [front, top, right, back, down, left] = Side::ALL.map(|side| {
        let mut colors = [CellColor::Yellow; 9];
        colors[4] = side.solved_color();
        Face::from(colors)
    });
    cells.iter().fold(
        Cube::new(front, top, right, back, down, left),
        |cube, &(side, row, column, color)| cube.with_color(side, row, column, color).unwrap(),
    )
}

fn replay(cube: &Cube, solution: &SolutionItem) -> Cube {
    solution
        .actions
        .iter()
        .fold(*cube, |cube, command: &Command| command.execute(&cube))
}

#[test_log::test]
fn stages_an_upper_edge() {
    use CellColor::{Green, White};
    use Side::{Back, Down, Front, Left, Right, Top};

    let solver = Solver::default();
    let cases = [
        ((Down, 1, 2), (Front, 3, 2), Some(0)),
        ((Down, 2, 3), (Right, 3, 2), Some(1)),
        ((Right, 3, 2), (Down, 2, 3), Some(1)),
        ((Down, 2, 1), (Left, 3, 2), Some(1)),
        ((Top, 3, 2), (Front, 1, 2), Some(1)),
        ((Right, 1, 2), (Top, 2, 3), None),
        ((Left, 1, 2), (Top, 2, 1), None),
        ((Back, 1, 2), (Top, 1, 2), None),
        ((Front, 2, 3), (Right, 2, 1), Some(1)),
        ((Front, 2, 1), (Left, 2, 3), None),
        ((Back, 2, 1), (Right, 2, 3), None),
        ((Back, 2, 3), (Left, 2, 1), None),
    ];
    for ((white_side, white_row, white_column), (green_side, green_row, green_column), length) in
        cases
    {
        let cube = skeleton(&[
            (white_side, white_row, white_column, White),
            (green_side, green_row, green_column, Green),
        ]);
        let staged = solver.move_upper_middle_to_start(&cube).unwrap();
        assert!(algorithms::is_upper_middle_on_start(&staged.goal_state));
        assert_eq!(replay(&cube, &staged), staged.goal_state);
        assert_eq!(staged.goal_state.center(Front), Green);
        if let Some(length) = length {
            assert_eq!(
                staged.actions.len(),
                length,
                "white on {white_side} ({white_row}, {white_column})"
            );
        }
    }
}

#[test_log::test]
fn finishes_an_upper_edge() {
    use CellColor::{Green, White};
    use Side::{Down, Front};

    let solver = Solver::default();
    for (front, down, length) in [(Green, White, 2), (White, Green, 1)] {
        let cube = skeleton(&[(Front, 3, 2, front), (Down, 1, 2, down)]);
        let done = solver.move_upper_middle_from_start_to_point(&cube).unwrap();
        assert_eq!(done.actions.len(), length);
        assert!(algorithms::is_upper_middle_on_point(&done.goal_state));
    }
}

#[test_log::test]
fn stages_an_upper_corner() {
    use CellColor::{Green, Orange, White};
    use Side::{Back, Down, Front, Left, Right, Top};

    let solver = Solver::default();
    let staged = skeleton(&[(Front, 3, 3, Green), (Down, 1, 3, Orange), (Right, 3, 1, White)]);
    assert!(
        solver
            .move_upper_corner_to_start(&staged)
            .unwrap()
            .actions
            .is_empty()
    );

    let cases = [
        [(Down, 3, 3), (Right, 3, 3), (Back, 3, 1)],
        [(Down, 1, 1), (Left, 3, 3), (Front, 3, 1)],
        [(Right, 1, 1), (Front, 1, 3), (Top, 3, 3)],
        [(Top, 1, 3), (Back, 1, 1), (Right, 1, 3)],
        [(Top, 1, 1), (Left, 1, 1), (Back, 1, 3)],
        [(Front, 1, 1), (Left, 1, 3), (Top, 3, 1)],
    ];
    for [green, white, orange] in cases {
        let cube = skeleton(&[
            (green.0, green.1, green.2, Green),
            (white.0, white.1, white.2, White),
            (orange.0, orange.1, orange.2, Orange),
        ]);
        let result = solver.move_upper_corner_to_start(&cube).unwrap();
        assert!(
            algorithms::is_upper_corner_on_start(&result.goal_state),
            "green on {} ({}, {})",
            green.0,
            green.1,
            green.2
        );
        assert_eq!(replay(&cube, &result), result.goal_state);
    }
}

#[test_log::test]
fn finishes_an_upper_corner() {
    use CellColor::{Green, Orange, White};
    use Side::{Down, Front, Right};

    let solver = Solver::default();
    let cases = [
        ([(Down, 1, 3), (Front, 3, 3), (Right, 3, 1)], 1),
        ([(Front, 3, 3), (Right, 3, 1), (Down, 1, 3)], 1),
        ([(Right, 3, 1), (Down, 1, 3), (Front, 3, 3)], 2),
    ];
    for ([green, white, orange], length) in cases {
        let cube = skeleton(&[
            (green.0, green.1, green.2, Green),
            (white.0, white.1, white.2, White),
            (orange.0, orange.1, orange.2, Orange),
        ]);
        let done = solver.move_upper_corner_from_start_to_point(&cube).unwrap();
        assert_eq!(done.actions.len(), length);
        assert!(algorithms::is_upper_corner_on_point(&done.goal_state));
    }
}

#[test_log::test]
fn places_a_middle_edge() {
    use CellColor::{Green, Orange};
    use Side::{Back, Down, Front, Right};

    let solver = Solver::default();
    let staged = skeleton(&[(Front, 3, 2, Green), (Down, 1, 2, Orange)]);
    assert!(
        solver
            .move_middle_edge_to_start(&staged)
            .unwrap()
            .actions
            .is_empty()
    );

    for (green, orange) in [
        ((Right, 3, 2), (Down, 2, 3)),
        ((Right, 2, 1), (Front, 2, 3)),
        ((Right, 2, 3), (Back, 2, 1)),
    ] {
        let cube = skeleton(&[
            (green.0, green.1, green.2, Green),
            (orange.0, orange.1, orange.2, Orange),
        ]);
        let result = solver.move_middle_edge_to_start(&cube).unwrap();
        assert!(algorithms::is_middle_edge_on_start(&result.goal_state));
    }

    for (front, down) in [(Green, Orange), (Orange, Green)] {
        let cube = skeleton(&[(Front, 3, 2, front), (Down, 1, 2, down)]);
        let done = solver.move_middle_edge_from_start_to_point(&cube).unwrap();
        assert_eq!(done.actions.len(), 1);
        assert!(algorithms::is_middle_edge_on_point(&done.goal_state));
    }
}

#[test_log::test]
fn solves_the_layers_in_order() {
    let solver = Solver::default();
    let cube: Cube = SCRAMBLED.parse().unwrap();

    let cross = solver.solve_upper_cross(&cube).unwrap();
    assert!(algorithms::is_solved_upper_cross(&cross.goal_state));
    assert_eq!(replay(&cube, &cross), cross.goal_state);

    let upper = solver.solve_upper_layer(&cube).unwrap();
    assert!(algorithms::is_solved_upper_layer(&upper.goal_state));
    assert_eq!(upper.goal_state.center(Side::Top), cube.center(Side::Top));

    let middle = solver.solve_middle_layer(&upper.goal_state).unwrap();
    assert!(algorithms::is_solved_upper_layer(&middle.goal_state));
    assert!(algorithms::is_solved_middle_layer(&middle.goal_state));
    assert!(middle.stats.peak_nodes <= middle.stats.nodes_expanded);
}

#[test_log::test]
fn solves_the_last_layer() {
    let solver = Solver::default();
    let solved = Cube::solved();
    let cases = [
        (solved.rotation(TurnTo::Left, Layer::First), 1),
        (algorithms::LOWER_EDGES_CYCLE.execute(&solved), 14),
        (algorithms::LOWER_CORNERS_CYCLE_BY_LEFT.execute(&solved), 1),
        (algorithms::LOWER_EDGE_FLIP.execute(&solved), 1),
        (algorithms::LOWER_CORNER_TWIST_BY_LEFT.execute(&solved), 1),
    ];
    for (cube, length) in cases {
        let solution = solver.solve_lower_layer(&cube).unwrap();
        assert_eq!(solution.actions.len(), length);
        assert!(algorithms::is_solved_cube(&solution.goal_state));
    }
}

#[test_log::test]
fn solves_a_scrambled_cube() {
    let cube: Cube = SCRAMBLED.parse().unwrap();
    let solution = Solver::default().solve_cube(&cube).unwrap();
    assert!(solution.goal_state.is_solved());
    assert_eq!(replay(&cube, &solution), solution.goal_state);
    assert_eq!(solution.move_count(), 165);
    assert!(solution.stats.peak_nodes < 100_000);
}

#[test_log::test]
fn solved_cube_needs_nothing() {
    let solution = Solver::default().solve_cube(&Cube::solved()).unwrap();
    assert!(solution.actions.is_empty());
    assert_eq!(solution.goal_state, Cube::solved());
    assert_eq!(solution.stats.searches, 0);
}

#[test_log::test]
fn broken_cube_is_reported() {
    // Two red centers cannot come from legal moves.
    let cube = Cube::solved()
        .with_color(Side::Front, 2, 2, CellColor::Red)
        .unwrap();
    let solver = Solver::new(SolverConfig {
        search: SearchConfig::default().with_node_limit(5_000),
    });
    match solver.solve_cube(&cube) {
        Err(SolveError::Search { .. }) => {}
        other => panic!("expected a failed search, got {other:?}"),
    }
}
