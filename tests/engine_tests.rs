use fleet_sim::{
    parse_operation, render_text, Board, OperationEngine, OperationError, OperationKind,
    Orientation, Outcome, Ship, ShipId, Step,
};

fn engine(size: i32, fleet: &[(i32, i32, Orientation)]) -> OperationEngine {
    let ships = fleet
        .iter()
        .map(|&(x, y, o)| Ship::new(x, y, o))
        .collect();
    OperationEngine::new(Board::new(size, ships).unwrap())
}

fn state(engine: &OperationEngine, id: ShipId) -> (i32, i32, Orientation, bool) {
    let ship = engine.board().get(id).unwrap();
    let (x, y) = ship.position();
    (x, y, ship.orientation(), ship.is_sunk())
}

#[test]
fn test_collision_rolls_back_position_and_heading() {
    use Orientation::*;
    let mut engine = engine(3, &[(0, 0, North), (1, 1, North)]);

    let err = engine
        .apply_steps(ShipId(0, 0), &[Step::Move, Step::RotateRight, Step::Move])
        .unwrap_err();
    assert_eq!(
        err,
        OperationError::Collision {
            ship: ShipId(0, 0),
            x: 1,
            y: 1
        }
    );
    assert_eq!(state(&engine, ShipId(0, 0)), (0, 0, North, false));
}

#[test]
fn test_collision_rollback_from_wire_line() {
    use Orientation::*;
    let mut engine = engine(3, &[(0, 0, North), (1, 1, North)]);

    // "MMMRMM" decodes to Move, RotateRight, Move
    let err = engine.apply_line("(0, 0)MMMRMM").unwrap_err();
    assert!(matches!(err, OperationError::Collision { x: 1, y: 1, .. }));
    assert_eq!(state(&engine, ShipId(0, 0)), (0, 0, North, false));
}

#[test]
fn test_blocked_single_move() {
    use Orientation::*;
    let mut engine = engine(3, &[(0, 0, North), (0, 1, North)]);

    let err = engine.apply_line("(0,0)MM").unwrap_err();
    assert_eq!(
        err,
        OperationError::Collision {
            ship: ShipId(0, 0),
            x: 0,
            y: 1
        }
    );
    assert_eq!(state(&engine, ShipId(0, 0)), (0, 0, North, false));
    assert_eq!(state(&engine, ShipId(0, 1)), (0, 1, North, false));
}

#[test]
fn test_bare_separator_is_a_no_op_batch() {
    use Orientation::*;
    let mut engine = engine(3, &[(0, 0, North), (0, 1, North)]);

    // "M" carries no step, so nothing moves and nothing can collide
    let outcome = engine.apply_line("(0,0)M").unwrap();
    assert_eq!(
        outcome,
        Outcome::Moved {
            ship: ShipId(0, 0),
            x: 0,
            y: 0,
            orientation: North,
            dropped: 0
        }
    );
}

#[test]
fn test_move_off_the_board_is_dropped() {
    use Orientation::*;
    let mut engine = engine(3, &[(1, 1, North)]);
    engine.apply_line("(1,1)MM").unwrap();
    assert_eq!(state(&engine, ShipId(1, 1)), (1, 2, North, false));

    let mut engine = self::engine(3, &[(1, 1, North)]);
    let outcome = engine.apply_line("(1, 1)MMMM").unwrap();
    assert_eq!(
        outcome,
        Outcome::Moved {
            ship: ShipId(1, 1),
            x: 1,
            y: 2,
            orientation: North,
            dropped: 1
        }
    );
}

#[test]
fn test_later_steps_run_after_dropped_move() {
    use Orientation::*;
    let mut engine = engine(3, &[(0, 0, South)]);
    let outcome = engine
        .apply_steps(ShipId(0, 0), &[Step::Move, Step::RotateLeft, Step::Move])
        .unwrap();
    assert_eq!(
        outcome,
        Outcome::Moved {
            ship: ShipId(0, 0),
            x: 1,
            y: 0,
            orientation: East,
            dropped: 1
        }
    );
}

#[test]
fn test_dropped_last_move_still_checks_final_cell() {
    use Orientation::*;
    // first move lands on the other ship, second move leaves the board
    let mut engine = engine(3, &[(0, 1, North), (0, 2, East)]);
    let err = engine
        .apply_steps(ShipId(0, 1), &[Step::Move, Step::Move])
        .unwrap_err();
    assert!(matches!(err, OperationError::Collision { x: 0, y: 2, .. }));
    assert_eq!(state(&engine, ShipId(0, 1)), (0, 1, North, false));
}

#[test]
fn test_passing_through_an_occupied_cell() {
    use Orientation::*;
    let mut engine = engine(3, &[(0, 0, North), (0, 1, East)]);
    engine.apply_line("(0, 0)MMMM").unwrap();
    assert_eq!(state(&engine, ShipId(0, 0)), (0, 2, North, false));
}

#[test]
fn test_pure_rotation_never_collides() {
    use Orientation::*;
    let mut engine = engine(2, &[(0, 0, North), (1, 0, North)]);
    let outcome = engine
        .apply_steps(ShipId(0, 0), &[Step::RotateLeft, Step::RotateLeft])
        .unwrap();
    assert!(matches!(outcome, Outcome::Moved { orientation: South, .. }));

    engine
        .apply_steps(ShipId(0, 0), &[Step::RotateLeft, Step::RotateRight])
        .unwrap();
    assert_eq!(state(&engine, ShipId(0, 0)), (0, 0, South, false));
}

#[test]
fn test_sunk_ships_do_not_block() {
    use Orientation::*;
    let mut engine = engine(3, &[(0, 0, North), (0, 1, West)]);
    assert_eq!(engine.apply_line("(0, 1)"), Ok(Outcome::Sunk(ShipId(0, 1))));
    engine.apply_line("(0, 0)MM").unwrap();
    assert_eq!(state(&engine, ShipId(0, 0)), (0, 1, North, false));
    assert_eq!(state(&engine, ShipId(0, 1)), (0, 1, West, true));
}

#[test]
fn test_sink_and_output() {
    let mut engine = engine(3, &[(2, 2, Orientation::South)]);
    engine.apply_line("(2, 2)").unwrap();
    assert_eq!(render_text(engine.board()), "(2, 2, S) SUNK\n");
}

#[test]
fn test_sunk_is_final() {
    use Orientation::*;
    let mut engine = engine(3, &[(1, 1, East)]);
    engine.sink(ShipId(1, 1)).unwrap();

    assert_eq!(
        engine.apply_line("(1, 1)"),
        Err(OperationError::AlreadySunk(ShipId(1, 1)))
    );
    assert_eq!(
        engine.apply_line("(1, 1)MM"),
        Err(OperationError::AlreadySunk(ShipId(1, 1)))
    );
    assert_eq!(state(&engine, ShipId(1, 1)), (1, 1, East, true));
}

#[test]
fn test_unknown_target_is_reported() {
    use Orientation::*;
    let mut engine = engine(3, &[(0, 0, North)]);
    let before = engine.board().clone();

    assert_eq!(
        engine.apply_line("(2, 2)"),
        Err(OperationError::UnknownShip(ShipId(2, 2)))
    );
    // target is resolved before the suffix is decoded
    assert_eq!(
        engine.apply_line("(2, 2)XYZ"),
        Err(OperationError::UnknownShip(ShipId(2, 2)))
    );
    assert_eq!(engine.board(), &before);
}

#[test]
fn test_malformed_lines_leave_state_untouched() {
    use Orientation::*;
    let mut engine = engine(3, &[(0, 0, North)]);
    let before = engine.board().clone();

    assert_eq!(
        engine.apply_line("(0, 0)MRX"),
        Err(OperationError::MalformedInstruction("MRX".to_string()))
    );
    assert_eq!(
        engine.apply_line("0, 0)MM"),
        Err(OperationError::MalformedOperation("0, 0)MM".to_string()))
    );
    assert_eq!(engine.board(), &before);
}

#[test]
fn test_identity_survives_movement() {
    use Orientation::*;
    let mut engine = engine(3, &[(0, 0, North)]);
    engine.apply_line("(0, 0)MM").unwrap();

    assert_eq!(
        engine.apply_line("(0, 1)"),
        Err(OperationError::UnknownShip(ShipId(0, 1)))
    );
    engine.apply_line("(0, 0)").unwrap();
    assert_eq!(state(&engine, ShipId(0, 0)), (0, 1, North, true));
}

#[test]
fn test_batch_isolates_failures() {
    use Orientation::*;
    let mut engine = engine(4, &[(0, 0, North), (0, 1, North), (3, 3, West)]);
    let report = engine.run([
        "(0, 0)MM",     // collides with (0, 1)
        "(9, 9)",       // unknown
        "(0, 1)MRMMM",  // rotate right, then move east to (1, 1)
        "(0, 0)MM",     // (0, 1) is free now
        "(3, 3)",       // sink
        "(3, 3)MM",     // already sunk
        "(0, 0)MZ",     // malformed
    ]);

    let results: Vec<_> = report.reports.iter().map(|r| r.result.is_ok()).collect();
    assert_eq!(results, vec![false, false, true, true, true, false, false]);
    assert_eq!(report.applied(), 3);
    assert_eq!(report.failed(), 4);
    assert_eq!(report.reports[1].operation, "(9, 9)");
    assert!(matches!(
        report.failures().next(),
        Some((r, OperationError::Collision { .. })) if r.operation == "(0, 0)MM"
    ));

    assert_eq!(
        render_text(engine.board()),
        "(0, 1, N)\n(1, 1, E)\n(3, 3, W) SUNK\n"
    );
}

#[test]
fn test_apply_parsed_operation() {
    use Orientation::*;
    let mut engine = engine(3, &[(0, 0, North), (2, 0, West)]);

    let op = parse_operation("(0, 0)MMMRMM").unwrap();
    assert_eq!(
        op.kind,
        OperationKind::Steps(vec![Step::Move, Step::RotateRight, Step::Move])
    );
    assert_eq!(
        engine.apply(&op),
        Ok(Outcome::Moved {
            ship: ShipId(0, 0),
            x: 1,
            y: 1,
            orientation: East,
            dropped: 0
        })
    );

    let sink = parse_operation("(2, 0)").unwrap();
    assert_eq!(engine.apply(&sink), Ok(Outcome::Sunk(ShipId(2, 0))));
    assert_eq!(
        engine.apply(&sink),
        Err(OperationError::AlreadySunk(ShipId(2, 0)))
    );
}
