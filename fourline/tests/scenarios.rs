use fourline::{
    best_move, choose_move, find_four_in_a_row, Board, Coord, GameError, MoveRequest,
    MoveResponse, SearchConfig, Side, COLS, ROWS,
};

#[test]
fn vertical_win_in_column_three() {
    let mut board = Board::new();
    // Black answers elsewhere between red's drops.
    let replies = [0, 1, 0];
    for turn in 0..4 {
        assert_eq!(board.turn(), Side::First);
        let row = board.drop(3).unwrap();
        assert_eq!(row, ROWS - 1 - turn);
        board.switch_turn();
        if turn < 3 {
            assert_eq!(find_four_in_a_row(&board), None);
            board.drop(replies[turn]).unwrap();
            board.switch_turn();
        }
    }

    let (winner, line) = find_four_in_a_row(&board).expect("red has four in column 3");
    assert_eq!(winner, Side::First);
    assert_eq!(
        line,
        [
            Coord::new(5, 3),
            Coord::new(4, 3),
            Coord::new(3, 3),
            Coord::new(2, 3)
        ]
    );
}

#[test]
fn column_overflow_is_an_invalid_move() {
    let mut board = Board::new();
    for expected in (0..ROWS).rev() {
        assert_eq!(board.drop(4), Ok(expected));
    }
    let err = board.drop(4).unwrap_err();
    assert!(err.is_invalid_move());
    assert_eq!(err.to_string(), "column 4 is full");
}

#[test]
fn engine_self_play_ends_cleanly() {
    let mut board = Board::new();
    let mut plies = 0;
    while find_four_in_a_row(&board).is_none() && !board.is_full() {
        let side = board.turn();
        let column = choose_move(&board, side, 2)
            .unwrap()
            .expect("an open position always has a move");
        assert!(column < COLS);
        assert!(!board.is_column_full(column));
        board.drop(column).unwrap();
        board.switch_turn();
        plies += 1;
        assert!(plies <= ROWS * COLS);
    }
    assert_eq!(choose_move(&board, board.turn(), 2), Ok(None));
}

#[test]
fn computer_refuses_depth_zero() {
    assert_eq!(
        choose_move(&Board::new(), Side::Second, 0),
        Err(GameError::InvalidPly(0))
    );
}

#[test]
fn move_response_serializes_as_json() {
    let response = best_move(
        &MoveRequest {
            position: "R3B3R4B2".to_string(),
        },
        &SearchConfig::default(),
    )
    .unwrap();
    let json = serde_json::to_string(&response).unwrap();
    let back: MoveResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(back, response);
    assert!(response.column < COLS);

    let request: MoveRequest = serde_json::from_str(r#"{"position": "R3"}"#).unwrap();
    assert_eq!(request.position, "R3");
}
