use rookery_core::{
    ChessError, Color, GameState, GameStatus, PieceKind, Square, game_status, in_check,
    legal_moves, legal_moves_from, perft,
};

fn state(fen: &str) -> GameState {
    fen.parse().unwrap()
}

fn play(state: GameState, moves: &[&str]) -> GameState {
    moves
        .iter()
        .fold(state, |s, text| s.apply_coordinate(text).unwrap())
}

#[test]
fn perft_from_start() {
    let s = GameState::starting_position();
    let counts: Vec<u64> = (1..=4).map(|depth| perft(&s, depth)).collect();
    assert_eq!(counts, vec![20, 400, 8_902, 197_281]);
}

#[test]
fn scholars_mate() {
    let s = play(
        GameState::starting_position(),
        &["e2e4", "e7e5", "f1c4", "b8c6", "d1h5", "g8f6"],
    );
    assert_eq!(s.status(), GameStatus::Ongoing);
    let mate = s.parse_move("h5f7").unwrap();
    assert_eq!(s.san(mate), "Qxf7#");
    let after = s.apply(mate).unwrap();
    assert!(in_check(&after));
    assert!(legal_moves(&after).is_empty());
    assert_eq!(after.status(), GameStatus::Checkmate { winner: Color::White });
}

#[test]
fn back_rank_mate_in_one() {
    let s = state("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1");
    let after = s.apply_coordinate("a1a8").unwrap();
    assert_eq!(after.status(), GameStatus::Checkmate { winner: Color::White });
}

#[test]
fn castling_lost_after_king_round_trip() {
    let s = play(
        state("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1"),
        &["e1f1", "e8f8", "f1e1", "f8e8"],
    );
    assert!(s.castling().is_empty());
    assert!(!legal_moves(&s).iter().any(|mv| mv.is_castle()));
}

#[test]
fn castling_lost_after_rook_round_trip() {
    let s = play(
        state("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1"),
        &["a1b1", "h8g8", "b1a1", "g8h8"],
    );
    let targets: Vec<Square> = legal_moves(&s)
        .iter()
        .filter(|mv| mv.is_castle())
        .map(|mv| mv.to())
        .collect();
    assert_eq!(targets, vec![Square::G1]);
}

#[test]
fn en_passant_window() {
    let s = play(GameState::starting_position(), &["e2e4", "a7a6", "e4e5", "f7f5"]);
    assert_eq!(s.en_passant(), Some(Square::F6));
    let capture = s.apply_coordinate("e5f6").unwrap();
    assert_eq!(capture.piece_at(Square::F5), None);

    let late = play(s, &["b1c3", "a6a5"]);
    assert!(matches!(
        late.apply_coordinate("e5f6"),
        Err(ChessError::IllegalMove { .. })
    ));
}

#[test]
fn moves_from_square_for_highlighting() {
    let s = GameState::starting_position();
    let mut targets: Vec<Square> = legal_moves_from(&s, Square::E2).iter().map(|mv| mv.to()).collect();
    targets.sort();
    assert_eq!(targets, vec![Square::E3, Square::E4]);
}

#[test]
fn underpromotion_is_playable() {
    let s = state("8/1P5k/8/8/8/8/8/K7 w - - 0 1");
    let after = s.apply_coordinate("b7b8n").unwrap();
    assert_eq!(after.piece_at(Square::B8).map(|p| p.kind()), Some(PieceKind::Knight));
}

#[test]
fn repetition_needs_history() {
    let mut s = GameState::starting_position();
    let mut history = Vec::new();
    for text in ["b1c3", "b8c6", "c3b1", "c6b8"].repeat(2) {
        history.push(s.key());
        s = s.apply_coordinate(text).unwrap();
    }
    assert_eq!(game_status(&s, &history), GameStatus::DrawByRepetition);
    assert_eq!(game_status(&s, &history[4..]), GameStatus::Ongoing);
}

#[test]
fn bad_fen_surfaces_as_state_encoding_error() {
    let err: ChessError = "not a fen".parse::<GameState>().unwrap_err().into();
    assert!(matches!(err, ChessError::InvalidStateEncoding(_)));
}

#[test]
fn crowded_position_generates_every_move() {
    // Thirty-odd queens: far more moves than any reachable position.
    let s = state("QQQQQQnk/Q1111Qpp/Q11111QQ/Q111Q111/Q11111QQ/Q111111Q/Q111111Q/KQQQQQQQ w - - 0 1");
    let moves = legal_moves(&s);
    assert!(moves.len() > 256);
    assert!(moves.iter().all(|mv| s.apply(*mv).is_ok()));
    assert_eq!(game_status(&s, &[]), GameStatus::Ongoing);
}
