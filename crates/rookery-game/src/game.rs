//! A game in progress: the current position plus everything the position
//! alone cannot tell you.

use tracing::{debug, info};

use rookery_core::{
    ChessError, Color, GameState, GameStatus, Move, MoveList, Piece, Square, game_status,
    legal_moves, legal_moves_from,
};

use crate::error::GameError;
use crate::outcome::{DecisiveReason, Outcome};

/// One played move and what it takes to take it back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ply {
    before: GameState,
    mv: Move,
    san: String,
    captured: Option<Piece>,
}

impl Ply {
    /// Position the move was played from.
    pub fn before(&self) -> &GameState {
        &self.before
    }

    pub fn mv(&self) -> Move {
        self.mv
    }

    /// The move in Standard Algebraic Notation.
    pub fn san(&self) -> &str {
        &self.san
    }

    /// Piece removed by the move, if any.
    pub fn captured(&self) -> Option<Piece> {
        self.captured
    }
}

/// A single game session with one owner.
///
/// Tracks the played moves (for the move list, repetition detection and
/// undo) and an optional resignation on top of the current [`GameState`].
#[derive(Clone, Debug)]
pub struct Game {
    state: GameState,
    plies: Vec<Ply>,
    /// Position keys of every earlier position, parallel to `plies`.
    keys: Vec<u64>,
    resigned: Option<Color>,
}

impl Game {
    /// A game from the standard starting position.
    pub fn new() -> Game {
        Game::from_state(GameState::starting_position())
    }

    /// A game from an arbitrary position. Earlier history is unknown, so
    /// repetitions only count positions reached in this game.
    pub fn from_state(state: GameState) -> Game {
        info!(fen = %state, "new game");
        Game {
            state,
            plies: Vec::new(),
            keys: Vec::new(),
            resigned: None,
        }
    }

    /// A game from a FEN string.
    ///
    /// # Errors
    ///
    /// [`ChessError::InvalidStateEncoding`] when the FEN does not parse.
    pub fn from_fen(fen: &str) -> Result<Game, GameError> {
        let state: GameState = fen.trim().parse().map_err(ChessError::from)?;
        Ok(Game::from_state(state))
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn side_to_move(&self) -> Color {
        self.state.side_to_move()
    }

    pub fn plies(&self) -> &[Ply] {
        &self.plies
    }

    pub fn legal_moves(&self) -> MoveList {
        if self.outcome().is_some() {
            return MoveList::new();
        }
        legal_moves(&self.state)
    }

    /// Legal moves of the piece on `from`, for move highlighting.
    pub fn legal_moves_from(&self, from: Square) -> MoveList {
        if self.outcome().is_some() {
            return MoveList::new();
        }
        legal_moves_from(&self.state, from)
    }

    /// Board status of the current position, counting repetitions across
    /// this game's history. Resignation is not a board status; see
    /// [`Game::outcome`].
    pub fn status(&self) -> GameStatus {
        game_status(&self.state, &self.keys)
    }

    /// The result, once the game has one.
    pub fn outcome(&self) -> Option<Outcome> {
        if let Some(loser) = self.resigned {
            return Some(Outcome::Decisive {
                winner: !loser,
                reason: DecisiveReason::Resignation,
            });
        }
        Outcome::from_status(self.status())
    }

    fn ensure_ongoing(&self) -> Result<(), GameError> {
        match self.outcome() {
            Some(outcome) => Err(GameError::GameOver { outcome }),
            None => Ok(()),
        }
    }

    /// Play a legal move.
    ///
    /// # Errors
    ///
    /// [`GameError::GameOver`] once the game has ended, or
    /// [`ChessError::IllegalMove`] for a move that is not legal here. The
    /// game is unchanged on error.
    pub fn play(&mut self, mv: Move) -> Result<&Ply, GameError> {
        self.ensure_ongoing()?;
        let next = self.state.apply(mv)?;

        let ply = Ply {
            before: self.state,
            mv,
            san: self.state.san(mv),
            captured: self.state.captured_piece(mv),
        };
        debug!(san = %ply.san, %mv, "played");

        self.keys.push(self.state.key());
        self.state = next;
        let index = self.plies.len();
        self.plies.push(ply);

        if let Some(outcome) = self.outcome() {
            info!(%outcome, "game over");
        }
        Ok(&self.plies[index])
    }

    /// Parse move text (coordinate notation or SAN) and play it.
    ///
    /// # Errors
    ///
    /// As [`Game::play`], plus the notation errors of
    /// [`GameState::parse_move`].
    pub fn play_text(&mut self, text: &str) -> Result<&Ply, GameError> {
        self.ensure_ongoing()?;
        let mv = self.state.parse_move(text)?;
        self.play(mv)
    }

    /// Parse coordinate notation (`e2e4`, `e7e8q`) and play it.
    ///
    /// # Errors
    ///
    /// As [`Game::play`], plus the errors of
    /// [`rookery_core::parse_coordinate`].
    pub fn play_coordinate(&mut self, text: &str) -> Result<&Ply, GameError> {
        self.ensure_ongoing()?;
        let mv = rookery_core::parse_coordinate(&self.state, text)?;
        self.play(mv)
    }

    /// `loser` gives up; either side may resign on any turn.
    ///
    /// # Errors
    ///
    /// [`GameError::GameOver`] if the game has already ended.
    pub fn resign(&mut self, loser: Color) -> Result<Outcome, GameError> {
        self.ensure_ongoing()?;
        self.resigned = Some(loser);
        let outcome = Outcome::Decisive {
            winner: !loser,
            reason: DecisiveReason::Resignation,
        };
        info!(%outcome, "resigned");
        Ok(outcome)
    }

    /// Take back the last move, or withdraw a resignation if one was made
    /// since.
    ///
    /// # Errors
    ///
    /// [`GameError::NothingToUndo`] at the start of the game.
    pub fn undo(&mut self) -> Result<(), GameError> {
        if self.resigned.take().is_some() {
            debug!("resignation withdrawn");
            return Ok(());
        }
        let ply = self.plies.pop().ok_or(GameError::NothingToUndo)?;
        self.keys.pop();
        self.state = ply.before;
        debug!(san = %ply.san, "undone");
        Ok(())
    }

    /// Numbered SAN move list, e.g. `1. e4 e5 2. Nf3`.
    ///
    /// A game set up with Black to move starts with `N...`.
    pub fn move_list(&self) -> String {
        let mut out = String::new();
        for (i, ply) in self.plies.iter().enumerate() {
            let number = ply.before.fullmove_number();
            match ply.before.side_to_move() {
                Color::White => {
                    if !out.is_empty() {
                        out.push(' ');
                    }
                    out.push_str(&format!("{number}. {}", ply.san));
                }
                Color::Black if i == 0 => out.push_str(&format!("{number}... {}", ply.san)),
                Color::Black => {
                    out.push(' ');
                    out.push_str(&ply.san);
                }
            }
        }
        out
    }

    /// Pieces of `color` captured so far, in capture order.
    pub fn captured(&self, color: Color) -> Vec<Piece> {
        self.plies
            .iter()
            .filter_map(|ply| ply.captured)
            .filter(|piece| piece.color() == color)
            .collect()
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

#[cfg(test)]
mod tests {
    use super::Game;
    use crate::error::GameError;
    use crate::outcome::{DecisiveReason, DrawReason, Outcome};
    use rookery_core::{ChessError, Color, GameState, GameStatus, Piece, PieceKind, Square};

    fn play_all(game: &mut Game, moves: &[&str]) {
        for text in moves {
            game.play_text(text).unwrap();
        }
    }

    #[test]
    fn move_list_numbers_pairs() {
        let mut game = Game::new();
        play_all(&mut game, &["e4", "e5", "Nf3"]);
        assert_eq!(game.move_list(), "1. e4 e5 2. Nf3");
    }

    #[test]
    fn move_list_from_black_to_move() {
        let mut game =
            Game::from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1").unwrap();
        play_all(&mut game, &["c7c5", "g1f3"]);
        assert_eq!(game.move_list(), "1... c5 2. Nf3");
    }

    #[test]
    fn illegal_move_leaves_game_untouched() {
        let mut game = Game::new();
        let err = game.play_coordinate("e2e5").unwrap_err();
        assert_eq!(
            err,
            GameError::Chess(ChessError::IllegalMove { mv: "e2e5".into() })
        );
        assert_eq!(*game.state(), GameState::starting_position());
        assert!(game.plies().is_empty());
    }

    #[test]
    fn graveyard_and_undo() {
        let mut game = Game::new();
        play_all(&mut game, &["e4", "d5", "exd5", "Qxd5"]);
        assert_eq!(game.captured(Color::Black), vec![Piece::new(PieceKind::Pawn, Color::Black)]);
        assert_eq!(game.captured(Color::White), vec![Piece::new(PieceKind::Pawn, Color::White)]);

        game.undo().unwrap();
        assert!(game.captured(Color::White).is_empty());
        assert_eq!(
            game.state().piece_at(Square::D5),
            Some(Piece::new(PieceKind::Pawn, Color::White))
        );
        assert_eq!(game.move_list(), "1. e4 d5 2. exd5");
    }

    #[test]
    fn undo_at_start_fails() {
        assert_eq!(Game::new().undo(), Err(GameError::NothingToUndo));
    }

    #[test]
    fn checkmate_ends_game() {
        let mut game = Game::new();
        play_all(&mut game, &["f3", "e5", "g4", "Qh4#"]);
        let outcome = Outcome::Decisive {
            winner: Color::Black,
            reason: DecisiveReason::Checkmate,
        };
        assert_eq!(game.outcome(), Some(outcome));
        assert!(game.legal_moves().is_empty());
        assert_eq!(
            game.play_coordinate("e2e4").unwrap_err(),
            GameError::GameOver { outcome }
        );
    }

    #[test]
    fn resignation() {
        let mut game = Game::new();
        game.play_text("e4").unwrap();
        let outcome = game.resign(Color::Black).unwrap();
        assert_eq!(outcome.winner(), Some(Color::White));
        assert_eq!(game.status(), GameStatus::Ongoing);
        assert!(matches!(game.resign(Color::White), Err(GameError::GameOver { .. })));
        assert!(game.play_text("e5").is_err());

        game.undo().unwrap();
        assert_eq!(game.outcome(), None);
        assert!(game.play_text("e5").is_ok());
    }

    #[test]
    fn threefold_repetition_ends_game() {
        let mut game = Game::new();
        play_all(&mut game, &["Nf3", "Nf6", "Ng1", "Ng8", "Nf3", "Nf6", "Ng1"]);
        assert_eq!(game.outcome(), None);
        game.play_text("Ng8").unwrap();
        assert_eq!(game.status(), GameStatus::DrawByRepetition);
        assert_eq!(
            game.outcome(),
            Some(Outcome::Draw {
                reason: DrawReason::ThreefoldRepetition
            })
        );

        game.undo().unwrap();
        assert_eq!(game.outcome(), None);
    }

    #[test]
    fn bad_fen_is_reported() {
        assert!(matches!(
            Game::from_fen("8/8/8 w - - 0 1"),
            Err(GameError::Chess(ChessError::InvalidStateEncoding(_)))
        ));
    }
}
