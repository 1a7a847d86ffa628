//! The interactive command loop.

use std::io::{BufRead, Write};

use tracing::{debug, info, trace, warn};

use rookery_core::{Color, GameState, Move, divide, in_check};
use rookery_game::Game;

use crate::command::{Command, parse_command};
use crate::config::SessionConfig;
use crate::error::CliError;

const HELP: &str = "\
commands:
  new                                 start a new game
  position startpos [moves m1 m2 ...] starting position plus moves
  position fen <FEN> [moves ...]      load a position
  move <m> | <m>                      play a move (e2e4, e7e8q or SAN)
  moves [square]                      list legal moves
  board                               show the board
  fen                                 show the FEN
  status                              show the game status
  history                             show the move list
  captured                            show captured pieces
  undo                                take back the last move
  resign                              the side to move resigns
  perft <depth>                       count leaf nodes per move
  set <name> <value>                  show_board, unicode, max_perft_depth
  help                                this text
  quit                                leave";

/// Whether the loop should keep reading.
enum Flow {
    Continue,
    Quit,
}

/// One game plus its presentation settings, driven line by line.
pub struct Session {
    game: Game,
    config: SessionConfig,
}

impl Session {
    pub fn new(game: Game, config: SessionConfig) -> Self {
        Self { game, config }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Read commands from `input` until `quit` or end of input.
    ///
    /// Command errors are written to `output` as `error: <message>` and
    /// leave the game unchanged; only I/O failures end the loop early.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<(), CliError> {
        if self.config.show_board {
            self.print_board(&mut output)?;
        }

        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");

            let result = parse_command(trimmed).and_then(|cmd| self.execute(cmd, &mut output));
            match result {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(CliError::Io { source }) => return Err(CliError::Io { source }),
                Err(err) => {
                    warn!(error = %err, "command rejected");
                    writeln!(output, "error: {err}")?;
                }
            }
            output.flush()?;
        }

        info!("session closed");
        Ok(())
    }

    fn execute<W: Write>(&mut self, cmd: Command, out: &mut W) -> Result<Flow, CliError> {
        match cmd {
            Command::New => {
                self.game = Game::new();
                self.after_position_change(out)?;
            }
            Command::Position { start, moves } => self.handle_position(start, &moves, out)?,
            Command::Move(text) => self.handle_move(&text, out)?,
            Command::Moves(from) => {
                let moves = match from {
                    Some(sq) => self.game.legal_moves_from(sq),
                    None => self.game.legal_moves(),
                };
                let mut texts: Vec<String> = moves.iter().map(Move::to_string).collect();
                texts.sort_unstable();
                if texts.is_empty() {
                    writeln!(out, "(none)")?;
                } else {
                    writeln!(out, "{}", texts.join(" "))?;
                }
            }
            Command::Board => self.print_board(out)?,
            Command::Fen => writeln!(out, "{}", self.game.state())?,
            Command::Status => self.print_status(out)?,
            Command::History => {
                let list = self.game.move_list();
                if list.is_empty() {
                    writeln!(out, "(no moves)")?;
                } else {
                    writeln!(out, "{list}")?;
                }
            }
            Command::Captured => {
                for color in Color::ALL {
                    let pieces: Vec<String> = self
                        .game
                        .captured(color)
                        .iter()
                        .map(|piece| {
                            if self.config.unicode {
                                piece.glyph().to_string()
                            } else {
                                piece.fen_char().to_string()
                            }
                        })
                        .collect();
                    writeln!(out, "{}: {}", color.name(), pieces.join(" "))?;
                }
            }
            Command::Undo => {
                self.game.undo()?;
                self.after_position_change(out)?;
            }
            Command::Resign => {
                let outcome = self.game.resign(self.game.side_to_move())?;
                writeln!(out, "game over: {outcome}")?;
            }
            Command::Perft(depth) => self.handle_perft(depth, out)?,
            Command::Set(option) => {
                self.config.set(option);
                writeln!(out, "{option}")?;
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
            Command::Empty => {}
        }
        Ok(Flow::Continue)
    }

    /// Replay `moves` on a fresh game from `start`; the current game is
    /// replaced only if every move is legal.
    fn handle_position<W: Write>(
        &mut self,
        start: GameState,
        moves: &[String],
        out: &mut W,
    ) -> Result<(), CliError> {
        let mut game = Game::from_state(start);
        for mv in moves {
            game.play_text(mv).map_err(|source| CliError::InvalidMove {
                mv: mv.clone(),
                source,
            })?;
        }
        self.game = game;
        self.after_position_change(out)
    }

    fn handle_move<W: Write>(&mut self, text: &str, out: &mut W) -> Result<(), CliError> {
        let san = self.game.play_text(text)?.san().to_string();
        writeln!(out, "{san}")?;
        if self.config.show_board {
            self.print_board(out)?;
        }
        if let Some(outcome) = self.game.outcome() {
            writeln!(out, "game over: {outcome}")?;
        }
        Ok(())
    }

    fn handle_perft<W: Write>(&self, depth: u32, out: &mut W) -> Result<(), CliError> {
        let max = self.config.max_perft_depth;
        if depth == 0 || depth > max {
            return Err(CliError::PerftDepth { depth, max });
        }
        let split = divide(self.game.state(), depth);
        let mut total = 0u64;
        for (mv, nodes) in &split {
            writeln!(out, "{mv}: {nodes}")?;
            total += nodes;
        }
        trace!(depth, total, "perft finished");
        writeln!(out)?;
        writeln!(out, "nodes: {total}")?;
        Ok(())
    }

    fn after_position_change<W: Write>(&self, out: &mut W) -> Result<(), CliError> {
        if self.config.show_board {
            self.print_board(out)
        } else {
            writeln!(out, "ok")?;
            Ok(())
        }
    }

    fn print_board<W: Write>(&self, out: &mut W) -> Result<(), CliError> {
        let state = self.game.state();
        writeln!(out, "{}", state.board().pretty().unicode(self.config.unicode))?;
        writeln!(out, "{} to move", state.side_to_move().name())?;
        Ok(())
    }

    fn print_status<W: Write>(&self, out: &mut W) -> Result<(), CliError> {
        match self.game.outcome() {
            Some(outcome) => writeln!(out, "game over: {outcome}")?,
            None => {
                let state = self.game.state();
                let check = if in_check(state) { ", check" } else { "" };
                writeln!(
                    out,
                    "{}, {} to move{check}",
                    self.game.status(),
                    state.side_to_move().name()
                )?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::Session;
    use crate::config::SessionConfig;
    use rookery_game::Game;

    fn run(script: &str) -> String {
        let config = SessionConfig {
            show_board: false,
            ..SessionConfig::default()
        };
        let mut session = Session::new(Game::new(), config);
        let mut out = Vec::new();
        session.run(Cursor::new(script), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn plays_and_reports() {
        let out = run("e2e4\nmove e7e5\nNf3\nhistory\nfen\n");
        assert_eq!(
            out,
            "e4\ne5\nNf3\n1. e4 e5 2. Nf3\n\
             rnbqkbnr/pppp1ppp/8/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 1 2\n"
        );
    }

    #[test]
    fn errors_do_not_end_the_session() {
        let out = run("e2e5\nfoo bar\ne2e4\n");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "error: illegal move: e2e5");
        assert_eq!(lines[1], "error: unknown command: foo");
        assert_eq!(lines[2], "e4");
    }

    #[test]
    fn quit_stops_reading() {
        let out = run("quit\ne2e4\n");
        assert!(out.is_empty());
    }

    #[test]
    fn moves_from_square_sorted() {
        assert_eq!(run("moves g1\n"), "g1f3 g1h3\n");
        assert_eq!(run("moves e7\n"), "(none)\n");
    }

    #[test]
    fn perft_divide_output() {
        let out = run("perft 1\n");
        assert!(out.starts_with("a2a3: 1\n"));
        assert!(out.ends_with("\nnodes: 20\n"));
        let out = run("perft 9\n");
        assert_eq!(out, "error: perft depth must be between 1 and 6, got 9\n");
    }

    #[test]
    fn undo_and_status() {
        let out = run("e2e4\nundo\nundo\nstatus\n");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines, vec!["e4", "ok", "error: no move to undo", "ongoing, white to move"]);
    }

    #[test]
    fn resign_then_move_is_refused() {
        let out = run("resign\ne2e4\nstatus\n");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "game over: 0-1 (resignation)");
        assert_eq!(lines[1], "error: game is over: 0-1 (resignation)");
        assert_eq!(lines[2], "game over: 0-1 (resignation)");
    }
}
