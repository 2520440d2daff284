//! Interactive console loop.
//!
//! Reads commands line by line from any [`BufRead`] and writes prompts,
//! the board and error reports to any [`Write`], so the whole loop can be
//! driven from tests.

use crate::render::render_board;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use strictly_foxhounds::{
    parse_position, ContractErrorKind, Figure, Game, MoveError, Position,
};
use tracing::{debug, info, instrument, warn};

/// Entries of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Make a move for the side to play
    Move,
    /// Save the game to a file
    Save,
    /// Replace the game with a saved one
    Load,
    /// Leave the game
    Exit,
}

impl MenuChoice {
    /// Parses the number typed at the menu prompt.
    pub fn from_input(text: &str) -> Option<Self> {
        match text.trim() {
            "1" => Some(Self::Move),
            "2" => Some(Self::Save),
            "3" => Some(Self::Load),
            "4" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Console front end over a pair of line streams.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console reading from `input` and writing to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the console and returns its output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Plays until someone wins, the player exits, or input runs out.
    ///
    /// # Errors
    ///
    /// Returns an error if the streams fail or the game reports a broken
    /// contract.
    #[instrument(skip_all, fields(dimension = game.board().dimension()))]
    pub fn run(&mut self, game: &mut Game) -> anyhow::Result<()> {
        loop {
            self.show(game)?;

            if game.status().is_over() {
                writeln!(self.output, "{}", game.status())?;
                info!(status = %game.status(), "Game finished");
                return Ok(());
            }

            let Some(choice) = self.menu_query(game.to_move())? else {
                debug!("Input closed");
                return Ok(());
            };

            match choice {
                MenuChoice::Move => {
                    if !self.play_move(game)? {
                        debug!("Input closed during move");
                        return Ok(());
                    }
                }
                MenuChoice::Save => self.save(game)?,
                MenuChoice::Load => self.load(game)?,
                MenuChoice::Exit => {
                    info!("Player exited");
                    return Ok(());
                }
            }
        }
    }

    /// Prints the board followed by the flat position list.
    fn show(&mut self, game: &Game) -> anyhow::Result<()> {
        let positions = serde_json::to_string(&game.board().positions())?;
        writeln!(self.output)?;
        write!(self.output, "{}", render_board(game.board()))?;
        writeln!(self.output, "Positions: {positions}")?;
        Ok(())
    }

    /// Asks for a menu entry until a valid one is given.
    fn menu_query(&mut self, to_move: Figure) -> io::Result<Option<MenuChoice>> {
        loop {
            writeln!(self.output, "{} to move.", to_move.side())?;
            writeln!(self.output, "1. Move")?;
            writeln!(self.output, "2. Save")?;
            writeln!(self.output, "3. Load")?;
            writeln!(self.output, "4. Exit")?;
            write!(self.output, "Choice: ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match MenuChoice::from_input(&line) {
                Some(choice) => return Ok(Some(choice)),
                None => writeln!(self.output, "ERROR: Please enter a number from 1 to 4.")?,
            }
        }
    }

    /// Asks for `ORIGIN DESTINATION` until both squares are on the board.
    fn position_query(&mut self, dimension: usize) -> io::Result<Option<(Position, Position)>> {
        loop {
            write!(self.output, "Enter move (e.g. E8 D7): ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match parse_move_line(&line, dimension) {
                Some(squares) => return Ok(Some(squares)),
                None => writeln!(
                    self.output,
                    "ERROR: Please enter two squares on the board, such as E8 D7."
                )?,
            }
        }
    }

    /// Asks for a non-empty file path.
    fn file_query(&mut self) -> io::Result<Option<PathBuf>> {
        loop {
            write!(self.output, "Enter file path: ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            let path = line.trim();
            if path.is_empty() {
                writeln!(self.output, "ERROR: Please enter a file path.")?;
            } else {
                return Ok(Some(PathBuf::from(path)));
            }
        }
    }

    /// Re-asks until the side to move makes a legal move.
    ///
    /// Returns `false` if input ran out first.
    fn play_move(&mut self, game: &mut Game) -> anyhow::Result<bool> {
        loop {
            let Some((origin, destination)) = self.position_query(game.board().dimension())? else {
                return Ok(false);
            };

            match game.make_move(origin, destination) {
                Ok(_) => return Ok(true),
                Err(MoveError::IllegalMove { mv, rule }) => {
                    debug!(%mv, %rule, "Rejected move");
                    writeln!(self.output, "ERROR: Invalid move ({rule} rule). Try again!")?;
                }
                Err(err @ MoveError::GameOver(_)) => return Err(err.into()),
            }
        }
    }

    fn save(&mut self, game: &Game) -> anyhow::Result<()> {
        let Some(path) = self.file_query()? else {
            return Ok(());
        };

        match game.save(&path) {
            Ok(true) => writeln!(self.output, "Game saved to {}.", path.display())?,
            Ok(false) => writeln!(self.output, "ERROR: Saving file failed.")?,
            Err(err)
                if matches!(
                    err.kind,
                    ContractErrorKind::SaveConflict(_) | ContractErrorKind::UnsupportedDimension(_)
                ) =>
            {
                warn!(error = %err, "Save refused");
                writeln!(self.output, "ERROR: {}", err.kind)?;
            }
            Err(err) => return Err(err.into()),
        }
        Ok(())
    }

    fn load(&mut self, game: &mut Game) -> anyhow::Result<()> {
        let Some(path) = self.file_query()? else {
            return Ok(());
        };

        match game.load(&path) {
            Ok(next_mover) => {
                writeln!(self.output, "Game loaded. {} to move.", next_mover.side())?;
            }
            Err(failure) => {
                warn!(%failure, path = %path.display(), "Load failed");
                writeln!(self.output, "ERROR: Loading from file failed: {failure}")?;
            }
        }
        Ok(())
    }

    /// Next input line without its line ending, or `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// Parses `ORIGIN DESTINATION`, both squares inside the board.
fn parse_move_line(line: &str, dimension: usize) -> Option<(Position, Position)> {
    let mut tokens = line.split_whitespace();
    let (Some(origin), Some(destination), None) = (tokens.next(), tokens.next(), tokens.next())
    else {
        return None;
    };

    let origin = parse_position(origin).ok()?;
    let destination = parse_position(destination).ok()?;
    (origin.is_within(dimension) && destination.is_within(dimension))
        .then_some((origin, destination))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use strictly_foxhounds::{BoardState, GameStatus};
    use tempfile::TempDir;

    fn pos(text: &str) -> Position {
        text.parse().unwrap()
    }

    fn play(game: &mut Game, input: &str) -> String {
        let mut console = Console::new(Cursor::new(input.as_bytes()), Vec::new());
        console.run(game).unwrap();
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_menu_choice_parsing() {
        assert_eq!(MenuChoice::from_input("1"), Some(MenuChoice::Move));
        assert_eq!(MenuChoice::from_input(" 4 "), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::from_input("5"), None);
        assert_eq!(MenuChoice::from_input("move"), None);
    }

    #[test]
    fn test_parse_move_line() {
        assert_eq!(parse_move_line("E8 D7", 8), Some((pos("E8"), pos("D7"))));
        assert_eq!(parse_move_line("  E8   D7 ", 8), Some((pos("E8"), pos("D7"))));
        assert_eq!(parse_move_line("E8", 8), None);
        assert_eq!(parse_move_line("E8 D7 C6", 8), None);
        assert_eq!(parse_move_line("E8 I7", 8), None);
        assert_eq!(parse_move_line("e8 d7", 8), None);
        assert_eq!(parse_move_line("J10 I9", 10), Some((pos("J10"), pos("I9"))));
    }

    #[test]
    fn test_exit_shows_board_and_positions() {
        let mut game = Game::new(8).unwrap();
        let out = play(&mut game, "4\n");
        assert!(out.contains("8 ....F... 8"), "{out}");
        assert!(out.contains(r#"Positions: ["B1","D1","F1","H1","E8"]"#), "{out}");
        assert!(out.contains("Fox to move."), "{out}");
    }

    #[test]
    fn test_end_of_input_stops_quietly() {
        let mut game = Game::new(8).unwrap();
        let before = game.clone();
        play(&mut game, "");
        assert_eq!(game, before);
    }

    #[test]
    fn test_invalid_menu_choice_reasks() {
        let mut game = Game::new(8).unwrap();
        let out = play(&mut game, "9\nx\n4\n");
        assert_eq!(out.matches("ERROR: Please enter a number").count(), 2);
    }

    #[test]
    fn test_illegal_move_is_reasked() {
        let mut game = Game::new(8).unwrap();
        let out = play(&mut game, "1\nE8 E7\nB1 C2\nZ9 D7\nE8 D7\n4\n");

        assert!(out.contains("ERROR: Invalid move (adjacency rule)"), "{out}");
        assert!(out.contains("ERROR: Invalid move (ownership rule)"), "{out}");
        assert!(out.contains("ERROR: Please enter two squares"), "{out}");
        assert_eq!(game.board().fox(), pos("D7"));
        assert_eq!(game.to_move(), Figure::Hound);
        assert!(out.contains("Hounds to move."), "{out}");
    }

    #[test]
    fn test_winning_move_ends_loop() {
        let board =
            BoardState::from_positions(8, &[pos("D1"), pos("F1"), pos("H1"), pos("E4"), pos("A2")])
                .unwrap();
        let mut game = Game::from_parts(board, Figure::Fox);
        // Nothing after the winning move is read.
        let out = play(&mut game, "1\nA2 B1\n4\n");

        assert_eq!(game.status(), GameStatus::FoxWins);
        assert!(out.trim_end().ends_with("The Fox wins!"), "{out}");
    }

    #[test]
    fn test_save_writes_side_to_move() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("game.txt");
        let mut game = Game::new(8).unwrap();

        let out = play(&mut game, &format!("1\nE8 D7\n2\n{}\n4\n", path.display()));
        assert!(out.contains("Game saved"), "{out}");
        assert_eq!(fs::read_to_string(&path).unwrap(), "H B1 D1 F1 H1 D7");
    }

    #[test]
    fn test_save_conflict_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("taken.txt");
        fs::write(&path, "keep me").unwrap();
        let mut game = Game::new(8).unwrap();

        let out = play(&mut game, &format!("2\n{}\n4\n", path.display()));
        assert!(out.contains("ERROR: "), "{out}");
        assert_eq!(fs::read_to_string(&path).unwrap(), "keep me");
    }

    #[test]
    fn test_save_other_dimension_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("big.txt");
        let mut game = Game::new(10).unwrap();

        let out = play(&mut game, &format!("2\n{}\n4\n", path.display()));
        assert!(out.contains("ERROR: "), "{out}");
        assert!(!path.exists());
    }

    #[test]
    fn test_load_replaces_game() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("game.txt");
        fs::write(&path, "H C2 D1 G2 H1 D5").unwrap();
        let mut game = Game::new(8).unwrap();

        let out = play(&mut game, &format!("3\n{}\n4\n", path.display()));
        assert!(out.contains("Game loaded. Hounds to move."), "{out}");
        assert_eq!(game.to_move(), Figure::Hound);
        assert_eq!(game.board().fox(), pos("D5"));
    }

    #[test]
    fn test_failed_load_keeps_game() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.txt");
        let mut game = Game::new(8).unwrap();
        let before = game.clone();

        let out = play(&mut game, &format!("3\n\n{}\n4\n", path.display()));
        assert!(out.contains("ERROR: Please enter a file path."), "{out}");
        assert!(out.contains("ERROR: Loading from file failed"), "{out}");
        assert_eq!(game, before);
    }
}
