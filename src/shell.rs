//! Line-oriented interactive loop around a [`Board`].
//!
//! The shell only parses commands, calls into the engine and prints. It checks
//! for game over after each move; the board never decides that itself.

use std::io::{self, BufRead, Write};

use log::info;

use crate::config::{ConfigError, GameConfig};
use crate::engine::{fresh_seed, Board, BoardError, Move};

const PROMPT: &str = "(u,d,l,r,p,m,n,q) >";
const HELP: &str = "moves: u/c up, d/x down, l/z left, r/v right | p print, m legal moves, n new game, q quit";

#[derive(thiserror::Error, Debug)]
pub enum ShellError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("cannot display board: {0}")]
    Render(#[from] BoardError),
}

/// A parsed shell command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Move),
    Print,
    Moves,
    NewGame,
    Quit,
    Help,
}

impl Command {
    /// Parse the first word of `input`, case-insensitively. Blank input is `None`.
    pub fn parse(input: &str) -> Option<Command> {
        let word = input.split_whitespace().next()?.to_lowercase();
        let cmd = match word.as_str() {
            "u" | "c" => Command::Move(Move::Up),
            "d" | "x" => Command::Move(Move::Down),
            "l" | "z" => Command::Move(Move::Left),
            "r" | "v" => Command::Move(Move::Right),
            "p" => Command::Print,
            "m" => Command::Moves,
            "n" => Command::NewGame,
            "q" => Command::Quit,
            _ => Command::Help,
        };
        Some(cmd)
    }
}

/// Whether the loop keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// One interactive session: the settings plus the game currently in play.
pub struct Session {
    config: GameConfig,
    board: Board,
}

impl Session {
    /// Validate `config` and start the first game, with the configured seed
    /// if there is one.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(fresh_seed);
        let board = Self::build(&config, seed);
        Ok(Session { config, board })
    }

    pub fn board(&self) -> &Board { &self.board }

    /// Throw the current game away and start another with a fresh seed.
    pub fn new_game(&mut self) {
        self.board = Self::build(&self.config, fresh_seed());
        info!("new game, seed {}", self.board.seed());
    }

    /// Read commands until `q` or end of input. Lines that are not valid
    /// UTF-8 get the help text.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut out: W) -> Result<(), ShellError> {
        writeln!(out, "play with zxcv or udlr (seed {})", self.board.seed())?;
        write!(out, "{}", self.board.render()?)?;
        let mut buf = Vec::new();
        loop {
            write!(out, "{PROMPT}")?;
            out.flush()?;
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                writeln!(out)?;
                return Ok(());
            }
            let Ok(line) = std::str::from_utf8(&buf) else {
                writeln!(out, "{HELP}")?;
                continue;
            };
            let Some(cmd) = Command::parse(line) else {
                continue;
            };
            if self.execute(cmd, &mut out)? == Flow::Quit {
                return Ok(());
            }
        }
    }

    /// Run a single command, writing any output to `out`.
    pub fn execute<W: Write>(&mut self, cmd: Command, out: &mut W) -> Result<Flow, ShellError> {
        match cmd {
            Command::Move(dir) => {
                self.board.make_move(dir);
                write!(out, "{}", self.board.render()?)?;
                if self.board.is_game_over() {
                    writeln!(out, "Game over! Final score: {} (n for a new game)", self.board.score())?;
                }
            }
            Command::Print => write!(out, "{}", self.board.render()?)?,
            Command::Moves => {
                let moves = self.board.possible_moves();
                if moves.is_empty() {
                    writeln!(out, "no legal moves")?;
                }
                for (dir, gain) in moves {
                    writeln!(out, "{dir}: +{gain}")?;
                }
            }
            Command::NewGame => {
                self.new_game();
                writeln!(out, "new game (seed {})", self.board.seed())?;
                write!(out, "{}", self.board.render()?)?;
            }
            Command::Quit => {
                write!(out, "{}", self.board.render()?)?;
                writeln!(out, "bye!")?;
                return Ok(Flow::Quit);
            }
            Command::Help => writeln!(out, "{HELP}")?,
        }
        Ok(Flow::Continue)
    }

    fn build(config: &GameConfig, seed: u64) -> Board {
        Board::new(config.width, config.height, config.start_squares, seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> Session {
        Session::new(GameConfig { seed: Some(seed), ..GameConfig::default() }).unwrap()
    }

    fn play(session: &mut Session, script: &str) -> String {
        let mut out = Vec::new();
        session.run(script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parses_commands() {
        assert_eq!(Command::parse("u"), Some(Command::Move(Move::Up)));
        assert_eq!(Command::parse("C"), Some(Command::Move(Move::Up)));
        assert_eq!(Command::parse("x"), Some(Command::Move(Move::Down)));
        assert_eq!(Command::parse("  z extra words"), Some(Command::Move(Move::Left)));
        assert_eq!(Command::parse("v"), Some(Command::Move(Move::Right)));
        assert_eq!(Command::parse("p"), Some(Command::Print));
        assert_eq!(Command::parse("m"), Some(Command::Moves));
        assert_eq!(Command::parse("N"), Some(Command::NewGame));
        assert_eq!(Command::parse("q"), Some(Command::Quit));
        assert_eq!(Command::parse("jump"), Some(Command::Help));
        assert_eq!(Command::parse("   "), None);
    }

    #[test]
    fn quit_prints_board_and_bye() {
        let mut session = seeded(3);
        let text = play(&mut session, "p\nq\nu\n");
        assert!(text.starts_with("play with zxcv or udlr (seed 3)\n"));
        assert!(text.ends_with("bye!\n"));
        assert_eq!(text.matches("Score: 0").count(), 3);
    }

    #[test]
    fn end_of_input_ends_session() {
        let mut session = seeded(4);
        let text = play(&mut session, "");
        assert!(text.ends_with(&format!("{PROMPT}\n")));
    }

    #[test]
    fn moves_go_through_the_board() {
        let mut session = seeded(8);
        let mut reference = Board::new(4, 4, 2, 8);
        play(&mut session, "l\nu\nr\nd\nq\n");
        for dir in [Move::Left, Move::Up, Move::Right, Move::Down] {
            reference.make_move(dir);
        }
        assert_eq!(session.board().values(), reference.values());
        assert_eq!(session.board().score(), reference.score());
    }

    #[test]
    fn lists_legal_moves() {
        let mut session = seeded(5);
        let mut out = Vec::new();
        session.execute(Command::Moves, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let expected: Vec<String> =
            session.board().possible_moves().iter().map(|(dir, gain)| format!("{dir}: +{gain}")).collect();
        assert_eq!(text.lines().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn new_game_replaces_board() {
        let mut session = seeded(6);
        session.board.make_move(Move::Left);
        session.board.make_move(Move::Up);
        let mut out = Vec::new();
        assert_eq!(session.execute(Command::NewGame, &mut out).unwrap(), Flow::Continue);
        assert_eq!(session.board().score(), 0);
        assert_eq!(session.board().count_empty(), 14);
    }

    #[test]
    fn unknown_command_prints_help() {
        let mut session = seeded(2);
        let mut out = Vec::new();
        session.execute(Command::Help, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), format!("{HELP}\n"));
    }

    #[test]
    fn reports_game_over() {
        // A 1x1 board is full after its first tile and can never move.
        let mut session = Session::new(GameConfig { width: 1, height: 1, start_squares: 1, seed: Some(1) }).unwrap();
        let mut out = Vec::new();
        session.execute(Command::Move(Move::Left), &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("Game over! Final score: 0"));
    }

    #[test]
    fn rejects_invalid_config() {
        let narrow = GameConfig { width: 0, ..GameConfig::default() };
        assert!(matches!(Session::new(narrow), Err(ConfigError::Invalid(_))));
        let crowded = GameConfig { width: 2, height: 1, start_squares: 3, seed: Some(1) };
        assert!(matches!(Session::new(crowded), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn invalid_utf8_line_prints_help() {
        let mut session = seeded(9);
        let mut out = Vec::new();
        session.run(&b"\xff\xfe\np\nq\n"[..], &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains(&format!("{PROMPT}{HELP}\n")));
        assert!(text.ends_with("bye!\n"));
        assert_eq!(text.matches("Score: 0").count(), 3);
    }
}
