//! Line command parsing.

use ludo_core::Color;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Commands typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start a game, optionally with an explicit turn order.
    Start(Option<[Color; 4]>),
    /// Roll for the current player.
    Roll,
    /// Apply the pending move of a piece.
    Move(u8),
    /// List the pending moves.
    Moves,
    /// List every piece.
    Pieces,
    /// Print the piece snapshot as JSON.
    State,
    /// Draw the board.
    Board,
    /// List the applied moves.
    History,
    /// Discard the game.
    Reset,
    Help,
    Quit,
    /// Unknown command (ignored with a hint).
    Unknown(String),
}

impl Command {
    /// Parse one input line.
    pub fn parse(input: &str) -> Result<Self, CommandError> {
        let input = input.trim();
        let mut parts = input.split_whitespace();

        let cmd = parts.next().unwrap_or("");

        match cmd {
            "start" | "new" => Self::parse_start(parts),
            "roll" | "r" => Ok(Command::Roll),
            "move" | "m" => Self::parse_move(parts),
            "moves" => Ok(Command::Moves),
            "pieces" => Ok(Command::Pieces),
            "state" => Ok(Command::State),
            "board" | "b" => Ok(Command::Board),
            "history" => Ok(Command::History),
            "reset" => Ok(Command::Reset),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            "" => Ok(Command::Unknown(String::new())),
            _ => Ok(Command::Unknown(input.to_string())),
        }
    }

    fn parse_start<'a>(parts: impl Iterator<Item = &'a str>) -> Result<Self, CommandError> {
        let colors = parts
            .map(|s| s.parse::<Color>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| CommandError::ParseError(e.to_string()))?;

        if colors.is_empty() {
            return Ok(Command::Start(None));
        }
        let order: [Color; 4] = colors.try_into().map_err(|given: Vec<Color>| {
            CommandError::ParseError(format!("expected 4 colors, got {}", given.len()))
        })?;
        Ok(Command::Start(Some(order)))
    }

    fn parse_move<'a>(mut parts: impl Iterator<Item = &'a str>) -> Result<Self, CommandError> {
        match parts.next() {
            Some(id) => id
                .parse()
                .map(Command::Move)
                .map_err(|_| CommandError::ParseError(format!("invalid piece id '{}'", id))),
            None => Err(CommandError::ParseError(
                "Expected a piece id (0-3)".to_string(),
            )),
        }
    }
}

/// Help text listing every command.
pub const HELP: &str = "\
commands:
  start [c1 c2 c3 c4]  start a game (optional turn order, e.g. start blue red green yellow)
  roll                 roll the dice for the current player
  move <id>            move piece <id> (0-3) with the pending roll
  moves                list the pending moves
  pieces               list every piece
  state                print the pieces as JSON
  board                draw the board
  history              list the moves played
  reset                discard the game
  quit                 leave";
