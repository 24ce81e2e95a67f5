//! Interactive session: reads commands, drives the engine, prints results.

use crate::command::{Command, HELP};
use crate::render;
use ludo_core::Color;
use ludo_engine::{DiceSource, Game, GameError, GameEvent, RollOutcome, RuleOptions, TurnPhase};
use std::io::{BufRead, Write};

/// A game session over a line-based reader and writer.
pub struct Session<R: BufRead, W: Write> {
    reader: R,
    writer: W,
    game: Game,
    dice: Box<dyn DiceSource>,
    /// Turn order used by a bare `start`.
    colors: [Color; 4],
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(
        reader: R,
        writer: W,
        rules: RuleOptions,
        colors: [Color; 4],
        dice: Box<dyn DiceSource>,
    ) -> Self {
        Self {
            reader,
            writer,
            game: Game::with_rules(rules),
            dice,
            colors,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Reads and executes commands until `quit` or end of input.
    pub fn run(&mut self) -> anyhow::Result<()> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                break;
            }
            let keep_going = match Command::parse(&line) {
                Ok(cmd) => self.execute(cmd)?,
                Err(e) => {
                    self.print(&e.to_string())?;
                    true
                }
            };
            self.writer.flush()?;
            if !keep_going {
                break;
            }
        }
        Ok(())
    }

    /// Executes one command. Returns false once the session should end.
    ///
    /// Engine errors are reported to the writer; only I/O and
    /// serialization failures are returned.
    pub fn execute(&mut self, cmd: Command) -> anyhow::Result<bool> {
        let result = match cmd {
            Command::Start(order) => self.start(order.unwrap_or(self.colors)),
            Command::Roll => self.roll(),
            Command::Move(id) => self.play(id),
            Command::Moves => self.print(&render::render_moves(self.game.legal_moves())),
            Command::Pieces => self.print(&render::render_pieces(&self.game.query_pieces())),
            Command::State => {
                let json = serde_json::to_string_pretty(&self.game.query_pieces())?;
                self.print(&json)
            }
            Command::Board => self.print(&render::render_board(&self.game)),
            Command::History => self.print(&render::render_history(self.game.move_history())),
            Command::Reset => {
                self.game.reset();
                self.print("Game reset. Type 'start' to play.")
            }
            Command::Help => self.print(HELP),
            Command::Quit => return Ok(false),
            Command::Unknown(input) if input.is_empty() => Ok(()),
            Command::Unknown(input) => {
                self.print(&format!("Unknown command: {} (try 'help')", input))
            }
        };

        match result {
            Ok(()) => Ok(true),
            Err(e) if e.is::<GameError>() => {
                self.print(&format!("error: {}", e))?;
                Ok(true)
            }
            Err(e) => Err(e),
        }
    }

    fn print(&mut self, text: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", text)?;
        Ok(())
    }

    fn start(&mut self, colors: [Color; 4]) -> anyhow::Result<()> {
        self.game.start(colors)?;
        self.status()
    }

    fn roll(&mut self) -> anyhow::Result<()> {
        let name = self.current_name();
        let outcome = self.game.roll_dice(self.dice.as_mut())?;
        match outcome {
            RollOutcome::Moves { dice, moves } => {
                self.print(&format!("{} rolled a {}.", name, dice))?;
                return self.print(&render::render_moves(moves.as_slice()));
            }
            RollOutcome::TurnForfeited { .. } => {
                self.print(&format!("{} rolled three 6s! Turn skipped.", name))?;
            }
            RollOutcome::NoLegalMoves { dice, .. } => {
                self.print(&format!("{} rolled a {}.", name, dice))?;
                self.print(&format!("{} has no valid moves. Passing turn.", name))?;
            }
        }
        self.status()
    }

    fn play(&mut self, id: u8) -> anyhow::Result<()> {
        let name = self.current_name();
        for event in self.game.apply_piece(id)? {
            match event {
                GameEvent::Capture {
                    capturer,
                    victim,
                    cell,
                } => self.print(&format!("{} captured {} at {}!", capturer, victim, cell))?,
                GameEvent::ExtraTurn { .. } => {
                    self.print(&format!("{} rolled a 6! Roll again.", name))?
                }
                GameEvent::Win { .. } => self.print(&format!("{} wins the game!", name))?,
                GameEvent::NoOp => {}
            }
        }
        self.status()
    }

    fn current_name(&self) -> String {
        self.game
            .current_player()
            .map(|p| p.name())
            .unwrap_or_default()
    }

    /// Prints whose turn it is and what they must do.
    fn status(&mut self) -> anyhow::Result<()> {
        let name = self.current_name();
        let line = match self.game.phase() {
            TurnPhase::NotStarted => "No game running. Type 'start' to play.".to_string(),
            TurnPhase::AwaitingRoll => format!("It's {}'s turn. Type 'roll'.", name),
            TurnPhase::AwaitingMove { dice, .. } => {
                format!("{} rolled a {}. Type 'move <id>'.", name, dice)
            }
            TurnPhase::GameOver { winner } => {
                format!("Game over: Player {} won. Type 'start' to play again.", winner)
            }
        };
        self.print(&line)
    }
}
