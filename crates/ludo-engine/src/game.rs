//! Game state, move execution, and turn control.
//!
//! [`Game`] owns the players and runs the turn state machine:
//!
//! ```text
//! NotStarted --start--> AwaitingRoll --roll--> AwaitingMove --apply--> AwaitingRoll
//!                            ^  |                                  \--> GameOver
//!                            \--/ (forfeit / no legal moves)
//! ```
//!
//! Every mutating call either succeeds completely or returns an error and
//! leaves the game untouched.

use crate::board;
use crate::dice::{DiceSource, DICE_FACES};
use crate::movegen::{generate_moves, MoveList, RELEASE_ROLL};
use crate::{GameError, GameEvent, PieceView, Player, RollOutcome, RuleOptions};
use ludo_core::{Cell, Color, Move, PieceRef, PieceState, PIECES_PER_PLAYER};

/// Consecutive sixes that forfeit the turn.
pub const FORFEIT_SIXES: u8 = 3;

/// Where the turn state machine currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnPhase {
    /// No game running.
    NotStarted,
    /// The current player must roll.
    AwaitingRoll,
    /// The current player must pick one of `moves`.
    AwaitingMove { dice: u8, moves: MoveList },
    /// A player has brought all four pieces home.
    GameOver { winner: Color },
}

/// Target of a setup placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// The piece's own base slot.
    Base,
    /// Main-path index (0-50).
    Main(usize),
    /// Home-path index (0-4) on the piece's own home path.
    HomePath(usize),
    /// Finished.
    Home,
}

/// A recorded move in game history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameMove {
    /// The move that was applied.
    pub mov: Move,
    /// The roll it used.
    pub dice: u8,
    /// What applying it caused.
    pub events: Vec<GameEvent>,
}

/// A four-player game with turn tracking and history.
#[derive(Debug, Clone)]
pub struct Game {
    /// Players in turn order.
    players: Vec<Player>,
    /// Index of the player whose turn it is.
    current: usize,
    /// Most recent dice value.
    last_dice: Option<u8>,
    /// Sixes rolled in a row during the current turn.
    consecutive_sixes: u8,
    phase: TurnPhase,
    rules: RuleOptions,
    /// Applied moves, oldest first.
    history: Vec<GameMove>,
    /// Number of times the turn passed to the next player.
    turns: usize,
}

impl Default for Game {
    fn default() -> Self {
        Self::with_rules(RuleOptions::default())
    }
}

impl Game {
    /// Creates a started game with the given turn order and default rules.
    ///
    /// Fails with [`GameError::InvalidColors`] unless the colors are distinct.
    pub fn new(colors: [Color; 4]) -> Result<Self, GameError> {
        let mut game = Game::default();
        game.start(colors)?;
        Ok(game)
    }

    /// Creates a started game in the default turn order: Red, Green, Yellow, Blue.
    pub fn standard() -> Self {
        let mut game = Game::default();
        game.init_players(Color::ALL);
        game
    }

    /// Creates an unstarted game using `rules`.
    pub fn with_rules(rules: RuleOptions) -> Self {
        Game {
            players: Vec::new(),
            current: 0,
            last_dice: None,
            consecutive_sixes: 0,
            phase: TurnPhase::NotStarted,
            rules,
            history: Vec::new(),
            turns: 0,
        }
    }

    /// Starts a fresh game, discarding any game in progress.
    pub fn start(&mut self, colors: [Color; 4]) -> Result<(), GameError> {
        for (i, color) in colors.iter().enumerate() {
            if colors[..i].contains(color) {
                return Err(GameError::InvalidColors(colors.to_vec()));
            }
        }
        self.init_players(colors);
        Ok(())
    }

    fn init_players(&mut self, colors: [Color; 4]) {
        self.players = colors.iter().map(|&c| Player::new(c)).collect();
        self.current = 0;
        self.last_dice = None;
        self.consecutive_sixes = 0;
        self.phase = TurnPhase::AwaitingRoll;
        self.history.clear();
        self.turns = 0;
        tracing::info!(
            "Game started! It's {}'s turn.",
            self.players[self.current].name()
        );
    }

    /// Discards all players and returns to the unstarted state.
    ///
    /// Rule options are kept.
    pub fn reset(&mut self) {
        *self = Game::with_rules(self.rules);
        tracing::info!("Game reset");
    }

    /// Returns the players in turn order (empty when not started).
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player with the given color.
    pub fn player(&self, color: Color) -> Option<&Player> {
        self.players.iter().find(|p| p.color() == color)
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> Option<&Player> {
        match self.phase {
            TurnPhase::NotStarted => None,
            _ => self.players.get(self.current),
        }
    }

    /// Returns the turn phase.
    pub fn phase(&self) -> &TurnPhase {
        &self.phase
    }

    /// Returns the moves awaiting selection (empty unless a roll is pending).
    pub fn legal_moves(&self) -> &[Move] {
        match &self.phase {
            TurnPhase::AwaitingMove { moves, .. } => moves.as_slice(),
            _ => &[],
        }
    }

    pub fn last_dice(&self) -> Option<u8> {
        self.last_dice
    }

    pub fn consecutive_sixes(&self) -> u8 {
        self.consecutive_sixes
    }

    pub fn rules(&self) -> &RuleOptions {
        &self.rules
    }

    pub fn is_started(&self) -> bool {
        self.phase != TurnPhase::NotStarted
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, TurnPhase::GameOver { .. })
    }

    /// Returns the winner once the game is over.
    pub fn winner(&self) -> Option<Color> {
        match self.phase {
            TurnPhase::GameOver { winner } => Some(winner),
            _ => None,
        }
    }

    /// Returns the move history.
    pub fn move_history(&self) -> &[GameMove] {
        &self.history
    }

    /// Returns how many times the turn has passed to the next player.
    pub fn turn_count(&self) -> usize {
        self.turns
    }

    /// Returns a snapshot of every piece, in turn order then piece order.
    pub fn query_pieces(&self) -> Vec<PieceView> {
        self.players
            .iter()
            .flat_map(|p| p.pieces().iter().map(PieceView::from))
            .collect()
    }

    /// Rolls the dice for the current player.
    ///
    /// A third six in a row forfeits the turn. A roll without legal moves
    /// passes the turn. Otherwise the game waits for one of the returned
    /// moves to be applied.
    pub fn roll_dice<D: DiceSource + ?Sized>(
        &mut self,
        dice: &mut D,
    ) -> Result<RollOutcome, GameError> {
        match self.phase {
            TurnPhase::AwaitingRoll => {}
            TurnPhase::AwaitingMove { .. } => return Err(GameError::MoveSelectionPending),
            TurnPhase::NotStarted => return Err(GameError::GameNotStarted),
            TurnPhase::GameOver { .. } => return Err(GameError::GameAlreadyOver),
        }

        let value = dice.roll();
        if !(1..=DICE_FACES).contains(&value) {
            return Err(GameError::InvalidDiceValue(value));
        }

        let player = &self.players[self.current];
        let color = player.color();
        let name = player.name();
        tracing::debug!("{} rolled a {}", name, value);

        let sixes = if value == RELEASE_ROLL {
            self.consecutive_sixes + 1
        } else {
            0
        };

        if sixes >= FORFEIT_SIXES {
            tracing::info!("{} rolled three 6s! Turn skipped.", name);
            self.last_dice = Some(value);
            self.advance_turn();
            return Ok(RollOutcome::TurnForfeited { color, dice: value });
        }

        let moves = generate_moves(player, value)?;
        self.last_dice = Some(value);
        self.consecutive_sixes = sixes;

        if moves.is_empty() {
            tracing::info!("{} has no valid moves. Passing turn.", name);
            self.advance_turn();
            return Ok(RollOutcome::NoLegalMoves { color, dice: value });
        }

        tracing::debug!("{} has {} legal moves", name, moves.len());
        self.phase = TurnPhase::AwaitingMove {
            dice: value,
            moves: moves.clone(),
        };
        Ok(RollOutcome::Moves { dice: value, moves })
    }

    /// Applies one of the moves returned by the last roll.
    ///
    /// Fails with [`GameError::InvalidMoveSelection`] if `m` is not in the
    /// current legal set.
    pub fn apply_move(&mut self, m: Move) -> Result<Vec<GameEvent>, GameError> {
        let dice = match &self.phase {
            TurnPhase::AwaitingMove { dice, moves } if moves.contains(&m) => *dice,
            TurnPhase::AwaitingMove { .. } | TurnPhase::AwaitingRoll => {
                return Err(GameError::InvalidMoveSelection(m.to_notation()))
            }
            TurnPhase::NotStarted => return Err(GameError::GameNotStarted),
            TurnPhase::GameOver { .. } => return Err(GameError::GameAlreadyOver),
        };

        let mover = self.current;
        let player = &mut self.players[mover];
        let color = player.color();
        let name = player.name();
        let piece = player
            .piece_mut(m.piece.id)
            .ok_or_else(|| GameError::InvalidMoveSelection(m.to_notation()))?;
        piece.state = m.to;
        tracing::debug!("{} played {}", name, m);

        let mut events = Vec::new();
        if let (true, Some(cell)) = (m.kind.lands_on_main_path(), m.destination()) {
            if self.rules.safe_zones_protect && board::is_safe(cell) {
                tracing::debug!("{} is a safe cell, no capture", cell);
            } else {
                self.capture_at(mover, m.piece, cell, &mut events);
            }
        }

        if self.players[mover].all_home() {
            self.players[mover].mark_finished();
            self.phase = TurnPhase::GameOver { winner: color };
            events.push(GameEvent::Win { color });
            tracing::info!("{} wins the game!", name);
        } else if dice == RELEASE_ROLL {
            self.phase = TurnPhase::AwaitingRoll;
            events.push(GameEvent::ExtraTurn { color });
            tracing::info!("{} rolled a 6! Roll again.", name);
        } else {
            self.advance_turn();
        }

        if events.is_empty() {
            events.push(GameEvent::NoOp);
        }
        self.history.push(GameMove {
            mov: m,
            dice,
            events: events.clone(),
        });
        Ok(events)
    }

    /// Applies the pending move of piece `id` of the current player.
    ///
    /// This is how an input handler selects a move by piece identity.
    pub fn apply_piece(&mut self, id: u8) -> Result<Vec<GameEvent>, GameError> {
        let candidate = match &self.phase {
            TurnPhase::AwaitingMove { moves, .. } => moves.for_piece(id),
            TurnPhase::AwaitingRoll => None,
            TurnPhase::NotStarted => return Err(GameError::GameNotStarted),
            TurnPhase::GameOver { .. } => return Err(GameError::GameAlreadyOver),
        };
        match candidate {
            Some(m) => self.apply_move(m),
            None => Err(GameError::InvalidMoveSelection(format!(
                "piece {} has no legal move",
                id
            ))),
        }
    }

    /// Puts a piece in a given place without playing a move.
    ///
    /// Intended for setting up positions. Only allowed while the current
    /// player has yet to roll. Never captures, and refuses to finish a
    /// player outright.
    pub fn place_piece(
        &mut self,
        color: Color,
        id: u8,
        placement: Placement,
    ) -> Result<(), GameError> {
        match self.phase {
            TurnPhase::AwaitingRoll => {}
            TurnPhase::AwaitingMove { .. } => return Err(GameError::MoveSelectionPending),
            TurnPhase::NotStarted => return Err(GameError::GameNotStarted),
            TurnPhase::GameOver { .. } => return Err(GameError::GameAlreadyOver),
        }
        if id as usize >= PIECES_PER_PLAYER {
            return Err(GameError::InvalidPlacement(format!("no piece {}", id)));
        }
        let index = self
            .players
            .iter()
            .position(|p| p.color() == color)
            .ok_or_else(|| GameError::InvalidPlacement(format!("{} is not playing", color)))?;

        let invalid = |e: board::BoardError| GameError::InvalidPlacement(e.to_string());
        let state = match placement {
            Placement::Base => PieceState::InBase(board::base_slot(color, id)),
            Placement::Main(i) => PieceState::OnMainPath(board::main_cell(i).map_err(invalid)?),
            Placement::HomePath(i) => {
                PieceState::OnHomePath(board::home_cell(color, i).map_err(invalid)?)
            }
            Placement::Home => PieceState::Home,
        };

        let player = &mut self.players[index];
        let others_home = player
            .pieces()
            .iter()
            .filter(|p| p.id != id && p.state.is_home())
            .count();
        if state.is_home() && others_home == PIECES_PER_PLAYER - 1 {
            return Err(GameError::InvalidPlacement(
                "placement would finish the player".to_string(),
            ));
        }
        if let Some(piece) = player.piece_mut(id) {
            piece.state = state;
        }
        Ok(())
    }

    /// Sends every opponent piece on `cell` back to its base slot.
    fn capture_at(
        &mut self,
        mover: usize,
        capturer: PieceRef,
        cell: Cell,
        events: &mut Vec<GameEvent>,
    ) {
        for (index, player) in self.players.iter_mut().enumerate() {
            if index == mover {
                continue;
            }
            let color = player.color();
            for piece in player.pieces_mut().iter_mut() {
                if piece.state == PieceState::OnMainPath(cell) {
                    piece.state = PieceState::InBase(board::base_slot(color, piece.id));
                    let victim = piece.reference();
                    tracing::info!("{} captured {} at {}", capturer, victim, cell);
                    events.push(GameEvent::Capture {
                        capturer,
                        victim,
                        cell,
                    });
                }
            }
        }
    }

    /// Hands the turn to the next player in order.
    fn advance_turn(&mut self) {
        self.current = (self.current + 1) % self.players.len();
        self.consecutive_sixes = 0;
        self.turns += 1;
        self.phase = TurnPhase::AwaitingRoll;
        tracing::debug!("It's {}'s turn.", self.players[self.current].name());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedDice;
    use ludo_core::MoveKind;

    fn roll(game: &mut Game, value: u8) -> RollOutcome {
        game.roll_dice(&mut ScriptedDice::new([value])).unwrap()
    }

    fn current_color(game: &Game) -> Color {
        game.current_player().unwrap().color()
    }

    #[test]
    fn new_game() {
        let game = Game::standard();
        assert!(game.is_started());
        assert!(!game.is_game_over());
        assert_eq!(game.players().len(), 4);
        assert_eq!(current_color(&game), Color::Red);
        assert_eq!(game.consecutive_sixes(), 0);
        assert_eq!(game.last_dice(), None);
        assert_eq!(game.phase(), &TurnPhase::AwaitingRoll);
        assert_eq!(game.query_pieces().len(), 16);
    }

    #[test]
    fn new_requires_distinct_colors() {
        let err = Game::new([Color::Red, Color::Red, Color::Blue, Color::Green]).unwrap_err();
        assert!(matches!(err, GameError::InvalidColors(_)));

        let game = Game::new([Color::Blue, Color::Red, Color::Green, Color::Yellow]).unwrap();
        assert_eq!(current_color(&game), Color::Blue);
    }

    #[test]
    fn unstarted_game_rejects_mutation() {
        let mut game = Game::default();
        assert!(!game.is_started());
        assert!(game.current_player().is_none());
        assert_eq!(
            game.roll_dice(&mut ScriptedDice::new([6])),
            Err(GameError::GameNotStarted)
        );
        assert_eq!(game.apply_piece(0), Err(GameError::GameNotStarted));
        assert_eq!(
            game.place_piece(Color::Red, 0, Placement::Main(3)),
            Err(GameError::GameNotStarted)
        );
    }

    #[test]
    fn reset_returns_to_unstarted() {
        let mut game = Game::with_rules(RuleOptions::unprotected());
        game.start(Color::ALL).unwrap();
        roll(&mut game, 6);
        game.reset();
        assert!(!game.is_started());
        assert!(game.players().is_empty());
        assert!(game.query_pieces().is_empty());
        assert_eq!(game.last_dice(), None);
        assert_eq!(game.rules(), &RuleOptions::unprotected());

        game.start(Color::ALL).unwrap();
        assert_eq!(game.phase(), &TurnPhase::AwaitingRoll);
    }

    #[test]
    fn six_releases_and_grants_extra_turn() {
        let mut game = Game::standard();
        let outcome = roll(&mut game, 6);
        assert_eq!(outcome.moves().len(), 4);
        assert!(outcome.moves().iter().all(|m| m.kind == MoveKind::EnterBoard));

        let events = game.apply_piece(0).unwrap();
        assert_eq!(events, vec![GameEvent::ExtraTurn { color: Color::Red }]);
        assert_eq!(current_color(&game), Color::Red);
        assert_eq!(game.consecutive_sixes(), 1);
        assert_eq!(
            game.player(Color::Red).unwrap().pieces()[0].state,
            PieceState::OnMainPath(Cell::at(6, 1))
        );
    }

    #[test]
    fn no_legal_moves_passes_the_turn() {
        let mut game = Game::standard();
        let outcome = roll(&mut game, 3);
        assert_eq!(
            outcome,
            RollOutcome::NoLegalMoves {
                color: Color::Red,
                dice: 3
            }
        );
        assert_eq!(current_color(&game), Color::Green);
        assert_eq!(game.turn_count(), 1);
        assert_eq!(game.last_dice(), Some(3));
    }

    #[test]
    fn three_sixes_forfeit() {
        let mut game = Game::standard();
        roll(&mut game, 6);
        game.apply_piece(0).unwrap();
        roll(&mut game, 6);
        game.apply_piece(1).unwrap();
        assert_eq!(game.consecutive_sixes(), 2);

        let before = game.query_pieces();
        let outcome = roll(&mut game, 6);
        assert_eq!(
            outcome,
            RollOutcome::TurnForfeited {
                color: Color::Red,
                dice: 6
            }
        );
        assert_eq!(game.query_pieces(), before);
        assert_eq!(game.consecutive_sixes(), 0);
        assert_eq!(current_color(&game), Color::Green);
    }

    #[test]
    fn six_counter_resets_on_other_rolls() {
        let mut game = Game::standard();
        game.place_piece(Color::Red, 0, Placement::Main(10)).unwrap();
        roll(&mut game, 6);
        game.apply_piece(0).unwrap();
        assert_eq!(game.consecutive_sixes(), 1);
        roll(&mut game, 2);
        assert_eq!(game.consecutive_sixes(), 0);
    }

    #[test]
    fn six_counter_does_not_carry_to_next_player() {
        let mut game = Game::standard();
        // Every Red piece sits where a six overshoots.
        for id in 0..4 {
            game.place_piece(Color::Red, id, Placement::HomePath(1)).unwrap();
        }
        let outcome = roll(&mut game, 6);
        assert!(matches!(outcome, RollOutcome::NoLegalMoves { .. }));
        assert_eq!(current_color(&game), Color::Green);
        assert_eq!(game.consecutive_sixes(), 0);
    }

    #[test]
    fn roll_while_selection_pending_fails() {
        let mut game = Game::standard();
        roll(&mut game, 6);
        assert_eq!(
            game.roll_dice(&mut ScriptedDice::new([1])),
            Err(GameError::MoveSelectionPending)
        );
        assert_eq!(
            game.place_piece(Color::Red, 0, Placement::Base),
            Err(GameError::MoveSelectionPending)
        );
    }

    #[test]
    fn out_of_range_dice_leave_state_unchanged() {
        let mut game = Game::standard();
        assert_eq!(
            game.roll_dice(&mut ScriptedDice::new([7])),
            Err(GameError::InvalidDiceValue(7))
        );
        assert_eq!(
            game.roll_dice(&mut ScriptedDice::default()),
            Err(GameError::InvalidDiceValue(0))
        );
        assert_eq!(game.phase(), &TurnPhase::AwaitingRoll);
        assert_eq!(game.last_dice(), None);
    }

    #[test]
    fn invalid_selection_leaves_state_unchanged() {
        let mut game = Game::standard();
        game.place_piece(Color::Red, 0, Placement::Main(0)).unwrap();
        roll(&mut game, 2);
        let pending = game.phase().clone();
        let pieces = game.query_pieces();

        // A move for a different color is not in the set.
        let bogus = Move::new(
            PieceRef::new(Color::Green, 0),
            PieceState::InBase(board::base_slot(Color::Green, 0)),
            PieceState::OnMainPath(board::start_cell(Color::Green)),
            MoveKind::EnterBoard,
        );
        assert!(matches!(
            game.apply_move(bogus),
            Err(GameError::InvalidMoveSelection(_))
        ));
        assert!(matches!(
            game.apply_piece(3),
            Err(GameError::InvalidMoveSelection(_))
        ));
        assert_eq!(game.phase(), &pending);
        assert_eq!(game.query_pieces(), pieces);
    }

    #[test]
    fn apply_before_roll_is_invalid() {
        let mut game = Game::standard();
        let m = Move::new(
            PieceRef::new(Color::Red, 0),
            PieceState::InBase(board::base_slot(Color::Red, 0)),
            PieceState::OnMainPath(board::start_cell(Color::Red)),
            MoveKind::EnterBoard,
        );
        assert!(matches!(
            game.apply_move(m),
            Err(GameError::InvalidMoveSelection(_))
        ));
    }

    #[test]
    fn plain_move_passes_turn_with_noop() {
        let mut game = Game::standard();
        game.place_piece(Color::Red, 0, Placement::Main(0)).unwrap();
        roll(&mut game, 3);
        let events = game.apply_piece(0).unwrap();
        assert_eq!(events, vec![GameEvent::NoOp]);
        assert_eq!(current_color(&game), Color::Green);
        assert_eq!(game.move_history().len(), 1);
        assert_eq!(game.move_history()[0].dice, 3);
    }

    #[test]
    fn capture_sends_victim_to_base() {
        let mut game = Game::standard();
        // Red moves from 1 to 3; Green waits on 3 (not a star cell).
        game.place_piece(Color::Red, 0, Placement::Main(1)).unwrap();
        game.place_piece(Color::Green, 2, Placement::Main(3)).unwrap();
        roll(&mut game, 2);
        let events = game.apply_piece(0).unwrap();
        assert_eq!(
            events,
            vec![GameEvent::Capture {
                capturer: PieceRef::new(Color::Red, 0),
                victim: PieceRef::new(Color::Green, 2),
                cell: Cell::at(6, 4),
            }]
        );
        assert_eq!(
            game.player(Color::Green).unwrap().pieces()[2].state,
            PieceState::InBase(board::base_slot(Color::Green, 2))
        );
    }

    #[test]
    fn capture_takes_every_opponent_on_the_cell() {
        let mut game = Game::standard();
        game.place_piece(Color::Red, 0, Placement::Main(1)).unwrap();
        game.place_piece(Color::Green, 0, Placement::Main(3)).unwrap();
        game.place_piece(Color::Green, 1, Placement::Main(3)).unwrap();
        game.place_piece(Color::Blue, 3, Placement::Main(3)).unwrap();
        roll(&mut game, 2);
        let events = game.apply_piece(0).unwrap();
        let captures = events
            .iter()
            .filter(|e| matches!(e, GameEvent::Capture { .. }))
            .count();
        assert_eq!(captures, 3);
    }

    #[test]
    fn own_pieces_are_never_captured() {
        let mut game = Game::standard();
        game.place_piece(Color::Red, 0, Placement::Main(1)).unwrap();
        game.place_piece(Color::Red, 1, Placement::Main(3)).unwrap();
        roll(&mut game, 2);
        let events = game.apply_piece(0).unwrap();
        assert_eq!(events, vec![GameEvent::NoOp]);
        let red = game.player(Color::Red).unwrap();
        assert_eq!(red.pieces()[0].state, red.pieces()[1].state);
    }

    #[test]
    fn safe_cells_protect_by_default() {
        let mut game = Game::standard();
        // Index 8 is a star cell.
        game.place_piece(Color::Green, 0, Placement::Main(6)).unwrap();
        game.place_piece(Color::Blue, 0, Placement::Main(8)).unwrap();
        roll(&mut game, 1); // Red passes
        roll(&mut game, 2);
        let events = game.apply_piece(0).unwrap();
        assert_eq!(events, vec![GameEvent::NoOp]);
        assert_eq!(
            game.player(Color::Blue).unwrap().pieces()[0].state,
            PieceState::OnMainPath(board::main_cell(8).unwrap())
        );
    }

    #[test]
    fn unprotected_rules_capture_on_safe_cells() {
        let mut game = Game::with_rules(RuleOptions::unprotected());
        game.start(Color::ALL).unwrap();
        game.place_piece(Color::Blue, 0, Placement::Main(0)).unwrap();
        roll(&mut game, 6);
        let events = game.apply_piece(1).unwrap();
        assert_eq!(
            events,
            vec![
                GameEvent::Capture {
                    capturer: PieceRef::new(Color::Red, 1),
                    victim: PieceRef::new(Color::Blue, 0),
                    cell: Cell::at(6, 1),
                },
                GameEvent::ExtraTurn { color: Color::Red },
            ]
        );
    }

    #[test]
    fn last_piece_home_wins_and_ends_the_game() {
        let mut game = Game::standard();
        for id in 0..3 {
            game.place_piece(Color::Red, id, Placement::Home).unwrap();
        }
        game.place_piece(Color::Red, 3, Placement::HomePath(4)).unwrap();
        roll(&mut game, 1);
        let events = game.apply_piece(3).unwrap();
        assert_eq!(events, vec![GameEvent::Win { color: Color::Red }]);
        assert!(game.is_game_over());
        assert_eq!(game.winner(), Some(Color::Red));
        assert!(game.player(Color::Red).unwrap().is_finished());

        assert_eq!(
            game.roll_dice(&mut ScriptedDice::new([6])),
            Err(GameError::GameAlreadyOver)
        );
        assert_eq!(game.apply_piece(0), Err(GameError::GameAlreadyOver));
    }

    #[test]
    fn finishing_one_piece_does_not_win() {
        let mut game = Game::standard();
        game.place_piece(Color::Red, 3, Placement::HomePath(0)).unwrap();
        let outcome = roll(&mut game, 5);
        assert_eq!(outcome.moves()[0].kind, MoveKind::Finish);
        let events = game.apply_piece(3).unwrap();
        assert_eq!(events, vec![GameEvent::NoOp]);
        assert!(!game.is_game_over());
        assert!(!game.player(Color::Red).unwrap().is_finished());
        assert_eq!(current_color(&game), Color::Green);
    }

    #[test]
    fn placement_validation() {
        let mut game = Game::standard();
        assert!(matches!(
            game.place_piece(Color::Red, 4, Placement::Base),
            Err(GameError::InvalidPlacement(_))
        ));
        assert!(matches!(
            game.place_piece(Color::Red, 0, Placement::Main(51)),
            Err(GameError::InvalidPlacement(_))
        ));
        assert!(matches!(
            game.place_piece(Color::Red, 0, Placement::HomePath(5)),
            Err(GameError::InvalidPlacement(_))
        ));
        for id in 0..3 {
            game.place_piece(Color::Yellow, id, Placement::Home).unwrap();
        }
        assert!(matches!(
            game.place_piece(Color::Yellow, 3, Placement::Home),
            Err(GameError::InvalidPlacement(_))
        ));
    }

    #[test]
    fn legal_moves_track_the_phase() {
        let mut game = Game::standard();
        assert!(game.legal_moves().is_empty());
        roll(&mut game, 6);
        assert_eq!(game.legal_moves().len(), 4);
        game.apply_piece(2).unwrap();
        assert!(game.legal_moves().is_empty());
    }
}
