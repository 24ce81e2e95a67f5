//! Rules and turn engine for four-player Ludo.
//!
//! This crate provides:
//! - [`board`] - Static board topology: the 51-cell main path, home paths,
//!   base slots, start cells, and safe cells
//! - [`Game`] - Full game state with the roll/select/apply turn cycle
//! - [`generate_moves`] - Legal move generation for a player and dice value
//! - [`DiceSource`] - Injectable randomness, seeded or scripted
//!
//! # Architecture
//!
//! Pieces carry an explicit [`PieceState`](ludo_core::PieceState), so the
//! four piece states and their positions can never disagree. Moves are
//! generated from the current state and the dice value alone; the game only
//! accepts a move that belongs to the set generated by the last roll.
//!
//! # Example
//!
//! ```
//! use ludo_engine::{Game, RandomDice, RollOutcome};
//!
//! let mut game = Game::standard();
//! let mut dice = RandomDice::seeded(7);
//!
//! while !game.is_game_over() && game.turn_count() < 50 {
//!     if let RollOutcome::Moves { moves, .. } = game.roll_dice(&mut dice).unwrap() {
//!         game.apply_move(moves[0]).unwrap();
//!     }
//! }
//! println!("{} pieces on the board", game.query_pieces().len());
//! ```

pub mod board;
mod dice;
mod error;
mod event;
mod game;
pub mod movegen;
mod player;
mod rules;
mod view;

pub use board::BoardError;
pub use dice::{DiceSource, RandomDice, ScriptedDice, DICE_FACES};
pub use error::GameError;
pub use event::{GameEvent, RollOutcome};
pub use game::{Game, GameMove, Placement, TurnPhase, FORFEIT_SIXES};
pub use movegen::{generate_moves, piece_move, MoveList, RELEASE_ROLL};
pub use player::Player;
pub use rules::RuleOptions;
pub use view::PieceView;
