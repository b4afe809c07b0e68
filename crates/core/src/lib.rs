//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds all the game rules and state. It has no dependencies on
//! terminal I/O, so the same seed always plays out the same way and every
//! rule can be unit-tested.
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid of locked colours, collision and line clearing
//! - [`pieces`]: the active piece and its 90° rotation
//! - [`rng`]: uniform shape selection from a seeded LCG
//! - [`game_state`]: fall timer, locking, scoring, game over
//! - [`snapshot`]: plain copy of the state handed to the renderer
//!
//! # Game Rules
//!
//! - Gravity moves the piece down one row every 200ms by default
//! - A piece that cannot move down locks where it is
//! - Full rows are removed and score 100 points each
//! - Rotation is `(x, y) -> (-y, x)` on the block offsets; a colliding
//!   rotation is discarded (no wall kicks)
//! - The game ends when a newly spawned piece collides immediately
//!
//! # Example
//!
//! ```
//! use mini_tetris_core::GameState;
//! use mini_tetris_types::{GameAction, FALL_INTERVAL_MS};
//!
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! let y = game.active().unwrap().y;
//! game.tick(FALL_INTERVAL_MS);
//! assert_eq!(game.active().unwrap().y, y + 1);
//!
//! game.apply_action(GameAction::MoveLeft);
//! game.apply_action(GameAction::Rotate);
//! assert!(!game.game_over());
//! ```

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod snapshot;

pub use mini_tetris_types as types;

pub use board::Board;
pub use game_state::GameState;
pub use pieces::{rotate_shape, ActivePiece};
pub use rng::{ShapePicker, SimpleRng};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
