//! Terminal input (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] and batches
//! them per frame. Key presses and terminal auto-repeat are treated the same,
//! so holding a key keeps moving the piece at the terminal's repeat rate.

pub mod frame;
pub mod map;

pub use mini_tetris_types as types;

pub use frame::{FrameInput, MAX_ACTIONS_PER_FRAME};
pub use map::{handle_key_event, is_actionable, should_quit};
