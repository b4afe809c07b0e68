//! Terminal "graphics library" for the game.
//!
//! A small drawing layer in the shape of a game framework: a [`Window`] with
//! a lifecycle, a [`Canvas`] offering rectangle and text primitives, an
//! [`Rgb`] colour type, and a [`GameView`] that draws a game snapshot.
//!
//! - `core` stays deterministic and testable; the view only reads snapshots
//! - Board cells are 2 columns wide to compensate for glyph aspect ratio

pub mod canvas;
pub mod game_view;
pub mod palette;
pub mod window;

pub use mini_tetris_core as core;
pub use mini_tetris_types as types;

pub use canvas::{Canvas, Cell, Rgb};
pub use game_view::{score_text, GameView, Viewport, GAME_OVER_TEXT};
pub use window::{encode_diff_into, encode_full_into, Window};
