//! Minimal terminal Tetris (workspace facade crate).
//!
//! Re-exports the workspace crates as `mini_tetris::{core,input,term,types}`
//! and holds the environment-driven runtime configuration.

pub mod config;

pub use mini_tetris_core as core;
pub use mini_tetris_input as input;
pub use mini_tetris_term as term;
pub use mini_tetris_types as types;

pub use config::GameConfig;
