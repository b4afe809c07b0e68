//! Per-frame input batch.
//!
//! The driver records every key event that arrives while it waits for the
//! next frame, then takes the batch once the frame is due. Actions are kept
//! in arrival order on the stack; anything past the capacity in a single
//! frame is dropped.

use arrayvec::ArrayVec;
use crossterm::event::KeyEvent;

use crate::map::{handle_key_event, is_actionable, should_quit};
use crate::types::GameAction;

/// Most actions applied in one frame.
pub const MAX_ACTIONS_PER_FRAME: usize = 16;

#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    actions: ArrayVec<GameAction, MAX_ACTIONS_PER_FRAME>,
    quit: bool,
}

impl FrameInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one key event.
    pub fn record(&mut self, key: KeyEvent) {
        if !is_actionable(key.kind) {
            return;
        }
        if should_quit(key) {
            self.quit = true;
            return;
        }
        if let Some(action) = handle_key_event(key) {
            let _ = self.actions.try_push(action);
        }
    }

    /// Window-close was requested at some point; this is sticky.
    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Take this frame's actions, leaving the batch empty.
    pub fn take_actions(&mut self) -> ArrayVec<GameAction, MAX_ACTIONS_PER_FRAME> {
        std::mem::take(&mut self.actions)
    }
}
