use crate::types::{BlockOffset, Cell, PieceColor, BOARD_HEIGHT, BOARD_WIDTH, MAX_BLOCKS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    /// Absolute board coordinates; rows may be negative above the top
    pub cells: [BlockOffset; MAX_BLOCKS],
    pub color: PieceColor,
}

/// Everything the view needs to draw one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub lines: u32,
    pub game_over: bool,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            score: 0,
            lines: 0,
            game_over: false,
        }
    }
}
