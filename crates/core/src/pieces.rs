//! Pieces module - the active piece and its rotation
//!
//! Rotation is a plain 90° coordinate transform of the block offsets,
//! `(x, y) -> (-y, x)`, with no pivot normalisation and no wall kicks.

use crate::board::Board;
use crate::types::{BlockOffset, PieceColor, Shape, MAX_BLOCKS, SPAWN_POSITION};

/// Rotate a shape's offsets by 90°, keeping its colour
pub fn rotate_shape(shape: &Shape) -> Shape {
    let mut rotated = *shape;
    for block in rotated.blocks.iter_mut() {
        let (x, y) = *block;
        *block = (-y, x);
    }
    rotated
}

/// The falling, player-controlled piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// Create a piece at the spawn position from a template
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            x: SPAWN_POSITION.0,
            y: SPAWN_POSITION.1,
        }
    }

    pub fn color(&self) -> PieceColor {
        self.shape.color
    }

    /// Absolute board coordinates of the four blocks
    pub fn cells(&self) -> [BlockOffset; MAX_BLOCKS] {
        self.shape.blocks.map(|(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Check whether the piece overlaps a wall, the floor or a locked cell
    pub fn collides(&self, board: &Board) -> bool {
        board.collides(&self.shape.blocks, self.x, self.y)
    }

    /// The same piece shifted by (dx, dy)
    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// The same piece rotated 90° in place
    pub fn rotated(&self) -> Self {
        Self {
            shape: rotate_shape(&self.shape),
            ..*self
        }
    }

    /// Lock the piece's colour into the board
    pub fn lock_into(&self, board: &mut Board) {
        board.lock(&self.shape.blocks, self.x, self.y, self.shape.color);
    }
}
