//! Shared types and constants - pure data, no dependencies
//!
//! Everything the core, input and terminal crates agree on lives here:
//! board dimensions, frame timing, the seven shape templates and the
//! actions a player can issue.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//! - **Spawn position**: (4, 0), the top-left reference of a new piece
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frame interval (~60 FPS) |
//! | `FALL_INTERVAL_MS` | 200 | Gravity step interval |
//!
//! # Examples
//!
//! ```
//! use mini_tetris_types::{PieceColor, SHAPES, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//!
//! // The first template is the horizontal I bar.
//! assert_eq!(SHAPES[0].color, PieceColor::SkyBlue);
//! assert_eq!(SHAPES[0].blocks, [(0, 0), (1, 0), (2, 0), (3, 0)]);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Number of blocks in every shape
pub const MAX_BLOCKS: usize = 4;

/// Frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Default gravity interval: the active piece falls one row every 200ms
pub const FALL_INTERVAL_MS: u32 = 200;

/// Points awarded per cleared row
pub const LINE_CLEAR_POINTS: u32 = 100;

/// Top-left reference position of a freshly spawned piece
pub const SPAWN_POSITION: (i8, i8) = (BOARD_WIDTH as i8 / 2 - 1, 0);

/// Colour of a shape, and of the board cells it leaves behind when locked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceColor {
    SkyBlue,
    Yellow,
    Purple,
    Green,
    Red,
    Blue,
    Orange,
}

impl PieceColor {
    /// Lowercase name, used in log lines
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceColor::SkyBlue => "skyblue",
            PieceColor::Yellow => "yellow",
            PieceColor::Purple => "purple",
            PieceColor::Green => "green",
            PieceColor::Red => "red",
            PieceColor::Blue => "blue",
            PieceColor::Orange => "orange",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(color)`: Cell holding the colour of a locked piece
pub type Cell = Option<PieceColor>;

/// Offset of a single block relative to the piece's top-left reference
pub type BlockOffset = (i8, i8);

/// A piece template: four block offsets plus a colour
///
/// Templates are immutable; the active piece holds its own copy so that
/// rotation never touches [`SHAPES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    pub blocks: [BlockOffset; MAX_BLOCKS],
    pub color: PieceColor,
}

impl Shape {
    pub const fn new(blocks: [BlockOffset; MAX_BLOCKS], color: PieceColor) -> Self {
        Self { blocks, color }
    }
}

/// The seven shape templates, in selection order
pub const SHAPES: [Shape; 7] = [
    // I
    Shape::new([(0, 0), (1, 0), (2, 0), (3, 0)], PieceColor::SkyBlue),
    // O
    Shape::new([(0, 0), (1, 0), (0, 1), (1, 1)], PieceColor::Yellow),
    // T
    Shape::new([(1, 0), (0, 1), (1, 1), (2, 1)], PieceColor::Purple),
    // S
    Shape::new([(1, 0), (2, 0), (0, 1), (1, 1)], PieceColor::Green),
    // Z
    Shape::new([(0, 0), (1, 0), (1, 1), (2, 1)], PieceColor::Red),
    // J
    Shape::new([(0, 0), (0, 1), (1, 1), (2, 1)], PieceColor::Blue),
    // L
    Shape::new([(2, 0), (0, 1), (1, 1), (2, 1)], PieceColor::Orange),
];

/// Player actions applied to the game state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one column left
    MoveLeft,
    /// Move piece one column right
    MoveRight,
    /// Rotate piece 90° (no wall kicks)
    Rotate,
}
