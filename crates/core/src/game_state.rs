//! Game state module - the whole game behind one struct
//!
//! Ties the board, the active piece and the shape picker together and owns
//! the fall timer, score and game-over flag. Each frame the driver calls
//! [`GameState::tick`] with the elapsed time and then feeds that frame's
//! actions to [`GameState::apply_action`].

use log::{debug, info};

use crate::pieces::ActivePiece;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;
use crate::{Board, ShapePicker};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<ActivePiece>,
    picker: ShapePicker,
    seed: u32,
    score: u32,
    lines: u32,
    /// Milliseconds accumulated since the last gravity step
    fall_timer_ms: u32,
    fall_interval_ms: u32,
    started: bool,
    game_over: bool,
}

impl GameState {
    /// Create a new game with the given RNG seed and the default fall speed
    pub fn new(seed: u32) -> Self {
        Self::with_fall_interval(seed, FALL_INTERVAL_MS)
    }

    /// Create a new game with a custom gravity interval (clamped to >= 1ms)
    pub fn with_fall_interval(seed: u32, fall_interval_ms: u32) -> Self {
        Self {
            board: Board::new(),
            active: None,
            picker: ShapePicker::new(seed),
            seed,
            score: 0,
            lines: 0,
            fall_timer_ms: 0,
            fall_interval_ms: fall_interval_ms.max(1),
            started: false,
            game_over: false,
        }
    }

    /// Start the game and spawn the first piece
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        info!("game started (fall interval {}ms)", self.fall_interval_ms);
        self.spawn_piece();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Total rows cleared this game
    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// Seed the shape picker was created with; replaying it repeats the game
    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn fall_interval_ms(&self) -> u32 {
        self.fall_interval_ms
    }

    pub fn fall_timer_ms(&self) -> u32 {
        self.fall_timer_ms
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access, for setting up positions in tests and tools
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Spawn a random shape at the spawn position
    pub fn spawn_piece(&mut self) -> bool {
        let shape = self.picker.draw();
        self.spawn_shape(shape)
    }

    /// Spawn a specific shape at the spawn position.
    ///
    /// Returns false and ends the game if the new piece collides immediately.
    pub fn spawn_shape(&mut self, shape: Shape) -> bool {
        if self.game_over {
            return false;
        }

        let piece = ActivePiece::new(shape);
        self.active = Some(piece);

        if piece.collides(&self.board) {
            self.game_over = true;
            info!(
                "game over: {} piece blocked at spawn, score {}",
                shape.color.as_str(),
                self.score
            );
            return false;
        }

        debug!("spawned {} piece", shape.color.as_str());
        true
    }

    /// Advance the fall timer by `elapsed_ms`.
    ///
    /// When the gravity interval is reached the timer resets and the piece
    /// steps down one row (or locks). Returns true if a gravity step ran.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.game_over || !self.started {
            return false;
        }

        self.fall_timer_ms = self.fall_timer_ms.saturating_add(elapsed_ms);
        if self.fall_timer_ms < self.fall_interval_ms {
            return false;
        }

        self.fall_timer_ms = 0;
        self.step_down();
        true
    }

    /// Move the active piece down one row, locking it if it cannot move.
    ///
    /// Returns the number of rows cleared by a resulting lock.
    pub fn step_down(&mut self) -> u32 {
        if self.game_over {
            return 0;
        }
        let Some(active) = self.active else {
            return 0;
        };

        let moved = active.shifted(0, 1);
        if !moved.collides(&self.board) {
            self.active = Some(moved);
            return 0;
        }

        self.lock_piece()
    }

    /// Lock the active piece, clear full rows, score them and spawn the next
    /// piece. Returns the number of rows cleared.
    pub fn lock_piece(&mut self) -> u32 {
        if self.game_over {
            return 0;
        }
        let Some(active) = self.active.take() else {
            return 0;
        };

        active.lock_into(&mut self.board);
        debug!(
            "locked {} piece at ({}, {})",
            active.color().as_str(),
            active.x,
            active.y
        );

        let cleared = self.board.clear_full_rows();
        if cleared > 0 {
            self.lines = self.lines.saturating_add(cleared);
            self.score = self
                .score
                .saturating_add(cleared.saturating_mul(LINE_CLEAR_POINTS));
            debug!("cleared {} rows, score {}", cleared, self.score);
        }

        self.fall_timer_ms = 0;
        self.spawn_piece();
        cleared
    }

    /// Try to move the active piece horizontally; reverts on collision
    pub fn try_move(&mut self, dx: i8) -> bool {
        if self.game_over {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let moved = active.shifted(dx, 0);
        if moved.collides(&self.board) {
            return false;
        }
        self.active = Some(moved);
        true
    }

    /// Try to rotate the active piece 90°; a colliding rotation is discarded
    pub fn try_rotate(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let rotated = active.rotated();
        if rotated.collides(&self.board) {
            return false;
        }
        self.active = Some(rotated);
        true
    }

    /// Apply a player action. Returns true if the active piece changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if !self.started {
            return false;
        }
        match action {
            GameAction::MoveLeft => self.try_move(-1),
            GameAction::MoveRight => self.try_move(1),
            GameAction::Rotate => self.try_rotate(),
        }
    }

    /// Copy the render-relevant state into an existing snapshot
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        for (y, row) in self.board.rows().enumerate() {
            out.board[y].copy_from_slice(row);
        }
        out.active = self.active.map(|piece| ActiveSnapshot {
            cells: piece.cells(),
            color: piece.color(),
        });
        out.score = self.score;
        out.lines = self.lines;
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started_with(shape: Shape) -> GameState {
        let mut state = GameState::new(1);
        state.started = true;
        assert!(state.spawn_shape(shape));
        state
    }

    #[test]
    fn test_new_game_is_idle_until_started() {
        let mut state = GameState::new(3);
        assert!(!state.started());
        assert!(state.active().is_none());
        assert!(!state.tick(FALL_INTERVAL_MS));
        assert!(!state.apply_action(GameAction::MoveLeft));

        state.start();
        assert!(state.started());
        assert!(state.active().is_some());
        assert!(!state.game_over());
    }

    #[test]
    fn test_tick_waits_for_fall_interval() {
        let mut state = started_with(SHAPES[1]);
        let y0 = state.active().unwrap().y;

        assert!(!state.tick(FALL_INTERVAL_MS - 1));
        assert_eq!(state.active().unwrap().y, y0);
        assert_eq!(state.fall_timer_ms(), FALL_INTERVAL_MS - 1);

        assert!(state.tick(1));
        assert_eq!(state.active().unwrap().y, y0 + 1);
        assert_eq!(state.fall_timer_ms(), 0);
    }

    #[test]
    fn test_large_elapsed_only_steps_once() {
        let mut state = started_with(SHAPES[1]);
        assert!(state.tick(FALL_INTERVAL_MS * 5));
        assert_eq!(state.active().unwrap().y, 1);
    }

    #[test]
    fn test_seed_replays_the_same_pieces() {
        let mut first = GameState::new(4242);
        first.start();
        let mut replay = GameState::new(first.seed());
        replay.start();

        for _ in 0..5 {
            assert_eq!(first.active(), replay.active());
            first.lock_piece();
            replay.lock_piece();
        }
    }

    #[test]
    fn test_custom_fall_interval_is_clamped() {
        let state = GameState::with_fall_interval(1, 0);
        assert_eq!(state.fall_interval_ms(), 1);
    }

    #[test]
    fn test_piece_locks_on_floor_and_next_spawns() {
        let mut state = started_with(SHAPES[1]);
        // O piece: 2 rows tall, rests at y = 18 after 18 steps.
        for _ in 0..18 {
            state.step_down();
        }
        assert_eq!(state.active().unwrap().y, 18);

        assert_eq!(state.step_down(), 0);
        assert_eq!(state.board().get(4, 19), Some(Some(PieceColor::Yellow)));
        assert_eq!(state.board().get(5, 18), Some(Some(PieceColor::Yellow)));
        assert_eq!(state.active().unwrap().y, 0);
        assert!(!state.game_over());
    }

    #[test]
    fn test_horizontal_moves_stop_at_walls() {
        let mut state = started_with(SHAPES[1]);
        let mut moves = 0;
        while state.try_move(-1) {
            moves += 1;
        }
        assert_eq!(moves, 4);
        assert_eq!(state.active().unwrap().x, 0);

        while state.try_move(1) {}
        // O is two wide.
        assert_eq!(state.active().unwrap().x, 8);
    }

    #[test]
    fn test_move_into_locked_cell_is_rejected() {
        let mut state = started_with(SHAPES[1]);
        state.board_mut().set(3, 0, Some(PieceColor::Red));
        assert!(!state.apply_action(GameAction::MoveLeft));
        assert_eq!(state.active().unwrap().x, 4);
    }

    #[test]
    fn test_rotation_blocked_by_wall_is_discarded() {
        let mut state = started_with(SHAPES[0]);
        // Horizontal I at x=0, rotated twice would reach x=-3.
        while state.try_move(-1) {}
        assert!(state.try_rotate());
        let before = state.active().unwrap();
        assert!(!state.try_rotate());
        assert_eq!(state.active().unwrap(), before);
    }

    #[test]
    fn test_game_over_halts_mutation() {
        let mut state = GameState::new(5);
        for x in 0..BOARD_WIDTH as i8 {
            state.board_mut().set(x, 1, Some(PieceColor::Blue));
        }
        state.board_mut().set(4, 0, Some(PieceColor::Blue));
        state.start();
        assert!(state.game_over());

        let board = state.board().clone();
        let active = state.active();
        assert!(!state.tick(FALL_INTERVAL_MS));
        assert!(!state.apply_action(GameAction::Rotate));
        assert!(!state.apply_action(GameAction::MoveRight));
        assert_eq!(state.step_down(), 0);
        assert_eq!(state.lock_piece(), 0);
        assert!(!state.spawn_piece());
        assert_eq!(state.board(), &board);
        assert_eq!(state.active(), active);
        assert_eq!(state.score(), 0);
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut state = started_with(SHAPES[2]);
        state.board_mut().set(0, 19, Some(PieceColor::Green));
        let snap = state.snapshot();

        assert_eq!(snap.board[19][0], Some(PieceColor::Green));
        let active = snap.active.unwrap();
        assert_eq!(active.color, PieceColor::Purple);
        assert_eq!(active.cells, [(5, 0), (4, 1), (5, 1), (6, 1)]);
        assert_eq!(snap.score, 0);
        assert!(!snap.game_over);
    }
}
