//! Terminal Tetris runner.
//!
//! One synchronous frame loop: gravity, then input, then render. After the
//! game ends the loop keeps showing the game-over screen until the window is
//! closed (Esc, q or Ctrl-C).

use std::fs::OpenOptions;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use log::{info, warn};

use mini_tetris::core::GameState;
use mini_tetris::input::FrameInput;
use mini_tetris::term::{Canvas, GameView, Window};
use mini_tetris::types::TICK_MS;
use mini_tetris::GameConfig;

const WINDOW_TITLE: &str = "tetris (powered by crossterm)";

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    init_logging(&config)?;
    for var in &config.rejected {
        warn!("ignoring invalid value for {}", var);
    }

    let mut window = Window::open(WINDOW_TITLE)?;
    let result = run(&mut window, &config);

    // Always try to restore terminal state.
    let _ = window.close();
    result
}

fn init_logging(config: &GameConfig) -> Result<()> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path))?;

    env_logger::Builder::new()
        .parse_filters(&config.log_filter)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}

fn run(window: &mut Window, config: &GameConfig) -> Result<()> {
    let seed = config.seed.unwrap_or_else(clock_seed);
    let mut game = GameState::with_fall_interval(seed, config.fall_interval_ms);
    game.start();

    let view = GameView::default();
    let mut canvas = Canvas::new(0, 0);
    let mut input = FrameInput::new();

    let frame_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_frame = Instant::now();
    let mut reported_game_over = false;

    loop {
        // Collect input until the next frame is due.
        let deadline = last_frame + frame_duration;
        loop {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) => input.record(key),
                Event::Resize(_, _) => window.invalidate(),
                _ => {}
            }
        }

        if input.quit_requested() {
            info!("window closed, final score {}", game.score());
            return Ok(());
        }

        let now = Instant::now();
        let elapsed_ms =
            u32::try_from(now.duration_since(last_frame).as_millis()).unwrap_or(u32::MAX);
        last_frame = now;

        game.tick(elapsed_ms);
        for action in input.take_actions() {
            game.apply_action(action);
        }

        if game.game_over() && !reported_game_over {
            reported_game_over = true;
            info!(
                "final score {} ({} lines, seed {})",
                game.score(),
                game.lines(),
                game.seed()
            );
        }

        let snap = game.snapshot();
        view.render_into(&snap, window.viewport(), &mut canvas);
        window.present(&mut canvas)?;
    }
}
