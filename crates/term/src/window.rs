//! Window: the terminal session a canvas is presented to.
//!
//! Opening a window switches the terminal to raw mode on the alternate
//! screen; closing (or dropping) it restores the terminal. Frames are
//! presented by writing only the runs of cells that changed since the
//! previous frame.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::canvas::{Canvas, Cell, Rgb};
use crate::game_view::Viewport;

/// Fallback when the terminal size cannot be queried.
const DEFAULT_VIEWPORT: (u16, u16) = (80, 24);

pub struct Window {
    stdout: io::Stdout,
    last: Option<Canvas>,
    buf: Vec<u8>,
    open: bool,
}

impl Window {
    pub fn open(title: &str) -> Result<Self> {
        let mut window = Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(64 * 1024),
            open: false,
        };

        terminal::enable_raw_mode()?;
        window.open = true;
        window.buf.queue(terminal::SetTitle(title))?;
        window.buf.queue(terminal::EnterAlternateScreen)?;
        window.buf.queue(cursor::Hide)?;
        window.buf.queue(terminal::DisableLineWrap)?;
        window.flush_buf()?;
        Ok(window)
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn close(&mut self) -> Result<()> {
        if !self.open {
            return Ok(());
        }
        self.open = false;

        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Current terminal size.
    pub fn viewport(&self) -> Viewport {
        let (w, h) = terminal::size().unwrap_or(DEFAULT_VIEWPORT);
        Viewport::new(w, h)
    }

    /// Force the next present to be a full redraw (e.g. after a resize).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Present a canvas, swapping it with the previously shown frame.
    ///
    /// Callers keep one canvas and pass it in every frame; after the call it
    /// holds stale contents and must be redrawn before the next present.
    pub fn present(&mut self, canvas: &mut Canvas) -> Result<()> {
        self.buf.clear();
        let mut prev = match self.last.take() {
            Some(prev) if prev.width() == canvas.width() && prev.height() == canvas.height() => {
                encode_diff_into(&prev, canvas, &mut self.buf)?;
                prev
            }
            _ => {
                encode_full_into(canvas, &mut self.buf)?;
                Canvas::new(canvas.width(), canvas.height())
            }
        };
        self.flush_buf()?;

        std::mem::swap(&mut prev, canvas);
        self.last = Some(prev);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Drop for Window {
    fn drop(&mut self) {
        let _ = self.close();
    }
}

/// Encode a full-frame redraw into `out`.
pub fn encode_full_into(canvas: &Canvas, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let mut style = None;
    for y in 0..canvas.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for x in 0..canvas.width() {
            let cell = canvas.get(x, y).unwrap_or_default();
            put_cell(out, cell, &mut style)?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode only the changed runs between two same-sized canvases.
pub fn encode_diff_into(prev: &Canvas, next: &Canvas, out: &mut Vec<u8>) -> Result<()> {
    let mut style = None;

    for_each_changed_run(prev, next, |x, y, len| {
        out.queue(cursor::MoveTo(x, y))?;
        for dx in 0..len {
            let cell = next.get(x + dx, y).unwrap_or_default();
            put_cell(out, cell, &mut style)?;
        }
        Ok(())
    })?;

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

type Style = (Rgb, Rgb, bool);

fn put_cell(out: &mut Vec<u8>, cell: Cell, current: &mut Option<Style>) -> Result<()> {
    let style = (cell.fg, cell.bg, cell.bold);
    if *current != Some(style) {
        out.queue(SetAttribute(Attribute::Reset))?;
        out.queue(SetForegroundColor(rgb_to_color(cell.fg)))?;
        out.queue(SetBackgroundColor(rgb_to_color(cell.bg)))?;
        if cell.bold {
            out.queue(SetAttribute(Attribute::Bold))?;
        }
        *current = Some(style);
    }
    out.queue(Print(cell.ch))?;
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

fn for_each_changed_run(
    prev: &Canvas,
    next: &Canvas,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        for y in 0..next.height() {
            f(0, y, next.width())?;
        }
        return Ok(());
    }

    for y in 0..next.height() {
        let mut x = 0;
        while x < next.width() {
            if prev.get(x, y) == next.get(x, y) {
                x += 1;
                continue;
            }

            let start = x;
            while x < next.width() && prev.get(x, y) != next.get(x, y) {
                x += 1;
            }
            f(start, y, x - start)?;
        }
    }

    Ok(())
}
