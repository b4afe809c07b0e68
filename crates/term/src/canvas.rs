//! Canvas: an in-memory grid of styled terminal cells with the drawing
//! primitives the game needs (background clear, filled rectangles, text).

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Rgb::new(0, 0, 0),
            bg: Rgb::new(245, 245, 245),
            bold: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize, keeping the allocation when possible. Contents are undefined
    /// until the next [`Canvas::clear_background`].
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        self.cells
            .resize((width as usize) * (height as usize), Cell::default());
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    /// Out-of-bounds writes are clipped.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear_background(&mut self, color: Rgb) {
        self.cells.fill(Cell {
            bg: color,
            ..Cell::default()
        });
    }

    /// Fill a rectangle with `color`, erasing any glyphs under it.
    pub fn draw_rect(&mut self, x: u16, y: u16, w: u16, h: u16, color: Rgb) {
        for dy in 0..h {
            for dx in 0..w {
                let (px, py) = (x.saturating_add(dx), y.saturating_add(dy));
                if let Some(i) = self.idx(px, py) {
                    let cell = &mut self.cells[i];
                    cell.ch = ' ';
                    cell.bg = color;
                    cell.bold = false;
                }
            }
        }
    }

    /// Draw a single glyph over whatever background is already there.
    pub fn draw_char(&mut self, x: u16, y: u16, ch: char, color: Rgb) {
        if let Some(i) = self.idx(x, y) {
            let cell = &mut self.cells[i];
            cell.ch = ch;
            cell.fg = color;
        }
    }

    /// Draw text left to right, clipped at the right edge.
    pub fn draw_text(&mut self, x: u16, y: u16, text: &str, color: Rgb) {
        let mut cx = x;
        for ch in text.chars() {
            if cx >= self.width {
                break;
            }
            self.draw_char(cx, y, ch, color);
            cx += 1;
        }
    }

    pub fn draw_text_bold(&mut self, x: u16, y: u16, text: &str, color: Rgb) {
        self.draw_text(x, y, text, color);
        let end = x.saturating_add(text.chars().count() as u16).min(self.width);
        for cx in x..end {
            if let Some(i) = self.idx(cx, y) {
                self.cells[i].bold = true;
            }
        }
    }

    /// The glyphs of row `y` as a string (empty if out of range).
    pub fn row_text(&self, y: u16) -> String {
        if y >= self.height {
            return String::new();
        }
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|c| c.ch)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_rect_clips_at_edges() {
        let mut canvas = Canvas::new(4, 3);
        let red = Rgb::new(230, 41, 55);
        canvas.draw_rect(2, 1, 5, 5, red);

        assert_eq!(canvas.get(3, 2).unwrap().bg, red);
        assert_eq!(canvas.get(1, 1).unwrap().bg, Cell::default().bg);
    }

    #[test]
    fn text_keeps_underlying_background() {
        let mut canvas = Canvas::new(10, 1);
        let blue = Rgb::new(0, 121, 241);
        canvas.draw_rect(0, 0, 10, 1, blue);
        canvas.draw_text(1, 0, "Hi", Rgb::new(0, 0, 0));

        let cell = canvas.get(1, 0).unwrap();
        assert_eq!(cell.ch, 'H');
        assert_eq!(cell.bg, blue);
        assert_eq!(canvas.row_text(0), " Hi       ");
    }

    #[test]
    fn text_is_clipped_at_right_edge() {
        let mut canvas = Canvas::new(3, 1);
        canvas.draw_text_bold(1, 0, "Score", Rgb::new(0, 0, 0));
        assert_eq!(canvas.row_text(0), " Sc");
        assert!(canvas.get(2, 0).unwrap().bold);
    }

    #[test]
    fn resize_then_clear_covers_new_area() {
        let mut canvas = Canvas::new(2, 2);
        canvas.resize(5, 4);
        let bg = Rgb::new(1, 2, 3);
        canvas.clear_background(bg);
        assert_eq!(canvas.cells().len(), 20);
        assert!(canvas.cells().iter().all(|c| c.bg == bg && c.ch == ' '));
    }
}
