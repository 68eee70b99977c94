//! Framebuffer and style types for terminal rendering.

use crate::core::Grid2D;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` (or `RRGGBB`) color string.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blocks_term::Rgb;
    ///
    /// assert_eq!(Rgb::from_hex("#99DD55"), Some(Rgb::new(0x99, 0xDD, 0x55)));
    /// assert_eq!(Rgb::from_hex("#99DD5"), None);
    /// ```
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Darker variant used for previews that do not fit.
    pub const fn dimmed(self) -> Self {
        Self::new(self.r / 3, self.g / 3, self.b / 3)
    }
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        }
    }
}

impl CellStyle {
    pub fn into_cell(self, ch: char) -> Cell {
        Cell { ch, style: self }
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// 2D framebuffer of styled character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    cells: Grid2D<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            cells: Grid2D::new(width as usize, height as usize),
        }
    }

    pub fn width(&self) -> u16 {
        self.cells.width() as u16
    }

    pub fn height(&self) -> u16 {
        self.cells.height() as u16
    }

    /// Resize the framebuffer.
    ///
    /// Contents are reset when the size changes.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width() == width && self.height() == height {
            return;
        }
        self.cells = Grid2D::new(width as usize, height as usize);
    }

    pub fn cells(&self) -> &Grid2D<Cell> {
        &self.cells
    }

    /// One terminal row, left to right
    pub fn row(&self, y: u16) -> &[Cell] {
        self.cells.row(y as usize).unwrap_or(&[])
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.cells.get(x as usize, y as usize).copied()
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        self.cells.set(x as usize, y as usize, cell);
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell { ch, style });
    }

    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width() {
                break;
            }
            self.put_char(cx, y, ch, style);
            cx += 1;
        }
    }

    pub fn put_u32(&mut self, x: u16, y: u16, value: u32, style: CellStyle) {
        let mut digits = [0u8; 10];
        let mut n = value;
        let mut len = 0;
        loop {
            digits[len] = b'0' + (n % 10) as u8;
            len += 1;
            n /= 10;
            if n == 0 {
                break;
            }
        }
        for (i, d) in digits[..len].iter().rev().enumerate() {
            self.put_char(x.saturating_add(i as u16), y, *d as char, style);
        }
    }

    /// Fill a rectangle; parts outside the framebuffer are skipped
    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: CellStyle) {
        let start = (x as usize, y as usize);
        let end = (start.0 + w as usize, start.1 + h as usize);
        self.cells.fill_in(Cell { ch, style }, start, end);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_rect_clips_at_edges() {
        let mut fb = FrameBuffer::new(4, 3);
        let style = CellStyle::default();
        fb.fill_rect(2, 1, 10, 10, '#', style);

        let filled = fb.cells().values().filter(|c| c.ch == '#').count();
        assert_eq!(filled, 4);
        assert_eq!(fb.get(3, 2).unwrap().ch, '#');
        assert_eq!(fb.get(1, 1).unwrap().ch, ' ');
    }

    #[test]
    fn put_u32_writes_digits() {
        let mut fb = FrameBuffer::new(6, 1);
        fb.put_u32(1, 0, 1203, CellStyle::default());
        let text: String = fb.row(0).iter().map(|c| c.ch).collect();
        assert_eq!(text, " 1203 ");
    }

    #[test]
    fn resize_resets_contents() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.put_char(0, 0, 'x', CellStyle::default());
        fb.resize(2, 2);
        assert_eq!(fb.get(0, 0).unwrap().ch, 'x');
        fb.resize(3, 1);
        assert_eq!((fb.width(), fb.height()), (3, 1));
        assert_eq!(fb.get(0, 0).unwrap().ch, ' ');
    }

    #[test]
    fn hex_colors_from_catalog_parse() {
        for piece in crate::core::PieceCatalog::get_all() {
            assert!(Rgb::from_hex(piece.color).is_some(), "{}", piece.color);
        }
        assert_eq!(Rgb::from_hex("zz0000"), None);
    }
}
