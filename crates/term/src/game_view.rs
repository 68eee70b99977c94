//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameState, PieceCatalog, PieceData};
use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Fallback for colors that are not `#RRGGBB`
const UNKNOWN_COLOR: Rgb = Rgb::new(160, 160, 160);

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal renderer for the board and the hand.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
    debug: bool,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
            debug: false,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w,
            cell_h,
            ..Self::default()
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Show the cursor/selection status line at the bottom of the viewport.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Render the current state into an existing framebuffer.
    pub fn render_into(&self, state: &GameState, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let board = state.board();
        let board_px_w = (board.width() as u16) * self.cell_w;
        let board_px_h = (board.height() as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let bg = CellStyle {
            fg: Rgb::new(80, 80, 90),
            bg: BOARD_BG,
            bold: false,
            dim: false,
        };
        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        fb.fill_rect(start_x + 1, start_y + 1, board_px_w, board_px_h, ' ', bg);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Placed cells.
        board.cells().for_each_cell(|cell, x, y, _| {
            let (cx, cy) = (x as u16, y as u16);
            match cell {
                Some(color) => self.draw_board_cell(fb, start_x, start_y, cx, cy, color_of(color), '█'),
                None => self.draw_empty_cell(fb, start_x, start_y, cx, cy),
            }
        });

        // Selected piece at the cursor.
        if let Some(piece) = state.selected_piece() {
            let (ox, oy) = state.cursor();
            let fits = state.preview_fits();
            let (fg, ch) = if fits {
                (color_of(piece.color), '▓')
            } else {
                (color_of(piece.color).dimmed(), '░')
            };
            for (dx, dy) in piece.occupied() {
                let (x, y) = (ox + dx, oy + dy);
                if board.cells().contains(x, y) {
                    self.draw_board_cell(fb, start_x, start_y, x as u16, y as u16, fg, ch);
                }
            }
        }

        self.draw_side_panel(fb, state, viewport, start_x, start_y, frame_w);

        if self.debug {
            self.draw_debug_line(fb, state, viewport);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, state: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: u16, y: u16) {
        let style = CellStyle {
            fg: Rgb::new(90, 90, 100),
            bg: BOARD_BG,
            bold: false,
            dim: true,
        };
        self.fill_cell_rect(fb, start_x, start_y, x, y, '·', style);
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_board_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        fg: Rgb,
        ch: char,
    ) {
        let style = CellStyle {
            fg,
            bg: BOARD_BG,
            bold: true,
            dim: false,
        };
        self.fill_cell_rect(fb, start_x, start_y, x, y, ch, style);
    }

    #[allow(clippy::too_many_arguments)]
    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        state: &GameState,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        let mut y = start_y;
        fb.put_str(panel_x, y, "PLACED", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, state.placed_count(), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "HAND", label);
        y = y.saturating_add(1);

        let selected = state.selected();
        for (slot, entry) in state.hand().iter().enumerate() {
            if y >= viewport.height {
                break;
            }
            let marker = if selected == Some(slot) { '>' } else { ' ' };
            fb.put_char(panel_x, y, marker, label);
            fb.put_u32(panel_x + 1, y, (slot as u32) + 1, value);

            match entry.and_then(PieceCatalog::get) {
                Some(piece) => {
                    let fits = state.board().fits_anywhere(&piece.format);
                    y = self.draw_mini_piece(fb, panel_x + 3, y, piece, fits);
                }
                None => {
                    fb.put_str(panel_x + 3, y, "-", CellStyle { dim: true, ..value });
                    y = y.saturating_add(1);
                }
            }
            y = y.saturating_add(1);
        }
    }

    /// Draw a piece shape at one terminal column pair per cell.
    /// Returns the row below the shape.
    fn draw_mini_piece(&self, fb: &mut FrameBuffer, x: u16, y: u16, piece: &PieceData, fits: bool) -> u16 {
        let fg = if fits {
            color_of(piece.color)
        } else {
            color_of(piece.color).dimmed()
        };
        let style = CellStyle {
            fg,
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: !fits,
        };
        for (dx, dy) in piece.occupied() {
            let px = x.saturating_add((dx as u16) * 2);
            let py = y.saturating_add(dy as u16);
            fb.fill_rect(px, py, 2, 1, '█', style);
        }
        y.saturating_add(piece.height() as u16)
    }

    fn draw_debug_line(&self, fb: &mut FrameBuffer, state: &GameState, viewport: Viewport) {
        if viewport.height == 0 {
            return;
        }
        let y = viewport.height - 1;
        let style = CellStyle {
            fg: Rgb::new(255, 200, 80),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        let (cx, cy) = state.cursor();
        let mut x = 0;
        fb.put_str(x, y, "x=", style);
        x += 2;
        fb.put_u32(x, y, cx as u32, style);
        x += 4;
        fb.put_str(x, y, "y=", style);
        x += 2;
        fb.put_u32(x, y, cy as u32, style);
        x += 4;
        fb.put_str(x, y, if state.preview_fits() { "fits" } else { "blocked" }, style);
        x += 8;
        fb.put_str(x, y, "cells=", style);
        x += 6;
        fb.put_u32(x, y, state.board().occupied_count() as u32, style);
    }
}

fn color_of(color: &str) -> Rgb {
    Rgb::from_hex(color).unwrap_or(UNKNOWN_COLOR)
}
