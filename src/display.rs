/// Terminal render surface: all terminal I/O lives here.
///
/// Playfield coordinates are scaled onto the terminal grid, so the same
/// 1200×800 field fills whatever window the player has. Row 0 doubles as
/// the HUD line.

use std::io::Write;

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use alien_invasion::geometry::Rect;
use alien_invasion::input::PlayButton;
use alien_invasion::render::{RenderSurface, SpriteKind};
use alien_invasion::settings::{BaseSettings, Rgb};

fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.0,
        g: rgb.1,
        b: rgb.2,
    }
}

/// Inclusive-exclusive span of cells a playfield interval covers. Always at
/// least one cell wide so tiny sprites stay visible.
fn cell_span(start: f32, len: f32, field: f32, cells: u16) -> (u16, u16) {
    let scale = cells as f32 / field;
    let max = cells.saturating_sub(1) as f32;
    let first = (start * scale).floor().clamp(0.0, max);
    let last = ((start + len) * scale).ceil().clamp(first + 1.0, cells as f32);
    (first as u16, last as u16)
}

pub struct TerminalSurface<'a, W: Write> {
    out: &'a mut W,
    cols: u16,
    rows: u16,
    field_width: f32,
    field_height: f32,
    background: Color,
}

impl<'a, W: Write> TerminalSurface<'a, W> {
    pub fn new(out: &'a mut W, (cols, rows): (u16, u16), base: &BaseSettings) -> Self {
        TerminalSurface {
            out,
            cols: cols.max(1),
            rows: rows.max(1),
            field_width: base.screen_width,
            field_height: base.screen_height,
            background: color(base.bg_color),
        }
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols.max(1);
        self.rows = rows.max(1);
    }

    /// Centre of a terminal cell, in playfield coordinates.
    pub fn cell_to_field(&self, col: u16, row: u16) -> (f32, f32) {
        let x = (col as f32 + 0.5) * self.field_width / self.cols as f32;
        let y = (row as f32 + 0.5) * self.field_height / self.rows as f32;
        (x, y)
    }

    /// Mouse capture stands in for pointer visibility: clicks are only
    /// needed while the Play button is on screen.
    pub fn set_pointer_visible(&mut self, visible: bool) -> std::io::Result<()> {
        if visible {
            self.out.queue(EnableMouseCapture)?;
        } else {
            self.out.queue(DisableMouseCapture)?;
        }
        self.out.flush()
    }

    fn cells(&self, bounds: Rect) -> ((u16, u16), (u16, u16)) {
        (
            cell_span(bounds.x, bounds.width, self.field_width, self.cols),
            cell_span(bounds.y, bounds.height, self.field_height, self.rows),
        )
    }
}

impl<W: Write> RenderSurface for TerminalSurface<'_, W> {
    type Error = std::io::Error;

    fn fill_background(&mut self, rgb: Rgb) -> std::io::Result<()> {
        self.background = color(rgb);
        self.out.queue(style::SetBackgroundColor(self.background))?;
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        Ok(())
    }

    fn draw_sprite(&mut self, kind: SpriteKind, bounds: Rect, rgb: Rgb) -> std::io::Result<()> {
        let ((x0, x1), (y0, y1)) = self.cells(bounds);
        let width = (x1 - x0) as usize;
        self.out.queue(style::SetForegroundColor(color(rgb)))?;

        for row in y0..y1 {
            let line = match kind {
                //   ▲
                //  ███
                SpriteKind::Ship if row == y0 && width >= 3 => {
                    format!("{}▲{}", " ".repeat(width / 2), " ".repeat(width - width / 2 - 1))
                }
                SpriteKind::Ship => "█".repeat(width),
                SpriteKind::Projectile => "║".repeat(width),
                //  «▼»
                //  ╚═╝
                SpriteKind::Enemy if width >= 3 => {
                    if row == y0 {
                        format!("«{}»", "▼".repeat(width - 2))
                    } else {
                        format!("╚{}╝", "═".repeat(width - 2))
                    }
                }
                SpriteKind::Enemy => "▼".repeat(width),
            };
            self.out.queue(cursor::MoveTo(x0, row))?;
            self.out.queue(Print(line))?;
        }
        Ok(())
    }

    fn draw_score(&mut self, text: &str) -> std::io::Result<()> {
        let x = self
            .cols
            .saturating_sub(text.chars().count() as u16 + 1);
        self.out.queue(cursor::MoveTo(x, 0))?;
        self.out.queue(style::SetForegroundColor(Color::Black))?;
        self.out.queue(Print(text))?;
        Ok(())
    }

    fn draw_button(&mut self, button: &PlayButton, fill: Rgb, text: Rgb) -> std::io::Result<()> {
        let ((x0, x1), (y0, y1)) = self.cells(button.rect);
        let width = (x1 - x0) as usize;

        self.out.queue(style::SetBackgroundColor(color(fill)))?;
        for row in y0..y1 {
            self.out.queue(cursor::MoveTo(x0, row))?;
            self.out.queue(Print(" ".repeat(width)))?;
        }

        let label_len = button.label.chars().count() as u16;
        let label_x = x0 + (x1 - x0).saturating_sub(label_len) / 2;
        let label_y = y0 + (y1 - y0) / 2;
        self.out.queue(cursor::MoveTo(label_x, label_y))?;
        self.out.queue(style::SetForegroundColor(color(text)))?;
        self.out.queue(Print(button.label))?;
        self.out.queue(style::SetBackgroundColor(self.background))?;
        Ok(())
    }

    fn present(&mut self) -> std::io::Result<()> {
        // Park cursor in a harmless spot and flush
        self.out.queue(style::ResetColor)?;
        self.out.queue(cursor::MoveTo(0, self.rows.saturating_sub(1)))?;
        self.out.flush()
    }
}
