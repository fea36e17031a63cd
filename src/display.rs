/// Rendering layer — all terminal output lives here.
///
/// Paints the world's cell grid and the year overlay.  No game logic is
/// performed; this module only translates the grid into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Attribute, Color, Print},
    QueueableCommand,
};
use space_garbage::canvas::{CellStyle, Grid};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_PLAYFIELD: Color = Color::White;
const C_OVERLAY: Color = Color::Yellow;

fn attribute(style: CellStyle) -> Attribute {
    match style {
        CellStyle::Dim => Attribute::Dim,
        CellStyle::Normal => Attribute::NormalIntensity,
        CellStyle::Bold => Attribute::Bold,
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame: the playfield rows, then the overlay on the
/// row just below them.
pub fn render<W: Write>(out: &mut W, grid: &Grid, overlay: &str) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_PLAYFIELD))?;
    for row in 0..grid.rows() {
        draw_row(out, grid, row)?;
    }
    draw_overlay(out, grid, overlay)?;

    out.queue(style::SetAttribute(Attribute::Reset))?;
    out.queue(style::ResetColor)?;
    out.flush()?;
    Ok(())
}

// ── Playfield ─────────────────────────────────────────────────────────────────

fn draw_row<W: Write>(out: &mut W, grid: &Grid, row: usize) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(0, row as u16))?;

    // Batch runs of equally styled cells into one Print.
    let mut current = CellStyle::Normal;
    let mut run = String::with_capacity(grid.columns());
    out.queue(style::SetAttribute(attribute(current)))?;

    for column in 0..grid.columns() {
        let Some(cell) = grid.cell(row, column) else {
            break;
        };
        if cell.style != current && cell.symbol != ' ' {
            out.queue(Print(&run))?;
            run.clear();
            // NormalIntensity does not cancel Dim on every terminal.
            out.queue(style::SetAttribute(Attribute::Reset))?;
            out.queue(style::SetForegroundColor(C_PLAYFIELD))?;
            out.queue(style::SetAttribute(attribute(cell.style)))?;
            current = cell.style;
        }
        run.push(cell.symbol);
    }
    out.queue(Print(&run))?;
    Ok(())
}

// ── Overlay ───────────────────────────────────────────────────────────────────

fn draw_overlay<W: Write>(out: &mut W, grid: &Grid, overlay: &str) -> std::io::Result<()> {
    let width = grid.columns().saturating_sub(1);
    let text: String = overlay.chars().take(width).collect();

    out.queue(style::SetAttribute(Attribute::Reset))?;
    out.queue(cursor::MoveTo(0, grid.rows() as u16))?;
    out.queue(style::SetForegroundColor(C_OVERLAY))?;
    out.queue(Print(format!("{text:<width$}")))?;
    Ok(())
}
