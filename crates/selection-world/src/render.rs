//! ANSI frame rendering.
//!
//! Every cell is three columns wide: a bold, energy-coloured creature id, a
//! yellow `*` for food, or blank.

use crate::board::Board;
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use selection_core::{Position, RenderConfig, Result};
use std::io::Write;

const RESET: &str = "\x1b[0m";
const BLANK: &str = "   ";

/// Clear the screen and draw the whole board
pub fn render_frame<W: Write>(board: &Board, palette: &RenderConfig, out: &mut W) -> Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;

    let size = board.size();
    let mut row = String::with_capacity(size as usize * 12);

    for y in 0..size {
        row.clear();
        for x in 0..size {
            push_cell(&mut row, board, palette, Position::new(x, y));
        }
        row.push('\n');
        out.write_all(row.as_bytes())?;
    }

    Ok(())
}

fn push_cell(row: &mut String, board: &Board, palette: &RenderConfig, pos: Position) {
    use std::fmt::Write as _;

    // Writing into a String cannot fail.
    if let Some(creature) = board.creature_at(pos) {
        let color = palette
            .palette_base
            .saturating_add(creature.energy_band(board.max_energy()));
        let _ = write!(row, "\x1b[1;{}m {:<2}{}", color, creature.id.0, RESET);
    } else if board.has_food_at(pos) {
        let _ = write!(row, "\x1b[{}m * {}", palette.food_color, RESET);
    } else {
        row.push_str(BLANK);
    }
}
