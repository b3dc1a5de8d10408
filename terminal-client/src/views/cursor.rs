use common::animation::CursorFollower;
use ratatui::{Frame, layout::Position};

use super::Palette;

fn to_cell(position: (f32, f32)) -> Option<Position> {
    let (x, y) = (position.0.round(), position.1.round());
    if x < 0.0 || y < 0.0 || x > u16::MAX as f32 || y > u16::MAX as f32 {
        return None;
    }
    Some(Position::new(x as u16, y as u16))
}

/// Draws the trailing ring first so the dot stays on top when they overlap.
pub fn render_cursor(frame: &mut Frame, palette: &Palette, cursor: &CursorFollower) {
    if !cursor.is_visible() {
        return;
    }
    let area = frame.area();
    let marks = [
        (cursor.trail_position(), "○", palette.muted),
        (cursor.main_position(), "●", palette.accent),
    ];
    for (position, symbol, color) in marks {
        let Some(cell_position) = to_cell(position) else {
            continue;
        };
        if !area.contains(cell_position) {
            continue;
        }
        if let Some(cell) = frame.buffer_mut().cell_mut(cell_position) {
            cell.set_symbol(symbol).set_fg(color);
        }
    }
}
