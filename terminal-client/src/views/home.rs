use common::animation::{ALIEN_PATTERN, PixelAlien};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::{Palette, centered_rect};

const PIXEL_WIDTH: u16 = 2;
const ALIEN_COLUMNS: u16 = ALIEN_PATTERN[0].len() as u16 * PIXEL_WIDTH;
const ALIEN_ROWS: u16 = ALIEN_PATTERN.len() as u16;
/// Extra room around the sprite for tilt and bob.
const ALIEN_MARGIN: u16 = 2;
const EYE_ROW: usize = 3;
const EYE_COLUMNS: [usize; 2] = [5, 10];

fn home_areas(area: Rect) -> (Rect, Rect, Rect) {
    let [title, stage, banner] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(ALIEN_ROWS + ALIEN_MARGIN * 2),
        Constraint::Length(4),
    ])
    .areas(area);
    (title, centered_rect(ALIEN_COLUMNS, ALIEN_ROWS, stage), banner)
}

/// Terminal cell at the centre of the alien sprite, used to turn mouse positions into
/// pointer offsets.
pub fn alien_anchor(area: Rect) -> (u16, u16) {
    let (_, alien, _) = home_areas(area);
    (alien.x + alien.width / 2, alien.y + alien.height / 2)
}

fn pupil(eye_x: f32) -> &'static str {
    if eye_x < -1.0 {
        "▪ "
    } else if eye_x > 1.0 {
        " ▪"
    } else {
        "▪▪"
    }
}

fn alien_lines(alien: &PixelAlien, palette: &Palette) -> Vec<Line<'static>> {
    let (rotate_x, _) = alien.tilt();
    let (eye_x, _) = alien.eye_offset();
    let lit = if alien.is_hovering() {
        palette.accent().add_modifier(Modifier::BOLD)
    } else {
        palette.accent()
    };

    (0..ALIEN_PATTERN.len())
        .map(|row| {
            // Leaning back or forward shears the rows apart.
            let shear = ((row as f32 - 3.5) / 3.5 * rotate_x / 15.0).round() as i32;
            let mut spans = vec![Span::raw(" ".repeat((ALIEN_MARGIN as i32 + shear).max(0) as usize))];
            for col in 0..ALIEN_PATTERN[row].len() {
                let span = if alien.is_lit(row, col) {
                    Span::styled("██", lit)
                } else if row == EYE_ROW && EYE_COLUMNS.contains(&col) {
                    Span::styled(pupil(eye_x), palette.base())
                } else {
                    Span::styled("  ", palette.base())
                };
                spans.push(span);
            }
            Line::from(spans)
        })
        .collect()
}

pub fn render_home(
    frame: &mut Frame,
    area: Rect,
    palette: &Palette,
    alien: &PixelAlien,
    typing_text: &str,
    caret_visible: bool,
) {
    let (title, sprite, banner) = home_areas(area);

    let heading = Paragraph::new(Line::from(vec![
        Span::styled("~/", palette.muted()),
        Span::styled("portfolio", palette.accent().add_modifier(Modifier::BOLD)),
    ]))
    .centered();
    frame.render_widget(heading, title);

    let (_, rotate_y) = alien.tilt();
    let shift_x = (rotate_y / 7.5).round() as i32;
    let shift_y = (alien.bob_offset() / 10.0).round() as i32;
    let x = (sprite.x as i32 - ALIEN_MARGIN as i32 + shift_x).max(area.x as i32) as u16;
    let y = (sprite.y as i32 + shift_y).max(area.y as i32) as u16;
    let stage = Rect::new(x, y, sprite.width + ALIEN_MARGIN * 2, sprite.height).intersection(area);
    frame.render_widget(Paragraph::new(alien_lines(alien, palette)), stage);

    let caret = if caret_visible { "█" } else { " " };
    let lines = vec![
        Line::from(vec![
            Span::styled("> ", palette.muted()),
            Span::styled(typing_text.to_string(), palette.accent().add_modifier(Modifier::BOLD)),
            Span::styled(caret, palette.accent()),
        ])
        .centered(),
        Line::from(""),
        Line::from(Span::styled(
            "enter: play snake   t: theme   c: accent   q: quit",
            palette.muted(),
        ))
        .centered(),
    ];
    frame.render_widget(Paragraph::new(lines), banner);
}
