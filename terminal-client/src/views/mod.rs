mod boot;
mod cursor;
mod game;
mod home;
mod palette;

use ratatui::layout::Rect;

pub use boot::render_boot;
pub use cursor::render_cursor;
pub use game::render_game;
pub use home::{alien_anchor, render_home};
pub use palette::Palette;

/// Rect of at most `width` x `height` centred in `area`.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fits_inside_area() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered_rect(20, 4, area), Rect::new(30, 10, 20, 4));
        assert_eq!(centered_rect(200, 40, area), area);
    }
}
