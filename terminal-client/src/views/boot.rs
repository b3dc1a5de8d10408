use common::animation::{BootLoader, LoaderPhase};
use ratatui::{
    Frame,
    layout::Rect,
    style::Modifier,
    text::Line,
    widgets::{Block, Gauge, Paragraph},
};

use super::{Palette, centered_rect};

pub fn render_boot(frame: &mut Frame, area: Rect, palette: &Palette, loader: &BootLoader) {
    match loader.phase() {
        LoaderPhase::Loading => {
            let panel = centered_rect(44, 5, area);
            let title = Paragraph::new(Line::from("INITIALIZING SYSTEM...").centered())
                .style(palette.accent().add_modifier(Modifier::BOLD));
            frame.render_widget(title, Rect { height: 1, ..panel });

            let gauge = Gauge::default()
                .block(Block::bordered().border_style(palette.muted()))
                .gauge_style(palette.accent())
                .ratio((loader.progress() / 100.0).clamp(0.0, 1.0))
                .label(loader.percentage_label());
            frame.render_widget(
                gauge,
                Rect {
                    y: panel.y + 1,
                    height: panel.height.saturating_sub(1),
                    ..panel
                },
            );
        }
        LoaderPhase::Line => {
            let line = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
            let beam = Paragraph::new("─".repeat(area.width as usize)).style(palette.accent());
            frame.render_widget(beam, line);
        }
        LoaderPhase::Expand => {
            let opening = centered_rect(area.width, area.height / 2, area);
            frame.render_widget(Block::bordered().border_style(palette.accent()), opening);
        }
        LoaderPhase::Done => {}
    }
}
