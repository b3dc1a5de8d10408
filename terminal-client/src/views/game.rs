use common::games::snake::{CellKind, GameOverReason, GameStatus, Point, SnakeGameState};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use super::{Palette, centered_rect};

fn status_hint(state: &SnakeGameState) -> String {
    match state.status() {
        GameStatus::Idle => "[enter] Start Game".to_string(),
        GameStatus::Playing => "Use WASD or Arrow keys".to_string(),
        GameStatus::GameOver => {
            let reason = match state.game_over_reason() {
                Some(GameOverReason::WallCollision) => "hit the wall",
                Some(GameOverReason::SelfCollision) => "ran into itself",
                Some(GameOverReason::BoardFilled) => "filled the board",
                None => "stopped",
            };
            format!("Game Over! Play Again [enter]  (the snake {})", reason)
        }
    }
}

fn board_lines(state: &SnakeGameState, palette: &Palette) -> Vec<Line<'static>> {
    let size = state.settings().grid_size;
    (0..size)
        .map(|y| {
            let spans: Vec<Span> = (0..size)
                .map(|x| match state.cell(Point::new(x, y)) {
                    CellKind::Head => {
                        Span::styled("██", palette.accent().add_modifier(Modifier::BOLD))
                    }
                    CellKind::Body => Span::styled("▓▓", palette.accent()),
                    CellKind::Food => Span::styled("◆ ", palette.base().add_modifier(Modifier::BOLD)),
                    CellKind::Empty => Span::styled(" ·", palette.muted()),
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

pub fn render_game(frame: &mut Frame, area: Rect, palette: &Palette, state: &SnakeGameState) {
    let size = state.settings().grid_size as u16;
    let panel = centered_rect(size * 2 + 2, size + 6, area);
    let [score, board, hint] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(size + 2),
        Constraint::Length(2),
    ])
    .areas(panel);

    let scores = Paragraph::new(Line::from(vec![
        Span::styled("SCORE ", palette.muted()),
        Span::styled(state.score().to_string(), palette.accent().add_modifier(Modifier::BOLD)),
        Span::styled("   HIGH ", palette.muted()),
        Span::styled(state.high_score().to_string(), palette.accent()),
    ]))
    .centered();
    frame.render_widget(scores, score);

    let grid = Paragraph::new(board_lines(state, palette)).block(
        Block::bordered()
            .title(" snake.exe ")
            .border_style(palette.accent()),
    );
    frame.render_widget(grid, board);

    let hint_line = Paragraph::new(Line::from(Span::styled(status_hint(state), palette.muted())).centered())
        .style(palette.base());
    frame.render_widget(hint_line, hint);
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::snake::SnakeSettings;

    #[test]
    fn test_hint_follows_status() {
        let mut state = SnakeGameState::new(SnakeSettings::default());
        assert!(status_hint(&state).contains("Start Game"));

        state.start();
        assert_eq!(status_hint(&state), "Use WASD or Arrow keys");

        state.stop();
        assert!(status_hint(&state).contains("Start Game"));
    }

    #[test]
    fn test_board_has_one_line_per_row() {
        let state = SnakeGameState::new(SnakeSettings::default());
        let palette = Palette::new(Default::default(), Default::default());
        let lines = board_lines(&state, &palette);
        assert_eq!(lines.len(), 15);
        assert!(lines.iter().all(|line| line.width() == 30));
    }
}
