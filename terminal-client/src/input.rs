use common::games::snake::{Direction, GameKey, direction_for_key};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::Screen;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppCommand {
    Quit,
    ToggleTheme,
    CycleAccent,
    SkipBoot,
    OpenGame,
    BackHome,
    StartGame,
    Steer(Direction),
}

pub fn game_key(code: KeyCode) -> GameKey {
    match code {
        KeyCode::Up => GameKey::ArrowUp,
        KeyCode::Down => GameKey::ArrowDown,
        KeyCode::Left => GameKey::ArrowLeft,
        KeyCode::Right => GameKey::ArrowRight,
        KeyCode::Char(c) => GameKey::Char(c),
        _ => GameKey::Other,
    }
}

pub fn command_for_key(screen: Screen, key: KeyEvent) -> Option<AppCommand> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(AppCommand::Quit);
    }

    match (screen, key.code) {
        (_, KeyCode::Char('q')) => Some(AppCommand::Quit),
        (Screen::Boot, KeyCode::Esc) => Some(AppCommand::Quit),
        (Screen::Boot, _) => Some(AppCommand::SkipBoot),
        (_, KeyCode::Char('t')) => Some(AppCommand::ToggleTheme),
        (_, KeyCode::Char('c')) => Some(AppCommand::CycleAccent),
        (Screen::Home, KeyCode::Esc) => Some(AppCommand::Quit),
        (Screen::Home, KeyCode::Enter | KeyCode::Char('g')) => Some(AppCommand::OpenGame),
        (Screen::Game, KeyCode::Esc) => Some(AppCommand::BackHome),
        (Screen::Game, KeyCode::Enter | KeyCode::Char(' ')) => Some(AppCommand::StartGame),
        (Screen::Game, code) => direction_for_key(game_key(code)).map(AppCommand::Steer),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_game_screen_steers_with_arrows_and_wasd() {
        assert_eq!(
            command_for_key(Screen::Game, press(KeyCode::Up)),
            Some(AppCommand::Steer(Direction::Up))
        );
        assert_eq!(
            command_for_key(Screen::Game, press(KeyCode::Char('A'))),
            Some(AppCommand::Steer(Direction::Left))
        );
        assert_eq!(command_for_key(Screen::Game, press(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_steering_keys_do_nothing_on_home() {
        assert_eq!(command_for_key(Screen::Home, press(KeyCode::Char('w'))), None);
        assert_eq!(
            command_for_key(Screen::Home, press(KeyCode::Enter)),
            Some(AppCommand::OpenGame)
        );
    }

    #[test]
    fn test_escape_leaves_game_then_quits() {
        assert_eq!(
            command_for_key(Screen::Game, press(KeyCode::Esc)),
            Some(AppCommand::BackHome)
        );
        assert_eq!(
            command_for_key(Screen::Home, press(KeyCode::Esc)),
            Some(AppCommand::Quit)
        );
    }

    #[test]
    fn test_any_key_skips_boot() {
        assert_eq!(
            command_for_key(Screen::Boot, press(KeyCode::Char('t'))),
            Some(AppCommand::SkipBoot)
        );
        assert_eq!(
            command_for_key(Screen::Boot, press(KeyCode::Char('q'))),
            Some(AppCommand::Quit)
        );
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(command_for_key(Screen::Game, key), Some(AppCommand::Quit));
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut key = press(KeyCode::Char('t'));
        key.kind = KeyEventKind::Release;
        assert_eq!(command_for_key(Screen::Home, key), None);
    }
}
