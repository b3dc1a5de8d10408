use super::types::Direction;

/// Keys the game cares about, independent of the terminal or windowing backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameKey {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Char(char),
    Other,
}

/// Arrow keys and WASD steer; anything else is ignored.
pub fn direction_for_key(key: GameKey) -> Option<Direction> {
    match key {
        GameKey::ArrowUp => Some(Direction::Up),
        GameKey::ArrowDown => Some(Direction::Down),
        GameKey::ArrowLeft => Some(Direction::Left),
        GameKey::ArrowRight => Some(Direction::Right),
        GameKey::Char(c) => match c.to_ascii_lowercase() {
            'w' => Some(Direction::Up),
            's' => Some(Direction::Down),
            'a' => Some(Direction::Left),
            'd' => Some(Direction::Right),
            _ => None,
        },
        GameKey::Other => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrows_and_wasd_map_to_directions() {
        assert_eq!(direction_for_key(GameKey::ArrowUp), Some(Direction::Up));
        assert_eq!(direction_for_key(GameKey::ArrowLeft), Some(Direction::Left));
        assert_eq!(direction_for_key(GameKey::Char('s')), Some(Direction::Down));
        assert_eq!(direction_for_key(GameKey::Char('D')), Some(Direction::Right));
    }

    #[test]
    fn test_other_keys_are_ignored() {
        assert_eq!(direction_for_key(GameKey::Char('q')), None);
        assert_eq!(direction_for_key(GameKey::Char(' ')), None);
        assert_eq!(direction_for_key(GameKey::Other), None);
    }
}
