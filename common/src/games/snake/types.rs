#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Neighbouring cell in `direction`, or `None` when it would leave a `size`×`size` grid.
    pub fn step(&self, direction: Direction, size: usize) -> Option<Point> {
        match direction {
            Direction::Up => self.y.checked_sub(1).map(|y| Point::new(self.x, y)),
            Direction::Down => (self.y + 1 < size).then(|| Point::new(self.x, self.y + 1)),
            Direction::Left => self.x.checked_sub(1).map(|x| Point::new(x, self.y)),
            Direction::Right => (self.x + 1 < size).then(|| Point::new(self.x + 1, self.y)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub fn is_opposite(&self, other: &Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
                | (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Idle,
    Playing,
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOverReason {
    WallCollision,
    SelfCollision,
    /// The snake covers every cell, so no food can be placed.
    BoardFilled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellKind {
    Empty,
    Head,
    Body,
    Food,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not playing; nothing changed.
    Ignored,
    Moved,
    AteFood { score: u32 },
    GameOver(GameOverReason),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_inside_grid() {
        let p = Point::new(7, 7);
        assert_eq!(p.step(Direction::Up, 15), Some(Point::new(7, 6)));
        assert_eq!(p.step(Direction::Down, 15), Some(Point::new(7, 8)));
        assert_eq!(p.step(Direction::Left, 15), Some(Point::new(6, 7)));
        assert_eq!(p.step(Direction::Right, 15), Some(Point::new(8, 7)));
    }

    #[test]
    fn test_step_off_each_edge() {
        assert_eq!(Point::new(0, 7).step(Direction::Left, 15), None);
        assert_eq!(Point::new(14, 7).step(Direction::Right, 15), None);
        assert_eq!(Point::new(7, 0).step(Direction::Up, 15), None);
        assert_eq!(Point::new(7, 14).step(Direction::Down, 15), None);
    }

    #[test]
    fn test_opposites() {
        assert!(Direction::Up.is_opposite(&Direction::Down));
        assert!(Direction::Left.is_opposite(&Direction::Right));
        assert!(!Direction::Up.is_opposite(&Direction::Left));
        assert!(!Direction::Up.is_opposite(&Direction::Up));
    }
}
