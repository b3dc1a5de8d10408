use std::collections::{HashSet, VecDeque};

use super::types::Point;

/// Body stored head-first, mirrored in a set for O(1) occupancy checks.
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Point>,
    body_set: HashSet<Point>,
}

impl Snake {
    pub fn new(head: Point) -> Self {
        Self {
            body: VecDeque::from([head]),
            body_set: HashSet::from([head]),
        }
    }

    /// Builds a snake from head-first segments; `None` for an empty slice.
    pub fn from_segments(segments: &[Point]) -> Option<Self> {
        if segments.is_empty() {
            return None;
        }
        Some(Self {
            body: segments.iter().copied().collect(),
            body_set: segments.iter().copied().collect(),
        })
    }

    pub fn head(&self) -> Point {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn occupies(&self, point: &Point) -> bool {
        self.body_set.contains(point)
    }

    pub fn segments(&self) -> impl Iterator<Item = &Point> {
        self.body.iter()
    }

    pub fn push_head(&mut self, head: Point) {
        self.body.push_front(head);
        self.body_set.insert(head);
    }

    pub fn pop_tail(&mut self) {
        if self.body.len() <= 1 {
            return;
        }
        if let Some(tail) = self.body.pop_back() {
            self.body_set.remove(&tail);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_pop_keep_set_in_sync() {
        let mut snake = Snake::new(Point::new(7, 7));
        snake.push_head(Point::new(8, 7));
        assert_eq!(snake.len(), 2);
        assert!(snake.occupies(&Point::new(7, 7)));

        snake.pop_tail();
        assert_eq!(snake.len(), 1);
        assert!(!snake.occupies(&Point::new(7, 7)));
        assert_eq!(snake.head(), Point::new(8, 7));
    }

    #[test]
    fn test_from_segments_rejects_empty_body() {
        assert!(Snake::from_segments(&[]).is_none());
        let snake = Snake::from_segments(&[Point::new(5, 5), Point::new(6, 5)]).unwrap();
        assert_eq!(snake.head(), Point::new(5, 5));
    }

    #[test]
    fn test_pop_tail_never_empties_the_snake() {
        let mut snake = Snake::new(Point::new(1, 1));
        snake.pop_tail();
        assert_eq!(snake.len(), 1);
    }
}
