use super::keys;

/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Axis a direction travels along
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Vertical,
    Horizontal,
}

impl Direction {
    pub fn axis(&self) -> Axis {
        match self {
            Direction::Up | Direction::Down => Axis::Vertical,
            Direction::Left | Direction::Right => Axis::Horizontal,
        }
    }

    /// Returns the delta (d_row, d_col) for moving in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// Look up the direction bound to a raw key code
    pub fn from_key(code: keys::Code) -> Option<Direction> {
        match code {
            keys::W => Some(Direction::Up),
            keys::A => Some(Direction::Left),
            keys::S => Some(Direction::Down),
            keys::D => Some(Direction::Right),
            _ => None,
        }
    }

    /// Returns the direction after applying a turn request.
    ///
    /// Only a turn onto the perpendicular axis is accepted; a request along the
    /// current axis (including a full reversal) leaves the heading unchanged.
    pub fn turned(self, requested: Direction) -> Direction {
        if requested.axis() == self.axis() {
            self
        } else {
            requested
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis() {
        assert_eq!(Direction::Up.axis(), Axis::Vertical);
        assert_eq!(Direction::Down.axis(), Axis::Vertical);
        assert_eq!(Direction::Left.axis(), Axis::Horizontal);
        assert_eq!(Direction::Right.axis(), Axis::Horizontal);
    }

    #[test]
    fn test_direction_delta() {
        assert_eq!(Direction::Up.delta(), (-1, 0));
        assert_eq!(Direction::Down.delta(), (1, 0));
        assert_eq!(Direction::Left.delta(), (0, -1));
        assert_eq!(Direction::Right.delta(), (0, 1));
    }

    #[test]
    fn test_key_bindings() {
        assert_eq!(Direction::from_key(keys::W), Some(Direction::Up));
        assert_eq!(Direction::from_key(keys::A), Some(Direction::Left));
        assert_eq!(Direction::from_key(keys::S), Some(Direction::Down));
        assert_eq!(Direction::from_key(keys::D), Some(Direction::Right));
        assert_eq!(Direction::from_key(88), None);
        assert_eq!(Direction::from_key(0), None);
    }

    #[test]
    fn test_turns_only_onto_other_axis() {
        assert_eq!(Direction::Right.turned(Direction::Up), Direction::Up);
        assert_eq!(Direction::Right.turned(Direction::Down), Direction::Down);
        assert_eq!(Direction::Up.turned(Direction::Left), Direction::Left);

        // Same axis, reversal included, is rejected
        assert_eq!(Direction::Up.turned(Direction::Down), Direction::Up);
        assert_eq!(Direction::Up.turned(Direction::Up), Direction::Up);
        assert_eq!(Direction::Left.turned(Direction::Right), Direction::Left);
    }
}
