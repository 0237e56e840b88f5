use super::action::Direction;

/// A cell coordinate on the arena, row first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Move position by delta
    pub fn moved_by(&self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (d_row, d_col) = direction.delta();
        self.moved_by(d_row, d_col)
    }
}

/// What occupies a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellStatus {
    Wall,
    Snake,
    Food,
    Empty,
}

/// Type of collision that ended the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake ran into its own body
    SelfCollision,
}

impl CollisionType {
    /// Short message a front end can show to the player
    pub fn message(&self) -> &'static str {
        match self {
            CollisionType::Wall => "You hit a wall!",
            CollisionType::SelfCollision => "You ate yourself!",
        }
    }
}

/// Lifecycle of a session. `Halted` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Halted(CollisionType),
}

impl GameStatus {
    pub fn is_halted(&self) -> bool {
        matches!(self, GameStatus::Halted(_))
    }

    pub fn collision(&self) -> Option<CollisionType> {
        match self {
            GameStatus::Running => None,
            GameStatus::Halted(kind) => Some(*kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_movement() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.moved_by(1, 0), Position::new(6, 5));
        assert_eq!(pos.moved_by(-1, 0), Position::new(4, 5));
        assert_eq!(pos.moved_by(0, 1), Position::new(5, 6));
        assert_eq!(pos.moved_by(0, -1), Position::new(5, 4));
    }

    #[test]
    fn test_moved_in_direction() {
        let pos = Position::new(3, 5);
        assert_eq!(pos.moved_in_direction(Direction::Up), Position::new(2, 5));
        assert_eq!(pos.moved_in_direction(Direction::Down), Position::new(4, 5));
        assert_eq!(pos.moved_in_direction(Direction::Left), Position::new(3, 4));
        assert_eq!(pos.moved_in_direction(Direction::Right), Position::new(3, 6));
    }

    #[test]
    fn test_game_status() {
        assert!(!GameStatus::Running.is_halted());
        assert_eq!(GameStatus::Running.collision(), None);

        let halted = GameStatus::Halted(CollisionType::Wall);
        assert!(halted.is_halted());
        assert_eq!(halted.collision(), Some(CollisionType::Wall));
    }

    #[test]
    fn test_collision_messages() {
        assert_eq!(CollisionType::Wall.message(), "You hit a wall!");
        assert_eq!(CollisionType::SelfCollision.message(), "You ate yourself!");
    }
}
