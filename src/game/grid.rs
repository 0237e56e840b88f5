use super::error::GameError;
use super::state::{CellStatus, Position};

/// Square arena of cell statuses stored row-major in a flat vector.
///
/// The outer ring is Wall on construction and every other cell is Empty.
/// `Grid` performs no consistency checks of its own; keeping the Snake cells
/// in step with the body queue is the engine's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<CellStatus>,
}

impl Grid {
    pub fn new(size: usize) -> Self {
        let mut cells = vec![CellStatus::Empty; size * size];
        let last = size.saturating_sub(1);
        for row in 0..size {
            for col in 0..size {
                if row == 0 || col == 0 || row == last || col == last {
                    cells[row * size + col] = CellStatus::Wall;
                }
            }
        }
        Self { size, cells }
    }

    /// Side length of the arena
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.index(pos).is_ok()
    }

    fn index(&self, pos: Position) -> Result<usize, GameError> {
        let size = self.size as i32;
        if (0..size).contains(&pos.row) && (0..size).contains(&pos.col) {
            Ok(pos.row as usize * self.size + pos.col as usize)
        } else {
            Err(GameError::OutOfBounds {
                row: pos.row,
                col: pos.col,
                size: self.size,
            })
        }
    }

    /// Status of a cell; positions outside the arena are an error
    pub fn get(&self, pos: Position) -> Result<CellStatus, GameError> {
        self.index(pos).map(|idx| self.cells[idx])
    }

    /// Overwrite the status of a cell
    pub fn set(&mut self, pos: Position, status: CellStatus) -> Result<(), GameError> {
        let idx = self.index(pos)?;
        self.cells[idx] = status;
        Ok(())
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (Position, CellStatus)> + '_ {
        let size = self.size;
        self.cells.iter().enumerate().map(move |(idx, status)| {
            let pos = Position::new((idx / size) as i32, (idx % size) as i32);
            (pos, *status)
        })
    }

    /// Positions currently holding `status`, row-major
    pub fn positions_with(&self, status: CellStatus) -> impl Iterator<Item = Position> + '_ {
        self.cells()
            .filter(move |(_, s)| *s == status)
            .map(|(pos, _)| pos)
    }

    pub fn count(&self, status: CellStatus) -> usize {
        self.cells.iter().filter(|s| **s == status).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_border_is_wall() {
        let grid = Grid::new(7);

        for i in 0..7 {
            assert_eq!(grid.get(Position::new(0, i)), Ok(CellStatus::Wall));
            assert_eq!(grid.get(Position::new(6, i)), Ok(CellStatus::Wall));
            assert_eq!(grid.get(Position::new(i, 0)), Ok(CellStatus::Wall));
            assert_eq!(grid.get(Position::new(i, 6)), Ok(CellStatus::Wall));
        }

        assert_eq!(grid.get(Position::new(1, 1)), Ok(CellStatus::Empty));
        assert_eq!(grid.get(Position::new(5, 5)), Ok(CellStatus::Empty));
        assert_eq!(grid.count(CellStatus::Wall), 24);
        assert_eq!(grid.count(CellStatus::Empty), 25);
    }

    #[test]
    fn test_set_overwrites() {
        let mut grid = Grid::new(10);
        let pos = Position::new(3, 4);

        grid.set(pos, CellStatus::Food).unwrap();
        assert_eq!(grid.get(pos), Ok(CellStatus::Food));

        grid.set(pos, CellStatus::Snake).unwrap();
        assert_eq!(grid.get(pos), Ok(CellStatus::Snake));

        // Walls are not protected
        grid.set(Position::new(0, 0), CellStatus::Empty).unwrap();
        assert_eq!(grid.get(Position::new(0, 0)), Ok(CellStatus::Empty));
    }

    #[test]
    fn test_out_of_bounds() {
        let mut grid = Grid::new(10);
        let outside = Position::new(-1, 4);

        assert!(!grid.contains(outside));
        assert_eq!(
            grid.get(outside),
            Err(GameError::OutOfBounds {
                row: -1,
                col: 4,
                size: 10
            })
        );
        assert!(grid.set(Position::new(4, 10), CellStatus::Food).is_err());
        assert!(grid.contains(Position::new(9, 9)));
    }

    #[test]
    fn test_cells_row_major() {
        let mut grid = Grid::new(8);
        grid.set(Position::new(2, 5), CellStatus::Food).unwrap();
        grid.set(Position::new(4, 1), CellStatus::Food).unwrap();

        let cells: Vec<_> = grid.cells().collect();
        assert_eq!(cells.len(), 64);
        assert_eq!(cells[0], (Position::new(0, 0), CellStatus::Wall));
        assert_eq!(cells[2 * 8 + 5], (Position::new(2, 5), CellStatus::Food));

        let food: Vec<_> = grid.positions_with(CellStatus::Food).collect();
        assert_eq!(food, vec![Position::new(2, 5), Position::new(4, 1)]);
    }
}
