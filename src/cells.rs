use smallvec::SmallVec;
use std::fmt;

use crate::units::{ColumnIndex, RowIndex, Width};

/// A cell position on a maze grid. `x` is the column and `y` the row, both counted from the
/// top left corner.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct GridCoordinate {
    pub x: u32,
    pub y: u32,
}

pub type CoordinateSmallVec = SmallVec<[GridCoordinate; 4]>;

#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl GridCoordinate {
    pub fn new(x: u32, y: u32) -> GridCoordinate {
        GridCoordinate { x, y }
    }

    #[inline]
    pub fn from_row_major_index(index: usize, width: Width) -> GridCoordinate {
        let Width(w) = width;
        GridCoordinate::new((index % w) as u32, (index / w) as u32)
    }

    #[inline]
    pub fn from_row_column_indices(col_index: ColumnIndex, row_index: RowIndex) -> GridCoordinate {
        let (ColumnIndex(col), RowIndex(row)) = (col_index, row_index);
        GridCoordinate::new(col as u32, row as u32)
    }

    /// Creates a new `GridCoordinate` offset 1 cell away in the given direction.
    /// Returns None if the coordinate is not representable, e.g. left of column 0.
    /// Upper grid bounds are not checked here, that is the grid's job.
    pub fn offset(self, dir: Direction) -> Option<GridCoordinate> {
        let (x, y) = (self.x, self.y);
        match dir {
            Direction::Up => y.checked_sub(1).map(|up| GridCoordinate::new(x, up)),
            Direction::Down => y.checked_add(1).map(|down| GridCoordinate::new(x, down)),
            Direction::Left => x.checked_sub(1).map(|left| GridCoordinate::new(left, y)),
            Direction::Right => x.checked_add(1).map(|right| GridCoordinate::new(right, y)),
        }
    }

    /// The direction to step in to reach an orthogonally adjacent coordinate.
    pub fn direction_to(self, other: GridCoordinate) -> Option<Direction> {
        Direction::ALL
            .iter()
            .cloned()
            .find(|dir| self.offset(*dir) == Some(other))
    }
}

impl fmt::Display for GridCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use std::u32;

    #[test]
    fn offsets() {
        let gc = |x, y| GridCoordinate::new(x, y);
        let c = gc(3, 3);
        assert_eq!(c.offset(Direction::Up), Some(gc(3, 2)));
        assert_eq!(c.offset(Direction::Down), Some(gc(3, 4)));
        assert_eq!(c.offset(Direction::Left), Some(gc(2, 3)));
        assert_eq!(c.offset(Direction::Right), Some(gc(4, 3)));
    }

    #[test]
    fn offsets_off_the_top_left_are_unrepresentable() {
        let origin = GridCoordinate::new(0, 0);
        assert_eq!(origin.offset(Direction::Up), None);
        assert_eq!(origin.offset(Direction::Left), None);

        let far = GridCoordinate::new(u32::MAX, u32::MAX);
        assert_eq!(far.offset(Direction::Down), None);
        assert_eq!(far.offset(Direction::Right), None);
    }

    #[test]
    fn opposites_undo_each_other() {
        let c = GridCoordinate::new(5, 5);
        for dir in Direction::ALL.iter() {
            let there = c.offset(*dir).unwrap();
            assert_eq!(there.offset(dir.opposite()), Some(c));
            assert_eq!(dir.opposite().opposite(), *dir);
        }
    }

    #[test]
    fn direction_to_adjacent_cells_only() {
        let gc = |x, y| GridCoordinate::new(x, y);
        assert_eq!(gc(1, 1).direction_to(gc(1, 0)), Some(Direction::Up));
        assert_eq!(gc(1, 1).direction_to(gc(2, 1)), Some(Direction::Right));
        assert_eq!(gc(1, 1).direction_to(gc(3, 1)), None);
        assert_eq!(gc(1, 1).direction_to(gc(2, 2)), None);
        assert_eq!(gc(1, 1).direction_to(gc(1, 1)), None);
    }

    #[test]
    fn row_major_conversion() {
        let w = Width(5);
        assert_eq!(GridCoordinate::from_row_major_index(0, w), GridCoordinate::new(0, 0));
        assert_eq!(GridCoordinate::from_row_major_index(4, w), GridCoordinate::new(4, 0));
        assert_eq!(GridCoordinate::from_row_major_index(7, w), GridCoordinate::new(2, 1));
        assert_eq!(GridCoordinate::from_row_column_indices(ColumnIndex(2), RowIndex(1)),
                   GridCoordinate::new(2, 1));
    }
}
