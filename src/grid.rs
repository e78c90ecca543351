use bit_set::BitSet;
use std::error::Error;
use std::fmt;

use crate::cells::{CoordinateSmallVec, Direction, GridCoordinate};
use crate::grid_dimensions::RectGridDimensions;
use crate::grid_iterators::{CellIter, RowIter};
use crate::units::{Height, Width};

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum GridError {
    InvalidDimension { width: usize, height: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            GridError::InvalidDimension { width, height } => {
                write!(f,
                       "invalid maze dimensions {}x{}: width and height must both be odd and at least 5",
                       width,
                       height)
            }
        }
    }
}

impl Error for GridError {}

/// A rectangular grid of cells, each either solid wall or carved out as passage.
///
/// Cells also carry a `visited` flag which only the maze generators care about.
/// Every cell starts as wall. Border cells stay wall apart from the maze endpoints,
/// which are opened with `carve_endpoint`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MazeGrid {
    dimensions: RectGridDimensions,
    carved: BitSet,
    visited: BitSet,
}

impl MazeGrid {
    pub fn new(dimensions: RectGridDimensions) -> MazeGrid {
        let cells_count = dimensions.size().0;
        MazeGrid {
            dimensions,
            carved: BitSet::with_capacity(cells_count),
            visited: BitSet::with_capacity(cells_count),
        }
    }

    pub fn create(width: Width, height: Height) -> Result<MazeGrid, GridError> {
        RectGridDimensions::new(width, height).map(MazeGrid::new)
    }

    #[inline]
    pub fn dimensions(&self) -> &RectGridDimensions {
        &self.dimensions
    }

    #[inline]
    pub fn width(&self) -> Width {
        self.dimensions.width()
    }

    #[inline]
    pub fn height(&self) -> Height {
        self.dimensions.height()
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.dimensions.size().0
    }

    #[inline]
    pub fn is_in_bounds(&self, coord: GridCoordinate) -> bool {
        (coord.x as usize) < self.width().0 && (coord.y as usize) < self.height().0
    }

    /// Is the cell on the outermost rows or columns of the grid?
    ///
    /// Panics if the coordinate is outside the grid.
    pub fn is_border(&self, coord: GridCoordinate) -> bool {
        self.assert_in_bounds(coord);
        let (Width(w), Height(h)) = (self.width(), self.height());
        coord.x == 0 || coord.y == 0 || coord.x as usize == w - 1 || coord.y as usize == h - 1
    }

    /// Cells at odd column and odd row offsets are the ones the generators join up with passages.
    #[inline]
    pub fn is_lattice_cell(&self, coord: GridCoordinate) -> bool {
        self.is_in_bounds(coord) && coord.x % 2 == 1 && coord.y % 2 == 1
    }

    /// Panics if the coordinate is outside the grid.
    #[inline]
    pub fn is_carved(&self, coord: GridCoordinate) -> bool {
        self.carved.contains(self.cell_index(coord))
    }

    /// Panics if the coordinate is outside the grid.
    #[inline]
    pub fn is_visited(&self, coord: GridCoordinate) -> bool {
        self.visited.contains(self.cell_index(coord))
    }

    /// Open up a cell as passage. Carving a carved cell does nothing.
    ///
    /// Panics if the coordinate is outside the grid or on its border.
    pub fn carve(&mut self, coord: GridCoordinate) {
        assert!(!self.is_border(coord),
                "border cell {} can only be opened as a maze endpoint",
                coord);
        let index = self.cell_index(coord);
        let _ = self.carved.insert(index);
    }

    /// Open up a border cell as a way into or out of the maze.
    ///
    /// Panics if the coordinate is not on the grid's border.
    pub fn carve_endpoint(&mut self, coord: GridCoordinate) {
        assert!(self.is_border(coord), "endpoint {} is not on the grid border", coord);
        let index = self.cell_index(coord);
        let _ = self.carved.insert(index);
        let _ = self.visited.insert(index);
    }

    pub fn mark_visited(&mut self, coord: GridCoordinate) {
        let index = self.cell_index(coord);
        let _ = self.visited.insert(index);
    }

    /// The cells two steps away in each direction that are inside the border and not carved yet.
    /// Stepping over the wall cell in between keeps every carve a cell/wall/cell triple.
    pub fn neighbours_of_interest(&self, coord: GridCoordinate) -> CoordinateSmallVec {
        self.assert_in_bounds(coord);
        Direction::ALL
            .iter()
            .filter_map(|dir| coord.offset(*dir).and_then(|wall| wall.offset(*dir)))
            .filter(|candidate| {
                self.is_in_bounds(*candidate) && !self.is_border(*candidate) &&
                !self.is_carved(*candidate)
            })
            .collect()
    }

    /// The wall cell sitting between two cells that are two steps apart in a straight line.
    pub fn wall_between(&self, a: GridCoordinate, b: GridCoordinate) -> GridCoordinate {
        debug_assert!((a.x == b.x && (a.y as i64 - b.y as i64).abs() == 2) ||
                      (a.y == b.y && (a.x as i64 - b.x as i64).abs() == 2),
                      "{} and {} are not two steps apart",
                      a,
                      b);
        GridCoordinate::new((a.x + b.x) / 2, (a.y + b.y) / 2)
    }

    /// Carved cells directly Up, Down, Left or Right of a cell, i.e. where a passage leads.
    pub fn links(&self, coord: GridCoordinate) -> CoordinateSmallVec {
        self.assert_in_bounds(coord);
        Direction::ALL
            .iter()
            .filter_map(|dir| coord.offset(*dir))
            .filter(|adjacent| self.is_in_bounds(*adjacent) && self.is_carved(*adjacent))
            .collect()
    }

    #[inline]
    pub fn carved_count(&self) -> usize {
        self.carved.len()
    }

    #[inline]
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Carved cells in row major order.
    pub fn iter_carved<'a>(&'a self) -> impl Iterator<Item = GridCoordinate> + 'a {
        let width = self.width();
        self.carved.iter().map(move |index| GridCoordinate::from_row_major_index(index, width))
    }

    #[inline]
    pub fn iter(&self) -> CellIter {
        CellIter::new(&self.dimensions)
    }

    #[inline]
    pub fn iter_row(&self) -> RowIter {
        RowIter::new(&self.dimensions)
    }

    /// Convert a grid coordinate to a one dimensional index in the range 0...grid.size().
    /// Returns None if the grid coordinate is invalid.
    #[inline]
    pub fn grid_coordinate_to_index(&self, coord: GridCoordinate) -> Option<usize> {
        if self.is_in_bounds(coord) {
            Some(coord.y as usize * self.width().0 + coord.x as usize)
        } else {
            None
        }
    }

    fn cell_index(&self, coord: GridCoordinate) -> usize {
        match self.grid_coordinate_to_index(coord) {
            Some(index) => index,
            None => panic!("{} is outside the {}x{} grid", coord, self.width().0, self.height().0),
        }
    }

    fn assert_in_bounds(&self, coord: GridCoordinate) {
        let _ = self.cell_index(coord);
    }
}
