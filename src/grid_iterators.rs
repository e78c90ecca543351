use std::fmt;

use crate::cells::GridCoordinate;
use crate::grid_dimensions::RectGridDimensions;
use crate::units::{ColumnIndex, Height, RowIndex, Width};

#[derive(Clone)]
pub struct CellIter {
    width: Width,
    current_cell_number: usize,
    cells_count: usize,
}

impl CellIter {
    pub fn new(dimensions: &RectGridDimensions) -> CellIter {
        CellIter {
            width: dimensions.width(),
            current_cell_number: 0,
            cells_count: dimensions.size().0,
        }
    }
}

impl fmt::Debug for CellIter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "CellIter :: current_cell_number: {:?}, cells_count: {:?}",
               self.current_cell_number,
               self.cells_count)
    }
}

impl ExactSizeIterator for CellIter {} // default impl using size_hint()
impl Iterator for CellIter {
    type Item = GridCoordinate;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_cell_number < self.cells_count {
            let coord = GridCoordinate::from_row_major_index(self.current_cell_number, self.width);
            self.current_cell_number += 1;
            Some(coord)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower_bound = self.cells_count - self.current_cell_number;
        let upper_bound = lower_bound;
        (lower_bound, Some(upper_bound))
    }
}

/// Iterates over the grid one whole row at a time, top row first.
#[derive(Debug, Copy, Clone)]
pub struct RowIter {
    current_index: usize,
    row_length: Width,
    rows_count: Height,
}

impl RowIter {
    pub fn new(dimensions: &RectGridDimensions) -> RowIter {
        RowIter {
            current_index: 0,
            row_length: dimensions.width(),
            rows_count: dimensions.height(),
        }
    }
}

impl ExactSizeIterator for RowIter {} // default impl using size_hint()
impl Iterator for RowIter {
    type Item = Vec<GridCoordinate>;
    fn next(&mut self) -> Option<Self::Item> {
        let Height(count) = self.rows_count;
        if self.current_index < count {
            let Width(length) = self.row_length;
            let coords = (0..length)
                .map(|i: usize| {
                    GridCoordinate::from_row_column_indices(ColumnIndex(i),
                                                            RowIndex(self.current_index))
                })
                .collect();
            self.current_index += 1;
            Some(coords)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower_bound = self.rows_count.0 - self.current_index;
        let upper_bound = lower_bound;
        (lower_bound, Some(upper_bound))
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    fn dims() -> RectGridDimensions {
        RectGridDimensions::new(Width(5), Height(7)).unwrap()
    }

    #[test]
    fn cell_iter_is_row_major() {
        let cells = CellIter::new(&dims()).collect::<Vec<_>>();
        assert_eq!(cells.len(), 35);
        assert_eq!(cells[0], GridCoordinate::new(0, 0));
        assert_eq!(cells[4], GridCoordinate::new(4, 0));
        assert_eq!(cells[5], GridCoordinate::new(0, 1));
        assert_eq!(cells[34], GridCoordinate::new(4, 6));
    }

    #[test]
    fn cell_iter_size_hint_shrinks() {
        let mut iter = CellIter::new(&dims());
        assert_eq!(iter.len(), 35);
        let _ = iter.next();
        assert_eq!(iter.len(), 34);
    }

    #[test]
    fn row_iter() {
        let rows = RowIter::new(&dims()).collect::<Vec<_>>();
        assert_eq!(rows.len(), 7);
        assert!(rows.iter().all(|row| row.len() == 5));
        assert_eq!(rows[2],
                   (0..5).map(|x| GridCoordinate::new(x, 2)).collect::<Vec<_>>());
    }
}
