use std::u32;

use crate::grid::GridError;
use crate::units::{EdgesCount, Height, NodesCount, Width};

/// The smallest side length that still leaves more than one carve-able cell.
pub const MIN_DIMENSION: usize = 5;

/// Validated width and height of a maze grid.
///
/// Both sides are odd and at least `MIN_DIMENSION`, so the border and every other row and column
/// can stay solid while the odd offset cells form the carve-able lattice.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RectGridDimensions {
    width: Width,
    height: Height,
}

impl RectGridDimensions {
    pub fn new(width: Width, height: Height) -> Result<RectGridDimensions, GridError> {
        let invalid = GridError::InvalidDimension {
            width: width.0,
            height: height.0,
        };

        if !is_valid_side(width.0) || !is_valid_side(height.0) {
            return Err(invalid);
        }
        if width.0.checked_mul(height.0).is_none() {
            return Err(invalid);
        }

        Ok(RectGridDimensions { width, height })
    }

    #[inline(always)]
    pub fn width(&self) -> Width {
        self.width
    }

    #[inline(always)]
    pub fn height(&self) -> Height {
        self.height
    }

    #[inline(always)]
    pub fn size(&self) -> NodesCount {
        NodesCount(self.width.0 * self.height.0)
    }

    /// Number of cells at odd column and odd row offsets.
    #[inline]
    pub fn lattice_cells_count(&self) -> usize {
        ((self.width.0 - 1) / 2) * ((self.height.0 - 1) / 2)
    }

    /// Exact node and edge counts of the passage graph of a finished maze: every lattice cell,
    /// one wall opening fewer than lattice cells, plus the two endpoints on the border.
    pub fn graph_size(&self) -> (NodesCount, EdgesCount) {
        let lattice = self.lattice_cells_count();
        let nodes = 2 * lattice + 1;
        (NodesCount(nodes), EdgesCount(nodes - 1))
    }
}

fn is_valid_side(length: usize) -> bool {
    length >= MIN_DIMENSION && length % 2 == 1 && length <= u32::MAX as usize
}

#[cfg(test)]
mod tests {

    use super::*;

    fn dims(w: usize, h: usize) -> Result<RectGridDimensions, GridError> {
        RectGridDimensions::new(Width(w), Height(h))
    }

    #[test]
    fn odd_sides_of_at_least_five_are_accepted() {
        assert!(dims(5, 5).is_ok());
        assert!(dims(41, 41).is_ok());
        assert!(dims(5, 101).is_ok());
    }

    #[test]
    fn even_or_small_sides_are_rejected() {
        for &(w, h) in &[(4, 5), (5, 4), (6, 6), (3, 5), (5, 3), (1, 1), (2, 9), (0, 0)] {
            assert_eq!(dims(w, h),
                       Err(GridError::InvalidDimension { width: w, height: h }));
        }
    }

    #[test]
    fn lattice_and_graph_sizes() {
        let d = dims(5, 5).unwrap();
        assert_eq!(d.size(), NodesCount(25));
        assert_eq!(d.lattice_cells_count(), 4);
        assert_eq!(d.graph_size(), (NodesCount(9), EdgesCount(8)));

        let d = dims(7, 11).unwrap();
        assert_eq!(d.lattice_cells_count(), 3 * 5);
    }
}
