use std::fmt;

use crate::cells::GridCoordinate;
use crate::grid::MazeGrid;
use crate::utils;
use crate::utils::FnvHashSet;

pub const WALL: char = '#';
pub const PASSAGE: char = ' ';

pub trait GridDisplay {
    /// The glyph to draw for a cell in place of the plain wall or passage glyph.
    /// None leaves the cell as it is.
    fn render_cell_body(&self, _: GridCoordinate) -> Option<char> {
        None
    }
}

#[derive(Debug)]
pub struct EndpointsDisplay {
    start: GridCoordinate,
    goal: GridCoordinate,
    player: Option<GridCoordinate>,
}

impl EndpointsDisplay {
    pub fn new(start: GridCoordinate,
               goal: GridCoordinate,
               player: Option<GridCoordinate>)
               -> EndpointsDisplay {
        EndpointsDisplay {
            start,
            goal,
            player,
        }
    }
}

impl GridDisplay for EndpointsDisplay {
    fn render_cell_body(&self, coord: GridCoordinate) -> Option<char> {
        if self.player == Some(coord) {
            Some('@')
        } else if coord == self.start {
            Some('S')
        } else if coord == self.goal {
            Some('E')
        } else {
            None
        }
    }
}

#[derive(Debug)]
pub struct PathDisplay {
    on_path_coordinates: FnvHashSet<GridCoordinate>,
}

impl PathDisplay {
    pub fn new(path: &[GridCoordinate]) -> PathDisplay {
        let mut on_path_coordinates = utils::fnv_hashset(path.len());
        on_path_coordinates.extend(path.iter().cloned());
        PathDisplay { on_path_coordinates }
    }
}

impl GridDisplay for PathDisplay {
    fn render_cell_body(&self, coord: GridCoordinate) -> Option<char> {
        if self.on_path_coordinates.contains(&coord) {
            Some('.')
        } else {
            None
        }
    }
}

/// Several displays drawn over each other. The first layer with something to say about a cell wins.
pub struct LayeredDisplay<'a> {
    layers: Vec<&'a dyn GridDisplay>,
}

impl<'a> LayeredDisplay<'a> {
    pub fn new(layers: Vec<&'a dyn GridDisplay>) -> LayeredDisplay<'a> {
        LayeredDisplay { layers }
    }
}

impl<'a> GridDisplay for LayeredDisplay<'a> {
    fn render_cell_body(&self, coord: GridCoordinate) -> Option<char> {
        self.layers.iter().filter_map(|layer| layer.render_cell_body(coord)).next()
    }
}

impl MazeGrid {
    /// Text rendering of the grid, one character per cell and one line per row.
    pub fn render(&self, grid_display: Option<&dyn GridDisplay>) -> String {
        let mut output = String::with_capacity(self.size() + self.height().0);

        for row in self.iter_row() {
            for coord in row {
                let glyph = grid_display
                    .and_then(|displayer| displayer.render_cell_body(coord))
                    .unwrap_or_else(|| if self.is_carved(coord) { PASSAGE } else { WALL });
                output.push(glyph);
            }
            output.push('\n');
        }

        output
    }
}

impl fmt::Display for MazeGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.render(None))
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::units::{Height, Width};

    fn gc(x: u32, y: u32) -> GridCoordinate {
        GridCoordinate::new(x, y)
    }

    fn corridor_grid() -> MazeGrid {
        let mut g = MazeGrid::create(Width(5), Height(5)).unwrap();
        g.carve_endpoint(gc(0, 1));
        g.carve_endpoint(gc(3, 4));
        for &(x, y) in &[(1, 1), (2, 1), (3, 1), (3, 2), (3, 3)] {
            g.carve(gc(x, y));
        }
        g
    }

    #[test]
    fn plain_rendering() {
        let g = corridor_grid();
        assert_eq!(format!("{}", g),
                   "#####\n\
                    \x20\x20\x20\x20#\n\
                    ###\x20#\n\
                    ###\x20#\n\
                    ###\x20#\n");
    }

    #[test]
    fn endpoints_and_player() {
        let g = corridor_grid();
        let display = EndpointsDisplay::new(gc(0, 1), gc(3, 4), Some(gc(2, 1)));
        let text = g.render(Some(&display));
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines[1], "S @ #");
        assert_eq!(lines[4], "###E#");
    }

    #[test]
    fn player_is_drawn_over_the_start() {
        let display = EndpointsDisplay::new(gc(0, 1), gc(3, 4), Some(gc(0, 1)));
        assert_eq!(display.render_cell_body(gc(0, 1)), Some('@'));
        assert_eq!(display.render_cell_body(gc(3, 4)), Some('E'));
        assert_eq!(display.render_cell_body(gc(1, 1)), None);
    }

    #[test]
    fn layered_path_under_endpoints() {
        let g = corridor_grid();
        let path = [gc(0, 1), gc(1, 1), gc(2, 1), gc(3, 1), gc(3, 2), gc(3, 3), gc(3, 4)];
        let endpoints = EndpointsDisplay::new(gc(0, 1), gc(3, 4), None);
        let path_display = PathDisplay::new(&path);
        let layered = LayeredDisplay::new(vec![&endpoints as &dyn GridDisplay,
                                               &path_display as &dyn GridDisplay]);

        let text = g.render(Some(&layered));
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines, vec!["#####", "S...#", "###.#", "###.#", "###E#"]);
    }
}
