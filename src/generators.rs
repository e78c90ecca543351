use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::cells::{Direction, GridCoordinate};
use crate::grid::MazeGrid;
use crate::units::{Height, Width};

/// One of the four outer edges of the grid, where maze endpoints live.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum Border {
    Top,
    Bottom,
    Left,
    Right,
}

impl Border {
    /// Pick an axis (a row edge or a column edge) and a side of it (near or far) with a coin flip each.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Border {
        let row_edge: bool = rng.gen();
        let far_side: bool = rng.gen();
        match (row_edge, far_side) {
            (true, false) => Border::Top,
            (true, true) => Border::Bottom,
            (false, false) => Border::Left,
            (false, true) => Border::Right,
        }
    }

    /// The direction pointing from this border into the maze.
    pub fn inward(self) -> Direction {
        match self {
            Border::Top => Direction::Down,
            Border::Bottom => Direction::Up,
            Border::Left => Direction::Right,
            Border::Right => Direction::Left,
        }
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub struct Endpoint {
    pub coordinate: GridCoordinate,
    pub border: Border,
}

impl Endpoint {
    /// The lattice cell just inside the border from this endpoint.
    pub fn entry_cell(&self) -> GridCoordinate {
        let GridCoordinate { x, y } = self.coordinate;
        match self.border {
            Border::Top => GridCoordinate::new(x, y + 1),
            Border::Bottom => GridCoordinate::new(x, y - 1),
            Border::Left => GridCoordinate::new(x + 1, y),
            Border::Right => GridCoordinate::new(x - 1, y),
        }
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Endpoints {
    pub start: Endpoint,
    pub goal: Endpoint,
}

/// Open up a random cell on the given border as a maze endpoint.
///
/// The cell sits at a random odd offset along the border so that it faces a lattice cell.
pub fn place_endpoint<R: Rng + ?Sized>(grid: &mut MazeGrid, border: Border, rng: &mut R) -> Endpoint {
    let (Width(w), Height(h)) = (grid.width(), grid.height());
    let mut odd_offset = |length: usize| -> u32 { (2 * rng.gen_range(0..(length - 1) / 2) + 1) as u32 };

    let coordinate = match border {
        Border::Top => GridCoordinate::new(odd_offset(w), 0),
        Border::Bottom => GridCoordinate::new(odd_offset(w), (h - 1) as u32),
        Border::Left => GridCoordinate::new(0, odd_offset(h)),
        Border::Right => GridCoordinate::new((w - 1) as u32, odd_offset(h)),
    };
    grid.carve_endpoint(coordinate);

    Endpoint { coordinate, border }
}

/// Place a start on a random border and a goal on any other border.
/// The goal border is redrawn until it differs from the start border.
pub fn place_endpoints<R: Rng + ?Sized>(grid: &mut MazeGrid, rng: &mut R) -> Endpoints {
    let start_border = Border::random(rng);
    let start = place_endpoint(grid, start_border, rng);

    let mut goal_border = Border::random(rng);
    while goal_border == start_border {
        goal_border = Border::random(rng);
    }
    let goal = place_endpoint(grid, goal_border, rng);

    Endpoints { start, goal }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum CarveState {
    Carving,
    Backtracking,
    Done,
}

/// Randomised depth first search carving, run one state transition at a time.
///
/// The `path` stack holds the start endpoint followed by the lattice cells on the current
/// branch. Carving extends the branch to a random uncarved lattice cell two steps away,
/// backtracking pops dead ends until a cell with somewhere left to go is back on top.
/// Once only the start is left every lattice cell has been joined into one spanning tree.
#[derive(Debug, Clone)]
pub struct RecursiveBacktracker {
    path: Vec<GridCoordinate>,
    carve_order: Vec<GridCoordinate>,
    state: CarveState,
}

impl RecursiveBacktracker {
    /// Begin carving from an endpoint already opened with `place_endpoint`.
    /// The first move steps once from the border onto the lattice.
    pub fn new(grid: &mut MazeGrid, start: &Endpoint) -> RecursiveBacktracker {
        assert!(grid.is_carved(start.coordinate), "start endpoint {} has not been placed", start.coordinate);

        let entry = start.entry_cell();
        grid.carve(entry);
        grid.mark_visited(entry);

        RecursiveBacktracker {
            path: vec![start.coordinate, entry],
            carve_order: vec![start.coordinate, entry],
            state: CarveState::Carving,
        }
    }

    #[inline]
    pub fn state(&self) -> CarveState {
        self.state
    }

    #[inline]
    pub fn path(&self) -> &[GridCoordinate] {
        &self.path
    }

    /// Every cell opened so far, in the order it was carved.
    #[inline]
    pub fn carve_order(&self) -> &[GridCoordinate] {
        &self.carve_order
    }

    /// Advance by a single transition and report where that left the carver.
    pub fn step<R: Rng + ?Sized>(&mut self, grid: &mut MazeGrid, rng: &mut R) -> CarveState {
        match self.state {
            CarveState::Carving => {
                if let Some(&current) = self.path.last() {
                    let candidates = grid.neighbours_of_interest(current);
                    if let Some(&next) = candidates.choose(rng) {
                        let wall = grid.wall_between(current, next);
                        for &cell in &[wall, next] {
                            grid.carve(cell);
                            grid.mark_visited(cell);
                            self.carve_order.push(cell);
                        }
                        self.path.push(next);
                    } else {
                        self.state = CarveState::Backtracking;
                    }
                } else {
                    self.state = CarveState::Done;
                }
            }
            CarveState::Backtracking => {
                let _ = self.path.pop();
                self.state = if self.path.len() <= 1 {
                    CarveState::Done
                } else {
                    CarveState::Carving
                };
            }
            CarveState::Done => {}
        }
        self.state
    }

    /// Step until done and hand back the carving order.
    pub fn run<R: Rng + ?Sized>(mut self, grid: &mut MazeGrid, rng: &mut R) -> Vec<GridCoordinate> {
        let mut steps = 0usize;
        while self.step(grid, rng) != CarveState::Done {
            steps += 1;
        }
        debug!("carved {} cells in {} steps on a {}x{} grid",
               self.carve_order.len(),
               steps,
               grid.width().0,
               grid.height().0);
        self.carve_order
    }
}

#[derive(Debug, Clone)]
pub struct MazeGeneration {
    pub endpoints: Endpoints,
    pub carve_order: Vec<GridCoordinate>,
}

/// Apply the recursive backtracker maze generation algorithm to a blank grid.
///
/// Places a start and goal on two different borders, then carves a perfect maze from the start:
/// every lattice cell reachable, no loops, one route between any two open cells.
/// The goal is not carved into from inside; it simply faces a lattice cell, which the
/// exhaustive search is guaranteed to open.
pub fn recursive_backtracker<R: Rng + ?Sized>(grid: &mut MazeGrid, rng: &mut R) -> MazeGeneration {
    debug_assert_eq!(grid.carved_count(), 0, "maze generation needs a blank grid");

    let endpoints = place_endpoints(grid, rng);
    let mut carve_order = RecursiveBacktracker::new(grid, &endpoints.start).run(grid, rng);
    carve_order.push(endpoints.goal.coordinate);

    MazeGeneration {
        endpoints,
        carve_order,
    }
}
