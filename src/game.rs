//! The traversal side of the engine: one player walking one maze at a time,
//! with a fresh maze generated each time the goal is reached.
//!
//! `MazeGame` performs no I/O. A host feeds it directions from whatever input it has and reads the
//! grid, endpoints and player position back to draw them.

use log::info;
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;
use std::fmt;

use crate::cells::{Direction, GridCoordinate};
use crate::generators;
use crate::generators::{Border, Endpoints};
use crate::grid::{GridError, MazeGrid};
use crate::grid_dimensions::RectGridDimensions;
use crate::grid_displays::EndpointsDisplay;
use crate::pathing;
use crate::units::{Height, Width};

/// Side length of a maze when none is asked for.
pub const DEFAULT_DIMENSION: usize = 41;

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum MoveResult {
    Moved,
    Blocked,
    LevelComplete,
    /// The move would leave the grid altogether. What that means, e.g. quitting, is up to the caller.
    OutOfBounds,
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct GameConfig {
    pub width: Width,
    pub height: Height,
    /// Fixes every maze of the game. Without one the generator is seeded from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> GameConfig {
        GameConfig {
            width: Width(DEFAULT_DIMENSION),
            height: Height(DEFAULT_DIMENSION),
            seed: None,
        }
    }
}

/// Everything about the level currently being played.
#[derive(Debug, Clone)]
pub struct LevelState {
    level: u32,
    grid: MazeGrid,
    endpoints: Endpoints,
    player: GridCoordinate,
    carve_order: Vec<GridCoordinate>,
}

impl LevelState {
    fn generate(dimensions: RectGridDimensions, level: u32, rng: &mut XorShiftRng) -> LevelState {
        let mut grid = MazeGrid::new(dimensions);
        let generation = generators::recursive_backtracker(&mut grid, rng);

        LevelState {
            level,
            grid,
            endpoints: generation.endpoints,
            player: generation.endpoints.start.coordinate,
            carve_order: generation.carve_order,
        }
    }

    #[inline]
    pub fn level(&self) -> u32 {
        self.level
    }

    #[inline]
    pub fn grid(&self) -> &MazeGrid {
        &self.grid
    }

    #[inline]
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    #[inline]
    pub fn player(&self) -> GridCoordinate {
        self.player
    }

    /// Every cell of this level's maze in the order it was carved, for animating generation.
    #[inline]
    pub fn carve_order(&self) -> &[GridCoordinate] {
        &self.carve_order
    }
}

pub struct MazeGame {
    dimensions: RectGridDimensions,
    rng: XorShiftRng,
    state: LevelState,
}

impl MazeGame {
    /// Start at level 1 on a freshly generated maze.
    pub fn new_game(width: Width, height: Height, seed: Option<u64>) -> Result<MazeGame, GridError> {
        let dimensions = RectGridDimensions::new(width, height)?;
        let mut rng = match seed {
            Some(s) => XorShiftRng::seed_from_u64(s),
            None => XorShiftRng::from_entropy(),
        };
        let state = LevelState::generate(dimensions, 1, &mut rng);

        Ok(MazeGame {
            dimensions,
            rng,
            state,
        })
    }

    pub fn with_config(config: &GameConfig) -> Result<MazeGame, GridError> {
        MazeGame::new_game(config.width, config.height, config.seed)
    }

    /// Try to step the player one cell in `direction`.
    ///
    /// Stepping onto the goal completes the level: a new maze of the same size replaces the current
    /// one and the player is put on its start.
    pub fn attempt_move(&mut self, direction: Direction) -> MoveResult {
        let target = match self.state.player.offset(direction) {
            Some(coord) if self.state.grid.is_in_bounds(coord) => coord,
            _ => return MoveResult::OutOfBounds,
        };

        if target == self.state.endpoints.goal.coordinate {
            self.advance_level();
            MoveResult::LevelComplete
        } else if !self.state.grid.is_carved(target) {
            MoveResult::Blocked
        } else {
            self.state.player = target;
            MoveResult::Moved
        }
    }

    fn advance_level(&mut self) {
        let next_level = self.state.level + 1;
        info!("level {} complete, generating level {}", self.state.level, next_level);
        self.state = LevelState::generate(self.dimensions, next_level, &mut self.rng);
    }

    #[inline]
    pub fn current_level(&self) -> u32 {
        self.state.level
    }

    #[inline]
    pub fn grid_dimensions(&self) -> (Width, Height) {
        (self.dimensions.width(), self.dimensions.height())
    }

    /// Panics if the coordinate is outside the grid.
    #[inline]
    pub fn is_carved(&self, coord: GridCoordinate) -> bool {
        self.state.grid.is_carved(coord)
    }

    #[inline]
    pub fn start(&self) -> GridCoordinate {
        self.state.endpoints.start.coordinate
    }

    #[inline]
    pub fn goal(&self) -> GridCoordinate {
        self.state.endpoints.goal.coordinate
    }

    #[inline]
    pub fn start_border(&self) -> Border {
        self.state.endpoints.start.border
    }

    #[inline]
    pub fn player_position(&self) -> GridCoordinate {
        self.state.player
    }

    #[inline]
    pub fn grid(&self) -> &MazeGrid {
        &self.state.grid
    }

    #[inline]
    pub fn level_state(&self) -> &LevelState {
        &self.state
    }

    /// The route from the player to the goal, both included.
    pub fn solution(&self) -> Option<Vec<GridCoordinate>> {
        pathing::path_between(&self.state.grid, self.state.player, self.goal())
    }

    pub fn distance_to_goal(&self) -> Option<u32> {
        pathing::Distances::new(&self.state.grid, self.state.player)
            .and_then(|distances| distances.distance_from_start_to(self.goal()))
    }

    /// Which way to go next to head for the goal.
    pub fn hint(&self) -> Option<Direction> {
        self.solution()
            .and_then(|path| path.get(1).cloned())
            .and_then(|next| self.state.player.direction_to(next))
    }

    pub fn level_title(&self) -> String {
        format!("Maze Game - Level {}", self.state.level)
    }
}

impl fmt::Display for MazeGame {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let display = EndpointsDisplay::new(self.start(), self.goal(), Some(self.state.player));
        write!(f, "{}", self.state.grid.render(Some(&display)))
    }
}

impl fmt::Debug for MazeGame {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "MazeGame :: level: {}, dimensions: {:?}, start: {}, goal: {}, player: {}",
               self.state.level,
               self.dimensions,
               self.start(),
               self.goal(),
               self.state.player)
    }
}
