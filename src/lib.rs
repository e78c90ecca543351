//! **labyrinth** generates perfect mazes on odd sized wall grids and runs a level by level maze
//! walking game on top of them.
//!
//! The library does no input handling or drawing of its own beyond a plain text rendering.
//! A host program drives `game::MazeGame` with directions and reads back what to show.

pub mod cells;
pub mod game;
pub mod generators;
pub mod grid;
pub mod grid_dimensions;
pub mod grid_displays;
pub mod grid_iterators;
pub mod pathing;
pub mod units;
mod utils;
