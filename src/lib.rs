//! Classic Snake: a headless rules engine plus a macroquad frontend.

pub mod game;
pub mod ticker;

pub use game::{BOARD_SIZE, CELL_SIZE, Cell, Direction, GRID_CELLS, SnakeGame};
pub use ticker::Ticker;
