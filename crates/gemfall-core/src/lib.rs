//! Core data structures for match-3 style grid games.
//!
//! This crate provides the foundational, renderer-agnostic building blocks
//! used by the cascade engine:
//!
//! 1. **Geometry** - Continuous-space and grid-space coordinates
//!    - [`point`]: A point in continuous (world) space
//!    - [`position`]: A discrete grid cell coordinate
//! 2. **Coordinate mapping** - Bidirectional grid/world conversion
//!    - [`converter`]: [`CoordinateConverter`] maps cell indices to world
//!      positions and back, for flat (x/y) and ground-plane (x/z) boards
//! 3. **Storage** - The observed grid container
//!    - [`grid`]: [`Grid`], a fixed-size 2D container of optional values
//!      with bounds-safe access and change notifications
//!
//! # Examples
//!
//! ```
//! use gemfall_core::{CellPos, CoordinateConverter, Grid, Orientation, Point};
//!
//! let converter = CoordinateConverter::new(1.0, Point::ZERO, Orientation::Flat);
//! let mut grid: Grid<char> = Grid::new(8, 10);
//!
//! let pos = CellPos::new(3, 4);
//! grid.set(pos, Some('a'));
//!
//! assert_eq!(grid.get(pos), Some(&'a'));
//! assert_eq!(converter.world_to_grid(converter.grid_to_world_center(pos)), pos);
//! ```

pub mod converter;
pub mod grid;
pub mod point;
pub mod position;

// Re-export commonly used types
pub use self::{
    converter::{CoordinateConverter, Orientation},
    grid::{ChangeListener, Grid},
    point::Point,
    position::CellPos,
};
