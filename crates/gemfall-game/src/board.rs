//! The match-3 board: a grid of tokens plus its coordinate mapping.

use gemfall_core::{CellPos, ChangeListener, CoordinateConverter, Grid, Point};

use crate::token::{Token, TokenType, TokenTypeId};

/// The domain state of one play session: a [`Grid`] of [`Token`]s and the
/// [`CoordinateConverter`] that places its cells in world space.
///
/// The board exposes read access broadly but keeps mutation crate-private:
/// the cascade engine is the only writer, and every write goes through the
/// grid's single notifying setter. External observers (renderer, tests, debug
/// overlays) follow along via [`Board::on_change`].
#[derive(Debug)]
pub struct Board {
    grid: Grid<Token>,
    converter: CoordinateConverter,
}

impl Board {
    pub(crate) fn new(width: u32, height: u32, converter: CoordinateConverter) -> Self {
        Self {
            grid: Grid::new(width, height),
            converter,
        }
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.grid.width()
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.grid.height()
    }

    /// Returns the coordinate converter shared with input adapters and debug
    /// overlays.
    #[must_use]
    pub const fn converter(&self) -> &CoordinateConverter {
        &self.converter
    }

    /// Returns `true` if `pos` lies within the board.
    #[must_use]
    pub fn is_valid(&self, pos: CellPos) -> bool {
        self.grid.is_valid(pos)
    }

    /// Returns `true` if the cell holds no token or lies out of range.
    #[must_use]
    pub fn is_empty(&self, pos: CellPos) -> bool {
        self.grid.get(pos).is_none()
    }

    /// Returns the token at `pos`, if any.
    #[must_use]
    pub fn token(&self, pos: CellPos) -> Option<&Token> {
        self.grid.get(pos)
    }

    /// Returns the type of the token at `pos`, if any.
    #[must_use]
    pub fn token_type(&self, pos: CellPos) -> Option<TokenType> {
        self.grid.get(pos).map(|token| token.token_type())
    }

    /// Returns the world position of the cell's center.
    #[must_use]
    pub fn cell_center(&self, pos: CellPos) -> Point {
        self.converter.grid_to_world_center(pos)
    }

    /// Returns the cell containing the given world position, unvalidated.
    #[must_use]
    pub fn world_to_cell(&self, point: Point) -> CellPos {
        self.converter.world_to_grid(point)
    }

    /// Returns the number of occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.grid.occupied_count()
    }

    /// Returns the per-cell token type assignment in row-major order.
    ///
    /// Useful for asserting that a failed swap leaves the board exactly as it
    /// found it.
    #[must_use]
    pub fn type_snapshot(&self) -> Vec<Option<TokenTypeId>> {
        self.grid
            .cells()
            .map(|(_, cell)| cell.map(|token| token.token_type().id()))
            .collect()
    }

    /// Registers a listener invoked with `(pos, new_content)` on every cell
    /// mutation.
    pub fn on_change(&mut self, listener: ChangeListener<Token>) {
        self.grid.on_change(listener);
    }

    /// The single writer path; raises a change notification per call.
    pub(crate) fn set(&mut self, pos: CellPos, value: Option<Token>) -> Option<Token> {
        self.grid.set(pos, value)
    }
}
