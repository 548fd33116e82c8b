//! Bidirectional mapping between grid cells and continuous space.

use crate::{point::Point, position::CellPos};

/// Selects which two world axes a board's grid coordinates map onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// The board stands on the x/y plane (typical 2D game). The face
    /// direction is +z.
    Flat,
    /// The board lies on the x/z ground plane (board on the floor of a 3D
    /// scene). The face direction is -y.
    Ground,
}

/// Maps grid cell indices to world positions and back.
///
/// A converter is parameterized by a positive cell size, a world-space origin
/// (the lower corner of cell `(0, 0)`), and an [`Orientation`]. It is
/// stateless and immutable after construction, and is shared read-only by the
/// grid, the input adapter, and any debug overlay.
///
/// Conversions perform no bounds checking: [`world_to_grid`] can return
/// coordinates outside any particular board (including negative ones), and
/// [`grid_to_world`] accepts indices one past the board edge so that callers
/// can compute outer cell borders. Callers validate results against their
/// grid's extents separately.
///
/// # Round trip
///
/// For every cell `p`, `world_to_grid(grid_to_world_center(p)) == p`.
///
/// # Examples
///
/// ```
/// use gemfall_core::{CellPos, CoordinateConverter, Orientation, Point};
///
/// let converter = CoordinateConverter::new(2.0, Point::new(1.0, 1.0, 0.0), Orientation::Flat);
/// let pos = CellPos::new(3, 0);
///
/// assert_eq!(converter.grid_to_world(pos), Point::new(7.0, 1.0, 0.0));
/// assert_eq!(converter.grid_to_world_center(pos), Point::new(8.0, 2.0, 0.0));
/// assert_eq!(converter.world_to_grid(Point::new(8.9, 2.9, 0.0)), pos);
/// ```
///
/// [`world_to_grid`]: CoordinateConverter::world_to_grid
/// [`grid_to_world`]: CoordinateConverter::grid_to_world
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateConverter {
    cell_size: f32,
    origin: Point,
    orientation: Orientation,
}

impl CoordinateConverter {
    /// Creates a new converter.
    ///
    /// # Panics
    ///
    /// Panics if `cell_size` is not a positive finite number.
    #[must_use]
    pub fn new(cell_size: f32, origin: Point, orientation: Orientation) -> Self {
        assert!(
            cell_size.is_finite() && cell_size > 0.0,
            "cell size must be a positive finite number, got {cell_size}"
        );
        Self {
            cell_size,
            origin,
            orientation,
        }
    }

    /// Returns the world-space size of one cell.
    #[must_use]
    pub const fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Returns the world-space position of cell `(0, 0)`'s lower corner.
    #[must_use]
    pub const fn origin(&self) -> Point {
        self.origin
    }

    /// Returns the plane orientation.
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns the world position of the cell's lower corner.
    #[must_use]
    pub fn grid_to_world(&self, pos: CellPos) -> Point {
        let x = pos.x as f32 * self.cell_size;
        let y = pos.y as f32 * self.cell_size;
        self.origin + self.onto_plane(x, y)
    }

    /// Returns the world position of the cell's center.
    ///
    /// This is the position visuals are placed at and moved to.
    #[must_use]
    pub fn grid_to_world_center(&self, pos: CellPos) -> Point {
        let half = self.cell_size * 0.5;
        self.grid_to_world(pos) + self.onto_plane(half, half)
    }

    /// Returns the cell containing the given world position.
    ///
    /// The result is `floor((point - origin) / cell_size)` projected onto the
    /// active axes. No clamping is applied; the caller must validate the
    /// result against the grid's extents.
    ///
    /// # Examples
    ///
    /// ```
    /// use gemfall_core::{CellPos, CoordinateConverter, Orientation, Point};
    ///
    /// let converter = CoordinateConverter::new(1.0, Point::ZERO, Orientation::Flat);
    /// assert_eq!(converter.world_to_grid(Point::new(-0.5, 0.5, 0.0)), CellPos::new(-1, 0));
    /// ```
    #[must_use]
    pub fn world_to_grid(&self, point: Point) -> CellPos {
        let local = (point - self.origin) / self.cell_size;
        let (gx, gy) = match self.orientation {
            Orientation::Flat => (local.x, local.y),
            Orientation::Ground => (local.x, local.z),
        };
        CellPos::new(gx.floor() as i32, gy.floor() as i32)
    }

    /// Returns the outward face direction of the board plane.
    ///
    /// Only consumed by external debug/label collaborators for orienting
    /// world-space text; gameplay logic never reads it.
    #[must_use]
    pub const fn forward(&self) -> Point {
        match self.orientation {
            Orientation::Flat => Point::new(0.0, 0.0, 1.0),
            Orientation::Ground => Point::new(0.0, -1.0, 0.0),
        }
    }

    /// Lifts plane-local `(x, y)` offsets onto the active world axes.
    const fn onto_plane(&self, x: f32, y: f32) -> Point {
        match self.orientation {
            Orientation::Flat => Point::new(x, y, 0.0),
            Orientation::Ground => Point::new(x, 0.0, y),
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_flat_corner_and_center() {
        let converter = CoordinateConverter::new(1.0, Point::ZERO, Orientation::Flat);
        assert_eq!(
            converter.grid_to_world(CellPos::new(2, 3)),
            Point::new(2.0, 3.0, 0.0)
        );
        assert_eq!(
            converter.grid_to_world_center(CellPos::new(2, 3)),
            Point::new(2.5, 3.5, 0.0)
        );
    }

    #[test]
    fn test_ground_maps_grid_y_to_world_z() {
        let converter = CoordinateConverter::new(2.0, Point::new(1.0, 5.0, 1.0), Orientation::Ground);
        assert_eq!(
            converter.grid_to_world(CellPos::new(1, 2)),
            Point::new(3.0, 5.0, 5.0)
        );
        assert_eq!(
            converter.grid_to_world_center(CellPos::new(1, 2)),
            Point::new(4.0, 5.0, 6.0)
        );
        assert_eq!(
            converter.world_to_grid(Point::new(4.0, 0.0, 6.0)),
            CellPos::new(1, 2)
        );
    }

    #[test]
    fn test_world_to_grid_floors_negative_positions() {
        let converter = CoordinateConverter::new(1.0, Point::ZERO, Orientation::Flat);
        assert_eq!(
            converter.world_to_grid(Point::new(-0.1, -1.5, 0.0)),
            CellPos::new(-1, -2)
        );
    }

    #[test]
    fn test_face_directions_differ_by_orientation() {
        let flat = CoordinateConverter::new(1.0, Point::ZERO, Orientation::Flat);
        let ground = CoordinateConverter::new(1.0, Point::ZERO, Orientation::Ground);
        assert_eq!(flat.forward(), Point::new(0.0, 0.0, 1.0));
        assert_eq!(ground.forward(), Point::new(0.0, -1.0, 0.0));
    }

    #[test]
    #[should_panic(expected = "cell size must be")]
    fn test_rejects_zero_cell_size() {
        let _ = CoordinateConverter::new(0.0, Point::ZERO, Orientation::Flat);
    }

    proptest! {
        #[test]
        fn test_round_trip_flat(
            x in 0..32i32,
            y in 0..32i32,
            cell_size in 0.25f32..8.0,
            ox in -50.0f32..50.0,
            oy in -50.0f32..50.0,
        ) {
            let converter = CoordinateConverter::new(
                cell_size,
                Point::new(ox, oy, 0.0),
                Orientation::Flat,
            );
            let pos = CellPos::new(x, y);
            prop_assert_eq!(converter.world_to_grid(converter.grid_to_world_center(pos)), pos);
        }

        #[test]
        fn test_round_trip_ground(
            x in 0..32i32,
            y in 0..32i32,
            cell_size in 0.25f32..8.0,
            ox in -50.0f32..50.0,
            oz in -50.0f32..50.0,
        ) {
            let converter = CoordinateConverter::new(
                cell_size,
                Point::new(ox, 0.0, oz),
                Orientation::Ground,
            );
            let pos = CellPos::new(x, y);
            prop_assert_eq!(converter.world_to_grid(converter.grid_to_world_center(pos)), pos);
        }
    }
}
