//! Board configuration and construction-time validation.

use std::time::Duration;

use derive_more::{Display, Error};
use gemfall_core::{Orientation, Point};

use crate::token::{TokenType, TokenTypeId};

/// Configuration supplied once at board construction.
///
/// Validated by the engine before any cell is created; a board refuses to
/// initialize with a configuration it cannot honor (see [`ConfigError`])
/// rather than run with undefined per-cell appearance.
///
/// # Examples
///
/// ```
/// use gemfall_game::{AppearanceId, BoardConfig, TokenType, TokenTypeId};
///
/// let types = vec![
///     TokenType::new(TokenTypeId::new(0), AppearanceId::new(0)),
///     TokenType::new(TokenTypeId::new(1), AppearanceId::new(1)),
/// ];
/// let config = BoardConfig::new(8, 10, types);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BoardConfig {
    /// Number of columns. Must be positive.
    pub width: u32,
    /// Number of rows. Must be positive.
    pub height: u32,
    /// World-space size of one cell. Must be a positive finite number.
    pub cell_size: f32,
    /// World position of cell `(0, 0)`'s lower corner.
    pub origin: Point,
    /// Which world plane the board lies on.
    pub orientation: Orientation,
    /// The token categories available for fills and refills. Must be
    /// non-empty.
    pub token_types: Vec<TokenType>,
    /// Duration hint forwarded to the renderer for swap and fall transitions.
    pub move_duration: Duration,
}

impl BoardConfig {
    /// Creates a configuration with the given dimensions and token set.
    ///
    /// Remaining fields default to a flat board of unit cells at the world
    /// origin and a 500 ms move hint.
    #[must_use]
    pub fn new(width: u32, height: u32, token_types: Vec<TokenType>) -> Self {
        Self {
            width,
            height,
            cell_size: 1.0,
            origin: Point::ZERO,
            orientation: Orientation::Flat,
            token_types,
            move_duration: Duration::from_millis(500),
        }
    }

    /// Checks that the configuration can produce a playable board.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint among [`ConfigError::NoTokenTypes`],
    /// [`ConfigError::InvalidDimensions`], and [`ConfigError::InvalidCellSize`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.token_types.is_empty() {
            return Err(ConfigError::NoTokenTypes);
        }
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(ConfigError::InvalidCellSize {
                cell_size: self.cell_size,
            });
        }
        Ok(())
    }
}

/// A fatal configuration error reported once at board construction.
#[derive(Debug, Clone, PartialEq, Display, Error)]
pub enum ConfigError {
    /// The configured token set is empty.
    #[display("no token types configured")]
    NoTokenTypes,
    /// A board dimension is zero.
    #[display("invalid board dimensions {width}x{height}")]
    InvalidDimensions {
        /// The configured width.
        width: u32,
        /// The configured height.
        height: u32,
    },
    /// The cell size is not a positive finite number.
    #[display("invalid cell size {cell_size}")]
    InvalidCellSize {
        /// The configured cell size.
        cell_size: f32,
    },
    /// A prescribed fill referenced a type id that is not in the configured
    /// token set.
    #[display("token type {id} is not in the configured set")]
    UnknownTokenType {
        /// The unknown type id.
        id: TokenTypeId,
    },
}
