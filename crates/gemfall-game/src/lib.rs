//! The match-3 resolution engine.
//!
//! This crate turns a player's swap action into a deterministic cascade over
//! a board of typed tokens: swap, match detection, removal, gravity
//! compaction, and refill, run to a stable board. Rendering, input hardware,
//! and effects live outside the crate behind the [`Visuals`] boundary trait;
//! the engine drives them in lock-step with its own state.
//!
//! # Overview
//!
//! - [`token`]: Token identity ([`TokenType`], [`TokenTypeId`]) and the
//!   opaque handles shared with the renderer
//! - [`board`]: [`Board`], the grid of tokens plus its coordinate mapping
//! - [`matcher`]: [`find_matches`], the pure row/column run detector
//! - [`engine`]: [`CascadeEngine`], the selection state machine and the
//!   suspendable resolution sequence
//! - [`visuals`]: The [`Visuals`] renderer boundary and the [`HeadlessVisuals`]
//!   stand-in for tests and simulation
//! - [`config`]: [`BoardConfig`] and fatal construction errors
//!
//! # Examples
//!
//! ```
//! use futures::executor::block_on;
//! use gemfall_core::CellPos;
//! use gemfall_game::{
//!     AppearanceId, BoardConfig, CascadeEngine, HeadlessVisuals, TokenType, TokenTypeId,
//! };
//! use rand::SeedableRng as _;
//! use rand_pcg::Pcg64;
//!
//! let types = (0..5)
//!     .map(|i| TokenType::new(TokenTypeId::new(i), AppearanceId::new(u32::from(i))))
//!     .collect();
//! let config = BoardConfig::new(8, 10, types);
//! let mut engine = CascadeEngine::new(config, HeadlessVisuals::new(), Pcg64::seed_from_u64(7))
//!     .expect("valid configuration");
//!
//! // One select picks a cell; a second select on an adjacent cell swaps and
//! // resolves.
//! let first = block_on(engine.select_cell(CellPos::new(2, 2)));
//! assert!(first.is_selected());
//! let second = block_on(engine.select_cell(CellPos::new(2, 3)));
//! assert!(second.is_resolved());
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod matcher;
pub mod token;
pub mod visuals;

// Re-export commonly used types
pub use self::{
    board::Board,
    config::{BoardConfig, ConfigError},
    engine::{CascadeEngine, ResolutionOutcome, SelectOutcome},
    matcher::find_matches,
    token::{AppearanceId, Token, TokenType, TokenTypeId, VisualId},
    visuals::{HeadlessVisuals, Visuals},
};
