//! The cascade engine: selection handling and the resolution sequence.

use std::{collections::BTreeSet, fmt, time::Duration};

use derive_more::IsVariant;
use gemfall_core::{CellPos, ChangeListener, CoordinateConverter, Point};
use log::{debug, trace};
use rand::{Rng, RngExt};

use crate::{
    board::Board,
    config::{BoardConfig, ConfigError},
    matcher::find_matches,
    token::{Token, TokenType, TokenTypeId},
    visuals::Visuals,
};

/// What a select event did to the engine.
///
/// Every rejection is a silent no-op at the board level; the outcome exists
/// so that callers and tests can observe what happened without the engine
/// surfacing user-input edge cases as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum SelectOutcome {
    /// The event was dropped: out of bounds, an empty cell, or a resolution
    /// sequence is in flight.
    Ignored,
    /// The cell became the current selection.
    Selected(CellPos),
    /// The selection was cleared, either by re-selecting the same cell or by
    /// selecting a non-adjacent one.
    Deselected,
    /// Two adjacent cells were swapped and the resolution sequence ran to
    /// completion.
    Resolved(ResolutionOutcome),
}

/// How a resolution sequence ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum ResolutionOutcome {
    /// The swap produced no match and was reverted; the board is observably
    /// unchanged.
    Reverted,
    /// The swap matched: cells were cleared, gravity compacted the columns,
    /// and empty cells were refilled.
    Cleared {
        /// Number of matched cells removed.
        removed: usize,
        /// Number of new tokens created by the refill.
        refilled: usize,
    },
}

/// The match-3 cascade engine.
///
/// Owns the [`Board`], the current selection, the injected random source, and
/// the injected [`Visuals`] collaborator. One select event drives the state
/// machine: first select picks a cell, second select on an adjacent cell
/// swaps and runs the resolution sequence
/// (swap → match → remove → gravity → refill) to completion.
///
/// # Suspension model
///
/// The resolution sequence is a linear `async` flow; its awaits are the
/// renderer's move futures, so each animated step finishes before the next
/// begins. Everything runs on the single logical thread that polls the
/// returned future. There are no locks; safety rests on never re-entering an
/// in-flight sequence, and the engine enforces that gate itself:
/// select events arriving while a resolution is in flight return
/// [`SelectOutcome::Ignored`], and the exclusive `&mut self` borrow makes a
/// second concurrent sequence unrepresentable. There is no cancellation;
/// dropping an unfinished resolution future leaves the engine latched in the
/// resolving state with the board mid-cascade.
///
/// # Examples
///
/// ```
/// use futures::executor::block_on;
/// use gemfall_core::CellPos;
/// use gemfall_game::{
///     AppearanceId, BoardConfig, CascadeEngine, HeadlessVisuals, TokenType, TokenTypeId,
/// };
/// use rand::SeedableRng as _;
/// use rand_pcg::Pcg64;
///
/// let types = (0..5)
///     .map(|i| TokenType::new(TokenTypeId::new(i), AppearanceId::new(u32::from(i))))
///     .collect();
/// let config = BoardConfig::new(8, 10, types);
/// let mut engine = CascadeEngine::new(config, HeadlessVisuals::new(), Pcg64::seed_from_u64(7))
///     .expect("valid configuration");
///
/// assert_eq!(engine.board().occupied_count(), 80);
/// let outcome = block_on(engine.select_cell(CellPos::new(3, 3)));
/// assert!(outcome.is_selected());
/// ```
pub struct CascadeEngine<V, R> {
    board: Board,
    token_types: Vec<TokenType>,
    visuals: V,
    rng: R,
    selection: Option<CellPos>,
    resolving: bool,
    move_duration: Duration,
}

impl<V: Visuals, R: Rng> CascadeEngine<V, R> {
    /// Builds an engine and fills every cell with a randomly typed token.
    ///
    /// Each created token is announced to `visuals` at its cell center.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration cannot produce a
    /// playable board; nothing is created in that case.
    pub fn new(config: BoardConfig, visuals: V, rng: R) -> Result<Self, ConfigError> {
        let mut engine = Self::empty(config, visuals, rng)?;
        for pos in engine.all_positions() {
            let token_type = engine.random_type();
            engine.spawn_token(pos, token_type);
        }
        Ok(engine)
    }

    /// Builds an engine with a caller-prescribed layout.
    ///
    /// `fill` is called once per cell in column-major, low-to-high order and
    /// returns the type id to place there, or `None` to leave the cell empty.
    /// Useful for deterministic tests and scripted board setups.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for an invalid configuration, or
    /// [`ConfigError::UnknownTokenType`] if `fill` names an id outside the
    /// configured token set.
    pub fn with_fill(
        config: BoardConfig,
        visuals: V,
        rng: R,
        mut fill: impl FnMut(CellPos) -> Option<TokenTypeId>,
    ) -> Result<Self, ConfigError> {
        let mut engine = Self::empty(config, visuals, rng)?;
        for pos in engine.all_positions() {
            let Some(id) = fill(pos) else { continue };
            let Some(&token_type) = engine.token_types.iter().find(|t| t.id() == id) else {
                return Err(ConfigError::UnknownTokenType { id });
            };
            engine.spawn_token(pos, token_type);
        }
        Ok(engine)
    }

    fn empty(config: BoardConfig, visuals: V, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let converter =
            CoordinateConverter::new(config.cell_size, config.origin, config.orientation);
        Ok(Self {
            board: Board::new(config.width, config.height, converter),
            token_types: config.token_types,
            visuals,
            rng,
            selection: None,
            resolving: false,
            move_duration: config.move_duration,
        })
    }

    /// Returns the board.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the currently selected cell, if any.
    #[must_use]
    pub const fn selection(&self) -> Option<CellPos> {
        self.selection
    }

    /// Returns `true` while a resolution sequence is in flight.
    #[must_use]
    pub const fn is_resolving(&self) -> bool {
        self.resolving
    }

    /// Returns the visuals collaborator.
    #[must_use]
    pub const fn visuals(&self) -> &V {
        &self.visuals
    }

    /// Registers a listener invoked with `(pos, new_content)` on every board
    /// mutation.
    pub fn on_cell_change(&mut self, listener: ChangeListener<Token>) {
        self.board.on_change(listener);
    }

    /// Handles a select event given in world coordinates, as produced by an
    /// input adapter from raw pointer or touch positions.
    pub async fn select_world(&mut self, point: Point) -> SelectOutcome {
        let pos = self.board.world_to_cell(point);
        self.select_cell(pos).await
    }

    /// Handles a select event on a grid cell.
    ///
    /// State machine, in order:
    ///
    /// 1. While resolving, or for an out-of-range or empty cell: no-op.
    /// 2. Re-selecting the selected cell clears the selection.
    /// 3. With no selection, the cell becomes selected.
    /// 4. A cell not 4-directionally adjacent to the selection deselects.
    /// 5. An adjacent cell triggers the resolution sequence; on completion
    ///    the selection is cleared.
    pub async fn select_cell(&mut self, pos: CellPos) -> SelectOutcome {
        if self.resolving {
            // Input while a sequence is in flight must never start a second
            // one; two interleaved cascades would corrupt the selection and
            // the board.
            return SelectOutcome::Ignored;
        }
        if !self.board.is_valid(pos) || self.board.is_empty(pos) {
            return SelectOutcome::Ignored;
        }
        match self.selection {
            Some(selected) if selected == pos => {
                self.selection = None;
                SelectOutcome::Deselected
            }
            Some(selected) if !selected.is_adjacent(pos) => {
                self.selection = None;
                SelectOutcome::Deselected
            }
            Some(selected) => {
                self.resolving = true;
                let outcome = self.resolve(selected, pos).await;
                self.selection = None;
                self.resolving = false;
                SelectOutcome::Resolved(outcome)
            }
            None => {
                self.selection = Some(pos);
                SelectOutcome::Selected(pos)
            }
        }
    }

    /// Runs one full resolution sequence for a swap of `a` and `b`.
    ///
    /// Match detection is not re-run after the refill; one swap resolves one
    /// explode → fall → refill pass, and incidental runs created by refilled
    /// tokens wait for the next swap.
    async fn resolve(&mut self, a: CellPos, b: CellPos) -> ResolutionOutcome {
        self.swap(a, b).await;

        let matches = find_matches(&self.board);
        if matches.is_empty() {
            debug!("swap {a} <-> {b} matched nothing, reverting");
            self.swap(a, b).await;
            return ResolutionOutcome::Reverted;
        }

        debug!("swap {a} <-> {b} matched {} cells", matches.len());
        let removed = matches.len();
        self.explode(&matches);
        self.apply_gravity().await;
        let refilled = self.refill();
        ResolutionOutcome::Cleared { removed, refilled }
    }

    /// Swaps the tokens at `a` and `b` logically and visually.
    ///
    /// The grid mutation is a single pair of `set` calls; both visuals are
    /// then asked to travel to each other's cell center. Calling this twice
    /// with the same arguments restores the original state, which is exactly
    /// how a failed swap reverts.
    ///
    /// # Panics
    ///
    /// Panics if either cell is empty; callers only swap validated,
    /// occupied cells.
    async fn swap(&mut self, a: CellPos, b: CellPos) {
        let (Some(&token_a), Some(&token_b)) = (self.board.token(a), self.board.token(b)) else {
            panic!("swap requires two occupied cells, got {a} and {b}");
        };
        self.board.set(a, Some(token_b));
        self.board.set(b, Some(token_a));

        let center_a = self.board.cell_center(a);
        let center_b = self.board.cell_center(b);
        self.visuals
            .move_visual(token_a.visual(), center_b, self.move_duration)
            .await;
        self.visuals
            .move_visual(token_b.visual(), center_a, self.move_duration)
            .await;
    }

    /// Clears every matched cell and releases its visual.
    ///
    /// # Panics
    ///
    /// Panics if a matched cell is empty; the match set was computed from
    /// occupied cells and nothing may mutate the board in between.
    fn explode(&mut self, matches: &BTreeSet<CellPos>) {
        for &pos in matches {
            let Some(token) = self.board.set(pos, None) else {
                panic!("matched cell {pos} is empty");
            };
            let center = self.board.cell_center(pos);
            self.visuals.play_removal_effect(center);
            self.visuals.destroy_visual(token.visual());
        }
    }

    /// Lets tokens fall until every column is compact.
    ///
    /// Each full-grid pass moves, for every empty cell from the bottom of a
    /// column upward, the nearest token above it down into the gap. Passes
    /// repeat until one completes without movement; every productive pass
    /// moves at least one token strictly downward, so the loop terminates
    /// within the board height.
    async fn apply_gravity(&mut self) {
        let width = self.board.width() as i32;
        let height = self.board.height() as i32;
        let mut passes = 0u32;
        loop {
            let mut moved = false;
            for x in 0..width {
                for y in 0..height {
                    let pos = CellPos::new(x, y);
                    if !self.board.is_empty(pos) {
                        continue;
                    }
                    let Some(source) = ((y + 1)..height)
                        .map(|above| CellPos::new(x, above))
                        .find(|&p| !self.board.is_empty(p))
                    else {
                        continue;
                    };
                    let Some(token) = self.board.set(source, None) else {
                        panic!("gravity source {source} vanished");
                    };
                    self.board.set(pos, Some(token));
                    trace!("gravity: {source} falls to {pos}");
                    self.visuals
                        .move_visual(token.visual(), self.board.cell_center(pos), self.move_duration)
                        .await;
                    moved = true;
                }
            }
            passes += 1;
            if !moved {
                break;
            }
        }
        debug!("gravity stable after {passes} pass(es)");
    }

    /// Creates a randomly typed token in every remaining empty cell, in
    /// column-major low-to-high order.
    fn refill(&mut self) -> usize {
        let mut refilled = 0;
        for pos in self.all_positions() {
            if self.board.is_empty(pos) {
                let token_type = self.random_type();
                self.spawn_token(pos, token_type);
                refilled += 1;
            }
        }
        debug!("refilled {refilled} cells");
        refilled
    }

    /// Creates a token and its visual at the given cell.
    fn spawn_token(&mut self, pos: CellPos, token_type: TokenType) {
        let center = self.board.cell_center(pos);
        let visual = self.visuals.create_visual(token_type, center);
        self.board.set(pos, Some(Token::new(token_type, visual)));
    }

    /// Draws a type from the configured set.
    fn random_type(&mut self) -> TokenType {
        let index = self.rng.random_range(0..self.token_types.len());
        self.token_types[index]
    }

    /// All cell positions in column-major, low-to-high order.
    fn all_positions(&self) -> impl Iterator<Item = CellPos> + use<V, R> {
        let width = self.board.width() as i32;
        let height = self.board.height() as i32;
        (0..width).flat_map(move |x| (0..height).map(move |y| CellPos::new(x, y)))
    }
}

impl<V, R> fmt::Debug for CascadeEngine<V, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CascadeEngine")
            .field("board", &self.board)
            .field("selection", &self.selection)
            .field("resolving", &self.resolving)
            .finish_non_exhaustive()
    }
}
