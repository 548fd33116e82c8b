//! The renderer/VFX boundary consumed by the cascade engine.

use std::{future::Future, time::Duration};

use gemfall_core::Point;

use crate::token::{TokenType, VisualId};

/// The rendering callbacks the engine drives; it never implements them.
///
/// The engine owns every *logical* token and tells this collaborator to
/// create, move, and destroy the matching *visual* in lock-step with its own
/// mutations. [`move_visual`] is awaitable: the returned future resolves when
/// the visual transition has completed, and the engine suspends the in-flight
/// resolution sequence on it. The engine applies no timeout; the contract is
/// that every transition completes in bounded time, and an implementation
/// that never resolves stalls the sequence.
///
/// Timing and easing of the transitions belong entirely to the
/// implementation; the engine only forwards a duration hint.
///
/// [`move_visual`]: Visuals::move_visual
pub trait Visuals {
    /// Creates a visual for a newly placed token at the given cell center and
    /// returns its handle.
    fn create_visual(&mut self, token_type: TokenType, center: Point) -> VisualId;

    /// Animates a visual to the target cell center. The future resolves once
    /// the transition has finished.
    fn move_visual(
        &mut self,
        visual: VisualId,
        target: Point,
        duration_hint: Duration,
    ) -> impl Future<Output = ()>;

    /// Plays a removal effect at the given cell center.
    fn play_removal_effect(&mut self, center: Point);

    /// Releases the visual behind a removed token.
    fn destroy_visual(&mut self, visual: VisualId);
}

/// A [`Visuals`] implementation with no renderer behind it.
///
/// Handles are allocated sequentially and every transition completes
/// immediately, which makes it suitable for tests, headless simulation, and
/// driving the engine from a terminal. Simple counters record how much work a
/// real renderer would have been asked to do.
///
/// # Examples
///
/// ```
/// use gemfall_core::Point;
/// use gemfall_game::{AppearanceId, HeadlessVisuals, TokenType, TokenTypeId, Visuals};
///
/// let mut visuals = HeadlessVisuals::new();
/// let token_type = TokenType::new(TokenTypeId::new(0), AppearanceId::new(0));
/// let a = visuals.create_visual(token_type, Point::ZERO);
/// let b = visuals.create_visual(token_type, Point::ZERO);
/// assert_ne!(a, b);
/// assert_eq!(visuals.created(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct HeadlessVisuals {
    next_visual: u64,
    created: u64,
    moved: u64,
    effects: u64,
    destroyed: u64,
}

impl HeadlessVisuals {
    /// Creates a fresh headless renderer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of visuals created so far.
    #[must_use]
    pub const fn created(&self) -> u64 {
        self.created
    }

    /// Number of move transitions requested so far.
    #[must_use]
    pub const fn moved(&self) -> u64 {
        self.moved
    }

    /// Number of removal effects played so far.
    #[must_use]
    pub const fn effects(&self) -> u64 {
        self.effects
    }

    /// Number of visuals destroyed so far.
    #[must_use]
    pub const fn destroyed(&self) -> u64 {
        self.destroyed
    }
}

impl Visuals for HeadlessVisuals {
    fn create_visual(&mut self, _token_type: TokenType, _center: Point) -> VisualId {
        let id = VisualId::new(self.next_visual);
        self.next_visual += 1;
        self.created += 1;
        id
    }

    fn move_visual(
        &mut self,
        _visual: VisualId,
        _target: Point,
        _duration_hint: Duration,
    ) -> impl Future<Output = ()> {
        self.moved += 1;
        std::future::ready(())
    }

    fn play_removal_effect(&mut self, _center: Point) {
        self.effects += 1;
    }

    fn destroy_visual(&mut self, _visual: VisualId) {
        self.destroyed += 1;
    }
}
