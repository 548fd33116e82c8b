//! Token identity and the handles linking tokens to renderer-owned state.

use std::{
    fmt::{self, Display},
    hash::{Hash, Hasher},
};

/// The identity of a token category.
///
/// Two tokens match if and only if their types carry the same id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TokenTypeId(u16);

impl TokenTypeId {
    /// Creates a new type id.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Returns the raw id value.
    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }
}

impl Display for TokenTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An opaque handle to a renderer-owned appearance asset (sprite, material,
/// mesh). The core never interprets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AppearanceId(u32);

impl AppearanceId {
    /// Creates a new appearance handle.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw handle value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

/// An opaque handle to a renderer-owned visual instance, returned by
/// [`Visuals::create_visual`](crate::visuals::Visuals::create_visual).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VisualId(u64);

impl VisualId {
    /// Creates a new visual instance handle.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw handle value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// A token category: an identity plus the appearance the renderer draws it
/// with.
///
/// Equality and hashing use the identity only; two types with the same id but
/// different appearances compare equal. The set of available types is
/// configured before a board is built and does not change during play.
///
/// # Examples
///
/// ```
/// use gemfall_game::{AppearanceId, TokenType, TokenTypeId};
///
/// let red = TokenType::new(TokenTypeId::new(0), AppearanceId::new(100));
/// let reskinned = TokenType::new(TokenTypeId::new(0), AppearanceId::new(200));
/// assert_eq!(red, reskinned); // identity, not appearance
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TokenType {
    id: TokenTypeId,
    appearance: AppearanceId,
}

impl TokenType {
    /// Creates a new token type.
    #[must_use]
    pub const fn new(id: TokenTypeId, appearance: AppearanceId) -> Self {
        Self { id, appearance }
    }

    /// Returns the type identity.
    #[must_use]
    pub const fn id(self) -> TokenTypeId {
        self.id
    }

    /// Returns the appearance handle.
    #[must_use]
    pub const fn appearance(self) -> AppearanceId {
        self.appearance
    }
}

impl PartialEq for TokenType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TokenType {}

impl Hash for TokenType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// A token instance placed on the board.
///
/// The core owns the logical token; the renderer owns the visual behind
/// [`Token::visual`] and is told to create, move, and destroy it in lock-step
/// with the core's decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    token_type: TokenType,
    visual: VisualId,
}

impl Token {
    /// Creates a token of the given type backed by the given visual.
    #[must_use]
    pub const fn new(token_type: TokenType, visual: VisualId) -> Self {
        Self { token_type, visual }
    }

    /// Returns the token's type.
    #[must_use]
    pub const fn token_type(self) -> TokenType {
        self.token_type
    }

    /// Returns the handle of the renderer-owned visual.
    #[must_use]
    pub const fn visual(self) -> VisualId {
        self.visual
    }
}
