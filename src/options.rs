//! Game configuration options.

use crate::content::UNIVERSE_SIZE;

/// Number of cards laid out when a classic game starts.
pub const DEFAULT_STARTING_TABLE: usize = 21;

/// When a full selection of three cards is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum Resolve {
    /// The triple is resolved by the same `choose` that completes it.
    #[default]
    Immediately,
    /// The triple stays selected and is resolved by the next `choose` of a
    /// card outside it.
    OnNextChoice,
}

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use setrs::{GameOptions, Resolve};
///
/// let options = GameOptions::default()
///     .with_cards(27)
///     .with_starting_table(12)
///     .with_resolve(Resolve::OnNextChoice);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Total number of cards in the game.
    pub cards: usize,
    /// Number of cards placed on the table at the start.
    pub starting_table: usize,
    /// When a full selection is evaluated.
    pub resolve: Resolve,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self::classic()
    }
}

impl GameOptions {
    /// Options for the classic 81-card game.
    #[must_use]
    pub const fn classic() -> Self {
        Self {
            cards: UNIVERSE_SIZE,
            starting_table: DEFAULT_STARTING_TABLE,
            resolve: Resolve::Immediately,
        }
    }

    /// Sets the total number of cards.
    ///
    /// # Example
    ///
    /// ```
    /// use setrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_cards(12);
    /// assert_eq!(options.cards, 12);
    /// ```
    #[must_use]
    pub const fn with_cards(mut self, cards: usize) -> Self {
        self.cards = cards;
        self
    }

    /// Sets the number of cards dealt onto the table at the start.
    ///
    /// # Example
    ///
    /// ```
    /// use setrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_table(12);
    /// assert_eq!(options.starting_table, 12);
    /// ```
    #[must_use]
    pub const fn with_starting_table(mut self, starting_table: usize) -> Self {
        self.starting_table = starting_table;
        self
    }

    /// Sets when a full selection is evaluated.
    ///
    /// # Example
    ///
    /// ```
    /// use setrs::{GameOptions, Resolve};
    ///
    /// let options = GameOptions::default().with_resolve(Resolve::OnNextChoice);
    /// assert_eq!(options.resolve, Resolve::OnNextChoice);
    /// ```
    #[must_use]
    pub const fn with_resolve(mut self, resolve: Resolve) -> Self {
        self.resolve = resolve;
        self
    }
}
