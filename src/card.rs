//! Card type shared by the deck, the table and the discard pile.

/// Identifier of a card, unique within a game.
pub type CardId = usize;

/// Number of cards in a triple.
pub const SET_SIZE: usize = 3;

/// A card in play.
///
/// Identity is carried by `id` alone: two cards compare equal when their ids
/// are equal, whatever their content or flags.
#[derive(Debug, Clone)]
pub struct Card<C> {
    /// Unique identifier of the card.
    pub id: CardId,
    /// What is printed on the card.
    pub content: C,
    /// Whether the card is part of the current selection.
    pub is_selected: bool,
    /// Whether the card belongs to a resolved triple.
    pub is_matched: bool,
}

impl<C> Card<C> {
    /// Creates a new unselected, unmatched card.
    #[must_use]
    pub const fn new(id: CardId, content: C) -> Self {
        Self {
            id,
            content,
            is_selected: false,
            is_matched: false,
        }
    }

    /// Returns whether the card can still be chosen.
    #[must_use]
    pub const fn is_playable(&self) -> bool {
        !self.is_matched
    }
}

impl<C> PartialEq for Card<C> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<C> Eq for Card<C> {}
