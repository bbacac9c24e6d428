//! Game state types.

use crate::card::{Card, CardId, SET_SIZE};

/// Where the game stands, derived from the table and deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing is selected.
    Idle,
    /// One or two cards are selected.
    Selecting(usize),
    /// Three cards are selected and wait for the next choice to resolve them.
    Pending,
    /// The deck is empty and every table card is matched.
    Ended,
}

impl Phase {
    /// Derives the phase from the table and whether the deck is empty.
    #[must_use]
    pub fn of<C>(table: &[Card<C>], deck_empty: bool) -> Self {
        if deck_empty && table.iter().all(|card| card.is_matched) {
            return Self::Ended;
        }

        match table.iter().filter(|card| card.is_selected).count() {
            0 => Self::Idle,
            n if n < SET_SIZE => Self::Selecting(n),
            _ => Self::Pending,
        }
    }
}

/// Outcome of evaluating a full selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The cards formed a triple, or were the last playable cards.
    Match,
    /// The cards did not form a triple.
    Mismatch,
}

/// A resolved selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    /// Whether the triple matched.
    pub outcome: Outcome,
    /// Ids of the three cards, in table order.
    pub cards: [CardId; SET_SIZE],
}

impl Resolution {
    /// Returns whether the triple matched.
    #[must_use]
    pub const fn is_match(&self) -> bool {
        matches!(self.outcome, Outcome::Match)
    }
}

/// What a call to [`Game::choose`](super::Game::choose) did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// The id is not on the table or the card is already matched.
    Ignored,
    /// The card was selected and is now deselected.
    Deselected,
    /// The card joined the selection.
    Selected,
    /// A full selection was resolved during this call.
    Resolved(Resolution),
}
