//! Error types for game construction.
//!
//! Once a game exists none of its operations fail: requests that cannot be
//! honored leave the state unchanged.

use thiserror::Error;

/// Errors that can occur when building a game.
///
/// Oversized configurations are rejected rather than clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NewGameError {
    /// The content source ran out before every card got a content.
    #[error("requested {requested} cards but only {available} contents exist")]
    UniverseExhausted {
        /// Number of cards requested.
        requested: usize,
        /// Number of contents the source produced.
        available: usize,
    },
    /// The starting table is larger than the whole game.
    #[error("starting table of {table} cards exceeds the {cards} cards in the game")]
    TableTooLarge {
        /// Requested starting table size.
        table: usize,
        /// Total number of cards.
        cards: usize,
    },
}
