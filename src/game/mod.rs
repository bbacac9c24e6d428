//! Game engine and state management.

use alloc::vec::Vec;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

use crate::card::{Card, CardId, SET_SIZE};
use crate::content::CardContent;
use crate::error::NewGameError;
use crate::options::GameOptions;
use crate::rule::{MatchRule, SetRule};

mod choose;
mod dealer;
mod hint;
pub mod state;

pub use state::{Choice, Outcome, Phase, Resolution};

/// A Set game engine that manages the deck, the table and the selection.
///
/// The engine is generic over the card content `C` and the [`MatchRule`]
/// `R` deciding which triples match, so it can be driven with synthetic
/// content. [`Game::classic`] builds the usual 81-card game.
///
/// Matched cards stay on the table, flagged, until [`Game::replace_matched`]
/// swaps them for fresh cards from the deck.
pub struct Game<C = CardContent, R = SetRule> {
    /// Cards not yet dealt. Dealing takes from the end.
    pub deck: Mutex<Vec<Card<C>>>,
    /// Cards on the table, in display order.
    pub table: Mutex<Vec<Card<C>>>,
    /// Game options.
    pub options: GameOptions,
    /// Matched cards swapped off the table, most recent last.
    discarded: Mutex<Vec<Card<C>>>,
    /// Outcome of the last selection resolved by `choose`.
    last_resolution: Mutex<Option<Resolution>>,
    /// Content of every card, indexed by card id.
    universe: Vec<C>,
    /// Rule deciding whether a triple matches.
    rule: R,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

impl Game {
    /// Creates a classic game with [`SetRule`] and contents taken from
    /// [`CardContent::from_index`].
    ///
    /// # Errors
    ///
    /// Returns an error if more than 81 cards are requested or the starting
    /// table is larger than the game.
    ///
    /// # Example
    ///
    /// ```
    /// use setrs::{Game, GameOptions};
    ///
    /// let game = Game::classic(GameOptions::default().with_starting_table(12), 42).unwrap();
    /// assert_eq!(game.table().len(), 12);
    /// assert_eq!(game.cards_remaining(), 69);
    /// ```
    pub fn classic(options: GameOptions, seed: u64) -> Result<Self, NewGameError> {
        Self::new(options, seed, SetRule, CardContent::from_index)
    }
}

impl<C: Clone, R: MatchRule<C>> Game<C, R> {
    /// Creates a new game with the given seed.
    ///
    /// Card `i` gets the content `content_for_index(i)` for every `i` below
    /// `options.cards`. The cards are shuffled, the first
    /// `options.starting_table` of them are laid on the table and the rest
    /// form the deck.
    ///
    /// # Errors
    ///
    /// Returns [`NewGameError::TableTooLarge`] if the starting table exceeds
    /// the card count and [`NewGameError::UniverseExhausted`] if
    /// `content_for_index` returns `None` before every card has a content.
    ///
    /// # Example
    ///
    /// ```
    /// use setrs::{Game, GameOptions};
    ///
    /// let contents = [1u8, 1, 1, 2, 2, 2];
    /// let all_equal = |a: &u8, b: &u8, c: &u8| a == b && b == c;
    /// let options = GameOptions::default().with_cards(6).with_starting_table(3);
    ///
    /// let game = Game::new(options, 7, all_equal, |i| contents.get(i).copied()).unwrap();
    /// assert_eq!(game.table().len(), 3);
    /// assert_eq!(game.deck().len(), 3);
    /// ```
    pub fn new<F>(
        options: GameOptions,
        seed: u64,
        rule: R,
        mut content_for_index: F,
    ) -> Result<Self, NewGameError>
    where
        F: FnMut(usize) -> Option<C>,
    {
        if options.starting_table > options.cards {
            return Err(NewGameError::TableTooLarge {
                table: options.starting_table,
                cards: options.cards,
            });
        }

        let mut universe = Vec::with_capacity(options.cards);
        for index in 0..options.cards {
            let content = content_for_index(index).ok_or(NewGameError::UniverseExhausted {
                requested: options.cards,
                available: index,
            })?;
            universe.push(content);
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let (table, deck) = Self::lay_out(&universe, options.starting_table, &mut rng);

        Ok(Self {
            deck: Mutex::new(deck),
            table: Mutex::new(table),
            options,
            discarded: Mutex::new(Vec::new()),
            last_resolution: Mutex::new(None),
            universe,
            rule,
            rng: Mutex::new(rng),
        })
    }

    /// Creates and shuffles every card, then splits off the starting table.
    fn lay_out(
        universe: &[C],
        starting_table: usize,
        rng: &mut ChaCha8Rng,
    ) -> (Vec<Card<C>>, Vec<Card<C>>) {
        let mut cards: Vec<Card<C>> = universe
            .iter()
            .cloned()
            .enumerate()
            .map(|(id, content)| Card::new(id, content))
            .collect();

        cards.shuffle(rng);
        let deck = cards.split_off(starting_table);
        (cards, deck)
    }

    /// Starts a fresh shuffled game with the same options.
    ///
    /// The shuffle continues the engine's random stream, so the new layout
    /// differs from the previous one.
    pub fn reset(&self) {
        let (fresh_table, fresh_deck) = {
            let mut rng = self.rng.lock();
            Self::lay_out(&self.universe, self.options.starting_table, &mut rng)
        };

        let mut table = self.table.lock();
        let mut deck = self.deck.lock();
        *table = fresh_table;
        *deck = fresh_deck;
        self.discarded.lock().clear();
        *self.last_resolution.lock() = None;

        log::debug!(
            "reset: {} cards on the table, {} in the deck",
            table.len(),
            deck.len()
        );
    }

    /// Returns the rule used to evaluate triples.
    pub const fn rule(&self) -> &R {
        &self.rule
    }

    /// Returns a clone of the table.
    pub fn table(&self) -> Vec<Card<C>> {
        self.table.lock().clone()
    }

    /// Returns a clone of the deck.
    pub fn deck(&self) -> Vec<Card<C>> {
        self.deck.lock().clone()
    }

    /// Returns a clone of the discard pile.
    pub fn discarded(&self) -> Vec<Card<C>> {
        self.discarded.lock().clone()
    }

    /// Returns the selected table cards.
    pub fn selection(&self) -> Vec<Card<C>> {
        self.table
            .lock()
            .iter()
            .filter(|card| card.is_selected)
            .cloned()
            .collect()
    }

    /// Returns the matched table cards.
    pub fn matched(&self) -> Vec<Card<C>> {
        self.table
            .lock()
            .iter()
            .filter(|card| card.is_matched)
            .cloned()
            .collect()
    }

    /// Returns the number of cards remaining in the deck.
    pub fn cards_remaining(&self) -> usize {
        self.deck.lock().len()
    }

    /// Returns whether the deck is empty.
    pub fn is_deck_empty(&self) -> bool {
        self.deck.lock().is_empty()
    }

    /// Returns whether the game is over: nothing left to deal and nothing
    /// left to play.
    pub fn is_ended(&self) -> bool {
        self.phase() == Phase::Ended
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        let table = self.table.lock();
        let deck_empty = self.deck.lock().is_empty();
        Phase::of(&table, deck_empty)
    }

    /// Returns the resolution produced by the last `choose`, if any.
    pub fn last_resolution(&self) -> Option<Resolution> {
        *self.last_resolution.lock()
    }

    /// Returns whether the last `choose` resolved a mismatch.
    pub fn has_mismatch_occurred(&self) -> bool {
        self.last_resolution
            .lock()
            .is_some_and(|resolution| resolution.outcome == Outcome::Mismatch)
    }

    /// Returns the ids of the cards in the last mismatch, if the last
    /// `choose` resolved one.
    pub fn mismatched_cards(&self) -> Option<[CardId; SET_SIZE]> {
        self.last_resolution
            .lock()
            .filter(|resolution| resolution.outcome == Outcome::Mismatch)
            .map(|resolution| resolution.cards)
    }
}
