use alloc::vec::Vec;

use crate::card::{Card, SET_SIZE};
use crate::rule::MatchRule;

use super::Game;

/// Moves the last `n` deck cards to the end of the table, all or nothing.
pub(super) fn deal_onto<C>(table: &mut Vec<Card<C>>, deck: &mut Vec<Card<C>>, n: usize) -> bool {
    if n == 0 || deck.len() < n {
        return false;
    }

    let start = deck.len() - n;
    table.extend(deck.drain(start..).map(|mut card| {
        card.is_selected = false;
        card.is_matched = false;
        card
    }));
    true
}

/// Swaps up to `n` matched table cards for deck cards, keeping their slots.
fn replace_onto<C>(
    table: &mut [Card<C>],
    deck: &mut Vec<Card<C>>,
    discarded: &mut Vec<Card<C>>,
    n: usize,
) -> usize {
    let mut replaced = 0;

    while replaced < n {
        let Some(slot) = table.iter().position(|card| card.is_matched) else {
            break;
        };
        let Some(mut card) = deck.pop() else {
            break;
        };

        card.is_selected = false;
        card.is_matched = false;
        discarded.push(core::mem::replace(&mut table[slot], card));
        replaced += 1;
    }

    replaced
}

impl<C: Clone, R: MatchRule<C>> Game<C, R> {
    /// Deals `n` cards from the deck onto the end of the table.
    ///
    /// Returns `false` and changes nothing if `n` is zero or the deck holds
    /// fewer than `n` cards.
    pub fn deal_more(&self, n: usize) -> bool {
        let mut table = self.table.lock();
        let mut deck = self.deck.lock();

        let dealt = deal_onto(&mut table, &mut deck, n);
        if dealt {
            log::trace!("dealt {n} cards, {} left in the deck", deck.len());
        }
        dealt
    }

    /// Replaces up to `n` matched table cards with cards from the deck.
    ///
    /// Each replacement takes the slot of the first matched card in table
    /// order and sends the matched card to the discard pile. Stops early when
    /// the deck or the matched cards run out. Returns the number replaced.
    pub fn replace_matched(&self, n: usize) -> usize {
        let mut table = self.table.lock();
        let mut deck = self.deck.lock();
        let mut discarded = self.discarded.lock();

        let replaced = replace_onto(&mut table, &mut deck, &mut discarded, n);
        log::trace!("replaced {replaced} matched cards");
        replaced
    }

    /// Puts three more cards in play, the way tapping the deck does.
    ///
    /// If any table card is matched, up to three of them are replaced.
    /// Otherwise three cards are dealt onto the table. Returns how many cards
    /// reached the table.
    pub fn deal_three(&self) -> usize {
        let mut table = self.table.lock();
        let mut deck = self.deck.lock();

        if table.iter().any(|card| card.is_matched) {
            let mut discarded = self.discarded.lock();
            return replace_onto(&mut table, &mut deck, &mut discarded, SET_SIZE);
        }

        if deal_onto(&mut table, &mut deck, SET_SIZE) {
            SET_SIZE
        } else {
            0
        }
    }

    /// Moves matched cards behind the unmatched ones, keeping relative order
    /// within each group.
    pub fn move_matched_to_back(&self) {
        self.table.lock().sort_by_key(|card| card.is_matched);
    }
}
