use alloc::vec::Vec;

use crate::card::{Card, CardId, SET_SIZE};
use crate::rule::MatchRule;

use super::Game;

/// Scans every triple in index order and returns the first one that matches.
fn first_triple<C, R: MatchRule<C>>(cards: &[&Card<C>], rule: &R) -> Option<[CardId; SET_SIZE]> {
    for (i, a) in cards.iter().enumerate() {
        for (j, b) in cards.iter().enumerate().skip(i + 1) {
            for c in cards.iter().skip(j + 1) {
                if rule.matches(&a.content, &b.content, &c.content) {
                    return Some([a.id, b.id, c.id]);
                }
            }
        }
    }
    None
}

impl<C: Clone, R: MatchRule<C>> Game<C, R> {
    /// Finds a matching triple among the unmatched table cards.
    ///
    /// The result is some match, not a canonical one: when several triples
    /// match, the first found in table order is returned. Returns `None` if
    /// no triple matches. The search is exhaustive, cubic in the table size.
    pub fn hint(&self) -> Option<[CardId; SET_SIZE]> {
        let table = self.table.lock();
        let playable: Vec<&Card<C>> = table.iter().filter(|card| card.is_playable()).collect();
        first_triple(&playable, &self.rule)
    }
}
