use alloc::vec::Vec;

use crate::card::{Card, CardId, SET_SIZE};
use crate::options::Resolve;
use crate::rule::MatchRule;

use super::dealer::deal_onto;
use super::{Choice, Game, Outcome, Resolution};

/// Returns the table indices of the selection if it holds exactly three cards.
fn full_selection<C>(table: &[Card<C>]) -> Option<[usize; SET_SIZE]> {
    let mut indices = [0; SET_SIZE];
    let mut count = 0;

    for (index, card) in table.iter().enumerate() {
        if !card.is_selected {
            continue;
        }
        if count == SET_SIZE {
            return None;
        }
        indices[count] = index;
        count += 1;
    }

    (count == SET_SIZE).then_some(indices)
}

/// Returns whether some unmatched card outside the selection is on the table.
fn has_free_card<C>(table: &[Card<C>]) -> bool {
    table
        .iter()
        .any(|card| !card.is_matched && !card.is_selected)
}

fn set_selected<C>(table: &mut [Card<C>], id: CardId, selected: bool) {
    if let Some(card) = table.iter_mut().find(|card| card.id == id) {
        card.is_selected = selected;
    }
}

impl<C: Clone, R: MatchRule<C>> Game<C, R> {
    /// Chooses a table card.
    ///
    /// - Choosing a selected card deselects it.
    /// - Choosing an unknown or matched card does nothing.
    /// - Otherwise the card joins the selection. With
    ///   [`Resolve::Immediately`], the third selected card resolves the
    ///   triple within the same call. With [`Resolve::OnNextChoice`], a full
    ///   selection is resolved first and the chosen card is selected after,
    ///   unless no unmatched card is left outside the selection, in which
    ///   case the third card resolves the triple at once.
    ///
    /// A matching triple is flagged as matched. A mismatching one is
    /// deselected and three more cards are dealt if the deck allows it. Once
    /// the deck is empty and no three playable cards remain outside the
    /// selection, the selection is accepted as a match so the game can end.
    ///
    /// # Example
    ///
    /// ```
    /// use setrs::{Choice, Game, GameOptions};
    ///
    /// let game = Game::classic(GameOptions::default(), 3).unwrap();
    /// let [a, b, c] = game.hint().expect("21 cards always hold a set");
    ///
    /// assert_eq!(game.choose(a), Choice::Selected);
    /// assert_eq!(game.choose(b), Choice::Selected);
    /// assert!(matches!(game.choose(c), Choice::Resolved(r) if r.is_match()));
    /// assert_eq!(game.matched().len(), 3);
    /// ```
    pub fn choose(&self, id: CardId) -> Choice {
        let mut table = self.table.lock();
        let mut deck = self.deck.lock();

        let Some(card) = table.iter().find(|card| card.id == id) else {
            log::trace!("ignored card {id}: not on the table");
            return Choice::Ignored;
        };

        if card.is_matched {
            log::trace!("ignored card {id}: already matched");
            return Choice::Ignored;
        }

        if card.is_selected {
            set_selected(&mut table, id, false);
            *self.last_resolution.lock() = None;
            return Choice::Deselected;
        }

        // A triple left over from the previous call is resolved before the
        // new card joins the selection.
        let mut resolution =
            full_selection(&table).map(|indices| self.resolve(&mut table, &mut deck, indices));

        set_selected(&mut table, id, true);

        // A deferred triple with nothing left to choose outside it would
        // never be resolved, so it is resolved now.
        let resolve_now =
            self.options.resolve == Resolve::Immediately || !has_free_card(&table);
        if let Some(indices) = full_selection(&table).filter(|_| resolve_now) {
            resolution = Some(self.resolve(&mut table, &mut deck, indices));
        }

        *self.last_resolution.lock() = resolution;
        resolution.map_or(Choice::Selected, Choice::Resolved)
    }

    /// Evaluates the selected triple at `indices` and applies the outcome.
    fn resolve(
        &self,
        table: &mut Vec<Card<C>>,
        deck: &mut Vec<Card<C>>,
        indices: [usize; SET_SIZE],
    ) -> Resolution {
        let [i, j, k] = indices;
        let cards = [table[i].id, table[j].id, table[k].id];

        let matches = self
            .rule
            .matches(&table[i].content, &table[j].content, &table[k].content);
        let out_of_supply = deck.is_empty()
            && table
                .iter()
                .enumerate()
                .filter(|(index, card)| !card.is_matched && !indices.contains(index))
                .count()
                < SET_SIZE;

        if matches || out_of_supply {
            for index in indices {
                table[index].is_selected = false;
                table[index].is_matched = true;
            }
            log::debug!("cards {cards:?} matched");
            return Resolution {
                outcome: Outcome::Match,
                cards,
            };
        }

        for card in table.iter_mut() {
            card.is_selected = false;
        }
        let dealt = deal_onto(table, deck, SET_SIZE);
        log::debug!("cards {cards:?} mismatched, dealt more: {dealt}");

        Resolution {
            outcome: Outcome::Mismatch,
            cards,
        }
    }
}
