//! Property tests for the match rule and the game invariants.

use proptest::prelude::*;
use setrs::{
    CardContent, CardId, Game, GameOptions, MatchRule, Phase, Resolve, SetRule, UNIVERSE_SIZE,
};

fn content() -> impl Strategy<Value = CardContent> {
    (0u8..3, 0u8..3, 0u8..3, 0u8..3)
        .prop_map(|(color, shape, count, texture)| CardContent::new(color, shape, count, texture))
}

#[derive(Debug, Clone, Copy)]
enum Op {
    Choose(CardId),
    DealMore,
    ReplaceMatched,
    DealThree,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => (0..UNIVERSE_SIZE).prop_map(Op::Choose),
        1 => Just(Op::DealMore),
        1 => Just(Op::ReplaceMatched),
        1 => Just(Op::DealThree),
    ]
}

fn apply(game: &Game, op: Op) {
    match op {
        Op::Choose(id) => {
            game.choose(id);
        }
        Op::DealMore => {
            game.deal_more(3);
        }
        Op::ReplaceMatched => {
            game.replace_matched(3);
        }
        Op::DealThree => {
            game.deal_three();
        }
    }
}

fn check_invariants(game: &Game, bound: usize) -> Result<(), TestCaseError> {
    let table = game.table();

    let mut all: Vec<CardId> = table
        .iter()
        .chain(game.deck().iter())
        .chain(game.discarded().iter())
        .map(|card| card.id)
        .collect();
    all.sort_unstable();
    prop_assert_eq!(all, (0..UNIVERSE_SIZE).collect::<Vec<_>>());

    prop_assert!(game.selection().len() <= bound);
    prop_assert!(table.iter().all(|card| !(card.is_matched && card.is_selected)));
    prop_assert_eq!(
        game.is_ended(),
        game.is_deck_empty() && table.iter().all(|card| card.is_matched)
    );
    Ok(())
}

proptest! {
    #[test]
    fn match_ignores_argument_order(a in content(), b in content(), c in content()) {
        let expected = SetRule.matches(&a, &b, &c);
        prop_assert_eq!(SetRule.matches(&a, &c, &b), expected);
        prop_assert_eq!(SetRule.matches(&b, &a, &c), expected);
        prop_assert_eq!(SetRule.matches(&b, &c, &a), expected);
        prop_assert_eq!(SetRule.matches(&c, &a, &b), expected);
        prop_assert_eq!(SetRule.matches(&c, &b, &a), expected);
    }

    #[test]
    fn immediate_play_keeps_invariants(
        seed in any::<u64>(),
        ops in proptest::collection::vec(op(), 0..200),
    ) {
        let game = Game::classic(GameOptions::default().with_starting_table(12), seed).unwrap();
        check_invariants(&game, 2)?;

        for op in ops {
            let in_play = game.table().len() + game.cards_remaining();
            apply(&game, op);
            check_invariants(&game, 2)?;

            if let Op::Choose(_) = op {
                prop_assert_eq!(game.table().len() + game.cards_remaining(), in_play);
            }
        }
    }

    #[test]
    fn deferred_play_keeps_invariants(
        seed in any::<u64>(),
        ops in proptest::collection::vec(op(), 0..200),
    ) {
        let options = GameOptions::default()
            .with_starting_table(12)
            .with_resolve(Resolve::OnNextChoice);
        let game = Game::classic(options, seed).unwrap();

        for op in ops {
            apply(&game, op);
            check_invariants(&game, 3)?;
        }
    }

    #[test]
    fn deferred_play_through_hints_ends(seed in any::<u64>(), groups in 1usize..8) {
        let all_equal = |a: &u8, b: &u8, c: &u8| a == b && b == c;
        let options = GameOptions::default()
            .with_cards(UNIVERSE_SIZE)
            .with_starting_table(groups * 3)
            .with_resolve(Resolve::OnNextChoice);
        let game = Game::new(options, seed, all_equal, |i| Some((i / 3) as u8)).unwrap();

        for _ in 0..200 {
            if let Some([a, b, c]) = game.hint() {
                game.choose(a);
                game.choose(b);
                game.choose(c);
                if let Some(outside) = game
                    .table()
                    .iter()
                    .find(|card| !card.is_matched && !card.is_selected)
                    .map(|card| card.id)
                    .filter(|_| game.phase() == Phase::Pending)
                {
                    game.choose(outside);
                    game.choose(outside);
                }
                prop_assert!(game.selection().is_empty());
                game.deal_three();
            } else if game.deal_three() == 0 {
                break;
            }
        }

        prop_assert!(game.is_ended());
    }

    #[test]
    fn hint_is_stable_and_exhaustive(seed in any::<u64>(), table in 3usize..22) {
        let options = GameOptions::default().with_starting_table(table);
        let game = Game::classic(options, seed).unwrap();

        let hint = game.hint();
        prop_assert_eq!(hint, game.hint());

        let cards = game.table();
        let exists = cards.iter().enumerate().any(|(i, a)| {
            cards[i + 1..].iter().enumerate().any(|(j, b)| {
                cards[i + j + 2..]
                    .iter()
                    .any(|c| SetRule.matches(&a.content, &b.content, &c.content))
            })
        });
        prop_assert_eq!(hint.is_some(), exists);

        if let Some(ids) = hint {
            let found: Vec<&CardContent> = ids
                .iter()
                .filter_map(|id| cards.iter().find(|card| card.id == *id))
                .map(|card| &card.content)
                .collect();
            prop_assert_eq!(found.len(), 3);
            prop_assert!(SetRule.matches(found[0], found[1], found[2]));
        }
    }
}
