//! Match rules deciding whether three contents form a set.

use crate::content::CardContent;

/// A rule deciding whether three card contents form a valid triple.
///
/// Implementations must be pure and must not depend on argument order.
/// Any `Fn(&C, &C, &C) -> bool` closure is a rule, which makes it easy to
/// drive a [`Game`](crate::Game) with synthetic content:
///
/// ```
/// use setrs::MatchRule;
///
/// let same_parity = |a: &u8, b: &u8, c: &u8| a % 2 == b % 2 && b % 2 == c % 2;
/// assert!(same_parity.matches(&1, &3, &5));
/// assert!(!same_parity.matches(&1, &2, &3));
/// ```
pub trait MatchRule<C: ?Sized> {
    /// Returns whether `a`, `b` and `c` form a valid triple.
    fn matches(&self, a: &C, b: &C, c: &C) -> bool;
}

impl<C: ?Sized, F> MatchRule<C> for F
where
    F: Fn(&C, &C, &C) -> bool,
{
    fn matches(&self, a: &C, b: &C, c: &C) -> bool {
        self(a, b, c)
    }
}

/// Returns whether one attribute is valid across a triple: the three values
/// are either all equal or all pairwise distinct.
#[must_use]
pub fn attribute_fits<T: PartialEq + ?Sized>(a: &T, b: &T, c: &T) -> bool {
    let all_equal = a == b && b == c;
    let all_distinct = a != b && b != c && a != c;
    all_equal || all_distinct
}

/// The classic rule: every attribute must fit on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SetRule;

impl MatchRule<CardContent> for SetRule {
    fn matches(&self, a: &CardContent, b: &CardContent, c: &CardContent) -> bool {
        a.attributes()
            .iter()
            .zip(b.attributes().iter())
            .zip(c.attributes().iter())
            .all(|((x, y), z)| attribute_fits(x, y, z))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn content(color: u8, shape: u8, count: u8, texture: u8) -> CardContent {
        CardContent::new(color, shape, count, texture)
    }

    #[test]
    fn attribute_needs_all_equal_or_all_distinct() {
        assert!(attribute_fits(&0, &0, &0));
        assert!(attribute_fits(&0, &1, &2));
        assert!(!attribute_fits(&0, &0, &1));
        assert!(!attribute_fits(&1, &0, &1));
        assert!(!attribute_fits(&2, &1, &1));
    }

    #[test]
    fn counts_differing_is_a_set() {
        let a = content(0, 0, 0, 0);
        let b = content(0, 0, 1, 0);
        let c = content(0, 0, 2, 0);
        assert!(SetRule.matches(&a, &b, &c));
    }

    #[test]
    fn two_equal_colors_is_not_a_set() {
        let a = content(0, 0, 0, 0);
        let b = content(0, 0, 1, 0);
        let c = content(1, 1, 1, 1);
        assert!(!SetRule.matches(&a, &b, &c));
    }

    #[test]
    fn everything_differing_is_a_set() {
        let a = content(0, 1, 2, 0);
        let b = content(1, 2, 0, 1);
        let c = content(2, 0, 1, 2);
        assert!(SetRule.matches(&a, &b, &c));
    }

    #[test]
    fn identical_contents_match() {
        let a = content(1, 2, 0, 1);
        assert!(SetRule.matches(&a, &a, &a));
    }

    #[test]
    fn any_two_contents_complete_to_exactly_one_set() {
        let universe: alloc::vec::Vec<CardContent> = (0..crate::content::UNIVERSE_SIZE)
            .filter_map(CardContent::from_index)
            .collect();
        let a = universe[5];
        let b = universe[41];

        let thirds = universe
            .iter()
            .filter(|c| SetRule.matches(&a, &b, c))
            .count();
        assert_eq!(thirds, 1);
    }
}
