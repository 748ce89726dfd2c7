//! Queries relating a single hand to a resolved range.
//!
//! All three functions are pure. Candidate iteration order decides ties, so
//! callers should pass hands in canonical order (a `BTreeSet<Hand>` or
//! [`RangeMapping::hands`]), which makes the result reproducible.

use crate::range_engine::{
    hand::Hand,
    range::RangeMapping,
};

/// The action `mapping` assigns to `hand`, `"fold"` if it is absent.
pub fn action_for<'a>(hand: &Hand, mapping: &'a RangeMapping) -> &'a str {
    mapping.action_for(hand)
}

/// Nearest range member to `hand`, for corrective feedback.
///
/// Pairs look at pairs first (closest rank), falling back to the plain
/// distance metric over non-pairs. Non-pairs never get a pair back: they
/// prefer candidates with the same suitedness, otherwise any non-pair, and
/// rank by high-card gap then kicker gap. The first candidate wins ties.
pub fn closest_in_range<'a, I>(hand: &Hand, candidates: I) -> Option<Hand>
where
    I: IntoIterator<Item = &'a Hand>,
{
    let (pairs, non_pairs): (Vec<Hand>, Vec<Hand>) =
        candidates.into_iter().copied().partition(Hand::is_pair);

    if hand.is_pair() {
        if pairs.is_empty() {
            return non_pairs.into_iter().min_by_key(|c| hand.distance_to(c));
        }
        return pairs.into_iter().min_by_key(|c| c.high().gap(hand.high()));
    }

    let same_suitedness: Vec<Hand> = non_pairs
        .iter()
        .copied()
        .filter(|c| c.category() == hand.category())
        .collect();
    let pool = if same_suitedness.is_empty() { non_pairs } else { same_suitedness };

    pool.into_iter()
        .min_by_key(|c| (c.high().gap(hand.high()), c.low().gap(hand.low())))
}

/// Weakest range member in `hand`'s own row: the lowest pair for a pair,
/// otherwise the lowest kicker with the same high rank and suitedness.
pub fn bottom_of_category<'a, I>(hand: &Hand, candidates: I) -> Option<Hand>
where
    I: IntoIterator<Item = &'a Hand>,
{
    let row = candidates.into_iter().copied();
    if hand.is_pair() {
        row.filter(Hand::is_pair).min_by_key(Hand::high)
    } else {
        row.filter(|c| c.shares_row(hand)).min_by_key(Hand::low)
    }
}
