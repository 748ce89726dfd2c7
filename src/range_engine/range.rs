use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use tracing::warn;

use crate::range_engine::{
    error::RangeError,
    hand::Hand,
    notation::{parse_range_lenient, SkippedToken},
};

/// Action label given to every hand of a binary (in/fold) range.
pub const IN_RANGE: &str = "in_range";

/// Implicit action for any hand a range does not list.
pub const FOLD: &str = "fold";

// ---------------------------------------------------------------------------
// Configuration leaf
// ---------------------------------------------------------------------------

/// The range text stored at one position / action / stack-depth leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RangeSpec {
    /// One notation string; hands in it are `in_range`, the rest fold.
    Binary(String),
    /// Sub-action label to notation, in document order.
    MultiAction(Vec<(String, String)>),
}

impl RangeSpec {
    /// Labels a quiz can answer with for this leaf (fold excluded).
    pub fn action_labels(&self) -> Vec<String> {
        match self {
            RangeSpec::Binary(_) => vec![IN_RANGE.to_string()],
            RangeSpec::MultiAction(parts) => parts.iter().map(|(label, _)| label.clone()).collect(),
        }
    }

    /// Expand into a uniform hand -> action mapping.
    ///
    /// Sub-ranges are applied in document order; a hand listed under two
    /// sub-actions ends up with the later label and is reported in
    /// [`RangeMapping::overlaps`].
    pub fn resolve(&self) -> Result<RangeMapping, RangeError> {
        let mut mapping = RangeMapping {
            actions: self.action_labels(),
            ..RangeMapping::default()
        };

        match self {
            RangeSpec::Binary(text) => {
                let parsed = parse_range_lenient(text)?;
                mapping.skipped = parsed.skipped;
                for hand in parsed.hands {
                    mapping.hands.insert(hand, IN_RANGE.to_string());
                }
            }
            RangeSpec::MultiAction(parts) => {
                for (label, text) in parts {
                    let parsed = parse_range_lenient(text)?;
                    mapping.skipped.extend(parsed.skipped);
                    for hand in parsed.hands {
                        if let Some(previous) = mapping.hands.insert(hand, label.clone()) {
                            if previous != *label {
                                warn!(
                                    hand = %hand,
                                    first = %previous,
                                    second = %label,
                                    "hand assigned to two sub-actions, keeping the later one"
                                );
                                mapping.overlaps.insert(hand);
                            }
                        }
                    }
                }
            }
        }

        Ok(mapping)
    }
}

// ---------------------------------------------------------------------------
// Resolved range
// ---------------------------------------------------------------------------

/// A resolved range: every listed hand maps to exactly one action label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RangeMapping {
    hands: BTreeMap<Hand, String>,
    actions: Vec<String>,
    overlaps: BTreeSet<Hand>,
    skipped: Vec<SkippedToken>,
}

impl RangeMapping {
    /// Mapped action for `hand`, or `"fold"` when the range omits it.
    pub fn action_for(&self, hand: &Hand) -> &str {
        self.hands.get(hand).map(String::as_str).unwrap_or(FOLD)
    }

    pub fn contains(&self, hand: &Hand) -> bool {
        self.hands.contains_key(hand)
    }

    /// Range members in canonical order.
    pub fn hands(&self) -> impl Iterator<Item = &Hand> {
        self.hands.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Hand, &str)> {
        self.hands.iter().map(|(hand, label)| (hand, label.as_str()))
    }

    /// Action labels the range leaf defines, in document order.
    pub fn actions(&self) -> &[String] {
        &self.actions
    }

    /// Hands that two sub-actions both claimed.
    pub fn overlaps(&self) -> &BTreeSet<Hand> {
        &self.overlaps
    }

    /// Single-hand tokens dropped while parsing.
    pub fn skipped(&self) -> &[SkippedToken] {
        &self.skipped
    }

    pub fn len(&self) -> usize {
        self.hands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn h(s: &str) -> Hand {
        Hand::parse(s).unwrap()
    }

    fn multi(parts: &[(&str, &str)]) -> RangeSpec {
        RangeSpec::MultiAction(
            parts.iter().map(|(a, r)| (a.to_string(), r.to_string())).collect(),
        )
    }

    #[test]
    fn binary_spec_labels_every_hand_in_range() {
        let mapping = RangeSpec::Binary("QQ+, AKs".into()).resolve().unwrap();
        assert_eq!(mapping.len(), 4);
        assert!(mapping.iter().all(|(_, label)| label == IN_RANGE));
        assert_eq!(mapping.actions(), &[IN_RANGE.to_string()]);
        assert_eq!(mapping.action_for(&h("72o")), FOLD);
    }

    #[test]
    fn multi_action_spec_merges_sub_ranges() {
        let mapping = multi(&[("3bet", "QQ+, AKs"), ("call", "JJ-99, AQs")]).resolve().unwrap();
        assert_eq!(mapping.action_for(&h("AA")), "3bet");
        assert_eq!(mapping.action_for(&h("TT")), "call");
        assert_eq!(mapping.action_for(&h("AQo")), FOLD);
        assert_eq!(mapping.actions(), &["3bet".to_string(), "call".to_string()]);
        assert!(mapping.overlaps().is_empty());
    }

    #[test_log::test]
    fn overlapping_sub_ranges_keep_the_later_label() {
        let mapping = multi(&[("3bet", "AA, KK"), ("call", "KK-99")]).resolve().unwrap();
        assert_eq!(mapping.action_for(&h("KK")), "call");
        assert_eq!(mapping.action_for(&h("AA")), "3bet");
        assert_eq!(mapping.overlaps().iter().copied().collect::<Vec<_>>(), vec![h("KK")]);
    }

    #[test]
    fn empty_binary_spec_is_found_but_empty() {
        let mapping = RangeSpec::Binary(String::new()).resolve().unwrap();
        assert!(mapping.is_empty());
        assert_eq!(mapping.actions(), &[IN_RANGE.to_string()]);
    }

    #[test]
    fn notation_errors_surface_from_resolve() {
        let err = multi(&[("3bet", "A5s-K9s")]).resolve().unwrap_err();
        assert!(matches!(err, RangeError::InvalidRangeNotation { .. }));
    }
}
