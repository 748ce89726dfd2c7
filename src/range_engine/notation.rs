//! Compact range notation: `"22+, A2s+, ATo+, K9s-K6s, 77-22, QJo"`.
//!
//! Tokens are comma separated. Each token is one of
//!
//! | Form | Example | Expands to |
//! |------|---------|------------|
//! | plus (pair) | `55+` | every pair from 55 up to AA |
//! | plus (non-pair) | `A2s+` | same high rank and suitedness, kicker up to one below the high rank |
//! | dash (pairs) | `77-22` | every pair between the endpoints, either order |
//! | dash (non-pair) | `K9s-K6s` | kickers between the endpoints; high rank and suitedness must agree |
//! | single | `QJo` | that one hand |
//!
//! Plus and dash tokens that cannot be expanded fail the whole parse. A
//! single-hand token that does not parse is skipped and reported instead.

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::warn;

use crate::range_engine::{
    error::RangeError,
    hand::{Hand, Rank},
};

/// A single-hand token the parser could not read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedToken {
    pub token: String,
    pub reason: String,
}

/// Parse output with the leniency report attached.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedRange {
    pub hands: BTreeSet<Hand>,
    pub skipped: Vec<SkippedToken>,
}

/// Parse range text into its set of hands, discarding the skip report.
pub fn parse_range(text: &str) -> Result<BTreeSet<Hand>, RangeError> {
    parse_range_lenient(text).map(|parsed| parsed.hands)
}

/// Parse range text, collecting malformed single-hand tokens as warnings.
///
/// Empty or whitespace-only text yields an empty range.
pub fn parse_range_lenient(text: &str) -> Result<ParsedRange, RangeError> {
    let mut parsed = ParsedRange::default();

    for token in text.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        if let Some(base) = token.strip_suffix('+') {
            parsed.hands.extend(expand_plus(base)?);
        } else if token.contains('-') && !token.starts_with('-') {
            parsed.hands.extend(expand_dash(token)?);
        } else {
            match Hand::parse(token) {
                Ok(hand) => {
                    parsed.hands.insert(hand);
                }
                Err(err) => {
                    warn!(token, error = %err, "skipping unparseable hand in range");
                    parsed.skipped.push(SkippedToken {
                        token: token.to_string(),
                        reason: err.to_string(),
                    });
                }
            }
        }
    }

    Ok(parsed)
}

/// `"22+"` climbs pairs to AA; `"A2s+"` climbs the kicker up to the high rank.
fn expand_plus(base: &str) -> Result<Vec<Hand>, RangeError> {
    let base = Hand::parse(base)?;

    if base.is_pair() {
        return Ok(ranks_between(base.high(), Rank::ACE).map(Hand::pair).collect());
    }

    Ok(ranks_between(base.low(), base.high())
        .take_while(|&low| low < base.high())
        .filter_map(|low| Hand::non_pair(base.high(), low, base.category()))
        .collect())
}

/// `"77-22"` or `"A5s-A9s"`; endpoints may come in either order.
fn expand_dash(notation: &str) -> Result<Vec<Hand>, RangeError> {
    let invalid = |reason: &str| RangeError::InvalidRangeNotation {
        notation: notation.to_string(),
        reason: reason.to_string(),
    };

    let parts: Vec<&str> = notation.split('-').map(str::trim).collect();
    let [start, end] = parts.as_slice() else {
        return Err(invalid("expected exactly two endpoints"));
    };
    let start = Hand::parse(start)?;
    let end = Hand::parse(end)?;

    if start.is_pair() && end.is_pair() {
        return Ok(ranks_between(start.high(), end.high()).map(Hand::pair).collect());
    }
    if start.high() != end.high() {
        return Err(invalid("endpoints must share the same high rank"));
    }
    if start.category() != end.category() {
        return Err(invalid("endpoints must share the same suitedness"));
    }

    Ok(ranks_between(start.low(), end.low())
        .filter_map(|low| Hand::non_pair(start.high(), low, start.category()))
        .collect())
}

/// Inclusive rank span regardless of argument order.
fn ranks_between(a: Rank, b: Rank) -> impl Iterator<Item = Rank> {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    (lo.0..=hi.0).map(Rank)
}
