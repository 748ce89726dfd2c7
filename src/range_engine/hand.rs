use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::range_engine::error::RangeError;

// ---------------------------------------------------------------------------
// Rank
// ---------------------------------------------------------------------------

/// Rank 2..=14 where 14 = Ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Rank(pub u8);

impl Rank {
    pub const TWO: Rank = Rank(2);
    pub const ACE: Rank = Rank(14);

    /// All 13 ranks, lowest first.
    pub fn all() -> impl DoubleEndedIterator<Item = Rank> {
        (Self::TWO.0..=Self::ACE.0).map(Rank)
    }

    pub fn symbol(self) -> &'static str {
        match self.0 {
            2 => "2", 3 => "3", 4 => "4", 5 => "5", 6 => "6",
            7 => "7", 8 => "8", 9 => "9", 10 => "T",
            11 => "J", 12 => "Q", 13 => "K", 14 => "A",
            _ => "?",
        }
    }

    /// Case-insensitive lookup in the rank alphabet `23456789TJQKA`.
    pub fn from_char(c: char) -> Option<Rank> {
        let value = match c.to_ascii_uppercase() {
            '2'..='9' => c as u8 - b'0',
            'T' => 10,
            'J' => 11,
            'Q' => 12,
            'K' => 13,
            'A' => 14,
            _ => return None,
        };
        Some(Rank(value))
    }

    /// Absolute rank gap, e.g. `K` to `T` is 3.
    pub fn gap(self, other: Rank) -> u8 {
        self.0.abs_diff(other.0)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Pair,
    Suited,
    Offsuit,
}

impl Category {
    /// Suffix used in canonical notation; pairs have none.
    pub fn suffix(self) -> &'static str {
        match self {
            Category::Pair    => "",
            Category::Suited  => "s",
            Category::Offsuit => "o",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Pair    => write!(f, "pair"),
            Category::Suited  => write!(f, "suited"),
            Category::Offsuit => write!(f, "offsuit"),
        }
    }
}

// ---------------------------------------------------------------------------
// Hand
// ---------------------------------------------------------------------------

/// One of the 169 abstract starting hands: two ranks plus pair/suited/offsuit.
///
/// The higher rank is always stored first, so `"KAs"` and `"AKs"` produce
/// the same value. Ordering follows
/// `(high, low, category)` and is what every `BTreeSet<Hand>` in the crate
/// iterates by, which keeps tie-breaks in the relation queries stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Hand {
    high: Rank,
    low: Rank,
    category: Category,
}

impl Hand {
    /// Build a pair. Used by range expansion where the rank is already valid.
    pub fn pair(rank: Rank) -> Self {
        Hand { high: rank, low: rank, category: Category::Pair }
    }

    /// Build a non-pair hand; ranks are reordered so `high > low`.
    ///
    /// Returns `None` when the ranks are equal or `category` is `Pair`.
    pub fn non_pair(a: Rank, b: Rank, category: Category) -> Option<Self> {
        if a == b || category == Category::Pair {
            return None;
        }
        let (high, low) = if a > b { (a, b) } else { (b, a) };
        Some(Hand { high, low, category })
    }

    /// Parse a 2-3 character token such as `"AA"`, `"AKs"`, `"t9O"`.
    pub fn parse(token: &str) -> Result<Self, RangeError> {
        let token = token.trim();
        let invalid = |reason: &str| RangeError::InvalidHand {
            token: token.to_string(),
            reason: reason.to_string(),
        };

        let mut chars = token.chars();
        let (Some(c1), Some(c2)) = (chars.next(), chars.next()) else {
            return Err(invalid("hand needs at least two characters"));
        };
        let (Some(r1), Some(r2)) = (Rank::from_char(c1), Rank::from_char(c2)) else {
            return Err(invalid("unknown rank symbol"));
        };

        if r1 == r2 {
            return Ok(Hand::pair(r1));
        }

        let category = match chars.next().map(|c| c.to_ascii_lowercase()) {
            Some('s') => Category::Suited,
            Some('o') => Category::Offsuit,
            Some(_)   => return Err(invalid("suit designation must be 's' or 'o'")),
            None      => return Err(invalid("non-pair hands must specify 's' or 'o'")),
        };

        Hand::non_pair(r1, r2, category).ok_or_else(|| invalid("ranks must differ"))
    }

    /// All 169 hands: pairs 22..AA first, then for each high rank every
    /// lower kicker as suited followed by offsuit.
    pub fn all() -> Vec<Hand> {
        let mut hands: Vec<Hand> = Rank::all().map(Hand::pair).collect();
        for high in Rank::all() {
            for low in Rank::all().take_while(|&r| r < high) {
                hands.push(Hand { high, low, category: Category::Suited });
                hands.push(Hand { high, low, category: Category::Offsuit });
            }
        }
        hands
    }

    pub fn high(&self) -> Rank {
        self.high
    }

    pub fn low(&self) -> Rank {
        self.low
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn is_pair(&self) -> bool {
        self.category == Category::Pair
    }

    /// Same high rank and same suited/offsuit/pair status.
    pub fn shares_row(&self, other: &Hand) -> bool {
        self.high == other.high && self.category == other.category
    }

    /// Heuristic distance used for closest-hand feedback.
    ///
    /// Sum of both rank gaps, plus one when two non-pair hands disagree on
    /// suitedness. A pair never picks up the suit penalty.
    pub fn distance_to(&self, other: &Hand) -> u8 {
        let suit_penalty = u8::from(
            !self.is_pair() && !other.is_pair() && self.category != other.category,
        );
        self.high.gap(other.high) + self.low.gap(other.low) + suit_penalty
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.high, self.low, self.category.suffix())
    }
}

impl FromStr for Hand {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Hand::parse(s)
    }
}

impl TryFrom<String> for Hand {
    type Error = RangeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Hand::parse(&value)
    }
}

impl From<Hand> for String {
    fn from(hand: Hand) -> Self {
        hand.to_string()
    }
}
