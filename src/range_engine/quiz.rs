//! One practice session: deal a random hand, take an answer, score it.
//!
//! The session owns its resolved range; the engine itself keeps no
//! per-user state. A web layer stores one `QuizSession` per client and
//! replaces it when the client picks a new range.

use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::range_engine::{
    error::RangeError,
    hand::Hand,
    range::{RangeMapping, FOLD, IN_RANGE},
    relation::{bottom_of_category, closest_in_range},
    repository::RangeRepository,
};

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Which configured range to practise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeSelection {
    pub position: String,
    pub action: String,
    pub stack_depth: String,
}

impl RangeSelection {
    pub fn new(
        position: impl Into<String>,
        action: impl Into<String>,
        stack_depth: impl Into<String>,
    ) -> Self {
        RangeSelection {
            position: position.into(),
            action: action.into(),
            stack_depth: stack_depth.into(),
        }
    }
}

/// A hand dealt for one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DealtHand {
    pub question_id: String,
    pub hand: Hand,
}

/// What the player answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Answer {
    /// Binary quiz: "is this hand in the range?"
    InRange(bool),
    /// Multi-action quiz: one of the range's labels, or `"fold"`.
    Action(String),
}

/// Scored answer plus the hands to show as feedback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerFeedback {
    pub hand: Hand,
    pub correct: bool,
    pub actual_action: String,
    pub in_range: bool,
    /// Nearest in-range hand, after a wrong answer on a hand that folds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closest_hand: Option<Hand>,
    /// Where the range stops: bottom of the hand's row after a right answer
    /// on an in-range hand, the nearest in-range hand after a right fold.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom_of_range: Option<Hand>,
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct QuizSession {
    selection: RangeSelection,
    mapping: RangeMapping,
    deck: Vec<Hand>,
}

impl QuizSession {
    /// Resolve `selection` once and hold it for the session's lifetime.
    pub fn start(repo: &RangeRepository, selection: RangeSelection) -> Result<Self, RangeError> {
        let mapping =
            repo.resolve_range(&selection.position, &selection.action, &selection.stack_depth)?;
        Ok(Self::with_mapping(selection, mapping))
    }

    pub fn with_mapping(selection: RangeSelection, mapping: RangeMapping) -> Self {
        QuizSession { selection, mapping, deck: Hand::all() }
    }

    pub fn selection(&self) -> &RangeSelection {
        &self.selection
    }

    pub fn mapping(&self) -> &RangeMapping {
        &self.mapping
    }

    pub fn range_size(&self) -> usize {
        self.mapping.len()
    }

    pub fn available_actions(&self) -> &[String] {
        self.mapping.actions()
    }

    /// Pick one of the 169 hands uniformly. A seed makes the deal repeatable.
    pub fn deal(&self, rng_seed: Option<u64>) -> DealtHand {
        let mut rng: StdRng = match rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };
        self.deal_with(&mut rng)
    }

    pub fn deal_with<R: Rng>(&self, rng: &mut R) -> DealtHand {
        let question_id = format!("Q-{:08X}", rng.next_u32());
        let hand = self.deck[rng.gen_range(0..self.deck.len())];
        DealtHand { question_id, hand }
    }

    /// Score `answer` for the hand named by `hand_token`.
    pub fn check_answer(&self, hand_token: &str, answer: &Answer) -> Result<AnswerFeedback, RangeError> {
        let hand = Hand::parse(hand_token)?;
        let actual_action = self.mapping.action_for(&hand).to_string();
        let in_range = self.mapping.contains(&hand);

        let correct = match answer {
            Answer::InRange(says_in) => *says_in == in_range,
            Answer::Action(label) => {
                let label = label.trim();
                if label != FOLD && !self.available_actions().iter().any(|a| a == label) {
                    return Err(RangeError::UnknownAnswer(label.to_string()));
                }
                label == actual_action
            }
        };

        let mut feedback = AnswerFeedback {
            hand,
            correct,
            actual_action,
            in_range,
            closest_hand: None,
            bottom_of_range: None,
        };

        match (correct, in_range) {
            (false, false) => feedback.closest_hand = closest_in_range(&hand, self.mapping.hands()),
            (true, true) => feedback.bottom_of_range = bottom_of_category(&hand, self.mapping.hands()),
            (true, false) => feedback.bottom_of_range = closest_in_range(&hand, self.mapping.hands()),
            (false, true) => {}
        }

        debug!(
            hand = %hand,
            answer = answer.label(),
            correct,
            actual = %feedback.actual_action,
            "checked answer"
        );
        Ok(feedback)
    }
}

impl Answer {
    /// The label this answer stands for; `InRange(true)` is `"in_range"`.
    pub fn label(&self) -> &str {
        match self {
            Answer::InRange(true)  => IN_RANGE,
            Answer::InRange(false) => FOLD,
            Answer::Action(label)  => label.as_str(),
        }
    }
}
