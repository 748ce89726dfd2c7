//! # range_drill
//!
//! A preflop range trainer. Given a table position, the action being faced
//! and a stack depth, it quizzes a player on which of the 169 starting hands
//! belong to a configured range, and explains misses by pointing at the
//! nearest hand that is in the range or at the weakest hand of the same row.
//!
//! ## How it works
//!
//! 1. Load a [`RangeRepository`] from a JSON document nested as
//!    position -> facing action -> stack depth -> range. A range is either one
//!    notation string (`"22+, A2s+, KJo+"`) or a map of action label to
//!    notation (`{"3bet": "QQ+", "call": "JJ-22"}`).
//! 2. Start a [`QuizSession`] for one [`RangeSelection`]; the range is parsed
//!    into a hand -> action [`RangeMapping`] once, up front.
//! 3. Call [`QuizSession::deal`] for a hand and [`QuizSession::check_answer`]
//!    to score the player's answer. The returned [`AnswerFeedback`] carries
//!    the real action and, depending on the outcome, the closest in-range hand
//!    or the bottom of the hand's row.
//!
//! The pieces are usable on their own: [`parse_range`] for notation,
//! [`closest_in_range`] and [`bottom_of_category`] for feedback over any set
//! of hands.
//!
//! ## Quick start
//!
//! ```rust
//! use range_drill::{Answer, QuizSession, RangeRepository, RangeSelection};
//!
//! let repo = RangeRepository::from_json_str(
//!     r#"{"BB": {"3bet vs BTN": {"50bb": {"3bet": "QQ+, AKs", "call": "JJ-22, AQs-A2s"}}}}"#,
//! )
//! .unwrap();
//!
//! let session = QuizSession::start(&repo, RangeSelection::new("BB", "3bet vs BTN", "50bb")).unwrap();
//! assert_eq!(session.available_actions(), ["3bet", "call"]);
//!
//! let dealt = session.deal(Some(7));
//! println!("{}: {}", dealt.question_id, dealt.hand);
//!
//! let feedback = session.check_answer("A9s", &Answer::Action("3bet".into())).unwrap();
//! assert!(!feedback.correct);
//! assert_eq!(feedback.actual_action, "call");
//! ```
//!
//! ## Logging
//!
//! The crate logs through `tracing` (skipped notation tokens, range-file
//! problems, overlapping sub-ranges) and never installs a subscriber itself.

pub mod range_engine;

// Convenience re-exports so callers can use `range_drill::parse_range`
// directly without reaching into `range_engine::`.
pub use range_engine::{
    action_for, bottom_of_category, closest_in_range, parse_range, parse_range_lenient,
    Answer, AnswerFeedback, Category, ConfigError, DealtHand, Hand, ParsedRange, QuizSession,
    Rank, RangeConfig, RangeError, RangeMapping, RangeRepository, RangeSelection, RangeSpec,
    SkippedToken, DEFAULT_RANGES_FILE, DEFAULT_STACK_DEPTH, FOLD, IN_RANGE,
};

#[cfg(test)]
mod tests;
