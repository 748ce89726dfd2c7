//! Core range engine: hands, notation, configured ranges and feedback queries.
//!
//! ## Module overview
//!
//! | Module       | Purpose |
//! |--------------|---------|
//! | `hand`       | The 169 abstract starting hands, parsing and the distance heuristic |
//! | `error`      | `RangeError` for callers, `ConfigError` for range-file loading |
//! | `notation`   | Expands `"22+, A2s+, 77-22"` style text into hand sets |
//! | `range`      | `RangeSpec` leaves and the resolved hand -> action `RangeMapping` |
//! | `repository` | Loads the position / action / stack-depth document and resolves selections |
//! | `relation`   | `action_for`, `closest_in_range`, `bottom_of_category` |
//! | `quiz`       | Session-scoped deal / answer / feedback loop built on the above |

pub mod error;
pub mod hand;
pub mod notation;
pub mod quiz;
pub mod range;
pub mod relation;
pub mod repository;

// Re-export the public API surface so callers can use
// `range_engine::RangeRepository` without reaching into sub-modules.
pub use error::{ConfigError, RangeError};
pub use hand::{Category, Hand, Rank};
pub use notation::{parse_range, parse_range_lenient, ParsedRange, SkippedToken};
pub use quiz::{Answer, AnswerFeedback, DealtHand, QuizSession, RangeSelection};
pub use range::{RangeMapping, RangeSpec, FOLD, IN_RANGE};
pub use relation::{action_for, bottom_of_category, closest_in_range};
pub use repository::{RangeConfig, RangeRepository, DEFAULT_RANGES_FILE, DEFAULT_STACK_DEPTH};
