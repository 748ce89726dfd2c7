//! Unit tests for the `range_drill` crate.
//!
//! Included from `lib.rs` under `#[cfg(test)]`. These run against the
//! bundled `data/ranges.json` document end to end; module-level behaviour is
//! covered next to each module.
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Fixture | Listings, binary and multi-action resolution, no overlapping sub-ranges |
//! | Notation | Reference expansions (`22+`, `A2s+`, `77-22`, `K9s+, KJo+`) |
//! | Feedback | Closest and bottom-of-row hands on the wide reference range |
//! | Quiz | Full deal/answer loop over every hand, for binary and multi-action ranges |
//! | Loading | Missing file degrades to an empty repository |

use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::range_engine::{
    action_for, bottom_of_category, closest_in_range, parse_range, Answer, Hand, QuizSession,
    RangeError, RangeRepository, RangeSelection, FOLD, IN_RANGE,
};

// ── helpers ──────────────────────────────────────────────────────────────────

const FIXTURE: &str = include_str!("../data/ranges.json");

fn fixture() -> RangeRepository {
    RangeRepository::from_json_str(FIXTURE).expect("bundled range file must parse")
}

fn h(s: &str) -> Hand {
    Hand::parse(s).unwrap()
}

fn hands(tokens: &[&str]) -> BTreeSet<Hand> {
    tokens.iter().map(|t| h(t)).collect()
}

/// Every selection the fixture defines.
fn all_selections(repo: &RangeRepository) -> Vec<RangeSelection> {
    let mut out = Vec::new();
    for position in repo.list_positions() {
        for action in repo.list_actions(&position) {
            for depth in repo.list_stack_depths(&position, &action) {
                out.push(RangeSelection::new(position.clone(), action.clone(), depth));
            }
        }
    }
    out
}

// ── fixture ──────────────────────────────────────────────────────────────────

#[test]
fn fixture_lists_positions_in_file_order() {
    let repo = fixture();
    assert_eq!(repo.list_positions(), vec!["UTG", "CO", "BTN", "BB"]);
    assert_eq!(repo.list_actions("BB"), vec!["3bet vs BTN", "call vs SB"]);
    assert_eq!(repo.list_stack_depths("BTN", "open"), vec!["50bb", "standard"]);
}

#[test]
fn fixture_multi_action_range_matches_expected_labels() {
    let repo = fixture();
    let mapping = repo.resolve_range("BB", "3bet vs BTN", "50bb").unwrap();
    assert_eq!(action_for(&h("AA"), &mapping), "3bet");
    assert_eq!(action_for(&h("87s"), &mapping), "3bet_l");
    assert_eq!(action_for(&h("JTs"), &mapping), "call");
    assert_eq!(action_for(&h("72o"), &mapping), FOLD);
    assert_eq!(
        repo.list_range_actions("BB", "3bet vs BTN", "50bb"),
        vec!["3bet", "3bet_l", "call"]
    );
}

#[test]
fn fixture_binary_range_uses_in_range_label() {
    let repo = fixture();
    let mapping = repo.resolve_range("BTN", "open", "50bb").unwrap();
    assert_eq!(action_for(&h("AA"), &mapping), IN_RANGE);
    assert_eq!(repo.list_range_actions("BTN", "open", "50bb"), vec![IN_RANGE]);
    assert_eq!(repo.resolve_default("BTN", "open").unwrap().actions(), [IN_RANGE]);
}

#[test]
fn fixture_ranges_are_clean() {
    let repo = fixture();
    for sel in all_selections(&repo) {
        let mapping = repo
            .resolve_range(&sel.position, &sel.action, &sel.stack_depth)
            .unwrap_or_else(|e| panic!("{sel:?} failed to resolve: {e}"));
        assert!(!mapping.is_empty(), "{sel:?} resolved to an empty range");
        assert!(mapping.overlaps().is_empty(), "{sel:?} has overlapping sub-ranges: {:?}", mapping.overlaps());
        assert!(mapping.skipped().is_empty(), "{sel:?} has unparseable tokens: {:?}", mapping.skipped());
    }
}

#[test]
fn unknown_selection_is_not_found() {
    let repo = fixture();
    let err = repo.resolve_range("SB", "open", "50bb").unwrap_err();
    assert_eq!(
        err,
        RangeError::RangeNotFound {
            position: "SB".into(),
            action: "open".into(),
            stack_depth: "50bb".into(),
        }
    );
    assert!(QuizSession::start(&repo, RangeSelection::new("BB", "3bet vs BTN", "100bb")).is_err());
}

// ── notation ─────────────────────────────────────────────────────────────────

#[test]
fn reference_expansions() {
    assert_eq!(parse_range("22+").unwrap().len(), 13);
    assert_eq!(parse_range("A2s+").unwrap().len(), 12);
    assert_eq!(parse_range("77-22").unwrap(), parse_range("22-77").unwrap());
    assert_eq!(
        parse_range("K9s+, KJo+").unwrap(),
        hands(&["K9s", "KTs", "KJs", "KQs", "KJo", "KQo"])
    );
    assert!(matches!(
        parse_range("A5s-K9s"),
        Err(RangeError::InvalidRangeNotation { .. })
    ));
    assert!(parse_range("").unwrap().is_empty());
}

// ── feedback ─────────────────────────────────────────────────────────────────

#[test]
fn feedback_on_reference_range() {
    let range = parse_range(
        "22+, A2s+, ATo+, K9s+, KJo+, Q9s+, QJo, J9s+, JTo, T8s+, T9o, 98s, 87s, 76s, 65s, 54s",
    )
    .unwrap();
    let closest = closest_in_range(&h("T5o"), &range).unwrap();
    assert_eq!(closest.high(), h("T5o").high());
    assert!(!closest.is_pair());
    assert!(closest == h("T9o") || closest == h("T8s"));

    assert_eq!(bottom_of_category(&h("A9s"), &parse_range("A5s+").unwrap()), Some(h("A5s")));
}

#[test]
fn closest_hand_is_always_a_member() {
    let range = parse_range("66+, A8s+, KTs+, QJs, AJo+, KQo").unwrap();
    for hand in Hand::all() {
        if let Some(closest) = closest_in_range(&hand, &range) {
            assert!(range.contains(&closest), "{closest} is not in the range (query {hand})");
            if !hand.is_pair() {
                assert!(!closest.is_pair(), "non-pair {hand} got pair {closest}");
            }
        }
        if let Some(bottom) = bottom_of_category(&hand, &range) {
            assert!(range.contains(&bottom));
            assert_eq!(bottom.category(), hand.category());
        }
    }
}

// ── quiz loop ────────────────────────────────────────────────────────────────

#[test]
fn binary_quiz_scores_every_hand() {
    let repo = fixture();
    let session = QuizSession::start(&repo, RangeSelection::new("UTG", "open", "100bb")).unwrap();
    for hand in Hand::all() {
        let token = hand.to_string();
        let in_range = session.mapping().contains(&hand);

        let right = session.check_answer(&token, &Answer::InRange(in_range)).unwrap();
        assert!(right.correct, "{token}");
        if in_range {
            assert!(right.bottom_of_range.is_some(), "{token} should show its row bottom");
        } else {
            assert!(right.bottom_of_range.is_some(), "{token} fold should show the boundary");
        }

        let wrong = session.check_answer(&token, &Answer::InRange(!in_range)).unwrap();
        assert!(!wrong.correct, "{token}");
        assert_eq!(wrong.closest_hand.is_some(), !in_range);
    }
}

#[test]
fn multi_action_quiz_round() {
    let repo = fixture();
    let session =
        QuizSession::start(&repo, RangeSelection::new("BB", "3bet vs BTN", "50bb")).unwrap();
    assert_eq!(session.available_actions(), ["3bet", "3bet_l", "call"]);

    let aa = session.check_answer("AA", &Answer::Action("3bet".into())).unwrap();
    assert!(aa.correct);
    assert_eq!(aa.actual_action, "3bet");

    let aa_call = session.check_answer("AA", &Answer::Action("call".into())).unwrap();
    assert!(!aa_call.correct);
    assert_eq!(aa_call.actual_action, "3bet");

    let fold = session.check_answer("72o", &Answer::Action("fold".into())).unwrap();
    assert!(fold.correct);
    assert!(!fold.in_range);
}

#[test]
fn dealt_hands_are_valid_quiz_questions() {
    let repo = fixture();
    let session = QuizSession::start(&repo, RangeSelection::new("CO", "open", "100bb")).unwrap();
    for seed in [1u64, 42, 999, 0xDEAD_BEEF, 7] {
        let dealt = session.deal(Some(seed));
        assert_eq!(dealt, session.deal(Some(seed)), "deal not deterministic for seed={seed}");
        let fb = session
            .check_answer(&dealt.hand.to_string(), &Answer::InRange(true))
            .unwrap();
        assert_eq!(fb.hand, dealt.hand);
    }
}

#[test]
fn feedback_serializes_for_the_web_layer() {
    let repo = fixture();
    let session = QuizSession::start(&repo, RangeSelection::new("CO", "open", "100bb")).unwrap();
    let fb = session.check_answer("72o", &Answer::InRange(true)).unwrap();
    let json = serde_json::to_value(&fb).unwrap();
    assert_eq!(json["hand"], "72o");
    assert_eq!(json["correct"], false);
    assert_eq!(json["actual_action"], FOLD);
    assert!(json.get("closest_hand").is_some());
    assert!(json.get("bottom_of_range").is_none());
}

// ── loading ──────────────────────────────────────────────────────────────────

#[test]
fn bundled_file_loads_from_disk() {
    let path: PathBuf = [env!("CARGO_MANIFEST_DIR"), "data", "ranges.json"].iter().collect();
    let repo = RangeRepository::load(path);
    assert_eq!(repo.list_positions().len(), 4);
}

#[test]
fn missing_file_yields_no_ranges() {
    let repo = RangeRepository::load("/definitely/not/here/ranges.json");
    assert!(repo.list_positions().is_empty());
    assert!(repo.list_actions("BB").is_empty());
}
