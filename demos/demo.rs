//! Full demo of a practice round against the bundled range file.
//!
//! Run with: `cargo run --example demo`
//!
//! Set `RUST_LOG=debug` to see the range resolution and answer checks.
//!
//! The demo walks through:
//!
//! 1. **Selection** — list positions, facing actions and stack depths the way
//!    a selection UI would, then start a session for one of them.
//! 2. **Binary quiz** — BTN open at 50bb: answer "in range" for a few fixed
//!    seeds and print the feedback (closest hand / bottom of range).
//! 3. **Multi-action quiz** — BB 3-betting vs BTN at 50bb: answer with action
//!    labels and see the real action for each hand.

use range_drill::{
    Answer, AnswerFeedback, QuizSession, RangeRepository, RangeSelection,
};
use tracing_subscriber::EnvFilter;

fn print_feedback(fb: &AnswerFeedback, answered: &Answer) {
    let marker = if fb.correct { "✓" } else { "✗" };
    println!("  {marker} {:<4} answered {:<8} actual {}", fb.hand.to_string(), answered.label(), fb.actual_action);
    if let Some(closest) = fb.closest_hand {
        println!("       Closest hand in range: {closest}");
    }
    if let Some(bottom) = fb.bottom_of_range {
        println!("       Bottom of range: {bottom}");
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/ranges.json");
    let repo = RangeRepository::load(path);

    // ── Selection ──────────────────────────────────────────────────────────
    println!();
    println!("══ Available ranges ══");
    println!();
    for position in repo.list_positions() {
        for action in repo.list_actions(&position) {
            let depths = repo.list_stack_depths(&position, &action);
            println!("  {position:<4} {action:<14} {}", depths.join(", "));
        }
    }

    // ── Binary quiz ────────────────────────────────────────────────────────
    // Fixed seeds so the hands are the same every run.
    println!();
    println!("══ BTN open, 50bb (in range / fold) ══");
    println!();
    let session = match QuizSession::start(&repo, RangeSelection::new("BTN", "open", "50bb")) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("  {err}");
            return;
        }
    };
    println!("  {} hands in range", session.range_size());
    for seed in [11u64, 22, 33, 44, 55, 66] {
        let dealt = session.deal(Some(seed));
        let answer = Answer::InRange(true);
        match session.check_answer(&dealt.hand.to_string(), &answer) {
            Ok(fb) => print_feedback(&fb, &answer),
            Err(err) => eprintln!("  {}: {err}", dealt.question_id),
        }
    }

    // ── Multi-action quiz ─────────────────────────────────────────────────
    println!();
    println!("══ BB 3bet vs BTN, 50bb (3bet / 3bet_l / call / fold) ══");
    println!();
    let Ok(session) = QuizSession::start(&repo, RangeSelection::new("BB", "3bet vs BTN", "50bb")) else {
        eprintln!("  range not configured");
        return;
    };
    println!("  Actions: {}", session.available_actions().join(", "));
    for (hand, label) in [
        ("AA",  "3bet"),
        ("AA",  "call"),
        ("87s", "3bet_l"),
        ("A9s", "3bet"),
        ("72o", "fold"),
        ("K4o", "call"),
    ] {
        let answer = Answer::Action(label.to_string());
        match session.check_answer(hand, &answer) {
            Ok(fb) => print_feedback(&fb, &answer),
            Err(err) => eprintln!("  {hand}: {err}"),
        }
    }
    println!();
}
