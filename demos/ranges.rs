//! Print every configured range as a 13x13 grid.
//!
//! Run with:
//!   cargo run --example ranges [path/to/ranges.json]
//!
//! Rows are the high card, columns the low card; suited hands sit above the
//! diagonal, offsuit below, pairs on it. Each cell shows the first letter of
//! the hand's action (`i` for in range, `.` for fold, `3` for 3bet). Notation tokens that
//! could not be read are listed under the grid.

use range_drill::{Category, Hand, Rank, RangeMapping, RangeRepository, DEFAULT_RANGES_FILE, FOLD};
use tracing_subscriber::EnvFilter;

fn cell(mapping: &RangeMapping, hand: Option<Hand>) -> char {
    let Some(hand) = hand else { return '?' };
    match mapping.action_for(&hand) {
        FOLD => '.',
        action => action.chars().next().unwrap_or('?'),
    }
}

fn print_grid(mapping: &RangeMapping) {
    let ranks: Vec<Rank> = Rank::all().rev().collect();
    print!("     ");
    for col in &ranks {
        print!("{col} ");
    }
    println!();
    for &row in &ranks {
        print!("  {row}  ");
        for &col in &ranks {
            let hand = if row == col {
                Some(Hand::pair(row))
            } else if col < row {
                Hand::non_pair(row, col, Category::Suited)
            } else {
                Hand::non_pair(col, row, Category::Offsuit)
            };
            print!("{} ", cell(mapping, hand));
        }
        println!();
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_RANGES_FILE.to_string());
    let repo = RangeRepository::load(&path);
    if repo.is_empty() {
        println!("No ranges available in {path}");
        return;
    }

    for position in repo.list_positions() {
        for action in repo.list_actions(&position) {
            for depth in repo.list_stack_depths(&position, &action) {
                println!();
                println!("══ {position} / {action} / {depth} ══");
                match repo.resolve_range(&position, &action, &depth) {
                    Ok(mapping) => {
                        println!("  {} hands, actions: {}", mapping.len(), mapping.actions().join(", "));
                        print_grid(&mapping);
                        for skipped in mapping.skipped() {
                            println!("  skipped '{}': {}", skipped.token, skipped.reason);
                        }
                    }
                    Err(err) => println!("  {err}"),
                }
            }
        }
    }
}
