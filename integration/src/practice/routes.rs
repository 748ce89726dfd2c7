use axum::{routing::{get, post}, Router};
use super::handler::{check_answer, list_actions, list_positions, list_stack_depths, next_hand, start_session, PracticeState};

pub fn router(state: PracticeState) -> Router {
    Router::new()
        .route("/api/positions",                         get(list_positions))
        .route("/api/actions/:position",                 get(list_actions))
        .route("/api/stack-depths/:position/:action",    get(list_stack_depths))
        .route("/api/start",                             post(start_session))
        .route("/api/next-hand",                         get(next_hand))
        .route("/api/check-answer",                      post(check_answer))
        .with_state(state)
}
