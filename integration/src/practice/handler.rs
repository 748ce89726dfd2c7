use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use range_drill::{Answer, QuizSession, RangeError, RangeRepository, RangeSelection};
use serde::Deserialize;
use serde_json::{json, Value};

// ---------------------------------------------------------------------------
// Shared state: read-only repository + one quiz session per client
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub struct PracticeState {
    pub repo: Arc<RangeRepository>,
    pub sessions: Arc<Mutex<HashMap<String, QuizSession>>>,
}

pub fn new_state(repo: RangeRepository) -> PracticeState {
    PracticeState {
        repo: Arc::new(repo),
        sessions: Arc::new(Mutex::new(HashMap::new())),
    }
}

type ApiResult = Result<Json<Value>, (StatusCode, Json<Value>)>;

fn client_error(status: StatusCode, err: impl ToString) -> (StatusCode, Json<Value>) {
    (status, Json(json!({ "error": err.to_string() })))
}

fn range_error(err: RangeError) -> (StatusCode, Json<Value>) {
    let status = match err {
        RangeError::RangeNotFound { .. } => StatusCode::NOT_FOUND,
        _ => StatusCode::BAD_REQUEST,
    };
    client_error(status, err)
}

// ---------------------------------------------------------------------------
// Query / body types
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
pub struct SessionQuery {
    pub session_id: String,
}

#[derive(Deserialize)]
pub struct StartRequest {
    pub session_id: String,
    #[serde(flatten)]
    pub selection: RangeSelection,
}

#[derive(Deserialize)]
pub struct AnswerRequest {
    pub session_id: String,
    pub hand: String,
    /// Binary ranges answer with `in_range`, multi-action ranges with `action`.
    pub in_range: Option<bool>,
    pub action: Option<String>,
}

// ---------------------------------------------------------------------------
// Selection listings
// ---------------------------------------------------------------------------

pub async fn list_positions(State(state): State<PracticeState>) -> Json<Vec<String>> {
    Json(state.repo.list_positions())
}

pub async fn list_actions(
    State(state): State<PracticeState>,
    Path(position): Path<String>,
) -> Json<Vec<String>> {
    Json(state.repo.list_actions(&position))
}

pub async fn list_stack_depths(
    State(state): State<PracticeState>,
    Path((position, action)): Path<(String, String)>,
) -> Json<Vec<String>> {
    Json(state.repo.list_stack_depths(&position, &action))
}

// ---------------------------------------------------------------------------
// POST /api/start   body: { session_id, position, action, stack_depth }
// ---------------------------------------------------------------------------

pub async fn start_session(
    State(state): State<PracticeState>,
    Json(body): Json<StartRequest>,
) -> ApiResult {
    let session = QuizSession::start(&state.repo, body.selection).map_err(range_error)?;

    let response = json!({
        "success": true,
        "range_size": session.range_size(),
        "available_actions": session.available_actions(),
    });

    // Starting again replaces the client's previous range.
    state
        .sessions
        .lock()
        .map_err(|_| client_error(StatusCode::INTERNAL_SERVER_ERROR, "session store poisoned"))?
        .insert(body.session_id, session);

    Ok(Json(response))
}

// ---------------------------------------------------------------------------
// GET /api/next-hand?session_id=...
// ---------------------------------------------------------------------------

pub async fn next_hand(
    State(state): State<PracticeState>,
    Query(params): Query<SessionQuery>,
) -> ApiResult {
    let sessions = state
        .sessions
        .lock()
        .map_err(|_| client_error(StatusCode::INTERNAL_SERVER_ERROR, "session store poisoned"))?;
    let session = sessions
        .get(&params.session_id)
        .ok_or_else(|| client_error(StatusCode::BAD_REQUEST, "No active practice session"))?;

    let dealt = session.deal(None);
    Ok(Json(json!({ "question_id": dealt.question_id, "hand": dealt.hand })))
}

// ---------------------------------------------------------------------------
// POST /api/check-answer   body: { session_id, hand, in_range | action }
// ---------------------------------------------------------------------------

pub async fn check_answer(
    State(state): State<PracticeState>,
    Json(body): Json<AnswerRequest>,
) -> ApiResult {
    let answer = match (body.action, body.in_range) {
        (Some(action), _) => Answer::Action(action),
        (None, Some(in_range)) => Answer::InRange(in_range),
        (None, None) => {
            return Err(client_error(StatusCode::BAD_REQUEST, "Answer needs `in_range` or `action`"))
        }
    };

    let sessions = state
        .sessions
        .lock()
        .map_err(|_| client_error(StatusCode::INTERNAL_SERVER_ERROR, "session store poisoned"))?;
    let session = sessions
        .get(&body.session_id)
        .ok_or_else(|| client_error(StatusCode::BAD_REQUEST, "No active practice session"))?;

    let feedback = session.check_answer(&body.hand, &answer).map_err(range_error)?;
    serde_json::to_value(feedback)
        .map(Json)
        .map_err(|err| client_error(StatusCode::INTERNAL_SERVER_ERROR, err))
}
