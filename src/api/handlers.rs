//! API Handlers
//!
//! HTTP request handlers for each math store endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::debug;

use crate::cache::{MathDb, OpKind};
use crate::error::MathError;
use crate::models::{
    BinaryOpRequest, BinaryOpResponse, GetResponse, HealthResponse, SetRequest, SetResponse,
    StatsResponse,
};

/// Application state shared across all handlers.
///
/// The store and its memo cache live in one `MathDb` behind one lock.
/// Writes and computations take the write half, so a completed write is
/// visible to every later computation.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe store and memo cache
    pub db: Arc<RwLock<MathDb>>,
}

impl AppState {
    /// Creates a new AppState around the given database.
    pub fn new(db: MathDb) -> Self {
        Self {
            db: Arc::new(RwLock::new(db)),
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(MathDb::new(config.memo_capacity))
    }
}

/// Handler for PUT /set
///
/// Writes a value and invalidates every memoized result.
pub async fn set_handler(
    State(state): State<AppState>,
    Json(req): Json<SetRequest>,
) -> Json<SetResponse> {
    if let Some(error_msg) = req.validate() {
        let err = MathError::InvalidRequest(error_msg);
        debug!(key = %req.key, error = %err, "set rejected");
        return Json(SetResponse::failed(req.key, &err));
    }

    let mut db = state.db.write().await;
    db.write(req.key.clone(), req.value);

    Json(SetResponse::new(req.key))
}

/// Handler for GET /get/:key
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Json<GetResponse> {
    // Reads never touch the memo table, so the shared half is enough
    let db = state.db.read().await;
    match db.read(&key) {
        Ok(value) => Json(GetResponse::new(key, value)),
        Err(err) => {
            debug!(key = %key, error = %err, "get failed");
            Json(GetResponse::failed(key, &err))
        }
    }
}

/// Handler for POST /add
pub async fn add_handler(
    State(state): State<AppState>,
    Json(req): Json<BinaryOpRequest>,
) -> Json<BinaryOpResponse> {
    binary_op(&state, OpKind::Add, req).await
}

/// Handler for POST /sub
pub async fn sub_handler(
    State(state): State<AppState>,
    Json(req): Json<BinaryOpRequest>,
) -> Json<BinaryOpResponse> {
    binary_op(&state, OpKind::Sub, req).await
}

/// Handler for POST /mult
pub async fn mult_handler(
    State(state): State<AppState>,
    Json(req): Json<BinaryOpRequest>,
) -> Json<BinaryOpResponse> {
    binary_op(&state, OpKind::Mult, req).await
}

/// Handler for POST /div
pub async fn div_handler(
    State(state): State<AppState>,
    Json(req): Json<BinaryOpRequest>,
) -> Json<BinaryOpResponse> {
    binary_op(&state, OpKind::Div, req).await
}

async fn binary_op(state: &AppState, op: OpKind, req: BinaryOpRequest) -> Json<BinaryOpResponse> {
    if let Some(error_msg) = req.validate() {
        return Json(BinaryOpResponse::failed(&MathError::InvalidRequest(
            error_msg,
        )));
    }

    // Exclusive: a hit promotes the entry, a miss may insert and evict
    let result = {
        let mut db = state.db.write().await;
        db.compute(op, &req.key_a, &req.key_b)
    };

    match result {
        Ok((value, cache_hit)) => Json(BinaryOpResponse::new(value, cache_hit)),
        Err(err) => {
            debug!(%op, key_a = %req.key_a, key_b = %req.key_b, error = %err, "computation failed");
            Json(BinaryOpResponse::failed(&err))
        }
    }
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let db = state.db.read().await;
    Json(StatsResponse::from(db.stats()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
