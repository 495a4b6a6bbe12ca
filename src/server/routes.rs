use crate::contract::{self, ContractSpec, MAX_CONTRACTS};
use crate::errors::ServiceError;
use crate::payoff::{self, AnalysisResult};
use crate::state::{AppState, CounterSnapshot};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::Json;
use portable_atomic::Ordering::Relaxed;
use smallvec::SmallVec;
use std::sync::Arc;

type ContractBatch = SmallVec<[ContractSpec; MAX_CONTRACTS]>;

/// POST /analyze -- risk/reward analytics for up to four contracts.
/// Body problems and oversized baskets are rejected before the engine runs.
pub async fn post_analyze(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ContractBatch>, JsonRejection>,
) -> Result<Json<AnalysisResult>, ServiceError> {
    let request_id = uuid::Uuid::new_v4();

    let contracts = match payload.map_err(ServiceError::from).and_then(|Json(batch)| {
        contract::validate_batch(&batch)?;
        Ok(batch)
    }) {
        Ok(batch) => batch,
        Err(e) => {
            state.counters.requests_rejected.fetch_add(1, Relaxed);
            tracing::warn!(request_id = %request_id, error = %e, "analysis request rejected");
            return Err(e);
        }
    };

    for (index, c) in contracts.iter().enumerate() {
        tracing::debug!(
            request_id = %request_id,
            index,
            kind = %c.kind,
            side = %c.side,
            strike = c.strike_price,
            ask = c.ask,
            "contract accepted"
        );
    }

    let result = payoff::analyze(&contracts);
    state.counters.analyses_computed.fetch_add(1, Relaxed);

    tracing::info!(
        request_id = %request_id,
        contracts = contracts.len(),
        max_profit = result.max_profit,
        max_loss = result.max_loss,
        break_evens = result.break_even_points.len(),
        "analysis computed"
    );

    Ok(Json(result))
}

/// GET /health
pub async fn health() -> &'static str {
    "ok"
}

/// GET /api/counters -- request counters (lock-free reads)
pub async fn get_counters(State(state): State<Arc<AppState>>) -> Json<CounterSnapshot> {
    Json(state.counters.snapshot())
}
