//! Request handlers.
//!
//! ## Request Flow
//! ```text
//! POST /receipts/process
//!      │  raw body bytes
//!      ▼
//! serde_json::from_slice::<Receipt>   ── any failure ──► 400
//!      │
//!      ▼
//! ScoredReceipt::new (seven rules)    ── never fails
//!      │
//!      ▼
//! ReceiptStore::insert                ── id collision ─► 500
//!      │
//!      ▼
//! {"id": "..."}
//! ```
//!
//! The body is taken as bytes rather than through the `Json` extractor so a
//! missing `Content-Type` or a missing field is still a plain 400.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};
use receipt_core::{scoring, Receipt, ScoredReceipt};
use tracing::{debug, info, Level};

use crate::dto::{HealthResponse, PointsResponse, ProcessReceiptResponse};
use crate::error::ApiResult;
use crate::AppState;

/// `POST /receipts/process`
pub async fn process_receipt(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> ApiResult<Json<ProcessReceiptResponse>> {
    let receipt: Receipt = serde_json::from_slice(&body)?;

    if tracing::enabled!(Level::DEBUG) {
        let breakdown = scoring::breakdown(&receipt);
        debug!(
            retailer = %receipt.retailer,
            total = %receipt.total,
            rule1_retailer_name = breakdown.retailer_name,
            rule2_round_total = breakdown.round_total,
            rule3_quarter_multiple = breakdown.quarter_multiple,
            rule4_item_pairs = breakdown.item_pairs,
            rule5_description_length = breakdown.description_length,
            rule6_odd_day = breakdown.odd_day,
            rule7_bonus_hour = breakdown.bonus_hour,
            "Scored receipt"
        );
    }

    let scored = ScoredReceipt::new(receipt);
    let points = scored.points();
    let id = state.store.insert(scored).await?;

    info!(id = %id, points, "Receipt processed");
    Ok(Json(ProcessReceiptResponse { id }))
}

/// `GET /receipts/{id}/points`
pub async fn get_points(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<PointsResponse>> {
    let points = state.store.points(&id).await?;
    Ok(Json(PointsResponse { points }))
}

/// `GET /health`
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        receipts: state.store.len().await,
    })
}
