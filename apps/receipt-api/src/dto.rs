//! Response bodies.
//!
//! Request bodies are the core [`Receipt`](receipt_core::Receipt) type itself,
//! so the wire format and the scoring input cannot drift apart.

use receipt_core::ReceiptId;
use serde::{Deserialize, Serialize};

/// `POST /receipts/process` → `{"id": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessReceiptResponse {
    pub id: ReceiptId,
}

/// `GET /receipts/{id}/points` → `{"points": 28}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: u64,
}

/// `GET /health` → `{"status": "ok", "receipts": 3}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub receipts: usize,
}
