//! # receipt-store: Receipt Store for Receipt Points
//!
//! Keeps scored receipts in memory under generated identifiers.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Receipt Points Data Flow                            │
//! │                                                                         │
//! │  POST /receipts/process                                                │
//! │       │  Receipt ──► ScoredReceipt::new (receipt-core)                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  receipt-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌──────────────────────────────────┐    │   │
//! │  │   │  IdGenerator  │───►│  ReceiptStore                    │    │   │
//! │  │   │  (id.rs)      │    │  RwLock<HashMap<id, receipt>>    │    │   │
//! │  │   │  UUID v4      │    │  insert / points / get           │    │   │
//! │  │   └───────────────┘    └──────────────────────────────────┘    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       ▲                                                                 │
//! │       │  GET /receipts/{id}/points                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use receipt_core::{Item, Money, Receipt, ScoredReceipt};
//! use receipt_store::ReceiptStore;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let store = ReceiptStore::new();
//! let receipt = Receipt {
//!     retailer: "Target".to_string(),
//!     purchase_date: "2022-01-01".to_string(),
//!     purchase_time: "13:01".to_string(),
//!     items: vec![Item::new("Pepsi - 12-oz", Money::from_cents(125))],
//!     total: Money::from_cents(125),
//! };
//!
//! let id = store.insert(ScoredReceipt::new(receipt)).await.unwrap();
//! assert_eq!(store.points(id.as_str()).await.unwrap(), 37);
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod id;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use id::{IdGenerator, SequentialGenerator, UuidGenerator};
pub use store::{ReceiptStore, StoredReceipt};
