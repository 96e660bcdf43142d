//! # receipt-core: Pure Business Logic for Receipt Points
//!
//! This crate is the **heart** of the receipt points service. It holds the
//! receipt data model and the scoring engine as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Receipt Points Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    HTTP API (axum)                              │   │
//! │  │    POST /receipts/process        GET /receipts/{id}/points      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ receipt-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  scoring  │  │ validation│  │   │
//! │  │   │  Receipt  │  │   Money   │  │  7 rules  │  │ date/time │  │   │
//! │  │   │   Item    │  │  (cents)  │  │ breakdown │  │  parsing  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO LOGGING • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                receipt-store (in-memory store)                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Receipt, Item, ScoredReceipt, ReceiptId)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`scoring`] - The seven points rules
//! - [`validation`] - Date and time parsing
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use receipt_core::{Item, Receipt, ScoredReceipt};
//!
//! let receipt = Receipt {
//!     retailer: "M&M Corner Market".to_string(),
//!     purchase_date: "2022-03-20".to_string(),
//!     purchase_time: "14:33".to_string(),
//!     items: vec![Item::new("Gatorade", "2.25".parse().unwrap()); 4],
//!     total: "9.00".parse().unwrap(),
//! };
//!
//! let scored = ScoredReceipt::new(receipt);
//! assert_eq!(scored.points(), 109);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod scoring;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{ValidationError, ValidationResult};
pub use money::Money;
pub use scoring::{score, ScoreBreakdown};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Wire format of `purchaseDate` (chrono syntax).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Wire format of `purchaseTime` (chrono syntax, 24-hour clock).
pub const TIME_FORMAT: &str = "%H:%M";
