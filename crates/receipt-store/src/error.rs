//! # Store Error Types
//!
//! Error types for receipt store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  ReceiptStore::points("unknown")                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError::NotFound (this module)                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError::NotFound (HTTP app) → 404                                   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Receipt store errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No receipt was stored under this id.
    ///
    /// ## When This Occurs
    /// - The id was never returned by `insert`
    /// - The id was mistyped
    #[error("Receipt not found: {id}")]
    NotFound { id: String },

    /// The id source kept returning ids that are already taken.
    ///
    /// Only reachable with a faulty [`IdGenerator`](crate::IdGenerator).
    #[error("No unused receipt id after {attempts} attempts")]
    IdCollision { attempts: usize },
}

impl StoreError {
    /// Creates a NotFound error for the given id.
    pub fn not_found(id: impl Into<String>) -> Self {
        StoreError::NotFound { id: id.into() }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
