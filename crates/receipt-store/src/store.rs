//! # Receipt Store
//!
//! Keyed in-memory collection of scored receipts.
//!
//! ## Concurrency
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    RwLock<HashMap<ReceiptId, StoredReceipt>>            │
//! │                                                                         │
//! │  insert()  ──► write lock ──► draw id ──► vacant? ──► store ──► unlock │
//! │                                  ▲           │ no                       │
//! │                                  └───────────┘ (bounded retries)        │
//! │                                                                         │
//! │  points()  ──► read lock ──► get(id) ──► unlock                        │
//! │  get()     ──► read lock ──► get(id).clone() ──► unlock                │
//! │                                                                         │
//! │  Writers are serialized against each other and against readers, so a   │
//! │  reader sees an entry either fully stored or not at all.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Entries live for the lifetime of the process. There is no update or
//! delete.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use receipt_core::{ReceiptId, ScoredReceipt};
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::error::{StoreError, StoreResult};
use crate::id::{IdGenerator, UuidGenerator};

/// Ids drawn per insert before giving up.
pub const MAX_ID_ATTEMPTS: usize = 8;

// =============================================================================
// Stored Receipt
// =============================================================================

/// A scored receipt as kept by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredReceipt {
    /// Assigned at insertion, never changes.
    pub id: ReceiptId,

    #[serde(flatten)]
    scored: ScoredReceipt,
}

impl StoredReceipt {
    /// The scored receipt.
    #[inline]
    pub fn scored(&self) -> &ScoredReceipt {
        &self.scored
    }

    /// Points awarded at scoring time.
    #[inline]
    pub fn points(&self) -> u64 {
        self.scored.points()
    }
}

// =============================================================================
// Receipt Store
// =============================================================================

/// Shared store of scored receipts.
///
/// Share it between request handlers with `Arc<ReceiptStore>`; callers never
/// see the backing map.
pub struct ReceiptStore {
    receipts: RwLock<HashMap<ReceiptId, StoredReceipt>>,
    ids: Arc<dyn IdGenerator>,
}

impl ReceiptStore {
    /// Creates an empty store issuing UUID v4 ids.
    pub fn new() -> Self {
        Self::with_generator(Arc::new(UuidGenerator))
    }

    /// Creates an empty store with a custom id source.
    pub fn with_generator(ids: Arc<dyn IdGenerator>) -> Self {
        ReceiptStore {
            receipts: RwLock::new(HashMap::new()),
            ids,
        }
    }

    /// Stores a scored receipt under a fresh id and returns the id.
    ///
    /// ## Errors
    /// [`StoreError::IdCollision`] if the id source yields only taken ids
    /// [`MAX_ID_ATTEMPTS`] times in a row.
    pub async fn insert(&self, scored: ScoredReceipt) -> StoreResult<ReceiptId> {
        let mut receipts = self.receipts.write().await;

        for attempt in 1..=MAX_ID_ATTEMPTS {
            let id = self.ids.next_id();
            match receipts.entry(id) {
                Entry::Vacant(slot) => {
                    let id = slot.key().clone();
                    debug!(id = %id, points = scored.points(), "Receipt stored");
                    slot.insert(StoredReceipt {
                        id: id.clone(),
                        scored,
                    });
                    return Ok(id);
                }
                Entry::Occupied(taken) => {
                    warn!(id = %taken.key(), attempt, "Generated receipt id already in use");
                }
            }
        }

        Err(StoreError::IdCollision {
            attempts: MAX_ID_ATTEMPTS,
        })
    }

    /// Returns the points of the receipt stored under `id`.
    pub async fn points(&self, id: &str) -> StoreResult<u64> {
        self.receipts
            .read()
            .await
            .get(id)
            .map(StoredReceipt::points)
            .ok_or_else(|| StoreError::not_found(id))
    }

    /// Returns a snapshot of the receipt stored under `id`.
    pub async fn get(&self, id: &str) -> StoreResult<StoredReceipt> {
        self.receipts
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(id))
    }

    /// Number of stored receipts.
    pub async fn len(&self) -> usize {
        self.receipts.read().await.len()
    }

    /// Whether nothing has been stored yet.
    pub async fn is_empty(&self) -> bool {
        self.receipts.read().await.is_empty()
    }
}

impl Default for ReceiptStore {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
