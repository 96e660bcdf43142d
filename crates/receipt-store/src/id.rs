//! # Receipt Id Sources
//!
//! The store asks an [`IdGenerator`] for a fresh id on every insert. The
//! default is UUID v4; tests plug in a predictable sequence.

use std::sync::atomic::{AtomicU64, Ordering};

use receipt_core::ReceiptId;
use uuid::Uuid;

/// Source of receipt identifiers.
///
/// Implementations must be safe to call from many tasks at once.
pub trait IdGenerator: Send + Sync {
    /// Returns a new identifier.
    fn next_id(&self) -> ReceiptId;
}

/// Random UUID v4 ids (`7fb1377b-b223-49d9-a31a-5a02701dd310`).
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> ReceiptId {
        ReceiptId::new(Uuid::new_v4().to_string())
    }
}

/// Counter-based ids with a fixed prefix: `receipt-1`, `receipt-2`, ...
#[derive(Debug)]
pub struct SequentialGenerator {
    prefix: String,
    next: AtomicU64,
}

impl SequentialGenerator {
    /// Starts counting at 1.
    pub fn new(prefix: impl Into<String>) -> Self {
        SequentialGenerator {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl IdGenerator for SequentialGenerator {
    fn next_id(&self) -> ReceiptId {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        ReceiptId::new(format!("{}-{}", self.prefix, n))
    }
}
