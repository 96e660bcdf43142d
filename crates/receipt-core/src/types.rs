//! # Domain Types
//!
//! Core domain types used throughout the receipt points service.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Receipt      │   │      Item       │   │  ScoredReceipt  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  retailer       │◄──│  short_descr.   │   │  receipt        │       │
//! │  │  purchase_date  │   │  price (Money)  │   │  points (rules) │       │
//! │  │  purchase_time  │   └─────────────────┘   └─────────────────┘       │
//! │  │  items          │                                                    │
//! │  │  total (Money)  │   ┌─────────────────┐                              │
//! │  └─────────────────┘   │   ReceiptId     │  assigned by the store      │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Lifecycle
//! `Receipt` (caller data) → `ScoredReceipt` (points attached, immutable) →
//! stored under a `ReceiptId`.
//!
//! Dates and times are kept as the caller sent them. A malformed value is not
//! a decoding error; it simply earns nothing from the date and time rules.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use ts_rs::TS;

use crate::money::Money;
use crate::scoring;

// =============================================================================
// Receipt Id
// =============================================================================

/// Opaque identifier assigned to a receipt when it is stored.
/// Serializes as the bare string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReceiptId(String);

impl ReceiptId {
    /// Wraps an identifier produced by an id source.
    pub fn new(id: impl Into<String>) -> Self {
        ReceiptId(id.into())
    }

    /// Returns the identifier as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lets maps keyed by `ReceiptId` be queried with a plain `&str`.
impl Borrow<str> for ReceiptId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// Item
// =============================================================================

/// A purchased line entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Item {
    /// Free-form text; may carry leading/trailing whitespace.
    pub short_description: String,

    /// Line price, `"6.49"` on the wire.
    #[ts(type = "string")]
    pub price: Money,
}

impl Item {
    /// Creates an item from a description and price.
    pub fn new(short_description: impl Into<String>, price: Money) -> Self {
        Item {
            short_description: short_description.into(),
            price,
        }
    }

    /// The description with surrounding whitespace removed.
    #[inline]
    pub fn trimmed_description(&self) -> &str {
        self.short_description.trim()
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// A submitted purchase record, before scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Receipt {
    /// Name of the merchant.
    pub retailer: String,

    /// `YYYY-MM-DD`, unvalidated.
    pub purchase_date: String,

    /// `HH:MM` (24-hour), unvalidated.
    pub purchase_time: String,

    /// Line items in submission order.
    pub items: Vec<Item>,

    /// Supplied total. Trusted as-is; not checked against the item sum.
    #[ts(type = "string")]
    pub total: Money,
}

impl Receipt {
    /// Sum of the item prices (informational; scoring uses `total`).
    pub fn items_sum(&self) -> Money {
        self.items.iter().map(|item| item.price).sum()
    }
}

// =============================================================================
// Scored Receipt
// =============================================================================

/// A receipt together with the points the scoring rules awarded it.
///
/// The only constructor runs the scoring engine, so `points` always agrees
/// with the rules and cannot be altered afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredReceipt {
    #[serde(flatten)]
    receipt: Receipt,
    points: u64,
}

impl ScoredReceipt {
    /// Scores `receipt` and freezes the result.
    pub fn new(receipt: Receipt) -> Self {
        let points = scoring::score(&receipt);
        ScoredReceipt { receipt, points }
    }

    /// The receipt as submitted.
    #[inline]
    pub fn receipt(&self) -> &Receipt {
        &self.receipt
    }

    /// Points awarded at scoring time.
    #[inline]
    pub fn points(&self) -> u64 {
        self.points
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
