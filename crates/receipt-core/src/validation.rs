//! # Validation Module
//!
//! Parsers for the free-text date and time fields of a receipt.
//!
//! ## Where Validation Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: JSON decoding (HTTP app)                                     │
//! │  ├── Required fields present                                           │
//! │  └── Amounts are decimal strings (Money::from_str)                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Scoring (this crate)                                         │
//! │  └── THIS MODULE: date/time parsing                                    │
//! │      failure here is NOT an error to the caller, the rule just         │
//! │      contributes zero points                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use receipt_core::validation::{parse_purchase_date, parse_purchase_time};
//! use chrono::{Datelike, Timelike};
//!
//! assert_eq!(parse_purchase_date("2022-01-01").unwrap().day(), 1);
//! assert_eq!(parse_purchase_time("14:33").unwrap().hour(), 14);
//! assert!(parse_purchase_date("2022-02-30").is_err());
//! ```

use chrono::{NaiveDate, NaiveTime};

use crate::error::{ValidationError, ValidationResult};
use crate::{DATE_FORMAT, TIME_FORMAT};

/// Digit positions are `d`; every other byte must match literally.
const DATE_SHAPE: &str = "dddd-dd-dd";
const TIME_SHAPE: &str = "dd:dd";

/// Checks `raw` against a fixed-width shape before chrono sees it.
///
/// chrono accepts one-digit fields and skips leading whitespace, so
/// `2022-1-3` and ` 14:33` would otherwise parse.
fn has_shape(raw: &str, shape: &str) -> bool {
    raw.len() == shape.len()
        && raw.bytes().zip(shape.bytes()).all(|(b, s)| match s {
            b'd' => b.is_ascii_digit(),
            _ => b == s,
        })
}

/// Parses a `YYYY-MM-DD` purchase date.
///
/// Every field is zero-padded. Calendar-invalid dates (`2022-02-30`) are
/// rejected.
pub fn parse_purchase_date(raw: &str) -> ValidationResult<NaiveDate> {
    if !has_shape(raw, DATE_SHAPE) {
        return Err(ValidationError::invalid_format(
            "purchaseDate",
            format!("expected YYYY-MM-DD, got '{raw}'"),
        ));
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|e| {
        ValidationError::invalid_format("purchaseDate", format!("expected YYYY-MM-DD: {e}"))
    })
}

/// Parses a zero-padded `HH:MM` 24-hour purchase time.
pub fn parse_purchase_time(raw: &str) -> ValidationResult<NaiveTime> {
    if !has_shape(raw, TIME_SHAPE) {
        return Err(ValidationError::invalid_format(
            "purchaseTime",
            format!("expected HH:MM, got '{raw}'"),
        ));
    }
    NaiveTime::parse_from_str(raw, TIME_FORMAT).map_err(|e| {
        ValidationError::invalid_format("purchaseTime", format!("expected HH:MM: {e}"))
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
