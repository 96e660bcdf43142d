//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With binary floating point:                                            │
//! │    35.35 % 0.25 = 0.09999999999999787  (not 0.10)                       │
//! │    0.1 + 0.2 == 0.3  → false  ❌                                        │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    "35.35" → 3535 cents                                                 │
//! │    3535 % 25 == 10 → not a quarter multiple, exactly                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Format
//! Amounts travel as JSON strings (`"6.49"`), never as JSON numbers, and are
//! parsed straight into cents without an intermediate `f64`.
//!
//! ## Usage
//! ```rust
//! use receipt_core::money::Money;
//!
//! let total: Money = "35.35".parse().unwrap();
//! assert_eq!(total.cents(), 3535);
//! assert!(!total.is_whole());
//! assert_eq!(total.to_decimal_string(), "35.35");
//! ```

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

use crate::error::{ValidationError, ValidationResult};

/// Cents in one major currency unit.
const CENTS_PER_UNIT: i64 = 100;

/// Maximum digits accepted after the decimal point.
const MAX_FRACTION_DIGITS: usize = 2;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: matches the arithmetic used elsewhere; the parser only
///   ever produces non-negative values
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Serde as decimal string**: `Money::from_cents(649)` ⇄ `"6.49"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / CENTS_PER_UNIT
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % CENTS_PER_UNIT).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the amount has no cents, e.g. `9.00`.
    ///
    /// ```rust
    /// use receipt_core::money::Money;
    ///
    /// assert!(Money::from_cents(900).is_whole());
    /// assert!(!Money::from_cents(1001).is_whole());
    /// ```
    #[inline]
    pub const fn is_whole(&self) -> bool {
        self.0 % CENTS_PER_UNIT == 0
    }

    /// Checks if the amount is an exact multiple of `step`.
    ///
    /// A zero `step` only divides zero.
    ///
    /// ```rust
    /// use receipt_core::money::Money;
    ///
    /// let quarter = Money::from_cents(25);
    /// assert!(Money::from_cents(975).is_multiple_of(quarter));
    /// assert!(!Money::from_cents(3535).is_multiple_of(quarter));
    /// ```
    #[inline]
    pub const fn is_multiple_of(&self, step: Money) -> bool {
        if step.0 == 0 {
            return self.0 == 0;
        }
        self.0 % step.0 == 0
    }

    /// Returns the amount in major units as a float.
    ///
    /// Only for rules that are defined in floating point terms. Never compare
    /// the result for equality.
    #[inline]
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / CENTS_PER_UNIT as f64
    }

    /// Renders the plain decimal wire form, always with two fraction digits.
    ///
    /// ```rust
    /// use receipt_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1200).to_decimal_string(), "12.00");
    /// assert_eq!(Money::from_cents(5).to_decimal_string(), "0.05");
    /// ```
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses a non-negative decimal amount such as `"6"`, `"6.4"` or `"6.49"`.
///
/// ## Accepted Grammar
/// ```text
/// amount   := digits ( "." fraction )?
/// digits   := [0-9]+
/// fraction := [0-9]{1,2}
/// ```
/// No sign, exponent, grouping separators or surrounding whitespace. The
/// value is built digit by digit so no binary rounding can creep in.
impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> ValidationResult<Self> {
        let (whole, fraction) = match s.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (s, None),
        };

        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed_amount(s));
        }

        let fraction_cents = match fraction {
            None => 0,
            Some(f)
                if !f.is_empty()
                    && f.len() <= MAX_FRACTION_DIGITS
                    && f.bytes().all(|b| b.is_ascii_digit()) =>
            {
                let digits = digit_value(f).ok_or_else(|| malformed_amount(s))?;
                // "6.4" means 40 cents, not 4
                if f.len() == 1 {
                    digits * 10
                } else {
                    digits
                }
            }
            Some(_) => return Err(malformed_amount(s)),
        };

        digit_value(whole)
            .and_then(|units| units.checked_mul(CENTS_PER_UNIT))
            .and_then(|cents| cents.checked_add(fraction_cents))
            .map(Money)
            .ok_or_else(|| ValidationError::OutOfRange {
                field: "amount".to_string(),
                min: 0,
                max: i64::MAX / CENTS_PER_UNIT,
            })
    }
}

/// Folds an all-digit ASCII string into an integer, `None` on overflow.
fn digit_value(digits: &str) -> Option<i64> {
    digits.bytes().try_fold(0i64, |acc, b| {
        acc.checked_mul(10)?.checked_add(i64::from(b - b'0'))
    })
}

fn malformed_amount(raw: &str) -> ValidationError {
    ValidationError::invalid_format(
        "amount",
        format!("'{raw}' is not a decimal amount with at most two decimal places"),
    )
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

/// Serializes as the decimal wire string (`"6.49"`).
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_decimal_string())
    }
}

/// Deserializes from the decimal wire string; JSON numbers are rejected.
impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
