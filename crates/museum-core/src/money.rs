//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  Naive display (divide by 100, append ".00"):                           │
//! │    2550 cents / 100 = 25.5 → "$25.5.00"  ❌ WRONG!                      │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Every price in the catalog is an i64 cent amount, and display        │
//! │    is true fixed-point: 2550 → "$25.50"                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use museum_core::money::Money;
//!
//! let admission = Money::from_cents(3000); // $30.00
//! let movie = Money::from_cents(1000);     // $10.00
//!
//! let total = admission + movie;
//! assert_eq!(total.to_string(), "$40.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64**: matches the raw `price_in_cents` fields in the serialized
///   catalog; catalog prices are non-negative, receipts only ever add
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support so quotes can cross an API boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use museum_core::money::Money;
    ///
    /// let price = Money::from_cents(2550); // Represents $25.50
    /// assert_eq!(price.cents(), 2550);
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
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    ///
    /// A free ticket prices to `Money::zero()`, which is a legitimate
    /// success value, never an error signal.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

/// Display implementation renders exact fixed-point currency.
///
/// 2550 cents is "$25.50", never "$25.5" or "$25.00". This is the
/// formatting used on receipts.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=), used by the receipt total accumulator.
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(2550);
        assert_eq!(money.cents(), 2550);
        assert_eq!(money.dollars(), 25);
        assert_eq!(money.cents_part(), 50);
    }

    #[test]
    fn test_display_is_fixed_point() {
        assert_eq!(Money::from_cents(3000).to_string(), "$30.00");
        assert_eq!(Money::from_cents(2550).to_string(), "$25.50");
        assert_eq!(Money::from_cents(505).to_string(), "$5.05");
        assert_eq!(Money::from_cents(99).to_string(), "$0.99");
        assert_eq!(Money::from_cents(0).to_string(), "$0.00");
    }

    #[test]
    fn test_addition() {
        let a = Money::from_cents(3000);
        let b = Money::from_cents(1000);
        assert_eq!((a + b).cents(), 4000);

        let mut total = Money::zero();
        total += a;
        total += b;
        assert_eq!(total.cents(), 4000);
    }

    #[test]
    fn test_zero() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert_eq!(zero, Money::default());
        assert!(!Money::from_cents(1).is_zero());
    }
}
