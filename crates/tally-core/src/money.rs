//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In f64 arithmetic:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  Weighed produce makes it worse:                                        │
//! │    0.2 kg @ £1.99/kg = £0.398, not representable in integer pence       │
//! │                                                                         │
//! │  OUR SOLUTION: rust_decimal::Decimal                                    │
//! │    Exact base-10 arithmetic, so every extended price, deduction, and    │
//! │    subtotal on the receipt is exact and reproducible                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tally_core::money::Money;
//!
//! // Create from major/minor units (pounds and pence)
//! let price = Money::from_major_minor(10, 99); // £10.99
//!
//! // Arithmetic operations
//! let doubled = price * 2u32;
//! let total = price + Money::from_major_minor(5, 0); // £15.99
//!
//! // NEVER construct from f64 - no such method exists
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount in the store currency (GBP for the demo catalog).
///
/// ## Design Decisions
/// - **Decimal (signed)**: Negative values represent deductions/savings
/// - **Single field tuple struct**: Zero-cost wrapper over `Decimal`
/// - **Total ordering**: The category bundler keys a min-heap on unit price,
///   so `Money` must be `Ord`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Creates a Money value from an exact decimal amount.
    ///
    /// ## Example
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use tally_core::money::Money;
    ///
    /// let price = Money::new(Decimal::new(398, 3)); // £0.398
    /// assert_eq!(price.amount(), Decimal::new(398, 3));
    /// ```
    #[inline]
    pub const fn new(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Creates a Money value from major and minor units (pounds and pence).
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// let price = Money::from_major_minor(10, 99); // £10.99
    ///
    /// let refund = Money::from_major_minor(-5, 50); // -£5.50
    /// assert!(refund.is_negative());
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    /// `from_major_minor(-5, 50)` = -£5.50, not -£4.50
    #[inline]
    pub fn from_major_minor(major: i64, minor: i64) -> Self {
        let pence = if major < 0 {
            major * 100 - minor
        } else {
            major * 100 + minor
        };
        Money(Decimal::new(pence, 2))
    }

    /// Returns the underlying exact decimal amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is strictly negative.
    ///
    /// Savings deductions are always negative or zero; this is what the
    /// receipt invariants check.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Checks if the value is strictly positive.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    /// Returns the absolute value.
    #[inline]
    pub fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Extends a unit price over an exact quantity (integral or weighed).
    ///
    /// ## Example
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use tally_core::money::Money;
    ///
    /// let per_kg = Money::from_major_minor(1, 99); // £1.99/kg
    /// let line = per_kg.extend(Decimal::new(2, 1)); // 0.2 kg
    /// assert_eq!(line.amount(), Decimal::new(398, 3)); // £0.398 exactly
    /// ```
    #[inline]
    pub fn extend(&self, quantity: Decimal) -> Self {
        Money(self.0 * quantity)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// Amounts are rendered to two decimal places; the exact value is kept
/// internally (use [`Money::amount`] when exactness matters).
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        write!(f, "{}£{:.2}", sign, self.0.abs())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Money(amount)
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

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Negation (used to sign savings deductions).
impl Neg for Money {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Money(-self.0)
    }
}

/// Multiplication by a whole unit count (bundle and quantity arithmetic).
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, count: u32) -> Self {
        Money(self.0 * Decimal::from(count))
    }
}

/// Multiplication by u64.
impl Mul<u64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, count: u64) -> Self {
        Money(self.0 * Decimal::from(count))
    }
}

/// Summation over iterators of Money (subtotal folding).
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
