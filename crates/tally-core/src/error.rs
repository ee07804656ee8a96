//! # Error Types
//!
//! Domain-specific error types for tally-core.
//!
//! ## Error Taxonomy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  PricingError                                                           │
//! │  ├── Configuration errors  - the rule tables are malformed              │
//! │  │     (bad trigger quantity, unpaired category rule/membership,        │
//! │  │      weighed product enrolled in a unit-count bundle)                │
//! │  └── Quantity errors       - the basket itself is invalid               │
//! │        (negative, or fractional for a unit-counted product)             │
//! │                                                                         │
//! │  All of these are detected EAGERLY, before any pricing happens.         │
//! │  The engine never returns a partial Receipt.                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (rule name, product name, quantity)
//! 3. Errors are enum variants, never String
//! 4. No retries: the engine is pure, so retrying reproduces the same error

use rust_decimal::Decimal;
use thiserror::Error;

// =============================================================================
// Pricing Error
// =============================================================================

/// Errors raised by the basket pricing engine.
///
/// Configuration variants mean the caller wired the rule tables incorrectly;
/// quantity variants mean the basket snapshot itself is invalid. Either way
/// the whole computation fails fast - there is no partial-success mode.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingError {
    /// A rule's trigger quantity is zero.
    ///
    /// ## When This Occurs
    /// "Buy 0 for ..." is meaningless and would make the bundle arithmetic
    /// divide by zero, so it is rejected before pricing starts.
    #[error("rule '{rule}' has a non-positive trigger quantity")]
    InvalidTriggerQuantity { rule: String },

    /// A category has a bundle rule but no membership set.
    ///
    /// Membership is explicit: a bundle rule without a set of eligible
    /// product ids is ambiguous configuration, not an empty promotion.
    #[error("category {category} has a bundle rule but no membership set")]
    MissingMembershipSet { category: String },

    /// A category has a membership set but no bundle rule to price it.
    #[error("category {category} has a membership set but no bundle rule")]
    MissingBundleRule { category: String },

    /// A weighed (per-kg) product is enrolled in a unit-count category bundle.
    ///
    /// ## When This Occurs
    /// Category bundles select whole units; a continuous weight has no unit
    /// to select. Product requirements have not defined this combination, so
    /// it is rejected as configuration rather than silently truncated.
    #[error("weighed product '{name}' cannot be a member of a category bundle")]
    WeighedProductInBundle { name: String },

    /// A basket quantity is negative.
    #[error("negative quantity {quantity} for product '{name}'")]
    NegativeQuantity { name: String, quantity: Decimal },

    /// A fractional quantity was given for a product sold by unit count.
    ///
    /// ## User Workflow
    /// ```text
    /// Basket entry: Beans Tin, quantity 2.5
    ///      │
    ///      ▼
    /// Beans are not sold by weight
    ///      │
    ///      ▼
    /// FractionalQuantity { name: "Beans Tin", quantity: 2.5 }
    /// ```
    #[error("fractional quantity {quantity} for unit-counted product '{name}'")]
    FractionalQuantity { name: String, quantity: Decimal },

    /// A quantity is too large to expand into whole units.
    #[error("quantity {quantity} for product '{name}' is too large")]
    QuantityTooLarge { name: String, quantity: Decimal },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with PricingError.
pub type PricingResult<T> = Result<T, PricingError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_error_messages() {
        let err = PricingError::InvalidTriggerQuantity {
            rule: "Beans 3 for 2".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "rule 'Beans 3 for 2' has a non-positive trigger quantity"
        );

        let err = PricingError::FractionalQuantity {
            name: "Beans Tin".to_string(),
            quantity: dec!(2.5),
        };
        assert_eq!(
            err.to_string(),
            "fractional quantity 2.5 for unit-counted product 'Beans Tin'"
        );
    }

    #[test]
    fn test_membership_pairing_messages() {
        let err = PricingError::MissingMembershipSet {
            category: "Ale".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "category Ale has a bundle rule but no membership set"
        );
    }
}
