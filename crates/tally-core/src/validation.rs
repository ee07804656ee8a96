//! # Validation Module
//!
//! Eager input validation for the pricing engine.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Basket boundary (Basket::add)                                 │
//! │  ├── Rejects negative quantities                                        │
//! │  └── Rejects fractional quantities on unit-counted products             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Engine entry (compute_receipt)                                │
//! │  ├── Re-validates every basket entry (baskets can be deserialized)      │
//! │  ├── Validates all three rule tables                                    │
//! │  └── Rejects weighed products enrolled in category bundles              │
//! │                                                                         │
//! │  Everything fails BEFORE pricing starts: no partial receipts.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::error::{PricingError, PricingResult};
use crate::rules::PricingRules;
use crate::types::{Basket, Product};

// =============================================================================
// Quantity Validators
// =============================================================================

/// Validates a single quantity against its product.
///
/// ## Rules
/// - Must be non-negative (zero is allowed and prices to zero)
/// - Must be integral unless the product is `sold_by_weight`
///
/// ## Example
/// ```rust
/// use rust_decimal::Decimal;
/// use tally_core::money::Money;
/// use tally_core::types::{Category, Product};
/// use tally_core::validation::validate_quantity;
///
/// let beans = Product::new(1, "Beans Tin", Category::Food, Money::from_major_minor(0, 50));
/// assert!(validate_quantity(&beans, Decimal::new(3, 0)).is_ok());
/// assert!(validate_quantity(&beans, Decimal::new(25, 1)).is_err()); // 2.5 tins
/// ```
pub fn validate_quantity(product: &Product, quantity: Decimal) -> PricingResult<()> {
    if quantity < Decimal::ZERO {
        return Err(PricingError::NegativeQuantity {
            name: product.name.clone(),
            quantity,
        });
    }

    if !product.sold_by_weight && !quantity.is_integer() {
        return Err(PricingError::FractionalQuantity {
            name: product.name.clone(),
            quantity,
        });
    }

    Ok(())
}

/// Validates a whole basket against the rule tables.
///
/// Baskets built through [`Basket::add`] are already well-formed, but a
/// basket can also arrive deserialized, so the engine re-checks every entry
/// here before pricing.
pub fn validate_basket(basket: &Basket, rules: &PricingRules) -> PricingResult<()> {
    for entry in basket.entries() {
        validate_quantity(&entry.product, entry.quantity)?;

        // Open configuration question: a continuous weight has no whole unit
        // for a category bundle to select, so the combination is rejected.
        if entry.product.sold_by_weight && rules.is_bundle_member(&entry.product) {
            return Err(PricingError::WeighedProductInBundle {
                name: entry.product.name.clone(),
            });
        }
    }
    Ok(())
}

// =============================================================================
// Quantity Conversions
// =============================================================================

/// Converts a validated integral quantity into a whole unit count.
pub(crate) fn whole_units(product: &Product, quantity: Decimal) -> PricingResult<u64> {
    quantity
        .to_u64()
        .ok_or_else(|| PricingError::QuantityTooLarge {
            name: product.name.clone(),
            quantity,
        })
}

/// Rounds a quantity up to the display count shown on the receipt row.
///
/// A 0.2 kg entry displays as one row; pricing still uses the exact weight.
pub(crate) fn display_quantity(product: &Product, quantity: Decimal) -> PricingResult<u64> {
    whole_units(product, quantity.ceil())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::rules::CategoryBundleRule;
    use crate::types::Category;
    use rust_decimal_macros::dec;

    fn beans() -> Product {
        Product::new(1, "Beans Tin", Category::Food, Money::from_major_minor(0, 50))
    }

    fn oranges() -> Product {
        Product::weighed(4, "Oranges", Category::Food, Money::from_major_minor(1, 99))
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(&beans(), dec!(0)).is_ok());
        assert!(validate_quantity(&beans(), dec!(6)).is_ok());
        assert!(validate_quantity(&oranges(), dec!(0.2)).is_ok());

        assert!(validate_quantity(&beans(), dec!(-1)).is_err());
        assert!(validate_quantity(&beans(), dec!(2.5)).is_err());
        assert!(validate_quantity(&oranges(), dec!(-0.2)).is_err());
    }

    #[test]
    fn test_validate_basket_rejects_weighed_bundle_member() {
        let mut rules = PricingRules::new();
        rules.set_category_bundle(
            Category::Food,
            CategoryBundleRule::new("Any 3 for £6", 3, Money::from_major_minor(6, 0)),
        );
        rules.set_category_members(Category::Food, [oranges().id]);

        let mut basket = Basket::new();
        basket.add_weighed(&oranges(), dec!(0.2)).unwrap();

        let err = validate_basket(&basket, &rules).unwrap_err();
        assert!(matches!(err, PricingError::WeighedProductInBundle { .. }));
    }

    #[test]
    fn test_display_quantity_rounds_up() {
        assert_eq!(display_quantity(&oranges(), dec!(0.2)).unwrap(), 1);
        assert_eq!(display_quantity(&oranges(), dec!(1.0)).unwrap(), 1);
        assert_eq!(display_quantity(&oranges(), dec!(1.2)).unwrap(), 2);
        assert_eq!(display_quantity(&beans(), dec!(3)).unwrap(), 3);
    }

    #[test]
    fn test_whole_units() {
        assert_eq!(whole_units(&beans(), dec!(6)).unwrap(), 6);
        assert_eq!(whole_units(&beans(), dec!(0)).unwrap(), 0);
    }
}
