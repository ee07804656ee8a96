//! # Line Pricer
//!
//! Prices a single product line against its own multi-buy rules. No
//! cross-product interaction happens here; that is the category bundler's
//! job.
//!
//! ## Algorithm
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  remaining = basket quantity                                            │
//! │                                                                         │
//! │  for each rule, in table order:                                         │
//! │      bundles   = floor(remaining / N)      (skip rule if 0)             │
//! │      remaining = remaining mod N                                        │
//! │      payable   = bundles × M × unit_price   ("N for M")                 │
//! │                | bundles × P                ("N for £P")                │
//! │      savings   = payable - bundles × N × unit_price   (<= 0)            │
//! │                                                                         │
//! │  remainder: remaining × unit_price, undiscounted                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rules are applied sequentially against the shrinking remainder: a unit
//! discounted by an earlier rule is never reconsidered by a later one.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::error::{PricingError, PricingResult};
use crate::money::Money;
use crate::receipt::SavingsItem;
use crate::rules::{MultiBuyOffer, MultiBuyRule};
use crate::types::Product;

/// The result of pricing one product line.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct LinePrice {
    /// Total payable for the line, discounts applied.
    pub total: Money,

    /// One entry per rule that applied at least once.
    pub savings: Vec<SavingsItem>,
}

/// Prices one product line against its multi-buy rules.
///
/// The quantity has already been validated (non-negative, integral unless
/// weighed); rule trigger quantities have been validated positive.
pub(crate) fn price_line(
    product: &Product,
    quantity: Decimal,
    rules: &[MultiBuyRule],
) -> PricingResult<LinePrice> {
    let mut remaining = quantity;
    let mut total = Money::zero();
    let mut savings = Vec::new();

    for rule in rules {
        let trigger = Decimal::from(rule.trigger_quantity);
        let bundles = (remaining / trigger).floor();
        if bundles.is_zero() {
            // Not enough units left to trigger this rule; remainder unchanged
            continue;
        }
        remaining %= trigger;

        let bundle_count =
            bundles
                .to_u64()
                .ok_or_else(|| PricingError::QuantityTooLarge {
                    name: product.name.clone(),
                    quantity,
                })?;

        let payable = match rule.offer {
            MultiBuyOffer::ChargeFor(payable_units) => {
                (product.unit_price * payable_units) * bundle_count
            }
            MultiBuyOffer::FixedPrice(price) => price * bundle_count,
        };
        let original = (product.unit_price * rule.trigger_quantity) * bundle_count;

        savings.push(SavingsItem {
            name: rule.name.clone(),
            count: bundle_count,
            deduction: payable - original,
        });
        total += payable;
    }

    // Whatever the rules left over is charged at face value
    total += product.unit_price.extend(remaining);

    Ok(LinePrice { total, savings })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;
    use rust_decimal_macros::dec;

    fn beans() -> Product {
        Product::new(1, "Beans Tin", Category::Food, Money::from_major_minor(0, 50))
    }

    fn cola() -> Product {
        Product::new(3, "Coca-cola", Category::Drink, Money::from_major_minor(0, 70))
    }

    fn beans_3_for_2() -> Vec<MultiBuyRule> {
        vec![MultiBuyRule::charge_for("Beans 3 for 2", 3, 2)]
    }

    fn coke_2_for_1_pound() -> Vec<MultiBuyRule> {
        vec![MultiBuyRule::fixed_price(
            "Coke 2 for £1",
            2,
            Money::from_major_minor(1, 0),
        )]
    }

    #[test]
    fn test_zero_quantity_prices_to_zero_with_no_savings() {
        let line = price_line(&beans(), dec!(0), &beans_3_for_2()).unwrap();
        assert!(line.total.is_zero());
        assert!(line.savings.is_empty());
    }

    #[test]
    fn test_charge_for_rule_below_trigger() {
        // 3 for 2 at £0.50: quantities 1 and 2 get no discount
        let line = price_line(&beans(), dec!(1), &beans_3_for_2()).unwrap();
        assert_eq!(line.total, Money::from_major_minor(0, 50));
        assert!(line.savings.is_empty());

        let line = price_line(&beans(), dec!(2), &beans_3_for_2()).unwrap();
        assert_eq!(line.total, Money::from_major_minor(1, 0));
        assert!(line.savings.is_empty());
    }

    #[test]
    fn test_charge_for_rule_at_trigger() {
        // 3 tins charged as 2: £1.00, saving £0.50
        let line = price_line(&beans(), dec!(3), &beans_3_for_2()).unwrap();
        assert_eq!(line.total, Money::from_major_minor(1, 0));
        assert_eq!(line.savings.len(), 1);
        assert_eq!(line.savings[0].count, 1);
        assert_eq!(line.savings[0].deduction, -Money::from_major_minor(0, 50));
    }

    #[test]
    fn test_charge_for_rule_with_undiscounted_remainder() {
        // 4 tins: one bundle of 3-for-2 plus one at face value
        let line = price_line(&beans(), dec!(4), &beans_3_for_2()).unwrap();
        assert_eq!(line.total, Money::from_major_minor(1, 50));
        assert_eq!(line.savings[0].deduction, -Money::from_major_minor(0, 50));
    }

    #[test]
    fn test_charge_for_rule_applies_per_bundle() {
        // 6 tins: two bundles, one savings entry with count 2
        let line = price_line(&beans(), dec!(6), &beans_3_for_2()).unwrap();
        assert_eq!(line.total, Money::from_major_minor(2, 0));
        assert_eq!(line.savings.len(), 1);
        assert_eq!(line.savings[0].count, 2);
        assert_eq!(line.savings[0].deduction, -Money::from_major_minor(1, 0));
    }

    #[test]
    fn test_fixed_price_rule() {
        // 2 for £1 at £0.70 each
        let line = price_line(&cola(), dec!(1), &coke_2_for_1_pound()).unwrap();
        assert_eq!(line.total, Money::from_major_minor(0, 70));
        assert!(line.savings.is_empty());

        let line = price_line(&cola(), dec!(2), &coke_2_for_1_pound()).unwrap();
        assert_eq!(line.total, Money::from_major_minor(1, 0));
        assert_eq!(line.savings[0].deduction, -Money::from_major_minor(0, 40));

        let line = price_line(&cola(), dec!(4), &coke_2_for_1_pound()).unwrap();
        assert_eq!(line.total, Money::from_major_minor(2, 0));
        assert_eq!(line.savings[0].count, 2);
        assert_eq!(line.savings[0].deduction, -Money::from_major_minor(0, 80));
    }

    #[test]
    fn test_no_rules_prices_at_face_value() {
        let line = price_line(&beans(), dec!(5), &[]).unwrap();
        assert_eq!(line.total, Money::from_major_minor(2, 50));
        assert!(line.savings.is_empty());
    }

    #[test]
    fn test_multiple_rules_apply_in_table_order_without_stacking() {
        // First rule consumes 3 of 5 units; second sees only the remainder.
        // Table order is deliberately preserved even when the second rule
        // would have saved more.
        let rules = vec![
            MultiBuyRule::charge_for("Beans 3 for 2", 3, 2),
            MultiBuyRule::fixed_price("Beans 2 for £0.60", 2, Money::from_major_minor(0, 60)),
        ];
        let line = price_line(&beans(), dec!(5), &rules).unwrap();

        // 3-for-2 bundle: £1.00, then 2-for-£0.60 on the remaining pair
        assert_eq!(line.total, Money::from_major_minor(1, 60));
        assert_eq!(line.savings.len(), 2);
        assert_eq!(line.savings[0].name, "Beans 3 for 2");
        assert_eq!(line.savings[0].deduction, -Money::from_major_minor(0, 50));
        assert_eq!(line.savings[1].name, "Beans 2 for £0.60");
        assert_eq!(line.savings[1].deduction, -Money::from_major_minor(0, 40));
    }

    #[test]
    fn test_weighed_quantity_remainder_is_priced_exactly() {
        // A weighed product with no applicable bundle: the fractional
        // remainder is priced at the exact extended rate
        let oranges = Product::weighed(4, "Oranges", Category::Food, Money::from_major_minor(1, 99));
        let line = price_line(&oranges, dec!(0.2), &[]).unwrap();
        assert_eq!(line.total.amount(), dec!(0.398));
    }
}
