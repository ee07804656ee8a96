//! # Basket Engine
//!
//! Orchestrates pricing of a whole basket into a Receipt.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       compute_receipt                                   │
//! │                                                                         │
//! │  validate rule tables + basket (fail fast, no partial receipt)          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  for each entry, ascending product id:                                  │
//! │       ├── always: emit line item, fold into product subtotal            │
//! │       ├── bundle member?  ──► buffer into per-category group            │
//! │       └── otherwise       ──► line pricer, fold price + savings         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  for each category group, in category order:                            │
//! │       └── category bundler, fold price + savings                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Receipt (owned, freshly built - no state survives the call)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A product routed into category pricing never goes through the line
//! pricer: its per-product multi-buy rules, if any, are not consulted.

use std::collections::BTreeMap;

use crate::bundle::price_category_group;
use crate::error::{PricingError, PricingResult};
use crate::line::price_line;
use crate::receipt::{LineItem, Receipt};
use crate::rules::PricingRules;
use crate::types::{Basket, BasketEntry, Category, Product};
use crate::validation::{display_quantity, validate_basket, whole_units};

/// Prices a basket against the rule tables and assembles the receipt.
///
/// Pure and synchronous: identical inputs always produce identical receipts.
///
/// ## Errors
/// Fails before any pricing if the rule tables are malformed
/// (configuration) or a basket quantity is invalid. There is no
/// partial-success mode.
///
/// ## Example
/// ```rust
/// use tally_core::engine::compute_receipt;
/// use tally_core::money::Money;
/// use tally_core::rules::PricingRules;
/// use tally_core::types::{Basket, Category, Product};
///
/// let beans = Product::new(1, "Beans Tin", Category::Food, Money::from_major_minor(0, 50));
/// let mut basket = Basket::new();
/// basket.add_units(&beans, 2);
///
/// let receipt = compute_receipt(&basket, &PricingRules::new()).unwrap();
/// assert_eq!(receipt.grand_total(), Money::from_major_minor(1, 0));
/// ```
pub fn compute_receipt(basket: &Basket, rules: &PricingRules) -> PricingResult<Receipt> {
    rules.validate()?;
    validate_basket(basket, rules)?;

    let mut receipt = Receipt::new();
    let mut groups: BTreeMap<Category, Vec<(&Product, u64)>> = BTreeMap::new();

    for entry in basket.entries() {
        add_line_item(&mut receipt, entry)?;

        if rules.is_bundle_member(&entry.product) {
            // Collected now, priced after the whole basket has been seen
            let units = whole_units(&entry.product, entry.quantity)?;
            groups
                .entry(entry.product.category)
                .or_default()
                .push((&entry.product, units));
        } else {
            let line = price_line(
                &entry.product,
                entry.quantity,
                rules.product_rules(entry.product.id),
            )?;
            receipt.add_to_grand_total(line.total);
            for saving in line.savings {
                receipt.record_savings(saving);
            }
        }
    }

    for (category, group) in &groups {
        let rule = rules
            .category_bundle(*category)
            .ok_or_else(|| PricingError::MissingBundleRule {
                category: category.to_string(),
            })?;
        let priced = price_category_group(rule, group);
        receipt.add_to_grand_total(priced.total);
        for saving in priced.savings {
            receipt.record_savings(saving);
        }
    }

    Ok(receipt)
}

/// Emits the display row for one basket entry and folds its undiscounted
/// extended price into the product subtotal.
fn add_line_item(receipt: &mut Receipt, entry: &BasketEntry) -> PricingResult<()> {
    let product = &entry.product;
    let extended = product.unit_price.extend(entry.quantity);

    // Weighed rows show the weight and rate in the name and the extended
    // price in the price column; unit rows show the plain unit price
    let (name, price) = if product.sold_by_weight {
        (
            format!(
                "{} {:.2} kg @ {}/kg",
                product.name, entry.quantity, product.unit_price
            ),
            extended,
        )
    } else {
        (product.name.clone(), product.unit_price)
    };

    receipt.push_line_item(
        LineItem {
            name,
            price,
            quantity: display_quantity(product, entry.quantity)?,
        },
        extended,
    );
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
