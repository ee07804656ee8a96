//! # Pricing Rules
//!
//! The three rule tables the engine prices against.
//!
//! ## Rule Tables
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         PricingRules                                    │
//! │                                                                         │
//! │  product_rules     ProductId → [MultiBuyRule]   per-product multi-buys  │
//! │  category_rules    Category  → BundleRule       "any N from set for £P" │
//! │  category_members  Category  → {ProductId}      explicit eligibility    │
//! │                                                                         │
//! │  Immutable configuration, passed by reference into every engine call.   │
//! │  Never ambient global state - this keeps the engine pure and testable.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Multi-Buy Semantics
//! A multi-buy is either "buy N, pay for M" (`ChargeFor`) or "buy N for a
//! fixed price" (`FixedPrice`). The offer enum makes the two shapes mutually
//! exclusive by construction; a rule can never carry both.
//!
//! Multiple rules on one product are applied in table order against the
//! shrinking remainder - deliberately NOT re-ordered by best savings, since
//! that would change observable receipts.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::error::{PricingError, PricingResult};
use crate::money::Money;
use crate::types::{Category, Product, ProductId};

// =============================================================================
// Multi-Buy Rule
// =============================================================================

/// The two possible shapes of a multi-buy offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MultiBuyOffer {
    /// Buy the trigger quantity, pay for this many units ("3 for 2").
    ChargeFor(u32),
    /// Buy the trigger quantity for this fixed price ("2 for £1").
    FixedPrice(Money),
}

/// A per-product multi-buy discount rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiBuyRule {
    /// Rule name as shown in the receipt savings section.
    pub name: String,

    /// How many units trigger one application of the deal.
    pub trigger_quantity: u32,

    /// What the bundled units cost.
    pub offer: MultiBuyOffer,
}

impl MultiBuyRule {
    /// "Buy N, pay for M" rule (e.g. beans 3 for the price of 2).
    pub fn charge_for(name: impl Into<String>, trigger_quantity: u32, payable_units: u32) -> Self {
        MultiBuyRule {
            name: name.into(),
            trigger_quantity,
            offer: MultiBuyOffer::ChargeFor(payable_units),
        }
    }

    /// "Buy N for fixed price P" rule (e.g. coke 2 for £1).
    pub fn fixed_price(name: impl Into<String>, trigger_quantity: u32, price: Money) -> Self {
        MultiBuyRule {
            name: name.into(),
            trigger_quantity,
            offer: MultiBuyOffer::FixedPrice(price),
        }
    }
}

// =============================================================================
// Category Bundle Rule
// =============================================================================

/// A cross-product bundle: any N units from a category's membership set for
/// a fixed price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBundleRule {
    /// Rule name as shown in the receipt savings section.
    pub name: String,

    /// How many units (across distinct products) form one bundle.
    pub trigger_quantity: u32,

    /// Fixed price charged for each bundle.
    pub bundle_price: Money,
}

impl CategoryBundleRule {
    /// Creates a category bundle rule.
    pub fn new(name: impl Into<String>, trigger_quantity: u32, bundle_price: Money) -> Self {
        CategoryBundleRule {
            name: name.into(),
            trigger_quantity,
            bundle_price,
        }
    }
}

// =============================================================================
// Rule Tables
// =============================================================================

/// Immutable pricing configuration: all three rule tables together.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PricingRules {
    /// Per-product multi-buy rules, applied in insertion order.
    product_rules: HashMap<ProductId, Vec<MultiBuyRule>>,

    /// One bundle rule per category. BTreeMap so groups are priced in
    /// category enumeration order.
    category_rules: BTreeMap<Category, CategoryBundleRule>,

    /// Explicit membership sets. A category tag alone does not make a
    /// product bundle-eligible; it must appear here.
    category_members: BTreeMap<Category, BTreeSet<ProductId>>,
}

impl PricingRules {
    /// Creates an empty rule set (everything priced at face value).
    pub fn new() -> Self {
        PricingRules::default()
    }

    /// Appends a multi-buy rule for a product. Order of insertion is the
    /// order of application.
    pub fn add_product_rule(&mut self, product_id: ProductId, rule: MultiBuyRule) {
        self.product_rules.entry(product_id).or_default().push(rule);
    }

    /// Sets the bundle rule for a category.
    pub fn set_category_bundle(&mut self, category: Category, rule: CategoryBundleRule) {
        self.category_rules.insert(category, rule);
    }

    /// Sets the membership set for a category.
    pub fn set_category_members(
        &mut self,
        category: Category,
        members: impl IntoIterator<Item = ProductId>,
    ) {
        self.category_members
            .insert(category, members.into_iter().collect());
    }

    /// Multi-buy rules for a product, in application order.
    pub fn product_rules(&self, product_id: ProductId) -> &[MultiBuyRule] {
        self.product_rules
            .get(&product_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// The bundle rule for a category, if one is configured.
    pub fn category_bundle(&self, category: Category) -> Option<&CategoryBundleRule> {
        self.category_rules.get(&category)
    }

    /// Checks whether a product is enrolled in its category's bundle.
    ///
    /// Membership is what routes a basket entry into category pricing
    /// instead of per-product pricing.
    pub fn is_bundle_member(&self, product: &Product) -> bool {
        self.category_members
            .get(&product.category)
            .is_some_and(|members| members.contains(&product.id))
    }

    /// Validates the rule tables eagerly, before any pricing.
    ///
    /// ## Checks
    /// - Every trigger quantity is positive
    /// - Every category bundle rule has a membership set, and vice versa
    pub fn validate(&self) -> PricingResult<()> {
        for rule in self.product_rules.values().flatten() {
            if rule.trigger_quantity == 0 {
                return Err(PricingError::InvalidTriggerQuantity {
                    rule: rule.name.clone(),
                });
            }
        }

        for (category, rule) in &self.category_rules {
            if rule.trigger_quantity == 0 {
                return Err(PricingError::InvalidTriggerQuantity {
                    rule: rule.name.clone(),
                });
            }
            if !self.category_members.contains_key(category) {
                return Err(PricingError::MissingMembershipSet {
                    category: category.to_string(),
                });
            }
        }

        for category in self.category_members.keys() {
            if !self.category_rules.contains_key(category) {
                return Err(PricingError::MissingBundleRule {
                    category: category.to_string(),
                });
            }
        }

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
