//! # Category Bundler
//!
//! Prices a category group: every basket unit belonging to a priced
//! category's membership set, across distinct products.
//!
//! ## Cheapest-Units-Discounted Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Expand all units of the group into a min-heap keyed on unit price      │
//! │  (ties broken by product id, so extraction order is reproducible)       │
//! │                                                                         │
//! │  while at least N units remain:                                         │
//! │      pop the N cheapest units                                           │
//! │      charge the fixed bundle price instead of their sum                 │
//! │      emit one savings entry per bundle (count = 1)                      │
//! │                                                                         │
//! │  remaining units (< N) are charged at their own unit price              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Bundling the cheapest units first maximizes the customer's saving per
//! bundle and is well-defined regardless of basket input order. The heap
//! gives O(total log total) without needing a full sort up front.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::money::Money;
use crate::receipt::SavingsItem;
use crate::rules::CategoryBundleRule;
use crate::types::Product;

/// The result of pricing one category group.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct GroupPrice {
    /// Total payable for the whole group, bundles and remainder.
    pub total: Money,

    /// One entry per bundle formed.
    pub savings: Vec<SavingsItem>,
}

/// Prices a category group against its bundle rule.
///
/// `group` holds whole-unit counts: weighed products never reach this path
/// (rejected during validation), and the rule's trigger quantity has been
/// validated positive.
pub(crate) fn price_category_group(
    rule: &CategoryBundleRule,
    group: &[(&Product, u64)],
) -> GroupPrice {
    // Min-heap over (unit price, product id); Reverse flips BinaryHeap's
    // max-first ordering
    let mut units = BinaryHeap::new();
    for (product, count) in group {
        for _ in 0..*count {
            units.push(Reverse((product.unit_price, product.id)));
        }
    }

    let trigger = rule.trigger_quantity as usize;
    let mut total = Money::zero();
    let mut savings = Vec::new();

    while units.len() >= trigger {
        let mut original = Money::zero();
        for _ in 0..trigger {
            if let Some(Reverse((price, _))) = units.pop() {
                original += price;
            }
        }

        total += rule.bundle_price;
        savings.push(SavingsItem {
            name: rule.name.clone(),
            count: 1,
            deduction: rule.bundle_price - original,
        });
    }

    // Fewer than N units left: no discount for them
    while let Some(Reverse((price, _))) = units.pop() {
        total += price;
    }

    GroupPrice { total, savings }
}

// =============================================================================
// Unit Tests
// =============================================================================
