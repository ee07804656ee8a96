//! # Receipt Types
//!
//! The itemized receipt produced by the basket engine and consumed by the
//! presentation layer.
//!
//! ## Receipt Anatomy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           Receipt                                       │
//! │                                                                         │
//! │  line_items        one row per basket entry, in basket order            │
//! │  product_subtotal  sum of undiscounted extended prices (>= 0)           │
//! │  savings_items     one row per rule application                         │
//! │  savings_subtotal  sum of deductions (<= 0)                             │
//! │  grand_total       product_subtotal + savings_subtotal                  │
//! │                                                                         │
//! │  The three totals always reconcile; the engine builds them together.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A Receipt is created fresh by every engine call and returned by value.
//! The presentation layer only reads it; all mutators are crate-private.

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Line Item
// =============================================================================

/// One product row on the receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Display name. Weighed products carry the weight and rate suffix,
    /// e.g. `"Oranges 0.20 kg @ £1.99/kg"`.
    pub name: String,

    /// Displayed price: the unit price, or the extended price for weighed
    /// products (a weighed row shows what the weight costs, not the rate).
    pub price: Money,

    /// Display quantity, rounded up so a 0.2 kg entry still shows one row.
    /// Display only - pricing always uses the exact quantity.
    pub quantity: u64,
}

// =============================================================================
// Savings Item
// =============================================================================

/// One discount row on the receipt, attributed to a named rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsItem {
    /// Name of the rule that produced this saving.
    pub name: String,

    /// How many times the rule applied.
    pub count: u64,

    /// Signed deduction, always <= 0.
    pub deduction: Money,
}

// =============================================================================
// Receipt
// =============================================================================

/// An itemized receipt: ordered line items, ordered savings, three totals.
///
/// ## Invariants
/// - `grand_total == product_subtotal + savings_subtotal`
/// - `savings_subtotal <= 0`, `product_subtotal >= 0`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    line_items: Vec<LineItem>,
    savings_items: Vec<SavingsItem>,
    product_subtotal: Money,
    savings_subtotal: Money,
    grand_total: Money,
}

impl Receipt {
    /// Creates an empty receipt with all totals at zero.
    pub(crate) fn new() -> Self {
        Receipt::default()
    }

    /// Appends a line item and folds its undiscounted extended price into
    /// the product subtotal.
    pub(crate) fn push_line_item(&mut self, item: LineItem, extended_price: Money) {
        self.line_items.push(item);
        self.product_subtotal += extended_price;
    }

    /// Appends a savings entry and folds its deduction into the savings
    /// subtotal.
    pub(crate) fn record_savings(&mut self, item: SavingsItem) {
        self.savings_subtotal += item.deduction;
        self.savings_items.push(item);
    }

    /// Folds a priced amount (line or category group) into the grand total.
    pub(crate) fn add_to_grand_total(&mut self, amount: Money) {
        self.grand_total += amount;
    }

    /// Product rows in basket order.
    pub fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }

    /// Savings rows in the order the discounts were applied.
    pub fn savings_items(&self) -> &[SavingsItem] {
        &self.savings_items
    }

    /// Sum of undiscounted extended prices.
    pub fn product_subtotal(&self) -> Money {
        self.product_subtotal
    }

    /// Sum of all deductions (non-positive).
    pub fn savings_subtotal(&self) -> Money {
        self.savings_subtotal
    }

    /// Amount to pay: `product_subtotal + savings_subtotal`.
    pub fn grand_total(&self) -> Money {
        self.grand_total
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
