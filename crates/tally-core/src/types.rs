//! # Domain Types
//!
//! Core domain types used throughout Tally POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐        │
//! │  │    Product      │   │     Basket      │   │    Category     │        │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │        │
//! │  │  id             │   │  id → entry     │   │  Food           │        │
//! │  │  name           │   │  (BTreeMap, so  │   │  Drink          │        │
//! │  │  unit_price     │   │   iteration is  │   │  Ale            │        │
//! │  │  category       │   │   pinned to     │   └─────────────────┘        │
//! │  │  sold_by_weight │   │   ascending id) │                              │
//! │  └─────────────────┘   └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quantity Model
//! A basket quantity is an exact `Decimal`: integral for unit-counted
//! products, fractional only when the product is `sold_by_weight` (kg).
//! Both rules are enforced at the basket boundary, so the engine can assume
//! every entry it sees is well-formed.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::error::PricingResult;
use crate::money::Money;
use crate::validation::validate_quantity;

// =============================================================================
// Product Identity
// =============================================================================

/// Unique product identifier.
///
/// ## Why an Ordered Newtype?
/// Basket iteration and bundler tie-breaks are pinned to ascending product
/// id, which is what makes receipts reproducible across runs. The newtype
/// keeps ids from being confused with quantities or counts.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Category
// =============================================================================

/// Product category.
///
/// Categories do double duty: a display tag on every product, and the key of
/// the category bundle tables. The derived `Ord` fixes the order in which
/// category groups are priced, keeping savings-item display order stable.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Food,
    Drink,
    Ale,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Food => write!(f, "Food"),
            Category::Drink => write!(f, "Drink"),
            Category::Ale => write!(f, "Ale"),
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available for sale. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier.
    pub id: ProductId,

    /// Display name shown on the receipt.
    pub name: String,

    /// Price per unit, or per kilogram when `sold_by_weight`.
    pub unit_price: Money,

    /// Category tag (also keys the bundle rule tables).
    pub category: Category,

    /// When true, basket quantities are continuous weights in kg and may be
    /// fractional. Unit-counted products only accept integral quantities.
    pub sold_by_weight: bool,
}

impl Product {
    /// Creates a unit-counted product.
    pub fn new(id: u64, name: impl Into<String>, category: Category, unit_price: Money) -> Self {
        Product {
            id: ProductId(id),
            name: name.into(),
            unit_price,
            category,
            sold_by_weight: false,
        }
    }

    /// Creates a product sold by weight (priced per kilogram).
    pub fn weighed(
        id: u64,
        name: impl Into<String>,
        category: Category,
        price_per_kg: Money,
    ) -> Self {
        Product {
            id: ProductId(id),
            name: name.into(),
            unit_price: price_per_kg,
            category,
            sold_by_weight: true,
        }
    }
}

// =============================================================================
// Basket
// =============================================================================

/// One basket entry: a product snapshot plus its exact quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasketEntry {
    /// Product data frozen at the time it was added.
    pub product: Product,

    /// Exact quantity: a unit count, or kilograms for weighed products.
    pub quantity: Decimal,
}

/// A shopping basket: product id → (product, quantity).
///
/// ## Invariants
/// - Keys are unique; adding the same product again accumulates its quantity
/// - Quantities are non-negative, and integral unless the product is weighed
/// - Iteration order is ascending product id, so pricing is deterministic
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Basket {
    entries: BTreeMap<ProductId, BasketEntry>,
}

impl Basket {
    /// Creates a new empty basket.
    pub fn new() -> Self {
        Basket {
            entries: BTreeMap::new(),
        }
    }

    /// Adds a product with an exact quantity, validating it at the boundary.
    ///
    /// ## Behavior
    /// - Negative quantities are rejected
    /// - Fractional quantities are rejected unless the product is weighed
    /// - Adding a product already in the basket accumulates the quantity
    pub fn add(&mut self, product: &Product, quantity: Decimal) -> PricingResult<()> {
        validate_quantity(product, quantity)?;

        self.entries
            .entry(product.id)
            .and_modify(|entry| entry.quantity += quantity)
            .or_insert_with(|| BasketEntry {
                product: product.clone(),
                quantity,
            });
        Ok(())
    }

    /// Adds a whole number of units of a product.
    ///
    /// A non-negative integral quantity is valid for every product, weighed
    /// or not, so this cannot fail.
    pub fn add_units(&mut self, product: &Product, units: u32) {
        let quantity = Decimal::from(units);
        self.entries
            .entry(product.id)
            .and_modify(|entry| entry.quantity += quantity)
            .or_insert_with(|| BasketEntry {
                product: product.clone(),
                quantity,
            });
    }

    /// Adds a weighed product by kilograms.
    ///
    /// ## Errors
    /// Returns [`PricingError::FractionalQuantity`] if the product is not
    /// flagged `sold_by_weight`, or [`PricingError::NegativeQuantity`] for a
    /// negative weight.
    pub fn add_weighed(&mut self, product: &Product, kilograms: Decimal) -> PricingResult<()> {
        self.add(product, kilograms)
    }

    /// Iterates entries in ascending product id order.
    pub fn entries(&self) -> impl Iterator<Item = &BasketEntry> {
        self.entries.values()
    }

    /// Number of distinct products in the basket.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks if the basket has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
