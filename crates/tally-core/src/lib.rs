//! # tally-core: Pure Basket Pricing for Tally POS
//!
//! This crate is the **heart** of Tally POS. It prices a shopping basket
//! against a set of discount rules and produces an itemized receipt, as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Tally POS Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐    │
//! │  │                  Caller (apps/cli, future POS apps)             │    │
//! │  │    builds Products, Basket, PricingRules ──► renders Receipt   │    │
//! │  └─────────────────────────────┬───────────────────────────────────┘    │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐    │
//! │  │               ★ tally-core (THIS CRATE) ★                       │    │
//! │  │                                                                 │    │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐    │    │
//! │  │   │   types   │  │   rules   │  │  engine   │  │  receipt  │    │    │
//! │  │   │  Product  │  │ MultiBuy  │  │ line.rs   │  │  Receipt  │    │    │
//! │  │   │  Basket   │  │  Bundle   │  │ bundle.rs │  │  LineItem │    │    │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘    │    │
//! │  │                                                                 │    │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS            │    │
//! │  └─────────────────────────────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Category, Basket)
//! - [`money`] - Money type with exact decimal arithmetic (no floating point!)
//! - [`rules`] - The three rule tables: multi-buys, category bundles, membership
//! - [`receipt`] - Receipt, line items, savings items
//! - [`engine`] - The basket engine (with `line` and `bundle` pricing behind it)
//! - [`error`] - Domain error types
//! - [`validation`] - Quantity and rule-table validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every call is deterministic - same input = same receipt
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Exact Money**: All monetary values are `rust_decimal` backed, never f64
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use tally_core::engine::compute_receipt;
//! use tally_core::money::Money;
//! use tally_core::rules::{MultiBuyRule, PricingRules};
//! use tally_core::types::{Basket, Category, Product};
//!
//! let beans = Product::new(1, "Beans Tin", Category::Food, Money::from_major_minor(0, 50));
//!
//! let mut rules = PricingRules::new();
//! rules.add_product_rule(beans.id, MultiBuyRule::charge_for("Beans 3 for 2", 3, 2));
//!
//! let mut basket = Basket::new();
//! basket.add_units(&beans, 3);
//!
//! let receipt = compute_receipt(&basket, &rules).unwrap();
//! assert_eq!(receipt.grand_total(), Money::from_major_minor(1, 0));
//! assert_eq!(receipt.savings_subtotal(), -Money::from_major_minor(0, 50));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

mod bundle;
mod line;

pub mod engine;
pub mod error;
pub mod money;
pub mod receipt;
pub mod rules;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use tally_core::Money` instead of
// `use tally_core::money::Money`

pub use engine::compute_receipt;
pub use error::{PricingError, PricingResult};
pub use money::Money;
pub use receipt::{LineItem, Receipt, SavingsItem};
pub use rules::{CategoryBundleRule, MultiBuyOffer, MultiBuyRule, PricingRules};
pub use types::{Basket, BasketEntry, Category, Product, ProductId};
