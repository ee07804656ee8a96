//! # Tally CLI Entry Point
//!
//! Demo checkout: wires the standing catalog and promotion sheet, prices a
//! sample basket through `tally-core`, and prints the receipt.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Build the catalog and rule tables
//! 3. Fill the demo basket
//! 4. Invoke the pricing engine once
//! 5. Render the receipt to stdout

use rust_decimal_macros::dec;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use tally_core::{
    compute_receipt, Basket, Category, CategoryBundleRule, Money, MultiBuyRule, PricingError,
    PricingRules, Product,
};

mod printer;

fn main() {
    init_tracing();

    if let Err(err) = run() {
        error!(%err, "basket pricing failed");
        std::process::exit(1);
    }
}

fn run() -> Result<(), PricingError> {
    // Catalog
    let beans = Product::new(1, "Beans Tin", Category::Food, Money::from_major_minor(0, 50));
    let onions = Product::weighed(2, "Onions", Category::Food, Money::from_major_minor(0, 29));
    let cola = Product::new(3, "Coca-cola", Category::Drink, Money::from_major_minor(0, 70));
    let oranges = Product::weighed(4, "Oranges", Category::Food, Money::from_major_minor(1, 99));

    let bass = Product::new(5, "Bass Pale Ale", Category::Ale, Money::from_major_minor(2, 50));
    let ipa = Product::new(6, "Green King IPA", Category::Ale, Money::from_major_minor(3, 0));
    let taylor = Product::new(7, "Timothy Taylor", Category::Ale, Money::from_major_minor(3, 50));

    // Promotion sheet
    let mut rules = PricingRules::new();
    rules.add_product_rule(beans.id, MultiBuyRule::charge_for("Beans 3 for 2", 3, 2));
    rules.add_product_rule(
        cola.id,
        MultiBuyRule::fixed_price("Coke 2 for £1", 2, Money::from_major_minor(1, 0)),
    );
    rules.set_category_bundle(
        Category::Ale,
        CategoryBundleRule::new("Any 3 ales from ales set", 3, Money::from_major_minor(6, 0)),
    );
    rules.set_category_members(Category::Ale, [bass.id, ipa.id, taylor.id]);

    // Basket
    let mut basket = Basket::new();
    basket.add_units(&beans, 6);
    basket.add_units(&cola, 2);
    basket.add_weighed(&oranges, dec!(0.2))?;
    basket.add_weighed(&onions, dec!(0.5))?;

    info!(products = basket.len(), "pricing demo basket");

    let receipt = compute_receipt(&basket, &rules)?;
    print!("{}", printer::render_receipt(&receipt));

    Ok(())
}

/// Initializes the tracing subscriber.
///
/// `RUST_LOG` overrides the default filter, e.g. `RUST_LOG=tally=debug`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
