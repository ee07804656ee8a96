//! # Receipt Printer
//!
//! Renders a priced [`Receipt`] as the fixed-width till roll shown to the
//! customer.
//!
//! ## Layout
//! ```text
//! Product                        Price
//! --------------------------------------
//! Beans Tin                      £0.50
//! Beans Tin                      £0.50
//! ...
//! --------------------------------------
//! Sub-total                      £4.80
//! Savings
//! Beans 3 for 2                  -£0.50
//! Total savings                  -£1.40
//! --------------------------------------
//! Total to pay                   £3.40
//! ```
//!
//! Line items repeat once per display-quantity unit, and savings rows once
//! per application count - the receipt carries the aggregated entries, the
//! printer unrolls them.

use std::fmt::Write;

use tally_core::Receipt;

const DELIMITER: &str = "--------------------------------------";

/// Renders the full price-calculation breakdown for a receipt.
///
/// Pure string rendering against `fmt::Write`; the caller decides where it
/// goes (stdout here, a till printer in a real deployment).
pub fn render_receipt(receipt: &Receipt) -> String {
    let mut out = String::new();

    // Column headers
    let _ = writeln!(out, "{:<30} {:<10}", "Product", "Price");
    let _ = writeln!(out, "{DELIMITER}");

    // One row per display unit
    for item in receipt.line_items() {
        for _ in 0..item.quantity {
            let _ = writeln!(out, "{:<30} {:<10}", item.name, item.price.to_string());
        }
    }

    let _ = writeln!(out, "{DELIMITER}");
    let _ = writeln!(
        out,
        "{:<30} {:<10}",
        "Sub-total",
        receipt.product_subtotal().to_string()
    );

    let _ = writeln!(out, "Savings");
    if receipt.savings_items().is_empty() {
        let _ = writeln!(out, "{:<30} {}", "", "Nil");
    } else {
        for saving in receipt.savings_items() {
            for _ in 0..saving.count {
                let _ = writeln!(
                    out,
                    "{:<30} {:<10}",
                    saving.name,
                    saving.deduction.to_string()
                );
            }
        }
        let _ = writeln!(
            out,
            "{:<30} {:<10}",
            "Total savings",
            receipt.savings_subtotal().to_string()
        );
    }

    let _ = writeln!(out, "{DELIMITER}");
    let _ = writeln!(
        out,
        "{:<30} {:<10}",
        "Total to pay",
        receipt.grand_total().to_string()
    );

    out
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tally_core::{compute_receipt, Basket, Category, Money, MultiBuyRule, PricingRules, Product};

    fn beans() -> Product {
        Product::new(1, "Beans Tin", Category::Food, Money::from_major_minor(0, 50))
    }

    #[test]
    fn test_empty_receipt_shows_nil_savings() {
        let receipt = compute_receipt(&Basket::new(), &PricingRules::new()).unwrap();
        let rendered = render_receipt(&receipt);

        assert!(rendered.contains("Product"));
        assert!(rendered.contains("Nil"));
        assert!(rendered.contains("Total to pay"));
        assert!(rendered.contains("£0.00"));
    }

    #[test]
    fn test_line_items_repeat_per_display_unit() {
        let mut basket = Basket::new();
        basket.add_units(&beans(), 3);
        let receipt = compute_receipt(&basket, &PricingRules::new()).unwrap();

        let rendered = render_receipt(&receipt);
        assert_eq!(rendered.matches("Beans Tin").count(), 3);
    }

    #[test]
    fn test_savings_section_lists_rule_and_total() {
        let mut rules = PricingRules::new();
        rules.add_product_rule(beans().id, MultiBuyRule::charge_for("Beans 3 for 2", 3, 2));

        let mut basket = Basket::new();
        basket.add_units(&beans(), 6);
        let receipt = compute_receipt(&basket, &rules).unwrap();

        let rendered = render_receipt(&receipt);
        // One savings entry with count 2 unrolls to two rows
        assert_eq!(rendered.matches("Beans 3 for 2").count(), 2);
        assert!(rendered.contains("Total savings"));
        assert!(rendered.contains("-£1.00"));
        assert!(rendered.contains("Total to pay"));
        assert!(rendered.contains("£2.00"));
    }
}
