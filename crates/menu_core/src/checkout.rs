//! Checkout totals over an immutable snapshot of the menu.

use serde::{Deserialize, Serialize};

use crate::domain::MenuItem;

/// Converts a raw price string to a number, once, at ingestion. Anything
/// that is not a finite number becomes 0.0 so the total stays computable.
pub fn parse_price_or_zero(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Formats a price the way the board displays it: `R` prefix, 2 decimals.
pub fn format_price(price: f64) -> String {
    format!("R{price:.2}")
}

/// Owned copy of the menu captured when the user navigates to checkout.
/// Later mutations of the live store do not reach a snapshot in view.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckoutSnapshot {
    lines: Vec<MenuItem>,
}

impl CheckoutSnapshot {
    pub fn new(lines: Vec<MenuItem>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[MenuItem] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Order total. Defined for every snapshot: an empty snapshot totals
    /// 0.0 and a non-finite line price contributes 0.0.
    pub fn total(&self) -> f64 {
        // `Iterator::sum` for floats uses -0.0 as its neutral element, which
        // would format an empty total as "R-0.00"; fold from +0.0 instead.
        self.lines
            .iter()
            .map(|line| if line.price.is_finite() { line.price } else { 0.0 })
            .fold(0.0, |acc, price| acc + price)
    }

    pub fn formatted_total(&self) -> String {
        format_price(self.total())
    }
}

#[cfg(test)]
#[path = "tests/checkout_tests.rs"]
mod tests;
