use super::*;
use crate::domain::{ItemId, MenuItem};

fn line(id: i64, name: &str, price: f64) -> MenuItem {
    MenuItem {
        id: ItemId(id),
        name: name.to_string(),
        price,
        course: "Main".to_string(),
    }
}

#[test]
fn parse_price_or_zero_accepts_plain_decimals() {
    assert_eq!(parse_price_or_zero("120.00"), 120.0);
    assert_eq!(parse_price_or_zero(" 85.50 "), 85.5);
    assert_eq!(parse_price_or_zero("0"), 0.0);
}

#[test]
fn parse_price_or_zero_coerces_malformed_input_to_zero() {
    assert_eq!(parse_price_or_zero("abc"), 0.0);
    assert_eq!(parse_price_or_zero(""), 0.0);
    assert_eq!(parse_price_or_zero("12,50"), 0.0);
    assert_eq!(parse_price_or_zero("NaN"), 0.0);
    assert_eq!(parse_price_or_zero("inf"), 0.0);
}

#[test]
fn empty_snapshot_totals_zero() {
    let snapshot = CheckoutSnapshot::default();
    assert_eq!(snapshot.total(), 0.0);
    assert_eq!(snapshot.formatted_total(), "R0.00");
    assert!(snapshot.is_empty());
}

#[test]
fn sums_lines_in_insertion_order() {
    let snapshot = CheckoutSnapshot::new(vec![
        line(1, "Signature Pasta", 120.0),
        line(2, "Prawn Cocktail", 85.5),
    ]);

    assert_eq!(snapshot.line_count(), 2);
    assert_eq!(snapshot.lines()[0].name, "Signature Pasta");
    assert_eq!(snapshot.lines()[1].name, "Prawn Cocktail");
    assert_eq!(snapshot.formatted_total(), "R205.50");
}

#[test]
fn total_is_invariant_under_reordering() {
    let mut lines = vec![
        line(1, "Pasta", 120.0),
        line(2, "Prawns", 85.5),
        line(3, "Fondant", 95.0),
    ];
    let forward = CheckoutSnapshot::new(lines.clone()).total();
    lines.reverse();
    let backward = CheckoutSnapshot::new(lines).total();

    assert!((forward - backward).abs() < 1e-9);
}

#[test]
fn malformed_prices_contribute_zero_to_the_total() {
    // A snapshot built from raw strings "120.00", "abc", "85.5" after the
    // ingestion conversion: the malformed entry became 0.0.
    let snapshot = CheckoutSnapshot::new(vec![
        line(1, "Pasta", parse_price_or_zero("120.00")),
        line(2, "Mystery", parse_price_or_zero("abc")),
        line(3, "Prawns", parse_price_or_zero("85.5")),
    ]);

    assert_eq!(snapshot.formatted_total(), "R205.50");
}

#[test]
fn non_finite_line_prices_are_ignored_by_the_sum() {
    let snapshot = CheckoutSnapshot::new(vec![
        line(1, "Pasta", 120.0),
        line(2, "Broken", f64::NAN),
        line(3, "Prawns", 85.5),
    ]);

    assert_eq!(snapshot.formatted_total(), "R205.50");
}

#[test]
fn formats_prices_with_currency_prefix_and_two_decimals() {
    assert_eq!(format_price(0.0), "R0.00");
    assert_eq!(format_price(85.5), "R85.50");
    assert_eq!(format_price(205.5), "R205.50");
    assert_eq!(format_price(1234.567), "R1234.57");
}
