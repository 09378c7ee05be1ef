// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use subclip::models::{BillingCycle, Category, Subscription};
use subclip::store::{monthly_cost, unconverted};

fn sub(cost: &str, ccy: &str, cycle: BillingCycle) -> Subscription {
    Subscription {
        id: "t".into(),
        name: "Test".into(),
        logo: String::new(),
        billing_cycle: cycle,
        cost: cost.parse().unwrap(),
        currency: ccy.into(),
        category: Category::Software,
        end_date: None,
        active: true,
        exchange_rate: None,
        exchange_from: None,
        exchange_to: None,
    }
}

#[test]
fn monthly_same_currency_is_cost() {
    let s = sub("12.99", "USD", BillingCycle::Monthly);
    assert_eq!(monthly_cost(&s, "USD"), Decimal::new(1299, 2));
    assert!(!unconverted(&s, "USD"));
}

#[test]
fn annual_same_currency_divides_by_twelve() {
    let s = sub("120", "USD", BillingCycle::Annual);
    assert_eq!(monthly_cost(&s, "USD"), Decimal::new(10, 0));
}

#[test]
fn cross_currency_applies_rate() {
    let mut s = sub("120", "EUR", BillingCycle::Annual);
    s.exchange_rate = Some("1.1".parse().unwrap());
    // 120 / 12 = 10 EUR; 10 * 1.1 = 11 in the display currency
    assert_eq!(monthly_cost(&s, "USD"), Decimal::new(11, 0));
    assert!(!unconverted(&s, "USD"));
}

#[test]
fn cross_currency_without_rate_falls_back_unconverted() {
    let s = sub("9", "EUR", BillingCycle::Monthly);
    assert_eq!(monthly_cost(&s, "USD"), Decimal::new(9, 0));
    assert!(unconverted(&s, "USD"));
}

#[test]
fn zero_rate_treated_as_no_rate() {
    let mut s = sub("9", "EUR", BillingCycle::Monthly);
    s.exchange_rate = Some(Decimal::ZERO);
    assert_eq!(monthly_cost(&s, "USD"), Decimal::new(9, 0));
    assert!(unconverted(&s, "USD"));
}

#[test]
fn rate_ignored_for_same_currency() {
    let mut s = sub("10", "USD", BillingCycle::Monthly);
    s.exchange_rate = Some("2".parse().unwrap());
    assert_eq!(monthly_cost(&s, "USD"), Decimal::new(10, 0));
}

#[test]
fn provenance_annotations_never_checked() {
    // exchangeFrom/exchangeTo disagree with the actual pair; the rate
    // still applies as-is
    let mut s = sub("10", "EUR", BillingCycle::Monthly);
    s.exchange_rate = Some("1.1".parse().unwrap());
    s.exchange_from = Some("GBP".into());
    s.exchange_to = Some("JPY".into());
    assert_eq!(monthly_cost(&s, "USD"), Decimal::new(11, 0));
}
