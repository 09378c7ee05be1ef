// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use subclip::models::{BillingCycle, Category, Subscription};
use subclip::storage::{SqliteStorage, Storage};
use subclip::store::{Store, CURRENCY_KEY, SUBS_KEY};

fn setup() -> Store<SqliteStorage> {
    Store::open(SqliteStorage::open_in_memory().unwrap())
}

fn sub(id: &str, name: &str, cost: &str, ccy: &str, cycle: BillingCycle) -> Subscription {
    Subscription {
        id: id.into(),
        name: name.into(),
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
fn empty_store_defaults() {
    let store = setup();
    assert!(store.subscriptions().is_empty());
    assert_eq!(store.display_currency(), "USD");
    assert_eq!(store.total_monthly_spend(), Decimal::ZERO);
}

#[test]
fn spend_scenario_mixed_currencies() {
    let mut store = setup();
    store
        .add(sub("a", "X", "12", "USD", BillingCycle::Monthly))
        .unwrap();
    assert_eq!(store.total_monthly_spend(), Decimal::new(12, 0));

    let mut eur = sub("b", "Y", "120", "EUR", BillingCycle::Annual);
    eur.exchange_rate = Some("1.1".parse().unwrap());
    store.add(eur).unwrap();

    let b = store.find("b").unwrap().clone();
    assert_eq!(store.monthly_cost_of(&b), Decimal::new(11, 0));
    assert_eq!(store.total_monthly_spend(), Decimal::new(23, 0));
}

#[test]
fn inactive_subscriptions_do_not_count() {
    let mut store = setup();
    store
        .add(sub("a", "X", "12", "USD", BillingCycle::Monthly))
        .unwrap();
    let mut off = sub("b", "Y", "99", "USD", BillingCycle::Monthly);
    off.active = false;
    store.add(off).unwrap();
    assert_eq!(store.total_monthly_spend(), Decimal::new(12, 0));
}

#[test]
fn toggle_twice_restores_flag() {
    let mut store = setup();
    store
        .add(sub("a", "X", "12", "USD", BillingCycle::Monthly))
        .unwrap();
    store.toggle_active("a").unwrap();
    assert!(!store.find("a").unwrap().active);
    store.toggle_active("a").unwrap();
    assert!(store.find("a").unwrap().active);
}

#[test]
fn toggle_unknown_id_is_noop() {
    let mut store = setup();
    store
        .add(sub("a", "X", "12", "USD", BillingCycle::Monthly))
        .unwrap();
    store.toggle_active("missing").unwrap();
    assert!(store.find("a").unwrap().active);
}

#[test]
fn update_replaces_matching_entry() {
    let mut store = setup();
    store
        .add(sub("a", "X", "12", "USD", BillingCycle::Monthly))
        .unwrap();
    let mut changed = sub("a", "X renamed", "15", "USD", BillingCycle::Monthly);
    changed.category = Category::Cloud;
    store.update(changed).unwrap();
    let got = store.find("a").unwrap();
    assert_eq!(got.name, "X renamed");
    assert_eq!(got.cost, Decimal::new(15, 0));
    assert_eq!(got.category, Category::Cloud);
}

#[test]
fn update_unknown_id_leaves_contents_unchanged() {
    let mut store = setup();
    store
        .add(sub("a", "X", "12", "USD", BillingCycle::Monthly))
        .unwrap();
    let before: Vec<Subscription> = store.subscriptions().to_vec();
    store
        .update(sub("ghost", "Z", "1", "USD", BillingCycle::Monthly))
        .unwrap();
    assert_eq!(store.subscriptions(), &before[..]);
}

#[test]
fn delete_twice_is_noop_second_time() {
    let mut store = setup();
    store
        .add(sub("a", "X", "12", "USD", BillingCycle::Monthly))
        .unwrap();
    store.delete("a").unwrap();
    assert!(store.subscriptions().is_empty());
    store.delete("a").unwrap();
    assert!(store.subscriptions().is_empty());
}

#[test]
fn duplicate_id_add_keeps_two_entries() {
    // ids come from the caller; the store does not deduplicate
    let mut store = setup();
    store
        .add(sub("a", "X", "12", "USD", BillingCycle::Monthly))
        .unwrap();
    store
        .add(sub("a", "X again", "3", "USD", BillingCycle::Monthly))
        .unwrap();
    assert_eq!(store.subscriptions().len(), 2);
    assert_eq!(store.total_monthly_spend(), Decimal::new(15, 0));
}

#[test]
fn category_totals_split_active_spend() {
    let mut store = setup();
    store
        .add(sub("a", "X", "12", "USD", BillingCycle::Monthly))
        .unwrap();
    let mut cloud = sub("b", "Y", "6", "USD", BillingCycle::Monthly);
    cloud.category = Category::Cloud;
    store.add(cloud).unwrap();
    assert_eq!(store.category_total(Category::Software), Decimal::new(12, 0));
    assert_eq!(store.category_total(Category::Cloud), Decimal::new(6, 0));
    assert_eq!(store.category_total(Category::Marketing), Decimal::ZERO);
}

#[test]
fn restart_round_trips_list_and_currency() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("subclip.sqlite");

    let mut store = Store::open(SqliteStorage::open_at(&path).unwrap());
    let mut s = sub("a", "X", "9.99", "EUR", BillingCycle::Monthly);
    s.exchange_rate = Some("1.08".parse().unwrap());
    s.exchange_from = Some("EUR".into());
    s.exchange_to = Some("USD".into());
    s.end_date = Some("2026-12-31".parse().unwrap());
    store.add(s.clone()).unwrap();
    store.set_display_currency("EUR").unwrap();
    drop(store);

    let reopened = Store::open(SqliteStorage::open_at(&path).unwrap());
    assert_eq!(reopened.subscriptions(), &[s][..]);
    assert_eq!(reopened.display_currency(), "EUR");
}

#[test]
fn corrupt_list_recovers_as_empty() {
    let backend = SqliteStorage::open_in_memory().unwrap();
    backend.set(SUBS_KEY, "{not json").unwrap();
    backend.set(CURRENCY_KEY, "EUR").unwrap();
    let store = Store::open(backend);
    assert!(store.subscriptions().is_empty());
    // the currency key is independent and still honored
    assert_eq!(store.display_currency(), "EUR");
}

#[test]
fn persisted_json_uses_camel_case_layout() {
    let backend = SqliteStorage::open_in_memory().unwrap();
    backend
        .set(
            SUBS_KEY,
            r#"[{"id":"a","name":"X","logo":"zoom","billingCycle":"annual","cost":120,"currency":"EUR","category":"Software","active":true,"exchangeRate":1.1,"exchangeFrom":"EUR","exchangeTo":"USD"}]"#,
        )
        .unwrap();
    let store = Store::open(backend);
    let s = store.find("a").unwrap();
    assert_eq!(s.billing_cycle, BillingCycle::Annual);
    assert_eq!(s.exchange_rate, Some("1.1".parse().unwrap()));
    assert_eq!(store.monthly_cost_of(s), Decimal::new(11, 0));
}
