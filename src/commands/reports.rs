// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::currencies::symbol_of;
use crate::models::CATEGORIES;
use crate::storage::Storage;
use crate::store::Store;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;
use serde_json::json;

pub fn handle<S: Storage>(store: &Store<S>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("total", sub)) => total(store, sub)?,
        Some(("by-category", sub)) => by_category(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn total<S: Storage>(store: &Store<S>, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let spend = store.total_monthly_spend();
    let ccy = store.display_currency();
    let active = store.subscriptions().iter().filter(|s| s.active).count();
    let v = json!({
        "currency": ccy,
        "total_monthly_spend": format!("{:.2}", spend),
        "active_subscriptions": active,
    });
    if !maybe_print_json(json_flag, jsonl_flag, &v)? {
        println!(
            "{}{:.2} per month across {} active subscription(s)",
            symbol_of(ccy),
            spend,
            active
        );
    }
    Ok(())
}

fn by_category<S: Storage>(store: &Store<S>, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let ccy = store.display_currency();
    let mut data = Vec::new();
    for cat in CATEGORIES {
        let spend = store.category_total(cat);
        data.push(vec![cat.to_string(), format!("{:.2}", spend)]);
    }
    data.push(vec![
        "Total".to_string(),
        format!("{:.2}", store.total_monthly_spend()),
    ]);
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let monthly_hdr = format!("Monthly ({})", ccy);
        println!("{}", pretty_table(&["Category", monthly_hdr.as_str()], data));
    }
    Ok(())
}
