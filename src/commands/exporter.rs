// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::storage::Storage;
use crate::store::Store;
use anyhow::Result;
use serde_json::json;

pub fn handle<S: Storage>(store: &Store<S>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("subscriptions", sub)) => export_subscriptions(store, sub),
        _ => Ok(()),
    }
}

fn export_subscriptions<S: Storage>(store: &Store<S>, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();
    let ccy = store.display_currency();

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            let monthly_hdr = format!("monthly_cost_{}", ccy.to_lowercase());
            wtr.write_record([
                "name",
                "category",
                "billing_cycle",
                "cost",
                "currency",
                "active",
                monthly_hdr.as_str(),
            ])?;
            for s in store.subscriptions() {
                wtr.write_record([
                    s.name.clone(),
                    s.category.to_string(),
                    s.billing_cycle.to_string(),
                    format!("{:.2}", s.cost),
                    s.currency.clone(),
                    if s.active { "yes".into() } else { "no".into() },
                    format!("{:.2}", store.monthly_cost_of(s)),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let mut items = Vec::new();
            for s in store.subscriptions() {
                items.push(json!({
                    "name": s.name,
                    "category": s.category.to_string(),
                    "billing_cycle": s.billing_cycle.to_string(),
                    "cost": format!("{:.2}", s.cost),
                    "currency": s.currency,
                    "active": s.active,
                    "monthly_cost": format!("{:.2}", store.monthly_cost_of(s)),
                    "display_currency": ccy,
                }));
            }
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
        _ => {
            eprintln!("Unknown format: {} (use csv|json)", fmt);
        }
    }
    println!("Exported subscriptions to {}", out);
    Ok(())
}
