// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{BillingCycle, Category, Subscription};
use crate::storage::Storage;
use crate::store::Store;
use crate::utils::{maybe_print_json, new_id, parse_date, parse_decimal, pretty_table};
use anyhow::{bail, Result};
use serde::Serialize;

pub fn handle<S: Storage>(store: &mut Store<S>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("update", sub)) => update(store, sub)?,
        Some(("rm", sub)) => rm(store, sub)?,
        Some(("toggle", sub)) => toggle(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn add<S: Storage>(store: &mut Store<S>, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap();
    if name.trim().is_empty() {
        bail!("Subscription name must not be empty");
    }
    let cost = parse_decimal(sub.get_one::<String>("cost").unwrap())?;
    let currency = sub
        .get_one::<String>("currency")
        .map(|s| s.to_uppercase())
        .unwrap_or_else(|| store.display_currency().to_string());
    let cycle: BillingCycle = sub.get_one::<String>("cycle").unwrap().parse()?;
    let category: Category = sub.get_one::<String>("category").unwrap().parse()?;
    let end_date = sub
        .get_one::<String>("end-date")
        .map(|s| parse_date(s))
        .transpose()?;
    let rate = sub
        .get_one::<String>("rate")
        .map(|s| parse_decimal(s))
        .transpose()?;

    let record = Subscription {
        id: new_id(),
        name: name.clone(),
        logo: sub.get_one::<String>("logo").cloned().unwrap_or_default(),
        billing_cycle: cycle,
        cost,
        currency: currency.clone(),
        category,
        end_date,
        active: !sub.get_flag("inactive"),
        exchange_rate: rate,
        exchange_from: sub.get_one::<String>("rate-from").map(|s| s.to_uppercase()),
        exchange_to: sub.get_one::<String>("rate-to").map(|s| s.to_uppercase()),
    };
    let id = record.id.clone();
    store.add(record)?;
    println!("Added '{}' ({} {}) with id {}", name, cost, currency, id);
    Ok(())
}

#[derive(Serialize)]
pub struct SubscriptionRow {
    pub id: String,
    pub name: String,
    pub category: String,
    pub cycle: String,
    pub cost: String,
    pub currency: String,
    pub active: bool,
    pub monthly_cost: String,
    pub converted: bool,
}

fn list<S: Storage>(store: &Store<S>, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let filter: Option<Category> = sub
        .get_one::<String>("category")
        .map(|s| s.parse())
        .transpose()?;

    let mut subs: Vec<&Subscription> = store
        .subscriptions()
        .iter()
        .filter(|s| filter.map(|c| s.category == c).unwrap_or(true))
        .collect();
    subs.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

    let data: Vec<SubscriptionRow> = subs
        .iter()
        .map(|s| SubscriptionRow {
            id: s.id.clone(),
            name: s.name.clone(),
            category: s.category.to_string(),
            cycle: s.billing_cycle.to_string(),
            cost: format!("{:.2}", s.cost),
            currency: s.currency.clone(),
            active: s.active,
            monthly_cost: format!("{:.2}", store.monthly_cost_of(s)),
            converted: !store.unconverted(s),
        })
        .collect();

    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let monthly_hdr = format!("Monthly ({})", store.display_currency());
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                // unconverted amounts are marked so a missing rate is visible
                let marker = if r.converted { "" } else { " *" };
                vec![
                    r.id.clone(),
                    r.name.clone(),
                    r.category.clone(),
                    r.cycle.clone(),
                    r.cost.clone(),
                    r.currency.clone(),
                    if r.active { "on".into() } else { "off".into() },
                    format!("{}{}", r.monthly_cost, marker),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Name", "Category", "Cycle", "Cost", "CCY", "Active", monthly_hdr.as_str()],
                rows,
            )
        );
    }
    Ok(())
}

fn update<S: Storage>(store: &mut Store<S>, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let Some(existing) = store.find(id) else {
        println!("No subscription with id {}", id);
        return Ok(());
    };
    let mut record = existing.clone();
    if let Some(name) = sub.get_one::<String>("name") {
        if name.trim().is_empty() {
            bail!("Subscription name must not be empty");
        }
        record.name = name.clone();
    }
    if let Some(cost) = sub.get_one::<String>("cost") {
        record.cost = parse_decimal(cost)?;
    }
    if let Some(ccy) = sub.get_one::<String>("currency") {
        record.currency = ccy.to_uppercase();
    }
    if let Some(cycle) = sub.get_one::<String>("cycle") {
        record.billing_cycle = cycle.parse()?;
    }
    if let Some(cat) = sub.get_one::<String>("category") {
        record.category = cat.parse()?;
    }
    if let Some(logo) = sub.get_one::<String>("logo") {
        record.logo = logo.clone();
    }
    if let Some(d) = sub.get_one::<String>("end-date") {
        record.end_date = Some(parse_date(d)?);
    }
    if let Some(rate) = sub.get_one::<String>("rate") {
        record.exchange_rate = Some(parse_decimal(rate)?);
    }
    if let Some(from) = sub.get_one::<String>("rate-from") {
        record.exchange_from = Some(from.to_uppercase());
    }
    if let Some(to) = sub.get_one::<String>("rate-to") {
        record.exchange_to = Some(to.to_uppercase());
    }
    let name = record.name.clone();
    store.update(record)?;
    println!("Updated '{}'", name);
    Ok(())
}

fn rm<S: Storage>(store: &mut Store<S>, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    store.delete(id)?;
    println!("Removed {}", id);
    Ok(())
}

fn toggle<S: Storage>(store: &mut Store<S>, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    store.toggle_active(id)?;
    match store.find(id) {
        Some(s) => println!("'{}' is now {}", s.name, if s.active { "on" } else { "off" }),
        None => println!("No subscription with id {}", id),
    }
    Ok(())
}
