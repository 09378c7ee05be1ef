// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{BillingCycle, Category, Subscription};
use crate::storage::Storage;
use anyhow::{Context, Result};
use rust_decimal::Decimal;

pub const SUBS_KEY: &str = "subscription-tracker-subs";
pub const CURRENCY_KEY: &str = "subscription-tracker-currency";
pub const DEFAULT_CURRENCY: &str = "USD";

/// Cost of one month of `sub`, normalized into `display_currency`.
///
/// Annual costs are divided by 12 first. A cross-currency subscription is
/// converted with its user-supplied rate when one is usable (present and
/// positive); otherwise the unconverted amount is returned so the caller
/// still gets a figure. See [`unconverted`] for flagging that fallback.
pub fn monthly_cost(sub: &Subscription, display_currency: &str) -> Decimal {
    let base = match sub.billing_cycle {
        BillingCycle::Monthly => sub.cost,
        BillingCycle::Annual => sub.cost / Decimal::from(12),
    };
    if sub.currency == display_currency {
        return base;
    }
    match sub.usable_rate() {
        Some(rate) => base * rate,
        None => base,
    }
}

/// True when `monthly_cost` had to fall back to the subscription's own
/// currency: a different currency with no usable rate. Presentation marks
/// these amounts; the engine does not treat them as errors.
pub fn unconverted(sub: &Subscription, display_currency: &str) -> bool {
    sub.currency != display_currency && sub.usable_rate().is_none()
}

/// Owns the subscription list and the display-currency setting. Every
/// mutation persists synchronously before returning; reads come from the
/// in-memory list loaded at construction.
pub struct Store<S: Storage> {
    storage: S,
    subs: Vec<Subscription>,
    display_currency: String,
}

impl<S: Storage> Store<S> {
    /// Loads persisted state. Missing or corrupt data yields an empty list
    /// and the default display currency rather than an error.
    pub fn open(storage: S) -> Self {
        let subs = match storage.get(SUBS_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_default(),
            _ => Vec::new(),
        };
        let display_currency = match storage.get(CURRENCY_KEY) {
            Ok(Some(ccy)) if !ccy.is_empty() => ccy,
            _ => DEFAULT_CURRENCY.to_string(),
        };
        Self {
            storage,
            subs,
            display_currency,
        }
    }

    pub fn subscriptions(&self) -> &[Subscription] {
        &self.subs
    }

    pub fn display_currency(&self) -> &str {
        &self.display_currency
    }

    pub fn find(&self, id: &str) -> Option<&Subscription> {
        self.subs.iter().find(|s| s.id == id)
    }

    /// Appends and persists. Ids are the caller's responsibility; a
    /// duplicate id is kept as a second distinct entry, not merged.
    pub fn add(&mut self, sub: Subscription) -> Result<()> {
        self.subs.push(sub);
        self.persist_subs()
    }

    /// Replaces the entry matching `sub.id`; no-op when absent.
    pub fn update(&mut self, sub: Subscription) -> Result<()> {
        if let Some(existing) = self.subs.iter_mut().find(|s| s.id == sub.id) {
            *existing = sub;
        }
        self.persist_subs()
    }

    /// Removes the entry with `id`; no-op when absent.
    pub fn delete(&mut self, id: &str) -> Result<()> {
        self.subs.retain(|s| s.id != id);
        self.persist_subs()
    }

    /// Flips the active flag of the entry with `id`; no-op when absent.
    pub fn toggle_active(&mut self, id: &str) -> Result<()> {
        if let Some(sub) = self.subs.iter_mut().find(|s| s.id == id) {
            sub.active = !sub.active;
        }
        self.persist_subs()
    }

    /// Persisted independently of the subscription list.
    pub fn set_display_currency(&mut self, code: &str) -> Result<()> {
        self.display_currency = code.to_string();
        self.storage
            .set(CURRENCY_KEY, code)
            .context("Persist display currency")?;
        Ok(())
    }

    /// Recomputed on every call; never cached, so a currency or rate change
    /// is reflected immediately.
    pub fn monthly_cost_of(&self, sub: &Subscription) -> Decimal {
        monthly_cost(sub, &self.display_currency)
    }

    pub fn unconverted(&self, sub: &Subscription) -> bool {
        unconverted(sub, &self.display_currency)
    }

    /// Sum of monthly costs over active subscriptions only.
    pub fn total_monthly_spend(&self) -> Decimal {
        self.subs
            .iter()
            .filter(|s| s.active)
            .map(|s| self.monthly_cost_of(s))
            .sum()
    }

    /// Sum of monthly costs over active subscriptions in `category`.
    pub fn category_total(&self, category: Category) -> Decimal {
        self.subs
            .iter()
            .filter(|s| s.active && s.category == category)
            .map(|s| self.monthly_cost_of(s))
            .sum()
    }

    fn persist_subs(&self) -> Result<()> {
        let raw = serde_json::to_string(&self.subs)?;
        self.storage
            .set(SUBS_KEY, &raw)
            .context("Persist subscription list")?;
        Ok(())
    }
}
