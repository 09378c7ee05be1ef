// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::bail;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How often a subscription bills. Annual costs are normalized to a
/// monthly figure by dividing by 12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    Monthly,
    Annual,
}

impl fmt::Display for BillingCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BillingCycle::Monthly => write!(f, "monthly"),
            BillingCycle::Annual => write!(f, "annual"),
        }
    }
}

impl FromStr for BillingCycle {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "monthly" => Ok(BillingCycle::Monthly),
            "annual" => Ok(BillingCycle::Annual),
            other => bail!("Invalid billing cycle '{}' (use monthly|annual)", other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Software,
    Utilities,
    Communication,
    Cloud,
    Marketing,
    Other,
}

pub const CATEGORIES: [Category; 6] = [
    Category::Software,
    Category::Utilities,
    Category::Communication,
    Category::Cloud,
    Category::Marketing,
    Category::Other,
];

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Software => "Software",
            Category::Utilities => "Utilities",
            Category::Communication => "Communication",
            Category::Cloud => "Cloud",
            Category::Marketing => "Marketing",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "software" => Ok(Category::Software),
            "utilities" => Ok(Category::Utilities),
            "communication" => Ok(Category::Communication),
            "cloud" => Ok(Category::Cloud),
            "marketing" => Ok(Category::Marketing),
            "other" => Ok(Category::Other),
            bad => bail!(
                "Invalid category '{}' (use Software|Utilities|Communication|Cloud|Marketing|Other)",
                bad
            ),
        }
    }
}

/// A recurring subscription. Field names serialize in camelCase so the
/// persisted JSON keeps the layout the tracker has always written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: String,
    pub name: String,
    /// Preset logo key or a raw image reference; opaque here.
    #[serde(default)]
    pub logo: String,
    pub billing_cycle: BillingCycle,
    /// Amount paid per billing cycle, denominated in `currency`.
    pub cost: Decimal,
    pub currency: String,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    /// Whether this subscription counts toward totals.
    pub active: bool,
    /// User-supplied multiplier converting 1 unit of `currency` into the
    /// display currency. Zero or absent means "no rate available".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exchange_rate: Option<Decimal>,
    /// Provenance annotations for the rate; display-only, never validated
    /// against `currency` or the display currency.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exchange_from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exchange_to: Option<String>,
}

impl Subscription {
    /// A usable rate is present and strictly positive.
    pub fn usable_rate(&self) -> Option<Decimal> {
        self.exchange_rate.filter(|r| r > &Decimal::ZERO)
    }
}
