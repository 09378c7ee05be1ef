// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

/// A built-in logo preset: `color` is an HSL background, `initials` the
/// badge text. A subscription's `logo` field may name one of these keys or
/// carry a raw image reference instead.
pub struct PresetLogo {
    pub key: &'static str,
    pub name: &'static str,
    pub color: &'static str,
    pub initials: &'static str,
}

pub const PRESET_LOGOS: &[PresetLogo] = &[
    PresetLogo { key: "zoom", name: "Zoom", color: "210 100% 50%", initials: "Zm" },
    PresetLogo { key: "slack", name: "Slack", color: "340 70% 52%", initials: "Sl" },
    PresetLogo { key: "google", name: "Google Workspace", color: "217 89% 61%", initials: "G" },
    PresetLogo { key: "microsoft", name: "Microsoft 365", color: "28 100% 50%", initials: "M" },
    PresetLogo { key: "notion", name: "Notion", color: "0 0% 15%", initials: "N" },
    PresetLogo { key: "figma", name: "Figma", color: "270 60% 55%", initials: "Fi" },
    PresetLogo { key: "dropbox", name: "Dropbox", color: "215 100% 55%", initials: "Db" },
    PresetLogo { key: "claude", name: "Claude", color: "25 80% 55%", initials: "Cl" },
    PresetLogo { key: "chatgpt", name: "ChatGPT", color: "160 60% 42%", initials: "AI" },
    PresetLogo { key: "buffer", name: "Buffer", color: "0 0% 20%", initials: "Bu" },
    PresetLogo { key: "aws", name: "AWS", color: "30 100% 50%", initials: "AW" },
    PresetLogo { key: "github", name: "GitHub", color: "0 0% 13%", initials: "GH" },
    PresetLogo { key: "jira", name: "Jira", color: "214 82% 51%", initials: "Ji" },
    PresetLogo { key: "asana", name: "Asana", color: "348 73% 56%", initials: "As" },
    PresetLogo { key: "trello", name: "Trello", color: "206 76% 48%", initials: "Tr" },
    PresetLogo { key: "hubspot", name: "HubSpot", color: "14 100% 57%", initials: "HS" },
    PresetLogo { key: "mailchimp", name: "Mailchimp", color: "47 100% 50%", initials: "MC" },
    PresetLogo { key: "canva", name: "Canva", color: "250 63% 56%", initials: "Ca" },
    PresetLogo { key: "adobe", name: "Adobe CC", color: "0 90% 50%", initials: "Ad" },
    PresetLogo { key: "intercom", name: "Intercom", color: "214 80% 56%", initials: "IC" },
    PresetLogo { key: "linear", name: "Linear", color: "250 50% 50%", initials: "Li" },
    PresetLogo { key: "vercel", name: "Vercel", color: "0 0% 7%", initials: "V" },
    PresetLogo { key: "stripe", name: "Stripe", color: "250 80% 60%", initials: "St" },
    PresetLogo { key: "salesforce", name: "Salesforce", color: "205 75% 50%", initials: "SF" },
];

pub fn preset_logo(key: &str) -> Option<&'static PresetLogo> {
    PRESET_LOGOS.iter().find(|p| p.key == key)
}
