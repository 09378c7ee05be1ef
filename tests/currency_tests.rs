// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use subclip::currencies::symbol_of;
use subclip::presets::preset_logo;

#[test]
fn known_codes_resolve_to_symbols() {
    assert_eq!(symbol_of("USD"), "$");
    assert_eq!(symbol_of("EUR"), "€");
    assert_eq!(symbol_of("GBP"), "£");
    assert_eq!(symbol_of("CHF"), "CHF");
}

#[test]
fn unknown_code_echoes_back() {
    assert_eq!(symbol_of("XYZ"), "XYZ");
    assert_eq!(symbol_of(""), "");
}

#[test]
fn preset_lookup() {
    assert_eq!(preset_logo("github").unwrap().initials, "GH");
    assert!(preset_logo("data:image/png;base64,...").is_none());
}
