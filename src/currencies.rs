// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

/// A known currency with its display symbol.
pub struct Currency {
    pub code: &'static str,
    pub name: &'static str,
    pub symbol: &'static str,
}

pub const CURRENCIES: &[Currency] = &[
    Currency { code: "USD", name: "US Dollar", symbol: "$" },
    Currency { code: "EUR", name: "Euro", symbol: "€" },
    Currency { code: "GBP", name: "British Pound", symbol: "£" },
    Currency { code: "JPY", name: "Japanese Yen", symbol: "¥" },
    Currency { code: "CHF", name: "Swiss Franc", symbol: "CHF" },
    Currency { code: "CAD", name: "Canadian Dollar", symbol: "C$" },
    Currency { code: "AUD", name: "Australian Dollar", symbol: "A$" },
    Currency { code: "NZD", name: "New Zealand Dollar", symbol: "NZ$" },
    Currency { code: "INR", name: "Indian Rupee", symbol: "₹" },
    Currency { code: "CNY", name: "Chinese Yuan", symbol: "¥" },
    Currency { code: "KRW", name: "South Korean Won", symbol: "₩" },
    Currency { code: "SGD", name: "Singapore Dollar", symbol: "S$" },
    Currency { code: "HKD", name: "Hong Kong Dollar", symbol: "HK$" },
    Currency { code: "SEK", name: "Swedish Krona", symbol: "kr" },
    Currency { code: "NOK", name: "Norwegian Krone", symbol: "kr" },
    Currency { code: "DKK", name: "Danish Krone", symbol: "kr" },
    Currency { code: "PLN", name: "Polish Złoty", symbol: "zł" },
    Currency { code: "CZK", name: "Czech Koruna", symbol: "Kč" },
    Currency { code: "ZAR", name: "South African Rand", symbol: "R" },
    Currency { code: "BRL", name: "Brazilian Real", symbol: "R$" },
    Currency { code: "MXN", name: "Mexican Peso", symbol: "MX$" },
    Currency { code: "AED", name: "UAE Dirham", symbol: "د.إ" },
    Currency { code: "SAR", name: "Saudi Riyal", symbol: "﷼" },
    Currency { code: "THB", name: "Thai Baht", symbol: "฿" },
    Currency { code: "TWD", name: "Taiwan Dollar", symbol: "NT$" },
    Currency { code: "TRY", name: "Turkish Lira", symbol: "₺" },
    Currency { code: "ILS", name: "Israeli Shekel", symbol: "₪" },
    Currency { code: "PHP", name: "Philippine Peso", symbol: "₱" },
    Currency { code: "MYR", name: "Malaysian Ringgit", symbol: "RM" },
    Currency { code: "IDR", name: "Indonesian Rupiah", symbol: "Rp" },
];

/// Display symbol for a currency code; unknown codes echo back unchanged.
pub fn symbol_of(code: &str) -> &str {
    CURRENCIES
        .iter()
        .find(|c| c.code == code)
        .map(|c| c.symbol)
        .unwrap_or(code)
}
