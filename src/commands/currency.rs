// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::currencies::{symbol_of, CURRENCIES};
use crate::storage::Storage;
use crate::store::Store;
use crate::utils::pretty_table;
use anyhow::Result;

pub fn handle<S: Storage>(store: &mut Store<S>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => {
            let code = sub.get_one::<String>("code").unwrap().to_uppercase();
            store.set_display_currency(&code)?;
            println!("Display currency set to {}", code);
        }
        Some(("show", _)) => {
            let ccy = store.display_currency();
            println!("{} ({})", ccy, symbol_of(ccy));
        }
        Some(("list", _)) => {
            let data = CURRENCIES
                .iter()
                .map(|c| vec![c.code.to_string(), c.name.to_string(), c.symbol.to_string()])
                .collect();
            println!("{}", pretty_table(&["Code", "Name", "Symbol"], data));
        }
        _ => {}
    }
    Ok(())
}
