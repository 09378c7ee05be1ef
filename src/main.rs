// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use subclip::{cli, commands, storage, store::Store};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let backend = storage::SqliteStorage::open_or_init()?;
    let mut store = Store::open(backend);

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Storage initialized at {}", storage::db_path()?.display());
        }
        Some(("sub", sub)) => commands::subscriptions::handle(&mut store, sub)?,
        Some(("currency", sub)) => commands::currency::handle(&mut store, sub)?,
        Some(("report", sub)) => commands::reports::handle(&store, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&store, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
