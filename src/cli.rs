// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{crate_version, Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

pub fn build_cli() -> Command {
    Command::new("subclip")
        .version(crate_version!())
        .about("Multi-currency subscription expense tracking")
        .subcommand_required(false)
        .subcommand(Command::new("init").about("Initialize local storage and show its path"))
        .subcommand(
            Command::new("sub")
                .about("Manage subscriptions")
                .subcommand(
                    Command::new("add")
                        .about("Add a subscription")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(Arg::new("cost").long("cost").required(true).help(
                            "Amount paid per billing cycle",
                        ))
                        .arg(Arg::new("currency").long("currency").help(
                            "3-letter code; defaults to the display currency",
                        ))
                        .arg(
                            Arg::new("cycle")
                                .long("cycle")
                                .default_value("monthly")
                                .help("monthly|annual"),
                        )
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .default_value("Other"),
                        )
                        .arg(Arg::new("logo").long("logo").help(
                            "Preset logo key or image reference",
                        ))
                        .arg(Arg::new("end-date").long("end-date").help("YYYY-MM-DD"))
                        .arg(Arg::new("rate").long("rate").help(
                            "Rate converting 1 unit of the subscription currency into the display currency",
                        ))
                        .arg(Arg::new("rate-from").long("rate-from"))
                        .arg(Arg::new("rate-to").long("rate-to"))
                        .arg(
                            Arg::new("inactive")
                                .long("inactive")
                                .action(ArgAction::SetTrue)
                                .help("Create switched off"),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List subscriptions with normalized monthly cost")
                        .arg(Arg::new("category").long("category")),
                ))
                .subcommand(
                    Command::new("update")
                        .about("Update fields of a subscription")
                        .arg(Arg::new("id").required(true))
                        .arg(Arg::new("name").long("name"))
                        .arg(Arg::new("cost").long("cost"))
                        .arg(Arg::new("currency").long("currency"))
                        .arg(Arg::new("cycle").long("cycle"))
                        .arg(Arg::new("category").long("category"))
                        .arg(Arg::new("logo").long("logo"))
                        .arg(Arg::new("end-date").long("end-date"))
                        .arg(Arg::new("rate").long("rate"))
                        .arg(Arg::new("rate-from").long("rate-from"))
                        .arg(Arg::new("rate-to").long("rate-to")),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete a subscription")
                        .arg(Arg::new("id").required(true)),
                )
                .subcommand(
                    Command::new("toggle")
                        .about("Flip a subscription on/off")
                        .arg(Arg::new("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("currency")
                .about("Display currency settings")
                .subcommand(
                    Command::new("set")
                        .about("Set the display currency")
                        .arg(Arg::new("code").required(true)),
                )
                .subcommand(Command::new("show").about("Show the display currency"))
                .subcommand(Command::new("list").about("List known currencies")),
        )
        .subcommand(
            Command::new("report")
                .about("Spend reports in the display currency")
                .subcommand(json_flags(
                    Command::new("total").about("Total monthly spend over active subscriptions"),
                ))
                .subcommand(json_flags(
                    Command::new("by-category").about("Monthly spend per category"),
                )),
        )
        .subcommand(
            Command::new("export")
                .about("Export data")
                .subcommand(
                    Command::new("subscriptions")
                        .about("Export the subscription list")
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .default_value("csv")
                                .help("csv|json"),
                        )
                        .arg(Arg::new("out").long("out").required(true)),
                ),
        )
}
