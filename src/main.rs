// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use eventclip::{api, cli, commands, config};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    match matches.subcommand() {
        Some(("config", sub)) => match sub.subcommand() {
            Some(("show", _)) => {
                let cfg = config::load()?;
                let env = std::env::var(config::API_URL_ENV).ok();
                println!("API URL: {}", config::resolve_api_url(env, &cfg));
                println!("Config file: {}", config::config_path()?.display());
            }
            Some(("set-url", s)) => {
                let url = s.get_one::<String>("url").unwrap().trim().to_string();
                let mut cfg = config::load()?;
                cfg.api_url = Some(url.clone());
                config::save(&cfg)?;
                println!("API URL set to {}", url);
            }
            _ => {}
        },
        Some((name, sub)) => {
            let client = api::ApiClient::from_config()?;
            match name {
                "dashboard" => commands::dashboard::handle(&client, sub)?,
                "event" => commands::events::handle(&client, sub)?,
                "expense" => commands::expenses::handle(&client, sub)?,
                "import" => commands::importer::handle(&client, sub)?,
                "export" => commands::exporter::handle(&client, sub)?,
                "doctor" => commands::doctor::handle(&client)?,
                _ => {
                    cli::build_cli().print_help()?;
                    println!();
                }
            }
        }
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
