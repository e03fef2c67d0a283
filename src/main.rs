// src/main.rs
use clap::Parser;

use passdefender::cli::{handlers, menu, Args, CliCommand};
use passdefender::models::SeedSet;

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp_secs()
        .parse_default_env()
        .init();

    let args = Args::parse();
    log::debug!("command line args: {:?}", args);

    let result = match args.command {
        Some(CliCommand::Analyze { password }) => handlers::handle_analyze(&password, args.json),
        Some(CliCommand::Wordlist {
            name,
            pet,
            year,
            place,
            number,
            output,
        }) => {
            let seeds = SeedSet {
                name,
                pet,
                year,
                place,
                number,
            };
            handlers::handle_wordlist(&seeds, output.as_deref(), args.json)
        }
        None => menu::run_menu(),
    };

    if let Err(e) = result {
        eprintln!("❌ {e}");
        std::process::exit(1);
    }
}
