mod cli;
mod cmd;

use chrono::Local;
use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use std::process;
use tracing_subscriber::EnvFilter;

use calorie_tracker::db::DataFile;
use calorie_tracker::models::config::Config;
use calorie_tracker::output;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        // Printing help only fails if stdout is gone.
        let _ = Cli::command().print_help();
        return;
    };

    let config = Config::default();
    let db = DataFile::open(config.data_file());
    let date = cli.date.unwrap_or_else(|| Local::now().date_naive());
    let json = cli.json;

    let (name, result) = match command {
        Commands::Log { food, calories } => {
            ("log", cmd::log::run(&db, &food, calories, date, json))
        }
        Commands::Status => ("status", cmd::status::run(&db, date, json)),
        Commands::End => ("end", cmd::end::run(&db, date, json)),
        Commands::SetGoal { amount } => ("setgoal", cmd::goal::run(&db, amount, json)),
        Commands::History { days } => ("history", cmd::history::run(&db, date, days, json)),
        Commands::Show => ("show", cmd::show::run(&db, date, json)),
        Commands::Completions { shell } => ("completions", cmd::completions::run(shell)),
    };

    if let Err(e) = result {
        if json {
            let err = output::error(name, output::error_code(&e), &format!("{:#}", e));
            eprintln!("{}", err);
        } else {
            eprintln!("error: {:#}", e);
        }
        process::exit(1);
    }
}
