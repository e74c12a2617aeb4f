use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use contacts::cli::{self, context::CliContext};
use contacts::Config;

#[derive(Parser)]
#[command(name = "contacts")]
#[command(version, about = "Interactive contact book", long_about = None)]
struct Args {
    /// Days ahead covered by the `birthdays` command
    #[arg(long)]
    horizon_days: Option<u32>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let mut config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    if let Some(days) = args.horizon_days {
        config.birthday_horizon_days = days;
    }

    // stderr only; stdout carries command output.
    let fallback = if args.verbose { "debug" } else { config.log_level.as_str() };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(horizon_days = config.birthday_horizon_days, "starting contact book");

    let mut ctx = CliContext::new(&config);
    let stdin = std::io::stdin();
    if let Err(e) = cli::run(&mut ctx, stdin.lock(), std::io::stdout()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
