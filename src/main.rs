// Days Countdown
// Main entry point

use anyhow::Result;
use chrono::Utc;
use clap::Parser;

use days_countdown::cli::{self, Args, Output};

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();
    match cli::run(&args, Utc::now())? {
        Output::Page { path, label } => {
            log::info!("updated {} with `{label}`", path.display());
        }
        Output::Text(text) => println!("{text}"),
    }

    Ok(())
}
