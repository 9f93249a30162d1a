use anyhow::Result;
use clap::Parser;
use clap::error::ErrorKind;
use privat_rates::cli::ui::{StyleType, style_text};
use privat_rates::core::FetchConfig;
use privat_rates::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Number of past days to fetch (at most 10)
    #[arg(allow_negative_numbers = true)]
    period: i64,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => print!("{e}"),
                _ => println!("{}", style_text(&e.to_string(), StyleType::Error)),
            }
            std::process::exit(e.exit_code());
        }
    };

    init_logging(cli.verbose);

    let result = privat_rates::run(cli.period, &FetchConfig::default()).await;

    match &result {
        Ok(history) => print!("{history}"),
        Err(e) => tracing::error!(error = %e, "Application failed"),
    }
    result.map(|_| ())
}
