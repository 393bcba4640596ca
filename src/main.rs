mod args;
mod cli;
mod config;
mod error;
mod options;

use cli::Args;

use clap::Parser;
use eyre::Result;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let args = Args::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(if args.verbose {
            Level::TRACE
        } else {
            Level::INFO
        })
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut parsed = args.to_parsed();
    config::merge(&mut parsed, args.config.as_ref())?;

    let opts = options::resolve(&parsed)?;
    tracing::info!(
        "Translating {} to {} with {} ({})...",
        opts.source(),
        opts.destination(),
        opts.api(),
        opts.lang()
    );
    if opts.api_key().is_none() {
        tracing::debug!("No API key configured");
    }

    println!("{}", serde_json::to_string_pretty(&opts)?);

    Ok(())
}
