use anyhow::Result;
use clap::Parser;
use tracing_subscriber::FmtSubscriber;

mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::util::configure_threads;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("setting default tracing subscriber");

    configure_threads(&cli.threads);

    match &cli.command {
        Commands::Resolve { inputs, output } => commands::pipeline::handle_resolve(inputs, output),
        Commands::Enrich { inputs, output } => commands::pipeline::handle_enrich(inputs, output),
        Commands::View {
            kind,
            inputs,
            output,
        } => commands::pipeline::handle_view(*kind, inputs, output),
        Commands::Hex {
            points,
            level,
            coords,
            output,
        } => commands::hex::handle(points, *level, coords, output),
    }
}
