use channel_slug::cli::{Cli, Commands};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "channel_slug=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Check { candidate, json }) => {
            channel_slug::cli::check::run(&candidate, json)?;
        }
        Some(Commands::Normalize { raw }) => {
            channel_slug::cli::normalize::run(&cli.config, &raw)?;
        }
        Some(Commands::Shorten { url, max }) => {
            channel_slug::cli::shorten::run(&cli.config, &url, max)?;
        }
        None => {
            // No subcommand provided, print help
            use clap::CommandFactory;
            Cli::command().print_help()?;
        }
    }

    Ok(())
}
