pub mod check;
pub mod normalize;
pub mod shorten;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "chanslug")]
#[command(version)]
#[command(about = "Channel URL slug tools", long_about = None)]
pub struct Cli {
    #[arg(short, long, default_value = "chanslug.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    Check {
        candidate: String,
        #[arg(long)]
        json: bool,
    },
    Normalize {
        raw: String,
    },
    Shorten {
        url: String,
        #[arg(short, long)]
        max: Option<usize>,
    },
}
