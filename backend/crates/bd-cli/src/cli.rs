use crate::{Commands, DEFAULT_SERVER_URL};

use clap::Parser;

#[derive(Parser)]
#[command(name = "burndown")]
#[command(about = "Sprint burndown tracker CLI")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Server URL
    #[arg(long, global = true, env = "BD_SERVER_URL", default_value = DEFAULT_SERVER_URL)]
    pub server: String,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
