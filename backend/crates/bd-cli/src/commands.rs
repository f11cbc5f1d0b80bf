use crate::{CliClientResult, Client, SprintCommands, SprintInput};

use clap::Subcommand;
use serde_json::Value;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check that the server is running
    Health,

    /// Sprint operations
    Sprint {
        #[command(subcommand)]
        action: SprintCommands,
    },

    /// Generate synthetic burndown data
    Sample {
        #[arg(long)]
        total_points: Option<f64>,

        #[arg(long)]
        duration_days: Option<u32>,

        /// ideal, delayed, ahead or stuck
        #[arg(long)]
        scenario: Option<String>,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Run one command against the server and return the response body
pub async fn execute(client: &Client, command: Commands) -> CliClientResult<Value> {
    match command {
        Commands::Health => client.health().await,

        Commands::Sprint { action } => match action {
            SprintCommands::List => client.list_sprints().await,
            SprintCommands::Get { id } => client.get_sprint(&id).await,
            SprintCommands::Create {
                total_points,
                sprint_duration,
                daily_progress,
            } => {
                let input =
                    SprintInput::parse(total_points, sprint_duration, daily_progress.as_deref())?;
                client.create_sprint(&input).await
            }
            SprintCommands::Update {
                id,
                total_points,
                sprint_duration,
                daily_progress,
            } => {
                let input =
                    SprintInput::parse(total_points, sprint_duration, daily_progress.as_deref())?;
                client.update_sprint(&id, &input).await
            }
            SprintCommands::Delete { id } => client.delete_sprint(&id).await,
            SprintCommands::Burndown { id } => client.sprint_burndown(&id).await,
        },

        Commands::Sample {
            total_points,
            duration_days,
            scenario,
            seed,
        } => {
            client
                .sample_burndown(total_points, duration_days, scenario.as_deref(), seed)
                .await
        }
    }
}
