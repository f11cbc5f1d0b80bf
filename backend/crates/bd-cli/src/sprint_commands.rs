use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum SprintCommands {
    /// List all sprints
    List,

    /// Get a sprint by ID
    Get {
        /// Sprint ID
        id: String,
    },

    /// Submit a new sprint
    Create {
        /// Total story points
        #[arg(long)]
        total_points: f64,

        /// Sprint duration in days
        #[arg(long)]
        sprint_duration: f64,

        /// Points completed per day, comma separated (e.g. "5, 3, 4")
        #[arg(long)]
        daily_progress: Option<String>,
    },

    /// Replace a sprint's values. Progress left out keeps its stored value.
    Update {
        /// Sprint ID
        id: String,

        #[arg(long)]
        total_points: f64,

        #[arg(long)]
        sprint_duration: f64,

        #[arg(long)]
        daily_progress: Option<String>,
    },

    /// Delete a sprint
    Delete {
        /// Sprint ID
        id: String,
    },

    /// Ideal line, actual line and metrics for a sprint
    Burndown {
        /// Sprint ID
        id: String,
    },
}
