//! burndown - Sprint burndown tracker CLI
//!
//! # Examples
//!
//! ```bash
//! # Submit a sprint
//! burndown sprint create --total-points 40 --sprint-duration 10 --daily-progress "5, 3, 4"
//!
//! # Chart data for it
//! burndown sprint burndown 1 --pretty
//!
//! # Synthetic data against a non-default server
//! burndown --server http://127.0.0.1:8000 sample --scenario delayed --seed 7
//! ```

use bd_cli::{Cli, Client, execute, format_error_message};

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let client = Client::new(&cli.server);

    match execute(&client, cli.command).await {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("{}", format_error_message(&e));
            ExitCode::FAILURE
        }
    }
}
