//! `graph-positions` - save, load and delete graph node layouts from the shell.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser, Debug)]
#[command(
    name = "graph-positions",
    author,
    version,
    about = "Save, load and delete node layouts on the graph position service",
    long_about = None
)]
struct Cli {
    /// Position service base URL (defaults to http://localhost:8080)
    #[arg(long, env = "API_BASE_URL", global = true)]
    base_url: Option<String>,

    /// Bearer token sent in the Authorization header
    #[arg(long, env = "API_TOKEN", global = true, hide_env_values = true)]
    token: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Save positions from a JSON file (`{"node": {"x": 0, "y": 0}, ...}`).
    Save {
        graph_id: String,

        /// File holding the node positions.
        #[arg(short, long)]
        file: PathBuf,

        /// Layout algorithm recorded with the positions.
        #[arg(long)]
        layout_algorithm: Option<String>,

        /// Author recorded with the positions.
        #[arg(long)]
        saved_by: Option<String>,
    },

    /// Print the saved positions of a graph.
    Get { graph_id: String },

    /// Delete the saved positions of a graph.
    Delete { graph_id: String },
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let client = commands::build_client(cli.base_url.as_deref(), cli.token.as_deref());
    tracing::debug!(base_url = client.config().base_url(), "using position service");

    match cli.command {
        Commands::Save {
            graph_id,
            file,
            layout_algorithm,
            saved_by,
        } => {
            let positions = commands::read_positions(&file)?;
            let request =
                commands::save_request(&graph_id, positions, layout_algorithm, saved_by);
            let saved = client
                .save_graph_positions(&request)
                .await
                .with_context(|| format!("saving positions for '{}'", graph_id))?;

            println!("{}", serde_json::to_string_pretty(&saved)?);
        }
        Commands::Get { graph_id } => {
            let saved = client
                .get_graph_positions(&graph_id)
                .await
                .with_context(|| format!("loading positions for '{}'", graph_id))?;

            match saved {
                Some(saved) => println!("{}", serde_json::to_string_pretty(&saved)?),
                None => eprintln!("No positions saved for graph '{}'", graph_id),
            }
        }
        Commands::Delete { graph_id } => {
            client
                .delete_graph_positions(&graph_id)
                .await
                .with_context(|| format!("deleting positions for '{}'", graph_id))?;

            tracing::info!(graph_id = %graph_id, "positions deleted");
        }
    }

    Ok(())
}
