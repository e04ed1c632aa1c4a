//! Nutrijama CLI - food catalog search and meal planning
//!
//! Searches the Spanish-language food catalog as served by the Nutrijama
//! nutrition service and aggregates nutrient profiles into meal plans.

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::process::ExitCode;

mod commands;

use commands::{groups, health, plan, search};

/// Food catalog search and meal planning CLI
#[derive(Parser)]
#[command(name = "nutrijama")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (text, json)
    #[arg(short, long, global = true, default_value = "text")]
    format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the food catalog by name
    Search {
        /// Free-text query (minimum 2 characters)
        query: String,

        /// Use the legacy server-side filter instead of loading the
        /// full catalog
        #[arg(short, long)]
        remote: bool,
    },

    /// List the food groups
    Groups,

    /// Manage meal plans
    Plan {
        #[command(subcommand)]
        action: PlanAction,
    },

    /// Check nutrition service health
    Health,
}

#[derive(Subcommand)]
enum PlanAction {
    /// Create a meal plan from catalog foods
    New {
        /// Plan name
        name: String,

        /// Ingredients as NAME:GRAMS (e.g. "arroz blanco:150"), resolved
        /// against the catalog by best search match
        #[arg(required = true)]
        ingredients: Vec<String>,
    },

    /// List saved meal plans
    List,

    /// Show one plan with its nutrition totals
    Show {
        /// Plan id (prefix accepted)
        id: String,
    },

    /// Delete a plan
    Delete {
        /// Plan id (prefix accepted)
        id: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("nutrijama=debug,nutrijama_catalog=debug,nutrijama_api_client=debug")
            .init();
    }

    let result = match cli.command {
        Commands::Search { query, remote } => search::run(&query, remote, &cli.format).await,

        Commands::Groups => groups::run(&cli.format),

        Commands::Plan { action } => match action {
            PlanAction::New { name, ingredients } => plan::new(&name, &ingredients).await,
            PlanAction::List => plan::list(),
            PlanAction::Show { id } => plan::show(&id),
            PlanAction::Delete { id } => plan::delete(&id),
        },

        Commands::Health => health::run(&cli.format).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
