//! Search command - query the food catalog

use super::load_catalog;
use anyhow::Result;
use nutrijama_api_client::NutrijamaClient;
use nutrijama_cli::output::{Status, format_kcal, group_style};
use nutrijama_core::FoodItem;
use owo_colors::OwoColorize;

/// Run the search command
pub async fn run(query: &str, remote: bool, format: &str) -> Result<()> {
    let client = NutrijamaClient::new()?;

    let results = if remote {
        // Degraded path: the service filters per group, we re-rank.
        let matches = client.search().query(query).await?;
        nutrijama_search::rank(query, matches)
    } else {
        let catalog = load_catalog(&client).await?;
        nutrijama_search::search(query, &catalog)
    };

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        Status::info("No se encontraron alimentos");
        return Ok(());
    }

    Status::header(&format!("Resultados para \"{query}\""));
    for item in &results {
        print_result(item);
    }
    println!();

    Ok(())
}

fn print_result(item: &FoodItem) {
    let style = group_style(item.group);
    println!(
        "  {} {:<40} {:<16} {}",
        item.group_icon(),
        item.name(),
        style.apply_to(item.group_name()),
        format_kcal(item.energy()).dimmed()
    );
}
