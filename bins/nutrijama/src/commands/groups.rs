//! Groups command - list the catalog's food groups

use anyhow::Result;
use nutrijama_cli::output::group_style;
use nutrijama_core::FoodGroup;
use owo_colors::OwoColorize;
use serde::Serialize;

/// JSON output for groups
#[derive(Debug, Serialize)]
struct JsonGroup {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    icon: &'static str,
}

/// Run the groups command
pub fn run(format: &str) -> Result<()> {
    if format == "json" {
        let groups: Vec<JsonGroup> = FoodGroup::ALL
            .iter()
            .map(|g| {
                let info = g.info();
                JsonGroup {
                    id: info.id,
                    name: info.name,
                    description: info.description,
                    icon: info.icon,
                }
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&groups)?);
        return Ok(());
    }

    println!();
    println!("  {}", "Grupos de alimentos".bold());
    println!("  {}", "─".repeat(60).dimmed());

    for group in FoodGroup::ALL {
        let info = group.info();
        let style = group_style(group);
        println!(
            "  {} {:<20} {:<16} {}",
            info.icon,
            style.apply_to(info.name),
            info.id.dimmed(),
            info.description
        );
    }

    println!();
    println!(
        "  Total: {} grupos",
        FoodGroup::ALL.len().to_string().green()
    );
    println!();

    Ok(())
}
