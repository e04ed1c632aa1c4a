//! CLI command implementations

pub mod groups;
pub mod health;
pub mod plan;
pub mod search;

use anyhow::Result;
use nutrijama_api_client::NutrijamaClient;
use nutrijama_catalog::{CatalogLoader, LoadState};
use nutrijama_cli::output::{Status, format_count};
use nutrijama_cli::progress;
use nutrijama_core::FoodItem;
use std::sync::Arc;

/// Load the full catalog with a spinner, reporting the outcome.
///
/// A load failure is reported but not fatal: the caller gets the empty
/// catalog and searches simply find nothing, matching the loader's
/// non-blocking error contract.
pub(crate) async fn load_catalog(client: &NutrijamaClient) -> Result<Arc<Vec<FoodItem>>> {
    let loader = CatalogLoader::new();
    let pb = progress::spinner("Cargando base de datos...");

    let state = loader.load(&client.foods()).await;
    match state {
        LoadState::Loaded => {
            let foods = loader.foods();
            progress::finish_success(
                &pb,
                &format!(
                    "Base de datos cargada ({})",
                    format_count(foods.len(), "alimento", "alimentos")
                ),
            );
            Ok(foods)
        }
        _ => {
            progress::finish_error(&pb, "No se pudo cargar la base de datos");
            if let Some(err) = loader.error() {
                Status::warning(&err.to_string());
            }
            Ok(loader.foods())
        }
    }
}
