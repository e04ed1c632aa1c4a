//! Health command - probe the nutrition service

use anyhow::Result;
use nutrijama_api_client::NutrijamaClient;
use nutrijama_cli::output::Status;

/// Run the health command
pub async fn run(format: &str) -> Result<()> {
    let client = NutrijamaClient::new()?;
    let health = client.health().check().await?;

    if format == "json" {
        println!(
            "{}",
            serde_json::json!({
                "status": health.status,
                "version": health.version,
                "base_url": client.base_url(),
            })
        );
        return Ok(());
    }

    if health.is_healthy() {
        Status::success(&format!("Servicio disponible ({})", client.base_url()));
    } else {
        Status::warning(&format!("Servicio degradado: {}", health.status));
    }

    if let Some(version) = health.version {
        Status::info(&format!("Versión: {version}"));
    }

    Ok(())
}
