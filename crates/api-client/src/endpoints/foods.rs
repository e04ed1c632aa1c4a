//! Catalog read endpoints
//!
//! The nutrition service keeps one storage partition per food group;
//! `GET /foods/{group}` returns every record in one partition, ordered
//! name-ascending. [`FoodsApi::fetch_all`] walks the exhaustive group
//! table, tags each record with its group and flattens the result into
//! the single bulk read the catalog loader expects.

use crate::client::NutrijamaClient;
use crate::error::{ApiError, ApiResult};
use nutrijama_catalog::CatalogSource;
use nutrijama_core::{FoodGroup, FoodItem, FoodRecord};
use std::future::Future;
use tracing::{debug, warn};

/// Catalog read API interface
#[derive(Clone)]
pub struct FoodsApi {
    client: NutrijamaClient,
}

impl FoodsApi {
    /// Create a new foods API interface
    pub(crate) fn new(client: NutrijamaClient) -> Self {
        Self { client }
    }

    /// Fetch one group partition
    ///
    /// GET /foods/{group}
    pub async fn fetch_group(&self, group: FoodGroup) -> ApiResult<Vec<FoodItem>> {
        let path = format!("foods/{group}");
        let raw: Vec<serde_json::Value> = self.client.get(&path).await?;
        Ok(parse_group_records(group, raw))
    }

    /// Fetch the entire catalog, flattened across all group partitions
    ///
    /// Records arrive name-ascending within each group; consumers must
    /// not rely on that order.
    pub async fn fetch_all(&self) -> ApiResult<Vec<FoodItem>> {
        let mut all = Vec::new();
        for group in FoodGroup::ALL {
            let items = self.fetch_group(group).await?;
            debug!(group = %group, count = items.len(), "Fetched group partition");
            all.extend(items);
        }
        Ok(all)
    }
}

impl CatalogSource for FoodsApi {
    type Error = ApiError;

    fn fetch_catalog(
        &self,
    ) -> impl Future<Output = Result<Vec<FoodItem>, ApiError>> + Send {
        self.fetch_all()
    }
}

/// Parse raw partition records, tagging each with its group.
///
/// Malformed records are skipped with a warning; the upstream schema is
/// not under this client's control and one bad row must not fail the
/// whole catalog.
fn parse_group_records(group: FoodGroup, raw: Vec<serde_json::Value>) -> Vec<FoodItem> {
    let mut items = Vec::with_capacity(raw.len());
    for (index, value) in raw.into_iter().enumerate() {
        match serde_json::from_value::<FoodRecord>(value) {
            Ok(record) if record.name.trim().is_empty() => {
                warn!(group = %group, index = index, "Skipping record with empty name");
            }
            Ok(record) => items.push(FoodItem::new(record, group)),
            Err(e) => {
                warn!(
                    group = %group,
                    index = index,
                    error = %e,
                    "Skipping malformed catalog record"
                );
            }
        }
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn well_formed(id: u32, name: &str) -> serde_json::Value {
        json!({
            "id": id,
            "name": name,
            "energy": 52.0,
            "protein": 0.3,
            "total_fat": 0.2,
            "total_carbohydrates": 14.0,
            "fibra": 2.4,
            "calcium": 6.0,
            "fosforo": 11.0,
            "zinc": 0.04,
            "iron": 0.12,
            "sodium": 1.0,
            "potassium": 107.0
        })
    }

    #[test]
    fn test_parse_tags_records_with_group() {
        let raw = vec![well_formed(1, "Manzana"), well_formed(2, "Pera")];
        let items = parse_group_records(FoodGroup::Fruits, raw);

        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|i| i.group == FoodGroup::Fruits));
    }

    #[test]
    fn test_parse_skips_malformed_records() {
        let raw = vec![
            well_formed(1, "Manzana"),
            json!({"id": "not-a-number", "name": 42}),
            well_formed(3, "Uva"),
        ];
        let items = parse_group_records(FoodGroup::Fruits, raw);

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name(), "Manzana");
        assert_eq!(items[1].name(), "Uva");
    }

    #[test]
    fn test_parse_skips_empty_names() {
        let raw = vec![well_formed(1, "Manzana"), well_formed(2, "   ")];
        let items = parse_group_records(FoodGroup::Fruits, raw);
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_parse_empty_partition() {
        assert!(parse_group_records(FoodGroup::Eggs, Vec::new()).is_empty());
    }
}
