//! Legacy server-side search endpoint
//!
//! Degraded fallback for when the full catalog is not pre-loaded:
//! `GET /search?q=` runs a case-insensitive containment filter on the
//! service and returns up to 10 matches per food group, already tagged.
//! It does no diacritic folding, so its match semantics are weaker than
//! the in-memory engine's; callers aggregate the matches and re-rank
//! them client-side the same way.

use crate::client::NutrijamaClient;
use crate::error::ApiResult;
use nutrijama_core::FoodItem;
use tracing::warn;

/// Minimum query length accepted by the filter; shorter queries return
/// empty without a request.
pub const MIN_QUERY_LEN: usize = 2;

/// Legacy search API interface
#[derive(Clone)]
pub struct SearchApi {
    client: NutrijamaClient,
}

impl SearchApi {
    /// Create a new search API interface
    pub(crate) fn new(client: NutrijamaClient) -> Self {
        Self { client }
    }

    /// Query foods by name
    ///
    /// GET /search?q=<query>
    pub async fn query(&self, query: &str) -> ApiResult<Vec<FoodItem>> {
        if query.trim().chars().count() < MIN_QUERY_LEN {
            return Ok(Vec::new());
        }

        let raw: Vec<serde_json::Value> =
            self.client.get_with_query("search", &[("q", query)]).await?;

        let mut items = Vec::with_capacity(raw.len());
        for (index, value) in raw.into_iter().enumerate() {
            match serde_json::from_value::<FoodItem>(value) {
                Ok(item) => items.push(item),
                Err(e) => {
                    warn!(index = index, error = %e, "Skipping malformed search result");
                }
            }
        }
        Ok(items)
    }
}
