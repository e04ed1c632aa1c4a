//! The external collaborator that owns persistent food storage.

use nutrijama_core::FoodItem;
use std::fmt;
use std::future::Future;

/// A source able to deliver the entire catalog in one bulk read.
///
/// The returned list is already flattened across all group partitions,
/// each record tagged with its group, ordered name-ascending within each
/// group. Consumers must not rely on that ordering; the search engine
/// re-sorts.
pub trait CatalogSource {
    /// Failure reported by the source; stored by the loader as a
    /// readable description.
    type Error: fmt::Display + Send + Sync;

    /// Fetch the full flattened catalog.
    fn fetch_catalog(&self)
    -> impl Future<Output = Result<Vec<FoodItem>, Self::Error>> + Send;
}
