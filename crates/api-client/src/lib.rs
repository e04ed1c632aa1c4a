//! HTTP client for the Nutrijama nutrition service
//!
//! This crate provides the one external collaborator boundary of the
//! system: the service that owns persistent food storage.
//!
//! # Features
//!
//! - **Environment-based configuration**: Load URL and key from environment variables
//! - **Retry with exponential backoff**: Automatic retry for transient failures
//! - **Request correlation**: Track requests with unique IDs for debugging
//! - **Lenient catalog parsing**: Malformed records are skipped and logged,
//!   never fatal
//!
//! # Example
//!
//! ```rust,no_run
//! use nutrijama_api_client::{ClientConfig, NutrijamaClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = NutrijamaClient::new()?;
//!
//!     // Check health
//!     let health = client.health().check().await?;
//!     println!("Service status: {}", health.status);
//!
//!     // Fetch the full catalog
//!     let foods = client.foods().fetch_all().await?;
//!     println!("Got {} foods", foods.len());
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod retry;

pub use client::NutrijamaClient;
pub use config::{ClientConfig, Environment};
pub use error::{ApiError, ApiResult};
pub use retry::RetryConfig;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::client::NutrijamaClient;
    pub use crate::config::{ClientConfig, Environment};
    pub use crate::endpoints::{FoodsApi, HealthApi, SearchApi};
    pub use crate::error::{ApiError, ApiResult};
}
