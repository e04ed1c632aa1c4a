//! In-memory food search for Nutrijama.
//!
//! This crate provides:
//! - Accent- and punctuation-insensitive text normalization
//! - Substring filtering over the loaded catalog
//! - Deterministic three-tier relevance ranking with a result cap
//! - Query supersession tickets for search-as-you-type

#![warn(missing_docs)]
#![warn(clippy::all)]

mod engine;
mod normalize;
mod relevance;
mod session;

pub use engine::{MAX_RESULTS, MIN_QUERY_CHARS, rank, search};
pub use normalize::normalize;
pub use relevance::{RelevanceTier, relevance_tier};
pub use session::{QueryTicket, SearchSession};
