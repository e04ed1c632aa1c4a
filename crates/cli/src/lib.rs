//! Terminal utilities for the Nutrijama CLI
//!
//! Provides shared CLI functionality:
//! - Status messages and headers
//! - Nutrient quantity formatting
//! - Progress indicators for the catalog load

#![warn(missing_docs)]

pub mod output;
pub mod progress;
