//! Shared domain types for the Nutrijama food catalog
//!
//! This crate provides the types every other Nutrijama crate speaks:
//!
//! - **Nutrients**: the fixed per-100 g nutrient profile
//! - **Groups**: the static 13-group partition of the catalog
//! - **Food records**: raw entries and group-tagged catalog items

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod food;
pub mod groups;
pub mod nutrients;

pub use food::{FoodItem, FoodRecord};
pub use groups::{FoodGroup, GroupInfo, UnknownGroup};
pub use nutrients::NutrientProfile;
