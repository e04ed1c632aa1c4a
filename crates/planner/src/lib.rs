//! Meal planning for Nutrijama.
//!
//! Combines catalog foods and user-authored ingredients into meals,
//! aggregates their nutrition, and keeps named plans in a local store
//! that expires them after twelve hours.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod ingredient;
mod store;
mod totals;

pub use error::{PlanError, Result};
pub use ingredient::MealIngredient;
pub use store::{PLAN_TTL_HOURS, PlanStore, SavedMealPlan};
pub use totals::{NutritionTotals, totals};
