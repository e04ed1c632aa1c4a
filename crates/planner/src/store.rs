//! File-backed meal plan storage with expiration.
//!
//! Plans live in one JSON file and expire twelve hours after creation.
//! Expired plans are dropped when the store is opened and the cleaned
//! state is written back, so the file never accumulates stale meals.

use crate::error::{PlanError, Result};
use crate::ingredient::MealIngredient;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

/// How long a saved plan stays valid.
pub const PLAN_TTL_HOURS: i64 = 12;

/// A named meal plan with a creation and expiration timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedMealPlan {
    /// Stable identifier
    pub id: String,
    /// User-chosen name
    pub name: String,
    /// The meal's ingredients
    pub ingredients: Vec<MealIngredient>,
    /// When the plan was created
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    /// When the plan stops being offered
    #[serde(rename = "expiresAt")]
    pub expires_at: DateTime<Utc>,
}

impl SavedMealPlan {
    /// Whether the plan has expired as of `now`.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }

    /// Time left before expiration, or `None` if already expired.
    #[must_use]
    pub fn time_until_expiration(&self, now: DateTime<Utc>) -> Option<Duration> {
        let left = self.expires_at - now;
        (left > Duration::zero()).then_some(left)
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct PlanFile {
    plans: Vec<SavedMealPlan>,
    #[serde(
        rename = "currentPlan",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    current_plan: Option<String>,
}

/// JSON-file-backed store of meal plans.
pub struct PlanStore {
    path: PathBuf,
    state: PlanFile,
}

impl PlanStore {
    /// Open (or create) the store at `path`, dropping expired plans.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let mut state = if path.exists() {
            serde_json::from_str(&fs::read_to_string(&path)?)?
        } else {
            PlanFile::default()
        };

        let now = Utc::now();
        let before = state.plans.len();
        state.plans.retain(|plan| !plan.is_expired(now));

        if let Some(ref current) = state.current_plan {
            if !state.plans.iter().any(|p| &p.id == current) {
                state.current_plan = None;
            }
        }

        let mut store = Self { path, state };
        if before != store.state.plans.len() {
            debug!(
                dropped = before - store.state.plans.len(),
                "Dropped expired meal plans"
            );
            store.persist()?;
        }
        Ok(store)
    }

    /// Open the store at the platform's default data location.
    pub fn default_store() -> Result<Self> {
        let dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from(".nutrijama"))
            .join("nutrijama");
        fs::create_dir_all(&dir)?;
        Self::open(dir.join("meal-plans.json"))
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All live (non-expired) plans.
    #[must_use]
    pub fn plans(&self) -> &[SavedMealPlan] {
        &self.state.plans
    }

    /// The currently selected plan, if any.
    #[must_use]
    pub fn current_plan(&self) -> Option<&SavedMealPlan> {
        let id = self.state.current_plan.as_deref()?;
        self.state.plans.iter().find(|p| p.id == id)
    }

    /// Create a plan, make it current and persist.
    pub fn save_plan(
        &mut self,
        name: impl Into<String>,
        ingredients: Vec<MealIngredient>,
    ) -> Result<SavedMealPlan> {
        let now = Utc::now();
        let plan = SavedMealPlan {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            ingredients,
            created_at: now,
            expires_at: now + Duration::hours(PLAN_TTL_HOURS),
        };

        self.state.current_plan = Some(plan.id.clone());
        self.state.plans.push(plan.clone());
        self.persist()?;
        Ok(plan)
    }

    /// Make an existing plan current and persist. Returns `false` when no
    /// plan has that id.
    pub fn select_plan(&mut self, id: &str) -> Result<bool> {
        if !self.state.plans.iter().any(|p| p.id == id) {
            return Ok(false);
        }
        self.state.current_plan = Some(id.to_string());
        self.persist()?;
        Ok(true)
    }

    /// Replace the current plan's ingredients and persist. Returns
    /// `false` when no plan is current.
    pub fn update_current(&mut self, ingredients: Vec<MealIngredient>) -> Result<bool> {
        let Some(id) = self.state.current_plan.clone() else {
            return Ok(false);
        };
        if let Some(plan) = self.state.plans.iter_mut().find(|p| p.id == id) {
            plan.ingredients = ingredients;
            self.persist()?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Delete a plan by id and persist. Returns `false` when no plan has
    /// that id.
    pub fn delete_plan(&mut self, id: &str) -> Result<bool> {
        let before = self.state.plans.len();
        self.state.plans.retain(|p| p.id != id);
        if self.state.plans.len() == before {
            return Ok(false);
        }
        if self.state.current_plan.as_deref() == Some(id) {
            self.state.current_plan = None;
        }
        self.persist()?;
        Ok(true)
    }

    /// Clear the current-plan selection (start fresh) and persist.
    pub fn clear_current(&mut self) -> Result<()> {
        self.state.current_plan = None;
        self.persist()
    }

    fn persist(&mut self) -> Result<()> {
        fs::write(&self.path, serde_json::to_string_pretty(&self.state)?)
            .map_err(PlanError::from)
    }
}
