//! Meal ingredients: catalog-derived or user-authored.

use nutrijama_core::{FoodGroup, FoodItem, NutrientProfile};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One ingredient in a meal plan: a nutrient profile (per 100 g) paired
/// with an actual portion weight in grams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealIngredient {
    /// Stable identifier within the plan
    pub id: String,
    /// Display name
    pub name: String,
    /// Portion weight in grams
    pub weight: f64,
    /// Nutrient quantities per 100 g
    pub nutrition: NutrientProfile,
    /// Source group for catalog-derived ingredients
    #[serde(
        rename = "groupId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub group: Option<FoodGroup>,
    /// Whether the user authored the profile instead of picking a
    /// catalog food
    #[serde(rename = "isCustom")]
    pub custom: bool,
}

impl MealIngredient {
    /// Build an ingredient from a catalog food and a portion weight.
    #[must_use]
    pub fn from_food(food: &FoodItem, weight: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: food.name().to_string(),
            weight,
            nutrition: food.record.nutrients,
            group: Some(food.group),
            custom: false,
        }
    }

    /// Build a user-authored ingredient. Nutrients the user left out are
    /// zero in `nutrition`.
    #[must_use]
    pub fn custom(name: impl Into<String>, nutrition: NutrientProfile, weight: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            weight,
            nutrition,
            group: None,
            custom: true,
        }
    }

    /// Nutrients of this actual portion (profile × weight / 100).
    #[must_use]
    pub fn portion_nutrition(&self) -> NutrientProfile {
        self.nutrition.scaled(self.weight / 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nutrijama_core::FoodRecord;

    fn apple() -> FoodItem {
        FoodItem::new(
            FoodRecord {
                id: 1,
                name: "Manzana".to_string(),
                nutrients: NutrientProfile {
                    energy: 52.0,
                    ..Default::default()
                },
                image: None,
            },
            FoodGroup::Fruits,
        )
    }

    #[test]
    fn test_from_food_keeps_group() {
        let ingredient = MealIngredient::from_food(&apple(), 150.0);
        assert_eq!(ingredient.name, "Manzana");
        assert_eq!(ingredient.group, Some(FoodGroup::Fruits));
        assert!(!ingredient.custom);
    }

    #[test]
    fn test_custom_has_no_group() {
        let ingredient = MealIngredient::custom(
            "Quinoa cocida",
            NutrientProfile {
                energy: 120.0,
                ..Default::default()
            },
            80.0,
        );
        assert!(ingredient.custom);
        assert!(ingredient.group.is_none());
    }

    #[test]
    fn test_portion_scaling() {
        let ingredient = MealIngredient::from_food(&apple(), 150.0);
        let portion = ingredient.portion_nutrition();
        assert!((portion.energy - 78.0).abs() < 1e-9);
    }

    #[test]
    fn test_unique_ids() {
        let a = MealIngredient::from_food(&apple(), 100.0);
        let b = MealIngredient::from_food(&apple(), 100.0);
        assert_ne!(a.id, b.id);
    }
}
