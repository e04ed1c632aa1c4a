//! Aggregate nutrition across a meal's ingredients.

use crate::ingredient::MealIngredient;
use nutrijama_core::NutrientProfile;
use serde::Serialize;

/// Summed nutrition of a whole meal.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NutritionTotals {
    /// Sum of every ingredient's portion nutrition
    pub nutrients: NutrientProfile,
    /// Combined weight of all portions in grams
    pub total_weight: f64,
}

/// Sum each ingredient's per-100 g profile scaled to its portion weight.
#[must_use]
pub fn totals(ingredients: &[MealIngredient]) -> NutritionTotals {
    let mut summary = NutritionTotals::default();
    for ingredient in ingredients {
        summary
            .nutrients
            .accumulate(&ingredient.nutrition, ingredient.weight / 100.0);
        summary.total_weight += ingredient.weight;
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ingredient(name: &str, energy: f64, protein: f64, weight: f64) -> MealIngredient {
        MealIngredient::custom(
            name,
            NutrientProfile {
                energy,
                protein,
                ..Default::default()
            },
            weight,
        )
    }

    #[test]
    fn test_empty_meal() {
        let summary = totals(&[]);
        assert_eq!(summary.total_weight, 0.0);
        assert_eq!(summary.nutrients.energy, 0.0);
    }

    #[test]
    fn test_totals_scale_by_portion_weight() {
        let meal = vec![
            // 150 g of rice at 130 kcal / 2.7 g protein per 100 g
            ingredient("Arroz Blanco", 130.0, 2.7, 150.0),
            // 50 g of lentils at 116 kcal / 9.0 g protein per 100 g
            ingredient("Lentejas", 116.0, 9.0, 50.0),
        ];

        let summary = totals(&meal);
        assert!((summary.total_weight - 200.0).abs() < 1e-9);
        assert!((summary.nutrients.energy - (195.0 + 58.0)).abs() < 1e-9);
        assert!((summary.nutrients.protein - (4.05 + 4.5)).abs() < 1e-9);
    }
}
