//! Nutrient quantities per 100 g of an edible product.

use serde::{Deserialize, Serialize};

/// Fixed set of nutrient quantities, expressed per 100 g.
///
/// Energy is in kcal, macronutrients in grams, minerals in milligrams.
/// All values are non-negative. Wire names follow the upstream nutrition
/// service's schema, which mixes Spanish and English column names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientProfile {
    /// Energy in kcal
    pub energy: f64,
    /// Protein in grams
    pub protein: f64,
    /// Total fat in grams
    pub total_fat: f64,
    /// Total carbohydrates in grams
    pub total_carbohydrates: f64,
    /// Dietary fiber in grams
    #[serde(rename = "fibra")]
    pub fiber: f64,
    /// Calcium in milligrams
    pub calcium: f64,
    /// Phosphorus in milligrams
    #[serde(rename = "fosforo")]
    pub phosphorus: f64,
    /// Zinc in milligrams
    pub zinc: f64,
    /// Iron in milligrams
    pub iron: f64,
    /// Sodium in milligrams
    pub sodium: f64,
    /// Potassium in milligrams
    pub potassium: f64,
}

impl NutrientProfile {
    /// Return this profile scaled by `factor`.
    ///
    /// Used to convert per-100 g values to an actual portion weight
    /// (`factor = grams / 100`).
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            energy: self.energy * factor,
            protein: self.protein * factor,
            total_fat: self.total_fat * factor,
            total_carbohydrates: self.total_carbohydrates * factor,
            fiber: self.fiber * factor,
            calcium: self.calcium * factor,
            phosphorus: self.phosphorus * factor,
            zinc: self.zinc * factor,
            iron: self.iron * factor,
            sodium: self.sodium * factor,
            potassium: self.potassium * factor,
        }
    }

    /// Add `other` scaled by `factor` into this profile in place.
    pub fn accumulate(&mut self, other: &Self, factor: f64) {
        self.energy += other.energy * factor;
        self.protein += other.protein * factor;
        self.total_fat += other.total_fat * factor;
        self.total_carbohydrates += other.total_carbohydrates * factor;
        self.fiber += other.fiber * factor;
        self.calcium += other.calcium * factor;
        self.phosphorus += other.phosphorus * factor;
        self.zinc += other.zinc * factor;
        self.iron += other.iron * factor;
        self.sodium += other.sodium * factor;
        self.potassium += other.potassium * factor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled() {
        let profile = NutrientProfile {
            energy: 52.0,
            protein: 0.3,
            ..Default::default()
        };

        let half = profile.scaled(0.5);
        assert!((half.energy - 26.0).abs() < f64::EPSILON);
        assert!((half.protein - 0.15).abs() < f64::EPSILON);
    }

    #[test]
    fn test_accumulate() {
        let mut total = NutrientProfile::default();
        let rice = NutrientProfile {
            energy: 130.0,
            total_carbohydrates: 28.0,
            ..Default::default()
        };

        // 150 g of rice
        total.accumulate(&rice, 1.5);
        assert!((total.energy - 195.0).abs() < 1e-9);
        assert!((total.total_carbohydrates - 42.0).abs() < 1e-9);
    }

    #[test]
    fn test_wire_field_names() {
        let json = r#"{
            "energy": 52.0,
            "protein": 0.3,
            "total_fat": 0.2,
            "total_carbohydrates": 14.0,
            "fibra": 2.4,
            "calcium": 6.0,
            "fosforo": 11.0,
            "zinc": 0.04,
            "iron": 0.12,
            "sodium": 1.0,
            "potassium": 107.0
        }"#;

        let profile: NutrientProfile = serde_json::from_str(json).unwrap();
        assert!((profile.fiber - 2.4).abs() < f64::EPSILON);
        assert!((profile.phosphorus - 11.0).abs() < f64::EPSILON);
    }
}
