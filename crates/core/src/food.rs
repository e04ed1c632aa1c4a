//! Catalog entry types.

use crate::groups::FoodGroup;
use crate::nutrients::NutrientProfile;
use serde::{Deserialize, Serialize};

/// One raw catalog entry as stored by the nutrition service.
///
/// The identifier is unique within its group's partition only, not across
/// the whole catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodRecord {
    /// Partition-local identifier
    pub id: u32,
    /// Display name (non-empty)
    pub name: String,
    /// Nutrient quantities per 100 g
    #[serde(flatten)]
    pub nutrients: NutrientProfile,
    /// Optional image reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// A [`FoodRecord`] tagged with its group at catalog-flatten time.
///
/// Group display name and icon are derived from the group enumeration
/// rather than stored, so an item can never disagree with its group's
/// metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    /// The underlying catalog record
    #[serde(flatten)]
    pub record: FoodRecord,
    /// The group this record was fetched from
    #[serde(rename = "groupId")]
    pub group: FoodGroup,
}

impl FoodItem {
    /// Tag a record with its group.
    #[must_use]
    pub fn new(record: FoodRecord, group: FoodGroup) -> Self {
        Self { record, group }
    }

    /// Display name of the food.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.record.name
    }

    /// Energy in kcal per 100 g.
    #[must_use]
    pub fn energy(&self) -> f64 {
        self.record.nutrients.energy
    }

    /// Display name of the group.
    #[must_use]
    pub fn group_name(&self) -> &'static str {
        self.group.name()
    }

    /// Icon glyph of the group.
    #[must_use]
    pub fn group_icon(&self) -> &'static str {
        self.group.icon()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_flat_wire_format() {
        // The service returns records flattened with the group tag inline.
        let json = r#"{
            "id": 7,
            "name": "Plátano",
            "energy": 89.0,
            "protein": 1.1,
            "total_fat": 0.3,
            "total_carbohydrates": 22.8,
            "fibra": 2.6,
            "calcium": 5.0,
            "fosforo": 22.0,
            "zinc": 0.15,
            "iron": 0.26,
            "sodium": 1.0,
            "potassium": 358.0,
            "groupId": "fruits"
        }"#;

        let item: FoodItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.name(), "Plátano");
        assert_eq!(item.group, FoodGroup::Fruits);
        assert_eq!(item.group_name(), "Frutas");
        assert!((item.energy() - 89.0).abs() < f64::EPSILON);
        assert!(item.record.image.is_none());
    }

    #[test]
    fn test_group_metadata_derived() {
        let record = FoodRecord {
            id: 1,
            name: "Queso fresco".to_string(),
            nutrients: NutrientProfile::default(),
            image: None,
        };
        let item = FoodItem::new(record, FoodGroup::Dairy);
        assert_eq!(item.group_icon(), "🥛");
        assert_eq!(item.group_name(), "Lácteos");
    }
}
