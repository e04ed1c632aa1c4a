//! The fixed set of food groups that partition the catalog.
//!
//! Groups are defined at build time and immutable at runtime. The upstream
//! nutrition service keeps one storage partition per group; the exhaustive
//! `match` in [`FoodGroup::info`] is the single boundary where group
//! identifiers resolve to metadata, checked by the compiler whenever a
//! variant is added.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A fixed category partition of the food catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodGroup {
    /// Fresh fruit
    Fruits,
    /// Vegetables and greens
    Vegetables,
    /// Milk, cheese and derivatives
    Dairy,
    /// Beef, pork, poultry
    Meat,
    /// Fish and shellfish
    Seafood,
    /// Rice, wheat, oats and grains
    Cereals,
    /// Beans, lentils, chickpeas
    Legumes,
    /// Potato, cassava, sweet potato
    Tubers,
    /// Eggs and egg products
    Eggs,
    /// Oils, butter, avocado
    Fats,
    /// Sugar, honey, sweets
    Sugar,
    /// Juices, sodas, coffee
    Drinks,
    /// Everything else
    Miscellaneous,
}

/// Static metadata for one food group.
#[derive(Debug, Clone, Copy)]
pub struct GroupInfo {
    /// Stable identifier, matching the upstream partition name
    pub id: &'static str,
    /// Display name (Spanish, like the catalog itself)
    pub name: &'static str,
    /// Short description with example items
    pub description: &'static str,
    /// Icon glyph
    pub icon: &'static str,
    /// Terminal color theme (xterm-256 index)
    pub color: u8,
}

impl FoodGroup {
    /// Every group, in the upstream service's canonical order.
    pub const ALL: [FoodGroup; 13] = [
        FoodGroup::Cereals,
        FoodGroup::Dairy,
        FoodGroup::Drinks,
        FoodGroup::Eggs,
        FoodGroup::Fats,
        FoodGroup::Fruits,
        FoodGroup::Legumes,
        FoodGroup::Meat,
        FoodGroup::Miscellaneous,
        FoodGroup::Seafood,
        FoodGroup::Sugar,
        FoodGroup::Tubers,
        FoodGroup::Vegetables,
    ];

    /// Metadata for this group.
    #[must_use]
    pub fn info(&self) -> GroupInfo {
        match self {
            FoodGroup::Fruits => GroupInfo {
                id: "fruits",
                name: "Frutas",
                description: "Manzanas, naranjas, plátanos y más",
                icon: "🍎",
                color: 203,
            },
            FoodGroup::Vegetables => GroupInfo {
                id: "vegetables",
                name: "Verduras",
                description: "Lechuga, tomate, zanahoria y más",
                icon: "🥬",
                color: 114,
            },
            FoodGroup::Dairy => GroupInfo {
                id: "dairy",
                name: "Lácteos",
                description: "Leche, queso, yogur y derivados",
                icon: "🥛",
                color: 75,
            },
            FoodGroup::Meat => GroupInfo {
                id: "meat",
                name: "Carnes",
                description: "Res, pollo, cerdo y más",
                icon: "🥩",
                color: 211,
            },
            FoodGroup::Seafood => GroupInfo {
                id: "seafood",
                name: "Mariscos",
                description: "Pescado, camarones, atún y más",
                icon: "🐟",
                color: 117,
            },
            FoodGroup::Cereals => GroupInfo {
                id: "cereals",
                name: "Cereales",
                description: "Arroz, trigo, avena y granos",
                icon: "🌾",
                color: 214,
            },
            FoodGroup::Legumes => GroupInfo {
                id: "legumes",
                name: "Legumbres",
                description: "Frijoles, lentejas, garbanzos",
                icon: "🫘",
                color: 208,
            },
            FoodGroup::Tubers => GroupInfo {
                id: "tubers",
                name: "Tubérculos",
                description: "Papa, yuca, camote y más",
                icon: "🥔",
                color: 220,
            },
            FoodGroup::Eggs => GroupInfo {
                id: "eggs",
                name: "Huevos",
                description: "Huevos de gallina y derivados",
                icon: "🥚",
                color: 245,
            },
            FoodGroup::Fats => GroupInfo {
                id: "fats",
                name: "Grasas y Aceites",
                description: "Aceites, mantequilla, aguacate",
                icon: "🧈",
                color: 190,
            },
            FoodGroup::Sugar => GroupInfo {
                id: "sugar",
                name: "Azúcares",
                description: "Azúcar, miel, dulces",
                icon: "🍯",
                color: 178,
            },
            FoodGroup::Drinks => GroupInfo {
                id: "drinks",
                name: "Bebidas",
                description: "Jugos, refrescos, café y más",
                icon: "🧃",
                color: 135,
            },
            FoodGroup::Miscellaneous => GroupInfo {
                id: "miscellaneous",
                name: "Misceláneos",
                description: "Otros alimentos y productos",
                icon: "🍱",
                color: 246,
            },
        }
    }

    /// Stable identifier, matching the upstream partition name.
    #[must_use]
    pub fn id(&self) -> &'static str {
        self.info().id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.info().name
    }

    /// Icon glyph.
    #[must_use]
    pub fn icon(&self) -> &'static str {
        self.info().icon
    }
}

impl fmt::Display for FoodGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Error returned when parsing an unrecognized group identifier.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown food group: {0}")]
pub struct UnknownGroup(pub String);

impl FromStr for FoodGroup {
    type Err = UnknownGroup;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FoodGroup::ALL
            .iter()
            .copied()
            .find(|g| g.id() == s)
            .ok_or_else(|| UnknownGroup(s.to_string()))
    }
}
