//! The in-memory search engine: filter, rank, cap.
//!
//! Pure synchronous functions over an immutable catalog slice. Each
//! keystroke runs entirely in memory, which is what lets the UI search
//! as the user types without a server round-trip.

use crate::normalize::normalize;
use crate::relevance::{RelevanceTier, relevance_tier};
use nutrijama_core::FoodItem;

/// Queries that normalize below this many characters return no results.
///
/// A one-letter query would match most of the catalog; cutting it off
/// here is a cost/UX guard, not an error.
pub const MIN_QUERY_CHARS: usize = 2;

/// Hard cap on returned results, applied after ranking.
pub const MAX_RESULTS: usize = 50;

/// Search the catalog for foods whose name contains `query`.
///
/// Normalizes the query, keeps every item whose normalized name contains
/// it as a substring, ranks exact > prefix > contains with descending
/// energy as the final tie-break, and caps at [`MAX_RESULTS`].
///
/// Pure function of its inputs: identical `(query, catalog)` pairs always
/// produce the same output, the catalog is never mutated, and an empty or
/// not-yet-loaded catalog simply yields no results.
#[must_use]
pub fn search(query: &str, catalog: &[FoodItem]) -> Vec<FoodItem> {
    let normalized = normalize(query);
    if normalized.chars().count() < MIN_QUERY_CHARS {
        return Vec::new();
    }

    let matches: Vec<FoodItem> = catalog
        .iter()
        .filter(|item| normalize(item.name()).contains(&normalized))
        .cloned()
        .collect();

    rank_normalized(&normalized, matches)
}

/// Rank and cap an already-filtered set of items the same way [`search`]
/// does.
///
/// Used for the legacy server-side filter path, whose per-group matches
/// arrive unranked and must be aggregated and ordered client-side.
#[must_use]
pub fn rank(query: &str, items: Vec<FoodItem>) -> Vec<FoodItem> {
    let normalized = normalize(query);
    if normalized.chars().count() < MIN_QUERY_CHARS {
        return Vec::new();
    }
    rank_normalized(&normalized, items)
}

fn rank_normalized(normalized_query: &str, items: Vec<FoodItem>) -> Vec<FoodItem> {
    let mut scored: Vec<(RelevanceTier, FoodItem)> = items
        .into_iter()
        .map(|item| {
            let tier = relevance_tier(&normalize(item.name()), normalized_query);
            (tier, item)
        })
        .collect();

    // Stable sort: genuinely identical records keep their input order.
    // total_cmp keeps the comparator a total order for any f64.
    scored.sort_by(|(tier_a, a), (tier_b, b)| {
        tier_b
            .cmp(tier_a)
            .then_with(|| b.energy().total_cmp(&a.energy()))
    });

    scored.truncate(MAX_RESULTS);
    scored.into_iter().map(|(_, item)| item).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nutrijama_core::{FoodGroup, FoodRecord, NutrientProfile};

    fn food(id: u32, name: &str, energy: f64) -> FoodItem {
        FoodItem::new(
            FoodRecord {
                id,
                name: name.to_string(),
                nutrients: NutrientProfile {
                    energy,
                    ..Default::default()
                },
                image: None,
            },
            FoodGroup::Miscellaneous,
        )
    }

    #[test]
    fn test_short_query_returns_empty() {
        let catalog = vec![food(1, "Arroz", 130.0)];
        assert!(search("a", &catalog).is_empty());
        assert!(search("", &catalog).is_empty());
        // Normalization can shrink a query below the threshold
        assert!(search("á!", &catalog).is_empty());
    }

    #[test]
    fn test_empty_catalog() {
        assert!(search("manzana", &[]).is_empty());
    }

    #[test]
    fn test_no_match_is_not_an_error() {
        let catalog = vec![food(1, "Arroz", 130.0)];
        assert!(search("manzana", &catalog).is_empty());
    }

    #[test]
    fn test_filter_is_substring_containment() {
        let catalog = vec![
            food(1, "Jugo de manzana", 46.0),
            food(2, "Arroz blanco", 130.0),
        ];
        let results = search("manzana", &catalog);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name(), "Jugo de manzana");
    }

    #[test]
    fn test_accent_insensitive_both_directions() {
        let catalog = vec![food(1, "Plátano", 89.0)];
        assert_eq!(search("platano", &catalog).len(), 1);
        assert_eq!(search("plátano", &catalog).len(), 1);
    }

    #[test]
    fn test_ranking_exact_then_prefix_then_contains() {
        let catalog = vec![
            food(1, "Manzana", 52.0),
            food(2, "Manzana Verde", 58.0),
            food(3, "Jugo de Manzana", 46.0),
        ];

        let results = search("manzana", &catalog);
        let names: Vec<_> = results.iter().map(FoodItem::name).collect();
        assert_eq!(names, vec!["Manzana", "Manzana Verde", "Jugo de Manzana"]);
    }

    #[test]
    fn test_tie_break_by_descending_energy() {
        let catalog = vec![
            food(1, "Arroz Integral", 111.0),
            food(2, "Arroz Blanco", 130.0),
        ];

        let results = search("arroz", &catalog);
        let names: Vec<_> = results.iter().map(FoodItem::name).collect();
        assert_eq!(names, vec!["Arroz Blanco", "Arroz Integral"]);
    }

    #[test]
    fn test_cap_keeps_top_ranked_fifty() {
        // 80 prefix matches with distinct energies plus one exact match;
        // the cap must keep the best 50 by rank, not an arbitrary 50.
        let mut catalog: Vec<FoodItem> = (0..80)
            .map(|i| food(i, &format!("Avena variedad {i}"), f64::from(i)))
            .collect();
        catalog.push(food(999, "Avena", 10.0));

        let results = search("avena", &catalog);
        assert_eq!(results.len(), MAX_RESULTS);

        // The exact match leads despite its low energy.
        assert_eq!(results[0].name(), "Avena");

        // The rest are the highest-energy prefix matches, descending.
        assert!((results[1].energy() - 79.0).abs() < f64::EPSILON);
        assert!((results[49].energy() - 31.0).abs() < f64::EPSILON);
        for pair in results[1..].windows(2) {
            assert!(pair[0].energy() >= pair[1].energy());
        }
    }

    #[test]
    fn test_rank_without_filter() {
        // The legacy server-side path hands over unranked matches.
        let items = vec![
            food(1, "Jugo de Manzana", 46.0),
            food(2, "Manzana", 52.0),
        ];
        let ranked = rank("manzana", items);
        assert_eq!(ranked[0].name(), "Manzana");
    }

    #[test]
    fn test_rank_short_query_guard() {
        let items = vec![food(1, "Manzana", 52.0)];
        assert!(rank("m", items).is_empty());
    }

    #[test]
    fn test_search_does_not_mutate_catalog() {
        let catalog = vec![food(1, "Manzana", 52.0), food(2, "Pera", 57.0)];
        let before = catalog.clone();
        let _ = search("manzana", &catalog);
        assert_eq!(catalog, before);
    }
}
