//! Relevance tiers for ranking search matches.

/// How well a catalog name matches a query, most specific first.
///
/// Both sides are expected to be normalized keys (see
/// [`normalize`](crate::normalize::normalize)); the tiers are meaningless
/// on raw display names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RelevanceTier {
    /// Name contains the query somewhere
    Contains = 0,
    /// Name starts with the query
    Prefix = 1,
    /// Name equals the query
    Exact = 2,
}

/// Classify a normalized name against a normalized query.
///
/// Callers filter for containment before ranking, so a non-matching name
/// still classifies as [`RelevanceTier::Contains`] here.
#[must_use]
pub fn relevance_tier(normalized_name: &str, normalized_query: &str) -> RelevanceTier {
    if normalized_name == normalized_query {
        RelevanceTier::Exact
    } else if normalized_name.starts_with(normalized_query) {
        RelevanceTier::Prefix
    } else {
        RelevanceTier::Contains
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact() {
        assert_eq!(relevance_tier("manzana", "manzana"), RelevanceTier::Exact);
    }

    #[test]
    fn test_prefix() {
        assert_eq!(
            relevance_tier("manzana verde", "manzana"),
            RelevanceTier::Prefix
        );
    }

    #[test]
    fn test_contains() {
        assert_eq!(
            relevance_tier("jugo de manzana", "manzana"),
            RelevanceTier::Contains
        );
    }

    #[test]
    fn test_tier_ordering() {
        assert!(RelevanceTier::Exact > RelevanceTier::Prefix);
        assert!(RelevanceTier::Prefix > RelevanceTier::Contains);
    }
}
