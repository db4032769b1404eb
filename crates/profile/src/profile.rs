//! The aggregated preference profile and its query helpers.

use crate::types::{Cuisine, ServingsBand, TimeCategory};
use indexmap::IndexMap;
use std::collections::HashSet;

/// Minimum distinct interactions before a profile is worth ranking with.
pub const MIN_INTERACTIONS: usize = 1;

/// A user's aggregated taste, derived from their interaction history.
///
/// This is a value object: built fresh on every aggregation, read-only
/// afterwards, never persisted. Tag and ingredient weights are kept in
/// `IndexMap`s so iteration follows first-seen order - `top_tags` relies on
/// that to break weight ties deterministically.
///
/// ## Invariant
/// A key appears in `preferred_tags` / `preferred_ingredients` only once
/// some interacted recipe carried it, and its weight is then the sum of
/// those recipes' interaction weights - strictly positive, never zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreferenceProfile {
    /// Lowercased tag -> accumulated interaction weight
    pub preferred_tags: IndexMap<String, f32>,
    /// Time buckets the user has cooked in (presence only, unweighted)
    pub preferred_cooking_times: HashSet<TimeCategory>,
    /// Lowercased cookware strings (presence only)
    pub preferred_cookware: HashSet<String>,
    /// Lowercased, trimmed ingredient name -> accumulated interaction weight
    pub preferred_ingredients: IndexMap<String, f32>,
    /// Servings bands the user has cooked for (presence only)
    pub preferred_servings: HashSet<ServingsBand>,
    /// Cuisines named by any interacted recipe's tags
    pub preferred_cuisines: HashSet<Cuisine>,
    /// Count of distinct recipes across all three interaction lists
    pub total_interactions: usize,
}

impl PreferenceProfile {
    /// Whether enough interactions exist to personalize a ranking.
    ///
    /// When this is `false` the caller should fall back to a
    /// non-personalized ordering (every score will be 0 anyway).
    pub fn has_enough_data(&self) -> bool {
        self.total_interactions >= MIN_INTERACTIONS
    }

    /// The `n` heaviest tags, weight descending.
    ///
    /// The sort is stable, so tags with equal weight come out in the order
    /// they were first seen during aggregation.
    pub fn top_tags(&self, n: usize) -> Vec<(&str, f32)> {
        top_entries(&self.preferred_tags, n)
    }

    /// The `n` heaviest ingredients, weight descending.
    pub fn top_ingredients(&self, n: usize) -> Vec<(&str, f32)> {
        top_entries(&self.preferred_ingredients, n)
    }
}

fn top_entries(map: &IndexMap<String, f32>, n: usize) -> Vec<(&str, f32)> {
    let mut entries: Vec<(&str, f32)> = map.iter().map(|(k, &w)| (k.as_str(), w)).collect();
    entries.sort_by(|a, b| b.1.total_cmp(&a.1));
    entries.truncate(n);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_profile_has_no_data() {
        let profile = PreferenceProfile::default();
        assert!(!profile.has_enough_data());
        assert!(profile.top_tags(5).is_empty());
    }

    #[test]
    fn test_top_tags_sorted_by_weight() {
        let mut profile = PreferenceProfile::default();
        profile.preferred_tags.insert("mild".to_string(), 1.0);
        profile.preferred_tags.insert("spicy".to_string(), 3.5);
        profile.preferred_tags.insert("vegan".to_string(), 2.0);

        let top = profile.top_tags(2);
        assert_eq!(top, vec![("spicy", 3.5), ("vegan", 2.0)]);
    }

    #[test]
    fn test_top_tags_ties_keep_insertion_order() {
        let mut profile = PreferenceProfile::default();
        profile.preferred_tags.insert("first".to_string(), 2.0);
        profile.preferred_tags.insert("second".to_string(), 2.0);
        profile.preferred_tags.insert("third".to_string(), 2.0);

        let top = profile.top_tags(3);
        let names: Vec<&str> = top.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }
}
