//! Aggregates raw interaction lists into a `PreferenceProfile`.
//!
//! ## Algorithm
//! 1. Union the recipe ids across the three interaction lists (a recipe
//!    liked AND tried is still one interaction).
//! 2. Resolve each id through the catalog; unknown ids are dropped without
//!    complaint - the interaction stores and the catalog sync independently
//!    and can briefly disagree.
//! 3. Weight each resolved recipe by the sum of its applicable signals
//!    (tried counts more than favorited counts more than liked; a recipe
//!    carrying several signals gets their sum, not their max).
//! 4. Pour that weight into every tag and ingredient on the recipe, and
//!    record the recipe's time bucket, cookware, servings band, and any
//!    cuisines its tags name.
//!
//! Aggregation never fails: empty inputs produce an empty profile with
//! `total_interactions == 0`.

use crate::normalize::{cuisines_in_tag, normalize_cooking_time, normalize_servings};
use crate::profile::PreferenceProfile;
use catalog::{Recipe, RecipeCatalog, RecipeId};
use std::collections::HashSet;
use tracing::{debug, instrument};

/// How much each interaction signal contributes to a recipe's weight.
///
/// The defaults are the app's shipped constants. Tests (and experiments)
/// override them through `ProfileBuilder::with_weights` instead of patching
/// globals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalWeights {
    pub tried: f32,
    pub favorited: f32,
    pub liked: f32,
}

impl Default for SignalWeights {
    fn default() -> Self {
        Self {
            tried: 2.0,
            favorited: 1.5,
            liked: 1.0,
        }
    }
}

/// Builds preference profiles from interaction history.
///
/// Stateless apart from its weight configuration; one builder can serve any
/// number of concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct ProfileBuilder {
    weights: SignalWeights,
}

impl ProfileBuilder {
    /// Create a builder with the default signal weights.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the signal weights (default: tried 2.0, favorited 1.5, liked 1.0).
    pub fn with_weights(mut self, weights: SignalWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn weights(&self) -> SignalWeights {
        self.weights
    }

    /// Aggregate the three interaction lists into a profile.
    ///
    /// Favorited recipes arrive as full objects (that is how the favorites
    /// store holds them) but only their ids participate in the union; the
    /// catalog stays the single source of truth for recipe content.
    ///
    /// # Arguments
    /// * `liked` - ids from the likes store
    /// * `favorited` - full recipes from the favorites store
    /// * `tried` - ids from the tried-it store
    /// * `catalog` - the current recipe catalog, used to resolve ids
    #[instrument(skip_all, fields(liked = liked.len(), favorited = favorited.len(), tried = tried.len()))]
    pub fn build(
        &self,
        liked: &[RecipeId],
        favorited: &[Recipe],
        tried: &[RecipeId],
        catalog: &RecipeCatalog,
    ) -> PreferenceProfile {
        let liked_set: HashSet<&str> = liked.iter().map(String::as_str).collect();
        let favorited_set: HashSet<&str> = favorited.iter().map(|r| r.id.as_str()).collect();
        let tried_set: HashSet<&str> = tried.iter().map(String::as_str).collect();

        // Ordered union, first occurrence wins. Iterating in argument order
        // keeps tag/ingredient insertion order (and so tie-breaks) stable
        // across runs.
        let mut seen: HashSet<&str> = HashSet::new();
        let mut union: Vec<&str> = Vec::new();
        for id in liked.iter().map(String::as_str) {
            if seen.insert(id) {
                union.push(id);
            }
        }
        for id in favorited.iter().map(|r| r.id.as_str()) {
            if seen.insert(id) {
                union.push(id);
            }
        }
        for id in tried.iter().map(String::as_str) {
            if seen.insert(id) {
                union.push(id);
            }
        }

        let mut profile = PreferenceProfile {
            total_interactions: union.len(),
            ..PreferenceProfile::default()
        };

        let mut resolved = 0usize;
        for id in union {
            let Some(recipe) = catalog.get(id) else {
                continue;
            };
            resolved += 1;

            let mut weight = 0.0;
            if tried_set.contains(id) {
                weight += self.weights.tried;
            }
            if favorited_set.contains(id) {
                weight += self.weights.favorited;
            }
            if liked_set.contains(id) {
                weight += self.weights.liked;
            }

            self.accumulate(&mut profile, recipe, weight);
        }

        debug!(
            total_interactions = profile.total_interactions,
            resolved,
            tags = profile.preferred_tags.len(),
            ingredients = profile.preferred_ingredients.len(),
            "built preference profile"
        );
        profile
    }

    /// Fold one recipe's fields into the profile at the given weight.
    fn accumulate(&self, profile: &mut PreferenceProfile, recipe: &Recipe, weight: f32) {
        for tag in &recipe.tags {
            *profile
                .preferred_tags
                .entry(tag.to_lowercase())
                .or_insert(0.0) += weight;

            for cuisine in cuisines_in_tag(tag) {
                profile.preferred_cuisines.insert(cuisine);
            }
        }

        for ingredient in &recipe.ingredients {
            let name = ingredient.name.trim().to_lowercase();
            if name.is_empty() {
                continue;
            }
            *profile.preferred_ingredients.entry(name).or_insert(0.0) += weight;
        }

        if let Some(time) = normalize_cooking_time(&recipe.cooking_time) {
            profile.preferred_cooking_times.insert(time);
        }

        let cookware = recipe.cookware.to_lowercase();
        if !cookware.is_empty() {
            profile.preferred_cookware.insert(cookware);
        }

        if let Some(band) = normalize_servings(&recipe.servings) {
            profile.preferred_servings.insert(band);
        }
    }
}

/// Aggregate with the default signal weights.
///
/// Convenience wrapper for the common case; construct a `ProfileBuilder`
/// directly to override weights.
pub fn build_profile(
    liked: &[RecipeId],
    favorited: &[Recipe],
    tried: &[RecipeId],
    catalog: &RecipeCatalog,
) -> PreferenceProfile {
    ProfileBuilder::new().build(liked, favorited, tried, catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Cuisine, ServingsBand, TimeCategory};
    use catalog::Ingredient;

    fn chicken_curry() -> Recipe {
        Recipe {
            id: "curry".to_string(),
            title: "Chicken Curry".to_string(),
            tags: vec!["Indian".to_string(), "Spicy".to_string(), "Chicken".to_string()],
            cooking_time: "30 minutes".to_string(),
            cookware: "Pan".to_string(),
            ingredients: vec![
                Ingredient {
                    name: "Chicken".to_string(),
                    quantity: Some("500g".to_string()),
                },
                Ingredient {
                    name: "Onion".to_string(),
                    quantity: None,
                },
            ],
            servings: "4 servings".to_string(),
        }
    }

    fn test_catalog() -> RecipeCatalog {
        RecipeCatalog::from_recipes(vec![chicken_curry()]).unwrap()
    }

    fn ids(ids: &[&str]) -> Vec<RecipeId> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_interactions_empty_profile() {
        let catalog = test_catalog();
        let profile = build_profile(&[], &[], &[], &catalog);

        assert_eq!(profile.total_interactions, 0);
        assert!(!profile.has_enough_data());
        assert!(profile.preferred_tags.is_empty());
        assert!(profile.preferred_ingredients.is_empty());
        assert!(profile.preferred_cuisines.is_empty());
    }

    #[test]
    fn test_union_not_sum() {
        let catalog = test_catalog();
        let profile = build_profile(&ids(&["curry"]), &[], &ids(&["curry"]), &catalog);

        assert_eq!(profile.total_interactions, 1);
    }

    #[test]
    fn test_signal_weights_are_additive() {
        let catalog = test_catalog();

        let tried_only = build_profile(&[], &[], &ids(&["curry"]), &catalog);
        let liked_only = build_profile(&ids(&["curry"]), &[], &[], &catalog);
        assert_eq!(tried_only.preferred_tags["indian"], 2.0);
        assert_eq!(liked_only.preferred_tags["indian"], 1.0);

        // tried + favorited + liked on one recipe sums every signal
        let all_three = build_profile(
            &ids(&["curry"]),
            &[chicken_curry()],
            &ids(&["curry"]),
            &catalog,
        );
        assert_eq!(all_three.total_interactions, 1);
        assert_eq!(all_three.preferred_tags["indian"], 4.5);
        assert_eq!(all_three.preferred_ingredients["chicken"], 4.5);
    }

    #[test]
    fn test_unknown_ids_are_dropped() {
        let catalog = test_catalog();
        let profile = build_profile(&ids(&["curry", "ghost"]), &[], &[], &catalog);

        // ghost still counts as an interaction, but contributes nothing
        assert_eq!(profile.total_interactions, 2);
        assert_eq!(profile.preferred_tags.len(), 3);
    }

    #[test]
    fn test_favorited_resolved_through_catalog() {
        let catalog = test_catalog();
        // A favorited recipe whose id the catalog no longer knows
        let stale = Recipe::new("deleted", "Gone");
        let profile = build_profile(&[], &[stale], &[], &catalog);

        assert_eq!(profile.total_interactions, 1);
        assert!(profile.preferred_tags.is_empty());
    }

    #[test]
    fn test_categorical_fields() {
        let catalog = test_catalog();
        let profile = build_profile(&[], &[], &ids(&["curry"]), &catalog);

        assert!(profile.preferred_cooking_times.contains(&TimeCategory::Medium));
        assert!(profile.preferred_cookware.contains("pan"));
        assert!(profile.preferred_servings.contains(&ServingsBand::ThreeToFour));
        assert!(profile.preferred_cuisines.contains(&Cuisine::Indian));
    }

    #[test]
    fn test_weights_accumulate_across_recipes() {
        let mut second = chicken_curry();
        second.id = "tikka".to_string();
        second.tags = vec!["Indian".to_string()];
        second.ingredients.clear();
        let catalog = RecipeCatalog::from_recipes(vec![chicken_curry(), second]).unwrap();

        let profile = build_profile(&ids(&["curry"]), &[], &ids(&["tikka"]), &catalog);

        // "indian" carries curry's liked weight plus tikka's tried weight
        assert_eq!(profile.preferred_tags["indian"], 3.0);
        assert_eq!(profile.preferred_tags["spicy"], 1.0);
    }

    #[test]
    fn test_override_weights() {
        let catalog = test_catalog();
        let builder = ProfileBuilder::new().with_weights(SignalWeights {
            tried: 10.0,
            favorited: 0.0,
            liked: 0.0,
        });

        let profile = builder.build(&[], &[], &ids(&["curry"]), &catalog);
        assert_eq!(profile.preferred_tags["indian"], 10.0);
    }

    #[test]
    fn test_blank_ingredient_names_skipped() {
        let mut recipe = chicken_curry();
        recipe.ingredients.push(Ingredient {
            name: "   ".to_string(),
            quantity: None,
        });
        let catalog = RecipeCatalog::from_recipes(vec![recipe]).unwrap();

        let profile = build_profile(&ids(&["curry"]), &[], &[], &catalog);
        assert_eq!(profile.preferred_ingredients.len(), 2);
    }
}
