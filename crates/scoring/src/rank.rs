//! Batch ranking of candidate recipes.

use crate::scorer::RecipeScorer;
use catalog::Recipe;
use profile::PreferenceProfile;
use rayon::prelude::*;
use tracing::{debug, instrument};

impl RecipeScorer {
    /// Rank candidates by descending recommendation score.
    ///
    /// Scoring is embarrassingly parallel, so candidates are scored with
    /// rayon; the parallel collect preserves input order and the final sort
    /// is stable, so equal-scoring recipes keep their original relative
    /// order no matter how the work was split.
    ///
    /// The returned list is the recipes themselves - scores are an internal
    /// detail here; callers wanting them use [`score`] per candidate.
    ///
    /// [`score`]: Self::score
    #[instrument(skip_all, fields(candidates = recipes.len()))]
    pub fn sort_by_recommendation(
        &self,
        recipes: Vec<Recipe>,
        profile: &PreferenceProfile,
    ) -> Vec<Recipe> {
        let mut scored: Vec<(f32, Recipe)> = recipes
            .into_par_iter()
            .map(|recipe| (self.score(&recipe, profile).score, recipe))
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0));
        debug!(
            top_score = scored.first().map(|(s, _)| *s).unwrap_or(0.0),
            "ranked candidates"
        );

        scored.into_iter().map(|(_, recipe)| recipe).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::RecipeCatalog;
    use profile::build_profile;

    fn tagged(id: &str, tags: &[&str]) -> Recipe {
        let mut recipe = Recipe::new(id, id);
        recipe.tags = tags.iter().map(|t| t.to_string()).collect();
        recipe
    }

    fn indian_profile() -> PreferenceProfile {
        let catalog =
            RecipeCatalog::from_recipes(vec![tagged("seed", &["Indian", "Spicy"])]).unwrap();
        build_profile(&[], &[], &["seed".to_string()], &catalog)
    }

    #[test]
    fn test_ranking_is_monotonic() {
        let profile = indian_profile();
        let scorer = RecipeScorer::new();

        let candidates = vec![
            tagged("none", &["Baking"]),
            tagged("both", &["Indian", "Spicy"]),
            tagged("one", &["Indian"]),
        ];

        let ranked = scorer.sort_by_recommendation(candidates, &profile);
        let scores: Vec<f32> = ranked
            .iter()
            .map(|r| scorer.score(r, &profile).score)
            .collect();

        for pair in scores.windows(2) {
            assert!(pair[0] >= pair[1], "ranking not monotonic: {scores:?}");
        }
        assert_eq!(ranked[0].id, "both");
    }

    #[test]
    fn test_ties_keep_input_order() {
        let profile = indian_profile();
        let scorer = RecipeScorer::new();

        // Identical tag sets score identically; input order must survive.
        let candidates = vec![
            tagged("a", &["Indian"]),
            tagged("b", &["Indian"]),
            tagged("c", &["Indian"]),
        ];

        let ranked = scorer.sort_by_recommendation(candidates, &profile);
        let ids: Vec<&str> = ranked.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty_candidate_list() {
        let profile = indian_profile();
        let ranked = RecipeScorer::new().sort_by_recommendation(Vec::new(), &profile);
        assert!(ranked.is_empty());
    }
}
