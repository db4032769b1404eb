//! # Recommendation Engine
//!
//! This module coordinates the whole recommendation pass:
//! 1. Resolve favorited ids to full recipes through the catalog
//! 2. Aggregate the interaction lists into a preference profile
//! 3. Score every catalog recipe against the profile (in parallel)
//! 4. Rank, attach the primary justification, and return the top N
//!
//! The engine itself holds no user state: the interaction log is an input
//! on every call and the profile is rebuilt from scratch each time, so the
//! result always reflects the stores as they are right now.

use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;
use tracing::{info, warn};

use catalog::{InteractionLog, Recipe, RecipeCatalog, RecipeId};
use profile::{PreferenceProfile, ProfileBuilder, SignalWeights};
use scoring::{RecipeScorer, RecommendationScore, ScoringWeights};

/// Final recommendation returned to the caller
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeRecommendation {
    pub recipe_id: RecipeId,
    pub title: String,
    pub tags: Vec<String>,
    pub score: f32,
    pub reason: String,
}

/// Stateless facade over the profile builder and scorer.
///
/// Shares the catalog behind an `Arc` so clones are cheap and any number
/// of callers can recommend concurrently.
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    catalog: Arc<RecipeCatalog>,
    profile_builder: ProfileBuilder,
    scorer: RecipeScorer,
}

impl RecommendationEngine {
    /// Create an engine over the given catalog with default weights.
    pub fn new(catalog: Arc<RecipeCatalog>) -> Self {
        Self {
            catalog,
            profile_builder: ProfileBuilder::new(),
            scorer: RecipeScorer::new(),
        }
    }

    /// Override the interaction signal weights.
    pub fn with_signal_weights(mut self, weights: SignalWeights) -> Self {
        self.profile_builder = ProfileBuilder::new().with_weights(weights);
        self
    }

    /// Override the scoring factor weights.
    pub fn with_scoring_weights(mut self, weights: ScoringWeights) -> Self {
        self.scorer = RecipeScorer::new().with_weights(weights);
        self
    }

    pub fn catalog(&self) -> &RecipeCatalog {
        &self.catalog
    }

    pub fn scorer(&self) -> &RecipeScorer {
        &self.scorer
    }

    /// Aggregate an interaction log into a profile.
    ///
    /// Favorited entries arrive as ids in the log; they are resolved to
    /// full recipes here because the aggregator takes the favorites store's
    /// shape (full objects).
    pub fn build_profile(&self, interactions: &InteractionLog) -> PreferenceProfile {
        let favorited: Vec<Recipe> = interactions
            .favorited
            .iter()
            .filter_map(|id| self.catalog.get(id).cloned())
            .collect();

        self.profile_builder.build(
            &interactions.liked,
            &favorited,
            &interactions.tried,
            &self.catalog,
        )
    }

    /// Main entry point: rank the catalog for this user.
    ///
    /// # Arguments
    /// * `interactions` - the user's current interaction log
    /// * `limit` - number of recommendations to return
    ///
    /// # Returns
    /// Vector of RecipeRecommendation sorted by score (highest first).
    /// Never fails: with no usable interactions every score is 0 and the
    /// catalog comes back in its own order with the generic reason.
    pub fn recommend(
        &self,
        interactions: &InteractionLog,
        limit: usize,
    ) -> Vec<RecipeRecommendation> {
        let start_time = Instant::now();

        let profile = self.build_profile(interactions);
        if !profile.has_enough_data() {
            warn!("no interactions recorded; falling back to unpersonalized order");
        }
        info!(
            interactions = profile.total_interactions,
            tags = profile.preferred_tags.len(),
            "built preference profile"
        );

        let mut scored: Vec<(RecommendationScore, &Recipe)> = self
            .catalog
            .recipes()
            .par_iter()
            .map(|recipe| (self.scorer.score(recipe, &profile), recipe))
            .collect();
        scored.sort_by(|a, b| b.0.score.total_cmp(&a.0.score));
        scored.truncate(limit);

        let recommendations: Vec<RecipeRecommendation> = scored
            .into_iter()
            .map(|(score, recipe)| RecipeRecommendation {
                recipe_id: score.recipe_id.clone(),
                title: recipe.title.clone(),
                tags: recipe.tags.clone(),
                score: score.score,
                reason: score.primary_reason().to_string(),
            })
            .collect();

        info!(
            returned = recommendations.len(),
            elapsed = ?start_time.elapsed(),
            "recommendation pass complete"
        );
        recommendations
    }
}
