//! Scores a candidate recipe against a preference profile.
//!
//! ## Algorithm
//! Five factors are evaluated independently, each producing a sub-score in
//! [0, 100], then combined as a weighted sum (weights total 1.0):
//!
//! | Factor        | Weight | Kind |
//! |---------------|--------|------|
//! | Tags          | 0.40   | ratio x average weight |
//! | Cooking time  | 0.20   | binary set membership |
//! | Cookware      | 0.15   | binary set membership |
//! | Ingredients   | 0.15   | ratio x average weight |
//! | Servings      | 0.10   | binary set membership |
//!
//! Factors degrade independently: a recipe with no tags simply scores 0 on
//! the tag factor while the other four still count. Nothing here can fail -
//! scoring is a total function of its two arguments.

use crate::score::{RecommendationScore, MAX_REASONS};
use crate::weights::ScoringWeights;
use catalog::Recipe;
use indexmap::IndexMap;
use profile::{normalize_cooking_time, normalize_servings, PreferenceProfile};

/// Sub-score above which a ratio factor earns a justification string.
const REASON_THRESHOLD: f32 = 20.0;

/// How many matched names a justification lists before trailing off.
const REASON_NAME_CAP: usize = 2;

/// One evaluated factor: its sub-score and optional justification.
struct Factor {
    sub_score: f32,
    reason: Option<String>,
}

impl Factor {
    fn zero() -> Self {
        Self {
            sub_score: 0.0,
            reason: None,
        }
    }

    fn binary(matched: bool, reason: impl FnOnce() -> Option<String>) -> Self {
        if matched {
            Self {
                sub_score: 100.0,
                reason: reason(),
            }
        } else {
            Self::zero()
        }
    }
}

/// Stateless scorer; construct once, reuse across any number of calls.
#[derive(Debug, Clone, Default)]
pub struct RecipeScorer {
    weights: ScoringWeights,
}

impl RecipeScorer {
    /// Create a scorer with the default factor weights.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the factor weights (they should still sum to 1.0 if the
    /// [0, 100] score bound is to hold).
    pub fn with_weights(mut self, weights: ScoringWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn weights(&self) -> ScoringWeights {
        self.weights
    }

    /// Score one candidate against a profile.
    ///
    /// Justifications are collected in factor-evaluation order (tags, time,
    /// cookware, ingredients) and capped at [`MAX_REASONS`]; the servings
    /// factor contributes to the score but never to the reasons - it is too
    /// granular to surface to a user.
    pub fn score(&self, recipe: &Recipe, profile: &PreferenceProfile) -> RecommendationScore {
        let tag = self.tag_factor(recipe, profile);
        let time = self.time_factor(recipe, profile);
        let cookware = self.cookware_factor(recipe, profile);
        let ingredient = self.ingredient_factor(recipe, profile);
        let servings = self.servings_factor(recipe, profile);

        let total = tag.sub_score * self.weights.tag
            + time.sub_score * self.weights.cooking_time
            + cookware.sub_score * self.weights.cookware
            + ingredient.sub_score * self.weights.ingredient
            + servings.sub_score * self.weights.servings;

        let mut reasons: Vec<String> = [tag.reason, time.reason, cookware.reason, ingredient.reason]
            .into_iter()
            .flatten()
            .collect();
        reasons.truncate(MAX_REASONS);

        RecommendationScore {
            recipe_id: recipe.id.clone(),
            score: total,
            reasons,
        }
    }

    /// First justification for recommending this recipe, or the generic
    /// fallback when nothing matched strongly enough.
    pub fn recommendation_reason(&self, recipe: &Recipe, profile: &PreferenceProfile) -> String {
        let mut scored = self.score(recipe, profile);
        if scored.reasons.is_empty() {
            crate::score::FALLBACK_REASON.to_string()
        } else {
            scored.reasons.remove(0)
        }
    }

    /// Whether the candidate clears the given score threshold.
    ///
    /// Callers wanting the stock behavior pass
    /// [`HIGHLY_RECOMMENDED_THRESHOLD`](crate::weights::HIGHLY_RECOMMENDED_THRESHOLD).
    pub fn is_highly_recommended(
        &self,
        recipe: &Recipe,
        profile: &PreferenceProfile,
        threshold: f32,
    ) -> bool {
        self.score(recipe, profile).score >= threshold
    }

    /// Tag factor: how much of the recipe's labeling the user has already
    /// shown interest in, scaled by how strong that interest is.
    fn tag_factor(&self, recipe: &Recipe, profile: &PreferenceProfile) -> Factor {
        weighted_overlap_factor(
            recipe.tags.iter().map(|tag| (tag.as_str(), tag.as_str())),
            recipe.tags.len(),
            &profile.preferred_tags,
            "Matches your favorite tags",
        )
    }

    /// Ingredient factor: same shape as the tag factor, over ingredient
    /// names (lowercased + trimmed on the profile side).
    fn ingredient_factor(&self, recipe: &Recipe, profile: &PreferenceProfile) -> Factor {
        weighted_overlap_factor(
            recipe
                .ingredients
                .iter()
                .map(|ing| (ing.name.trim(), ing.name.trim())),
            recipe.ingredients.len(),
            &profile.preferred_ingredients,
            "Includes ingredients you love",
        )
    }

    fn time_factor(&self, recipe: &Recipe, profile: &PreferenceProfile) -> Factor {
        let matched = normalize_cooking_time(&recipe.cooking_time)
            .is_some_and(|category| profile.preferred_cooking_times.contains(&category));
        Factor::binary(matched, || {
            Some("Fits your preferred cooking time".to_string())
        })
    }

    fn cookware_factor(&self, recipe: &Recipe, profile: &PreferenceProfile) -> Factor {
        let cookware = recipe.cookware.to_lowercase();
        let matched = !cookware.is_empty() && profile.preferred_cookware.contains(&cookware);
        Factor::binary(matched, || {
            Some(format!("Uses your preferred cookware: {}", recipe.cookware))
        })
    }

    fn servings_factor(&self, recipe: &Recipe, profile: &PreferenceProfile) -> Factor {
        let matched = normalize_servings(&recipe.servings)
            .is_some_and(|band| profile.preferred_servings.contains(&band));
        // Never surfaces a reason; lowest-weight factor.
        Factor::binary(matched, || None)
    }
}

/// Shared shape of the tag and ingredient factors.
///
/// ## Algorithm
/// - `matching` = candidate entries found (case-insensitive) in the
///   preference map; zero matches means a zero factor.
/// - `ratio = matching / max(|preferences|, |candidate entries|)` - overlap
///   relative to whichever side is broader, so a one-tag recipe cannot max
///   out against a rich profile (nor vice versa).
/// - `avg_weight` = mean accumulated weight of the matched entries;
///   `sub = min(100, ratio * 100 * avg_weight / 2)`.
/// - A justification is produced only when the factor clears
///   [`REASON_THRESHOLD`], naming the first [`REASON_NAME_CAP`] matched
///   entries verbatim (original casing).
///
/// The division is guarded by `matching > 0`, which also guarantees the
/// candidate list is non-empty and so the `max` denominator is >= 1.
fn weighted_overlap_factor<'a>(
    entries: impl Iterator<Item = (&'a str, &'a str)>,
    entry_count: usize,
    preferences: &IndexMap<String, f32>,
    reason_prefix: &str,
) -> Factor {
    if entry_count == 0 || preferences.is_empty() {
        return Factor::zero();
    }

    let mut matched_names: Vec<&str> = Vec::new();
    let mut weight_sum = 0.0f32;
    for (lookup, display) in entries {
        if let Some(&weight) = preferences.get(&lookup.to_lowercase()) {
            matched_names.push(display);
            weight_sum += weight;
        }
    }

    let matching = matched_names.len();
    if matching == 0 {
        return Factor::zero();
    }

    let ratio = matching as f32 / preferences.len().max(entry_count) as f32;
    let avg_weight = weight_sum / matching as f32;
    let sub_score = (ratio * 100.0 * (avg_weight / 2.0)).min(100.0);

    let reason = (sub_score > REASON_THRESHOLD).then(|| {
        let shown = matched_names[..matching.min(REASON_NAME_CAP)].join(", ");
        format!("{reason_prefix}: {shown}")
    });

    Factor { sub_score, reason }
}
