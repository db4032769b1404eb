//! Factor weights for combining the five sub-scores.

/// Default score at or above which a recipe counts as highly recommended.
pub const HIGHLY_RECOMMENDED_THRESHOLD: f32 = 30.0;

/// Relative importance of each matching factor.
///
/// The five weights sum to 1.0 and each sub-score is bounded to [0, 100],
/// so a combined score can never leave [0, 100]. The defaults are the
/// app's shipped constants; override through `RecipeScorer::with_weights`
/// rather than editing globals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub tag: f32,
    pub cooking_time: f32,
    pub cookware: f32,
    pub ingredient: f32,
    pub servings: f32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            tag: 0.40,
            cooking_time: 0.20,
            cookware: 0.15,
            ingredient: 0.15,
            servings: 0.10,
        }
    }
}
