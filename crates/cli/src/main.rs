use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use engine::RecommendationEngine;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// PlateRecs - Recipe Recommendation Engine
#[derive(Parser)]
#[command(name = "plate-recs")]
#[command(about = "Personalized recipe ranking from your likes, favorites, and tried marks", long_about = None)]
struct Cli {
    /// Path to the recipe catalog JSON file
    #[arg(short, long, default_value = "data/recipes.json")]
    catalog: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank the catalog against an interaction log
    Recommend {
        /// Path to the interaction log JSON file
        #[arg(long, default_value = "data/interactions.json")]
        interactions: PathBuf,

        /// Number of recommendations to return
        #[arg(long, default_value = "10")]
        limit: usize,

        /// Show every justification per recipe, not just the first
        #[arg(long)]
        explain: bool,
    },

    /// Show the preference profile derived from an interaction log
    Profile {
        /// Path to the interaction log JSON file
        #[arg(long, default_value = "data/interactions.json")]
        interactions: PathBuf,
    },

    /// Score a single recipe against an interaction log
    Score {
        /// Path to the interaction log JSON file
        #[arg(long, default_value = "data/interactions.json")]
        interactions: PathBuf,

        /// Recipe id to score
        #[arg(long)]
        recipe_id: String,
    },

    /// Search for recipes by title
    Search {
        /// Recipe title to search for (case-insensitive substring match)
        #[arg(long)]
        title: String,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    println!("Loading recipe catalog from {}...", cli.catalog.display());
    let start = Instant::now();
    let recipe_catalog = Arc::new(
        catalog::load_catalog(&cli.catalog).context("Failed to load recipe catalog")?,
    );
    println!(
        "{} Loaded {} recipes in {:?}",
        "✓".green(),
        recipe_catalog.len(),
        start.elapsed()
    );

    let engine = RecommendationEngine::new(recipe_catalog.clone());

    match cli.command {
        Commands::Recommend {
            interactions,
            limit,
            explain,
        } => handle_recommend(&engine, &interactions, limit, explain)?,
        Commands::Profile { interactions } => handle_profile(&engine, &interactions)?,
        Commands::Score {
            interactions,
            recipe_id,
        } => handle_score(&engine, &interactions, &recipe_id)?,
        Commands::Search { title } => handle_search(&engine, &title)?,
    }

    Ok(())
}

/// Handle the 'recommend' command
fn handle_recommend(
    engine: &RecommendationEngine,
    interactions_path: &PathBuf,
    limit: usize,
    explain: bool,
) -> Result<()> {
    let interactions =
        catalog::load_interactions(interactions_path).context("Failed to load interaction log")?;

    let recommendations = engine.recommend(&interactions, limit);
    let profile = explain.then(|| engine.build_profile(&interactions));

    println!("{}", "Top recommendations:".bold().blue());
    for (rank, rec) in recommendations.iter().enumerate() {
        let tags = rec.tags.join(", ");
        println!(
            "{:>2}. {} {} [{}]",
            rank + 1,
            format!("{:5.1}", rec.score).cyan(),
            rec.title.bold(),
            tags.dimmed()
        );
        println!("      {}", rec.reason.italic());

        if let Some(profile) = &profile {
            if let Some(recipe) = engine.catalog().get(&rec.recipe_id) {
                for reason in engine.scorer().score(recipe, profile).reasons {
                    println!("      {} {}", "•".green(), reason);
                }
            }
        }
    }
    Ok(())
}

/// Handle the 'profile' command
fn handle_profile(engine: &RecommendationEngine, interactions_path: &PathBuf) -> Result<()> {
    let interactions =
        catalog::load_interactions(interactions_path).context("Failed to load interaction log")?;
    let profile = engine.build_profile(&interactions);

    println!("{}", "Preference profile".bold().blue());
    println!(
        "{}Distinct recipes interacted with: {}",
        "• ".green(),
        profile.total_interactions
    );

    if !profile.has_enough_data() {
        println!(
            "{}",
            "Not enough interactions yet - rankings will be unpersonalized".yellow()
        );
        return Ok(());
    }

    println!("Top tags:");
    for (tag, weight) in profile.top_tags(5) {
        println!("  - {tag}: {weight:.1}");
    }
    println!("Top ingredients:");
    for (name, weight) in profile.top_ingredients(5) {
        println!("  - {name}: {weight:.1}");
    }

    let mut cuisines: Vec<_> = profile.preferred_cuisines.iter().collect();
    cuisines.sort();
    let cuisines = cuisines
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    println!("Cuisines: {}", if cuisines.is_empty() { "-".to_string() } else { cuisines });

    let times = profile
        .preferred_cooking_times
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    println!("Cooking times: {}", if times.is_empty() { "-".to_string() } else { times });

    let cookware = profile
        .preferred_cookware
        .iter()
        .cloned()
        .collect::<Vec<_>>()
        .join(", ");
    println!("Cookware: {}", if cookware.is_empty() { "-".to_string() } else { cookware });

    Ok(())
}

/// Handle the 'score' command
fn handle_score(
    engine: &RecommendationEngine,
    interactions_path: &PathBuf,
    recipe_id: &str,
) -> Result<()> {
    let interactions =
        catalog::load_interactions(interactions_path).context("Failed to load interaction log")?;
    let recipe = engine
        .catalog()
        .get(recipe_id)
        .ok_or_else(|| anyhow!("Recipe {} not found in catalog", recipe_id))?;

    let profile = engine.build_profile(&interactions);
    let result = engine.scorer().score(recipe, &profile);

    println!(
        "{} scores {} against this profile",
        recipe.title.bold(),
        format!("{:.1}", result.score).cyan()
    );
    for reason in &result.reasons {
        println!("  {} {}", "•".green(), reason);
    }
    if result.reasons.is_empty() {
        println!("  {}", "No strong factor matches".dimmed());
    }
    Ok(())
}

/// Handle the 'search' command
fn handle_search(engine: &RecommendationEngine, title: &str) -> Result<()> {
    let matches = engine.catalog().search_title(title);

    println!("{}", format!("Search results for '{}':", title).bold().blue());
    for recipe in matches.iter().take(20) {
        let tags = recipe.tags.join(", ");
        println!("{}: {} [{}]", recipe.id, recipe.title, tags.dimmed());
    }
    if matches.is_empty() {
        println!("  {}", "No recipes matched".dimmed());
    }
    Ok(())
}
