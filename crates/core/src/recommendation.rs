//! Recipe suggestions ranked by how urgently they use up the pantry.
//!
//! A recipe is only suggested when every one of its trigger ingredients is
//! on hand. Qualifying recipes are ranked first by expiration urgency of the
//! pantry items they consume, then by an overall score that also rewards
//! simpler recipes.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::query::RecipeEntry;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Default number of suggestions returned.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 10;

/// Maximum number of suggestions a caller may request.
pub const MAX_SUGGESTION_LIMIT: usize = 50;

/// Weight of urgency relative to the complexity bonus in the total score.
const URGENCY_WEIGHT: f64 = 10.0;

static QUANTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d+\s*(cups?|tbsp|tsp|oz|lbs?|grams?|kg|ml|l)\s*").expect("valid regex")
});

static FILLER_WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(a|an|the|of|in|with|and|or)\b").expect("valid regex"));

// ---------------------------------------------------------------------------
// Ingredient matching
// ---------------------------------------------------------------------------

/// Lower-case an ingredient, strip measured quantities and filler words,
/// and collapse whitespace. `"2 cups of Plain Flour"` becomes `"plain flour"`.
pub fn normalize_ingredient_name(ingredient: &str) -> String {
    let lowered = ingredient.trim().to_lowercase();
    let without_quantities = QUANTITY_RE.replace_all(&lowered, "");
    let without_fillers = FILLER_WORD_RE.replace_all(&without_quantities, "");
    without_fillers.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Two normalized names refer to the same pantry ingredient.
fn same_ingredient(recipe_ing: &str, available: &str) -> bool {
    if recipe_ing == available {
        return true;
    }
    matches!(
        (recipe_ing, available),
        ("egg", "eggs") | ("eggs", "egg") | ("flour", "plain flour") | ("plain flour", "flour")
    ) || (recipe_ing == "oil" && available.contains("oil"))
        || (available == "oil" && recipe_ing.contains("oil"))
}

/// Whether every ingredient in `recipe_ingredients` is available.
///
/// A recipe with no trigger ingredients never qualifies.
pub fn covers_all_ingredients(recipe_ingredients: &[String], available: &[String]) -> bool {
    if recipe_ingredients.is_empty() {
        return false;
    }
    let available: Vec<String> = available.iter().map(|a| normalize_ingredient_name(a)).collect();
    recipe_ingredients.iter().all(|ing| {
        let ing = normalize_ingredient_name(ing);
        available.iter().any(|a| same_ingredient(&ing, a))
    })
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// A pantry item as seen by the recommender.
#[derive(Debug, Clone, Copy)]
pub struct PantryItem<'a> {
    pub name: &'a str,
    pub days_until_expiration: i64,
}

/// Urgency contribution of a single pantry item.
pub fn urgency_weight(days_until_expiration: i64) -> f64 {
    match days_until_expiration {
        d if d <= 2 => 3.0,
        d if d <= 5 => 2.0,
        d if d <= 10 => 1.0,
        _ => 0.5,
    }
}

/// Mean urgency of the pantry items a recipe would consume.
///
/// A pantry item counts when its normalized name contains, or is contained
/// in, one of the recipe's normalized ingredients.
pub fn expiration_urgency(pantry: &[PantryItem<'_>], recipe_ingredients: &[String]) -> f64 {
    let normalized: Vec<String> = recipe_ingredients
        .iter()
        .map(|i| normalize_ingredient_name(i))
        .collect();

    let weights: Vec<f64> = pantry
        .iter()
        .filter(|item| {
            let name = normalize_ingredient_name(item.name);
            normalized
                .iter()
                .any(|ing| ing.contains(&name) || name.contains(ing.as_str()))
        })
        .map(|item| urgency_weight(item.days_until_expiration))
        .collect();

    if weights.is_empty() {
        return 0.0;
    }
    weights.iter().sum::<f64>() / weights.len() as f64
}

/// Bonus for simple recipes: few ingredients, short prep, few steps.
pub fn complexity_score(ingredient_count: usize, prep_time_minutes: i32, step_count: usize) -> f64 {
    let mut score = 1.0;

    if ingredient_count <= 5 {
        score += 0.3;
    } else if ingredient_count <= 8 {
        score += 0.1;
    }

    if prep_time_minutes <= 15 {
        score += 0.3;
    } else if prep_time_minutes <= 30 {
        score += 0.1;
    }

    if step_count <= 5 {
        score += 0.2;
    }

    score
}

/// Extra recipe facts the scorer needs beyond [`RecipeEntry`].
pub trait Scorable: RecipeEntry {
    fn prep_time_minutes(&self) -> i32;
    fn step_count(&self) -> usize;
}

/// A recipe that qualified for suggestion, with its scores.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredRecipe<'a, T> {
    pub recipe: &'a T,
    pub urgency: f64,
    pub score: f64,
}

/// Rank recipes that can be cooked entirely from the pantry.
///
/// Ordered by urgency, then total score, both descending. Ties keep the
/// order of `recipes`.
pub fn suggest_recipes<'a, T: Scorable>(
    recipes: &'a [T],
    pantry: &[PantryItem<'_>],
    limit: usize,
) -> Vec<ScoredRecipe<'a, T>> {
    if pantry.is_empty() {
        return Vec::new();
    }

    let available: Vec<String> = pantry.iter().map(|p| p.name.to_string()).collect();

    let mut scored: Vec<ScoredRecipe<'a, T>> = recipes
        .iter()
        .filter(|r| covers_all_ingredients(r.uses_ingredients(), &available))
        .map(|recipe| {
            let urgency = expiration_urgency(pantry, recipe.uses_ingredients());
            let complexity = complexity_score(
                recipe.ingredients().len(),
                recipe.prep_time_minutes(),
                recipe.step_count(),
            );
            ScoredRecipe {
                recipe,
                urgency,
                score: urgency * URGENCY_WEIGHT + complexity,
            }
        })
        .collect();

    scored.sort_by(|a, b| {
        b.urgency
            .total_cmp(&a.urgency)
            .then_with(|| b.score.total_cmp(&a.score))
    });
    scored.truncate(limit);
    scored
}

/// Clamp a caller-supplied suggestion limit.
pub fn clamp_suggestion_limit(limit: Option<usize>) -> usize {
    limit
        .unwrap_or(DEFAULT_SUGGESTION_LIMIT)
        .clamp(1, MAX_SUGGESTION_LIMIT)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    struct TestRecipe {
        name: String,
        uses: Vec<String>,
        ingredients: Vec<String>,
        prep: i32,
        steps: usize,
    }

    impl RecipeEntry for TestRecipe {
        fn name(&self) -> &str {
            &self.name
        }
        fn cuisine_type(&self) -> &str {
            "Any"
        }
        fn uses_ingredients(&self) -> &[String] {
            &self.uses
        }
        fn ingredients(&self) -> &[String] {
            &self.ingredients
        }
        fn dietary_tags(&self) -> &[String] {
            &[]
        }
    }

    impl Scorable for TestRecipe {
        fn prep_time_minutes(&self) -> i32 {
            self.prep
        }
        fn step_count(&self) -> usize {
            self.steps
        }
    }

    fn recipe(name: &str, uses: &[&str]) -> TestRecipe {
        let uses: Vec<String> = uses.iter().map(|s| s.to_string()).collect();
        TestRecipe {
            name: name.to_string(),
            ingredients: uses.clone(),
            uses,
            prep: 20,
            steps: 4,
        }
    }

    fn pantry<'a>(items: &[(&'a str, i64)]) -> Vec<PantryItem<'a>> {
        items
            .iter()
            .map(|&(name, days)| PantryItem {
                name,
                days_until_expiration: days,
            })
            .collect()
    }

    // -- normalize_ingredient_name -------------------------------------------

    #[test]
    fn normalize_strips_quantities_and_fillers() {
        assert_eq!(normalize_ingredient_name("2 cups of Plain Flour"), "plain flour");
        assert_eq!(normalize_ingredient_name("  The   Eggs "), "eggs");
        assert_eq!(normalize_ingredient_name("500 grams Chicken"), "chicken");
    }

    // -- covers_all_ingredients ----------------------------------------------

    #[test]
    fn coverage_requires_every_ingredient() {
        let available = vec!["Milk".to_string(), "Eggs".to_string()];
        assert!(covers_all_ingredients(&["milk".to_string()], &available));
        assert!(!covers_all_ingredients(
            &["milk".to_string(), "butter".to_string()],
            &available
        ));
    }

    #[test]
    fn coverage_honours_equivalences() {
        let available = vec!["Egg".to_string(), "Flour".to_string(), "Olive Oil".to_string()];
        assert!(covers_all_ingredients(
            &["eggs".to_string(), "plain flour".to_string(), "oil".to_string()],
            &available
        ));
    }

    #[test]
    fn empty_recipe_never_qualifies() {
        assert!(!covers_all_ingredients(&[], &["Milk".to_string()]));
    }

    // -- scoring ---------------------------------------------------------------

    #[test]
    fn urgency_weights_by_tier() {
        assert_eq!(urgency_weight(0), 3.0);
        assert_eq!(urgency_weight(5), 2.0);
        assert_eq!(urgency_weight(10), 1.0);
        assert_eq!(urgency_weight(11), 0.5);
    }

    #[test]
    fn urgency_is_mean_of_matching_items() {
        let items = pantry(&[("Milk", 1), ("Spinach", 4), ("Rice", 100)]);
        let urgency = expiration_urgency(&items, &["milk".to_string(), "spinach".to_string()]);
        assert_eq!(urgency, 2.5);
    }

    #[test]
    fn complexity_rewards_simple_recipes() {
        assert!((complexity_score(4, 10, 3) - 1.8).abs() < 1e-9);
        assert!((complexity_score(7, 25, 9) - 1.2).abs() < 1e-9);
        assert!((complexity_score(12, 60, 12) - 1.0).abs() < 1e-9);
    }

    // -- suggest_recipes -------------------------------------------------------

    #[test]
    fn no_pantry_no_suggestions() {
        let recipes = vec![recipe("Toast", &["bread"])];
        assert!(suggest_recipes(&recipes, &[], 10).is_empty());
    }

    #[test]
    fn suggestions_rank_urgent_recipes_first() {
        let recipes = vec![
            recipe("Rice Bowl", &["rice"]),
            recipe("Creamed Spinach", &["milk", "spinach"]),
            recipe("Pancakes", &["milk", "eggs", "butter"]),
        ];
        let items = pantry(&[("Milk", 1), ("Spinach", 2), ("Rice", 30)]);

        let ranked = suggest_recipes(&recipes, &items, 10);
        let names: Vec<&str> = ranked.iter().map(|s| s.recipe.name()).collect();
        assert_eq!(names, ["Creamed Spinach", "Rice Bowl"]);
        assert_eq!(ranked[0].urgency, 3.0);
    }

    #[test]
    fn suggestions_respect_limit() {
        let recipes = vec![recipe("A", &["milk"]), recipe("B", &["milk"]), recipe("C", &["milk"])];
        let items = pantry(&[("Milk", 3)]);
        let ranked = suggest_recipes(&recipes, &items, 2);
        let names: Vec<&str> = ranked.iter().map(|s| s.recipe.name()).collect();
        assert_eq!(names, ["A", "B"]);
    }

    #[test]
    fn limit_is_clamped() {
        assert_eq!(clamp_suggestion_limit(None), DEFAULT_SUGGESTION_LIMIT);
        assert_eq!(clamp_suggestion_limit(Some(0)), 1);
        assert_eq!(clamp_suggestion_limit(Some(1_000)), MAX_SUGGESTION_LIMIT);
    }
}
