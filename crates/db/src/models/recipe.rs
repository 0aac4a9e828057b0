//! Recipe model and import DTO.

use ecoeats_core::query::RecipeEntry;
use ecoeats_core::recommendation::Scorable;
use ecoeats_core::types::{ItemId, Timestamp};
use serde::{Deserialize, Serialize};

/// A recipe. Read-only once stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub id: ItemId,
    pub name: String,
    pub cuisine_type: String,
    /// Minutes.
    pub prep_time: i32,
    /// Ingredients whose impending expiry should surface this recipe.
    pub uses_ingredients: Vec<String>,
    pub ingredients: Vec<String>,
    /// Ordered steps.
    pub instructions: Vec<String>,
    #[serde(default)]
    pub dietary_tags: Vec<String>,
    pub created_at: Timestamp,
}

impl RecipeEntry for Recipe {
    fn name(&self) -> &str {
        &self.name
    }

    fn cuisine_type(&self) -> &str {
        &self.cuisine_type
    }

    fn uses_ingredients(&self) -> &[String] {
        &self.uses_ingredients
    }

    fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    fn dietary_tags(&self) -> &[String] {
        &self.dietary_tags
    }
}

impl Scorable for Recipe {
    fn prep_time_minutes(&self) -> i32 {
        self.prep_time
    }

    fn step_count(&self) -> usize {
        self.instructions.len()
    }
}

/// A recipe as found in a seed file (no id or timestamps yet).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRecipe {
    pub name: String,
    pub cuisine_type: String,
    pub prep_time: i32,
    pub uses_ingredients: Vec<String>,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    #[serde(default)]
    pub dietary_tags: Vec<String>,
}
