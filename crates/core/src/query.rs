//! In-memory list filtering and sorting for inventory and recipes.
//!
//! Every function here borrows its input and returns a fresh ordered
//! sequence of references; nothing is mutated. Sorting is stable so equal
//! keys keep their original relative order.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Record traits
// ---------------------------------------------------------------------------

/// The fields of an inventory record that listing needs.
pub trait StockedItem {
    fn name(&self) -> &str;
    fn category(&self) -> &str;
    fn days_until_expiration(&self) -> i64;
}

/// The fields of a recipe that listing needs.
pub trait RecipeEntry {
    fn name(&self) -> &str;
    fn cuisine_type(&self) -> &str;
    /// Ingredients that trigger a suggestion when they are about to expire.
    fn uses_ingredients(&self) -> &[String];
    /// Full ingredient list.
    fn ingredients(&self) -> &[String];
    fn dietary_tags(&self) -> &[String];
}

// ---------------------------------------------------------------------------
// Sort order
// ---------------------------------------------------------------------------

pub const SORT_EXPIRING: &str = "expiring";
pub const SORT_NAME: &str = "name";
pub const SORT_CATEGORY: &str = "category";

pub const VALID_SORT_ORDERS: &[&str] = &[SORT_EXPIRING, SORT_NAME, SORT_CATEGORY];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Soonest expiry first.
    #[default]
    Expiring,
    Name,
    Category,
}

impl SortOrder {
    pub fn from_str_value(s: &str) -> Result<Self, CoreError> {
        match s {
            SORT_EXPIRING => Ok(Self::Expiring),
            SORT_NAME => Ok(Self::Name),
            SORT_CATEGORY => Ok(Self::Category),
            _ => Err(CoreError::Validation(format!(
                "Invalid sort order '{s}'. Must be one of: {}",
                VALID_SORT_ORDERS.join(", ")
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Expiring => SORT_EXPIRING,
            Self::Name => SORT_NAME,
            Self::Category => SORT_CATEGORY,
        }
    }
}

// ---------------------------------------------------------------------------
// Filters
// ---------------------------------------------------------------------------

/// Inventory search: name substring AND category membership.
#[derive(Debug, Clone, Default)]
pub struct InventoryFilter {
    pub search: String,
    /// Empty means every category matches.
    pub categories: Vec<String>,
}

/// Recipe search: name/ingredient substring AND cuisine AND dietary tags.
#[derive(Debug, Clone, Default)]
pub struct RecipeFilter {
    pub search: String,
    /// Empty means every cuisine matches.
    pub cuisines: Vec<String>,
    /// Empty means no dietary restriction; otherwise any one tag suffices.
    pub dietary_tags: Vec<String>,
}

/// Case-insensitive substring test against an already lower-cased needle.
fn contains_folded(haystack: &str, needle_lower: &str) -> bool {
    needle_lower.is_empty() || haystack.to_lowercase().contains(needle_lower)
}

fn in_set_or_unfiltered(value: &str, set: &[String]) -> bool {
    set.is_empty() || set.iter().any(|s| s == value)
}

impl InventoryFilter {
    pub fn matches<T: StockedItem>(&self, item: &T) -> bool {
        let needle = self.search.trim().to_lowercase();
        contains_folded(item.name(), &needle) && in_set_or_unfiltered(item.category(), &self.categories)
    }
}

impl RecipeFilter {
    pub fn matches<T: RecipeEntry>(&self, recipe: &T) -> bool {
        let needle = self.search.trim().to_lowercase();
        let matches_search = contains_folded(recipe.name(), &needle)
            || recipe
                .uses_ingredients()
                .iter()
                .chain(recipe.ingredients())
                .any(|ing| contains_folded(ing, &needle));

        let matches_dietary = self.dietary_tags.is_empty()
            || self
                .dietary_tags
                .iter()
                .any(|tag| recipe.dietary_tags().contains(tag));

        matches_search && matches_dietary && in_set_or_unfiltered(recipe.cuisine_type(), &self.cuisines)
    }
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// Sort inventory references in place by the chosen key (stable).
pub fn sort_items<T: StockedItem>(items: &mut [&T], order: SortOrder) {
    match order {
        SortOrder::Expiring => items.sort_by_key(|item| item.days_until_expiration()),
        SortOrder::Name => items.sort_by_cached_key(|item| item.name().to_lowercase()),
        SortOrder::Category => items.sort_by_cached_key(|item| item.category().to_lowercase()),
    }
}

/// Filter then sort an inventory list.
pub fn query_inventory<'a, T: StockedItem>(
    items: &'a [T],
    filter: &InventoryFilter,
    order: SortOrder,
) -> Vec<&'a T> {
    let mut matched: Vec<&T> = items.iter().filter(|item| filter.matches(*item)).collect();
    sort_items(&mut matched, order);
    matched
}

/// Items expiring within `within_days` days, soonest first.
pub fn expiring_within<T: StockedItem>(items: &[T], within_days: i64) -> Vec<&T> {
    let mut soon: Vec<&T> = items
        .iter()
        .filter(|item| item.days_until_expiration() <= within_days)
        .collect();
    sort_items(&mut soon, SortOrder::Expiring);
    soon
}

/// Filter a recipe list, preserving its order.
pub fn query_recipes<'a, T: RecipeEntry>(recipes: &'a [T], filter: &RecipeFilter) -> Vec<&'a T> {
    recipes.iter().filter(|r| filter.matches(*r)).collect()
}

// ---------------------------------------------------------------------------
// Facets
// ---------------------------------------------------------------------------

/// Distinct values in first-seen order.
pub fn distinct<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}

pub fn distinct_categories<T: StockedItem>(items: &[T]) -> Vec<String> {
    distinct(items.iter().map(StockedItem::category))
}

pub fn distinct_cuisines<T: RecipeEntry>(recipes: &[T]) -> Vec<String> {
    distinct(recipes.iter().map(RecipeEntry::cuisine_type))
}

pub fn distinct_dietary_tags<T: RecipeEntry>(recipes: &[T]) -> Vec<String> {
    distinct(
        recipes
            .iter()
            .flat_map(|r| r.dietary_tags().iter().map(String::as_str)),
    )
}

/// Split a comma-separated multi-select parameter into trimmed values.
pub fn parse_multi_select(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
