//! Browsing helpers over an already-loaded recipe catalog.

use indexmap::IndexMap;

use crate::models::api::Recipe;

/// Recipes grouped under their lower-cased category, in first-seen order
pub fn group_by_category(recipes: &[Recipe]) -> IndexMap<String, Vec<Recipe>> {
    let mut groups: IndexMap<String, Vec<Recipe>> = IndexMap::new();
    for recipe in recipes {
        groups
            .entry(recipe.category.to_lowercase())
            .or_default()
            .push(recipe.clone());
    }
    groups
}

/// Recipes whose category matches `category`, ignoring case
pub fn filter_by_category(recipes: &[Recipe], category: &str) -> Vec<Recipe> {
    let category = category.to_lowercase();
    recipes
        .iter()
        .filter(|recipe| recipe.category.to_lowercase() == category)
        .cloned()
        .collect()
}

/// Keep recipes whose title contains `term`, ignoring case
///
/// A blank term keeps everything. Categories left without recipes are
/// dropped.
pub fn search_by_title(
    groups: &IndexMap<String, Vec<Recipe>>,
    term: &str,
) -> IndexMap<String, Vec<Recipe>> {
    if term.trim().is_empty() {
        return groups.clone();
    }

    let term = term.to_lowercase();
    groups
        .iter()
        .filter_map(|(category, recipes)| {
            let matching: Vec<Recipe> = recipes
                .iter()
                .filter(|recipe| recipe.title.to_lowercase().contains(&term))
                .cloned()
                .collect();
            (!matching.is_empty()).then(|| (category.clone(), matching))
        })
        .collect()
}
