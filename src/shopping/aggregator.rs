use tracing::debug;

use super::quantity::parse_quantity;
use super::selection::RecipeSelection;
use crate::models::api::{ManualEntry, ShoppingListEntry};

/// Flatten selected recipes into shopping entries scaled by their multiplier
///
/// Every (recipe, ingredient) pair yields its own entry, in selection order
/// then ingredient order. Same-named ingredients are never merged.
pub fn compute_recipe_ingredients<'a, I>(selections: I) -> Vec<ShoppingListEntry>
where
    I: IntoIterator<Item = &'a RecipeSelection>,
{
    selections
        .into_iter()
        .flat_map(|selection| {
            let multiplier = f64::from(selection.multiplier);
            selection
                .ingredients
                .iter()
                .map(move |ingredient| {
                    // Infinity times a zero multiplier is NaN
                    let quantity = parse_quantity(&ingredient.quantity) * multiplier;
                    ShoppingListEntry {
                        name: ingredient.name.clone(),
                        quantity: if quantity.is_nan() { 0.0 } else { quantity },
                        unit: ingredient.unit.clone(),
                    }
                })
        })
        .collect()
}

/// Append a manual entry to `list`, or hand `list` back untouched if the
/// entry has a blank field
pub fn append_manual_entry(
    mut list: Vec<ShoppingListEntry>,
    entry: &ManualEntry,
) -> Vec<ShoppingListEntry> {
    match entry.validate() {
        Some(accepted) => list.push(accepted),
        None => debug!(name = %entry.name, "rejected manual shopping entry with blank field"),
    }
    list
}

/// Manual entries as stored, followed by freshly computed recipe entries
pub fn combined_view<'a, I>(manual: &[ShoppingListEntry], selections: I) -> Vec<ShoppingListEntry>
where
    I: IntoIterator<Item = &'a RecipeSelection>,
{
    let mut combined = manual.to_vec();
    combined.extend(compute_recipe_ingredients(selections));
    combined
}
