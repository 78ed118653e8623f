//! Shopping-list building: quantity parsing, recipe selections and the
//! aggregation of both into one displayable list.

mod aggregator;
mod quantity;
mod selection;

pub use aggregator::{append_manual_entry, combined_view, compute_recipe_ingredients};
pub use quantity::{parse_quantity, parse_quantity_str};
pub use selection::{RecipeSelection, SelectionList};
