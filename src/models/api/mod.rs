mod quantity;
mod recipe;
mod shopping_list;

pub use quantity::Quantity;
pub use recipe::{IngredientLine, Recipe};
pub use shopping_list::{ManualEntry, ShoppingListEntry};
