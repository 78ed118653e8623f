mod recipe;
mod recipe_ingredient;
mod shopping_item;

pub mod api;

#[cfg(test)]
pub mod test_fixtures;

pub use recipe::RecipeRecord;
pub use recipe_ingredient::RecipeIngredientRecord;
pub use shopping_item::ShoppingItemRecord;
