mod recipe_controller;
mod seed_controller;
mod shopping_list_controller;

pub use recipe_controller::{create_recipe, get_all_recipes, get_recipe};
pub use seed_controller::{sample_recipes, seed_database};
pub use shopping_list_controller::{add_shopping_item, get_shopping_items};
