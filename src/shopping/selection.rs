use indexmap::IndexMap;

use crate::models::api::{IngredientLine, Recipe};

/// A recipe picked for shopping, with how many times it is wanted
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeSelection {
    pub recipe_id: i64,
    pub title: String,
    pub ingredients: Vec<IngredientLine>,
    pub multiplier: u32,
}

impl RecipeSelection {
    pub fn new(recipe: &Recipe, multiplier: u32) -> Self {
        Self {
            recipe_id: recipe.id,
            title: recipe.title.clone(),
            ingredients: recipe.ingredients.clone(),
            multiplier,
        }
    }
}

/// Session-scoped list of recipe selections, in the order they were picked
#[derive(Debug, Clone, Default)]
pub struct SelectionList {
    selections: IndexMap<i64, RecipeSelection>,
}

impl SelectionList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `recipe` with a multiplier of 1, or bump it if already selected
    pub fn select(&mut self, recipe: &Recipe) {
        self.selections
            .entry(recipe.id)
            .and_modify(|selection| selection.multiplier = selection.multiplier.saturating_add(1))
            .or_insert_with(|| RecipeSelection::new(recipe, 1));
    }

    /// Returns false when `recipe_id` is not selected
    pub fn increment(&mut self, recipe_id: i64) -> bool {
        match self.selections.get_mut(&recipe_id) {
            Some(selection) => {
                selection.multiplier = selection.multiplier.saturating_add(1);
                true
            }
            None => false,
        }
    }

    /// Lower the multiplier by one, stopping at zero
    ///
    /// A selection at zero stays in the list and contributes nothing.
    pub fn decrement(&mut self, recipe_id: i64) -> bool {
        match self.selections.get_mut(&recipe_id) {
            Some(selection) => {
                selection.multiplier = selection.multiplier.saturating_sub(1);
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, recipe_id: i64) -> Option<RecipeSelection> {
        self.selections.shift_remove(&recipe_id)
    }

    pub fn get(&self, recipe_id: i64) -> Option<&RecipeSelection> {
        self.selections.get(&recipe_id)
    }

    pub fn get_index(&self, index: usize) -> Option<&RecipeSelection> {
        self.selections.get_index(index).map(|(_, selection)| selection)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RecipeSelection> {
        self.selections.values()
    }

    pub fn len(&self) -> usize {
        self.selections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }
}

impl<'a> IntoIterator for &'a SelectionList {
    type Item = &'a RecipeSelection;
    type IntoIter = indexmap::map::Values<'a, i64, RecipeSelection>;

    fn into_iter(self) -> Self::IntoIter {
        self.selections.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    fn recipe(id: i64, title: &str) -> Recipe {
        Recipe {
            id,
            title: title.to_string(),
            category: "Main Dish".to_string(),
            description: None,
            instructions: vec![],
            ingredients: vec![IngredientLine::new("eggs", 4, "piece")],
            created_at: String::new(),
        }
    }

    #[fixture]
    fn three_selected() -> SelectionList {
        let mut list = SelectionList::new();
        list.select(&recipe(1, "Shakshuka"));
        list.select(&recipe(2, "Hummus"));
        list.select(&recipe(3, "Sabich"));
        list
    }

    fn ids(list: &SelectionList) -> Vec<i64> {
        list.iter().map(|s| s.recipe_id).collect()
    }

    #[rstest]
    fn test_select_keeps_pick_order(three_selected: SelectionList) {
        assert_eq!(ids(&three_selected), vec![1, 2, 3]);
        assert!(three_selected.iter().all(|s| s.multiplier == 1));
    }

    #[rstest]
    fn test_select_twice_increments(mut three_selected: SelectionList) {
        three_selected.select(&recipe(2, "Hummus"));

        assert_eq!(three_selected.len(), 3);
        assert_eq!(three_selected.get(2).map(|s| s.multiplier), Some(2));
    }

    #[rstest]
    fn test_increment_and_decrement(mut three_selected: SelectionList) {
        assert!(three_selected.increment(1));
        assert!(three_selected.increment(1));
        assert_eq!(three_selected.get(1).map(|s| s.multiplier), Some(3));

        assert!(three_selected.decrement(1));
        assert_eq!(three_selected.get(1).map(|s| s.multiplier), Some(2));
    }

    #[rstest]
    fn test_increment_saturates(mut three_selected: SelectionList) {
        if let Some(selection) = three_selected.selections.get_mut(&1) {
            selection.multiplier = u32::MAX;
        }

        assert!(three_selected.increment(1));
        three_selected.select(&recipe(1, "Shakshuka"));

        assert_eq!(three_selected.get(1).map(|s| s.multiplier), Some(u32::MAX));
    }

    #[rstest]
    fn test_decrement_clamps_at_zero(mut three_selected: SelectionList) {
        assert!(three_selected.decrement(3));
        assert!(three_selected.decrement(3));

        let sabich = three_selected.get(3).expect("selection should remain");
        assert_eq!(sabich.multiplier, 0);
    }

    #[rstest]
    fn test_unknown_recipe_is_noop(mut three_selected: SelectionList) {
        assert!(!three_selected.increment(42));
        assert!(!three_selected.decrement(42));
        assert!(three_selected.remove(42).is_none());
        assert_eq!(ids(&three_selected), vec![1, 2, 3]);
    }

    #[rstest]
    fn test_remove_preserves_order(mut three_selected: SelectionList) {
        let removed = three_selected.remove(2).expect("Hummus was selected");

        assert_eq!(removed.title, "Hummus");
        assert_eq!(ids(&three_selected), vec![1, 3]);
        assert_eq!(three_selected.get_index(1).map(|s| s.recipe_id), Some(3));
    }

    #[test]
    fn test_selection_copies_recipe_ingredients() {
        let selection = RecipeSelection::new(&recipe(7, "Shakshuka"), 2);

        assert_eq!(selection.recipe_id, 7);
        assert_eq!(selection.multiplier, 2);
        assert_eq!(
            selection.ingredients,
            vec![IngredientLine::new("eggs", 4, "piece")]
        );
    }
}
