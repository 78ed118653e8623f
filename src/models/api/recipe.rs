use std::fmt;

use super::Quantity;

/// Complete recipe with all ingredient lines
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub description: Option<String>,
    pub instructions: Vec<String>,
    pub ingredients: Vec<IngredientLine>,
    pub created_at: String,
}

/// A single ingredient within a recipe
#[derive(Debug, Clone, PartialEq)]
pub struct IngredientLine {
    pub name: String,
    pub quantity: Quantity,
    pub unit: String,
}

impl IngredientLine {
    pub fn new(name: &str, quantity: impl Into<Quantity>, unit: &str) -> Self {
        Self {
            name: name.to_string(),
            quantity: quantity.into(),
            unit: unit.to_string(),
        }
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Recipe: {}", self.title)?;
        writeln!(f, "ID: {}", self.id)?;
        writeln!(f, "Category: {}", self.category)?;

        if let Some(description) = &self.description {
            writeln!(f, "\n{}", description)?;
        }

        writeln!(f, "\nIngredients:")?;
        for ingredient in &self.ingredients {
            writeln!(
                f,
                "  - {} - {} {}",
                ingredient.name, ingredient.quantity, ingredient.unit
            )?;
        }

        if !self.instructions.is_empty() {
            writeln!(f, "\nInstructions:")?;
            for (i, step) in self.instructions.iter().enumerate() {
                writeln!(f, "{}. {}", i + 1, step)?;
            }
        }

        Ok(())
    }
}
