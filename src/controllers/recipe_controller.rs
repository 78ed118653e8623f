use std::collections::HashMap;

use sqlx::{Sqlite, SqlitePool, Transaction};
use tracing::{debug, info};

use crate::error::{MealCartError, Result};
use crate::models::api::{IngredientLine, Quantity, Recipe};
use crate::models::{RecipeIngredientRecord, RecipeRecord};

fn ingredient_line(record: RecipeIngredientRecord) -> IngredientLine {
    IngredientLine {
        name: record.name,
        quantity: Quantity::from_column(record.quantity),
        unit: record.unit,
    }
}

fn into_recipe(record: RecipeRecord, ingredients: Vec<IngredientLine>) -> Recipe {
    Recipe {
        id: record.id,
        title: record.title,
        category: record.category,
        description: record.description,
        instructions: record
            .instructions
            .map(|steps| steps.lines().map(str::to_string).collect())
            .unwrap_or_default(),
        ingredients,
        created_at: record.created_at,
    }
}

/// Fetch a recipe by ID with all its ingredient lines
pub async fn get_recipe(pool: &SqlitePool, recipe_id: i64) -> Result<Recipe> {
    let recipe = sqlx::query_as::<_, RecipeRecord>(
        "SELECT id, title, category, description, instructions, created_at FROM recipes WHERE id = ?",
    )
    .bind(recipe_id)
    .fetch_optional(pool)
    .await?
    .ok_or(MealCartError::RecipeNotFound(recipe_id))?;

    let ingredients = sqlx::query_as::<_, RecipeIngredientRecord>(
        r#"
        SELECT id, recipe_id, name, quantity, unit, created_at
        FROM recipe_ingredients
        WHERE recipe_id = ?
        ORDER BY id
        "#,
    )
    .bind(recipe_id)
    .fetch_all(pool)
    .await?;

    debug!(recipe_id, lines = ingredients.len(), "loaded recipe");

    Ok(into_recipe(
        recipe,
        ingredients.into_iter().map(ingredient_line).collect(),
    ))
}

/// Fetch the whole catalog, ordered by recipe ID
///
/// Uses two queries regardless of catalog size.
pub async fn get_all_recipes(pool: &SqlitePool) -> Result<Vec<Recipe>> {
    let recipes = sqlx::query_as::<_, RecipeRecord>(
        "SELECT id, title, category, description, instructions, created_at FROM recipes ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    let lines = sqlx::query_as::<_, RecipeIngredientRecord>(
        r#"
        SELECT id, recipe_id, name, quantity, unit, created_at
        FROM recipe_ingredients
        ORDER BY recipe_id, id
        "#,
    )
    .fetch_all(pool)
    .await?;

    let mut by_recipe: HashMap<i64, Vec<IngredientLine>> = HashMap::new();
    for line in lines {
        by_recipe
            .entry(line.recipe_id)
            .or_default()
            .push(ingredient_line(line));
    }

    debug!(recipes = recipes.len(), "loaded recipe catalog");

    Ok(recipes
        .into_iter()
        .map(|record| {
            let ingredients = by_recipe.remove(&record.id).unwrap_or_default();
            into_recipe(record, ingredients)
        })
        .collect())
}

/// Insert a recipe and its ingredient lines inside an open transaction
pub(crate) async fn insert_recipe(tx: &mut Transaction<'_, Sqlite>, recipe: &Recipe) -> Result<i64> {
    let instructions = if recipe.instructions.is_empty() {
        None
    } else {
        Some(recipe.instructions.join("\n"))
    };

    let recipe_id = sqlx::query(
        "INSERT INTO recipes (title, category, description, instructions) VALUES (?, ?, ?, ?)",
    )
    .bind(&recipe.title)
    .bind(&recipe.category)
    .bind(&recipe.description)
    .bind(instructions)
    .execute(&mut **tx)
    .await?
    .last_insert_rowid();

    for ingredient in &recipe.ingredients {
        sqlx::query(
            "INSERT INTO recipe_ingredients (recipe_id, name, quantity, unit) VALUES (?, ?, ?, ?)",
        )
        .bind(recipe_id)
        .bind(&ingredient.name)
        .bind(ingredient.quantity.to_string())
        .bind(&ingredient.unit)
        .execute(&mut **tx)
        .await?;
    }

    Ok(recipe_id)
}

/// Create a new recipe with its ingredient lines
/// The recipe's id and created_at are ignored
pub async fn create_recipe(pool: &SqlitePool, recipe: &Recipe) -> Result<i64> {
    let mut tx = pool.begin().await?;
    let recipe_id = insert_recipe(&mut tx, recipe).await?;
    tx.commit().await?;

    info!(recipe_id, title = %recipe.title, "created recipe");

    Ok(recipe_id)
}
