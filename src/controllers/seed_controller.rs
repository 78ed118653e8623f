use sqlx::SqlitePool;
use tracing::info;

use super::recipe_controller::insert_recipe;
use crate::error::Result;
use crate::models::api::{IngredientLine, Recipe};

/// Replace the recipe catalog with `recipes`
///
/// Runs in a single transaction and clears existing recipes first, so
/// seeding twice leaves exactly one copy of the catalog. The manual
/// shopping list is not touched. Returns the number of recipes inserted.
pub async fn seed_database(pool: &SqlitePool, recipes: &[Recipe]) -> Result<usize> {
    let mut tx = pool.begin().await?;

    let cleared = sqlx::query("DELETE FROM recipe_ingredients")
        .execute(&mut *tx)
        .await?
        .rows_affected();
    sqlx::query("DELETE FROM recipes").execute(&mut *tx).await?;

    for recipe in recipes {
        insert_recipe(&mut tx, recipe).await?;
    }

    tx.commit().await?;

    info!(
        recipes = recipes.len(),
        cleared_lines = cleared,
        "seeded recipe catalog"
    );

    Ok(recipes.len())
}

fn sample(
    title: &str,
    category: &str,
    description: &str,
    instructions: &[&str],
    ingredients: Vec<IngredientLine>,
) -> Recipe {
    Recipe {
        id: 0,
        title: title.to_string(),
        category: category.to_string(),
        description: Some(description.to_string()),
        instructions: instructions.iter().map(|s| s.to_string()).collect(),
        ingredients,
        created_at: String::new(),
    }
}

/// Built-in sample catalog used by the seed binary
pub fn sample_recipes() -> Vec<Recipe> {
    vec![
        sample(
            "Shakshuka",
            "Main Dish",
            "Poached eggs cooked in a spiced tomato and pepper sauce.",
            &[
                "Sauté onions, bell peppers and garlic in olive oil until soft.",
                "Add tomatoes, paprika, cumin and simmer until thickened.",
                "Make wells in the sauce and crack eggs into them.",
                "Cover and cook until eggs are set; garnish with parsley.",
            ],
            vec![
                IngredientLine::new("tomatoes", 6, "piece"),
                IngredientLine::new("bell pepper", 1, "piece"),
                IngredientLine::new("onion", 1, "piece"),
                IngredientLine::new("eggs", 4, "piece"),
                IngredientLine::new("cumin", 1, "tsp"),
                IngredientLine::new("paprika", 2, "tsp"),
            ],
        ),
        sample(
            "Chocolate Babka",
            "Dessert",
            "A rich yeasted cake with swirls of chocolate filling.",
            &[
                "Prepare dough and let it rise until doubled.",
                "Roll out dough, spread chocolate filling and roll up.",
                "Twist into a braid and let rise again.",
                "Bake until golden brown and brush with syrup.",
            ],
            vec![
                IngredientLine::new("flour", 500, "g"),
                IngredientLine::new("yeast", 7, "g"),
                IngredientLine::new("dark chocolate", 200, "g"),
                IngredientLine::new("butter", 100, "g"),
                IngredientLine::new("sugar", "1/2", "cup"),
            ],
        ),
        sample(
            "Mediterranean Salad",
            "Starters",
            "A refreshing salad with cucumbers, tomatoes, feta and olives.",
            &[
                "Chop cucumbers, tomatoes and red onions.",
                "Crumble feta cheese and add to the vegetables.",
                "Add olives, drizzle with olive oil and lemon juice, sprinkle oregano.",
            ],
            vec![
                IngredientLine::new("cucumber", 2, "piece"),
                IngredientLine::new("tomato", 2, "piece"),
                IngredientLine::new("feta", 100, "g"),
                IngredientLine::new("olive", 50, "g"),
            ],
        ),
        sample(
            "Falafel in Pita",
            "Main Dish",
            "Crispy falafel balls stuffed in pita with salad and tahini.",
            &[
                "Soak dried chickpeas in water overnight.",
                "Blend chickpeas with herbs and spices; form into small balls.",
                "Fry falafel until crispy and golden.",
                "Warm pitas, fill with falafel, fresh salad, pickles and tahini.",
            ],
            vec![
                IngredientLine::new("dried chickpeas", 200, "g"),
                IngredientLine::new("parsley", 1, "bunch"),
                IngredientLine::new("cilantro", 1, "bunch"),
                IngredientLine::new("onion", 1, "piece"),
                IngredientLine::new("garlic", 3, "clove"),
                IngredientLine::new("cumin", 2, "tsp"),
                IngredientLine::new("baking powder", 1, "tsp"),
                IngredientLine::new("salt", 1, "tsp"),
                IngredientLine::new("vegetable oil", 500, "ml"),
                IngredientLine::new("pita bread", 4, "piece"),
                IngredientLine::new("tahini", 100, "ml"),
            ],
        ),
        sample(
            "Israeli Couscous Salad",
            "Appetizers",
            "Toasted pearl couscous tossed with vegetables in a lemony dressing.",
            &[
                "Toast pearl couscous in a little olive oil until lightly golden.",
                "Simmer with water or vegetable broth until tender; let cool.",
                "Chop cucumbers, tomatoes, and parsley finely.",
                "Toss couscous with vegetables, lemon juice, olive oil, salt and pepper.",
            ],
            vec![
                IngredientLine::new("pearl couscous", 200, "g"),
                IngredientLine::new("cucumber", 1, "piece"),
                IngredientLine::new("tomato", 1, "piece"),
                IngredientLine::new("parsley", 0.5, "bunch"),
                IngredientLine::new("lemon", 1, "piece"),
                IngredientLine::new("olive oil", 3, "tbsp"),
                IngredientLine::new("salt", 0.5, "tsp"),
                IngredientLine::new("black pepper", "1/4", "tsp"),
            ],
        ),
        sample(
            "Hummus",
            "Appetizers",
            "Creamy blended dip made from chickpeas, tahini, lemon, and garlic.",
            &[
                "Drain and rinse chickpeas.",
                "Blend chickpeas with tahini, lemon juice, garlic and olive oil until smooth.",
                "Add cold water gradually to adjust consistency and blend again.",
                "Season with salt; serve drizzled with olive oil and paprika.",
            ],
            vec![
                IngredientLine::new("canned chickpeas", 400, "g"),
                IngredientLine::new("tahini", 60, "ml"),
                IngredientLine::new("lemon", 1, "piece"),
                IngredientLine::new("garlic", 2, "clove"),
                IngredientLine::new("olive oil", 2, "tbsp"),
                IngredientLine::new("salt", "1/2", "tsp"),
                IngredientLine::new("paprika", "1/4", "tsp"),
            ],
        ),
        sample(
            "Malabi",
            "Dessert",
            "Silky milk pudding topped with rose syrup and crushed pistachios.",
            &[
                "Whisk cornstarch into a little cold milk.",
                "Heat the remaining milk with sugar, add the slurry and stir until thick.",
                "Pour into glasses and chill for at least four hours.",
                "Top with rose syrup and pistachios before serving.",
            ],
            vec![
                IngredientLine::new("milk", 1, "l"),
                IngredientLine::new("cornstarch", 80, "g"),
                IngredientLine::new("sugar", "1/3", "cup"),
                IngredientLine::new("rose water", 1, "tbsp"),
                IngredientLine::new("pistachios", 30, "g"),
            ],
        ),
    ]
}
