//! Built-in sample recipes seeded at first run.

use crate::model::recipe::{Owner, Recipe};

/// Returns the sample catalog in display order.
pub fn sample_recipes() -> Vec<Recipe> {
    vec![
        sample(
            "sample-1",
            "Avocado Toast",
            "Breakfast",
            "https://images.unsplash.com/photo-1541519227354-08fa5d50c44d?w=800",
            &[
                "2 slices sourdough bread",
                "1 ripe avocado",
                "1 tbsp lemon juice",
                "Chili flakes",
                "Salt and pepper",
            ],
            "Toast the bread. Mash the avocado with lemon juice, salt and pepper. \
             Spread on toast and finish with chili flakes.",
            "10 min",
            2,
            320,
            "Easy",
        ),
        sample(
            "sample-2",
            "Spaghetti Carbonara",
            "Dinner",
            "https://images.unsplash.com/photo-1612874742237-6526221588e3?w=800",
            &[
                "200 g spaghetti",
                "100 g guanciale",
                "2 eggs",
                "50 g pecorino romano",
                "Black pepper",
            ],
            "Cook the pasta. Crisp the guanciale. Whisk eggs with cheese and pepper, \
             toss with hot pasta off the heat until creamy.",
            "25 min",
            2,
            650,
            "Medium",
        ),
        sample(
            "sample-3",
            "Chocolate Lava Cake",
            "Dessert",
            "https://images.unsplash.com/photo-1606313564200-e75d5e30476c?w=800",
            &[
                "100 g dark chocolate",
                "100 g butter",
                "2 eggs",
                "50 g sugar",
                "2 tbsp flour",
            ],
            "Melt chocolate with butter. Whisk eggs and sugar, fold in chocolate and \
             flour. Bake in buttered ramekins at 220C for 12 minutes.",
            "30 min",
            4,
            480,
            "Hard",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn sample(
    id: &str,
    title: &str,
    category: &str,
    image: &str,
    ingredients: &[&str],
    instructions: &str,
    prep_time: &str,
    servings: u32,
    calories: u32,
    difficulty: &str,
) -> Recipe {
    Recipe {
        id: id.to_string(),
        title: title.to_string(),
        category: category.to_string(),
        image: image.to_string(),
        ingredients: ingredients.iter().map(|line| (*line).to_string()).collect(),
        instructions: instructions.to_string(),
        prep_time: prep_time.to_string(),
        servings,
        calories,
        difficulty: difficulty.to_string(),
        owner: Owner::Sample,
    }
}
