mod seed;

use anyhow::{bail, Context, Result};
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use despensa_core::{
    add_ingredients_to_shopping_list, add_manual_item, add_meal_to_day, add_pantry_item,
    clear_all_items, clear_checked_items, create_empty_meal_plan, create_recipe, delete_recipe,
    generate_shopping_list_from_plan, move_shopping_item_to_pantry, plan_calendar, remove_item,
    remove_meal_from_day, remove_pantry_item, search_recipes, set_pantry_item_category,
    toggle_item, update_recipe, JsonFileStore, MealPlanStore, MealType, NewRecipe, PantryCategory,
    PantryStore, RecipeStore, RecipeUpdate, ShoppingListStore, StoreConfig, MAX_PLAN_WEEKS,
};
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "despensa")]
#[command(about = "Recipes, pantry, meal plans and the shopping list", long_about = None)]
struct Cli {
    /// Data directory (default: $DESPENSA_DATA_DIR or ~/.despensa/data)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shopping list commands
    #[command(subcommand)]
    Shopping(ShoppingCommand),
    /// Pantry commands
    #[command(subcommand)]
    Pantry(PantryCommand),
    /// Recipe commands
    #[command(subcommand)]
    Recipes(RecipeCommand),
    /// Meal plan commands
    #[command(subcommand)]
    Plan(PlanCommand),
    /// Load sample recipes and pantry staples
    Seed,
}

#[derive(Subcommand)]
enum ShoppingCommand {
    /// Show the shopping list
    List,
    /// Merge a recipe's ingredients into the list (reads stdin when no text is given)
    AddIngredients {
        /// Recipe name recorded as provenance
        #[arg(long)]
        recipe: String,
        /// Keep ingredients the pantry already has
        #[arg(long)]
        include_pantry: bool,
        /// Ingredients, one per line or comma-separated
        text: Option<String>,
    },
    /// Add a single item by hand
    Add { text: String },
    /// Check or uncheck an item
    Toggle { id: String },
    /// Remove an item
    Remove { id: String },
    /// Remove all checked items
    ClearChecked,
    /// Empty the list
    ClearAll,
    /// Record an item as on hand in the pantry
    ToPantry { id: String },
}

#[derive(Subcommand)]
enum PantryCommand {
    /// Show the pantry
    List,
    /// Add an item
    Add {
        name: String,
        #[arg(long, default_value = "staple", value_parser = parse_category)]
        category: PantryCategory,
        #[arg(long)]
        quantity: Option<String>,
    },
    /// Remove an item
    Remove { id: String },
    /// Change an item's category
    SetCategory {
        id: String,
        #[arg(value_parser = parse_category)]
        category: PantryCategory,
    },
}

#[derive(Subcommand)]
enum RecipeCommand {
    /// List recipes, newest first
    List,
    /// Show one recipe
    Show { id: String },
    /// Add a recipe (reads ingredients from stdin when --ingredients is not given)
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        ingredients: Option<String>,
    },
    /// Find recipes whose title or ingredients contain TERM
    Search { term: String },
    /// Change a recipe's title or ingredients
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        ingredients: Option<String>,
    },
    /// Delete a recipe
    Delete { id: String },
}

#[derive(Subcommand)]
enum PlanCommand {
    /// Create an empty plan
    Create {
        name: String,
        /// First day (YYYY-MM-DD, default: today)
        #[arg(long)]
        start: Option<NaiveDate>,
        /// Plan length in weeks (1 to 52)
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_PLAN_WEEKS)))]
        weeks: u32,
    },
    /// Show a plan day by day (default: the current plan)
    Show { id: Option<String> },
    /// Put a recipe in a lunch or dinner slot
    AddMeal {
        plan_id: String,
        date: NaiveDate,
        #[arg(value_parser = parse_meal_type)]
        meal_type: MealType,
        recipe_id: String,
    },
    /// Remove a planned meal
    RemoveMeal { plan_id: String, meal_id: String },
    /// Add every planned recipe's ingredients to the shopping list
    Generate { id: Option<String> },
}

fn parse_category(s: &str) -> Result<PantryCategory, String> {
    PantryCategory::from_str(s).ok_or_else(|| format!("expected staple or current, got '{}'", s))
}

fn parse_meal_type(s: &str) -> Result<MealType, String> {
    MealType::from_str(s).ok_or_else(|| format!("expected lunch or dinner, got '{}'", s))
}

fn read_stdin() -> Result<String> {
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("Failed to read stdin")?;
    Ok(text)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let store = match cli.data_dir {
        Some(dir) => JsonFileStore::new(dir),
        None => JsonFileStore::from_config(&StoreConfig::from_env()),
    };

    match cli.command {
        Commands::Shopping(command) => shopping(&store, command).await,
        Commands::Pantry(command) => pantry(&store, command).await,
        Commands::Recipes(command) => recipes(&store, command).await,
        Commands::Plan(command) => plan(&store, command).await,
        Commands::Seed => seed::seed(&store).await,
    }
}

async fn shopping(store: &JsonFileStore, command: ShoppingCommand) -> Result<()> {
    match command {
        ShoppingCommand::List => {
            let list = store.get_shopping_list().await?;
            if list.items.is_empty() {
                println!("Shopping list is empty");
            }
            for item in &list.items {
                let mark = if item.checked { "x" } else { " " };
                if item.from_recipes.is_empty() {
                    println!("[{}] {}  {}", mark, item.id, item.text);
                } else {
                    println!(
                        "[{}] {}  {}  ({})",
                        mark,
                        item.id,
                        item.text,
                        item.from_recipes.join(", ")
                    );
                }
            }
        }
        ShoppingCommand::AddIngredients {
            recipe,
            include_pantry,
            text,
        } => {
            let text = match text {
                Some(text) => text,
                None => read_stdin()?,
            };
            let counts =
                add_ingredients_to_shopping_list(store, store, &text, &recipe, !include_pantry)
                    .await?;
            println!(
                "Added {} item(s), skipped {} already in pantry",
                counts.added, counts.skipped
            );
        }
        ShoppingCommand::Add { text } => match add_manual_item(store, &text).await? {
            Some(item) => println!("Added {}  {}", item.id, item.text),
            None => bail!("Item text is empty"),
        },
        ShoppingCommand::Toggle { id } => match toggle_item(store, &id).await? {
            Some(item) => println!(
                "{} is now {}",
                item.text,
                if item.checked { "checked" } else { "unchecked" }
            ),
            None => bail!("No shopping list item with id {}", id),
        },
        ShoppingCommand::Remove { id } => {
            if !remove_item(store, &id).await? {
                bail!("No shopping list item with id {}", id);
            }
            println!("Removed {}", id);
        }
        ShoppingCommand::ClearChecked => {
            let removed = clear_checked_items(store).await?;
            println!("Removed {} checked item(s)", removed);
        }
        ShoppingCommand::ClearAll => {
            clear_all_items(store).await?;
            println!("Shopping list cleared");
        }
        ShoppingCommand::ToPantry { id } => {
            let list = store.get_shopping_list().await?;
            let Some(item) = list.items.iter().find(|i| i.id == id) else {
                bail!("No shopping list item with id {}", id);
            };
            match move_shopping_item_to_pantry(store, &item.text).await? {
                Some(added) => println!("Added {} to the pantry", added.name),
                None => println!("{} is already in the pantry", item.text),
            }
        }
    }
    Ok(())
}

async fn pantry(store: &JsonFileStore, command: PantryCommand) -> Result<()> {
    match command {
        PantryCommand::List => {
            let pantry = store.get_pantry().await?;
            if pantry.items.is_empty() {
                println!("Pantry is empty");
            }
            for item in &pantry.items {
                match &item.quantity {
                    Some(quantity) => println!(
                        "{}  {:<8} {} ({})",
                        item.id,
                        item.category.as_str(),
                        item.name,
                        quantity
                    ),
                    None => println!("{}  {:<8} {}", item.id, item.category.as_str(), item.name),
                }
            }
        }
        PantryCommand::Add {
            name,
            category,
            quantity,
        } => match add_pantry_item(store, &name, category, quantity.as_deref()).await? {
            Some(item) => println!("Added {}  {}", item.id, item.name),
            None => println!("{} is already in the pantry", name.trim()),
        },
        PantryCommand::Remove { id } => {
            if !remove_pantry_item(store, &id).await? {
                bail!("No pantry item with id {}", id);
            }
            println!("Removed {}", id);
        }
        PantryCommand::SetCategory { id, category } => {
            match set_pantry_item_category(store, &id, category).await? {
                Some(item) => println!("{} is now {}", item.name, item.category.as_str()),
                None => bail!("No pantry item with id {}", id),
            }
        }
    }
    Ok(())
}

async fn recipes(store: &JsonFileStore, command: RecipeCommand) -> Result<()> {
    match command {
        RecipeCommand::List => {
            for recipe in store.list_recipes().await? {
                println!("{}  {}", recipe.id, recipe.title);
            }
        }
        RecipeCommand::Show { id } => {
            let Some(recipe) = store.get_recipe_by_id(&id).await? else {
                bail!("No recipe with id {}", id);
            };
            println!("{}", recipe.title);
            println!("{}", "=".repeat(recipe.title.chars().count()));
            println!("{}", recipe.ingredients.trim());
            for (i, step) in recipe.steps.iter().enumerate() {
                println!("{}. {}", i + 1, step);
            }
        }
        RecipeCommand::Add { title, ingredients } => {
            let ingredients = match ingredients {
                Some(text) => text,
                None => read_stdin()?,
            };
            let new = NewRecipe {
                title,
                ingredients,
                ..Default::default()
            };
            match create_recipe(store, new).await? {
                Some(recipe) => println!("Created {}  {}", recipe.id, recipe.title),
                None => bail!("Recipe title is empty"),
            }
        }
        RecipeCommand::Search { term } => {
            for recipe in search_recipes(store.list_recipes().await?, &term) {
                println!("{}  {}", recipe.id, recipe.title);
            }
        }
        RecipeCommand::Edit {
            id,
            title,
            ingredients,
        } => {
            if title.as_deref().is_some_and(|t| t.trim().is_empty()) {
                bail!("Recipe title is empty");
            }
            let update = RecipeUpdate {
                title,
                ingredients,
                ..Default::default()
            };
            match update_recipe(store, &id, update).await? {
                Some(recipe) => println!("Updated {}  {}", recipe.id, recipe.title),
                None => bail!("No recipe with id {}", id),
            }
        }
        RecipeCommand::Delete { id } => {
            if !delete_recipe(store, &id).await? {
                bail!("No recipe with id {}", id);
            }
            println!("Deleted {}", id);
        }
    }
    Ok(())
}

async fn plan(store: &JsonFileStore, command: PlanCommand) -> Result<()> {
    let today = Utc::now().date_naive();

    match command {
        PlanCommand::Create { name, start, weeks } => {
            let plan = create_empty_meal_plan(&name, start.unwrap_or(today), weeks)?;
            store.save_meal_plan(&plan).await?;
            println!(
                "Created {}  {} ({} to {})",
                plan.id, plan.name, plan.start_date, plan.end_date
            );
        }
        PlanCommand::Show { id } => {
            let plan = load_plan(store, id).await?;
            println!("{}  {}", plan.id, plan.name);
            for day in plan_calendar(&plan, today) {
                let lunch = day.lunch.as_ref().map_or("-", |m| m.recipe_title.as_str());
                let dinner = day.dinner.as_ref().map_or("-", |m| m.recipe_title.as_str());
                let marker = if day.is_today { "*" } else { " " };
                println!(
                    "{} {:<10} {:>2}  lunch: {:<24} dinner: {}",
                    marker, day.day_name, day.day_number, lunch, dinner
                );
            }
        }
        PlanCommand::AddMeal {
            plan_id,
            date,
            meal_type,
            recipe_id,
        } => {
            let Some(recipe) = store.get_recipe_by_id(&recipe_id).await? else {
                bail!("No recipe with id {}", recipe_id);
            };
            let meal =
                add_meal_to_day(store, &plan_id, date, meal_type, &recipe.id, &recipe.title)
                    .await?;
            println!(
                "Planned {} for {} {}",
                meal.recipe_title,
                meal.meal_type.as_str(),
                meal.date
            );
        }
        PlanCommand::RemoveMeal { plan_id, meal_id } => {
            remove_meal_from_day(store, &plan_id, &meal_id).await?;
            println!("Removed {}", meal_id);
        }
        PlanCommand::Generate { id } => {
            let plan = load_plan(store, id).await?;
            let summary = generate_shopping_list_from_plan(&plan, store, store, store).await?;
            println!(
                "Merged {} recipe(s): {} added, {} skipped",
                summary.recipes_merged, summary.added, summary.skipped
            );
            if summary.recipes_missing > 0 {
                println!("{} planned recipe(s) no longer exist", summary.recipes_missing);
            }
        }
    }
    Ok(())
}

async fn load_plan(store: &JsonFileStore, id: Option<String>) -> Result<despensa_core::MealPlan> {
    let plan = match id {
        Some(id) => store
            .get_meal_plan_by_id(&id)
            .await?
            .with_context(|| format!("No meal plan with id {}", id))?,
        None => store
            .get_current_meal_plan()
            .await?
            .context("No meal plan yet; create one with `despensa plan create`")?,
    };
    Ok(plan)
}
