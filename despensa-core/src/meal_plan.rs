//! Meal plans and the shopping list they produce.

use crate::error::{MealPlanError, StoreError};
use crate::id::generate_id;
use crate::shopping::add_ingredients_to_shopping_list;
use crate::store::{MealPlanStore, PantryStore, RecipeStore, ShoppingListStore};
use crate::types::{MealPlan, MealType, PlanShoppingSummary, PlannedMeal, WeekDay};
use chrono::{Datelike, Days, NaiveDate, Utc};
use std::collections::HashSet;
use std::iter;

const DAY_NAMES: [&str; 7] = [
    "Domingo",
    "Lunes",
    "Martes",
    "Miercoles",
    "Jueves",
    "Viernes",
    "Sabado",
];

/// Longest plan that can be created, in weeks.
pub const MAX_PLAN_WEEKS: u32 = 52;

/// Format a date as YYYY-MM-DD.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Distinct recipe ids referenced by a plan, in order of first appearance.
pub fn distinct_recipe_ids(plan: &MealPlan) -> Vec<&str> {
    let mut seen = HashSet::new();
    plan.meals
        .iter()
        .map(|meal| meal.recipe_id.as_str())
        .filter(|id| seen.insert(*id))
        .collect()
}

/// Build a new plan covering `num_weeks` weeks from `start_date`, with no meals.
///
/// `num_weeks` must be between 1 and [`MAX_PLAN_WEEKS`], and the last day must
/// be a representable date.
pub fn create_empty_meal_plan(
    name: &str,
    start_date: NaiveDate,
    num_weeks: u32,
) -> Result<MealPlan, MealPlanError> {
    if num_weeks == 0 || num_weeks > MAX_PLAN_WEEKS {
        return Err(MealPlanError::InvalidRange(format!(
            "num_weeks must be between 1 and {}, got {}",
            MAX_PLAN_WEEKS, num_weeks
        )));
    }

    let end_date = start_date
        .checked_add_days(Days::new(u64::from(num_weeks) * 7 - 1))
        .ok_or_else(|| {
            MealPlanError::InvalidRange(format!(
                "a {}-week plan starting {} ends past the last supported date",
                num_weeks, start_date
            ))
        })?;

    Ok(MealPlan {
        id: generate_id(),
        name: name.to_string(),
        start_date,
        end_date,
        meals: Vec::new(),
        created_at: Utc::now(),
    })
}

fn calendar_days(start_date: NaiveDate, count: usize, today: NaiveDate) -> Vec<WeekDay> {
    iter::successors(Some(start_date), |date| date.succ_opt())
        .take(count)
        .map(|date| WeekDay {
            date,
            day_name: DAY_NAMES[date.weekday().num_days_from_sunday() as usize].to_string(),
            day_number: date.day(),
            is_today: date == today,
            lunch: None,
            dinner: None,
        })
        .collect()
}

/// Consecutive calendar days starting at `start_date`, `num_weeks * 7` of them.
///
/// Capped at [`MAX_PLAN_WEEKS`] weeks.
pub fn week_days(start_date: NaiveDate, num_weeks: u32, today: NaiveDate) -> Vec<WeekDay> {
    let weeks = num_weeks.min(MAX_PLAN_WEEKS) as usize;
    calendar_days(start_date, weeks * 7, today)
}

/// Attach each day's lunch and dinner from the plan.
pub fn organize_meals_by_day(plan: &MealPlan, days: Vec<WeekDay>) -> Vec<WeekDay> {
    let find = |date: NaiveDate, meal_type: MealType| {
        plan.meals
            .iter()
            .find(|meal| meal.date == date && meal.meal_type == meal_type)
            .cloned()
    };

    days.into_iter()
        .map(|day| WeekDay {
            lunch: find(day.date, MealType::Lunch),
            dinner: find(day.date, MealType::Dinner),
            ..day
        })
        .collect()
}

/// The plan's calendar: every day from start to end with its meals filled in.
///
/// Stored plans longer than [`MAX_PLAN_WEEKS`] weeks are cut off there.
pub fn plan_calendar(plan: &MealPlan, today: NaiveDate) -> Vec<WeekDay> {
    let span = (plan.end_date - plan.start_date).num_days() + 1;
    let max_days = MAX_PLAN_WEEKS as usize * 7;
    let count = usize::try_from(span).unwrap_or(0).min(max_days);
    organize_meals_by_day(plan, calendar_days(plan.start_date, count, today))
}

/// Put a recipe in a plan slot, replacing whatever occupied it.
pub async fn add_meal_to_day(
    store: &dyn MealPlanStore,
    plan_id: &str,
    date: NaiveDate,
    meal_type: MealType,
    recipe_id: &str,
    recipe_title: &str,
) -> Result<PlannedMeal, MealPlanError> {
    let mut plan = store
        .get_meal_plan_by_id(plan_id)
        .await?
        .ok_or_else(|| MealPlanError::NotFound(plan_id.to_string()))?;

    plan.meals
        .retain(|meal| !(meal.date == date && meal.meal_type == meal_type));

    let meal = PlannedMeal {
        id: generate_id(),
        recipe_id: recipe_id.to_string(),
        recipe_title: recipe_title.to_string(),
        date,
        meal_type,
    };
    plan.meals.push(meal.clone());
    store.save_meal_plan(&plan).await?;

    Ok(meal)
}

/// Drop a planned meal by id.
pub async fn remove_meal_from_day(
    store: &dyn MealPlanStore,
    plan_id: &str,
    meal_id: &str,
) -> Result<(), MealPlanError> {
    let mut plan = store
        .get_meal_plan_by_id(plan_id)
        .await?
        .ok_or_else(|| MealPlanError::NotFound(plan_id.to_string()))?;

    plan.meals.retain(|meal| meal.id != meal_id);
    store.save_meal_plan(&plan).await?;
    Ok(())
}

/// Add the ingredients of every recipe in a plan to the shopping list.
///
/// Each distinct recipe is merged once, in order of first appearance, with
/// pantry items excluded. Recipes that no longer exist are skipped.
pub async fn generate_shopping_list_from_plan(
    plan: &MealPlan,
    recipes: &dyn RecipeStore,
    shopping: &dyn ShoppingListStore,
    pantry: &dyn PantryStore,
) -> Result<PlanShoppingSummary, StoreError> {
    let mut summary = PlanShoppingSummary::default();

    for recipe_id in distinct_recipe_ids(plan) {
        let Some(recipe) = recipes.get_recipe_by_id(recipe_id).await? else {
            tracing::warn!(plan_id = %plan.id, recipe_id, "planned recipe not found, skipping");
            summary.recipes_missing += 1;
            continue;
        };

        let counts =
            add_ingredients_to_shopping_list(shopping, pantry, &recipe.ingredients, &recipe.title, true)
                .await?;
        summary.recipes_merged += 1;
        summary.added += counts.added;
        summary.skipped += counts.skipped;
    }

    tracing::info!(
        plan_id = %plan.id,
        recipes = summary.recipes_merged,
        missing = summary.recipes_missing,
        added = summary.added,
        skipped = summary.skipped,
        "shopping list generated from meal plan"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn meal(recipe_id: &str, day: NaiveDate, meal_type: MealType) -> PlannedMeal {
        PlannedMeal {
            id: generate_id(),
            recipe_id: recipe_id.to_string(),
            recipe_title: recipe_id.to_uppercase(),
            date: day,
            meal_type,
        }
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(date(2024, 3, 5)), "2024-03-05");
    }

    #[test]
    fn test_distinct_recipe_ids_first_occurrence() {
        let mut plan = create_empty_meal_plan("Semana", date(2024, 3, 4), 1).unwrap();
        plan.meals = vec![
            meal("b", date(2024, 3, 4), MealType::Lunch),
            meal("a", date(2024, 3, 4), MealType::Dinner),
            meal("b", date(2024, 3, 6), MealType::Lunch),
            meal("c", date(2024, 3, 7), MealType::Dinner),
        ];
        assert_eq!(distinct_recipe_ids(&plan), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_empty_plan_span() {
        let plan = create_empty_meal_plan("Dos semanas", date(2024, 3, 4), 2).unwrap();
        assert_eq!(plan.end_date, date(2024, 3, 17));
        assert!(plan.meals.is_empty());
    }

    #[test]
    fn test_week_days() {
        // 2024-03-03 was a Sunday.
        let days = week_days(date(2024, 3, 3), 1, date(2024, 3, 5));
        assert_eq!(days.len(), 7);
        assert_eq!(days[0].day_name, "Domingo");
        assert_eq!(days[3].day_name, "Miercoles");
        assert_eq!(days[6].day_name, "Sabado");
        assert_eq!(days[6].day_number, 9);
        let today: Vec<_> = days.iter().filter(|d| d.is_today).collect();
        assert_eq!(today.len(), 1);
        assert_eq!(today[0].date, date(2024, 3, 5));
    }

    #[test]
    fn test_week_days_cross_month() {
        let days = week_days(date(2024, 2, 26), 1, date(2000, 1, 1));
        let numbers: Vec<u32> = days.iter().map(|d| d.day_number).collect();
        assert_eq!(numbers, vec![26, 27, 28, 29, 1, 2, 3]);
        assert!(days.iter().all(|d| !d.is_today));
    }

    #[test]
    fn test_organize_meals_by_day() {
        let mut plan = create_empty_meal_plan("Semana", date(2024, 3, 4), 1).unwrap();
        plan.meals = vec![
            meal("lentejas", date(2024, 3, 4), MealType::Lunch),
            meal("tortilla", date(2024, 3, 5), MealType::Dinner),
        ];
        let days = organize_meals_by_day(&plan, week_days(date(2024, 3, 4), 1, date(2024, 3, 4)));

        assert_eq!(days[0].lunch.as_ref().unwrap().recipe_id, "lentejas");
        assert!(days[0].dinner.is_none());
        assert!(days[1].lunch.is_none());
        assert_eq!(days[1].dinner.as_ref().unwrap().recipe_id, "tortilla");
        assert!(days[2..].iter().all(|d| d.lunch.is_none() && d.dinner.is_none()));
    }

    #[test]
    fn test_plan_calendar_covers_plan() {
        let mut plan = create_empty_meal_plan("Dos semanas", date(2024, 3, 4), 2).unwrap();
        plan.meals = vec![meal("pisto", date(2024, 3, 17), MealType::Dinner)];

        let days = plan_calendar(&plan, date(2024, 3, 10));
        assert_eq!(days.len(), 14);
        assert_eq!(days[0].day_name, "Lunes");
        assert!(days[6].is_today);
        assert_eq!(days[13].dinner.as_ref().unwrap().recipe_id, "pisto");
    }

    #[test]
    fn test_create_plan_rejects_out_of_range_weeks() {
        for weeks in [0, MAX_PLAN_WEEKS + 1, 400_000_000, u32::MAX] {
            let result = create_empty_meal_plan("Largo", date(2024, 3, 4), weeks);
            assert!(
                matches!(result, Err(MealPlanError::InvalidRange(_))),
                "weeks = {}",
                weeks
            );
        }

        let plan = create_empty_meal_plan("Anual", date(2024, 1, 1), MAX_PLAN_WEEKS).unwrap();
        assert_eq!(plan.end_date, date(2024, 12, 29));
    }

    #[test]
    fn test_create_plan_past_last_date_is_invalid() {
        let start = NaiveDate::MAX - Days::new(3);
        let result = create_empty_meal_plan("Fin", start, 1);
        assert!(matches!(result, Err(MealPlanError::InvalidRange(_))));
    }

    #[test]
    fn test_week_days_stop_at_last_date() {
        let start = NaiveDate::MAX - Days::new(3);
        let days = week_days(start, 1, date(2024, 3, 4));
        assert_eq!(days.len(), 4);
        assert_eq!(days[3].date, NaiveDate::MAX);

        assert_eq!(week_days(date(2024, 3, 4), u32::MAX, date(2024, 3, 4)).len(), 364);
    }

    #[test]
    fn test_plan_calendar_uses_exact_span() {
        let mut plan = create_empty_meal_plan("Semana", date(2024, 3, 4), 1).unwrap();
        plan.end_date = date(2024, 3, 13);
        plan.meals = vec![meal("cocido", date(2024, 3, 13), MealType::Lunch)];

        let days = plan_calendar(&plan, date(2024, 3, 4));
        assert_eq!(days.len(), 10);
        assert_eq!(days[9].lunch.as_ref().unwrap().recipe_id, "cocido");
    }

    #[test]
    fn test_plan_calendar_caps_oversized_plan() {
        let mut plan = create_empty_meal_plan("Semana", date(2024, 3, 4), 1).unwrap();
        plan.end_date = date(9000, 1, 1);
        assert_eq!(plan_calendar(&plan, date(2024, 3, 4)).len(), 364);

        plan.end_date = date(2024, 3, 1);
        assert!(plan_calendar(&plan, date(2024, 3, 4)).is_empty());
    }

    #[tokio::test]
    async fn test_add_meal_replaces_slot() {
        let store = MemoryStore::new();
        let plan = create_empty_meal_plan("Semana", date(2024, 3, 4), 1).unwrap();
        store.save_meal_plan(&plan).await.unwrap();

        let monday = date(2024, 3, 4);
        add_meal_to_day(&store, &plan.id, monday, MealType::Lunch, "r1", "Lentejas")
            .await
            .unwrap();
        add_meal_to_day(&store, &plan.id, monday, MealType::Dinner, "r2", "Tortilla")
            .await
            .unwrap();
        let replacement = add_meal_to_day(&store, &plan.id, monday, MealType::Lunch, "r3", "Paella")
            .await
            .unwrap();

        let stored = store.get_meal_plan_by_id(&plan.id).await.unwrap().unwrap();
        assert_eq!(stored.meals.len(), 2);
        assert_eq!(stored.meals[0].recipe_id, "r2");
        assert_eq!(stored.meals[1], replacement);

        remove_meal_from_day(&store, &plan.id, &replacement.id)
            .await
            .unwrap();
        let stored = store.get_meal_plan_by_id(&plan.id).await.unwrap().unwrap();
        assert_eq!(stored.meals.len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_plan_is_not_found() {
        let store = MemoryStore::new();
        let result =
            add_meal_to_day(&store, "nope", date(2024, 3, 4), MealType::Lunch, "r1", "Lentejas")
                .await;
        assert!(matches!(result, Err(MealPlanError::NotFound(id)) if id == "nope"));

        let result = remove_meal_from_day(&store, "nope", "m1").await;
        assert!(matches!(result, Err(MealPlanError::NotFound(_))));
    }
}
