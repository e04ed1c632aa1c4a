//! Plan command - create and manage meal plans

use super::load_catalog;
use anyhow::{Context, Result, bail};
use nutrijama_api_client::NutrijamaClient;
use nutrijama_cli::output::{Status, format_count, format_grams, format_kcal, format_milligrams};
use nutrijama_planner::{MealIngredient, NutritionTotals, PlanStore, SavedMealPlan, totals};
use owo_colors::OwoColorize;

/// Create a plan from NAME:GRAMS ingredient specs
pub async fn new(name: &str, specs: &[String]) -> Result<()> {
    let client = NutrijamaClient::new()?;
    let catalog = load_catalog(&client).await?;

    let mut ingredients = Vec::with_capacity(specs.len());
    for spec in specs {
        let (food_name, grams) = parse_spec(spec)?;

        let matches = nutrijama_search::search(food_name, &catalog);
        let Some(best) = matches.first() else {
            bail!("no se encontró \"{food_name}\" en el catálogo");
        };

        Status::info(&format!(
            "{} {} → {}",
            best.group_icon(),
            food_name,
            best.name()
        ));
        ingredients.push(MealIngredient::from_food(best, grams));
    }

    let mut store = PlanStore::default_store()?;
    let plan = store.save_plan(name, ingredients)?;

    Status::success(&format!("Plan \"{}\" guardado ({})", plan.name, plan.id));
    print_totals(&totals(&plan.ingredients));
    Ok(())
}

/// List saved plans
pub fn list() -> Result<()> {
    let store = PlanStore::default_store()?;

    if store.plans().is_empty() {
        Status::info("No hay planes guardados");
        return Ok(());
    }

    Status::header("Planes de comida");
    for plan in store.plans() {
        let current = store
            .current_plan()
            .is_some_and(|c| c.id == plan.id)
            .then_some("●")
            .unwrap_or(" ");

        let remaining = plan
            .time_until_expiration(chrono::Utc::now())
            .map_or_else(
                || "vencido".to_string(),
                |left| format!("expira en {}h {}m", left.num_hours(), left.num_minutes() % 60),
            );

        println!(
            "  {} {:<24} {:<26} {}",
            current.green(),
            plan.name,
            format_count(plan.ingredients.len(), "ingrediente", "ingredientes").dimmed(),
            remaining.dimmed()
        );
        println!("    {}", plan.id.dimmed());
    }
    println!();
    Ok(())
}

/// Show one plan and its nutrition totals
pub fn show(id: &str) -> Result<()> {
    let store = PlanStore::default_store()?;
    let plan = find_plan(&store, id)?;

    Status::header(&plan.name);
    for ingredient in &plan.ingredients {
        let origin = if ingredient.custom {
            "personalizado".to_string()
        } else {
            ingredient
                .group
                .map_or_else(String::new, |g| g.name().to_string())
        };
        println!(
            "  {:<32} {:>10} {}",
            ingredient.name,
            format_grams(ingredient.weight),
            origin.dimmed()
        );
    }

    print_totals(&totals(&plan.ingredients));
    Ok(())
}

/// Delete a plan
pub fn delete(id: &str) -> Result<()> {
    let mut store = PlanStore::default_store()?;
    let plan_id = find_plan(&store, id)?.id.clone();

    store.delete_plan(&plan_id)?;
    Status::success("Plan eliminado");
    Ok(())
}

fn parse_spec(spec: &str) -> Result<(&str, f64)> {
    let (name, grams) = spec
        .rsplit_once(':')
        .with_context(|| format!("ingrediente inválido \"{spec}\", se espera NOMBRE:GRAMOS"))?;

    let grams: f64 = grams
        .trim()
        .parse()
        .with_context(|| format!("peso inválido en \"{spec}\""))?;

    if grams <= 0.0 {
        bail!("el peso debe ser mayor que cero en \"{spec}\"");
    }
    Ok((name.trim(), grams))
}

fn find_plan<'a>(store: &'a PlanStore, id: &str) -> Result<&'a SavedMealPlan> {
    let matches: Vec<_> = store
        .plans()
        .iter()
        .filter(|p| p.id.starts_with(id))
        .collect();

    match matches.as_slice() {
        [plan] => Ok(plan),
        [] => bail!("no existe un plan con id \"{id}\""),
        _ => bail!("el id \"{id}\" es ambiguo"),
    }
}

fn print_totals(summary: &NutritionTotals) {
    let n = &summary.nutrients;

    Status::header(&format!(
        "Resumen nutricional ({})",
        format_grams(summary.total_weight)
    ));
    println!("  {:<16} {}", "Energía", format_kcal(n.energy));
    println!("  {:<16} {}", "Proteína", format_grams(n.protein));
    println!("  {:<16} {}", "Grasa total", format_grams(n.total_fat));
    println!("  {:<16} {}", "Carbohidratos", format_grams(n.total_carbohydrates));
    println!("  {:<16} {}", "Fibra", format_grams(n.fiber));
    println!("  {:<16} {}", "Calcio", format_milligrams(n.calcium));
    println!("  {:<16} {}", "Fósforo", format_milligrams(n.phosphorus));
    println!("  {:<16} {}", "Zinc", format_milligrams(n.zinc));
    println!("  {:<16} {}", "Hierro", format_milligrams(n.iron));
    println!("  {:<16} {}", "Sodio", format_milligrams(n.sodium));
    println!("  {:<16} {}", "Potasio", format_milligrams(n.potassium));
    println!();
}
