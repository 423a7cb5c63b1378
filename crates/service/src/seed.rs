//! Startup initialization: schema plus the starter menu.
use std::collections::HashMap;

use sea_orm::PaginatorTrait;
use tracing::info;

use models::{pizza, pizza_topping, sauce, topping, PizzaContext};

use crate::errors::ServiceError;

const TOPPINGS: [(&str, f64); 5] = [
    ("Pepperoni", 130.0),
    ("Sausage", 100.0),
    ("Ham", 70.0),
    ("Chicken", 50.0),
    ("Pineapple", 75.0),
];

const SAUCES: [(&str, bool); 2] = [("Tomato", true), ("Alfredo", false)];

const PIZZAS: [(&str, &str, &[&str]); 3] = [
    ("Meat Lovers", "Tomato", &["Pepperoni", "Sausage", "Ham", "Chicken"]),
    ("Hawaiian", "Tomato", &["Pineapple", "Ham"]),
    ("Alfredo Chicken", "Alfredo", &["Chicken"]),
];

/// Ensure the schema exists and seed the menu when the pizza table is empty.
///
/// Safe to call on every start; returns `true` only when rows were written.
pub async fn initialize(ctx: &PizzaContext) -> Result<bool, ServiceError> {
    ctx.ensure_created().await?;

    let (_writer, txn) = ctx.begin_write().await?;
    let existing = ctx.pizzas().count(&txn).await?;
    if existing > 0 {
        info!(pizzas = existing, "seed_skipped");
        return Ok(false);
    }

    let mut toppings = HashMap::new();
    for (name, calories) in TOPPINGS {
        let t = topping::insert(&txn, &topping::Model { id: 0, name: name.to_string(), calories }).await?;
        toppings.insert(name, t.id);
    }

    let mut sauces = HashMap::new();
    for (name, is_vegan) in SAUCES {
        let s = sauce::insert(&txn, &sauce::Model { id: 0, name: name.to_string(), is_vegan }).await?;
        sauces.insert(name, s.id);
    }

    for (name, sauce_name, topping_names) in PIZZAS {
        let p = pizza::insert(&txn, 0, name, sauces.get(sauce_name).copied()).await?;
        for t in topping_names {
            if let Some(&topping_id) = toppings.get(t) {
                pizza_topping::link(&txn, p.id, topping_id).await?;
            }
        }
    }

    txn.commit().await?;
    info!(pizzas = PIZZAS.len(), toppings = TOPPINGS.len(), sauces = SAUCES.len(), "seed_inserted");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pizza::service::PizzaService;
    use configs::DatabaseConfig;

    #[tokio::test]
    async fn seeds_empty_database_once() -> Result<(), anyhow::Error> {
        let ctx = PizzaContext::connect(&DatabaseConfig::in_memory()).await?;

        assert!(initialize(&ctx).await?);
        assert!(!initialize(&ctx).await?);

        let db = ctx.connection();
        assert_eq!(ctx.pizzas().count(db).await?, 3);
        assert_eq!(ctx.toppings().count(db).await?, 5);
        assert_eq!(ctx.sauces().count(db).await?, 2);
        Ok(())
    }

    #[tokio::test]
    async fn seeded_pizzas_carry_relations() -> Result<(), anyhow::Error> {
        let ctx = PizzaContext::connect(&DatabaseConfig::in_memory()).await?;
        initialize(&ctx).await?;
        let svc = PizzaService::from_context(ctx);

        let rows = svc.list().await?;
        let meat = rows.iter().find(|p| p.name == "Meat Lovers").expect("meat lovers");
        let full = svc.get(meat.id).await?.expect("seeded pizza");

        let names: Vec<&str> = full.toppings.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Pepperoni", "Sausage", "Ham", "Chicken"]);
        assert_eq!(full.sauce.map(|s| (s.name, s.is_vegan)), Some(("Tomato".to_string(), true)));
        Ok(())
    }

    #[tokio::test]
    async fn does_not_seed_over_existing_pizza() -> Result<(), anyhow::Error> {
        let ctx = PizzaContext::connect(&DatabaseConfig::in_memory()).await?;
        ctx.ensure_created().await?;
        pizza::insert(ctx.connection(), 0, "House Special", None).await?;

        assert!(!initialize(&ctx).await?);
        assert_eq!(ctx.toppings().count(ctx.connection()).await?, 0);
        Ok(())
    }
}
