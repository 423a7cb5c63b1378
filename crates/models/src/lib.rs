//! Entity model and persistence context for the pizza catalogue.
pub mod errors;
pub mod db;
pub mod schema;
pub mod context;
pub mod pizza;
pub mod topping;
pub mod sauce;
pub mod pizza_topping;

pub use context::PizzaContext;

#[cfg(test)]
mod tests;
