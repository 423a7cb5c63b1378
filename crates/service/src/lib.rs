//! Service layer providing the pizza operations on top of models.
//! - Every operation runs in its own transaction.
//! - Reuses entity definitions and the persistence context from `models`.

pub mod errors;
pub mod pizza;
pub mod seed;
#[cfg(test)]
pub mod test_support;

pub use pizza::repository::{PizzaRepository, SeaOrmPizzaRepository};
pub use pizza::service::PizzaService;
