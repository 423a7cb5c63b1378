use models::PizzaContext;
use service::{PizzaService, SeaOrmPizzaRepository};

/// Shared handler state. Cloning is cheap: the service only holds an `Arc`
/// around the repository, and the context wraps a pool handle.
#[derive(Clone)]
pub struct ServerState {
    pub pizzas: PizzaService<SeaOrmPizzaRepository>,
}

impl ServerState {
    pub fn new(ctx: PizzaContext) -> Self {
        Self { pizzas: PizzaService::from_context(ctx) }
    }
}
