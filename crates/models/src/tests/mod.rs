use configs::DatabaseConfig;

use crate::context::PizzaContext;



/// Transaction commit and rollback tests
pub mod transaction_tests;

/// Fresh in-memory database with the schema in place.
pub(crate) async fn setup_test_ctx() -> anyhow::Result<PizzaContext> {
    let ctx = PizzaContext::connect(&DatabaseConfig::in_memory()).await?;
    ctx.ensure_created().await?;
    Ok(ctx)
}
