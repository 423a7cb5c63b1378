use anyhow::Result;
use sea_orm::EntityTrait;

use crate::pizza;

use super::setup_test_ctx;

#[tokio::test]
async fn test_transaction_commit() -> Result<()> {
    let ctx = setup_test_ctx().await?;

    let txn = ctx.begin().await?;
    let created = pizza::insert(&txn, 0, "Committed", None).await?;
    txn.commit().await?;

    let found = pizza::Entity::find_by_id(created.id).one(ctx.connection()).await?;
    assert_eq!(found.map(|p| p.name), Some("Committed".to_string()));
    Ok(())
}

#[tokio::test]
async fn test_transaction_rollback() -> Result<()> {
    let ctx = setup_test_ctx().await?;

    let txn = ctx.begin().await?;
    let created = pizza::insert(&txn, 0, "Rolled back", None).await?;
    txn.rollback().await?;

    let found = pizza::Entity::find_by_id(created.id).one(ctx.connection()).await?;
    assert!(found.is_none());
    Ok(())
}

#[tokio::test]
async fn test_dropped_transaction_rolls_back() -> Result<()> {
    let ctx = setup_test_ctx().await?;

    {
        let txn = ctx.begin().await?;
        pizza::insert(&txn, 0, "Dropped", None).await?;
    }

    let all = ctx.pizzas().all(ctx.connection()).await?;
    assert!(all.is_empty());
    Ok(())
}
