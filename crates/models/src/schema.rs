//! Create-if-absent schema, derived from the entity definitions.
use sea_orm::{ConnectionTrait, EntityName, EntityTrait, Schema};
use tracing::debug;

use crate::{errors::ModelError, pizza, pizza_topping, sauce, topping};

async fn create_table<C, E>(conn: &C, schema: &Schema, entity: E) -> Result<(), ModelError>
where
    C: ConnectionTrait,
    E: EntityTrait,
{
    let backend = conn.get_database_backend();
    let mut stmt = schema.create_table_from_entity(entity);
    stmt.if_not_exists();
    conn.execute(backend.build(&stmt)).await?;
    debug!(table = entity.table_name(), "table ensured");
    Ok(())
}

/// Create every table that does not exist yet. Existing tables are left untouched.
pub async fn create_tables<C: ConnectionTrait>(conn: &C) -> Result<(), ModelError> {
    let schema = Schema::new(conn.get_database_backend());
    // referenced tables first
    create_table(conn, &schema, sauce::Entity).await?;
    create_table(conn, &schema, topping::Entity).await?;
    create_table(conn, &schema, pizza::Entity).await?;
    create_table(conn, &schema, pizza_topping::Entity).await?;
    Ok(())
}
