use sea_orm::{ConnectionTrait, DatabaseConnection, EntityName, EntityTrait, Schema};
use tracing::info;

use crate::common::{DatabaseError, DatabaseResult};

/// Creates the entity's table from its SeaORM definition unless it already exists.
///
/// This mirrors an ORM "sync" at startup; it never alters an existing table.
pub async fn create_table_if_not_exists<E>(db: &DatabaseConnection, entity: E) -> DatabaseResult<()>
where
    E: EntityTrait,
{
    let table = entity.table_name().to_string();
    let backend = db.get_database_backend();

    let mut stmt = Schema::new(backend).create_table_from_entity(entity);
    stmt.if_not_exists();

    db.execute_raw(backend.build(&stmt))
        .await
        .map_err(|e| DatabaseError::SchemaSync {
            table: table.clone(),
            details: e.to_string(),
        })?;

    info!(table = %table, "Table schema synchronized");
    Ok(())
}
