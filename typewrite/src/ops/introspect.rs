//! Introspect operation - walks a project's databases into a schema snapshot.

use eyre::{Result, WrapErr};
use tracing::{debug, info};
use typewrite_client::DatabasesApi;
use typewrite_schema::{CollectionSchema, DatabaseSchema, SchemaSnapshot};

/// List every database, then every collection of each database, then every
/// attribute of each collection, one request at a time.
///
/// The first failing listing aborts the walk.
pub fn introspect(api: &impl DatabasesApi) -> Result<SchemaSnapshot> {
    info!("listing databases");
    let databases = api.list_databases().wrap_err("failed to list databases")?;
    debug!("{} databases", databases.databases.len());

    let mut snapshot = SchemaSnapshot::new();
    for database in databases.databases {
        info!("listing collections for database {}", database.id);
        let collections = api.list_collections(&database.id).wrap_err_with(|| {
            format!("failed to list collections of database '{}'", database.id)
        })?;
        debug!("{} collections in {}", collections.collections.len(), database.id);

        let mut schema = DatabaseSchema::new(&database.id, &database.name);
        for collection in collections.collections {
            info!("listing attributes for collection {}", collection.id);
            let attributes = api
                .list_attributes(&database.id, &collection.id)
                .wrap_err_with(|| {
                    format!(
                        "failed to list attributes of collection '{}.{}'",
                        database.id, collection.id
                    )
                })?;
            debug!(
                "{} attributes in {}.{}",
                attributes.attributes.len(),
                database.id,
                collection.id
            );

            schema = schema.collection(
                attributes.attributes.into_iter().fold(
                    CollectionSchema::new(&collection.id, &collection.name),
                    CollectionSchema::attribute,
                ),
            );
        }
        snapshot = snapshot.database(schema);
    }

    Ok(snapshot)
}
