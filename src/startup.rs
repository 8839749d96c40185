use crate::error::AppError;

/// Connects to the SQLite database and runs pending migrations.
///
/// Establishes a connection pool using the configured connection string,
/// then runs all pending SeaORM migrations so the schema is up to date
/// before the bot starts serving events.
///
/// # Arguments
/// - `database_url` - SQLite connection string from configuration
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect or run migrations
pub async fn connect_to_database(database_url: &str) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}
