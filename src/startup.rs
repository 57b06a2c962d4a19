use sea_orm::DatabaseConnection;
use tracing_subscriber::EnvFilter;

use crate::{
    config::Config,
    data::server::ServerRepository,
    domain::server::{CreateServerParam, ServerStatus},
    error::AppError,
};

const DEFAULT_LOG_FILTER: &str = "info,sqlx=warn";

/// Demo servers inserted into an empty registry, as `(name, address)`.
const DEMO_SERVERS: [(&str, &str); 3] = [
    ("Web Server 1", "192.168.1.10"),
    ("Database Server", "192.168.1.20"),
    ("Application Server", "192.168.1.30"),
];

/// Installs the global tracing subscriber.
///
/// Uses the `RUST_LOG` filter when set, `info,sqlx=warn` otherwise.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// runs all pending SeaORM migrations so the `servers` table exists before the first
/// request is served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Inserts the demo servers when the registry is empty.
///
/// Runs once during startup, outside of any request handling. Safe to call repeatedly:
/// when at least one server exists nothing is inserted.
///
/// # Arguments
/// - `db` - Database connection with migrations applied
///
/// # Returns
/// - `Ok(usize)` - Number of servers inserted (0 or 3)
/// - `Err(AppError::DbErr)` - Database error during count or insert
pub async fn seed_servers(db: &DatabaseConnection) -> Result<usize, AppError> {
    let repo = ServerRepository::new(db);

    if repo.count().await? > 0 {
        tracing::debug!("Server table already populated, skipping demo data");
        return Ok(0);
    }

    for (name, address) in DEMO_SERVERS {
        repo.create(
            CreateServerParam {
                name: name.to_string(),
                address: address.to_string(),
            },
            ServerStatus::Stopped,
        )
        .await?;
    }

    tracing::info!("Seeded {} demo servers", DEMO_SERVERS.len());

    Ok(DEMO_SERVERS.len())
}
