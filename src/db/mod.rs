pub mod enums;
pub mod models;
pub mod repositories;

use std::time::Duration;

use diesel::PgConnection;
use diesel::r2d2::ConnectionManager as DbConnectionManager;

use crate::config::DatabaseConfig;

pub type DbPool = r2d2::Pool<DbConnectionManager<PgConnection>>;

pub fn create_db_pool(config: &DatabaseConfig) -> Result<DbPool, r2d2::Error> {
    let manager = DbConnectionManager::<PgConnection>::new(&config.url);
    r2d2::Pool::builder()
        .max_size(config.max_connections)
        .min_idle(Some(config.min_connections))
        .connection_timeout(Duration::from_secs(config.connection_timeout))
        .build(manager)
}
