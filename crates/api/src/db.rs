//! Database connection.

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::config::DatabaseConfig;

/// Build the connection pool and open one connection eagerly.
///
/// An unreachable or misconfigured database surfaces here, before the HTTP
/// listener is bound. The attempt is bounded by `connect_timeout`; there is no
/// retry beyond what the pool does within that window.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.connect_timeout)
        .connect(&config.url)
        .await?;

    tracing::info!(max_connections = config.max_connections, "database connected");
    Ok(pool)
}

/// Pool that never connects; for routers exercised without a database.
pub fn lazy(url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new().max_connections(1).connect_lazy(url)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn config(url: &str) -> DatabaseConfig {
        DatabaseConfig {
            url: url.to_string(),
            max_connections: 1,
            connect_timeout: Duration::from_secs(1),
        }
    }

    #[tokio::test]
    async fn malformed_url_fails_without_connecting() {
        let err = connect(&config("not a database url")).await.unwrap_err();
        assert!(matches!(err, sqlx::Error::Configuration(_)), "{err:?}");
    }

    #[tokio::test]
    async fn unreachable_database_fails_within_timeout() {
        let started = std::time::Instant::now();
        let res = connect(&config("postgres://mymedicine@127.0.0.1:1/mymedicine")).await;

        assert!(res.is_err());
        assert!(started.elapsed() < Duration::from_secs(10));
    }

    #[tokio::test]
    async fn lazy_pool_does_not_connect() {
        let pool = lazy("postgres://mymedicine@127.0.0.1:1/mymedicine").unwrap();
        assert_eq!(pool.size(), 0);
    }
}
