//! Per-test Postgres databases inside one shared container.

use std::{
    env,
    sync::atomic::{AtomicU64, Ordering},
    time::{SystemTime, UNIX_EPOCH},
};

use once_cell::sync::Lazy;
use sqlx::{Connection, PgConnection, PgPool, query};
use testcontainers::{ContainerAsync, ImageExt, runners::AsyncRunner};
use testcontainers_modules::postgres::Postgres as PostgresImage;
use tokio::sync::{OnceCell, mpsc};

const DB_USER: &str = "pharmacy_test";
const DB_PASSWORD: &str = "pharmacy_test_password";
const DB_NAME_PREFIX: &str = "pharmacy_test_";

static POSTGRES_CONTAINER: Lazy<OnceCell<ContainerAsync<PostgresImage>>> = Lazy::new(OnceCell::new);

/// Databases queued for dropping once their `TestDb` goes away.
static DROP_QUEUE: Lazy<OnceCell<mpsc::UnboundedSender<String>>> = Lazy::new(OnceCell::new);

static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Only names this module generates may be interpolated into DDL.
fn is_test_database_name(name: &str) -> bool {
    name.len() <= 63
        && name
            .strip_prefix(DB_NAME_PREFIX)
            .is_some_and(|rest| !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit() || c == '_'))
}

async fn start_container() -> ContainerAsync<PostgresImage> {
    PostgresImage::default()
        .with_user(DB_USER)
        .with_password(DB_PASSWORD)
        .with_db_name("pharmacy_test")
        .with_env_var("POSTGRES_INITDB_ARGS", "--auth-host=trust")
        .start()
        .await
        .expect("Failed to start PostgreSQL container")
}

async fn server_url(database: &str) -> String {
    let container = POSTGRES_CONTAINER.get_or_init(start_container).await;

    let port = container
        .get_host_port_ipv4(5432)
        .await
        .expect("Failed to get container port");

    let host = env::var("TESTCONTAINERS_HOST_OVERRIDE").unwrap_or_else(|_| "localhost".to_string());

    format!("postgresql://{DB_USER}:{DB_PASSWORD}@{host}:{port}/{database}")
}

async fn start_drop_worker() -> mpsc::UnboundedSender<String> {
    let (sender, mut receiver) = mpsc::unbounded_channel::<String>();

    tokio::spawn(async move {
        while let Some(name) = receiver.recv().await {
            if let Err(error) = drop_database(&name).await {
                eprintln!("Failed to drop test database '{name}': {error}");
            }
        }
    });

    sender
}

async fn drop_database(name: &str) -> Result<(), sqlx::Error> {
    if !is_test_database_name(name) || POSTGRES_CONTAINER.get().is_none() {
        return Ok(());
    }

    let mut conn = PgConnection::connect(&server_url("postgres").await).await?;

    query(&format!("DROP DATABASE IF EXISTS \"{name}\""))
        .execute(&mut conn)
        .await?;

    conn.close().await
}

/// A freshly migrated database owned by one test.
///
/// Services commit normally; isolation comes from every test having its own database,
/// which is dropped in the background when the `TestDb` is.
#[derive(Debug)]
pub struct TestDb {
    pool: PgPool,
    name: String,
}

impl TestDb {
    pub async fn new() -> Self {
        DROP_QUEUE.get_or_init(start_drop_worker).await;

        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("System clock is before the Unix epoch")
            .as_nanos();

        let name = format!(
            "{DB_NAME_PREFIX}{nanos}_{}",
            DB_COUNTER.fetch_add(1, Ordering::Relaxed)
        );

        assert!(is_test_database_name(&name), "generated bad database name {name}");

        let mut conn = PgConnection::connect(&server_url("postgres").await)
            .await
            .expect("Failed to connect to postgres database");

        query(&format!("CREATE DATABASE \"{name}\""))
            .execute(&mut conn)
            .await
            .expect("Failed to create test database");

        conn.close()
            .await
            .expect("Failed to close admin connection");

        let pool = PgPool::connect(&server_url(&name).await)
            .await
            .expect("Failed to create pool for test database");

        crate::database::migrate(&pool)
            .await
            .expect("Failed to run migrations on test database");

        Self { pool, name }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl Drop for TestDb {
    fn drop(&mut self) {
        if let Some(sender) = DROP_QUEUE.get() {
            let _ = sender.send(self.name.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn only_generated_names_are_accepted() {
        assert!(is_test_database_name("pharmacy_test_1700000000_3"));
        assert!(!is_test_database_name("pharmacy_test_"));
        assert!(!is_test_database_name("postgres"));
        assert!(!is_test_database_name("pharmacy_test_1\"; DROP TABLE users"));
        assert!(!is_test_database_name(&format!("{DB_NAME_PREFIX}{}", "1".repeat(60))));
    }

    #[tokio::test]
    async fn fresh_database_has_schema() -> TestResult {
        let test_db = TestDb::new().await;

        let orders: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
            .fetch_one(test_db.pool())
            .await?;

        assert_eq!(orders, 0);

        Ok(())
    }
}
