/// Database layer for Trackwise
///
/// # Modules
///
/// - `pool`: SQLite connection pool management with health checks
/// - `migrations`: Schema migrations, applied only by the admin CLI
///
/// # Example
///
/// ```no_run
/// use trackwise_shared::db::pool::{create_pool, DatabaseConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = DatabaseConfig {
///         url: "sqlite://trackwise.db".to_string(),
///         ..Default::default()
///     };
///
///     let pool = create_pool(config).await?;
///     Ok(())
/// }
/// ```

pub mod migrations;
pub mod pool;
