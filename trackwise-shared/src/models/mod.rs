/// Records and repositories for Trackwise
///
/// Each entity module defines its record type, the create/update inputs, a
/// repository trait and the SQLite implementation of that trait. The tables
/// are independent: no foreign keys, no cross-entity operations.
///
/// # Models
///
/// - `user`: Accounts checked by the login endpoint
/// - `task`: To-do entries with a one-way archive flag
/// - `inventory_item`: Named stock counts
///
/// # Example
///
/// ```no_run
/// use trackwise_shared::db::pool::{create_pool, DatabaseConfig};
/// use trackwise_shared::models::inventory_item::{
///     CreateInventoryItem, InventoryRepository, SqliteInventoryRepository,
/// };
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::in_memory()).await?;
/// let inventory = SqliteInventoryRepository::new(pool);
///
/// let item = inventory
///     .create(CreateInventoryItem {
///         name: "bolts".to_string(),
///         quantity: 40,
///     })
///     .await?;
/// # Ok(())
/// # }
/// ```

pub mod inventory_item;
pub mod task;
pub mod user;
