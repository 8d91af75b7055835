/// Integration tests for the SQLite repositories
///
/// Each test gets its own migrated in-memory database.

use sqlx::SqlitePool;
use trackwise_shared::db::migrations::run_migrations;
use trackwise_shared::db::pool::{create_pool, DatabaseConfig};
use trackwise_shared::error::StoreError;
use trackwise_shared::models::inventory_item::{
    CreateInventoryItem, InventoryRepository, SqliteInventoryRepository, UpdateInventoryItem,
};
use trackwise_shared::models::task::{
    CreateTask, SqliteTaskRepository, TaskFilter, TaskRepository, UpdateTask,
};
use trackwise_shared::models::user::{CreateUser, SqliteUserRepository, UserRepository};

async fn migrated_pool() -> SqlitePool {
    let pool = create_pool(DatabaseConfig::in_memory())
        .await
        .expect("Failed to create pool");
    run_migrations(&pool).await.expect("Migrations failed");
    pool
}

fn new_user(name: &str, password: &str) -> CreateUser {
    CreateUser {
        name: name.to_string(),
        password: password.to_string(),
    }
}

async fn count(pool: &SqlitePool, table: &str) -> i64 {
    let (n,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(pool)
        .await
        .unwrap();
    n
}

// Users

#[tokio::test]
async fn test_user_create_and_get() {
    let users = SqliteUserRepository::new(migrated_pool().await);

    let user = users.create(new_user("al", "x")).await.unwrap();
    assert_eq!(user.name, "al");
    assert_eq!(user.password, "x");

    let fetched = users.get(user.id).await.unwrap();
    assert_eq!(fetched, user);
}

#[tokio::test]
async fn test_user_duplicate_name_rejected() {
    let pool = migrated_pool().await;
    let users = SqliteUserRepository::new(pool.clone());

    let first = users.create(new_user("al", "x")).await.unwrap();
    let second = users.create(new_user("al", "y")).await;

    assert!(matches!(
        second,
        Err(StoreError::Duplicate {
            resource: "user",
            field: "name"
        })
    ));
    assert_eq!(count(&pool, "users").await, 1);

    // The existing row is untouched
    assert_eq!(users.get(first.id).await.unwrap().password, "x");
}

#[tokio::test]
async fn test_user_find_by_name_is_exact() {
    let users = SqliteUserRepository::new(migrated_pool().await);
    users.create(new_user("al", "x")).await.unwrap();

    assert!(users.find_by_name("al").await.unwrap().is_some());
    assert!(users.find_by_name("Al").await.unwrap().is_none());
    assert!(users.find_by_name("bob").await.unwrap().is_none());
}

#[tokio::test]
async fn test_user_list_in_id_order() {
    let users = SqliteUserRepository::new(migrated_pool().await);
    users.create(new_user("zed", "1")).await.unwrap();
    users.create(new_user("amy", "2")).await.unwrap();

    let names: Vec<String> = users.list().await.unwrap().into_iter().map(|u| u.name).collect();
    assert_eq!(names, vec!["zed", "amy"]);
}

#[tokio::test]
async fn test_user_delete() {
    let pool = migrated_pool().await;
    let users = SqliteUserRepository::new(pool.clone());
    let user = users.create(new_user("al", "x")).await.unwrap();

    users.delete(user.id).await.unwrap();
    assert!(matches!(users.get(user.id).await, Err(StoreError::NotFound { .. })));

    let again = users.delete(user.id).await;
    assert!(matches!(again, Err(StoreError::NotFound { resource: "user", .. })));
    assert_eq!(count(&pool, "users").await, 0);
}

// Tasks

#[tokio::test]
async fn test_task_create_defaults() {
    let tasks = SqliteTaskRepository::new(migrated_pool().await);

    let task = tasks.create(CreateTask::new("buy milk")).await.unwrap();
    assert_eq!(task.id, 1);
    assert_eq!(task.text, "buy milk");
    assert_eq!(task.status, "todo");
    assert!(!task.archived);
}

#[tokio::test]
async fn test_task_create_with_status() {
    let tasks = SqliteTaskRepository::new(migrated_pool().await);

    let task = tasks
        .create(CreateTask {
            text: "write report".to_string(),
            status: "doing".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(task.status, "doing");
}

#[tokio::test]
async fn test_task_partial_update_keeps_omitted_fields() {
    let tasks = SqliteTaskRepository::new(migrated_pool().await);
    let task = tasks.create(CreateTask::new("buy milk")).await.unwrap();

    let updated = tasks
        .update(
            task.id,
            UpdateTask {
                status: Some("done".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.text, "buy milk");
    assert_eq!(updated.status, "done");

    let updated = tasks
        .update(
            task.id,
            UpdateTask {
                text: Some("buy oat milk".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.text, "buy oat milk");
    assert_eq!(updated.status, "done");

    // Empty update changes nothing
    let unchanged = tasks.update(task.id, UpdateTask::default()).await.unwrap();
    assert_eq!(unchanged, updated);
}

#[tokio::test]
async fn test_task_update_missing_is_not_found() {
    let tasks = SqliteTaskRepository::new(migrated_pool().await);
    let result = tasks.update(42, UpdateTask::default()).await;
    assert!(matches!(result, Err(StoreError::NotFound { resource: "task", id: 42 })));
}

#[tokio::test]
async fn test_task_archive_moves_between_lists() {
    let tasks = SqliteTaskRepository::new(migrated_pool().await);
    let keep = tasks.create(CreateTask::new("keep")).await.unwrap();
    let gone = tasks.create(CreateTask::new("archive me")).await.unwrap();

    let archived = tasks.archive(gone.id).await.unwrap();
    assert!(archived.archived);

    let active = tasks.list(TaskFilter::Active).await.unwrap();
    assert_eq!(active.iter().map(|t| t.id).collect::<Vec<_>>(), vec![keep.id]);

    let archived_list = tasks.list(TaskFilter::Archived).await.unwrap();
    assert_eq!(archived_list.len(), 1);
    assert_eq!(archived_list[0].id, gone.id);
    assert_eq!(archived_list[0].text, "archive me");
}

#[tokio::test]
async fn test_task_archive_is_one_way() {
    let tasks = SqliteTaskRepository::new(migrated_pool().await);
    let task = tasks.create(CreateTask::new("buy milk")).await.unwrap();
    tasks.archive(task.id).await.unwrap();

    // Archiving again and editing do not restore the task
    assert!(tasks.archive(task.id).await.unwrap().archived);
    let edited = tasks
        .update(
            task.id,
            UpdateTask {
                status: Some("todo".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(edited.archived);
    assert!(tasks.list(TaskFilter::Active).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_task_archive_missing_is_not_found() {
    let tasks = SqliteTaskRepository::new(migrated_pool().await);
    assert!(matches!(tasks.archive(9).await, Err(StoreError::NotFound { id: 9, .. })));
}

#[tokio::test]
async fn test_task_delete() {
    let pool = migrated_pool().await;
    let tasks = SqliteTaskRepository::new(pool.clone());
    let task = tasks.create(CreateTask::new("buy milk")).await.unwrap();
    tasks.create(CreateTask::new("other")).await.unwrap();

    tasks.delete(task.id).await.unwrap();
    assert!(matches!(tasks.get(task.id).await, Err(StoreError::NotFound { .. })));
    assert!(matches!(tasks.delete(task.id).await, Err(StoreError::NotFound { .. })));
    assert_eq!(count(&pool, "tasks").await, 1);
}

// Inventory

#[tokio::test]
async fn test_inventory_crud() {
    let pool = migrated_pool().await;
    let inventory = SqliteInventoryRepository::new(pool.clone());

    let item = inventory
        .create(CreateInventoryItem {
            name: "bolts".to_string(),
            quantity: 40,
        })
        .await
        .unwrap();
    assert_eq!(item.name, "bolts");
    assert_eq!(item.quantity, 40);

    let updated = inventory
        .update(
            item.id,
            UpdateInventoryItem {
                quantity: Some(-3),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.name, "bolts");
    assert_eq!(updated.quantity, -3);

    let updated = inventory
        .update(
            item.id,
            UpdateInventoryItem {
                name: Some("nuts".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.name, "nuts");
    assert_eq!(updated.quantity, -3);

    assert_eq!(inventory.list().await.unwrap(), vec![updated.clone()]);
    assert_eq!(inventory.get(item.id).await.unwrap(), updated);

    inventory.delete(item.id).await.unwrap();
    assert!(inventory.list().await.unwrap().is_empty());
    assert_eq!(count(&pool, "inventory_items").await, 0);
}

#[tokio::test]
async fn test_inventory_missing_ids() {
    let inventory = SqliteInventoryRepository::new(migrated_pool().await);

    assert!(matches!(inventory.get(1).await, Err(StoreError::NotFound { .. })));
    assert!(matches!(
        inventory.update(1, UpdateInventoryItem::default()).await,
        Err(StoreError::NotFound { resource: "inventory item", .. })
    ));
    assert!(matches!(
        inventory.delete(1).await,
        Err(StoreError::NotFound {
            resource: "inventory item",
            id: 1
        })
    ));
}
