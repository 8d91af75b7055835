/// User model and repository
///
/// # Schema
///
/// ```sql
/// CREATE TABLE users (
///     id INTEGER PRIMARY KEY,
///     name VARCHAR(80) NOT NULL UNIQUE,
///     password VARCHAR(120) NOT NULL
/// );
/// ```
///
/// The `password` column holds whatever the configured
/// [`CredentialHasher`](crate::auth::password::CredentialHasher) produced.
/// Under the default plaintext scheme that is the password itself.
///
/// # Example
///
/// ```no_run
/// use trackwise_shared::models::user::{CreateUser, SqliteUserRepository, UserRepository};
/// use sqlx::SqlitePool;
///
/// # async fn example(pool: SqlitePool) -> Result<(), Box<dyn std::error::Error>> {
/// let users = SqliteUserRepository::new(pool);
///
/// let user = users
///     .create(CreateUser {
///         name: "al".to_string(),
///         password: "x".to_string(),
///     })
///     .await?;
///
/// let found = users.find_by_name("al").await?;
/// assert_eq!(found.map(|u| u.id), Some(user.id));
/// # Ok(())
/// # }
/// ```

use crate::error::{StoreError, StoreResult};
use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::debug;

const RESOURCE: &str = "user";

/// User account
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct User {
    /// Generated surrogate key
    pub id: i64,

    /// Login name, unique across all users
    pub name: String,

    /// Stored password value (see module docs)
    pub password: String,
}

/// Input for creating a new user
#[derive(Debug, Clone)]
pub struct CreateUser {
    /// Login name
    pub name: String,

    /// Value to store in the password column, already passed through the hasher
    pub password: String,
}

/// Storage operations for users
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts a user
    ///
    /// Fails with [`StoreError::Duplicate`] when the name is taken.
    async fn create(&self, data: CreateUser) -> StoreResult<User>;

    /// Fetches a user by id
    async fn get(&self, id: i64) -> StoreResult<User>;

    /// Looks up a user by exact name
    async fn find_by_name(&self, name: &str) -> StoreResult<Option<User>>;

    /// Lists every user in id order
    async fn list(&self) -> StoreResult<Vec<User>>;

    /// Deletes a user by id
    async fn delete(&self, id: i64) -> StoreResult<()>;
}

/// [`UserRepository`] backed by a SQLite pool
#[derive(Debug, Clone)]
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    /// Creates a repository over `pool`
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn create(&self, data: CreateUser) -> StoreResult<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, password)
            VALUES (?, ?)
            RETURNING id, name, password
            "#,
        )
        .bind(data.name)
        .bind(data.password)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StoreError::from_write(e, RESOURCE, "name"))?;

        debug!(user_id = user.id, "Inserted user");
        Ok(user)
    }

    async fn get(&self, id: i64) -> StoreResult<User> {
        sqlx::query_as::<_, User>("SELECT id, name, password FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound {
                resource: RESOURCE,
                id,
            })
    }

    async fn find_by_name(&self, name: &str) -> StoreResult<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT id, name, password FROM users WHERE name = ?")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    async fn list(&self) -> StoreResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>("SELECT id, name, password FROM users ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(users)
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound {
                resource: RESOURCE,
                id,
            });
        }

        debug!(user_id = id, "Deleted user");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_user_struct() {
        let create_user = CreateUser {
            name: "al".to_string(),
            password: "x".to_string(),
        };

        assert_eq!(create_user.name, "al");
        assert_eq!(create_user.password, "x");
    }
}
