/// Application state and router builder
///
/// The storage client is built once at startup and handed to every handler
/// through axum's `State` extractor; there is no global connection.
///
/// # Example
///
/// ```no_run
/// use trackwise_api::{app::AppState, config::Config};
/// use trackwise_shared::db::pool::create_pool;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = create_pool(config.pool_config()).await?;
/// let state = AppState::new(pool, config);
/// let app = trackwise_api::app::build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::{config::Config, error::ApiError};
use axum::{
    http::{header, HeaderValue, Method},
    routing::{delete, get, post, put},
    Router,
};
use sqlx::SqlitePool;
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use trackwise_shared::{
    auth::password::CredentialHasher,
    models::{
        inventory_item::{InventoryRepository, SqliteInventoryRepository},
        task::{SqliteTaskRepository, TaskRepository},
        user::{SqliteUserRepository, UserRepository},
    },
};

/// Shared application state
///
/// Cloned for each request; every field is reference counted.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (health checks only; handlers go through repositories)
    pub db: SqlitePool,

    /// User storage
    pub users: Arc<dyn UserRepository>,

    /// Task storage
    pub tasks: Arc<dyn TaskRepository>,

    /// Inventory storage
    pub inventory: Arc<dyn InventoryRepository>,

    /// Password storage scheme
    pub hasher: Arc<dyn CredentialHasher>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates application state with SQLite repositories over `db`
    pub fn new(db: SqlitePool, config: Config) -> Self {
        Self {
            users: Arc::new(SqliteUserRepository::new(db.clone())),
            tasks: Arc::new(SqliteTaskRepository::new(db.clone())),
            inventory: Arc::new(SqliteInventoryRepository::new(db.clone())),
            hasher: config.password_scheme.hasher(),
            config: Arc::new(config),
            db,
        }
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// ```text
/// /
/// ├── GET /health
/// └── /api/
///     ├── POST   /login
///     ├── GET    /users
///     ├── POST   /users
///     ├── DELETE /users/:id
///     ├── GET    /tasks                 # active only
///     ├── GET    /tasks/archived
///     ├── POST   /tasks
///     ├── PUT    /tasks/:id
///     ├── PUT    /tasks/:id/archive
///     ├── DELETE /tasks/:id
///     ├── GET    /inventory
///     ├── POST   /inventory
///     ├── PUT    /inventory/:id
///     └── DELETE /inventory/:id
/// ```
///
/// No route requires authentication: login only reports whether the
/// credentials match.
///
/// # Middleware Stack
///
/// 1. Logging (tower-http TraceLayer)
/// 2. CORS (tower-http CorsLayer)
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    let api_routes = Router::new()
        .route("/login", post(routes::auth::login))
        .route(
            "/users",
            get(routes::users::list_users).post(routes::users::create_user),
        )
        .route("/users/:id", delete(routes::users::delete_user))
        .route(
            "/tasks",
            get(routes::tasks::list_tasks).post(routes::tasks::create_task),
        )
        .route("/tasks/archived", get(routes::tasks::list_archived_tasks))
        .route(
            "/tasks/:id",
            put(routes::tasks::update_task).delete(routes::tasks::delete_task),
        )
        .route("/tasks/:id/archive", put(routes::tasks::archive_task))
        .route(
            "/inventory",
            get(routes::inventory::list_inventory).post(routes::inventory::create_inventory_item),
        )
        .route(
            "/inventory/:id",
            put(routes::inventory::update_inventory_item)
                .delete(routes::inventory::delete_inventory_item),
        );

    let cors = if state.config.allows_any_origin() {
        CorsLayer::permissive()
    } else {
        let origins: Vec<HeaderValue> = state
            .config
            .api
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::CONTENT_TYPE])
            .max_age(std::time::Duration::from_secs(3600))
    };

    Router::new()
        .route("/health", get(routes::health::health_check))
        .nest("/api", api_routes)
        .fallback(route_not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .with_state(state)
}

async fn route_not_found() -> ApiError {
    ApiError::NotFound("No such route".to_string())
}
