/// Application state and router builder
///
/// # Example
///
/// ```no_run
/// use rollcall_api::{app::{AppState, build_router}, config::Config};
/// use sqlx::PgPool;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = PgPool::connect(&config.database.url).await?;
/// let state = AppState::new(pool, config);
/// let app = build_router(state);
///
/// let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
/// axum::serve(listener, app).await?;
/// # Ok(())
/// # }
/// ```

use crate::config::Config;
use axum::{
    http::{header, HeaderValue, Method},
    routing::{delete, get, post},
    Router,
};
use rollcall_shared::services::attendance::AttendanceService;
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// Cloned per request via Axum's `State` extractor; the config is behind
/// an Arc so cloning stays cheap.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,

    /// Application configuration
    pub config: Arc<Config>,

    /// Attendance business logic
    pub attendance: AttendanceService,
}

impl AppState {
    /// Creates new application state
    pub fn new(db: PgPool, config: Config) -> Self {
        let attendance = AttendanceService::new(db.clone());
        Self {
            db,
            config: Arc::new(config),
            attendance,
        }
    }

    /// Gets the JWT secret for token operations
    pub fn jwt_secret(&self) -> &str {
        &self.config.jwt.secret
    }
}

/// Builds the complete Axum router
///
/// ```text
/// /
/// ├── /health                                  # Health check
/// ├── /auth/
/// │   ├── POST   /signup
/// │   ├── POST   /login
/// │   └── DELETE /delete/:id                   # Bearer token required
/// └── /api/attendance/
///     ├── POST /mark
///     ├── GET  /subject/:subject_id?date=ISO
///     ├── GET  /subject/:subject_id/dates
///     ├── GET  /status/:subject_id
///     └── GET  /student/:student_id
/// ```
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    let health_routes = Router::new().route("/health", get(routes::health::health_check));

    let auth_routes = Router::new()
        .route("/signup", post(routes::auth::signup))
        .route("/login", post(routes::auth::login))
        .route("/delete/:id", delete(routes::auth::delete_user));

    let attendance_routes = Router::new()
        .route("/mark", post(routes::attendance::mark_attendance))
        .route(
            "/subject/:subject_id",
            get(routes::attendance::attendance_by_subject_and_date),
        )
        .route(
            "/subject/:subject_id/dates",
            get(routes::attendance::conducted_dates),
        )
        .route(
            "/status/:subject_id",
            get(routes::attendance::attendance_status),
        )
        .route(
            "/student/:student_id",
            get(routes::attendance::attendance_by_student),
        );

    let cors = if state.config.api.cors_origins.contains(&"*".to_string()) {
        // Development mode
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
            .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
            .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
            .allow_credentials(true)
            .max_age(std::time::Duration::from_secs(3600))
    };

    Router::new()
        .merge(health_routes)
        .nest("/auth", auth_routes)
        .nest("/api/attendance", attendance_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .with_state(state)
}
