/// Common test utilities for integration tests
///
/// Provides a `TestContext` that wires a real database, a seeded
/// subject/teacher/student trio and a valid bearer token against the full
/// router. Tests that need it are `#[ignore]`d so the suite passes without
/// infrastructure; run them with `cargo test -- --ignored` and a
/// `DATABASE_URL`/`JWT_SECRET` in the environment.

use chrono::Duration;
use rollcall_api::app::{build_router, AppState};
use rollcall_api::config::Config;
use rollcall_shared::auth::jwt::{create_token, Claims};
use rollcall_shared::auth::password;
use rollcall_shared::models::subject::Subject;
use rollcall_shared::models::user::{CreateUser, User};
use sqlx::PgPool;
use std::time::{SystemTime, UNIX_EPOCH};

/// Test context containing all necessary resources
pub struct TestContext {
    pub db: PgPool,
    pub app: axum::Router,
    pub config: Config,
    pub subject: Subject,
    pub teacher: User,
    pub student: User,
    pub jwt_token: String,
}

/// Returns a suffix unique enough to keep test rows from colliding
pub fn unique_suffix() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos()
}

impl TestContext {
    /// Creates a new test context against the configured database
    pub async fn new() -> anyhow::Result<Self> {
        let config = Config::from_env()?;

        let db = PgPool::connect(&config.database.url).await?;

        // Path relative to this crate's Cargo.toml
        sqlx::migrate!("../migrations").run(&db).await?;

        let suffix = unique_suffix();

        let subject = Subject::create(&db, &format!("Test Subject {}", suffix)).await?;

        let teacher = User::create(
            &db,
            CreateUser {
                full_name: "Test Teacher".to_string(),
                email: format!("teacher-{}@example.com", suffix),
                password_hash: password::hash_password("T3acher!pass")?,
                role: "ROLE_TEACHER".to_string(),
            },
        )
        .await?;

        let student = User::create(
            &db,
            CreateUser {
                full_name: "Test Student".to_string(),
                email: format!("student-{}@example.com", suffix),
                password_hash: password::hash_password("Stud3nt!pass")?,
                role: "ROLE_STUDENT".to_string(),
            },
        )
        .await?;

        let claims = Claims::new(
            teacher.id,
            &teacher.role,
            &teacher.full_name,
            Duration::hours(1),
        );
        let jwt_token = create_token(&claims, &config.jwt.secret)?;

        let state = AppState::new(db.clone(), config.clone());
        let app = build_router(state);

        Ok(TestContext {
            db,
            app,
            config,
            subject,
            teacher,
            student,
            jwt_token,
        })
    }

    /// Returns the authorization header value
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.jwt_token)
    }

    /// Cleans up test data (attendance rows cascade)
    pub async fn cleanup(&self) -> anyhow::Result<()> {
        sqlx::query("DELETE FROM subjects WHERE id = $1")
            .bind(self.subject.id)
            .execute(&self.db)
            .await?;
        User::delete(&self.db, self.teacher.id).await?;
        User::delete(&self.db, self.student.id).await?;
        Ok(())
    }
}

/// Builds a router over a lazy pool that never connects
///
/// Good enough for exercising paths that reject the request before
/// touching the database (e.g. token checks).
pub fn offline_app() -> axum::Router {
    use rollcall_api::config::{ApiConfig, DatabaseConfig, JwtConfig, SeedConfig};

    let config = Config {
        api: ApiConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            cors_origins: vec!["*".to_string()],
        },
        database: DatabaseConfig {
            url: "postgresql://localhost/unreachable".to_string(),
            max_connections: 1,
        },
        jwt: JwtConfig {
            secret: "offline-test-secret-key-32-bytes-long!!".to_string(),
            expiration_secs: 3600,
        },
        seed: SeedConfig {
            principal_email: "principal@example.com".to_string(),
            principal_password: "Ch@ngeMe123".to_string(),
        },
    };

    let db = sqlx::postgres::PgPoolOptions::new()
        .connect_lazy(&config.database.url)
        .expect("lazy pool");

    build_router(AppState::new(db, config))
}
