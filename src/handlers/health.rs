//! Health check endpoint.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{handlers::response::JsonUtf8, AppState};

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub database: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub students_in_db: Option<i64>,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl HealthStatus {
    fn new(database: &str, students_in_db: Option<i64>) -> Self {
        Self {
            // "status" reports the API process itself; the database gets its
            // own field, matching what the recognition client already parses.
            status: "OK".to_string(),
            database: database.to_string(),
            students_in_db,
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: chrono::Utc::now(),
        }
    }
}

/// Liveness probe that also verifies database reachability with a row count.
pub async fn health_check(State(state): State<AppState>) -> Response {
    match state.repository.count_students().await {
        Ok(count) => JsonUtf8(HealthStatus::new("Connected", Some(count))).into_response(),
        Err(e) => {
            warn!(error = %e, "health check could not reach the database");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                JsonUtf8(HealthStatus::new("Error", None)),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::database::repository::MockStudentRepository;
    use crate::router::build_router;
    use crate::{AppState, Config};

    fn app(repository: MockStudentRepository) -> axum::Router {
        let state = AppState {
            repository: Arc::new(repository),
            config: Config {
                environment: "test".to_string(),
                port: 0,
                database_url: "mysql://unused".to_string(),
                cors_allowed_origin: "*".to_string(),
                max_connections: 1,
                request_timeout: 5,
                log_level: "info".to_string(),
            },
        };
        build_router(state).expect("router should build")
    }

    async fn get_health(app: axum::Router) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn reports_connected_with_student_count() {
        let mut repository = MockStudentRepository::new();
        repository.expect_count_students().returning(|| Ok(5));

        let (status, body) = get_health(app(repository)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "OK");
        assert_eq!(body["database"], "Connected");
        assert_eq!(body["students_in_db"], 5);
    }

    #[tokio::test]
    async fn reports_error_when_database_is_unreachable() {
        let mut repository = MockStudentRepository::new();
        repository
            .expect_count_students()
            .returning(|| Err(sqlx::Error::PoolTimedOut));

        let (status, body) = get_health(app(repository)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["status"], "OK");
        assert_eq!(body["database"], "Error");
        assert!(body.get("students_in_db").is_none());
    }
}
