use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Extension, Json,
};

use crate::{
    error::AppResult,
    middleware::request_id::RequestId,
    models::RecommendationResponse,
    routes::AppState,
    services::recommendations::recommend_courses,
};

/// Handler for the course recommendation endpoint
///
/// Fetches the current employee course data, runs the full pipeline for the
/// query user, and answers with either the recommended courses or an
/// explicit message when there is nothing to recommend at all (a lone user
/// whose neighbor set is empty).
pub async fn recommend(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Path(user_id): Path<String>,
) -> AppResult<Json<RecommendationResponse>> {
    tracing::info!(
        request_id = %request_id,
        user_id = %user_id,
        "Processing recommendation request"
    );

    let employees = state.provider.fetch_employees().await?;

    let items = recommend_courses(
        &employees,
        &user_id,
        state.neighbor_count,
        state.recommendation_limit,
    )?;

    if items.is_empty() {
        tracing::warn!(
            request_id = %request_id,
            user_id = %user_id,
            "No peer courses available to recommend"
        );
        return Ok(Json(RecommendationResponse::Message {
            message: "No courses to recommend yet".to_string(),
        }));
    }

    Ok(Json(RecommendationResponse::Items(items)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::error::AppError;
    use crate::models::{CourseProgressRecord, EmployeeRecord};
    use crate::services::providers::MockEmployeeDataProvider;

    fn test_config() -> Config {
        Config {
            employee_api_url: "http://test.local".to_string(),
            host: "127.0.0.1".to_string(),
            port: 0,
            neighbor_count: 5,
            recommendation_limit: 3,
        }
    }

    fn course(id: &str, completion: f64, quiz: f64) -> CourseProgressRecord {
        CourseProgressRecord {
            course_id: id.to_string(),
            course_title: format!("Title {}", id),
            course_tag: "general".to_string(),
            modules_completed: 1,
            total_modules: 2,
            completion_percentage: Some(completion),
            quiz_score: Some(quiz),
        }
    }

    fn employee(id: &str, courses: Vec<CourseProgressRecord>) -> EmployeeRecord {
        EmployeeRecord {
            employee_id: id.to_string(),
            name: id.to_string(),
            designation: String::new(),
            performance_score: 0.0,
            courses,
        }
    }

    #[tokio::test]
    async fn test_recommend_returns_peer_courses() {
        let mut provider = MockEmployeeDataProvider::new();
        provider.expect_fetch_employees().returning(|| {
            Ok(vec![
                employee("x", vec![course("a", 80.0, 0.9)]),
                employee("y", vec![course("a", 80.0, 0.9), course("b", 60.0, 0.7)]),
            ])
        });

        let state = Arc::new(AppState::new(Arc::new(provider), &test_config()));
        let response = recommend(
            State(state),
            Extension(RequestId::generate()),
            Path("x".to_string()),
        )
        .await
        .unwrap();

        match response.0 {
            RecommendationResponse::Items(items) => {
                assert_eq!(items.len(), 1);
                assert_eq!(items[0].course_id, "b");
            }
            RecommendationResponse::Message { .. } => panic!("expected items"),
        }
    }

    #[tokio::test]
    async fn test_recommend_propagates_upstream_failure() {
        let mut provider = MockEmployeeDataProvider::new();
        provider
            .expect_fetch_employees()
            .returning(|| Err(AppError::ExternalApi("upstream down".to_string())));

        let state = Arc::new(AppState::new(Arc::new(provider), &test_config()));
        let result = recommend(
            State(state),
            Extension(RequestId::generate()),
            Path("x".to_string()),
        )
        .await;

        assert!(matches!(result, Err(AppError::ExternalApi(_))));
    }
}
