use crate::response::ApiResponse;
use crate::routes::common::service_error;
use axum::{Extension, Json, extract::State, http::StatusCode, response::IntoResponse};
use db::models::user::Model as User;
use marker::Recommendation;
use serde::Serialize;
use services::recommendation_service::RecommendationService;
use util::state::AppState;

#[derive(Debug, Serialize, Default)]
pub struct RecommendationResponse {
    pub recommendations: Vec<String>,
    pub learning_path: String,
    pub performance_score: f64,
}

impl From<Recommendation> for RecommendationResponse {
    fn from(rec: Recommendation) -> Self {
        Self {
            recommendations: rec.recommendations,
            learning_path: rec.learning_path.to_string(),
            performance_score: rec.performance_score,
        }
    }
}

/// GET /api/ai/recommendations
///
/// Personalized learning recommendations derived from the caller's
/// submission history.
///
/// ### Response: 200 OK
/// ```json
/// {
///   "success": true,
///   "data": {
///     "recommendations": [
///       "You're making good progress! Try tackling more challenging assignments",
///       "Consider exploring related topics to deepen your understanding"
///     ],
///     "learning_path": "intermediate",
///     "performance_score": 70.0
///   },
///   "message": "Recommendations generated successfully"
/// }
/// ```
pub async fn get_recommendations(
    State(app_state): State<AppState>,
    Extension(user): Extension<User>,
) -> impl IntoResponse {
    match RecommendationService::get_learning_recommendations(app_state.db(), user.id).await {
        Ok(rec) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                RecommendationResponse::from(rec),
                "Recommendations generated successfully",
            )),
        ),
        Err(e) => service_error(e),
    }
}
