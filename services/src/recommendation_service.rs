use crate::error::ServiceError;
use crate::submission_service::SubmissionService;
use marker::{recommend, GradedSubmission, Recommendation};
use sea_orm::DatabaseConnection;

pub struct RecommendationService;

impl RecommendationService {
    /// Builds the learning recommendation for a student from their full submission history.
    pub async fn get_learning_recommendations(
        db: &DatabaseConnection,
        student_id: i64,
    ) -> Result<Recommendation, ServiceError> {
        let history: Vec<GradedSubmission> =
            SubmissionService::fetch_submissions_by_student(db, student_id)
                .await?
                .into_iter()
                .map(|(submission, max_score)| GradedSubmission::new(submission.grade, max_score))
                .collect();

        let rec = recommend(&history);
        tracing::debug!(
            student_id,
            submissions = history.len(),
            path = %rec.learning_path,
            "Computed learning recommendation"
        );
        Ok(rec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::make_user;
    use chrono::{Duration, Utc};
    use db::models::{assignment, course, submission, user::Role};
    use db::test_utils::setup_test_db;
    use marker::LearningPath;

    #[tokio::test]
    async fn test_new_student_is_beginner() {
        let db = setup_test_db().await;
        let student = make_user(&db, "s@school.test", Role::Student).await;

        let rec = RecommendationService::get_learning_recommendations(&db, student.id)
            .await
            .unwrap();
        assert_eq!(rec.learning_path, LearningPath::Beginner);
        assert_eq!(rec.performance_score, 0.0);
        assert_eq!(rec.recommendations.len(), 2);
    }

    #[tokio::test]
    async fn test_ungraded_submissions_count_against_the_ratio() {
        let db = setup_test_db().await;
        let teacher = make_user(&db, "t@school.test", Role::Teacher).await;
        let student = make_user(&db, "s@school.test", Role::Student).await;
        let course = course::Model::create(&db, teacher.id, "Math", "", "Math").await.unwrap();
        let due = Utc::now() + Duration::days(1);
        let first = assignment::Model::create(&db, course.id, "A", "", due, 100).await.unwrap();
        let second = assignment::Model::create(&db, course.id, "B", "", due, 100).await.unwrap();

        submission::Model::create(&db, first.id, student.id, "graded", Some(90.0)).await.unwrap();
        submission::Model::create(&db, second.id, student.id, "pending", None).await.unwrap();

        let rec = RecommendationService::get_learning_recommendations(&db, student.id)
            .await
            .unwrap();
        assert_eq!(rec.learning_path, LearningPath::Foundational);
        assert!((rec.performance_score - 45.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_high_scores_are_advanced() {
        let db = setup_test_db().await;
        let teacher = make_user(&db, "t@school.test", Role::Teacher).await;
        let student = make_user(&db, "s@school.test", Role::Student).await;
        let course = course::Model::create(&db, teacher.id, "Math", "", "Math").await.unwrap();
        let due = Utc::now() + Duration::days(1);
        let a = assignment::Model::create(&db, course.id, "A", "", due, 10).await.unwrap();

        submission::Model::create(&db, a.id, student.id, "great", Some(9.0)).await.unwrap();

        let rec = RecommendationService::get_learning_recommendations(&db, student.id)
            .await
            .unwrap();
        assert_eq!(rec.learning_path, LearningPath::Advanced);
    }
}
