use crate::error::ServiceError;
use chrono::{DateTime, Utc};
use db::models::{assignment, course};
use sea_orm::DatabaseConnection;

pub use db::models::assignment::Model as Assignment;

#[derive(Debug, Clone)]
pub struct CreateAssignment {
    pub course_id: i64,
    pub title: String,
    pub description: String,
    pub due_date: DateTime<Utc>,
    pub max_score: i64,
}

pub struct AssignmentService;

impl AssignmentService {
    /// Creates an assignment in a course owned by `teacher_id`.
    ///
    /// A course that exists but belongs to another teacher is reported as not
    /// found, so its existence is not leaked.
    pub async fn create(
        db: &DatabaseConnection,
        teacher_id: i64,
        params: CreateAssignment,
    ) -> Result<Assignment, ServiceError> {
        if params.max_score < 1 {
            return Err(ServiceError::Validation("max_score must be at least 1".into()));
        }

        let course = course::Model::find_by_id(db, params.course_id).await?;
        match course {
            Some(c) if c.teacher_id == teacher_id => {}
            _ => return Err(ServiceError::not_found("Course")),
        }

        let assignment = assignment::Model::create(
            db,
            params.course_id,
            params.title.trim(),
            &params.description,
            params.due_date,
            params.max_score,
        )
        .await?;

        tracing::info!(
            assignment_id = assignment.id,
            course_id = assignment.course_id,
            max_score = assignment.max_score,
            "Created assignment"
        );
        Ok(assignment)
    }

    pub async fn get(db: &DatabaseConnection, assignment_id: i64) -> Result<Assignment, ServiceError> {
        assignment::Model::find_by_id(db, assignment_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Assignment"))
    }

    pub async fn list_for_course(
        db: &DatabaseConnection,
        course_id: i64,
    ) -> Result<Vec<Assignment>, ServiceError> {
        if course::Model::find_by_id(db, course_id).await?.is_none() {
            return Err(ServiceError::not_found("Course"));
        }
        Ok(assignment::Model::find_by_course(db, course_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::make_user;
    use chrono::Duration;
    use db::models::user::Role;
    use db::test_utils::setup_test_db;

    fn params(course_id: i64, max_score: i64) -> CreateAssignment {
        CreateAssignment {
            course_id,
            title: "Essay".into(),
            description: "Write about photosynthesis".into(),
            due_date: Utc::now() + Duration::days(3),
            max_score,
        }
    }

    #[tokio::test]
    async fn test_create_and_list() {
        let db = setup_test_db().await;
        let teacher = make_user(&db, "t@school.test", Role::Teacher).await;
        let course = course::Model::create(&db, teacher.id, "Biology", "", "Science").await.unwrap();

        let created = AssignmentService::create(&db, teacher.id, params(course.id, 50)).await.unwrap();
        assert_eq!(created.max_score, 50);

        let fetched = AssignmentService::get(&db, created.id).await.unwrap();
        assert_eq!(fetched.title, "Essay");

        let listed = AssignmentService::list_for_course(&db, course.id).await.unwrap();
        assert_eq!(listed.len(), 1);
    }

    #[tokio::test]
    async fn test_foreign_course_is_not_found() {
        let db = setup_test_db().await;
        let owner = make_user(&db, "owner@school.test", Role::Teacher).await;
        let intruder = make_user(&db, "intruder@school.test", Role::Teacher).await;
        let course = course::Model::create(&db, owner.id, "Physics", "", "Science").await.unwrap();

        let err = AssignmentService::create(&db, intruder.id, params(course.id, 10))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Course not found");

        let err = AssignmentService::create(&db, owner.id, params(9999, 10)).await.unwrap_err();
        assert_eq!(err.to_string(), "Course not found");
    }

    #[tokio::test]
    async fn test_non_positive_max_score_is_rejected() {
        let db = setup_test_db().await;
        let teacher = make_user(&db, "t@school.test", Role::Teacher).await;
        let course = course::Model::create(&db, teacher.id, "Art", "", "Art").await.unwrap();

        let err = AssignmentService::create(&db, teacher.id, params(course.id, 0)).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn test_missing_lookups() {
        let db = setup_test_db().await;
        assert_eq!(
            AssignmentService::get(&db, 1).await.unwrap_err().to_string(),
            "Assignment not found"
        );
        assert_eq!(
            AssignmentService::list_for_course(&db, 1).await.unwrap_err().to_string(),
            "Course not found"
        );
    }
}
