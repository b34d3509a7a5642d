use crate::error::ServiceError;
use db::models::{course, enrollment, user::Role};
use sea_orm::DatabaseConnection;

pub use db::models::course::Model as Course;
use db::models::user::Model as User;

#[derive(Debug, Clone)]
pub struct CreateCourse {
    pub title: String,
    pub description: String,
    pub subject: String,
}

pub struct CourseService;

impl CourseService {
    pub async fn create(
        db: &DatabaseConnection,
        teacher_id: i64,
        params: CreateCourse,
    ) -> Result<Course, ServiceError> {
        let title = params.title.trim();
        if title.is_empty() {
            return Err(ServiceError::Validation("Title cannot be empty".into()));
        }

        let course =
            course::Model::create(db, teacher_id, title, &params.description, &params.subject)
                .await?;
        tracing::info!(course_id = course.id, teacher_id, "Created course");
        Ok(course)
    }

    /// Teachers get the courses they teach, students the courses they are enrolled in.
    pub async fn list_for_user(db: &DatabaseConnection, user: &User) -> Result<Vec<Course>, ServiceError> {
        let courses = match user.role {
            Role::Teacher => course::Model::find_by_teacher(db, user.id).await?,
            Role::Student => {
                let ids = enrollment::Model::course_ids_for_student(db, user.id).await?;
                course::Model::find_by_ids(db, ids).await?
            }
        };
        Ok(courses)
    }

    /// Every course on the platform.
    pub async fn browse(db: &DatabaseConnection) -> Result<Vec<Course>, ServiceError> {
        Ok(course::Model::find_all(db).await?)
    }

    pub async fn get(db: &DatabaseConnection, course_id: i64) -> Result<Course, ServiceError> {
        course::Model::find_by_id(db, course_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Course"))
    }

    /// Non-students are never enrolled.
    pub async fn is_enrolled(
        db: &DatabaseConnection,
        course_id: i64,
        user: &User,
    ) -> Result<bool, ServiceError> {
        if user.role != Role::Student {
            return Ok(false);
        }
        Ok(enrollment::Model::find_for(db, course_id, user.id).await?.is_some())
    }

    pub async fn enroll(
        db: &DatabaseConnection,
        course_id: i64,
        student_id: i64,
    ) -> Result<enrollment::Model, ServiceError> {
        Self::get(db, course_id).await?;

        if enrollment::Model::find_for(db, course_id, student_id).await?.is_some() {
            return Err(ServiceError::Validation("Already enrolled".into()));
        }

        let enrollment = enrollment::Model::create(db, course_id, student_id)
            .await
            .map_err(|e| {
                ServiceError::on_unique_violation(e, ServiceError::Validation("Already enrolled".into()))
            })?;
        tracing::info!(course_id, student_id, "Student enrolled");
        Ok(enrollment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::make_user;
    use db::test_utils::setup_test_db;

    fn params(title: &str) -> CreateCourse {
        CreateCourse {
            title: title.into(),
            description: "An introduction".into(),
            subject: "Math".into(),
        }
    }

    #[tokio::test]
    async fn test_list_is_filtered_by_role() {
        let db = setup_test_db().await;
        let teacher = make_user(&db, "t@school.test", Role::Teacher).await;
        let other = make_user(&db, "o@school.test", Role::Teacher).await;
        let student = make_user(&db, "s@school.test", Role::Student).await;

        let algebra = CourseService::create(&db, teacher.id, params("Algebra")).await.unwrap();
        CourseService::create(&db, other.id, params("Poetry")).await.unwrap();

        let taught = CourseService::list_for_user(&db, &teacher).await.unwrap();
        assert_eq!(taught.len(), 1);
        assert_eq!(taught[0].title, "Algebra");

        assert!(CourseService::list_for_user(&db, &student).await.unwrap().is_empty());
        CourseService::enroll(&db, algebra.id, student.id).await.unwrap();
        let enrolled = CourseService::list_for_user(&db, &student).await.unwrap();
        assert_eq!(enrolled.len(), 1);
        assert_eq!(enrolled[0].id, algebra.id);

        assert_eq!(CourseService::browse(&db).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_enroll_errors() {
        let db = setup_test_db().await;
        let teacher = make_user(&db, "t@school.test", Role::Teacher).await;
        let student = make_user(&db, "s@school.test", Role::Student).await;
        let course = CourseService::create(&db, teacher.id, params("Chemistry")).await.unwrap();

        let err = CourseService::enroll(&db, 404, student.id).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));

        CourseService::enroll(&db, course.id, student.id).await.unwrap();
        let err = CourseService::enroll(&db, course.id, student.id).await.unwrap_err();
        assert_eq!(err.to_string(), "Already enrolled");
    }

    #[tokio::test]
    async fn test_enrollment_status() {
        let db = setup_test_db().await;
        let teacher = make_user(&db, "t@school.test", Role::Teacher).await;
        let student = make_user(&db, "s@school.test", Role::Student).await;
        let course = CourseService::create(&db, teacher.id, params("History")).await.unwrap();

        assert!(!CourseService::is_enrolled(&db, course.id, &student).await.unwrap());
        CourseService::enroll(&db, course.id, student.id).await.unwrap();
        assert!(CourseService::is_enrolled(&db, course.id, &student).await.unwrap());
        assert!(!CourseService::is_enrolled(&db, course.id, &teacher).await.unwrap());
    }

    #[tokio::test]
    async fn test_empty_title_is_rejected() {
        let db = setup_test_db().await;
        let teacher = make_user(&db, "t@school.test", Role::Teacher).await;
        let err = CourseService::create(&db, teacher.id, params("   ")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }
}
