use crate::error::ServiceError;
use db::models::{assignment, course, grade, submission, user::Role};
use marker::{auto_feedback, score};
use sea_orm::{DatabaseConnection, EntityTrait, TransactionTrait};
use serde::Serialize;

pub use db::models::grade::Model as Grade;
pub use db::models::submission::Model as Submission;
use db::models::assignment::Model as Assignment;
use db::models::user::Model as User;

/// A freshly stored submission together with the grade record written for it.
#[derive(Debug, Clone, Serialize)]
pub struct GradedSubmission {
    pub submission: Submission,
    pub grade: Grade,
}

pub struct SubmissionService;

impl SubmissionService {
    pub async fn fetch_assignment(
        db: &DatabaseConnection,
        assignment_id: i64,
    ) -> Result<Option<Assignment>, ServiceError> {
        Ok(assignment::Model::find_by_id(db, assignment_id).await?)
    }

    /// The student's submissions, each paired with its assignment's `max_score`.
    pub async fn fetch_submissions_by_student(
        db: &DatabaseConnection,
        student_id: i64,
    ) -> Result<Vec<(Submission, i64)>, ServiceError> {
        let rows = submission::Model::find_by_student_with_assignment(db, student_id).await?;
        Ok(rows
            .into_iter()
            .map(|(submission, assignment)| (submission, assignment.max_score))
            .collect())
    }

    /// Stores a submission with its grade and the matching grade record.
    ///
    /// Both rows are written in one transaction; if either insert fails
    /// nothing is persisted.
    pub async fn create_submission_and_grade(
        db: &DatabaseConnection,
        assignment_id: i64,
        student_id: i64,
        content: &str,
        score: f64,
        feedback: &str,
    ) -> Result<GradedSubmission, ServiceError> {
        let txn = db.begin().await?;

        let submission =
            submission::Model::create(&txn, assignment_id, student_id, content, Some(score)).await?;
        let grade = grade::Model::create(&txn, submission.id, score, feedback).await?;

        txn.commit().await?;

        Ok(GradedSubmission { submission, grade })
    }

    /// Scores `content` against the assignment and stores the result.
    pub async fn submit(
        db: &DatabaseConnection,
        student_id: i64,
        assignment_id: i64,
        content: &str,
    ) -> Result<GradedSubmission, ServiceError> {
        let assignment = Self::fetch_assignment(db, assignment_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Assignment"))?;

        let awarded = score(content, assignment.max_score)?;
        let feedback = auto_feedback(awarded, assignment.max_score);

        let graded = Self::create_submission_and_grade(
            db,
            assignment.id,
            student_id,
            content,
            awarded,
            &feedback,
        )
        .await?;

        tracing::info!(
            submission_id = graded.submission.id,
            assignment_id,
            student_id,
            score = awarded,
            max_score = assignment.max_score,
            "Auto-graded submission"
        );
        Ok(graded)
    }

    /// Teachers see every submission for the assignment, students only their own.
    pub async fn list_for_assignment(
        db: &DatabaseConnection,
        user: &User,
        assignment_id: i64,
    ) -> Result<Vec<Submission>, ServiceError> {
        if Self::fetch_assignment(db, assignment_id).await?.is_none() {
            return Err(ServiceError::not_found("Assignment"));
        }

        let submissions = match user.role {
            Role::Teacher => submission::Model::find_by_assignment(db, assignment_id).await?,
            Role::Student => {
                submission::Model::find_by_assignment_and_student(db, assignment_id, user.id).await?
            }
        };
        Ok(submissions)
    }

    /// Grade history of one submission.
    ///
    /// Visible to the submitting student and to the teacher of the course.
    pub async fn grades_for_submission(
        db: &DatabaseConnection,
        user: &User,
        submission_id: i64,
    ) -> Result<Vec<Grade>, ServiceError> {
        let (submission, assignment) = submission::Entity::find_by_id(submission_id)
            .find_also_related(assignment::Entity)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("Submission"))?;

        let allowed = match user.role {
            Role::Student => submission.student_id == user.id,
            Role::Teacher => match assignment {
                Some(a) => course::Model::find_by_id(db, a.course_id)
                    .await?
                    .is_some_and(|c| c.teacher_id == user.id),
                None => false,
            },
        };
        if !allowed {
            return Err(ServiceError::Forbidden(
                "Not allowed to view grades for this submission".into(),
            ));
        }

        Ok(grade::Model::find_by_submission(db, submission_id).await?)
    }
}
