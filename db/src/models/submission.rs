use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::Set, ConnectionTrait, DbErr, QueryFilter, QueryOrder};
use serde::Serialize;

/// A student's free-text answer to an assignment.
///
/// `grade` stays `None` until the submission has been scored.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "submissions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub assignment_id: i64,
    pub student_id: i64,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub submitted_at: DateTime<Utc>,
    pub grade: Option<f64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::assignment::Entity",
        from = "Column::AssignmentId",
        to = "super::assignment::Column::Id",
        on_delete = "Cascade"
    )]
    Assignment,

    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::StudentId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    Student,

    #[sea_orm(has_many = "super::grade::Entity")]
    Grades,
}

impl Related<super::assignment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignment.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::grade::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Grades.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create<C: ConnectionTrait>(
        db: &C,
        assignment_id: i64,
        student_id: i64,
        content: &str,
        grade: Option<f64>,
    ) -> Result<Self, DbErr> {
        ActiveModel {
            assignment_id: Set(assignment_id),
            student_id: Set(student_id),
            content: Set(content.to_owned()),
            submitted_at: Set(Utc::now()),
            grade: Set(grade),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    pub async fn find_by_assignment<C: ConnectionTrait>(
        db: &C,
        assignment_id: i64,
    ) -> Result<Vec<Self>, DbErr> {
        Entity::find()
            .filter(Column::AssignmentId.eq(assignment_id))
            .order_by_asc(Column::Id)
            .all(db)
            .await
    }

    pub async fn find_by_assignment_and_student<C: ConnectionTrait>(
        db: &C,
        assignment_id: i64,
        student_id: i64,
    ) -> Result<Vec<Self>, DbErr> {
        Entity::find()
            .filter(Column::AssignmentId.eq(assignment_id))
            .filter(Column::StudentId.eq(student_id))
            .order_by_asc(Column::Id)
            .all(db)
            .await
    }

    /// Every submission by `student_id`, each paired with its assignment.
    ///
    /// Submissions whose assignment row is gone are skipped.
    pub async fn find_by_student_with_assignment<C: ConnectionTrait>(
        db: &C,
        student_id: i64,
    ) -> Result<Vec<(Self, super::assignment::Model)>, DbErr> {
        let rows = Entity::find()
            .filter(Column::StudentId.eq(student_id))
            .order_by_asc(Column::Id)
            .find_also_related(super::assignment::Entity)
            .all(db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(submission, assignment)| assignment.map(|a| (submission, a)))
            .collect())
    }
}
