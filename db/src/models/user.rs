use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::Set, ConnectionTrait, DbErr, QueryFilter};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Represents a user in the `users` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Primary key ID (auto-incremented).
    #[sea_orm(primary_key)]
    pub id: i64,
    /// User's unique email address, also the login name.
    pub email: String,
    /// Argon2 PHC string. Never serialized.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Display name.
    pub full_name: String,
    /// Whether the user teaches or studies.
    pub role: Role,
    /// Timestamp when the user was created.
    pub created_at: DateTime<Utc>,
}

/// Platform-wide role of a user.
///
/// Backed by a `user_role_type` enum in the database and checked at the
/// request-handling boundary.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "user_role_type")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Role {
    #[sea_orm(string_value = "teacher")]
    Teacher,

    #[sea_orm(string_value = "student")]
    Student,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::course::Entity")]
    Courses,

    #[sea_orm(has_many = "super::enrollment::Entity")]
    Enrollments,

    #[sea_orm(has_many = "super::submission::Entity")]
    Submissions,
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Courses.def()
    }
}

impl Related<super::enrollment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollments.def()
    }
}

impl Related<super::submission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Submissions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Inserts a new user. The password must already be hashed.
    pub async fn create<C: ConnectionTrait>(
        db: &C,
        email: &str,
        password_hash: &str,
        full_name: &str,
        role: Role,
    ) -> Result<Self, DbErr> {
        ActiveModel {
            email: Set(email.to_owned()),
            password_hash: Set(password_hash.to_owned()),
            full_name: Set(full_name.to_owned()),
            role: Set(role),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    pub async fn find_by_id<C: ConnectionTrait>(db: &C, id: i64) -> Result<Option<Self>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    pub async fn find_by_email<C: ConnectionTrait>(
        db: &C,
        email: &str,
    ) -> Result<Option<Self>, DbErr> {
        Entity::find()
            .filter(Column::Email.eq(email))
            .one(db)
            .await
    }

    pub fn is_teacher(&self) -> bool {
        self.role == Role::Teacher
    }

    pub fn is_student(&self) -> bool {
        self.role == Role::Student
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::setup_test_db;
    use std::str::FromStr;

    #[tokio::test]
    async fn test_create_and_find_user() {
        let db = setup_test_db().await;

        let user = Model::create(&db, "ada@school.test", "hash", "Ada Lovelace", Role::Teacher)
            .await
            .unwrap();
        assert!(user.id > 0);
        assert!(user.is_teacher());

        let by_email = Model::find_by_email(&db, "ada@school.test").await.unwrap().unwrap();
        assert_eq!(by_email.id, user.id);
        assert_eq!(by_email.role, Role::Teacher);

        let by_id = Model::find_by_id(&db, user.id).await.unwrap().unwrap();
        assert_eq!(by_id.full_name, "Ada Lovelace");
    }

    #[tokio::test]
    async fn test_duplicate_email_is_rejected() {
        let db = setup_test_db().await;
        Model::create(&db, "dup@school.test", "h", "One", Role::Student).await.unwrap();
        let err = Model::create(&db, "dup@school.test", "h", "Two", Role::Student).await;
        assert!(err.is_err());
    }

    #[test]
    fn test_role_parsing_and_display() {
        assert_eq!(Role::from_str("Teacher").unwrap(), Role::Teacher);
        assert_eq!(Role::from_str("student").unwrap(), Role::Student);
        assert!(Role::from_str("admin").is_err());
        assert_eq!(Role::Student.to_string(), "student");
    }

    #[test]
    fn test_password_hash_is_not_serialized() {
        let user = Model {
            id: 1,
            email: "a@b.c".into(),
            password_hash: "secret".into(),
            full_name: "A".into(),
            role: Role::Student,
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["role"], "student");
    }
}
