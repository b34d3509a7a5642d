pub mod assignment;
pub mod course;
pub mod enrollment;
pub mod grade;
pub mod submission;
pub mod user;

pub use assignment::Entity as Assignment;
pub use course::Entity as Course;
pub use enrollment::Entity as Enrollment;
pub use grade::Entity as Grade;
pub use submission::Entity as Submission;
pub use user::Entity as User;
