pub use super::building::Entity as Building;
pub use super::faculty::Entity as Faculty;
pub use super::group::Entity as Group;
pub use super::member::Entity as Member;
pub use super::program::Entity as Program;
pub use super::schedule::Entity as Schedule;
pub use super::subject_type::Entity as SubjectType;
pub use super::user::Entity as User;
