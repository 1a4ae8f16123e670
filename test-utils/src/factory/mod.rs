//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults so tests only spell out the fields
//! they care about. Each entity has its own module with a `*Factory` builder for
//! customization and a `create_*` convenience function for default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let faculty = factory::create_faculty(db).await?;
//! let program = factory::create_program(db, faculty.id).await?;
//!
//! // Or everything a group needs in one call
//! let (faculty, program, group) = factory::helpers::create_group_with_dependencies(db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let group = factory::group::GroupFactory::new(db, faculty.id, program.id)
//!     .short_name("CS101")
//!     .code("AbC9")
//!     .leader(Some(user.id))
//!     .build()
//!     .await?;
//! ```

pub mod building;
pub mod faculty;
pub mod group;
pub mod helpers;
pub mod member;
pub mod program;
pub mod schedule;
pub mod subject_type;
pub mod user;

pub use building::create_building;
pub use faculty::create_faculty;
pub use group::create_group;
pub use member::create_member;
pub use program::create_program;
pub use schedule::create_schedule;
pub use subject_type::create_subject_type;
pub use user::create_user;
