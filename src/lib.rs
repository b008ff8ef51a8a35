pub mod catalog;
pub mod error;
pub mod query;

pub use catalog::{Catalog, CatalogSummary, CourseSession};
pub use error::CatalogError;
pub use query::{Gender, InstructorCourses, SortKey};
