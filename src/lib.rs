//! Advising course planner.
//!
//! Courses are kept in an unbalanced binary search tree keyed by their
//! identifier ([`course_store::OrderedCourseStore`]), built on the generic
//! tree engine in [`bst_base`]. [`loader`] reads comma-separated course
//! records and [`menu`] drives the interactive session.

pub mod bst_base;
pub mod course;
pub mod course_store;
pub mod error;
pub mod loader;
pub mod menu;

pub use course::Course;
pub use course_store::{OrderedCourseStore, VerifiedCourseStore};
pub use error::{CatalogError, Result};
