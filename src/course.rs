use std::fmt;

use crate::bst_base::bst_traits::KeyOfValue;

/// One catalog entry. Prerequisites are plain identifiers in the order they
/// were listed. They are neither deduplicated nor checked against the catalog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Course {
    pub identifier: String,
    pub title: String,
    pub prerequisites: Vec<String>,
}

impl Course {
    pub fn new<I, P>(
        identifier: impl Into<String>,
        title: impl Into<String>,
        prerequisites: I,
    ) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        Self {
            identifier: identifier.into(),
            title: title.into(),
            prerequisites: prerequisites.into_iter().map(Into::into).collect(),
        }
    }

    pub fn key(&self) -> &str {
        &self.identifier
    }

    /// `None` when there are no prerequisites, otherwise a comma-joined list.
    pub fn prerequisites_line(&self) -> String {
        if self.prerequisites.is_empty() {
            "None".to_string()
        } else {
            self.prerequisites.join(", ")
        }
    }
}

/// `identifier, title`
impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.identifier, self.title)
    }
}

/// Extracts the identifier as the tree key.
#[derive(Debug)]
pub struct CourseKey;

impl KeyOfValue<str, Course> for CourseKey {
    fn get(value: &Course) -> &str {
        value.key()
    }
}
