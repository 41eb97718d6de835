use serde::Serialize;

use super::course::Course;
use super::yoga_class::ClassOccurrence;
use crate::error::RecordFault;

/// One top-level child of the `courses` node after shape validation.
#[derive(Debug, Clone, PartialEq)]
pub enum CourseEntry {
    /// The child's value was `null`.
    Absent,
    Present(CourseNode),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CourseNode {
    /// `None` when the `course` field is missing or failed to parse.
    pub course: Option<Course>,
    /// `None` when the `yogaClasses` field is missing.
    pub yoga_classes: Option<Vec<ClassOccurrence>>,
}

/// A whole `courses` snapshot, in the order the data source enumerated it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CourseTree {
    pub entries: Vec<(String, CourseEntry)>,
    pub faults: Vec<RecordFault>,
}

impl CourseTree {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn present(&self) -> impl Iterator<Item = (&str, &CourseNode)> {
        self.entries.iter().filter_map(|(key, entry)| match entry {
            CourseEntry::Present(node) => Some((key.as_str(), node)),
            CourseEntry::Absent => None,
        })
    }
}

/// Records that survived a pass plus the faults for those that did not.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projection<T> {
    pub items: Vec<T>,
    pub faults: Vec<RecordFault>,
}

impl<T> Default for Projection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            faults: Vec::new(),
        }
    }
}
