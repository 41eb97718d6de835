use chrono::NaiveDateTime;
use serde::Serialize;
use serde_json::Value;

use crate::error::{AppError, RecordFault};
use crate::firebase::SnapshotPath;
use crate::models::{ClassOccurrence, Course, CourseEntry};
use crate::services::normalizer::{parse_entry, to_future_classes};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseDetail {
    pub course: Course,
    pub available_classes: Vec<ClassOccurrence>,
    pub faults: Vec<RecordFault>,
}

impl CourseDetail {
    pub fn has_upcoming_classes(&self) -> bool {
        !self.available_classes.is_empty()
    }
}

/// Builds the detail view of `courses/{course_id}` from that node's value.
pub fn project_course_detail(
    course_id: &str,
    value: &Value,
    now: NaiveDateTime,
) -> Result<CourseDetail, AppError> {
    let missing = || AppError::MissingData(SnapshotPath::Course(course_id.to_string()).to_string());

    // A course-level fault has no class id.
    let unusable = |faults: &[RecordFault]| {
        faults
            .iter()
            .find(|f| f.class_id.is_none())
            .map(|f| AppError::MalformedRecord(f.reason.clone()))
            .unwrap_or_else(missing)
    };

    let mut faults = Vec::new();
    let CourseEntry::Present(node) = parse_entry(course_id, value, &mut faults) else {
        return Err(unusable(&faults));
    };
    let Some(course) = node.course else {
        return Err(unusable(&faults));
    };

    let future = to_future_classes(&course, node.yoga_classes.as_deref(), now);
    faults.extend(future.faults);

    Ok(CourseDetail {
        course,
        available_classes: future.items,
        faults,
    })
}
