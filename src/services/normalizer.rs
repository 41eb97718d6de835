use chrono::NaiveDateTime;
use serde_json::Value;
use tracing::warn;

use crate::datetime::class_starts_at;
use crate::error::{AppError, RecordFault};
use crate::firebase::dto::{self, RawCourse, RawCourseNode, RawYogaClass};
use crate::models::{
    ClassOccurrence, Course, CourseEntry, CourseNode, CourseTree, FlattenedSearchRecord, Projection,
};

/// Validates a `courses` snapshot into a [`CourseTree`]. A `null` snapshot is
/// an empty tree. Bad children are reported in `faults` and never affect
/// their siblings.
pub fn parse_tree(value: &Value) -> Result<CourseTree, AppError> {
    let children = dto::children(value)
        .ok_or_else(|| AppError::MalformedRecord("courses node is not a collection".to_string()))?;

    let mut tree = CourseTree::default();
    for (key, child) in children {
        let entry = parse_entry(&key, child, &mut tree.faults);
        tree.entries.push((key, entry));
    }

    Ok(tree)
}

/// Validates one `courses/{key}` value.
pub fn parse_entry(key: &str, value: &Value, faults: &mut Vec<RecordFault>) -> CourseEntry {
    if value.is_null() {
        return CourseEntry::Absent;
    }

    let raw: RawCourseNode = match serde_json::from_value(value.clone()) {
        Ok(raw) => raw,
        Err(e) => {
            report(faults, RecordFault::new(key, None, &AppError::MalformedRecord(e.to_string())));
            return CourseEntry::Absent;
        }
    };

    let course = match raw.course {
        Some(course_value) if !course_value.is_null() => match parse_course(key, course_value) {
            Ok(course) => Some(course),
            Err(e) => {
                report(faults, RecordFault::new(key, None, &e));
                None
            }
        },
        _ => None,
    };

    let course_id = course.as_ref().map(|c| c.course_id.as_str()).unwrap_or(key);
    let yoga_classes = match raw.yoga_classes {
        Some(classes) if !classes.is_null() => Some(parse_classes(course_id, &classes, faults)),
        _ => None,
    };

    CourseEntry::Present(CourseNode { course, yoga_classes })
}

fn parse_course(key: &str, value: Value) -> Result<Course, AppError> {
    let raw: RawCourse = serde_json::from_value(value)
        .map_err(|e| AppError::MalformedRecord(format!("course: {}", e)))?;

    Ok(Course {
        course_id: raw.course_id.unwrap_or_else(|| key.to_string()),
        class_type: raw.class_type,
        day_of_the_week: raw.day_of_the_week,
        time_of_course: raw.time_of_course,
        price_per_class: raw.price_per_class,
        capacity: raw.capacity,
        duration: raw.duration,
        description: raw.description,
    })
}

fn parse_classes(
    course_id: &str,
    value: &Value,
    faults: &mut Vec<RecordFault>,
) -> Vec<ClassOccurrence> {
    let Some(children) = dto::children(value) else {
        let error = AppError::MalformedRecord("yogaClasses is not a collection".to_string());
        report(faults, RecordFault::new(course_id, None, &error));
        return Vec::new();
    };

    let mut classes = Vec::with_capacity(children.len());
    for (key, child) in children {
        if child.is_null() {
            continue;
        }
        match serde_json::from_value::<RawYogaClass>(child.clone()) {
            Ok(raw) => classes.push(ClassOccurrence {
                class_id: raw.class_id.unwrap_or(key),
                teacher: raw.teacher,
                class_date: raw.class_date,
                comment: raw.comment,
                course_id: course_id.to_string(),
            }),
            Err(e) => {
                let error = AppError::MalformedRecord(format!("yoga class: {}", e));
                report(faults, RecordFault::new(course_id, Some(key), &error));
            }
        }
    }

    classes
}

fn report(faults: &mut Vec<RecordFault>, fault: RecordFault) {
    warn!(
        "Skipping record course={} class={:?}: {}",
        fault.course_id, fault.class_id, fault.reason
    );
    faults.push(fault);
}

/// Home list: one course per non-null entry that carries a course, in
/// snapshot order.
pub fn to_course_summary_list(tree: &CourseTree) -> Vec<Course> {
    tree.present()
        .filter_map(|(_, node)| node.course.clone())
        .collect()
}

/// Search list: every class of every course, joined with its course.
pub fn to_flattened_class_list(tree: &CourseTree) -> Vec<FlattenedSearchRecord> {
    let mut records = Vec::new();

    for (_, node) in tree.present() {
        let Some(course) = &node.course else {
            continue;
        };
        if let Some(classes) = &node.yoga_classes {
            records.extend(classes.iter().map(|class| FlattenedSearchRecord::join(class, course)));
        }
    }

    records
}

/// Classes that start strictly after `now`. A class whose start cannot be
/// computed is reported and left out.
pub fn to_future_classes(
    course: &Course,
    yoga_classes: Option<&[ClassOccurrence]>,
    now: NaiveDateTime,
) -> Projection<ClassOccurrence> {
    let mut projection = Projection::default();

    for class in yoga_classes.unwrap_or_default() {
        match class_starts_at(&class.class_date, &course.time_of_course) {
            Ok(starts_at) if starts_at > now => projection.items.push(class.clone()),
            Ok(_) => {}
            Err(e) => report(
                &mut projection.faults,
                RecordFault::new(course.course_id.as_str(), Some(class.class_id.clone()), &e),
            ),
        }
    }

    projection
}
