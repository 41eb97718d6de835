use serde::Serialize;

use super::course::Course;

/// One scheduled instance of a course.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassOccurrence {
    pub class_id: String,
    #[serde(rename = "Teacher")]
    pub teacher: String,
    #[serde(rename = "ClassDate")]
    pub class_date: String,
    #[serde(rename = "Comment", skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(rename = "courseId")]
    pub course_id: String,
}

/// A class occurrence joined with its parent course, as listed on the
/// search screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlattenedSearchRecord {
    pub class_id: String,
    #[serde(rename = "Teacher")]
    pub teacher: String,
    #[serde(rename = "ClassDate")]
    pub class_date: String,
    #[serde(rename = "Comment", skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(rename = "ClassType")]
    pub class_type: String,
    #[serde(rename = "DayOfWeek")]
    pub day_of_week: String,
    #[serde(rename = "TimeOfCourse")]
    pub time_of_course: String,
    #[serde(rename = "PricePerClass")]
    pub price_per_class: f64,
    #[serde(rename = "Capacity")]
    pub capacity: u32,
    #[serde(rename = "Duration")]
    pub duration: Option<String>,
    #[serde(rename = "Description")]
    pub description: Option<String>,
    #[serde(rename = "courseId")]
    pub course_id: String,
}

impl FlattenedSearchRecord {
    pub fn join(class: &ClassOccurrence, course: &Course) -> Self {
        Self {
            class_id: class.class_id.clone(),
            teacher: class.teacher.clone(),
            class_date: class.class_date.clone(),
            comment: class.comment.clone(),
            class_type: course.class_type.clone(),
            day_of_week: course.day_of_the_week.clone(),
            time_of_course: course.time_of_course.clone(),
            price_per_class: course.price_per_class,
            capacity: course.capacity,
            duration: course.duration.clone(),
            description: course.description.clone(),
            course_id: course.course_id.clone(),
        }
    }
}
