#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use serde_json::{Value, json};

use yoga_browser::models::{DayOfWeek, FlattenedSearchRecord};

/// A database root shaped like the studio's realtime database.
pub fn studio_root() -> Value {
    json!({
        "courses": {
            "c1": {
                "course": {
                    "course_id": 1,
                    "ClassType": "Vinyasa",
                    "DayOfTheWeek": "Monday",
                    "TimeOfCourse": "09:00",
                    "PricePerClass": 12.5,
                    "Capacity": 20,
                    "Duration": 60,
                    "Description": "Dynamic flow"
                },
                "yogaClasses": [
                    { "class_id": 11, "Teacher": "Ana", "ClassDate": "2099/01/05", "Comment": "Bring a mat" },
                    { "class_id": 12, "Teacher": "Ana", "ClassDate": "2000/01/03" }
                ]
            },
            "c2": null,
            "c3": {
                "course": {
                    "course_id": "c3",
                    "ClassType": "Hatha",
                    "DayOfTheWeek": "Friday",
                    "TimeOfCourse": "18:00",
                    "PricePerClass": 10,
                    "Capacity": 15,
                    "Duration": "45 minutes"
                }
            },
            "c4": {
                "course": {
                    "course_id": "c4",
                    "ClassType": "Yin",
                    "DayOfTheWeek": "Wednesday",
                    "TimeOfCourse": "13:30",
                    "PricePerClass": 9,
                    "Capacity": 12,
                    "Duration": 75
                },
                "yogaClasses": []
            }
        }
    })
}

pub fn courses_snapshot() -> Value {
    studio_root()["courses"].clone()
}

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

pub fn record(teacher: &str, class_type: &str, day: DayOfWeek, time: &str) -> FlattenedSearchRecord {
    FlattenedSearchRecord {
        class_id: format!("{}-{}", teacher, time),
        teacher: teacher.to_string(),
        class_date: "2099/01/01".to_string(),
        comment: None,
        class_type: class_type.to_string(),
        day_of_week: day.to_string(),
        time_of_course: time.to_string(),
        price_per_class: 10.0,
        capacity: 10,
        duration: Some("60".to_string()),
        description: None,
        course_id: "c1".to_string(),
    }
}
