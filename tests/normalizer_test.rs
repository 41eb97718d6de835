mod common;

use serde_json::json;

use yoga_browser::models::{CourseEntry, FilterState};
use yoga_browser::services::query_filter;
use yoga_browser::services::normalizer::{
    parse_tree, to_course_summary_list, to_flattened_class_list,
};

use common::courses_snapshot;

#[test]
fn test_null_entries_are_left_out_of_summaries() {
    let tree = parse_tree(&courses_snapshot()).expect("snapshot should parse");

    assert!(matches!(tree.entries[1], (ref key, CourseEntry::Absent) if key == "c2"));

    let courses = to_course_summary_list(&tree);
    let ids: Vec<&str> = courses.iter().map(|c| c.course_id.as_str()).collect();
    assert_eq!(ids, vec!["1", "c3", "c4"]);
    assert!(tree.faults.is_empty());
}

#[test]
fn test_summary_fields_come_from_the_course_node() {
    let tree = parse_tree(&courses_snapshot()).unwrap();
    let courses = to_course_summary_list(&tree);

    let vinyasa = &courses[0];
    assert_eq!(vinyasa.class_type, "Vinyasa");
    assert_eq!(vinyasa.day_of_the_week, "Monday");
    assert_eq!(vinyasa.time_of_course, "09:00");
    assert_eq!(vinyasa.price_per_class, 12.5);
    assert_eq!(vinyasa.capacity, 20);
    assert_eq!(vinyasa.duration.as_deref(), Some("60"));

    let hatha = &courses[1];
    assert_eq!(hatha.duration.as_deref(), Some("45 minutes"));
    assert_eq!(hatha.description, None);
    assert_eq!(hatha.description_or_default(), "No description available");
}

#[test]
fn test_entry_key_is_fallback_course_id() {
    let snapshot = json!({
        "-Nabc": {
            "course": {
                "ClassType": "Restorative",
                "DayOfTheWeek": "Sunday",
                "TimeOfCourse": "10:00",
                "PricePerClass": "8.50",
                "Capacity": 8
            },
            "yogaClasses": [{ "Teacher": "Kai", "ClassDate": "2099/02/01" }]
        }
    });

    let tree = parse_tree(&snapshot).unwrap();
    let courses = to_course_summary_list(&tree);
    assert_eq!(courses[0].course_id, "-Nabc");
    assert_eq!(courses[0].price_per_class, 8.5);

    let records = to_flattened_class_list(&tree);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].course_id, "-Nabc");
    // class without an id falls back to its index
    assert_eq!(records[0].class_id, "0");
}

#[test]
fn test_flattened_records_join_parent_course() {
    let tree = parse_tree(&courses_snapshot()).unwrap();
    let records = to_flattened_class_list(&tree);

    assert_eq!(records.len(), 2);
    for record in &records {
        assert_eq!(record.class_type, "Vinyasa");
        assert_eq!(record.day_of_week, "Monday");
        assert_eq!(record.time_of_course, "09:00");
        assert_eq!(record.price_per_class, 12.5);
        assert_eq!(record.capacity, 20);
        assert_eq!(record.description.as_deref(), Some("Dynamic flow"));
        assert_eq!(record.course_id, "1");
    }
    assert_eq!(records[0].class_id, "11");
    assert_eq!(records[0].comment.as_deref(), Some("Bring a mat"));
    assert_eq!(records[1].class_id, "12");
}

#[test]
fn test_every_record_references_a_course_in_the_same_snapshot() {
    let tree = parse_tree(&courses_snapshot()).unwrap();
    let course_ids: Vec<String> = to_course_summary_list(&tree)
        .into_iter()
        .map(|c| c.course_id)
        .collect();

    for record in to_flattened_class_list(&tree) {
        assert!(course_ids.contains(&record.course_id));
    }
}

#[test]
fn test_missing_and_empty_yoga_classes_yield_no_records() {
    let snapshot = json!({
        "a": {
            "course": {
                "course_id": "a", "ClassType": "Yin", "DayOfTheWeek": "Tuesday",
                "TimeOfCourse": "07:00", "PricePerClass": 5, "Capacity": 5
            }
        },
        "b": {
            "course": {
                "course_id": "b", "ClassType": "Yin", "DayOfTheWeek": "Tuesday",
                "TimeOfCourse": "08:00", "PricePerClass": 5, "Capacity": 5
            },
            "yogaClasses": []
        }
    });

    let tree = parse_tree(&snapshot).unwrap();
    assert!(to_flattened_class_list(&tree).is_empty());
    assert!(tree.faults.is_empty());
    assert_eq!(to_course_summary_list(&tree).len(), 2);
}

#[test]
fn test_entries_without_course_are_skipped() {
    let snapshot = json!({
        "orphan": { "yogaClasses": [{ "class_id": 1, "Teacher": "Ana", "ClassDate": "2099/01/01" }] }
    });

    let tree = parse_tree(&snapshot).unwrap();
    assert!(to_course_summary_list(&tree).is_empty());
    assert!(to_flattened_class_list(&tree).is_empty());
}

#[test]
fn test_array_shaped_snapshot_with_holes() {
    let snapshot = json!([
        null,
        {
            "course": {
                "course_id": 1, "ClassType": "Power", "DayOfTheWeek": "Saturday",
                "TimeOfCourse": "11:00", "PricePerClass": 15, "Capacity": 25
            },
            "yogaClasses": [null, { "class_id": 1, "Teacher": "Mo", "ClassDate": "2099/03/01" }]
        }
    ]);

    let tree = parse_tree(&snapshot).unwrap();
    assert_eq!(tree.entries.len(), 2);
    assert_eq!(to_course_summary_list(&tree).len(), 1);

    let records = to_flattened_class_list(&tree);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].teacher, "Mo");
}

#[test]
fn test_summaries_keep_snapshot_enumeration_order() {
    let snapshot = json!({
        "z": {
            "course": {
                "course_id": "z", "ClassType": "Yin", "DayOfTheWeek": "Monday",
                "TimeOfCourse": "07:00", "PricePerClass": 5, "Capacity": 5
            },
            "yogaClasses": [{ "class_id": 1, "Teacher": "Zoe", "ClassDate": "2099/01/01" }]
        },
        "a": {
            "course": {
                "course_id": "a", "ClassType": "Yin", "DayOfTheWeek": "Monday",
                "TimeOfCourse": "08:00", "PricePerClass": 5, "Capacity": 5
            },
            "yogaClasses": [{ "class_id": 1, "Teacher": "Amy", "ClassDate": "2099/01/01" }]
        },
        "m": null
    });

    let tree = parse_tree(&snapshot).unwrap();
    let keys: Vec<&str> = tree.entries.iter().map(|(key, _)| key.as_str()).collect();
    assert_eq!(keys, vec!["z", "a", "m"]);

    let ids: Vec<String> = to_course_summary_list(&tree)
        .into_iter()
        .map(|c| c.course_id)
        .collect();
    assert_eq!(ids, vec!["z", "a"]);

    let teachers: Vec<String> = to_flattened_class_list(&tree)
        .into_iter()
        .map(|r| r.teacher)
        .collect();
    assert_eq!(teachers, vec!["Zoe", "Amy"]);
}

#[test]
fn test_nonconforming_day_and_text_capacity_keep_the_course() {
    let snapshot = json!({
        "a": {
            "course": {
                "course_id": "a", "ClassType": "Yin", "DayOfTheWeek": "monday",
                "TimeOfCourse": "07:00", "PricePerClass": 5, "Capacity": "20"
            },
            "yogaClasses": [{ "class_id": 1, "Teacher": "Ana", "ClassDate": "2099/01/01" }]
        }
    });

    let tree = parse_tree(&snapshot).unwrap();
    assert!(tree.faults.is_empty());

    let courses = to_course_summary_list(&tree);
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].day_of_the_week, "monday");
    assert_eq!(courses[0].capacity, 20);

    let records = to_flattened_class_list(&tree);
    assert_eq!(query_filter::apply(&records, &FilterState::default()).len(), 1);

    let monday = FilterState::from_params("", "Monday", "").unwrap();
    assert!(query_filter::apply(&records, &monday).is_empty());
}

#[test]
fn test_out_of_range_capacity_is_a_fault() {
    let snapshot = json!({
        "a": {
            "course": {
                "course_id": "a", "ClassType": "Yin", "DayOfTheWeek": "Monday",
                "TimeOfCourse": "07:00", "PricePerClass": 5, "Capacity": -3
            }
        }
    });

    let tree = parse_tree(&snapshot).unwrap();
    assert!(to_course_summary_list(&tree).is_empty());
    assert_eq!(tree.faults.len(), 1);
    assert!(tree.faults[0].reason.contains("invalid capacity"));
}

#[test]
fn test_malformed_records_are_isolated() {
    let snapshot = json!({
        "no-type": {
            "course": {
                "course_id": "no-type", "DayOfTheWeek": "Monday",
                "TimeOfCourse": "07:00", "PricePerClass": 5, "Capacity": 5
            }
        },
        "good": {
            "course": {
                "course_id": "good", "ClassType": "Yin", "DayOfTheWeek": "Monday",
                "TimeOfCourse": "07:00", "PricePerClass": 5, "Capacity": 5
            },
            "yogaClasses": [
                { "class_id": 1, "ClassDate": "2099/01/01" },
                { "class_id": 2, "Teacher": "Ana", "ClassDate": "2099/01/08" }
            ]
        },
        "scalar": "oops"
    });

    let tree = parse_tree(&snapshot).unwrap();

    let courses = to_course_summary_list(&tree);
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].course_id, "good");

    let records = to_flattened_class_list(&tree);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].class_id, "2");

    assert_eq!(tree.faults.len(), 3);
    assert_eq!(tree.faults[0].course_id, "no-type");
    assert_eq!(tree.faults[1].course_id, "good");
    assert_eq!(tree.faults[1].class_id.as_deref(), Some("0"));
    assert_eq!(tree.faults[2].course_id, "scalar");
}

#[test]
fn test_null_snapshot_is_empty_and_scalar_snapshot_is_rejected() {
    let tree = parse_tree(&serde_json::Value::Null).unwrap();
    assert!(tree.is_empty());
    assert!(to_course_summary_list(&tree).is_empty());

    assert!(parse_tree(&json!(42)).is_err());
}
