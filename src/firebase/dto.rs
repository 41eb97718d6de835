use serde::{Deserialize, Deserializer, de};
use serde_json::Value;

/// A child of the `courses` node as stored. Sub-values stay untyped so each
/// one can fail on its own.
#[derive(Debug, Deserialize)]
pub struct RawCourseNode {
    #[serde(default)]
    pub course: Option<Value>,
    #[serde(default, rename = "yogaClasses")]
    pub yoga_classes: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct RawCourse {
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub course_id: Option<String>,
    #[serde(rename = "ClassType")]
    pub class_type: String,
    #[serde(rename = "DayOfTheWeek")]
    pub day_of_the_week: String,
    #[serde(rename = "TimeOfCourse")]
    pub time_of_course: String,
    #[serde(rename = "PricePerClass", deserialize_with = "lenient_f64")]
    pub price_per_class: f64,
    #[serde(rename = "Capacity", deserialize_with = "lenient_u32")]
    pub capacity: u32,
    #[serde(default, rename = "Duration", deserialize_with = "opt_string_or_number")]
    pub duration: Option<String>,
    #[serde(default, rename = "Description")]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawYogaClass {
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub class_id: Option<String>,
    #[serde(rename = "Teacher")]
    pub teacher: String,
    #[serde(rename = "ClassDate")]
    pub class_date: String,
    #[serde(default, rename = "Comment")]
    pub comment: Option<String>,
}

/// Ids and durations are written as numbers by some clients and strings by
/// others.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Scalar {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Scalar {
    fn into_string(self) -> String {
        match self {
            Scalar::Int(n) => n.to_string(),
            Scalar::Float(n) => n.to_string(),
            Scalar::Text(s) => s,
        }
    }
}

fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(Scalar::into_string))
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Scalar::deserialize(deserializer)? {
        Scalar::Int(n) => Ok(n as f64),
        Scalar::Float(n) => Ok(n),
        Scalar::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| de::Error::custom(format!("invalid price: {:?}", s))),
    }
}

fn lenient_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let invalid = |shown: String| -> D::Error {
        de::Error::custom(format!("invalid capacity: {}", shown))
    };
    match Scalar::deserialize(deserializer)? {
        Scalar::Int(n) => u32::try_from(n).map_err(|_| invalid(n.to_string())),
        Scalar::Float(n) if n.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&n) => {
            Ok(n as u32)
        }
        Scalar::Float(n) => Err(invalid(n.to_string())),
        Scalar::Text(s) => s.trim().parse::<u32>().map_err(|_| invalid(format!("{:?}", s))),
    }
}

/// Children of a keyed collection. Firebase returns collections with
/// numeric keys as arrays, with `null` holes for missing indexes.
pub fn children(value: &Value) -> Option<Vec<(String, &Value)>> {
    match value {
        Value::Null => Some(Vec::new()),
        Value::Object(map) => Some(map.iter().map(|(k, v)| (k.clone(), v)).collect()),
        Value::Array(items) => Some(
            items
                .iter()
                .enumerate()
                .map(|(i, v)| (i.to_string(), v))
                .collect(),
        ),
        _ => None,
    }
}
