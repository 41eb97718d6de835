use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::course::DayOfWeek;
use super::yoga_class::FlattenedSearchRecord;
use crate::datetime::canonical_time;
use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeBucket {
    Morning,
    Afternoon,
    Evening,
}

impl TimeBucket {
    pub const ALL: [TimeBucket; 3] =
        [TimeBucket::Morning, TimeBucket::Afternoon, TimeBucket::Evening];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeBucket::Morning => "morning",
            TimeBucket::Afternoon => "afternoon",
            TimeBucket::Evening => "evening",
        }
    }

    /// Half-open `[start, end)` range in zero-padded `HH:MM`; `None` is
    /// unbounded.
    pub fn bounds(&self) -> (Option<&'static str>, Option<&'static str>) {
        match self {
            TimeBucket::Morning => (None, Some("12:00")),
            TimeBucket::Afternoon => (Some("12:00"), Some("17:00")),
            TimeBucket::Evening => (Some("17:00"), None),
        }
    }

    /// Unpadded stored times are padded before comparing. Times that do not
    /// parse fall in no bucket.
    pub fn contains(&self, time_of_course: &str) -> bool {
        let Ok(time) = canonical_time(time_of_course) else {
            return false;
        };
        let (start, end) = self.bounds();
        start.is_none_or(|start| time.as_str() >= start)
            && end.is_none_or(|end| time.as_str() < end)
    }
}

impl fmt::Display for TimeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeBucket {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeBucket::ALL
            .into_iter()
            .find(|bucket| bucket.as_str() == s)
            .ok_or_else(|| AppError::BadRequest(format!("unknown time of day: {:?}", s)))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub search_text: String,
    pub day_of_week: Option<DayOfWeek>,
    pub time_bucket: Option<TimeBucket>,
}

impl FilterState {
    /// Builds filters from the raw picker values, where an empty string means
    /// "any".
    pub fn from_params(
        search_text: &str,
        day_of_week: &str,
        time_bucket: &str,
    ) -> Result<Self, AppError> {
        let day_of_week = match day_of_week {
            "" => None,
            day => Some(day.parse::<DayOfWeek>().map_err(|e| AppError::BadRequest(e.to_string()))?),
        };
        let time_bucket = match time_bucket {
            "" => None,
            bucket => Some(bucket.parse::<TimeBucket>()?),
        };

        Ok(Self {
            search_text: search_text.to_string(),
            day_of_week,
            time_bucket,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.search_text.is_empty() && self.day_of_week.is_none() && self.time_bucket.is_none()
    }

    pub fn matches(&self, record: &FlattenedSearchRecord) -> bool {
        self.matches_text(record) && self.matches_day(record) && self.matches_time(record)
    }

    fn matches_text(&self, record: &FlattenedSearchRecord) -> bool {
        if self.search_text.is_empty() {
            return true;
        }
        let needle = self.search_text.to_lowercase();
        record.teacher.to_lowercase().contains(&needle)
            || record.class_type.to_lowercase().contains(&needle)
    }

    fn matches_day(&self, record: &FlattenedSearchRecord) -> bool {
        self.day_of_week.is_none_or(|day| day.as_str() == record.day_of_week)
    }

    fn matches_time(&self, record: &FlattenedSearchRecord) -> bool {
        self.time_bucket.is_none_or(|bucket| bucket.contains(&record.time_of_course))
    }
}
