use tracing::debug;

use crate::models::{CourseTree, DayOfWeek, FilterState, FlattenedSearchRecord, TimeBucket};
use crate::services::{normalizer, query_filter};

/// State behind one open search screen. Every input change replaces the
/// affected input and recomputes the visible list from scratch.
#[derive(Debug, Default)]
pub struct SearchSession {
    all: Vec<FlattenedSearchRecord>,
    filters: FilterState,
    filtered: Vec<FlattenedSearchRecord>,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filters(filters: FilterState) -> Self {
        Self {
            filters,
            ..Self::default()
        }
    }

    /// Replaces, never merges with, the previous snapshot.
    pub fn replace_snapshot(&mut self, tree: &CourseTree) {
        self.all = normalizer::to_flattened_class_list(tree);
        self.recompute();
    }

    pub fn replace_records(&mut self, records: Vec<FlattenedSearchRecord>) {
        self.all = records;
        self.recompute();
    }

    pub fn set_filters(&mut self, filters: FilterState) {
        self.filters = filters;
        self.recompute();
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.filters.search_text = text.into();
        self.recompute();
    }

    pub fn set_day_of_week(&mut self, day: Option<DayOfWeek>) {
        self.filters.day_of_week = day;
        self.recompute();
    }

    pub fn set_time_bucket(&mut self, bucket: Option<TimeBucket>) {
        self.filters.time_bucket = bucket;
        self.recompute();
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn all(&self) -> &[FlattenedSearchRecord] {
        &self.all
    }

    pub fn results(&self) -> &[FlattenedSearchRecord] {
        &self.filtered
    }

    pub fn into_results(self) -> Vec<FlattenedSearchRecord> {
        self.filtered
    }

    /// Nothing matches. Not a fault.
    pub fn no_results(&self) -> bool {
        self.filtered.is_empty()
    }

    fn recompute(&mut self) {
        self.filtered = query_filter::apply(&self.all, &self.filters);
        debug!("search recomputed: {} of {} classes", self.filtered.len(), self.all.len());
    }
}
