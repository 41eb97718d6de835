pub mod course;
pub mod filter;
pub mod snapshot;
pub mod yoga_class;

pub use course::{Course, DayOfWeek};
pub use filter::{FilterState, TimeBucket};
pub use snapshot::{CourseEntry, CourseNode, CourseTree, Projection};
pub use yoga_class::{ClassOccurrence, FlattenedSearchRecord};
