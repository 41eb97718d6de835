pub mod catalog;
pub mod course_detail;
pub mod normalizer;
pub mod query_filter;
pub mod search_session;
pub mod subscription;

pub use catalog::{Catalog, CatalogFeed};
pub use course_detail::{CourseDetail, project_course_detail};
pub use search_session::SearchSession;
pub use subscription::{SnapshotSubscriber, Subscription};
