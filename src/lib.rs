pub mod calendar;
pub mod chart;
pub mod geometry;
pub mod grid;
pub mod item;
pub mod ordering;
pub mod progress;
pub mod records;
pub mod status;
pub mod timeline;

pub use calendar::WorkCalendar;
pub use chart::{ChartModel, build_chart_model};
pub use item::ScopeItem;
pub use status::ProjectStatus;
pub use timeline::TimelineWindow;
