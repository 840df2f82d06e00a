pub mod event;
pub mod summary;

pub use event::UsageEvent;
pub use summary::{format_minutes, CategorySummary};
