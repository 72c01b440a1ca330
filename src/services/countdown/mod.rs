mod error;
mod formatter;
mod models;
mod render;
mod service;

pub use error::CountdownError;
pub use formatter::{compute_duration, display_days, pluralize, render_days_remaining};
pub use models::{
    CountdownDuration, DEFAULT_TARGET_ID, MILLIS_PER_DAY, MILLIS_PER_HOUR, MILLIS_PER_MINUTE,
    MILLIS_PER_SECOND,
};
pub use render::{update_element_at, ElementMap, HtmlPage, TextSink};
pub use service::CountdownService;
