pub mod client;
pub mod error;
pub mod fetch;
pub mod markers;

pub use client::CalendarClient;
pub use error::ScraperError;
pub use fetch::PageFetcher;
pub use markers::{
    count_show_dates, tally_statuses, RegexMarkerMatcher, StatusTally, TicketMarkerMatcher,
    TicketStatus,
};
