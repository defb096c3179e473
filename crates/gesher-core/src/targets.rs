//! Expansion of a [`WatchConfig`] into the calendar pages checked each run.

use std::fmt;

use crate::watch::WatchConfig;

/// One (show, year, month) calendar page with its own state record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitoredTarget {
    pub show_id: u32,
    pub show_name: String,
    pub month: u8,
    pub year: i32,
    pub url: String,
}

impl fmt::Display for MonitoredTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}/{}", self.show_name, self.month, self.year)
    }
}

/// Builds the calendar page URL for one show and month.
#[must_use]
pub fn calendar_url(base_url: &str, show_id: u32, month: u8, year: i32) -> String {
    format!("{base_url}?Month={month}&Year={year}&ShowID={show_id}")
}

/// Expands `config` into targets: shows in configured order, then years in
/// configured order, then months ascending.
#[must_use]
pub fn generate_targets(config: &WatchConfig) -> Vec<MonitoredTarget> {
    let mut targets = Vec::new();
    for show in &config.shows {
        for &year in &config.years {
            for month in config.month_start..=config.month_end {
                targets.push(MonitoredTarget {
                    show_id: show.id,
                    show_name: show.name.clone(),
                    month,
                    year,
                    url: calendar_url(&config.calendar_base_url, show.id, month, year),
                });
            }
        }
    }
    targets
}
