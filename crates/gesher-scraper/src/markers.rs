//! Ticket-status marker extraction for calendar pages.
//!
//! Each scheduled performance on a calendar page carries a button whose text
//! is either "purchasable" or "sold out". The signal tracked across runs is the
//! total number of such markers, i.e. the number of scheduled dates.

use regex::Regex;

use crate::error::ScraperError;

/// Hebrew button text for a performance with tickets on sale.
pub const HEBREW_PURCHASABLE: &str = "לרכישה";
/// Hebrew button text for a sold-out performance.
pub const HEBREW_SOLD_OUT: &str = "הכרטיסים אזלו";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketStatus {
    Purchasable,
    SoldOut,
}

/// Finds ticket-status markers in page content.
pub trait TicketMarkerMatcher {
    /// Status of every non-overlapping marker in `html`, in document order.
    fn statuses(&self, html: &str) -> Vec<TicketStatus>;
}

/// Matches markers rendered as element text, e.g. `<span> לרכישה </span>`.
#[derive(Debug, Clone)]
pub struct RegexMarkerMatcher {
    pattern: Regex,
}

impl RegexMarkerMatcher {
    /// Builds a matcher for the given literal marker texts.
    ///
    /// Both texts are matched verbatim between a closing `>` and an opening
    /// `<`, with optional surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidPattern`] if the combined pattern fails
    /// to compile (e.g., it exceeds the regex size limit).
    pub fn new(purchasable: &str, sold_out: &str) -> Result<Self, ScraperError> {
        let pattern = Regex::new(&format!(
            r">\s*(?:(?P<purchasable>{})|(?P<sold_out>{}))\s*<",
            regex::escape(purchasable),
            regex::escape(sold_out),
        ))?;
        Ok(Self { pattern })
    }

    /// The matcher for the theater's Hebrew calendar.
    ///
    /// # Panics
    ///
    /// Never in practice: the built-in marker texts always compile.
    #[must_use]
    pub fn hebrew() -> Self {
        Self::new(HEBREW_PURCHASABLE, HEBREW_SOLD_OUT).expect("valid built-in marker pattern")
    }
}

impl Default for RegexMarkerMatcher {
    fn default() -> Self {
        Self::hebrew()
    }
}

impl TicketMarkerMatcher for RegexMarkerMatcher {
    fn statuses(&self, html: &str) -> Vec<TicketStatus> {
        self.pattern
            .captures_iter(html)
            .map(|caps| {
                if caps.name("purchasable").is_some() {
                    TicketStatus::Purchasable
                } else {
                    TicketStatus::SoldOut
                }
            })
            .collect()
    }
}

/// Per-status breakdown of the markers on one page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusTally {
    pub purchasable: usize,
    pub sold_out: usize,
}

impl StatusTally {
    #[must_use]
    pub fn total(&self) -> usize {
        self.purchasable + self.sold_out
    }
}

/// Counts scheduled dates on a calendar page.
///
/// Carriage returns are stripped first so `\r\n` and `\n` pages count the
/// same. Purchasable and sold-out markers both count.
#[must_use]
pub fn count_show_dates<M: TicketMarkerMatcher + ?Sized>(html: &str, matcher: &M) -> usize {
    matcher.statuses(&normalize_line_endings(html)).len()
}

/// Counts markers on a calendar page, split by status.
#[must_use]
pub fn tally_statuses<M: TicketMarkerMatcher + ?Sized>(html: &str, matcher: &M) -> StatusTally {
    matcher
        .statuses(&normalize_line_endings(html))
        .into_iter()
        .fold(StatusTally::default(), |mut tally, status| {
            match status {
                TicketStatus::Purchasable => tally.purchasable += 1,
                TicketStatus::SoldOut => tally.sold_out += 1,
            }
            tally
        })
}

fn normalize_line_endings(html: &str) -> String {
    html.replace('\r', "")
}

#[cfg(test)]
#[path = "markers_test.rs"]
mod tests;
