//! The per-run diff loop: fetch each calendar page, count its scheduled dates,
//! compare with the stored signal, record the new value, and send one message
//! summarising every notable change.
//!
//! Targets are processed sequentially and independently; a failed fetch for
//! one target is recorded as `FETCH_ERROR` and never stops the others.

use gesher_core::{MonitoredTarget, Signal};
use gesher_scraper::{count_show_dates, tally_statuses, PageFetcher, TicketMarkerMatcher};

use crate::notify::Notifier;
use crate::state::StateStore;

/// Leading word of every notification message.
pub(crate) const MESSAGE_PREFIX: &str = "Gesher";

/// How a target's signal moved between the previous run and this one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Transition {
    Unchanged,
    /// First observation for this target.
    Init { initial: Signal },
    FetchFail { was: usize },
    Recover { dates: usize },
    Change { was: usize, dates: usize },
}

impl Transition {
    /// Whether this transition is reported to the notifier.
    pub(crate) fn is_notable(self) -> bool {
        matches!(
            self,
            Transition::FetchFail { .. } | Transition::Recover { .. } | Transition::Change { .. }
        )
    }
}

/// Classifies the move from `old` (`None` if never seen) to `new`.
///
/// Rules are checked in order: equal, never seen, fetch failed, recovered
/// from a failure, count changed.
pub(crate) fn classify(old: Option<Signal>, new: Signal) -> Transition {
    match (old, new) {
        (Some(old), new) if old == new => Transition::Unchanged,
        (None, initial) => Transition::Init { initial },
        (Some(Signal::Count(was)), Signal::FetchError) => Transition::FetchFail { was },
        (Some(Signal::FetchError), Signal::Count(dates)) => Transition::Recover { dates },
        (Some(Signal::Count(was)), Signal::Count(dates)) => Transition::Change { was, dates },
        // Equal signals are caught by the first arm.
        (Some(Signal::FetchError), Signal::FetchError) => Transition::Unchanged,
    }
}

/// A notable transition for one target, reported at the end of the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ChangeEvent {
    pub target: String,
    pub transition: Transition,
}

impl ChangeEvent {
    /// One-line human description used in the notification message.
    ///
    /// Events are only built from notable transitions.
    pub(crate) fn description(&self) -> String {
        let target = &self.target;
        match self.transition {
            Transition::FetchFail { .. } => format!("FETCH_FAIL: {target}"),
            Transition::Recover { dates } => format!("{target}: {dates} dates (recovered)"),
            Transition::Change { was, dates } => format!("{target}: {dates} dates (was {was})"),
            Transition::Unchanged | Transition::Init { .. } => {
                unreachable!("{target}: {:?} is not notable", self.transition)
            }
        }
    }
}

/// Counts for one completed run.
#[derive(Debug, Default)]
pub(crate) struct RunSummary {
    pub checked: usize,
    pub unchanged: usize,
    pub initialized: usize,
    pub unavailable: usize,
    pub events: Vec<ChangeEvent>,
}

/// Builds the single notification message for a run, or `None` if nothing
/// notable happened.
///
/// One event gives `Gesher: <description>`; several give a header with the
/// count followed by one `- <description>` line per event.
pub(crate) fn compose_message(events: &[ChangeEvent]) -> Option<String> {
    match events {
        [] => None,
        [only] => Some(format!("{MESSAGE_PREFIX}: {}", only.description())),
        many => {
            let mut message = format!("{MESSAGE_PREFIX}: {} schedules updated:", many.len());
            for event in many {
                message.push_str("\n- ");
                message.push_str(&event.description());
            }
            Some(message)
        }
    }
}

/// Runs one monitoring pass over `targets`.
///
/// Every target's state record is written before the notifier is called, so
/// a notifier error never loses observed state. The notifier is not touched
/// when there is nothing to report.
///
/// # Errors
///
/// Returns an error if the state directory or a state record cannot be
/// accessed, or if the notifier reports a configuration error.
pub(crate) async fn run_monitor<F, M, N>(
    targets: &[MonitoredTarget],
    fetcher: &F,
    matcher: &M,
    store: &StateStore,
    notifier: &N,
) -> anyhow::Result<RunSummary>
where
    F: PageFetcher,
    M: TicketMarkerMatcher,
    N: Notifier,
{
    store.ensure_dir()?;
    tracing::info!(
        targets = targets.len(),
        state_dir = %store.dir().display(),
        "running gesher-watch"
    );

    let mut summary = RunSummary::default();

    for target in targets {
        summary.checked += 1;

        let new = match fetcher.fetch(&target.url).await {
            Some(html) => {
                if tracing::enabled!(tracing::Level::DEBUG) {
                    let tally = tally_statuses(&html, matcher);
                    tracing::debug!(
                        page = %target,
                        purchasable = tally.purchasable,
                        sold_out = tally.sold_out,
                        "ticket markers"
                    );
                }
                Signal::Count(count_show_dates(&html, matcher))
            }
            None => {
                summary.unavailable += 1;
                Signal::FetchError
            }
        };

        let old = store.read(&target.url)?;
        let transition = classify(old, new);

        if transition == Transition::Unchanged {
            tracing::debug!(page = %target, signal = %new, "unchanged");
            summary.unchanged += 1;
            continue;
        }

        store.write(&target.url, new)?;

        match transition {
            Transition::Init { initial } => {
                tracing::info!("INIT {target} [show_dates={initial}]");
                summary.initialized += 1;
            }
            Transition::FetchFail { was } => tracing::info!(was, "FETCH_FAIL {target}"),
            Transition::Recover { dates } => tracing::info!("RECOVER {target}: now {dates} dates"),
            Transition::Change { was, dates } => {
                tracing::info!("CHANGE {target}: now {dates} dates (was {was})");
            }
            Transition::Unchanged => {}
        }

        if transition.is_notable() {
            summary.events.push(ChangeEvent {
                target: target.to_string(),
                transition,
            });
        }
    }

    if let Some(message) = compose_message(&summary.events) {
        notifier.notify(&message).await?;
    }

    tracing::info!(
        checked = summary.checked,
        unchanged = summary.unchanged,
        initialized = summary.initialized,
        unavailable = summary.unavailable,
        changes = summary.events.len(),
        "run complete"
    );

    Ok(summary)
}

#[cfg(test)]
#[path = "monitor_test.rs"]
mod tests;
