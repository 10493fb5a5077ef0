//! Debounced coordination for the medication lookup.
//!
//! The lookup function itself is supplied by the caller and runs
//! outside this crate. This module decides when to dispatch and which
//! completed result is still worth applying:
//! - input must be quiescent for the configured delay before a dispatch
//! - each dispatch carries a generation token
//! - a result applies only if its token is the latest and no newer
//!   input is pending, so the last query provably wins
//!
//! There are no retries; a failed lookup yields an empty result set.

use crate::config::SearchConfig;
use chrono::{DateTime, Duration, Utc};

/// A dispatch handed to the caller's async lookup
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LookupRequest {
    pub query: String,
    /// Token to pass back with the completed result
    pub generation: u64,
}

#[derive(Clone, Debug)]
struct PendingQuery {
    query: String,
    due_at: DateTime<Utc>,
}

/// Debounce state machine for one search input
///
/// The caller owns the clock and passes `now` in; nothing here reads
/// wall time, which keeps burst behavior reproducible in tests.
#[derive(Clone, Debug)]
pub struct DebouncedLookup {
    delay: Duration,
    min_query_len: usize,
    pending: Option<PendingQuery>,
    /// Token of the most recent dispatch; bumped to invalidate
    generation: u64,
}

impl DebouncedLookup {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            delay: Duration::milliseconds(config.debounce_ms as i64),
            min_query_len: config.min_query_len,
            pending: None,
            generation: 0,
        }
    }

    /// Record a keystroke
    ///
    /// Replaces any pending query and restarts the quiescence window.
    /// Queries below the minimum length clear the pending query and
    /// invalidate any in-flight lookup instead.
    pub fn note_input(&mut self, query: &str, now: DateTime<Utc>) {
        let query = query.trim();

        if query.chars().count() < self.min_query_len {
            self.pending = None;
            self.generation += 1;
            tracing::debug!("Query too short, lookup cancelled");
            return;
        }

        self.pending = Some(PendingQuery {
            query: query.to_string(),
            due_at: now + self.delay,
        });
    }

    /// Dispatch the pending query if its quiescence window has elapsed
    ///
    /// At most one dispatch per burst: the pending query is consumed
    /// and the generation token advances.
    pub fn poll(&mut self, now: DateTime<Utc>) -> Option<LookupRequest> {
        if self.pending.as_ref()?.due_at > now {
            return None;
        }

        let pending = self.pending.take()?;
        self.generation += 1;
        tracing::debug!(
            "Dispatching lookup generation {} for {:?}",
            self.generation,
            pending.query
        );
        Some(LookupRequest {
            query: pending.query,
            generation: self.generation,
        })
    }

    /// When the pending query becomes due, for shells that schedule a
    /// timer instead of polling every frame
    pub fn next_due(&self) -> Option<DateTime<Utc>> {
        self.pending.as_ref().map(|p| p.due_at)
    }

    /// Apply a completed lookup result
    ///
    /// Returns the results only when the token is the latest dispatched
    /// generation and no newer input is pending. Tokens are single-use:
    /// a successful apply retires the generation.
    pub fn accept<T>(&mut self, generation: u64, results: Vec<T>) -> Option<Vec<T>> {
        if generation != self.generation {
            tracing::debug!(
                "Ignoring stale lookup result (generation {}, current {})",
                generation,
                self.generation
            );
            return None;
        }
        if self.pending.is_some() {
            tracing::debug!("Ignoring superseded lookup result, newer query pending");
            return None;
        }

        self.generation += 1;
        Some(results)
    }

    /// Record a failed lookup: equivalent to an empty result set
    pub fn fail<T>(&mut self, generation: u64) -> Option<Vec<T>> {
        self.accept(generation, Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(ms: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(ms).unwrap()
    }

    fn test_lookup() -> DebouncedLookup {
        DebouncedLookup::new(&SearchConfig::default()) // 300ms delay, min len 2
    }

    #[test]
    fn test_no_dispatch_before_delay() {
        let mut lookup = test_lookup();
        lookup.note_input("aspirin", at(0));
        assert_eq!(lookup.next_due(), Some(at(300)));

        assert_eq!(lookup.poll(at(299)), None);
        let req = lookup.poll(at(300)).unwrap();
        assert_eq!(req.query, "aspirin");
    }

    #[test]
    fn test_burst_collapses_to_one_dispatch() {
        let mut lookup = test_lookup();
        lookup.note_input("as", at(0));
        lookup.note_input("asp", at(100));
        lookup.note_input("aspirin", at(200));

        // Still inside the quiescence window of the last keystroke
        assert_eq!(lookup.poll(at(400)), None);

        let req = lookup.poll(at(500)).unwrap();
        assert_eq!(req.query, "aspirin");

        // Nothing left to dispatch
        assert_eq!(lookup.poll(at(1000)), None);
    }

    #[test]
    fn test_result_applies_for_latest_generation() {
        let mut lookup = test_lookup();
        lookup.note_input("warfarin", at(0));
        let req = lookup.poll(at(300)).unwrap();

        let applied = lookup.accept(req.generation, vec!["Warfarin 5mg"]);
        assert_eq!(applied, Some(vec!["Warfarin 5mg"]));
    }

    #[test]
    fn test_stale_generation_rejected() {
        let mut lookup = test_lookup();
        lookup.note_input("asp", at(0));
        let old = lookup.poll(at(300)).unwrap();

        // User kept typing; a newer query dispatches
        lookup.note_input("aspirin", at(400));
        let new = lookup.poll(at(700)).unwrap();
        assert!(new.generation > old.generation);

        // The old in-flight result lost the race
        assert_eq!(lookup.accept(old.generation, vec!["Asparaginase"]), None);
        assert_eq!(
            lookup.accept(new.generation, vec!["Aspirin 81mg"]),
            Some(vec!["Aspirin 81mg"])
        );
    }

    #[test]
    fn test_result_rejected_while_newer_input_pending() {
        let mut lookup = test_lookup();
        lookup.note_input("asp", at(0));
        let req = lookup.poll(at(300)).unwrap();

        // New keystroke before the in-flight result lands
        lookup.note_input("aspirin", at(350));
        assert_eq!(lookup.accept(req.generation, vec!["Asparaginase"]), None);
    }

    #[test]
    fn test_short_query_cancels_everything() {
        let mut lookup = test_lookup();
        lookup.note_input("aspirin", at(0));
        let req = lookup.poll(at(300)).unwrap();

        // Input shrank below the minimum length
        lookup.note_input("a", at(400));
        assert_eq!(lookup.poll(at(1000)), None);
        assert_eq!(lookup.accept(req.generation, vec!["Aspirin 81mg"]), None);
    }

    #[test]
    fn test_tokens_are_single_use() {
        let mut lookup = test_lookup();
        lookup.note_input("ibuprofen", at(0));
        let req = lookup.poll(at(300)).unwrap();

        assert!(lookup.accept(req.generation, vec!["Ibuprofen"]).is_some());
        assert_eq!(lookup.accept(req.generation, vec!["Ibuprofen"]), None);
    }

    #[test]
    fn test_failed_lookup_yields_empty() {
        let mut lookup = test_lookup();
        lookup.note_input("zzzz", at(0));
        let req = lookup.poll(at(300)).unwrap();

        let applied: Option<Vec<String>> = lookup.fail(req.generation);
        assert_eq!(applied, Some(Vec::new()));
    }

    #[test]
    fn test_whitespace_trimmed() {
        let mut lookup = test_lookup();
        lookup.note_input("  metformin  ", at(0));
        let req = lookup.poll(at(300)).unwrap();
        assert_eq!(req.query, "metformin");
    }
}
