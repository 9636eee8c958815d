//! Scrape outcome statistics.
//!
//! Thread-safe counters of successes and failures per `ErrorKind`, shared across
//! concurrently running scrapes.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::{ErrorKind, ScrapeError};

/// Thread-safe scrape outcome tracker.
///
/// All error kinds are initialized to zero on creation. Share it across tasks
/// with `Arc`.
pub struct ScrapeStats {
    successes: AtomicUsize,
    errors: HashMap<ErrorKind, AtomicUsize>,
}

impl Default for ScrapeStats {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrapeStats {
    /// Creates a tracker with every counter at zero.
    pub fn new() -> Self {
        let errors = ErrorKind::iter()
            .map(|kind| (kind, AtomicUsize::new(0)))
            .collect();

        ScrapeStats {
            successes: AtomicUsize::new(0),
            errors,
        }
    }

    /// Counts one successful scrape.
    pub fn record_success(&self) {
        self.successes.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment the counter for the kind of `error`.
    pub fn record_error(&self, error: &ScrapeError) {
        self.increment_error(error.kind());
    }

    /// Increment the counter for `kind`.
    pub fn increment_error(&self, kind: ErrorKind) {
        if let Some(counter) = self.errors.get(&kind) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment error counter for {:?} which is not in the map. \
                 This indicates a bug in ScrapeStats initialization.",
                kind
            );
        }
    }

    /// Number of successful scrapes.
    pub fn successes(&self) -> usize {
        self.successes.load(Ordering::SeqCst)
    }

    /// Get the count for an error kind.
    pub fn get_error_count(&self, kind: ErrorKind) -> usize {
        self.errors
            .get(&kind)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Number of failed scrapes, all kinds.
    pub fn total_errors(&self) -> usize {
        self.errors.values().map(|c| c.load(Ordering::SeqCst)).sum()
    }

    /// Number of scrapes recorded.
    pub fn total(&self) -> usize {
        self.successes() + self.total_errors()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_scrape_stats_initialization() {
        let stats = ScrapeStats::new();
        for kind in ErrorKind::iter() {
            assert_eq!(stats.get_error_count(kind), 0);
        }
        assert_eq!(stats.successes(), 0);
        assert_eq!(stats.total(), 0);
    }

    #[test]
    fn test_scrape_stats_records_outcomes() {
        let stats = ScrapeStats::new();
        stats.record_success();
        stats.record_error(&ScrapeError::AccessDenied);
        stats.record_error(&ScrapeError::AccessDenied);
        stats.record_error(&ScrapeError::ScrapeFailed("boom".into()));

        assert_eq!(stats.successes(), 1);
        assert_eq!(stats.get_error_count(ErrorKind::AccessDenied), 2);
        assert_eq!(stats.get_error_count(ErrorKind::ScrapeFailed), 1);
        assert_eq!(stats.get_error_count(ErrorKind::Timeout), 0);
        assert_eq!(stats.total_errors(), 3);
        assert_eq!(stats.total(), 4);
    }

    #[test]
    fn test_scrape_stats_concurrent_increments() {
        let stats = Arc::new(ScrapeStats::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let stats = Arc::clone(&stats);
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        stats.increment_error(ErrorKind::Timeout);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("thread panicked");
        }
        assert_eq!(stats.get_error_count(ErrorKind::Timeout), 800);
    }
}
