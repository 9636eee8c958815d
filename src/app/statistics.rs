//! Run summary printing.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{ErrorKind, ScrapeStats};

/// Prints failure counts per error kind to the log.
///
/// Kinds with no failures are omitted; nothing is printed for a clean run.
pub fn print_error_statistics(stats: &ScrapeStats) {
    let total_errors = stats.total_errors();
    if total_errors == 0 {
        return;
    }

    info!("Error Counts ({} total):", total_errors);
    for kind in ErrorKind::iter() {
        let count = stats.get_error_count(kind);
        if count > 0 {
            info!("   {}: {}", kind.as_str(), count);
        }
    }
}

/// Prints a one-line summary of the run.
pub fn print_simple_summary(stats: &ScrapeStats, elapsed_seconds: f64) {
    let total = stats.total();
    info!(
        "Scraped {} URL{} ({} succeeded, {} failed) in {:.1}s",
        total,
        if total == 1 { "" } else { "s" },
        stats.successes(),
        stats.total_errors(),
        elapsed_seconds
    );
}
