//! Industry table fetching.
//!
//! Iterates a symbol list in order, performing one profile lookup per
//! symbol. The fetch as a whole never fails: a failed lookup degrades that
//! row to sentinel values and the loop carries on, so the output always has
//! exactly one record per input symbol, in input order.

use crate::error::Result;
use crate::yahoo::CompanyProfile;
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;

/// Field value used when the provider omits a field.
pub const MISSING_FIELD: &str = "N/A";

/// Company name used for rows whose lookup failed.
pub const ERROR_SENTINEL: &str = "Error";

/// One row of the fetched industry table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndustryRecord {
    /// Company name, `"N/A"` when absent, `"Error"` when the lookup failed.
    pub company_name: String,
    /// Exchange-qualified symbol the lookup was performed for.
    pub symbol: String,
    /// Industry classification, `"N/A"` when absent; on lookup failure this
    /// carries the failure's message text instead.
    pub industry: String,
}

/// Profile lookup seam, implemented by [`crate::yahoo::YahooProfileProvider`].
pub trait ProfileProvider {
    /// Look up the company profile for one exchange-qualified symbol.
    fn company_profile(
        &self,
        symbol: &str,
    ) -> impl Future<Output = Result<CompanyProfile>> + Send;
}

/// Pacing applied between per-symbol lookups.
///
/// Pacing structures the cadence of the loop only; it never changes the
/// output table. Both policies produce identical records for identical
/// lookup responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacingPolicy {
    /// Process the full list in one uninterrupted pass.
    Unthrottled,
    /// Partition the list into fixed-size batches and pause after every
    /// single item.
    Throttled {
        /// Fixed pause after each lookup.
        per_item_delay: Duration,
        /// Number of symbols per batch (the last batch may be smaller).
        batch_size: usize,
    },
}

impl PacingPolicy {
    /// The throttled policy with the historical defaults (500 ms, 50).
    pub const fn throttled_default() -> Self {
        Self::Throttled {
            per_item_delay: Duration::from_millis(500),
            batch_size: 50,
        }
    }
}

async fn lookup_one<P: ProfileProvider>(provider: &P, symbol: &str) -> IndustryRecord {
    match provider.company_profile(symbol).await {
        Ok(profile) => IndustryRecord {
            company_name: profile
                .long_name
                .unwrap_or_else(|| MISSING_FIELD.to_string()),
            symbol: symbol.to_string(),
            industry: profile.industry.unwrap_or_else(|| MISSING_FIELD.to_string()),
        },
        Err(e) => IndustryRecord {
            company_name: ERROR_SENTINEL.to_string(),
            symbol: symbol.to_string(),
            industry: e.to_string(),
        },
    }
}

/// Fetch the industry table for `symbols`, in input order.
///
/// After each item, `on_progress` receives `(items processed) / (total)`,
/// ending at exactly `1.0`; an empty input produces no callbacks. This
/// operation cannot fail and returns exactly `symbols.len()` records.
pub async fn fetch_industry<P, F>(
    provider: &P,
    symbols: &[String],
    pacing: PacingPolicy,
    mut on_progress: F,
) -> Vec<IndustryRecord>
where
    P: ProfileProvider,
    F: FnMut(f64),
{
    let total = symbols.len();
    let mut records = Vec::with_capacity(total);

    match pacing {
        PacingPolicy::Unthrottled => {
            for symbol in symbols {
                records.push(lookup_one(provider, symbol).await);
                on_progress(records.len() as f64 / total as f64);
            }
        }
        PacingPolicy::Throttled {
            per_item_delay,
            batch_size,
        } => {
            for batch in symbols.chunks(batch_size.max(1)) {
                for symbol in batch {
                    records.push(lookup_one(provider, symbol).await);
                    on_progress(records.len() as f64 / total as f64);
                    sleep(per_item_delay).await;
                }
            }
        }
    }

    records
}
