use futures::stream::{self, StreamExt};
use tokio::time::Instant;

use crate::{
    models::{Catalog, MovieRecord},
    services::providers::{LookupOutcome, MetadataProvider},
};

/// Why a catalog title produced no record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    NotFound,
    Transport,
    Parse,
    /// Still unresolved when the request deadline passed
    TimedOut,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScanFailure {
    pub title: String,
    pub kind: FailureKind,
    pub reason: String,
}

/// Everything a catalog scan resolved, in catalog order
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    pub records: Vec<MovieRecord>,
    pub failures: Vec<ScanFailure>,
    /// Whether the deadline cut the scan short
    pub timed_out: bool,
}

impl ScanReport {
    pub fn failure_count(&self, kind: FailureKind) -> usize {
        self.failures.iter().filter(|f| f.kind == kind).count()
    }
}

/// Looks up every catalog title and keeps the successful records
///
/// At most `concurrency` lookups are in flight at once. A failed lookup is
/// recorded in the report and never affects its siblings. The scan runs until
/// every title resolved or `deadline` passed; in the latter case the lookups
/// still in flight are dropped and the report holds what resolved in time.
/// Records are returned in catalog order whatever order responses arrive in.
pub async fn scan(
    provider: &dyn MetadataProvider,
    catalog: &Catalog,
    concurrency: usize,
    deadline: Instant,
) -> ScanReport {
    let titles = catalog.titles();
    let mut resolved: Vec<Option<LookupOutcome<MovieRecord>>> = vec![None; titles.len()];
    let mut timed_out = false;

    {
        let mut lookups = stream::iter(titles.iter().cloned().enumerate())
            .map(|(index, title)| async move { (index, provider.lookup_title(&title).await) })
            .buffer_unordered(concurrency.max(1));

        loop {
            match tokio::time::timeout_at(deadline, lookups.next()).await {
                Ok(Some((index, outcome))) => resolved[index] = Some(outcome),
                Ok(None) => break,
                Err(_) => {
                    timed_out = true;
                    break;
                }
            }
        }
    }

    let mut report = ScanReport {
        timed_out,
        ..ScanReport::default()
    };

    for (title, outcome) in titles.iter().zip(resolved) {
        let (kind, reason) = match outcome {
            Some(LookupOutcome::Found(record)) => {
                report.records.push(record);
                continue;
            }
            Some(LookupOutcome::NotFound(reason)) => (FailureKind::NotFound, reason),
            Some(LookupOutcome::TransportError(reason)) => (FailureKind::Transport, reason),
            Some(LookupOutcome::ParseError(reason)) => (FailureKind::Parse, reason),
            None => (FailureKind::TimedOut, "request deadline exceeded".to_string()),
        };

        tracing::debug!(
            title = %title,
            kind = ?kind,
            reason = %reason,
            "Dropping catalog candidate"
        );
        report.failures.push(ScanFailure {
            title: title.clone(),
            kind,
            reason,
        });
    }

    if report.timed_out {
        tracing::warn!(
            resolved = report.records.len(),
            unresolved = report.failure_count(FailureKind::TimedOut),
            "Catalog scan hit the request deadline, continuing with partial results"
        );
    }

    tracing::info!(
        catalog_size = titles.len(),
        found = report.records.len(),
        not_found = report.failure_count(FailureKind::NotFound),
        transport_errors = report.failure_count(FailureKind::Transport),
        parse_errors = report.failure_count(FailureKind::Parse),
        provider = provider.name(),
        "Catalog scan completed"
    );

    report
}
