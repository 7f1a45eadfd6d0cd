//! Analysis entry point
//!
//! [`CaddAnalyzer`] runs the whole pipeline for one interval:
//! partition → parallel retrieval → merge → mean → classification.
//! Callers either await [`CaddAnalyzer::analyze`] or hand the request off with
//! [`CaddAnalyzer::submit`] and await the returned task handle later.
//! No state survives between runs.

use crate::classify::SummaryResult;
use crate::client::{CaddClient, RangeFetcher, ScoreRecord};
use crate::config::CaddConfig;
use crate::coordinator::retrieve_all;
use crate::error::{CaddError, Result};
use crate::interval::Interval;
use crate::merge::{paired_records, ChunkFailure};
use crate::partition::partition;
use chrono::{DateTime, Utc};
use std::fmt::Write as _;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;

/// A validated request to score one interval
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRequest {
    pub interval: Interval,
}

impl AnalysisRequest {
    /// Validate free-text input
    ///
    /// Fails with [`CaddError::InvalidInterval`] before any network activity.
    pub fn parse(chromosome: &str, start: &str, end: &str) -> Result<Self> {
        Ok(Self {
            interval: Interval::parse(chromosome, start, end)?,
        })
    }
}

impl From<Interval> for AnalysisRequest {
    fn from(interval: Interval) -> Self {
        Self { interval }
    }
}

/// Result of one analysis run
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub interval: Interval,
    pub summary: SummaryResult,
    /// Raw scores in retrieval-completion order
    pub raw_scores: Vec<f64>,
    /// PHRED scores, index-aligned with `raw_scores`
    pub phred_scores: Vec<f64>,
    pub failures: Vec<ChunkFailure>,
    pub chunks_total: usize,
    pub requested_at: DateTime<Utc>,
    pub elapsed: Duration,
}

impl AnalysisReport {
    /// True when no variant scores were retrieved ("no variants found")
    pub fn is_empty(&self) -> bool {
        self.raw_scores.is_empty() || self.phred_scores.is_empty()
    }

    /// Summary, or [`CaddError::EmptyResult`] when nothing was retrieved
    pub fn require_scores(&self) -> Result<&SummaryResult> {
        if self.is_empty() {
            return Err(CaddError::EmptyResult {
                chunks_total: self.chunks_total,
                chunks_failed: self.failures.len(),
            });
        }
        Ok(&self.summary)
    }

    /// Paired per-record view
    pub fn records(&self) -> impl Iterator<Item = ScoreRecord> + '_ {
        paired_records(&self.raw_scores, &self.phred_scores)
    }

    /// "N of M chunks failed", when any did
    pub fn failure_summary(&self) -> Option<String> {
        if self.failures.is_empty() {
            return None;
        }
        Some(format!(
            "{} of {} chunks failed",
            self.failures.len(),
            self.chunks_total
        ))
    }

    /// Text report for display
    pub fn render(&self) -> String {
        let mut text = String::new();

        match self.require_scores() {
            Ok(summary) => {
                if let Some(mean_raw) = summary.mean_raw {
                    let _ = writeln!(
                        text,
                        "Average CADD RawScore for {}: {:.4}",
                        self.interval, mean_raw
                    );
                }
                if let Some(mean_phred) = summary.mean_phred {
                    let _ = writeln!(
                        text,
                        "Average CADD PHRED score for {}: {:.4}",
                        self.interval, mean_phred
                    );
                }
                text.push('\n');
                text.push_str(&summary.interpretation());
            }
            Err(_) => text.push_str("No variants found in the specified range.\n"),
        }

        if let Some(line) = self.failure_summary() {
            let _ = writeln!(text, "\nWarning: {}; results cover the remaining chunks.", line);
            for failure in &self.failures {
                let _ = writeln!(text, "  - {}: {}", failure.chunk, failure.error);
            }
        }

        text
    }
}

/// Runs CADD analyses against a range fetcher
#[derive(Clone)]
pub struct CaddAnalyzer {
    fetcher: Arc<dyn RangeFetcher>,
    chunk_size: u64,
    concurrency_limit: usize,
}

impl CaddAnalyzer {
    /// Analyzer backed by the HTTP client described by `config`
    pub fn from_config(config: &CaddConfig) -> Result<Self> {
        config.validate()?;
        let client = CaddClient::new(&config.base_url, &config.assembly, config.request_timeout())?;
        Self::with_fetcher(Arc::new(client), config.chunk_size, config.concurrency_limit)
    }

    /// Analyzer over any fetcher
    pub fn with_fetcher(
        fetcher: Arc<dyn RangeFetcher>,
        chunk_size: u64,
        concurrency_limit: usize,
    ) -> Result<Self> {
        if chunk_size == 0 {
            return Err(CaddError::InvalidChunkSize);
        }
        Ok(Self {
            fetcher,
            chunk_size,
            concurrency_limit: concurrency_limit.max(1),
        })
    }

    pub fn chunk_size(&self) -> u64 {
        self.chunk_size
    }

    pub fn concurrency_limit(&self) -> usize {
        self.concurrency_limit
    }

    /// Score one interval
    ///
    /// Partial chunk failures are reported in the returned report rather than
    /// as an error; an empty report is the "no variants found" state.
    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisReport> {
        let requested_at = Utc::now();
        let start_time = Instant::now();
        let interval = request.interval.clone();

        let chunks = partition(&interval, self.chunk_size)?;
        let chunks_total = chunks.len();

        tracing::info!(
            interval = %interval,
            chunk_size = self.chunk_size,
            chunks = chunks_total,
            "Starting CADD analysis"
        );

        let retrieval = retrieve_all(Arc::clone(&self.fetcher), chunks, self.concurrency_limit).await;
        let summary = SummaryResult::from_series(&retrieval.raw, &retrieval.phred);

        let report = AnalysisReport {
            interval,
            summary,
            raw_scores: retrieval.raw,
            phred_scores: retrieval.phred,
            failures: retrieval.failures,
            chunks_total,
            requested_at,
            elapsed: start_time.elapsed(),
        };

        if report.is_empty() {
            tracing::info!(
                interval = %report.interval,
                failed = report.failures.len(),
                "No variants found"
            );
        } else {
            tracing::info!(
                interval = %report.interval,
                records = report.raw_scores.len(),
                mean_phred = ?report.summary.mean_phred,
                phred_category = %report.summary.phred_category,
                "CADD analysis completed"
            );
        }

        Ok(report)
    }

    /// Run an analysis on a background task
    pub fn submit(&self, request: AnalysisRequest) -> JoinHandle<Result<AnalysisReport>> {
        let analyzer = self.clone();
        tokio::spawn(async move { analyzer.analyze(&request).await })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use crate::interval::Chunk;

    fn report(raw: Vec<f64>, phred: Vec<f64>, failures: Vec<ChunkFailure>) -> AnalysisReport {
        AnalysisReport {
            interval: Interval::new("22", 44044001, 44064002).unwrap(),
            summary: SummaryResult::from_series(&raw, &phred),
            raw_scores: raw,
            phred_scores: phred,
            failures,
            chunks_total: 3,
            requested_at: Utc::now(),
            elapsed: Duration::from_millis(5),
        }
    }

    fn failure(index: usize) -> ChunkFailure {
        ChunkFailure {
            chunk: Chunk {
                index,
                chromosome: "22".to_string(),
                chunk_start: 44054001,
                chunk_end: 44064001,
            },
            error: FetchError::RequestFailed { status_code: 504 },
        }
    }

    #[test]
    fn test_request_parse_rejects_bad_input() {
        assert!(matches!(
            AnalysisRequest::parse("22", "abc", "10"),
            Err(CaddError::InvalidInterval(_))
        ));
        assert!(matches!(
            AnalysisRequest::parse("22", "10", "10"),
            Err(CaddError::InvalidInterval(_))
        ));
        assert!(AnalysisRequest::parse("22", "44044001", "44044002").is_ok());
    }

    #[test]
    fn test_render_scored_report() {
        let text = report(vec![0.25, 0.75], vec![12.0, 14.0], Vec::new()).render();
        assert!(text.contains("Average CADD RawScore for 22:44044001-44064002: 0.5000"));
        assert!(text.contains("Average CADD PHRED score for 22:44044001-44064002: 13.0000"));
        assert!(text.contains("potentially deleterious"));
        assert!(!text.contains("chunks failed"));
    }

    #[test]
    fn test_render_empty_report() {
        let empty = report(Vec::new(), Vec::new(), vec![failure(1)]);
        assert!(empty.is_empty());
        assert!(matches!(
            empty.require_scores(),
            Err(CaddError::EmptyResult {
                chunks_total: 3,
                chunks_failed: 1
            })
        ));

        let text = empty.render();
        assert!(text.starts_with("No variants found in the specified range."));
        assert!(!text.contains("Average"));
        assert!(text.contains("1 of 3 chunks failed"));
        assert!(text.contains("22:44054001-44064001: Request failed with HTTP 504"));
    }

    #[test]
    fn test_partial_failure_is_reported_with_scores() {
        let partial = report(vec![1.0], vec![25.0], vec![failure(1)]);
        assert!(partial.require_scores().is_ok());
        assert_eq!(partial.failure_summary().as_deref(), Some("1 of 3 chunks failed"));
        assert!(partial.render().contains("likely deleterious"));
    }

    #[test]
    fn test_records_pair_series() {
        let scored = report(vec![0.25, 0.75], vec![12.0, 14.0], Vec::new());
        let records: Vec<ScoreRecord> = scored.records().collect();
        assert_eq!(
            records,
            vec![
                ScoreRecord { raw_score: 0.25, phred_score: 12.0 },
                ScoreRecord { raw_score: 0.75, phred_score: 14.0 },
            ]
        );
    }

    struct UnreachableFetcher;

    #[async_trait::async_trait]
    impl RangeFetcher for UnreachableFetcher {
        async fn fetch(&self, _chunk: &Chunk) -> std::result::Result<Vec<ScoreRecord>, FetchError> {
            panic!("no request expected");
        }
    }

    #[tokio::test]
    async fn test_oversized_interval_fails_before_fetching() {
        let analyzer = CaddAnalyzer::with_fetcher(Arc::new(UnreachableFetcher), 1, 4).unwrap();
        let request = AnalysisRequest::parse("1", "0", "18446744073709551615").unwrap();

        assert!(matches!(
            analyzer.analyze(&request).await,
            Err(CaddError::InvalidInterval(_))
        ));
    }

    #[test]
    fn test_zero_chunk_size_rejected() {
        let client = CaddClient::with_defaults().unwrap();
        assert!(matches!(
            CaddAnalyzer::with_fetcher(Arc::new(client), 0, 10),
            Err(CaddError::InvalidChunkSize)
        ));
    }
}
