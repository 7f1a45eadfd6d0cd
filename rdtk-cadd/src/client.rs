//! CADD range-query client
//!
//! Issues one `GET {base_url}/{assembly}/{chrom}:{start}-{end}` per chunk and
//! parses the tabular JSON body into [`ScoreRecord`]s. The client never
//! retries; failures are classified into [`FetchError`] and handed back to the
//! coordinator.

use crate::error::{CaddError, FetchError};
use crate::interval::Chunk;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

/// Public CADD web service
pub const CADD_BASE_URL: &str = "https://cadd.gs.washington.edu/api/v1.0";
/// Genome build and CADD release queried by default
pub const DEFAULT_ASSEMBLY: &str = "GRCh38-v1.4";
/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!("rdtk-cadd/", env!("CARGO_PKG_VERSION"));

/// Column holding the raw (unscaled) CADD score
const RAW_SCORE_COLUMN: usize = 4;
/// Column holding the PHRED-scaled CADD score
const PHRED_SCORE_COLUMN: usize = 5;

/// One scored variant from a range response
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreRecord {
    pub raw_score: f64,
    pub phred_score: f64,
}

/// Fetches the score records of a single chunk
///
/// The coordinator only depends on this trait, so tests substitute stubs for
/// the network client.
#[async_trait]
pub trait RangeFetcher: Send + Sync {
    async fn fetch(&self, chunk: &Chunk) -> Result<Vec<ScoreRecord>, FetchError>;
}

/// reqwest-backed CADD client
pub struct CaddClient {
    http_client: reqwest::Client,
    base_url: String,
    assembly: String,
}

impl CaddClient {
    /// Create a client against `base_url` for `assembly`
    ///
    /// `timeout` bounds each request end to end; an expired request is
    /// reported as [`FetchError::TransportError`].
    pub fn new(base_url: &str, assembly: &str, timeout: Duration) -> Result<Self, CaddError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| CaddError::Client(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            assembly: assembly.trim_matches('/').to_string(),
        })
    }

    /// Client for the public service with default settings
    pub fn with_defaults() -> Result<Self, CaddError> {
        Self::new(CADD_BASE_URL, DEFAULT_ASSEMBLY, DEFAULT_TIMEOUT)
    }

    /// Range endpoint for a chunk
    pub fn range_url(&self, chunk: &Chunk) -> String {
        format!("{}/{}/{}", self.base_url, self.assembly, chunk)
    }
}

#[async_trait]
impl RangeFetcher for CaddClient {
    async fn fetch(&self, chunk: &Chunk) -> Result<Vec<ScoreRecord>, FetchError> {
        let url = self.range_url(chunk);

        tracing::debug!(region = %chunk, url = %url, "Querying CADD API");

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::TransportError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::RequestFailed {
                status_code: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::TransportError(e.to_string()))?;

        let records = parse_score_table(&body)?;

        tracing::debug!(region = %chunk, records = records.len(), "Retrieved CADD scores");

        Ok(records)
    }
}

/// Parse a CADD range response body
///
/// The body is a JSON array whose first element is a header row; every
/// following element is a row array with the raw score at index 4 and the
/// PHRED score at index 5. Scores may be JSON numbers or numeric strings.
/// An empty array yields no records.
pub fn parse_score_table(body: &[u8]) -> Result<Vec<ScoreRecord>, FetchError> {
    let table: Value = serde_json::from_slice(body)
        .map_err(|e| FetchError::MalformedResponse(format!("invalid JSON: {}", e)))?;

    let rows = table
        .as_array()
        .ok_or_else(|| FetchError::MalformedResponse("expected a JSON array".to_string()))?;

    rows.iter()
        .enumerate()
        .skip(1)
        .map(|(line, row)| parse_row(line, row))
        .collect()
}

fn parse_row(line: usize, row: &Value) -> Result<ScoreRecord, FetchError> {
    let cells = row.as_array().ok_or_else(|| {
        FetchError::MalformedResponse(format!("row {} is not an array", line))
    })?;

    if cells.len() <= PHRED_SCORE_COLUMN {
        return Err(FetchError::MalformedResponse(format!(
            "row {} has {} columns, expected at least {}",
            line,
            cells.len(),
            PHRED_SCORE_COLUMN + 1
        )));
    }

    Ok(ScoreRecord {
        raw_score: coerce_score(line, RAW_SCORE_COLUMN, &cells[RAW_SCORE_COLUMN])?,
        phred_score: coerce_score(line, PHRED_SCORE_COLUMN, &cells[PHRED_SCORE_COLUMN])?,
    })
}

fn coerce_score(line: usize, column: usize, cell: &Value) -> Result<f64, FetchError> {
    let parsed = match cell {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    parsed.ok_or_else(|| {
        FetchError::MalformedResponse(format!(
            "row {} column {} is not numeric: {}",
            line, column, cell
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk(start: u64, end: u64) -> Chunk {
        Chunk {
            index: 0,
            chromosome: "22".to_string(),
            chunk_start: start,
            chunk_end: end,
        }
    }

    #[test]
    fn test_range_url() {
        let client = CaddClient::new(
            "https://cadd.example.org/api/v1.0/",
            "GRCh38-v1.6",
            DEFAULT_TIMEOUT,
        )
        .unwrap();
        assert_eq!(
            client.range_url(&chunk(44044001, 44044002)),
            "https://cadd.example.org/api/v1.0/GRCh38-v1.6/22:44044001-44044002"
        );
    }

    #[test]
    fn test_default_client_targets_public_service() {
        let client = CaddClient::with_defaults().unwrap();
        assert_eq!(
            client.range_url(&chunk(1, 2)),
            "https://cadd.gs.washington.edu/api/v1.0/GRCh38-v1.4/22:1-2"
        );
    }

    #[test]
    fn test_parse_skips_header_and_coerces_strings() {
        let body = br#"[
            ["Chrom","Pos","Ref","Alt","RawScore","PHRED"],
            ["22","44044001","A","C","0.532","7.421"],
            ["22","44044001","A","G",-0.25,2.5]
        ]"#;

        let records = parse_score_table(body).unwrap();
        assert_eq!(
            records,
            vec![
                ScoreRecord { raw_score: 0.532, phred_score: 7.421 },
                ScoreRecord { raw_score: -0.25, phred_score: 2.5 },
            ]
        );
    }

    #[test]
    fn test_parse_header_only_and_empty() {
        assert!(parse_score_table(br#"[["Chrom","Pos","Ref","Alt","RawScore","PHRED"]]"#)
            .unwrap()
            .is_empty());
        assert!(parse_score_table(b"[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_short_row() {
        let body = br#"[["h"],["22","1","A","C","0.5"]]"#;
        match parse_score_table(body) {
            Err(FetchError::MalformedResponse(msg)) => assert!(msg.contains("columns")),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_non_numeric_cell() {
        let body = br#"[["h"],["22","1","A","C","n/a","3.0"]]"#;
        assert!(matches!(
            parse_score_table(body),
            Err(FetchError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_parse_rejects_non_array_body() {
        assert!(matches!(
            parse_score_table(br#"{"error":"too large"}"#),
            Err(FetchError::MalformedResponse(_))
        ));
        assert!(matches!(
            parse_score_table(b"<html>busy</html>"),
            Err(FetchError::MalformedResponse(_))
        ));
    }
}
