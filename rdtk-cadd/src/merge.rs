//! Series merger
//!
//! Folds completed chunk results into two flat score series. The merger is
//! single-threaded: the coordinator feeds it from one consumer loop.

use crate::client::ScoreRecord;
use crate::error::FetchError;
use crate::interval::Chunk;

/// A chunk whose request did not succeed
#[derive(Debug, Clone, PartialEq)]
pub struct ChunkFailure {
    pub chunk: Chunk,
    pub error: FetchError,
}

/// Outcome of retrieving every chunk of an interval
///
/// `raw[i]` and `phred[i]` always come from the same record. Order follows
/// chunk completion, not genomic position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Retrieval {
    pub raw: Vec<f64>,
    pub phred: Vec<f64>,
    pub failures: Vec<ChunkFailure>,
    pub chunks_total: usize,
    pub chunks_succeeded: usize,
}

impl Retrieval {
    /// Number of records merged
    pub fn record_count(&self) -> usize {
        self.raw.len()
    }

    /// True when no record was merged, whether or not chunks failed
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Paired view of the merged series
    pub fn records(&self) -> impl Iterator<Item = ScoreRecord> + '_ {
        paired_records(&self.raw, &self.phred)
    }
}

/// Rebuild records from index-aligned raw and PHRED series
pub fn paired_records<'a>(
    raw: &'a [f64],
    phred: &'a [f64],
) -> impl Iterator<Item = ScoreRecord> + 'a {
    raw.iter()
        .zip(phred.iter())
        .map(|(&raw_score, &phred_score)| ScoreRecord {
            raw_score,
            phred_score,
        })
}

/// Accumulates chunk results in arrival order
#[derive(Debug, Default)]
pub struct SeriesMerger {
    retrieval: Retrieval,
}

impl SeriesMerger {
    pub fn new(chunks_total: usize) -> Self {
        Self {
            retrieval: Retrieval {
                chunks_total,
                ..Default::default()
            },
        }
    }

    /// Append one successful chunk's records to both series
    pub fn absorb(&mut self, records: Vec<ScoreRecord>) {
        self.retrieval.raw.reserve(records.len());
        self.retrieval.phred.reserve(records.len());
        for record in records {
            self.retrieval.raw.push(record.raw_score);
            self.retrieval.phred.push(record.phred_score);
        }
        self.retrieval.chunks_succeeded += 1;
    }

    pub fn record_failure(&mut self, failure: ChunkFailure) {
        self.retrieval.failures.push(failure);
    }

    pub fn finish(self) -> Retrieval {
        self.retrieval
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(raw_score: f64, phred_score: f64) -> ScoreRecord {
        ScoreRecord {
            raw_score,
            phred_score,
        }
    }

    #[test]
    fn test_absorb_keeps_pairs_in_arrival_order() {
        let mut merger = SeriesMerger::new(2);
        merger.absorb(vec![rec(3.0, 30.0), rec(4.0, 40.0)]);
        merger.absorb(vec![rec(1.0, 10.0)]);

        let retrieval = merger.finish();
        assert_eq!(retrieval.raw, vec![3.0, 4.0, 1.0]);
        assert_eq!(retrieval.phred, vec![30.0, 40.0, 10.0]);
        assert_eq!(retrieval.chunks_succeeded, 2);
        assert_eq!(retrieval.records().nth(2), Some(rec(1.0, 10.0)));
    }

    #[test]
    fn test_failures_do_not_touch_series() {
        let mut merger = SeriesMerger::new(1);
        merger.record_failure(ChunkFailure {
            chunk: Chunk {
                index: 0,
                chromosome: "1".to_string(),
                chunk_start: 0,
                chunk_end: 10,
            },
            error: FetchError::RequestFailed { status_code: 502 },
        });

        let retrieval = merger.finish();
        assert!(retrieval.is_empty());
        assert_eq!(retrieval.failures.len(), 1);
        assert_eq!(retrieval.chunks_succeeded, 0);
    }

    #[test]
    fn test_empty_success_counts_as_succeeded() {
        let mut merger = SeriesMerger::new(1);
        merger.absorb(Vec::new());
        let retrieval = merger.finish();
        assert!(retrieval.is_empty());
        assert_eq!(retrieval.chunks_succeeded, 1);
    }
}
