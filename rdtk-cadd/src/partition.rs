//! Range partitioner
//!
//! Splits an interval into fixed-size contiguous chunks so that each request
//! stays within the service's per-request range limit.

use crate::error::{CaddError, Result};
use crate::interval::{Chunk, Interval};

/// Default chunk width in base pairs
pub const DEFAULT_CHUNK_SIZE: u64 = 10_000;

/// Upper bound on the number of range requests for one interval
pub const MAX_CHUNKS: u64 = 1_000_000;

/// Number of chunks [`partition`] will produce
///
/// Fails with [`CaddError::InvalidInterval`] when the interval would need more
/// than [`MAX_CHUNKS`] requests.
pub fn chunk_count(interval: &Interval, chunk_size: u64) -> Result<u64> {
    if chunk_size == 0 {
        return Err(CaddError::InvalidChunkSize);
    }
    let count = interval.len().div_ceil(chunk_size);
    if count > MAX_CHUNKS {
        return Err(CaddError::InvalidInterval(format!(
            "{} spans {} chunks of {} bp, limit is {}",
            interval, count, chunk_size, MAX_CHUNKS
        )));
    }
    Ok(count)
}

/// Split `interval` into ascending, non-overlapping chunks of `chunk_size`
///
/// The last chunk may be shorter. An interval no longer than `chunk_size`
/// yields a single chunk equal to the interval.
pub fn partition(interval: &Interval, chunk_size: u64) -> Result<Vec<Chunk>> {
    chunk_count(interval, chunk_size)?;
    let mut chunks = Vec::new();

    let mut chunk_start = interval.start();
    while chunk_start < interval.end() {
        let chunk_end = chunk_start.saturating_add(chunk_size).min(interval.end());
        chunks.push(Chunk {
            index: chunks.len(),
            chromosome: interval.chromosome().to_string(),
            chunk_start,
            chunk_end,
        });
        chunk_start = chunk_end;
    }

    Ok(chunks)
}
