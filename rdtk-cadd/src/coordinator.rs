//! Parallel retrieval coordinator
//!
//! Runs one fetch per chunk on its own tokio task, with at most
//! `concurrency_limit` tasks in flight via `buffer_unordered`. Completed
//! results stream back in completion order to a single consumer loop, which
//! folds them into a [`SeriesMerger`]. A failed chunk is recorded and logged;
//! it never aborts the batch.

use crate::client::RangeFetcher;
use crate::error::FetchError;
use crate::interval::Chunk;
use crate::merge::{ChunkFailure, Retrieval, SeriesMerger};
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use std::time::Instant;

/// Default number of concurrent range requests
pub const DEFAULT_CONCURRENCY: usize = 10;

/// Fetch every chunk and merge the results
///
/// Returns once each chunk has either succeeded or failed. There is no early
/// return and no cancellation; a per-request timeout belongs to the fetcher.
/// A limit of zero is treated as one.
pub async fn retrieve_all<F>(
    fetcher: Arc<F>,
    chunks: Vec<Chunk>,
    concurrency_limit: usize,
) -> Retrieval
where
    F: RangeFetcher + ?Sized + 'static,
{
    let chunks_total = chunks.len();
    let workers = concurrency_limit.max(1);
    let start_time = Instant::now();

    tracing::info!(
        chunks = chunks_total,
        workers,
        "Retrieving CADD scores"
    );

    let mut completions = stream::iter(chunks)
        .map(move |chunk| {
            let fetcher = Arc::clone(&fetcher);
            let task_chunk = chunk.clone();
            let handle = tokio::spawn(async move { fetcher.fetch(&task_chunk).await });

            async move {
                let result = match handle.await {
                    Ok(result) => result,
                    Err(join_error) => Err(FetchError::TransportError(format!(
                        "fetch task aborted: {}",
                        join_error
                    ))),
                };
                (chunk, result)
            }
        })
        .buffer_unordered(workers);

    let mut merger = SeriesMerger::new(chunks_total);

    while let Some((chunk, result)) = completions.next().await {
        match result {
            Ok(records) => {
                tracing::debug!(
                    region = %chunk,
                    chunk_index = chunk.index,
                    records = records.len(),
                    "Chunk retrieved"
                );
                merger.absorb(records);
            }
            Err(error) => {
                tracing::warn!(
                    region = %chunk,
                    chunk_index = chunk.index,
                    error = %error,
                    "Chunk retrieval failed, continuing with remaining chunks"
                );
                merger.record_failure(ChunkFailure { chunk, error });
            }
        }
    }

    let retrieval = merger.finish();

    tracing::info!(
        chunks = chunks_total,
        succeeded = retrieval.chunks_succeeded,
        failed = retrieval.failures.len(),
        records = retrieval.record_count(),
        elapsed_ms = start_time.elapsed().as_millis() as u64,
        "CADD retrieval completed"
    );

    retrieval
}
