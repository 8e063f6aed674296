// Copyright (C) 2026 Launchpad Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Concurrency utilities for running futures with controlled parallelism.

use futures::stream::{FuturesUnordered, StreamExt};
use std::future::Future;
use std::sync::Arc;
use tokio::sync::Semaphore;

/// Runs at most `max_concurrent` tasks at once and waits for all of them.
///
/// Outputs come back in input order regardless of completion order. A task
/// that fails does not stop the others; failures are just outputs here.
pub async fn run_with_concurrency_settled<F, O>(
    max_concurrent: usize,
    tasks: impl IntoIterator<Item = F>,
) -> Vec<O>
where
    F: Future<Output = O>,
{
    let semaphore = Arc::new(Semaphore::new(max_concurrent.max(1)));
    let mut futs = FuturesUnordered::new();

    for (idx, task) in tasks.into_iter().enumerate() {
        let sem = semaphore.clone();
        futs.push(async move {
            let _permit = sem.acquire().await.expect("semaphore closed unexpectedly");
            (idx, task.await)
        });
    }

    let mut indexed = Vec::with_capacity(futs.len());
    while let Some(result) = futs.next().await {
        indexed.push(result);
    }
    indexed.sort_by_key(|(idx, _)| *idx);
    indexed.into_iter().map(|(_, val)| val).collect()
}
