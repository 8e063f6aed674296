// Copyright (C) 2026 Launchpad Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use lazy_static::lazy_static;
use prometheus::{Counter, CounterVec, Encoder, HistogramOpts, HistogramVec, Opts, Registry, TextEncoder};
use std::sync::{Mutex, Once};

lazy_static! {
    pub static ref REGISTRY: Mutex<Option<Registry>> = Mutex::new(None);
    static ref INIT_ONCE: Once = Once::new();

    // Created without registering to the default registry
    pub static ref HTTP_REQUESTS: Counter = Counter::new(
        "http_requests",
        "Total number of HTTP requests"
    )
    .expect("Failed to create http_requests counter");

    pub static ref HTTP_REQUEST_SUCCESS: Counter = Counter::new(
        "http_request_success",
        "Number of successful HTTP requests"
    )
    .expect("Failed to create http_request_success counter");

    pub static ref HTTP_REQUEST_ERROR: Counter = Counter::new(
        "http_request_error",
        "Number of HTTP request errors"
    )
    .expect("Failed to create http_request_error counter");

    pub static ref REQUEST_DURATION_SECONDS: HistogramVec = HistogramVec::new(
        HistogramOpts::new(
            "request_duration_seconds",
            "Duration of HTTP requests in seconds"
        ).buckets(vec![0.1, 0.5, 1.0, 1.5, 2.0, 3.0, 4.0, 5.0]),
        &["method", "route", "status_code"]
    )
    .expect("Failed to create request_duration_seconds histogram");

    pub static ref CONTRACT_QUERIES: CounterVec = CounterVec::new(
        Opts::new("contract_queries", "Contract view calls issued"),
        &["function"]
    )
    .expect("Failed to create contract_queries counter");

    pub static ref CONTRACT_QUERY_FAILURES: CounterVec = CounterVec::new(
        Opts::new("contract_query_failures", "Contract view calls that failed at the network level"),
        &["function"]
    )
    .expect("Failed to create contract_query_failures counter");

    pub static ref DECODE_FAILURES: CounterVec = CounterVec::new(
        Opts::new("decode_failures", "Contract responses that did not match their layout"),
        &["endpoint"]
    )
    .expect("Failed to create decode_failures counter");
}

#[derive(Debug, thiserror::Error)]
pub enum MetricsGatherError {
    #[error("Metrics not initialized")]
    NotInitialized,

    #[error("Failed to encode metrics: {0}")]
    Encode(#[from] prometheus::Error),

    #[error("Metrics output is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Initialize metrics by registering them with the custom registry
pub fn init(prefix: &str) {
    INIT_ONCE.call_once(|| {
        let registry = Registry::new_custom(Some(prefix.to_string()), None)
            .expect("Failed to create Prometheus registry");

        registry
            .register(Box::new(HTTP_REQUESTS.clone()))
            .expect("Failed to register http_requests");

        registry
            .register(Box::new(HTTP_REQUEST_SUCCESS.clone()))
            .expect("Failed to register http_request_success");

        registry
            .register(Box::new(HTTP_REQUEST_ERROR.clone()))
            .expect("Failed to register http_request_error");

        registry
            .register(Box::new(REQUEST_DURATION_SECONDS.clone()))
            .expect("Failed to register request_duration_seconds");

        registry
            .register(Box::new(CONTRACT_QUERIES.clone()))
            .expect("Failed to register contract_queries");

        registry
            .register(Box::new(CONTRACT_QUERY_FAILURES.clone()))
            .expect("Failed to register contract_query_failures");

        registry
            .register(Box::new(DECODE_FAILURES.clone()))
            .expect("Failed to register decode_failures");

        if let Ok(mut guard) = REGISTRY.lock() {
            *guard = Some(registry);
        }
    });
}

pub fn is_initialized() -> bool {
    REGISTRY.lock().map(|guard| guard.is_some()).unwrap_or(false)
}

/// Gather all metrics as Prometheus text format
pub fn gather_metrics() -> Result<String, MetricsGatherError> {
    let encoder = TextEncoder::new();
    let registry_guard = REGISTRY
        .lock()
        .map_err(|_| MetricsGatherError::NotInitialized)?;
    let registry = registry_guard
        .as_ref()
        .ok_or(MetricsGatherError::NotInitialized)?;
    let metric_families = registry.gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}
