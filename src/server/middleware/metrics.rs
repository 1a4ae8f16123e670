//! Prometheus metrics for the HTTP API.
//!
//! The recorder is owned by [`Metrics`] and passed around through `AppState` rather than
//! installed globally, so each server instance and each test gets its own registry.

use std::{sync::Arc, time::Instant};

use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};
use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle, PrometheusRecorder};

use crate::server::state::AppState;

const HTTP_REQUESTS_TOTAL: &str = "classflow_http_requests_total";
const HTTP_REQUEST_DURATION: &str = "classflow_http_request_duration_seconds";
const GROUP_EVENTS_TOTAL: &str = "classflow_group_events_total";

/// Group lifecycle events counted for dashboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupEvent {
    Created,
    Joined,
    Left,
    LeaderAssigned,
    Deleted,
    ScheduleUploaded,
}

impl GroupEvent {
    fn label(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Joined => "joined",
            Self::Left => "left",
            Self::LeaderAssigned => "leader_assigned",
            Self::Deleted => "deleted",
            Self::ScheduleUploaded => "schedule_uploaded",
        }
    }
}

/// Prometheus registry shared by all request handlers.
#[derive(Clone)]
pub struct Metrics {
    recorder: Arc<PrometheusRecorder>,
    handle: PrometheusHandle,
}

impl Metrics {
    pub fn new() -> Self {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        let metrics = Self {
            recorder: Arc::new(recorder),
            handle,
        };

        metrics.with_recorder(|| {
            describe_counter!(HTTP_REQUESTS_TOTAL, "Total number of HTTP requests handled");
            describe_histogram!(
                HTTP_REQUEST_DURATION,
                "Duration of HTTP requests in seconds"
            );
            describe_counter!(GROUP_EVENTS_TOTAL, "Group lifecycle events by kind");
        });

        metrics
    }

    fn with_recorder<T>(&self, f: impl FnOnce() -> T) -> T {
        metrics::with_local_recorder(&*self.recorder, f)
    }

    /// Records one handled request.
    ///
    /// `route` is the matched route template, never the raw path, to keep label
    /// cardinality bounded.
    pub fn record_request(&self, method: &str, route: &str, status: u16, elapsed_secs: f64) {
        let method = method.to_string();
        let route = route.to_string();
        let status = status.to_string();

        self.with_recorder(|| {
            counter!(
                HTTP_REQUESTS_TOTAL,
                "method" => method.clone(),
                "route" => route.clone(),
                "status" => status
            )
            .increment(1);
            histogram!(HTTP_REQUEST_DURATION, "method" => method, "route" => route)
                .record(elapsed_secs);
        });
    }

    pub fn record_group_event(&self, event: GroupEvent) {
        self.with_recorder(|| {
            counter!(GROUP_EVENTS_TOTAL, "event" => event.label()).increment(1);
        });
    }

    /// Renders every metric in the Prometheus text exposition format.
    pub fn render(&self) -> String {
        self.handle.render()
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Axum middleware recording method, matched route, status and latency of each request.
pub async fn track_requests(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());

    let response = next.run(request).await;

    state.metrics.record_request(
        &method,
        &route,
        response.status().as_u16(),
        start.elapsed().as_secs_f64(),
    );

    response
}
