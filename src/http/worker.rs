use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use futures_util::StreamExt;
use rand::{Rng, thread_rng};
use reqwest::Client;
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::{
    args::HttpMethod,
    config::RunConfig,
    metrics::{ActiveWorkerGuard, MetricsCollector},
    shutdown::{ShutdownReceiver, ShutdownSender},
};

use super::client::build_client;
use super::request::{build_payload, random_headers};

/// Everything one request task needs, shared within its worker.
struct TaskContext {
    /// `None` when the worker's client could not be built (bad proxy URI);
    /// attempts are then recorded as failed without touching the network.
    client: Option<Client>,
    payload: Bytes,
    config: Arc<RunConfig>,
    collector: Arc<MetricsCollector>,
}

/// Spawns one worker: reports itself active, builds its client and shared
/// payload once, runs its concurrent request tasks to completion, and
/// reports itself stopped exactly once via the drop guard.
pub fn spawn_worker(
    worker_id: usize,
    proxy: Option<String>,
    config: Arc<RunConfig>,
    collector: Arc<MetricsCollector>,
    shutdown_tx: ShutdownSender,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let _active = ActiveWorkerGuard::acquire(&collector);

        let client = build_client(proxy.as_deref(), config.request_timeout)
            .inspect_err(|err| {
                warn!(
                    "Worker {}: {}; its attempts will be recorded as failed.",
                    worker_id, err
                );
            })
            .ok();
        let payload = build_payload(config.payload_min, config.payload_max);
        let context = Arc::new(TaskContext {
            client,
            payload,
            config: Arc::clone(&config),
            collector: Arc::clone(&collector),
        });

        let mut task_handles = Vec::with_capacity(config.tasks_per_worker);
        for _ in 0..config.tasks_per_worker {
            let context = Arc::clone(&context);
            let shutdown_rx = shutdown_tx.subscribe();
            task_handles.push(tokio::spawn(request_task(context, shutdown_rx)));
        }
        for handle in task_handles {
            if handle.await.is_err() {
                debug!("Worker {}: a request task failed to join.", worker_id);
            }
        }
    })
}

/// One cooperative task: jitter, build, send, classify, report; repeats
/// until its request budget is spent or cancellation is observed. The
/// cancellation check happens at the top of each iteration and aborts the
/// jitter wait; a dispatched send runs to completion (bounded by the
/// request timeout) and still reports its outcome.
async fn request_task(context: Arc<TaskContext>, mut shutdown_rx: ShutdownReceiver) {
    let mut sent: u64 = 0;
    loop {
        if let Some(limit) = context.config.requests_per_task
            && sent >= limit
        {
            break;
        }

        let jitter = sample_jitter(&context.config);
        tokio::select! {
            _ = shutdown_rx.recv() => break,
            () = sleep(jitter) => {}
        }

        send_attempt(&context).await;
        sent = sent.saturating_add(1);
    }
}

/// Uniform pre-request delay within the configured bounds, desynchronizing
/// task timing across the run.
fn sample_jitter(config: &RunConfig) -> Duration {
    let min_ms = config.delay_min.as_millis();
    let max_ms = config.delay_max.as_millis();
    let millis = thread_rng().gen_range(min_ms..=max_ms);
    Duration::from_millis(u64::try_from(millis).unwrap_or(u64::MAX))
}

/// Sends one request and reports exactly one outcome to the collector.
async fn send_attempt(context: &TaskContext) {
    let Some(client) = context.client.as_ref() else {
        context.collector.record_failed();
        return;
    };

    let bytes_sent = u64::try_from(context.payload.len()).unwrap_or(u64::MAX);
    let request = match context.config.method {
        HttpMethod::Get => client.get(&context.config.target),
        HttpMethod::Post => client.post(&context.config.target),
    }
    .headers(random_headers())
    .body(context.payload.clone());

    match request.send().await {
        Ok(response) => {
            let status = response.status().as_u16();
            match drain_response_body(response).await {
                Ok(_) => {
                    context.collector.record_completed(status, bytes_sent);
                    debug!("Request to {} - {}", context.config.target, status);
                }
                Err(err) => {
                    context.collector.record_failed();
                    debug!("Failed to read response body: {}", err);
                }
            }
        }
        Err(err) => {
            context.collector.record_failed();
            debug!("Request failed: {}", err);
        }
    }
}

async fn drain_response_body(response: reqwest::Response) -> Result<u64, reqwest::Error> {
    let mut stream = response.bytes_stream();
    let mut total_bytes: u64 = 0;
    while let Some(chunk) = stream.next().await {
        let bytes = chunk?;
        total_bytes = total_bytes.saturating_add(u64::try_from(bytes.len()).unwrap_or(u64::MAX));
    }
    Ok(total_bytes)
}
