use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{info, warn};

use crate::{
    config::RunConfig,
    http::spawn_worker,
    metrics::{MetricsCollector, RunSnapshot},
    proxy::ProxyRotator,
    shutdown::ShutdownSender,
    shutdown_handlers::{
        setup_keyboard_shutdown_handler, setup_signal_shutdown_handler, shutdown_channel,
    },
    ui::render::setup_render_ui,
};

/// Bounded wait for workers to unwind after a cancellation signal.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct RunOptions {
    pub(crate) no_ui: bool,
    pub(crate) no_color: bool,
}

/// Drives one complete run: spawns the dashboard and the configured
/// workers, waits for natural completion or cancellation, and returns the
/// final consistent snapshot.
///
/// Cancellation (operator interrupt, or `external_shutdown` flipping to
/// `true`) stops task loops cooperatively; the coordinator waits at most
/// the grace period for in-flight attempts to unwind before reporting.
pub(crate) async fn run(
    config: RunConfig,
    options: RunOptions,
    external_shutdown: Option<watch::Receiver<bool>>,
) -> RunSnapshot {
    let config = Arc::new(config);
    let collector = Arc::new(MetricsCollector::new());
    collector.start();

    let (shutdown_tx, mut shutdown_rx) = shutdown_channel();
    let signal_handle = setup_signal_shutdown_handler(&shutdown_tx);
    let bridge_handle =
        external_shutdown.map(|receiver| bridge_external_shutdown(&shutdown_tx, receiver));
    let (ui_handle, keyboard_handle) = if options.no_ui {
        (None, None)
    } else {
        (
            Some(setup_render_ui(
                &shutdown_tx,
                Arc::clone(&collector),
                config.target.clone(),
                config.planned_requests(),
                options.no_color,
            )),
            Some(setup_keyboard_shutdown_handler(&shutdown_tx)),
        )
    };

    let rotator = ProxyRotator::new(config.proxies.clone());
    let mut worker_handles = Vec::with_capacity(config.workers);
    for worker_id in 0..config.workers {
        let proxy = rotator.next_proxy();
        worker_handles.push(spawn_worker(
            worker_id,
            proxy,
            Arc::clone(&config),
            Arc::clone(&collector),
            shutdown_tx.clone(),
        ));
    }

    let workers_done = async move {
        for handle in worker_handles {
            if handle.await.is_err() {
                warn!("A worker failed to join cleanly.");
            }
        }
    };
    tokio::pin!(workers_done);

    tokio::select! {
        () = &mut workers_done => {}
        _ = shutdown_rx.recv() => {
            info!("Cancellation received, waiting for workers to unwind.");
            if tokio::time::timeout(SHUTDOWN_GRACE, &mut workers_done).await.is_err() {
                warn!(
                    "Workers did not unwind within {:?}; reporting what was recorded.",
                    SHUTDOWN_GRACE
                );
            }
        }
    }

    // Idempotent: stops the dashboard and handler tasks whether the run
    // ended naturally or via cancellation.
    drop(shutdown_tx.send(()));

    // The dashboard must be joined before anything is printed so the
    // terminal is restored first.
    if let Some(handle) = ui_handle
        && handle.await.is_err()
    {
        warn!("Dashboard task failed to join.");
    }
    if let Some(handle) = keyboard_handle {
        drop(handle.await);
    }
    if let Some(handle) = bridge_handle {
        handle.abort();
    }
    drop(signal_handle.await);

    collector.snapshot()
}

fn bridge_external_shutdown(
    shutdown_tx: &ShutdownSender,
    mut external_shutdown: watch::Receiver<bool>,
) -> tokio::task::JoinHandle<()> {
    let shutdown_tx = shutdown_tx.clone();
    tokio::spawn(async move {
        loop {
            if *external_shutdown.borrow() {
                drop(shutdown_tx.send(()));
                break;
            }
            if external_shutdown.changed().await.is_err() {
                break;
            }
        }
    })
}
