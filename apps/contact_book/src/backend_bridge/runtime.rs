//! Runtime bridge between the page command queue and per-page event intake.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    thread::{self, JoinHandle},
    time::Duration,
};

use anyhow::{Context, Result};
use client_core::ContactStoreClient;
use crossbeam_channel::{bounded, unbounded, Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{PageEvent, PageToken};

const COMMAND_QUEUE_CAPACITY: usize = 64;
const SHUTDOWN_GRACE: Duration = Duration::from_secs(1);

/// Completion queues of the open pages, keyed by page token.
///
/// Each page owns the only receiver of its queue, so one page can never drain
/// another page's completions. Queues are unbounded: a page has at most one
/// fetch and one save in flight, and a completion must never be dropped while
/// its page is waiting on it.
#[derive(Clone, Default)]
pub struct EventRoutes {
    pages: Arc<Mutex<HashMap<PageToken, Sender<PageEvent>>>>,
}

impl EventRoutes {
    pub fn register(&self, token: PageToken) -> Receiver<PageEvent> {
        let (event_tx, event_rx) = unbounded();
        self.table().insert(token, event_tx);
        event_rx
    }

    pub fn unregister(&self, token: PageToken) {
        self.table().remove(&token);
    }

    pub fn is_registered(&self, token: PageToken) -> bool {
        self.table().contains_key(&token)
    }

    fn deliver(&self, event: PageEvent) {
        let name = event.name();
        let Some(token) = event.token() else {
            tracing::warn!(event = name, "completion without a page token; dropping");
            return;
        };
        let Some(event_tx) = self.table().get(&token).cloned() else {
            tracing::debug!(event = name, page = token.value(), "page closed; dropping completion");
            return;
        };
        match event_tx.send(event) {
            Ok(()) => tracing::debug!(event = name, page = token.value(), "delivered backend completion"),
            Err(_) => {
                self.unregister(token);
                tracing::debug!(event = name, page = token.value(), "no page listening; dropping completion");
            }
        }
    }

    fn table(&self) -> MutexGuard<'_, HashMap<PageToken, Sender<PageEvent>>> {
        self.pages.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Handle to a running backend worker. Dropping every command sender stops it.
pub struct BackendBridge {
    cmd_tx: Sender<BackendCommand>,
    routes: EventRoutes,
    worker: JoinHandle<()>,
}

impl BackendBridge {
    pub fn commands(&self) -> Sender<BackendCommand> {
        self.cmd_tx.clone()
    }

    pub fn routes(&self) -> EventRoutes {
        self.routes.clone()
    }

    /// Closes the command queue and waits for the worker to exit. Pages still
    /// holding a command sender keep the worker alive until they are dropped.
    pub fn shutdown(self) {
        drop(self.cmd_tx);
        if self.worker.join().is_err() {
            tracing::error!("backend worker panicked");
        }
    }
}

/// Starts the backend worker. Each command runs as its own task, so a fetch
/// and a save can be in flight together and finish in either order.
pub fn launch(store: ContactStoreClient) -> Result<BackendBridge> {
    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(COMMAND_QUEUE_CAPACITY);
    let routes = EventRoutes::default();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("contact-backend-io")
        .enable_all()
        .build()
        .context("failed to build backend runtime")?;

    let worker_routes = routes.clone();
    let worker = thread::Builder::new()
        .name("contact-backend".to_string())
        .spawn(move || {
            tracing::info!("backend worker ready");
            while let Ok(cmd) = cmd_rx.recv() {
                let store = store.clone();
                let routes = worker_routes.clone();
                runtime.spawn(async move {
                    let event = execute(&store, cmd).await;
                    routes.deliver(event);
                });
            }
            runtime.shutdown_timeout(SHUTDOWN_GRACE);
            tracing::info!("backend worker stopped");
        })
        .context("failed to spawn backend worker thread")?;

    Ok(BackendBridge {
        cmd_tx,
        routes,
        worker,
    })
}

async fn execute(store: &ContactStoreClient, cmd: BackendCommand) -> PageEvent {
    match cmd {
        BackendCommand::FetchContacts { token } => {
            PageEvent::contacts_loaded(token, store.fetch_contacts().await)
        }
        BackendCommand::SaveContact { token, draft } => {
            PageEvent::submit_finished(token, store.save_contact(&draft).await)
        }
    }
}
