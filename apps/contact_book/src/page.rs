//! One contact page instance: owns the page state and sequences backend
//! commands against mount and submit.

use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender};
use shared::domain::DraftField;

use crate::backend_bridge::{commands::BackendCommand, BackendBridge, EventRoutes};
use crate::controller::{
    events::{PageEvent, PageToken},
    orchestration::dispatch_backend_command,
    reducer::{reduce, PageState, Transition},
};

pub struct ContactPage {
    state: PageState,
    cmd_tx: Sender<BackendCommand>,
    event_rx: Receiver<PageEvent>,
    routes: Option<EventRoutes>,
}

impl ContactPage {
    /// Opens a page on `bridge` with its own completion queue.
    pub fn open(bridge: &BackendBridge) -> Self {
        let token = PageToken::next();
        let routes = bridge.routes();
        let event_rx = routes.register(token);
        Self::build(token, bridge.commands(), event_rx, Some(routes))
    }

    /// Opens a page on caller-owned queues, outside any bridge.
    pub fn with_channels(cmd_tx: Sender<BackendCommand>, event_rx: Receiver<PageEvent>) -> Self {
        Self::build(PageToken::next(), cmd_tx, event_rx, None)
    }

    fn build(
        token: PageToken,
        cmd_tx: Sender<BackendCommand>,
        event_rx: Receiver<PageEvent>,
        routes: Option<EventRoutes>,
    ) -> Self {
        tracing::debug!(page = token.value(), "contact page opened");
        Self {
            state: PageState::new(token),
            cmd_tx,
            event_rx,
            routes,
        }
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    /// Starts the one-time contact fetch.
    pub fn mount(&mut self) -> Transition {
        let transition = self.apply(PageEvent::MountStarted);
        if transition.is_applied() {
            let token = self.state.token();
            if let Err(error) =
                dispatch_backend_command(&self.cmd_tx, BackendCommand::FetchContacts { token })
            {
                self.apply(PageEvent::ContactsLoaded {
                    token,
                    contacts: Vec::new(),
                    error: Some(error),
                });
            }
        }
        transition
    }

    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.apply(PageEvent::FieldChanged {
            field,
            value: value.into(),
        });
    }

    /// Saves the current draft. Ignored while a save is already in flight.
    pub fn submit(&mut self) -> Transition {
        let transition = self.apply(PageEvent::SubmitStarted);
        if transition.is_applied() {
            let token = self.state.token();
            let draft = self.state.form().clone();
            if let Err(error) =
                dispatch_backend_command(&self.cmd_tx, BackendCommand::SaveContact { token, draft })
            {
                self.apply(PageEvent::SubmitFailed { token, error });
            }
        }
        transition
    }

    /// Applies every completion already waiting on the queue.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.event_rx.try_recv() {
            if self.apply(event).is_applied() {
                applied += 1;
            }
        }
        applied
    }

    /// Blocks until neither a fetch nor a save is pending, or `timeout` passes.
    /// Returns whether the page settled.
    pub fn wait_until_settled(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        self.pump();
        while !self.state.is_settled() {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.event_rx.recv_timeout(remaining) {
                Ok(event) => {
                    self.apply(event);
                }
                Err(RecvTimeoutError::Timeout) => return false,
                Err(RecvTimeoutError::Disconnected) => {
                    tracing::error!("backend event queue closed while page was pending");
                    return false;
                }
            }
        }
        true
    }

    fn apply(&mut self, event: PageEvent) -> Transition {
        let name = event.name();
        let transition = reduce(&mut self.state, event);
        match transition {
            Transition::Applied => tracing::debug!(event = name, "page event applied"),
            Transition::Ignored(reason) => {
                tracing::debug!(event = name, ?reason, "page event ignored")
            }
        }
        transition
    }
}

impl Drop for ContactPage {
    fn drop(&mut self) {
        if let Some(routes) = &self.routes {
            routes.unregister(self.state.token());
        }
        tracing::debug!(page = self.state.token().value(), "contact page closed");
    }
}
