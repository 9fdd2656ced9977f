//! Command orchestration helpers from page actions to backend command queue.

use client_core::StoreError;
use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

/// Queues `cmd` for the backend worker. A full or closed queue comes back as
/// a network error so the caller can fail the pending operation.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
) -> Result<(), StoreError> {
    let cmd_name = cmd.name();

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued page->backend command");
            Ok(())
        }
        Err(TrySendError::Full(_)) => {
            tracing::warn!(command = cmd_name, "backend command queue is full");
            Err(StoreError::Network(
                "Command queue is full; please retry".to_string(),
            ))
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::error!(command = cmd_name, "backend command processor disconnected");
            Err(StoreError::Network(
                "Backend command processor disconnected; restart the contact book".to_string(),
            ))
        }
    }
}
