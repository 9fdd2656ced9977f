//! Page events: user input and backend completions, applied by the reducer.

use std::sync::atomic::{AtomicU64, Ordering};

use client_core::{FetchedContacts, StoreError};
use shared::domain::{Contact, DraftField};

/// Identifies one page instance. Completions carry the token that was current
/// when their command was issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageToken(u64);

impl PageToken {
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    MountStarted,
    ContactsLoaded {
        token: PageToken,
        contacts: Vec<Contact>,
        error: Option<StoreError>,
    },
    FieldChanged {
        field: DraftField,
        value: String,
    },
    SubmitStarted,
    SubmitSucceeded {
        token: PageToken,
        contact: Contact,
    },
    SubmitFailed {
        token: PageToken,
        error: StoreError,
    },
}

impl PageEvent {
    pub fn contacts_loaded(token: PageToken, fetched: FetchedContacts) -> Self {
        PageEvent::ContactsLoaded {
            token,
            contacts: fetched.contacts,
            error: fetched.error,
        }
    }

    pub fn submit_finished(token: PageToken, outcome: Result<Contact, StoreError>) -> Self {
        match outcome {
            Ok(contact) => PageEvent::SubmitSucceeded { token, contact },
            Err(error) => PageEvent::SubmitFailed { token, error },
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PageEvent::MountStarted => "mount_started",
            PageEvent::ContactsLoaded { .. } => "contacts_loaded",
            PageEvent::FieldChanged { .. } => "field_changed",
            PageEvent::SubmitStarted => "submit_started",
            PageEvent::SubmitSucceeded { .. } => "submit_succeeded",
            PageEvent::SubmitFailed { .. } => "submit_failed",
        }
    }

    /// Token of the page a completion belongs to; `None` for user input.
    pub fn token(&self) -> Option<PageToken> {
        match self {
            PageEvent::ContactsLoaded { token, .. }
            | PageEvent::SubmitSucceeded { token, .. }
            | PageEvent::SubmitFailed { token, .. } => Some(*token),
            PageEvent::MountStarted
            | PageEvent::FieldChanged { .. }
            | PageEvent::SubmitStarted => None,
        }
    }
}
