//! Page state and its transitions.
//!
//! `reduce` is the only way the state changes. It performs no I/O; callers
//! issue the backend command that follows an applied `MountStarted` or
//! `SubmitStarted`.

use client_core::StoreError;
use shared::domain::{Contact, ContactDraft};

use super::events::{PageEvent, PageToken};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    token: PageToken,
    mounted: bool,
    loading: bool,
    saving: bool,
    error: Option<StoreError>,
    contacts: Vec<Contact>,
    form: ContactDraft,
}

impl PageState {
    pub fn new(token: PageToken) -> Self {
        Self {
            token,
            mounted: false,
            loading: false,
            saving: false,
            error: None,
            contacts: Vec::new(),
            form: ContactDraft::default(),
        }
    }

    pub fn token(&self) -> PageToken {
        self.token
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn is_settled(&self) -> bool {
        !self.loading && !self.saving
    }

    pub fn error(&self) -> Option<&StoreError> {
        self.error.as_ref()
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn form(&self) -> &ContactDraft {
        &self.form
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    AlreadyMounted,
    AlreadySaving,
    StalePage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Applied,
    Ignored(IgnoreReason),
}

impl Transition {
    pub fn is_applied(self) -> bool {
        self == Transition::Applied
    }
}

/// Applies one event. Completions arriving out of order are applied in the
/// order received, so a fetch that lands after a save replaces the list.
pub fn reduce(state: &mut PageState, event: PageEvent) -> Transition {
    if let Some(token) = event.token() {
        if token != state.token {
            return Transition::Ignored(IgnoreReason::StalePage);
        }
    }

    match event {
        PageEvent::MountStarted => {
            if state.mounted {
                return Transition::Ignored(IgnoreReason::AlreadyMounted);
            }
            state.mounted = true;
            state.loading = true;
        }
        PageEvent::ContactsLoaded {
            contacts, error, ..
        } => {
            state.contacts = contacts;
            if error.is_some() {
                state.error = error;
            }
            state.loading = false;
        }
        PageEvent::FieldChanged { field, value } => {
            state.form = state.form.with_field(field, value);
        }
        PageEvent::SubmitStarted => {
            if state.saving {
                return Transition::Ignored(IgnoreReason::AlreadySaving);
            }
            state.saving = true;
            state.error = None;
        }
        PageEvent::SubmitSucceeded { contact, .. } => {
            state.contacts.insert(0, contact);
            state.form = ContactDraft::default();
            state.error = None;
            state.saving = false;
        }
        PageEvent::SubmitFailed { error, .. } => {
            state.error = Some(error);
            state.saving = false;
        }
    }

    Transition::Applied
}

#[cfg(test)]
#[path = "../tests/reducer_tests.rs"]
mod tests;
