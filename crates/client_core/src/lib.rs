//! Client side of the contact book: the persistence-service boundary and the
//! store client that turns its results into values the page can apply.

use std::{panic::AssertUnwindSafe, sync::Arc};

use async_trait::async_trait;
use futures::FutureExt;
use shared::domain::{Contact, ContactDraft};
use tracing::{info, warn};

pub mod error;
pub mod transport;

pub use error::StoreError;
pub use transport::HttpContactService;

/// The two calls the persistence service offers.
#[async_trait]
pub trait ContactService: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<Contact>, StoreError>;
    /// Assigns a new id on every call; no idempotency key is sent.
    async fn create(&self, draft: &ContactDraft) -> Result<Contact, StoreError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedContacts {
    pub contacts: Vec<Contact>,
    pub error: Option<StoreError>,
}

#[derive(Clone)]
pub struct ContactStoreClient {
    service: Arc<dyn ContactService>,
}

impl ContactStoreClient {
    pub fn new(service: Arc<dyn ContactService>) -> Self {
        Self { service }
    }

    pub fn http(server_url: impl Into<String>) -> Self {
        Self::new(Arc::new(HttpContactService::new(server_url)))
    }

    /// Never fails outright: on error the list is empty and `error` is set.
    pub async fn fetch_contacts(&self) -> FetchedContacts {
        let outcome = AssertUnwindSafe(self.service.fetch_all())
            .catch_unwind()
            .await
            .unwrap_or_else(|_| Err(panicked("fetch")));

        match outcome {
            Ok(contacts) => {
                info!(count = contacts.len(), "contacts loaded");
                FetchedContacts {
                    contacts,
                    error: None,
                }
            }
            Err(error) => {
                warn!(kind = error.kind(), %error, "failed to load contacts");
                FetchedContacts {
                    contacts: Vec::new(),
                    error: Some(error),
                }
            }
        }
    }

    pub async fn save_contact(&self, draft: &ContactDraft) -> Result<Contact, StoreError> {
        let outcome = AssertUnwindSafe(self.service.create(draft))
            .catch_unwind()
            .await
            .unwrap_or_else(|_| Err(panicked("save")));

        match &outcome {
            Ok(contact) => info!(contact_id = contact.id.0, "contact saved"),
            Err(error) => warn!(kind = error.kind(), %error, "failed to save contact"),
        }
        outcome
    }
}

fn panicked(operation: &str) -> StoreError {
    StoreError::Server(format!("contact service panicked during {operation}"))
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
