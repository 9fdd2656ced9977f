//! reqwest-backed access to the contact service HTTP API.

use async_trait::async_trait;
use reqwest::{Client, Response};
use shared::{
    domain::{Contact, ContactDraft},
    protocol::{ContactListResponse, CreateContactRequest, CONTACTS_ROUTE},
};
use tracing::debug;

use crate::{ContactService, StoreError};

#[derive(Clone)]
pub struct HttpContactService {
    http: Client,
    server_url: String,
}

impl HttpContactService {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), server_url)
    }

    pub fn with_client(http: Client, server_url: impl Into<String>) -> Self {
        let server_url = server_url.into().trim_end_matches('/').to_string();
        Self { http, server_url }
    }

    fn contacts_url(&self) -> String {
        format!("{}{CONTACTS_ROUTE}", self.server_url)
    }
}

#[async_trait]
impl ContactService for HttpContactService {
    async fn fetch_all(&self) -> Result<Vec<Contact>, StoreError> {
        let url = self.contacts_url();
        debug!(%url, "fetching contacts");
        let res = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(StoreError::from_transport)?;
        let res = ensure_success(res).await?;
        res.json::<ContactListResponse>()
            .await
            .map_err(|e| StoreError::Server(format!("malformed contact list: {e}")))
    }

    async fn create(&self, draft: &ContactDraft) -> Result<Contact, StoreError> {
        let url = self.contacts_url();
        debug!(%url, "creating contact");
        let res = self
            .http
            .post(&url)
            .json(&CreateContactRequest::from(draft))
            .send()
            .await
            .map_err(StoreError::from_transport)?;
        let res = ensure_success(res).await?;
        res.json::<Contact>()
            .await
            .map_err(|e| StoreError::Server(format!("malformed contact: {e}")))
    }
}

async fn ensure_success(res: Response) -> Result<Response, StoreError> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }
    let body = res.text().await.unwrap_or_default();
    Err(StoreError::from_response(status, &body))
}
