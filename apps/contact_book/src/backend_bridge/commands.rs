//! Backend commands queued from the page to the backend worker.

use shared::domain::ContactDraft;

use crate::controller::events::PageToken;

#[derive(Debug, Clone)]
pub enum BackendCommand {
    FetchContacts { token: PageToken },
    SaveContact { token: PageToken, draft: ContactDraft },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::FetchContacts { .. } => "fetch_contacts",
            BackendCommand::SaveContact { .. } => "save_contact",
        }
    }
}
