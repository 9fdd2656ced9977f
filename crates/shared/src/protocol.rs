use serde::{Deserialize, Serialize};

use crate::domain::{Contact, ContactDraft};

pub const CONTACTS_ROUTE: &str = "/contacts";
pub const HEALTH_ROUTE: &str = "/healthz";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactRequest {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    #[serde(default)]
    pub notes: String,
}

impl From<&ContactDraft> for CreateContactRequest {
    fn from(draft: &ContactDraft) -> Self {
        Self {
            full_name: draft.full_name.clone(),
            email: draft.email.clone(),
            phone_number: draft.phone_number.clone(),
            notes: draft.notes.clone(),
        }
    }
}

impl From<CreateContactRequest> for ContactDraft {
    fn from(req: CreateContactRequest) -> Self {
        Self {
            full_name: req.full_name,
            email: req.email,
            phone_number: req.phone_number,
            notes: req.notes,
        }
    }
}

pub type ContactListResponse = Vec<Contact>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_defaults_missing_notes() {
        let req: CreateContactRequest = serde_json::from_str(
            r#"{"fullName":"Ann","email":"a@x.com","phoneNumber":"555"}"#,
        )
        .expect("json");
        assert_eq!(req.notes, "");
        let draft = ContactDraft::from(req);
        assert_eq!(draft.full_name, "Ann");
    }
}
