use shared::{
    domain::{Contact, ContactDraft, DraftField},
    error::{ApiError, ErrorCode},
    protocol::CreateContactRequest,
};
use storage::Storage;
use tracing::info;

#[derive(Clone)]
pub struct ApiContext {
    pub storage: Storage,
}

pub async fn list_contacts(ctx: &ApiContext) -> Result<Vec<Contact>, ApiError> {
    ctx.storage.list_contacts().await.map_err(internal)
}

/// Validates required fields and persists the draft. No dedupe: the same
/// request twice yields two contacts with distinct ids.
pub async fn create_contact(
    ctx: &ApiContext,
    req: CreateContactRequest,
) -> Result<Contact, ApiError> {
    let draft = ContactDraft::from(req);
    ensure_required_fields(&draft)?;

    let contact = ctx
        .storage
        .create_contact(&draft)
        .await
        .map_err(internal)?;
    info!(contact_id = contact.id.0, "contact created");
    Ok(contact)
}

fn ensure_required_fields(draft: &ContactDraft) -> Result<(), ApiError> {
    let missing = draft.missing_required_fields();
    if missing.is_empty() {
        return Ok(());
    }
    let names: Vec<&str> = missing.into_iter().map(DraftField::label).collect();
    Err(ApiError::new(
        ErrorCode::Validation,
        format!("missing required fields: {}", names.join(", ")),
    ))
}

fn internal(err: anyhow::Error) -> ApiError {
    ApiError::new(ErrorCode::Internal, err.to_string())
}

#[cfg(test)]
#[path = "tests/mod_tests.rs"]
mod tests;
