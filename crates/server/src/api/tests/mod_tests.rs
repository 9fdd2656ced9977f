use super::*;

async fn setup() -> ApiContext {
    let storage = Storage::new("sqlite::memory:").await.expect("db");
    ApiContext { storage }
}

fn request(full_name: &str, email: &str, phone_number: &str) -> CreateContactRequest {
    CreateContactRequest {
        full_name: full_name.into(),
        email: email.into(),
        phone_number: phone_number.into(),
        notes: String::new(),
    }
}

#[tokio::test]
async fn created_contact_is_listed_first() {
    let ctx = setup().await;
    create_contact(&ctx, request("Ann", "a@x.com", "555"))
        .await
        .expect("ann");
    let bo = create_contact(&ctx, request("Bo", "b@x.com", "111"))
        .await
        .expect("bo");

    let contacts = list_contacts(&ctx).await.expect("list");
    assert_eq!(contacts.len(), 2);
    assert_eq!(contacts[0], bo);
}

#[tokio::test]
async fn missing_required_fields_are_rejected() {
    let ctx = setup().await;
    let err = create_contact(&ctx, request("Ann", "", " "))
        .await
        .expect_err("should fail");
    assert!(matches!(err.code, ErrorCode::Validation));
    assert_eq!(err.message, "missing required fields: Email, Phone Number");
    assert!(list_contacts(&ctx).await.expect("list").is_empty());
}

#[tokio::test]
async fn duplicate_requests_are_not_deduplicated() {
    let ctx = setup().await;
    let a = create_contact(&ctx, request("Ann", "a@x.com", "555"))
        .await
        .expect("first");
    let b = create_contact(&ctx, request("Ann", "a@x.com", "555"))
        .await
        .expect("second");
    assert_ne!(a.id, b.id);
}
