use super::*;
use shared::domain::{ContactId, DraftField};

fn contact(id: i64, name: &str, email: &str, phone: &str, notes: &str) -> Contact {
    Contact {
        id: ContactId(id),
        full_name: name.into(),
        email: email.into(),
        phone_number: phone.into(),
        notes: notes.into(),
    }
}

fn ann() -> Contact {
    contact(1, "Ann", "a@x.com", "555", "")
}

fn bo_draft() -> ContactDraft {
    ContactDraft {
        full_name: "Bo".into(),
        email: "b@x.com".into(),
        phone_number: "111".into(),
        notes: "vip".into(),
    }
}

fn mounted_with(contacts: Vec<Contact>) -> PageState {
    let mut state = PageState::new(PageToken::next());
    let token = state.token();
    assert!(reduce(&mut state, PageEvent::MountStarted).is_applied());
    reduce(
        &mut state,
        PageEvent::ContactsLoaded {
            token,
            contacts,
            error: None,
        },
    );
    state
}

fn fill(state: &mut PageState, draft: &ContactDraft) {
    for field in DraftField::ALL {
        reduce(
            state,
            PageEvent::FieldChanged {
                field,
                value: draft.field(field).to_string(),
            },
        );
    }
}

#[test]
fn initial_state_is_idle_and_empty() {
    let state = PageState::new(PageToken::next());
    assert!(!state.is_loading());
    assert!(!state.is_saving());
    assert!(!state.is_mounted());
    assert!(state.contacts().is_empty());
    assert!(state.form().is_empty());
    assert_eq!(state.error(), None);
}

#[test]
fn mount_sets_loading_once() {
    let mut state = PageState::new(PageToken::next());
    assert_eq!(reduce(&mut state, PageEvent::MountStarted), Transition::Applied);
    assert!(state.is_loading());
    assert_eq!(
        reduce(&mut state, PageEvent::MountStarted),
        Transition::Ignored(IgnoreReason::AlreadyMounted)
    );
}

#[test]
fn mount_with_one_contact_lists_it() {
    let state = mounted_with(vec![ann()]);
    assert!(!state.is_loading());
    assert_eq!(state.contacts(), &[ann()]);
    assert_eq!(state.error(), None);
}

#[test]
fn mount_with_empty_result_has_no_contacts_and_no_error() {
    let state = mounted_with(Vec::new());
    assert!(!state.is_loading());
    assert!(state.contacts().is_empty());
    assert_eq!(state.error(), None);
}

#[test]
fn failed_fetch_sets_error_and_empty_list() {
    let mut state = PageState::new(PageToken::next());
    let token = state.token();
    reduce(&mut state, PageEvent::MountStarted);
    reduce(
        &mut state,
        PageEvent::ContactsLoaded {
            token,
            contacts: Vec::new(),
            error: Some(StoreError::Network("offline".into())),
        },
    );
    assert!(!state.is_loading());
    assert!(state.contacts().is_empty());
    assert_eq!(state.error(), Some(&StoreError::Network("offline".into())));
}

#[test]
fn field_change_replaces_exactly_one_field() {
    let mut state = mounted_with(Vec::new());
    fill(&mut state, &bo_draft());
    reduce(
        &mut state,
        PageEvent::FieldChanged {
            field: DraftField::Email,
            value: "bo@x.com".into(),
        },
    );
    assert_eq!(state.form().email, "bo@x.com");
    assert_eq!(state.form().full_name, "Bo");
    assert_eq!(state.form().phone_number, "111");
    assert_eq!(state.form().notes, "vip");
}

#[test]
fn submit_clears_error_and_sets_saving() {
    let mut state = mounted_with(Vec::new());
    let token = state.token();
    reduce(&mut state, PageEvent::SubmitStarted);
    reduce(
        &mut state,
        PageEvent::SubmitFailed {
            token,
            error: StoreError::Server("boom".into()),
        },
    );
    assert!(state.error().is_some());

    assert!(reduce(&mut state, PageEvent::SubmitStarted).is_applied());
    assert!(state.is_saving());
    assert_eq!(state.error(), None);
}

#[test]
fn successful_save_prepends_and_resets_form() {
    let mut state = mounted_with(vec![ann()]);
    let token = state.token();
    fill(&mut state, &bo_draft());

    reduce(&mut state, PageEvent::SubmitStarted);
    let saved = bo_draft().into_contact(ContactId(2));
    reduce(
        &mut state,
        PageEvent::SubmitSucceeded {
            token,
            contact: saved.clone(),
        },
    );

    assert_eq!(state.contacts(), &[saved, ann()]);
    assert_eq!(state.form(), &ContactDraft::default());
    assert!(!state.is_saving());
    assert_eq!(state.error(), None);
}

#[test]
fn failed_save_keeps_list_and_form() {
    let mut state = mounted_with(vec![ann()]);
    let token = state.token();
    fill(&mut state, &bo_draft());

    reduce(&mut state, PageEvent::SubmitStarted);
    reduce(
        &mut state,
        PageEvent::SubmitFailed {
            token,
            error: StoreError::Network("network error".into()),
        },
    );

    assert_eq!(state.contacts(), &[ann()]);
    assert_eq!(state.form(), &bo_draft());
    assert_eq!(state.error().map(StoreError::message), Some("network error"));
    assert!(!state.is_saving());
}

#[test]
fn save_outcome_is_either_contact_or_error() {
    for outcome in [
        Ok(bo_draft().into_contact(ContactId(2))),
        Err(StoreError::Validation("missing".into())),
    ] {
        let mut state = mounted_with(vec![ann()]);
        let token = state.token();
        reduce(&mut state, PageEvent::SubmitStarted);
        reduce(&mut state, PageEvent::submit_finished(token, outcome));

        let prepended = state.contacts().len() == 2;
        let errored = state.error().is_some();
        assert!(prepended != errored);
    }
}

#[test]
fn submit_cannot_reenter_while_saving() {
    let mut state = mounted_with(Vec::new());
    assert!(reduce(&mut state, PageEvent::SubmitStarted).is_applied());
    assert_eq!(
        reduce(&mut state, PageEvent::SubmitStarted),
        Transition::Ignored(IgnoreReason::AlreadySaving)
    );
    assert!(state.is_saving());
}

#[test]
fn completions_for_another_page_are_ignored() {
    let mut state = mounted_with(vec![ann()]);
    let stale = PageToken::next();
    reduce(&mut state, PageEvent::SubmitStarted);

    let before = state.clone();
    assert_eq!(
        reduce(
            &mut state,
            PageEvent::SubmitSucceeded {
                token: stale,
                contact: bo_draft().into_contact(ContactId(9)),
            },
        ),
        Transition::Ignored(IgnoreReason::StalePage)
    );
    assert_eq!(
        reduce(
            &mut state,
            PageEvent::ContactsLoaded {
                token: stale,
                contacts: Vec::new(),
                error: Some(StoreError::Server("late".into())),
            },
        ),
        Transition::Ignored(IgnoreReason::StalePage)
    );
    assert_eq!(state, before);
}

#[test]
fn fetch_landing_after_save_replaces_the_list() {
    let mut state = PageState::new(PageToken::next());
    let token = state.token();
    reduce(&mut state, PageEvent::MountStarted);
    reduce(&mut state, PageEvent::SubmitStarted);

    let saved = bo_draft().into_contact(ContactId(2));
    reduce(
        &mut state,
        PageEvent::SubmitSucceeded {
            token,
            contact: saved,
        },
    );
    reduce(
        &mut state,
        PageEvent::ContactsLoaded {
            token,
            contacts: vec![ann()],
            error: None,
        },
    );

    assert_eq!(state.contacts(), &[ann()]);
    assert!(state.is_settled());
}

#[test]
fn save_landing_after_fetch_prepends_to_fetched_list() {
    let mut state = PageState::new(PageToken::next());
    let token = state.token();
    reduce(&mut state, PageEvent::MountStarted);
    reduce(&mut state, PageEvent::SubmitStarted);

    reduce(
        &mut state,
        PageEvent::ContactsLoaded {
            token,
            contacts: vec![ann()],
            error: None,
        },
    );
    let saved = bo_draft().into_contact(ContactId(2));
    reduce(
        &mut state,
        PageEvent::SubmitSucceeded {
            token,
            contact: saved.clone(),
        },
    );

    assert_eq!(state.contacts(), &[saved, ann()]);
}

#[test]
fn successful_fetch_does_not_clear_a_save_error() {
    let mut state = PageState::new(PageToken::next());
    let token = state.token();
    reduce(&mut state, PageEvent::MountStarted);
    reduce(&mut state, PageEvent::SubmitStarted);
    reduce(
        &mut state,
        PageEvent::SubmitFailed {
            token,
            error: StoreError::Network("network error".into()),
        },
    );
    reduce(
        &mut state,
        PageEvent::ContactsLoaded {
            token,
            contacts: vec![ann()],
            error: None,
        },
    );
    assert_eq!(state.error().map(StoreError::message), Some("network error"));
}

#[test]
fn save_success_after_failed_fetch_clears_the_error() {
    let mut state = PageState::new(PageToken::next());
    let token = state.token();
    reduce(&mut state, PageEvent::MountStarted);
    reduce(&mut state, PageEvent::SubmitStarted);
    reduce(
        &mut state,
        PageEvent::ContactsLoaded {
            token,
            contacts: Vec::new(),
            error: Some(StoreError::Network("offline".into())),
        },
    );
    assert!(state.error().is_some());

    let saved = bo_draft().into_contact(ContactId(2));
    reduce(
        &mut state,
        PageEvent::SubmitSucceeded {
            token,
            contact: saved.clone(),
        },
    );

    assert_eq!(state.contacts(), &[saved]);
    assert_eq!(state.error(), None);
    assert!(state.is_settled());
}
