//! Text rendering of the contact page: the form card, then the saved list.

use std::fmt::{self, Write as _};

use shared::domain::{Contact, DraftField};

use crate::controller::reducer::PageState;

pub const TITLE: &str = "Contact Book";
pub const LIST_TITLE: &str = "Saved Contacts";
pub const SAVE_LABEL: &str = "Save Contact";
pub const SAVING_LABEL: &str = "Saving...";
pub const LOADING_TEXT: &str = "Loading contacts...";
pub const EMPTY_TEXT: &str = "No contacts saved yet.";

/// Draws the form card followed by the saved-contacts card.
pub fn render_page(state: &PageState) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    if write_page(&mut out, state).is_err() {
        tracing::error!("failed to render contact page");
    }
    out
}

/// Writes the page to any formatter sink.
pub fn write_page(out: &mut impl fmt::Write, state: &PageState) -> fmt::Result {
    writeln!(out, "== {TITLE} ==")?;
    for field in DraftField::ALL {
        let marker = if field.is_required() { "*" } else { " " };
        writeln!(
            out,
            "{marker} {:<13} {}",
            format!("{}:", field.label()),
            state.form().field(field)
        )?;
    }
    if state.is_saving() {
        writeln!(out, "[ {SAVING_LABEL} ] (disabled)")?;
    } else {
        writeln!(out, "[ {SAVE_LABEL} ]")?;
    }
    if let Some(error) = state.error() {
        writeln!(out, "! {error}")?;
    }

    writeln!(out)?;
    writeln!(out, "== {LIST_TITLE} ==")?;
    if state.is_loading() {
        writeln!(out, "{LOADING_TEXT}")?;
    } else if state.contacts().is_empty() {
        writeln!(out, "{EMPTY_TEXT}")?;
    } else {
        for contact in state.contacts() {
            write_contact(out, contact)?;
        }
    }
    Ok(())
}

fn write_contact(out: &mut impl fmt::Write, contact: &Contact) -> fmt::Result {
    writeln!(out, "- {}", contact.full_name)?;
    writeln!(out, "  {}", contact.email)?;
    writeln!(out, "  {}", contact.phone_number)?;
    if contact.has_notes() {
        writeln!(out, "  {}", contact.notes)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::{
        events::{PageEvent, PageToken},
        reducer::reduce,
    };
    use client_core::StoreError;
    use shared::domain::ContactId;

    fn loaded(contacts: Vec<Contact>, error: Option<StoreError>) -> PageState {
        let mut state = PageState::new(PageToken::next());
        let token = state.token();
        reduce(&mut state, PageEvent::MountStarted);
        reduce(
            &mut state,
            PageEvent::ContactsLoaded {
                token,
                contacts,
                error,
            },
        );
        state
    }

    #[test]
    fn shows_loading_while_fetch_is_pending() {
        let mut state = PageState::new(PageToken::next());
        reduce(&mut state, PageEvent::MountStarted);
        assert!(render_page(&state).contains(LOADING_TEXT));
    }

    #[test]
    fn shows_empty_text_without_contacts() {
        let rendered = render_page(&loaded(Vec::new(), None));
        assert!(rendered.contains(EMPTY_TEXT));
        assert!(!rendered.contains("! "));
    }

    #[test]
    fn lists_contacts_and_skips_blank_notes() {
        let contacts = vec![
            Contact {
                id: ContactId(2),
                full_name: "Bo".into(),
                email: "b@x.com".into(),
                phone_number: "111".into(),
                notes: "vip".into(),
            },
            Contact {
                id: ContactId(1),
                full_name: "Ann".into(),
                email: "a@x.com".into(),
                phone_number: "555".into(),
                notes: String::new(),
            },
        ];
        let rendered = render_page(&loaded(contacts, None));
        let list = rendered.split(LIST_TITLE).nth(1).expect("list section");
        assert_eq!(
            list.lines().collect::<Vec<_>>(),
            vec![
                " ==",
                "- Bo",
                "  b@x.com",
                "  111",
                "  vip",
                "- Ann",
                "  a@x.com",
                "  555"
            ]
        );
    }

    #[test]
    fn shows_error_and_disabled_submit_while_saving() {
        let mut state = loaded(Vec::new(), Some(StoreError::Network("offline".into())));
        let rendered = render_page(&state);
        assert!(rendered.contains("! offline"));
        assert!(rendered.contains(SAVE_LABEL));

        reduce(&mut state, PageEvent::SubmitStarted);
        let rendered = render_page(&state);
        assert!(rendered.contains(SAVING_LABEL));
        assert!(!rendered.contains("! offline"));
    }

    /// Sink that refuses every write.
    struct Refusing;

    impl fmt::Write for Refusing {
        fn write_str(&mut self, _: &str) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    #[test]
    fn write_errors_propagate_to_the_caller() {
        let state = loaded(Vec::new(), None);
        assert!(write_page(&mut Refusing, &state).is_err());

        let mut out = String::new();
        write_page(&mut out, &state).expect("string sink");
        assert_eq!(out, render_page(&state));
    }
}
