use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);
    };
}

id_newtype!(ContactId);

impl std::fmt::Display for ContactId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A contact that has round-tripped through the persistence service.
///
/// Only the service assigns `id`; drafts never carry one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: ContactId,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    #[serde(default)]
    pub notes: String,
}

impl Contact {
    pub fn has_notes(&self) -> bool {
        !self.notes.trim().is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftField {
    FullName,
    Email,
    PhoneNumber,
    Notes,
}

impl DraftField {
    pub const ALL: [DraftField; 4] = [
        DraftField::FullName,
        DraftField::Email,
        DraftField::PhoneNumber,
        DraftField::Notes,
    ];

    pub fn is_required(self) -> bool {
        !matches!(self, DraftField::Notes)
    }

    pub fn label(self) -> &'static str {
        match self {
            DraftField::FullName => "Full Name",
            DraftField::Email => "Email",
            DraftField::PhoneNumber => "Phone Number",
            DraftField::Notes => "Notes",
        }
    }
}

/// Unsaved form values. Default is the all-empty draft.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDraft {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    #[serde(default)]
    pub notes: String,
}

impl ContactDraft {
    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::FullName => &self.full_name,
            DraftField::Email => &self.email,
            DraftField::PhoneNumber => &self.phone_number,
            DraftField::Notes => &self.notes,
        }
    }

    /// Returns a new draft with exactly `field` replaced.
    pub fn with_field(&self, field: DraftField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let value = value.into();
        match field {
            DraftField::FullName => next.full_name = value,
            DraftField::Email => next.email = value,
            DraftField::PhoneNumber => next.phone_number = value,
            DraftField::Notes => next.notes = value,
        }
        next
    }

    pub fn missing_required_fields(&self) -> Vec<DraftField> {
        DraftField::ALL
            .into_iter()
            .filter(|field| field.is_required() && self.field(*field).trim().is_empty())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn into_contact(self, id: ContactId) -> Contact {
        Contact {
            id,
            full_name: self.full_name,
            email: self.email,
            phone_number: self.phone_number,
            notes: self.notes,
        }
    }
}
