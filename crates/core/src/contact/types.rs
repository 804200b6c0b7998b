//! Contact types.

use compta_shared::types::ContactId;
use serde::{Deserialize, Serialize};

/// A supplier or client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Identifier assigned at creation.
    pub id: ContactId,
    /// Unique, trimmed, non-empty name (company or last name).
    pub name: String,
    /// First name.
    pub first_name: Option<String>,
    /// Phone number.
    pub phone: Option<String>,
    /// Email address.
    pub email: Option<String>,
}

impl Contact {
    /// Creates a contact with only a name, as done when a counterpart is
    /// created on demand.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: ContactId::new(),
            name: name.into(),
            first_name: None,
            phone: None,
            email: None,
        }
    }
}

/// Raw contact form fields. Blank optional fields are stored as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ContactDraft {
    /// Name (required).
    pub name: String,
    /// First name.
    #[serde(default)]
    pub first_name: String,
    /// Phone number.
    #[serde(default)]
    pub phone: String,
    /// Email address.
    #[serde(default)]
    pub email: String,
}

impl ContactDraft {
    /// Draft with only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Trimmed name.
    #[must_use]
    pub fn trimmed_name(&self) -> &str {
        self.name.trim()
    }

    /// Builds the contact this draft describes under `id`.
    #[must_use]
    pub fn to_contact(&self, id: ContactId) -> Contact {
        Contact {
            id,
            name: self.trimmed_name().to_string(),
            first_name: optional(&self.first_name),
            phone: optional(&self.phone),
            email: optional(&self.email),
        }
    }
}

fn optional(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Outcome of resolving a transaction counterpart against the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterpartResolution {
    /// A contact with this name already existed.
    Existing(Contact),
    /// The user agreed to create the contact.
    Created(Contact),
    /// The user declined; the transaction is recorded without a contact.
    Declined,
}

impl CounterpartResolution {
    /// Contact id to attach to the transaction.
    #[must_use]
    pub fn contact_id(&self) -> Option<ContactId> {
        match self {
            Self::Existing(contact) | Self::Created(contact) => Some(contact.id),
            Self::Declined => None,
        }
    }
}
