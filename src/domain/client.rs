use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::communication::{Communication, NewCommunication};
use crate::domain::financial::FinancialData;
use crate::domain::note::ClientNote;
use crate::domain::types::{ClientEmail, ClientId, NoteContent, NoteId, TypeConstraintError, timestamp};

/// Generates a closed set of labels with `Display`/`FromStr` using the
/// variant name as the label. Parsing ignores case and surrounding spaces.
macro_rules! labelled_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub const fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant)),+
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = TypeConstraintError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let needle = s.trim();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|candidate| candidate.as_str().eq_ignore_ascii_case(needle))
                    .ok_or_else(|| {
                        TypeConstraintError::InvalidValue(format!(
                            "unknown {} `{needle}`",
                            stringify!($name)
                        ))
                    })
            }
        }
    };
}

labelled_enum!(
    /// Relationship stage of a client.
    ClientStatus { Active, Prospect, Inactive }
);

labelled_enum!(
    /// Stated investment risk appetite.
    RiskProfile { Conservative, Balanced, Growth }
);

labelled_enum!(
    /// Service tier the client pays for.
    SubscriptionType { Essentials, Core, Concierge }
);

labelled_enum!(Priority { Low, Medium, High });

labelled_enum!(BillingCycle { Monthly, Quarterly, Annually });

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersonalData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marital_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependents: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
}

/// Advisory bookkeeping attached to a client.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClientMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advisor: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_cycle: Option<BillingCycle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joined_at: Option<String>,
}

/// Client record as held by the repository.
///
/// Records are snapshots: every mutation below returns a new value and leaves
/// `self` untouched.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: ClientId,
    pub first_name: String,
    pub last_name: String,
    pub email: ClientEmail,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    pub country: String,
    pub status: ClientStatus,
    pub risk_profile: RiskProfile,
    pub subscription_type: SubscriptionType,
    /// Assets under advisement.
    pub aua: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_retainer: Option<f64>,
    #[serde(with = "timestamp")]
    pub last_contacted_at: NaiveDateTime,
    #[serde(with = "timestamp")]
    pub created_at: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_data: Option<PersonalData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financial_data: Option<FinancialData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ClientMetadata>,
    #[serde(default)]
    pub notes: Vec<ClientNote>,
    #[serde(default)]
    pub communications: Vec<Communication>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_drive_link: Option<String>,
}

impl Client {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// "City, Country" when the city is known, otherwise just the country.
    pub fn location(&self) -> String {
        match self.city.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
            Some(city) => format!("{city}, {}", self.country),
            None => self.country.clone(),
        }
    }

    pub fn advisor(&self) -> Option<&str> {
        self.metadata.as_ref().and_then(|m| m.advisor.as_deref())
    }

    /// Returns the client with its financial derived fields recomputed.
    ///
    /// A client without financial data is returned as is.
    #[must_use]
    pub fn with_calculations(&self) -> Self {
        match &self.financial_data {
            Some(data) => Self {
                financial_data: Some(data.with_derived_fields()),
                ..self.clone()
            },
            None => self.clone(),
        }
    }

    /// Appends a note stamped with the current time.
    #[must_use]
    pub fn add_note(&self, content: &str, author: &str) -> Self {
        self.add_note_at(content, author, Utc::now().naive_utc())
    }

    /// Appends a note created at `at`. Blank content leaves the notes untouched.
    #[must_use]
    pub fn add_note_at(&self, content: &str, author: &str, at: NaiveDateTime) -> Self {
        let Ok(content) = NoteContent::new(content) else {
            return self.clone();
        };

        let mut notes = self.notes.clone();
        notes.push(ClientNote::new(content, author, at));
        Self {
            notes,
            ..self.clone()
        }
    }

    /// Drops the note with `note_id`; unknown ids are ignored.
    #[must_use]
    pub fn delete_note(&self, note_id: &NoteId) -> Self {
        Self {
            notes: self
                .notes
                .iter()
                .filter(|note| &note.id != note_id)
                .cloned()
                .collect(),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn add_communication(&self, communication: NewCommunication) -> Self {
        self.add_communication_at(communication, Utc::now().naive_utc())
    }

    /// Appends a communication dated `at` and moves `last_contacted_at` to `at`.
    #[must_use]
    pub fn add_communication_at(&self, communication: NewCommunication, at: NaiveDateTime) -> Self {
        let mut communications = self.communications.clone();
        communications.push(communication.into_communication(at));
        Self {
            communications,
            last_contacted_at: at,
            ..self.clone()
        }
    }

    /// Notes ordered newest first.
    pub fn notes_newest_first(&self) -> Vec<ClientNote> {
        let mut notes = self.notes.clone();
        notes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        notes
    }

    /// Up to `limit` communications ordered newest first.
    pub fn recent_communications(&self, limit: usize) -> Vec<Communication> {
        let mut communications = self.communications.clone();
        communications.sort_by(|a, b| b.date.cmp(&a.date));
        communications.truncate(limit);
        communications
    }

    /// Rough percentage of profile fields that have been filled in.
    pub fn profile_completion(&self) -> u8 {
        let mut completed = 0u32;
        let mut total = 5u32;

        let identity_complete = !self.first_name.trim().is_empty()
            && !self.last_name.trim().is_empty()
            && !self.country.trim().is_empty();
        if identity_complete {
            completed += 5;
        }

        if let Some(personal) = &self.personal_data {
            total += 3;
            completed += [
                &personal.phone,
                &personal.date_of_birth,
                &personal.occupation,
            ]
            .iter()
            .filter(|value| value.as_deref().is_some_and(|v| !v.trim().is_empty()))
            .count() as u32;
        }

        if let Some(financial) = &self.financial_data {
            total += 3;
            if financial.monthly_income.is_some_and(|v| v != 0.0) {
                completed += 1;
            }
            if financial.total_assets != 0.0 {
                completed += 1;
            }
            if financial
                .risk_tolerance
                .as_deref()
                .is_some_and(|v| !v.trim().is_empty())
            {
                completed += 1;
            }
        }

        ((completed as f64 / total as f64) * 100.0).round() as u8
    }
}

/// A change applied to the stored record of a single client.
#[derive(Clone, Debug, PartialEq)]
pub enum ClientUpdate {
    AddNote { content: String, author: String },
    DeleteNote(NoteId),
    AddCommunication(NewCommunication),
}

impl ClientUpdate {
    /// Applies the change to `client`, returning the new snapshot.
    #[must_use]
    pub fn apply(&self, client: &Client) -> Client {
        match self {
            ClientUpdate::AddNote { content, author } => client.add_note(content, author),
            ClientUpdate::DeleteNote(note_id) => client.delete_note(note_id),
            ClientUpdate::AddCommunication(payload) => client.add_communication(payload.clone()),
        }
    }
}

/// Input for creating a client at runtime.
#[derive(Clone, Debug, PartialEq)]
pub struct NewClient {
    pub first_name: String,
    pub last_name: String,
    pub email: ClientEmail,
    pub city: Option<String>,
    pub country: String,
    pub status: ClientStatus,
    pub risk_profile: RiskProfile,
    pub subscription_type: SubscriptionType,
    pub aua: f64,
}

impl NewClient {
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        first_name: String,
        last_name: String,
        email: ClientEmail,
        city: Option<String>,
        country: String,
        status: ClientStatus,
        risk_profile: RiskProfile,
        subscription_type: SubscriptionType,
        aua: f64,
    ) -> Self {
        Self {
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            email,
            city: city
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            country: country.trim().to_string(),
            status,
            risk_profile,
            subscription_type,
            aua,
        }
    }

    /// Builds the stored record; both timestamps start at `now`.
    pub fn into_client(self, id: ClientId, now: NaiveDateTime) -> Client {
        Client {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            city: self.city,
            country: self.country,
            status: self.status,
            risk_profile: self.risk_profile,
            subscription_type: self.subscription_type,
            aua: self.aua,
            monthly_retainer: None,
            last_contacted_at: now,
            created_at: now,
            personal_data: None,
            financial_data: None,
            metadata: None,
            notes: Vec::new(),
            communications: Vec::new(),
            google_drive_link: None,
        }
    }
}
