use std::fmt::Display;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{CommunicationId, TypeConstraintError, timestamp};

/// A logged interaction with a client.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Communication {
    pub id: CommunicationId,
    #[serde(rename = "type")]
    pub communication_type: CommunicationType,
    pub direction: CommunicationDirection,
    #[serde(with = "timestamp")]
    pub date: NaiveDateTime,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Length of a call or meeting in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub participants: Vec<String>,
    #[serde(default)]
    pub follow_up_required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follow_up_date: Option<String>,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CommunicationType {
    Email,
    Call,
    Meeting,
    Message,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CommunicationDirection {
    Inbound,
    Outbound,
}

impl Display for CommunicationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommunicationType::Email => write!(f, "email"),
            CommunicationType::Call => write!(f, "call"),
            CommunicationType::Meeting => write!(f, "meeting"),
            CommunicationType::Message => write!(f, "message"),
        }
    }
}

impl FromStr for CommunicationType {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "email" => Ok(CommunicationType::Email),
            "call" => Ok(CommunicationType::Call),
            "meeting" => Ok(CommunicationType::Meeting),
            "message" => Ok(CommunicationType::Message),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown communication type `{other}`"
            ))),
        }
    }
}

impl Display for CommunicationDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommunicationDirection::Inbound => write!(f, "inbound"),
            CommunicationDirection::Outbound => write!(f, "outbound"),
        }
    }
}

impl FromStr for CommunicationDirection {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "inbound" => Ok(CommunicationDirection::Inbound),
            "outbound" => Ok(CommunicationDirection::Outbound),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown communication direction `{other}`"
            ))),
        }
    }
}

/// Payload for logging a new interaction.
#[derive(Clone, Debug, PartialEq)]
pub struct NewCommunication {
    pub communication_type: CommunicationType,
    pub content: String,
    pub direction: CommunicationDirection,
    pub subject: Option<String>,
    pub duration: Option<u32>,
}

impl NewCommunication {
    pub fn new(
        communication_type: CommunicationType,
        content: impl Into<String>,
        direction: CommunicationDirection,
    ) -> Self {
        Self {
            communication_type,
            content: content.into(),
            direction,
            subject: None,
            duration: None,
        }
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into()).filter(|s: &String| !s.trim().is_empty());
        self
    }

    pub fn duration(mut self, minutes: u32) -> Self {
        self.duration = Some(minutes);
        self
    }

    /// Materializes the communication with a fresh id and the given date.
    pub fn into_communication(self, date: NaiveDateTime) -> Communication {
        Communication {
            id: CommunicationId::generate(),
            communication_type: self.communication_type,
            direction: self.direction,
            date,
            content: self.content,
            subject: self.subject,
            duration: self.duration,
            participants: Vec::new(),
            follow_up_required: false,
            follow_up_date: None,
        }
    }
}
