use serde::Deserialize;
use validator::Validate;

use crate::domain::communication::{CommunicationDirection, CommunicationType, NewCommunication};
use crate::forms::FormError;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Form data for attaching a note to a client.
pub struct AddNoteForm {
    /// Note text. Blank text is accepted and ignored.
    #[serde(default)]
    pub content: String,
    /// Name of the advisor writing the note.
    #[validate(length(min = 1))]
    pub author: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Form data for logging an interaction with a client.
pub struct AddCommunicationForm {
    /// One of `email`, `call`, `meeting`, `message`.
    #[serde(rename = "type")]
    pub communication_type: String,
    #[serde(default)]
    pub content: String,
    /// `inbound` or `outbound`.
    pub direction: String,
    #[validate(length(max = 200))]
    pub subject: Option<String>,
    /// Minutes, capped at one day.
    #[validate(range(min = 1, max = 1440))]
    pub duration: Option<u32>,
}

impl AddCommunicationForm {
    /// Validates the form and converts it into the domain payload.
    pub fn to_new_communication(&self) -> Result<NewCommunication, FormError> {
        self.validate()?;

        let communication_type: CommunicationType = self.communication_type.parse()?;
        let direction: CommunicationDirection = self.direction.parse()?;

        let mut payload = NewCommunication::new(communication_type, self.content.trim(), direction);
        if let Some(subject) = &self.subject {
            payload = payload.subject(subject.trim());
        }
        if let Some(duration) = self.duration {
            payload = payload.duration(duration);
        }
        Ok(payload)
    }
}
