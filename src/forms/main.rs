use serde::Deserialize;
use validator::Validate;

use crate::domain::client::{ClientStatus, NewClient, RiskProfile, SubscriptionType};
use crate::domain::types::ClientEmail;
use crate::forms::FormError;

fn default_status() -> String {
    ClientStatus::Active.to_string()
}

fn default_risk_profile() -> String {
    RiskProfile::Balanced.to_string()
}

fn default_subscription() -> String {
    SubscriptionType::Essentials.to_string()
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Form data for creating a client.
pub struct AddClientForm {
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    pub city: Option<String>,
    #[validate(length(min = 1))]
    pub country: String,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default = "default_risk_profile")]
    pub risk_profile: String,
    #[serde(default = "default_subscription")]
    pub subscription_type: String,
    /// Assets under advisement in USD.
    #[validate(range(min = 0.0))]
    #[serde(default)]
    pub aua: f64,
}

impl AddClientForm {
    /// Validates the form and converts it into a [`NewClient`].
    pub fn to_new_client(&self) -> Result<NewClient, FormError> {
        self.validate()?;

        Ok(NewClient::new(
            self.first_name.clone(),
            self.last_name.clone(),
            ClientEmail::new(self.email.as_str())?,
            self.city.clone(),
            self.country.clone(),
            self.status.parse()?,
            self.risk_profile.parse()?,
            self.subscription_type.parse()?,
            self.aua,
        ))
    }
}
