//! Adapter for the flat client shape (`fullName`, combined `location`).
//!
//! Older fixtures and CSV exports describe a client with a single name and a
//! "City, Country" string. They are converted into the canonical [`Client`]
//! on load and never stored in their original form.

use serde::Deserialize;

use crate::domain::client::{Client, ClientStatus, RiskProfile, SubscriptionType};
use crate::domain::types::{
    ClientEmail, ClientId, TypeConstraintError, non_negative_amount, parse_timestamp,
};

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LegacyClient {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub location: String,
    pub status: String,
    pub risk_profile: String,
    #[serde(default)]
    pub subscription_type: Option<String>,
    pub aua: f64,
    pub last_contacted_at: String,
}

/// Country taken from the trailing comma-separated segment of `location`.
pub fn country_from_location(location: &str) -> Option<&str> {
    location
        .rsplit(',')
        .next()
        .map(str::trim)
        .filter(|country| !country.is_empty())
}

/// Everything before the trailing segment, if anything.
fn city_from_location(location: &str) -> Option<String> {
    location
        .rsplit_once(',')
        .map(|(city, _)| city.trim().to_string())
        .filter(|city| !city.is_empty())
}

fn split_full_name(full_name: &str) -> (String, String) {
    let trimmed = full_name.trim();
    match trimmed.split_once(char::is_whitespace) {
        Some((first, rest)) => (first.to_string(), rest.trim().to_string()),
        None => (trimmed.to_string(), String::new()),
    }
}

impl TryFrom<LegacyClient> for Client {
    type Error = TypeConstraintError;

    fn try_from(legacy: LegacyClient) -> Result<Self, Self::Error> {
        let id = ClientId::new(legacy.id)?;
        let (first_name, last_name) = split_full_name(&legacy.full_name);
        if first_name.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }

        let country = country_from_location(&legacy.location)
            .ok_or(TypeConstraintError::EmptyString)?
            .to_string();

        let subscription_type = match legacy.subscription_type.as_deref() {
            Some(label) if !label.trim().is_empty() => label.parse()?,
            _ => SubscriptionType::Essentials,
        };

        let last_contacted_at = parse_timestamp(&legacy.last_contacted_at)?;

        Ok(Client {
            id,
            first_name,
            last_name,
            email: ClientEmail::new(legacy.email)?,
            city: city_from_location(&legacy.location),
            country,
            status: legacy.status.parse::<ClientStatus>()?,
            risk_profile: legacy.risk_profile.parse::<RiskProfile>()?,
            subscription_type,
            aua: non_negative_amount(legacy.aua)?,
            monthly_retainer: None,
            last_contacted_at,
            created_at: last_contacted_at,
            personal_data: None,
            financial_data: None,
            metadata: None,
            notes: Vec::new(),
            communications: Vec::new(),
            google_drive_link: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn legacy(location: &str) -> LegacyClient {
        LegacyClient {
            id: "cl_010".into(),
            full_name: "Lucas Silva Costa".into(),
            email: "lucas.silva@example.com".into(),
            location: location.into(),
            status: "Inactive".into(),
            risk_profile: "Balanced".into(),
            subscription_type: None,
            aua: 15_000.0,
            last_contacted_at: "2025-12-20".into(),
        }
    }

    #[test]
    fn country_is_trailing_segment() {
        assert_eq!(country_from_location("Accra, Ghana"), Some("Ghana"));
        assert_eq!(country_from_location("Kensington, London, UK"), Some("UK"));
        assert_eq!(country_from_location("Japan"), Some("Japan"));
        assert_eq!(country_from_location("Paris, "), None);
    }

    #[test]
    fn converts_to_structured_client() {
        let client = Client::try_from(legacy("São Paulo, Brazil")).unwrap();

        assert_eq!(client.first_name, "Lucas");
        assert_eq!(client.last_name, "Silva Costa");
        assert_eq!(client.city.as_deref(), Some("São Paulo"));
        assert_eq!(client.country, "Brazil");
        assert_eq!(client.status, ClientStatus::Inactive);
        assert_eq!(client.subscription_type, SubscriptionType::Essentials);
        assert_eq!(client.created_at, client.last_contacted_at);
    }

    #[test]
    fn location_without_city_keeps_country_only() {
        let client = Client::try_from(legacy("Brazil")).unwrap();
        assert_eq!(client.city, None);
        assert_eq!(client.location(), "Brazil");
    }

    #[test]
    fn rejects_unknown_status() {
        let mut raw = legacy("Madrid, Spain");
        raw.status = "Dormant".into();
        assert!(matches!(
            Client::try_from(raw),
            Err(TypeConstraintError::InvalidValue(_))
        ));
    }
}
