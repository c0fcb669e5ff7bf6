use serde::{Deserialize, Serialize};

use crate::domain::client::Client;
use crate::domain::types::{TypeConstraintError, non_negative_amount};
use crate::pagination::Paginated;
use crate::query::{AuaBracket, AuaRange, ClientQuery, LastContactWindow};
use crate::stats::PortfolioSummary;

/// Raw list parameters as they arrive from a query string.
///
/// Set filters repeat their key (`country=Ghana&country=UK`).
#[derive(Debug, Default, Deserialize)]
pub struct IndexQuery {
    pub search: Option<String>,
    #[serde(default)]
    pub country: Vec<String>,
    #[serde(default)]
    pub subscription: Vec<String>,
    #[serde(default)]
    pub status: Vec<String>,
    #[serde(default)]
    pub risk: Vec<String>,
    pub aua_min: Option<f64>,
    pub aua_max: Option<f64>,
    /// Preset range; takes precedence over `aua_min`/`aua_max`.
    pub aua_bracket: Option<String>,
    pub last_contact_days: Option<u32>,
    pub sort_aua: Option<String>,
    pub sort_last_contact: Option<String>,
    pub sort_name: Option<String>,
    pub page: Option<usize>,
}

fn parse_all<T>(labels: &[String]) -> Result<Vec<T>, TypeConstraintError>
where
    T: std::str::FromStr<Err = TypeConstraintError>,
{
    labels
        .iter()
        .filter(|label| !label.trim().is_empty())
        .map(|label| label.parse())
        .collect()
}

impl TryFrom<&IndexQuery> for ClientQuery {
    type Error = TypeConstraintError;

    fn try_from(params: &IndexQuery) -> Result<Self, Self::Error> {
        let mut query = ClientQuery::new()
            .countries(params.country.iter().cloned())
            .subscriptions(parse_all(&params.subscription)?)
            .statuses(parse_all(&params.status)?)
            .risk_profiles(parse_all(&params.risk)?);

        if let Some(search) = params
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            query = query.search(search);
        }

        if let Some(bracket) = &params.aua_bracket {
            query = query.aua_bracket(bracket.parse::<AuaBracket>()?);
        } else if params.aua_min.is_some() || params.aua_max.is_some() {
            let min = params.aua_min.map(non_negative_amount).transpose()?;
            let max = params.aua_max.map(non_negative_amount).transpose()?;
            query = query.aua_range(AuaRange::new(min.unwrap_or(0.0), max));
        }

        if let Some(days) = params.last_contact_days {
            query = query.last_contact_within(LastContactWindow::try_from(days)?);
        }

        if let Some(order) = &params.sort_name {
            query = query.sort_by_name(order.parse()?);
        }
        if let Some(order) = &params.sort_last_contact {
            query = query.sort_by_last_contact(order.parse()?);
        }
        if let Some(order) = &params.sort_aua {
            query = query.sort_by_aua(order.parse()?);
        }

        Ok(query)
    }
}

/// Data required to render the main client list.
#[derive(Debug, Serialize)]
pub struct IndexPageData {
    /// Paginated list of clients to show in the table.
    pub clients: Paginated<Client>,
    /// Search query echoed back when present.
    pub search_query: Option<String>,
    /// Country filter options drawn from the whole book.
    pub countries: Vec<String>,
    pub has_active_filters: bool,
    /// Aggregates over the filtered set.
    pub summary: PortfolioSummary,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::client::{ClientStatus, SubscriptionType};
    use crate::query::SortOrder;

    #[test]
    fn empty_params_build_unfiltered_query() {
        let query = ClientQuery::try_from(&IndexQuery::default()).unwrap();
        assert!(!query.is_filtered());
    }

    #[cfg(feature = "server")]
    #[test]
    fn repeated_keys_become_selections() {
        let params: IndexQuery = serde_html_form::from_str(
            "country=Ghana&country=UK&subscription=Core&status=active&sort_aua=desc&aua_min=1000",
        )
        .unwrap();
        let query = ClientQuery::try_from(&params).unwrap();

        assert_eq!(query.countries, vec!["Ghana", "UK"]);
        assert_eq!(query.subscriptions, vec![SubscriptionType::Core]);
        assert_eq!(query.statuses, vec![ClientStatus::Active]);
        assert_eq!(query.sort_by_aua, Some(SortOrder::Desc));
        assert_eq!(query.aua_range, Some(AuaRange::at_least(1000.0)));
    }

    #[test]
    fn bracket_overrides_explicit_bounds() {
        let params = IndexQuery {
            aua_bracket: Some("under_50k".into()),
            aua_min: Some(100.0),
            ..IndexQuery::default()
        };
        let query = ClientQuery::try_from(&params).unwrap();
        assert_eq!(query.aua_range, Some(AuaBracket::Under50k.range()));
    }

    #[test]
    fn non_finite_bounds_are_rejected() {
        for bounds in [(Some(f64::NAN), None), (None, Some(f64::INFINITY)), (Some(-1.0), None)] {
            let params = IndexQuery {
                aua_min: bounds.0,
                aua_max: bounds.1,
                ..IndexQuery::default()
            };
            assert!(matches!(
                ClientQuery::try_from(&params),
                Err(TypeConstraintError::InvalidAmount)
            ));
        }
    }

    #[test]
    fn unknown_labels_are_rejected() {
        let params = IndexQuery {
            risk: vec!["Reckless".into()],
            ..IndexQuery::default()
        };
        assert!(ClientQuery::try_from(&params).is_err());

        let params = IndexQuery {
            last_contact_days: Some(45),
            ..IndexQuery::default()
        };
        assert!(ClientQuery::try_from(&params).is_err());
    }
}
