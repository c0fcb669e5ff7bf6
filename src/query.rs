//! Filter, search and sort pipeline behind the client list.
//!
//! Every filter narrows the set independently (AND semantics) and keeps the
//! input order. Sorting runs last, as stable passes over the filtered set.

use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::client::{Client, ClientStatus, RiskProfile, SubscriptionType};
use crate::domain::types::TypeConstraintError;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl FromStr for SortOrder {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown sort order `{other}`"
            ))),
        }
    }
}

/// Inclusive AUA bounds; `max: None` means unbounded.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuaRange {
    pub min: f64,
    pub max: Option<f64>,
}

impl AuaRange {
    pub fn new(min: f64, max: Option<f64>) -> Self {
        Self { min, max }
    }

    pub fn at_least(min: f64) -> Self {
        Self { min, max: None }
    }

    pub fn contains(&self, aua: f64) -> bool {
        aua >= self.min && self.max.is_none_or(|max| aua <= max)
    }
}

/// Preset AUA ranges offered by the list view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuaBracket {
    Under50k,
    From50kTo250k,
    From250kTo500k,
    Over500k,
}

impl AuaBracket {
    pub const ALL: [AuaBracket; 4] = [
        AuaBracket::Under50k,
        AuaBracket::From50kTo250k,
        AuaBracket::From250kTo500k,
        AuaBracket::Over500k,
    ];

    pub fn range(self) -> AuaRange {
        match self {
            AuaBracket::Under50k => AuaRange::new(0.0, Some(50_000.0)),
            AuaBracket::From50kTo250k => AuaRange::new(50_000.0, Some(250_000.0)),
            AuaBracket::From250kTo500k => AuaRange::new(250_000.0, Some(500_000.0)),
            AuaBracket::Over500k => AuaRange::at_least(500_000.0),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AuaBracket::Under50k => "Under $50k",
            AuaBracket::From50kTo250k => "$50k - $250k",
            AuaBracket::From250kTo500k => "$250k - $500k",
            AuaBracket::Over500k => "Over $500k",
        }
    }
}

impl FromStr for AuaBracket {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "under_50k" => Ok(AuaBracket::Under50k),
            "from_50k_to_250k" => Ok(AuaBracket::From50kTo250k),
            "from_250k_to_500k" => Ok(AuaBracket::From250kTo500k),
            "over_500k" => Ok(AuaBracket::Over500k),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown AUA bracket `{other}`"
            ))),
        }
    }
}

/// Recency thresholds for the last-contacted filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LastContactWindow {
    Last7Days,
    Last30Days,
    Last90Days,
}

impl LastContactWindow {
    pub const fn days(self) -> i64 {
        match self {
            LastContactWindow::Last7Days => 7,
            LastContactWindow::Last30Days => 30,
            LastContactWindow::Last90Days => 90,
        }
    }
}

impl Display for LastContactWindow {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Last {} days", self.days())
    }
}

impl TryFrom<u32> for LastContactWindow {
    type Error = TypeConstraintError;

    fn try_from(days: u32) -> Result<Self, Self::Error> {
        match days {
            7 => Ok(LastContactWindow::Last7Days),
            30 => Ok(LastContactWindow::Last30Days),
            90 => Ok(LastContactWindow::Last90Days),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unsupported last-contact window of {other} days"
            ))),
        }
    }
}

/// Whole days elapsed since the last contact, floored.
///
/// Contacts dated after `now` give a negative count.
pub fn days_since_contact(client: &Client, now: NaiveDateTime) -> i64 {
    (now - client.last_contacted_at)
        .num_milliseconds()
        .div_euclid(MILLIS_PER_DAY)
}

/// Case-insensitive substring match over name, email, location and labels.
///
/// A blank query matches every client.
pub fn matches_search(client: &Client, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    [
        client.full_name(),
        client.email.to_string(),
        client.location(),
        client.status.to_string(),
        client.risk_profile.to_string(),
        client.subscription_type.to_string(),
    ]
    .iter()
    .any(|haystack| haystack.to_lowercase().contains(&needle))
}

fn in_selection<T: PartialEq>(selection: &[T], value: &T) -> bool {
    selection.is_empty() || selection.contains(value)
}

pub fn sort_by_aua(clients: &mut [Client], order: SortOrder) {
    clients.sort_by(|a, b| match order {
        SortOrder::Asc => a.aua.total_cmp(&b.aua),
        SortOrder::Desc => b.aua.total_cmp(&a.aua),
    });
}

pub fn sort_by_last_contact(clients: &mut [Client], order: SortOrder) {
    clients.sort_by(|a, b| match order {
        SortOrder::Asc => a.last_contacted_at.cmp(&b.last_contacted_at),
        SortOrder::Desc => b.last_contacted_at.cmp(&a.last_contacted_at),
    });
}

pub fn sort_by_name(clients: &mut [Client], order: SortOrder) {
    clients.sort_by(|a, b| {
        let (left, right) = (a.full_name().to_lowercase(), b.full_name().to_lowercase());
        match order {
            SortOrder::Asc => left.cmp(&right),
            SortOrder::Desc => right.cmp(&left),
        }
    });
}

/// Sorted, de-duplicated countries present in `clients`.
pub fn available_countries(clients: &[Client]) -> Vec<String> {
    clients
        .iter()
        .map(|c| c.country.trim().to_string())
        .filter(|c| !c.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Parameters of a client list request.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClientQuery {
    pub search: Option<String>,
    pub countries: Vec<String>,
    pub subscriptions: Vec<SubscriptionType>,
    pub statuses: Vec<ClientStatus>,
    pub risk_profiles: Vec<RiskProfile>,
    pub aua_range: Option<AuaRange>,
    pub last_contact_within: Option<LastContactWindow>,
    /// Inclusive `[start, end]` window on `last_contacted_at`.
    pub last_contacted_between: Option<(NaiveDateTime, NaiveDateTime)>,
    pub sort_by_name: Option<SortOrder>,
    pub sort_by_last_contact: Option<SortOrder>,
    pub sort_by_aua: Option<SortOrder>,
}

impl ClientQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into()).filter(|s: &String| !s.trim().is_empty());
        self
    }

    pub fn countries<I, S>(mut self, countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.countries = countries
            .into_iter()
            .map(|c| c.into().trim().to_string())
            .filter(|c| !c.is_empty())
            .collect();
        self
    }

    pub fn subscriptions(mut self, subscriptions: impl IntoIterator<Item = SubscriptionType>) -> Self {
        self.subscriptions = subscriptions.into_iter().collect();
        self
    }

    pub fn statuses(mut self, statuses: impl IntoIterator<Item = ClientStatus>) -> Self {
        self.statuses = statuses.into_iter().collect();
        self
    }

    pub fn risk_profiles(mut self, risk_profiles: impl IntoIterator<Item = RiskProfile>) -> Self {
        self.risk_profiles = risk_profiles.into_iter().collect();
        self
    }

    pub fn aua_range(mut self, range: AuaRange) -> Self {
        self.aua_range = Some(range);
        self
    }

    pub fn aua_bracket(self, bracket: AuaBracket) -> Self {
        self.aua_range(bracket.range())
    }

    pub fn last_contact_within(mut self, window: LastContactWindow) -> Self {
        self.last_contact_within = Some(window);
        self
    }

    pub fn last_contacted_between(mut self, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        self.last_contacted_between = Some((start, end));
        self
    }

    pub fn sort_by_name(mut self, order: SortOrder) -> Self {
        self.sort_by_name = Some(order);
        self
    }

    pub fn sort_by_last_contact(mut self, order: SortOrder) -> Self {
        self.sort_by_last_contact = Some(order);
        self
    }

    pub fn sort_by_aua(mut self, order: SortOrder) -> Self {
        self.sort_by_aua = Some(order);
        self
    }

    /// Whether any filter or sort is active.
    pub fn is_filtered(&self) -> bool {
        self.search.is_some()
            || !self.countries.is_empty()
            || !self.subscriptions.is_empty()
            || !self.statuses.is_empty()
            || !self.risk_profiles.is_empty()
            || self.aua_range.is_some()
            || self.last_contact_within.is_some()
            || self.last_contacted_between.is_some()
            || self.sort_by_name.is_some()
            || self.sort_by_last_contact.is_some()
            || self.sort_by_aua.is_some()
    }

    /// Whether `client` passes every active filter.
    pub fn matches(&self, client: &Client, now: NaiveDateTime) -> bool {
        let country = client.country.trim();

        self.search
            .as_deref()
            .is_none_or(|search| matches_search(client, search))
            && (self.countries.is_empty() || self.countries.iter().any(|c| c == country))
            && in_selection(&self.subscriptions, &client.subscription_type)
            && in_selection(&self.statuses, &client.status)
            && in_selection(&self.risk_profiles, &client.risk_profile)
            && self.aua_range.is_none_or(|range| range.contains(client.aua))
            && self
                .last_contact_within
                .is_none_or(|window| days_since_contact(client, now) <= window.days())
            && self.last_contacted_between.is_none_or(|(start, end)| {
                client.last_contacted_at >= start && client.last_contacted_at <= end
            })
    }

    /// Runs the active sort passes. Later passes take precedence and earlier
    /// ones survive as tie-breakers.
    pub fn sort(&self, clients: &mut [Client]) {
        if let Some(order) = self.sort_by_name {
            sort_by_name(clients, order);
        }
        if let Some(order) = self.sort_by_last_contact {
            sort_by_last_contact(clients, order);
        }
        if let Some(order) = self.sort_by_aua {
            sort_by_aua(clients, order);
        }
    }

    /// Filters then sorts `clients`, leaving the input untouched.
    pub fn apply(&self, clients: &[Client], now: NaiveDateTime) -> Vec<Client> {
        let mut visible: Vec<Client> = clients
            .iter()
            .filter(|client| self.matches(client, now))
            .cloned()
            .collect();
        self.sort(&mut visible);
        visible
    }
}
