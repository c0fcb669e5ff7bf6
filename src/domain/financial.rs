//! Financial profile of a client and the derived balance-sheet figures.

use serde::{Deserialize, Serialize};

/// Income, expense, asset and liability line items for a client.
///
/// `total_assets`, `total_liabilities`, `net_worth`, `debt_to_asset_ratio` and
/// `monthly_savings` are derived. Fixtures may omit or carry stale values for
/// them; [`FinancialData::with_derived_fields`] recomputes all five from the
/// line items and is the only supported way to populate them.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FinancialData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_income: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_expenses: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cash_savings: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub investment_portfolio: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retirement_accounts: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub real_estate_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_assets: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mortgage_debt: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_loans: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_card_debt: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_loans: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_liabilities: Option<f64>,

    /// Self-reported tolerance, free text as captured by the advisor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_tolerance: Option<String>,

    #[serde(default)]
    pub total_assets: f64,
    #[serde(default)]
    pub total_liabilities: f64,
    #[serde(default)]
    pub net_worth: f64,
    /// Absent whenever `total_assets` is not strictly positive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debt_to_asset_ratio: Option<f64>,
    /// Absent unless both monthly income and expenses are known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_savings: Option<f64>,
}

fn sum(items: &[Option<f64>]) -> f64 {
    items.iter().map(|item| item.unwrap_or(0.0)).sum()
}

impl FinancialData {
    /// Sum of the five asset line items, missing items counting as zero.
    pub fn asset_sum(&self) -> f64 {
        sum(&[
            self.cash_savings,
            self.investment_portfolio,
            self.retirement_accounts,
            self.real_estate_value,
            self.other_assets,
        ])
    }

    /// Sum of the five liability line items, missing items counting as zero.
    pub fn liability_sum(&self) -> f64 {
        sum(&[
            self.mortgage_debt,
            self.student_loans,
            self.credit_card_debt,
            self.personal_loans,
            self.other_liabilities,
        ])
    }

    /// Returns a copy with every derived field recomputed from the line items.
    #[must_use]
    pub fn with_derived_fields(&self) -> Self {
        let total_assets = self.asset_sum();
        let total_liabilities = self.liability_sum();

        let debt_to_asset_ratio = (total_assets > 0.0).then(|| total_liabilities / total_assets);
        let monthly_savings = match (self.monthly_income, self.monthly_expenses) {
            (Some(income), Some(expenses)) => Some(income - expenses),
            _ => None,
        };

        Self {
            total_assets,
            total_liabilities,
            net_worth: total_assets - total_liabilities,
            debt_to_asset_ratio,
            monthly_savings,
            ..self.clone()
        }
    }

    /// Whether the stored derived fields match a fresh recomputation.
    pub fn is_consistent(&self) -> bool {
        *self == self.with_derived_fields()
    }
}
