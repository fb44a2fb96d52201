use crate::chart::ChartConfig;
use crate::derivation::Financials;
use crate::period::{Bucket, Granularity};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SeriesName {
    XeroRevenue,
    PaypalRevenue,
    Income,
    Expenses,
}

impl SeriesName {
    pub fn label(self) -> &'static str {
        match self {
            SeriesName::XeroRevenue => "Xero Revenue",
            SeriesName::PaypalRevenue => "PayPal Revenue",
            SeriesName::Income => "Income",
            SeriesName::Expenses => "Expenses",
        }
    }
}

/// One bucket's chart data: named series aligned with `labels`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesRecord {
    pub labels: Vec<String>,
    pub series: BTreeMap<SeriesName, Vec<i64>>,
}

impl SeriesRecord {
    pub fn values(&self, name: SeriesName) -> &[i64] {
        self.series.get(&name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Series whose length differs from `labels`.
    pub fn misaligned(&self) -> Vec<SeriesName> {
        self.series
            .iter()
            .filter(|(_, values)| values.len() != self.labels.len())
            .map(|(name, _)| *name)
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Trend {
    pub value: f64,
    pub is_positive: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Trends {
    pub revenue: Trend,
    pub expense: Trend,
    pub profit: Trend,
    pub cashflow: Trend,
}

/// Precomputed headline figures for one bucket, in whole rupees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatsRecord {
    pub total_revenue: i64,
    pub total_expense: i64,
    pub net_profit: i64,
    pub net_cashflow: i64,
    pub trends: Trends,
}

/// Category split of expenses for one granularity, plus its trend lines.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseBreakdown {
    pub categories: Vec<String>,
    pub amounts: Vec<i64>,
    pub trend_labels: Vec<String>,
    pub trend: Vec<Vec<i64>>,
}

impl ExpenseBreakdown {
    /// Rows whose length disagrees with `categories` or `trend_labels`.
    pub fn misaligned(&self) -> Vec<String> {
        let mut rows = Vec::new();
        if self.amounts.len() != self.categories.len() {
            rows.push("amounts".to_string());
        }
        if self.trend.len() != self.categories.len() {
            rows.push("trend".to_string());
        }
        for (category, values) in self.categories.iter().zip(&self.trend) {
            if values.len() != self.trend_labels.len() {
                rows.push(category.clone());
            }
        }
        rows
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryDataset {
    pub months: Vec<String>,
    pub revenue: Vec<i64>,
    pub expenses: Vec<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    pub granularity: Option<String>,
    pub period: Option<String>,
    pub year: Option<String>,
    pub revenue_chart: Option<String>,
    pub expense_chart: Option<String>,
    pub cashflow_chart: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct OptionsQuery {
    pub granularity: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionView {
    pub granularity: Granularity,
    pub period: String,
    pub year: i32,
    pub key: Bucket,
}

#[derive(Debug, Serialize)]
pub struct OptionsResponse {
    pub granularity: Granularity,
    pub periods: Vec<String>,
    pub years: Vec<i32>,
    pub show_year: bool,
    pub defaults: SelectionView,
}

#[derive(Debug, Serialize)]
pub struct StatCard {
    pub title: &'static str,
    pub amount: i64,
    pub description: String,
    pub trend: Trend,
}

#[derive(Debug, Serialize)]
pub struct DashboardCharts {
    pub revenue: ChartConfig,
    pub expense: ChartConfig,
    pub cashflow: ChartConfig,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub selection: SelectionView,
    pub series_key: Bucket,
    pub stats_key: Bucket,
    pub fallback: bool,
    pub cards: Vec<StatCard>,
    pub revenue: Financials,
    pub cashflow: Financials,
    pub charts: DashboardCharts,
}

#[derive(Debug, Serialize)]
pub struct LookupResponse<T> {
    pub requested: Bucket,
    pub resolved: Bucket,
    pub fallback: bool,
    pub record: T,
}

#[derive(Debug, Serialize)]
pub struct SummaryCharts {
    pub revenue_expense: ChartConfig,
    pub profit_trend: ChartConfig,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub months: Vec<String>,
    pub financials: Financials,
    pub charts: SummaryCharts,
}
