use crate::chart::{self, ChartConfig, ChartStyle, SeriesInput};
use crate::derivation::{self, DerivationError};
use crate::models::{
    DashboardCharts, DashboardQuery, DashboardResponse, ExpenseBreakdown, SeriesName,
    SeriesRecord, SummaryCharts, SummaryResponse,
};
use crate::period::{self, Granularity};
use crate::registry::Registry;
use crate::selection::{Selection, SelectionError};
use crate::stats::build_cards;

// same order as EXPENSE_CATEGORIES
const EXPENSE_COLORS: [&str; 5] = [
    chart::EXPENSE,
    chart::INCOME,
    chart::TRAVEL,
    chart::XERO,
    chart::PAYPAL,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartChoice {
    pub revenue: ChartStyle,
    pub expense: ChartStyle,
    pub cashflow: ChartStyle,
}

impl Default for ChartChoice {
    fn default() -> Self {
        Self {
            revenue: ChartStyle::Line,
            expense: ChartStyle::Doughnut,
            cashflow: ChartStyle::Bar,
        }
    }
}

impl ChartChoice {
    pub fn from_query(query: &DashboardQuery) -> Self {
        let defaults = Self::default();
        Self {
            revenue: ChartStyle::parse_or(query.revenue_chart.as_deref(), defaults.revenue),
            expense: ChartStyle::parse_or(query.expense_chart.as_deref(), defaults.expense),
            cashflow: ChartStyle::parse_or(query.cashflow_chart.as_deref(), defaults.cashflow),
        }
    }
}

/// Replays the query onto a fresh selection in the order the page applies
/// it: granularity (which resets everything), then period, then year.
pub fn selection_from_query(query: &DashboardQuery) -> Result<Selection, SelectionError> {
    let mut selection = Selection::default();
    if let Some(raw) = non_empty(query.granularity.as_deref()) {
        selection.set_granularity(raw.parse::<Granularity>()?);
    }
    if let Some(raw) = non_empty(query.period.as_deref()) {
        selection.set_period(raw)?;
    }
    if selection.shows_year() {
        if let Some(raw) = non_empty(query.year.as_deref()) {
            selection.set_year(period::parse_year(raw)?)?;
        }
    }
    Ok(selection)
}

fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|value| !value.is_empty())
}

pub fn build_dashboard(
    registry: &Registry,
    selection: &Selection,
    charts: ChartChoice,
) -> Result<DashboardResponse, DerivationError> {
    let bucket = selection.bucket();
    let series = registry.series(bucket);
    let stats = registry.stats(bucket);
    let record = series.record;

    let revenue = derivation::combine(&[
        record.values(SeriesName::XeroRevenue),
        record.values(SeriesName::PaypalRevenue),
    ])?;

    Ok(DashboardResponse {
        selection: selection.view(),
        series_key: series.resolved,
        stats_key: stats.resolved,
        fallback: series.is_fallback() || stats.is_fallback(),
        cards: build_cards(stats.record, selection.granularity()),
        revenue: derivation::calculate(&revenue, record.values(SeriesName::Expenses))?,
        cashflow: derivation::calculate(
            record.values(SeriesName::Income),
            record.values(SeriesName::Expenses),
        )?,
        charts: DashboardCharts {
            revenue: revenue_chart(record, charts.revenue),
            expense: expense_chart(registry.expenses(selection.granularity()), charts.expense),
            cashflow: cashflow_chart(record, charts.cashflow),
        },
    })
}

pub fn revenue_chart(record: &SeriesRecord, style: ChartStyle) -> ChartConfig {
    chart::shape(
        &record.labels,
        &[
            input(record, SeriesName::XeroRevenue, SeriesName::XeroRevenue.label(), chart::XERO),
            input(
                record,
                SeriesName::PaypalRevenue,
                SeriesName::PaypalRevenue.label(),
                chart::PAYPAL,
            ),
        ],
        style,
    )
}

pub fn cashflow_chart(record: &SeriesRecord, style: ChartStyle) -> ChartConfig {
    let (income, expenses) = if style.is_radial() {
        ("Total Income", "Total Expenses")
    } else {
        (SeriesName::Income.label(), SeriesName::Expenses.label())
    };
    chart::shape(
        &record.labels,
        &[
            input(record, SeriesName::Income, income, chart::INCOME),
            input(record, SeriesName::Expenses, expenses, chart::EXPENSE),
        ],
        style,
    )
}

/// Line charts show each category over the period; every other style shows
/// the category totals.
pub fn expense_chart(breakdown: &ExpenseBreakdown, style: ChartStyle) -> ChartConfig {
    if style == ChartStyle::Line {
        let series: Vec<_> = breakdown
            .categories
            .iter()
            .enumerate()
            .map(|(i, label)| SeriesInput {
                label: label.as_str(),
                color: EXPENSE_COLORS[i % EXPENSE_COLORS.len()],
                values: breakdown.trend.get(i).map_or(&[][..], Vec::as_slice),
            })
            .collect();
        let mut config = chart::shape(&breakdown.trend_labels, &series, style);
        for dataset in &mut config.data.datasets {
            dataset.fill = Some(false);
        }
        return config;
    }

    chart::shape_categories(
        "Expenses",
        &breakdown.categories,
        &breakdown.amounts,
        &EXPENSE_COLORS,
        style,
    )
}

fn input<'a>(
    record: &'a SeriesRecord,
    name: SeriesName,
    label: &'a str,
    color: &'a str,
) -> SeriesInput<'a> {
    SeriesInput {
        label,
        color,
        values: record.values(name),
    }
}

/// Revenue against expenses for the July to December summary page.
pub fn build_summary(registry: &Registry) -> Result<SummaryResponse, DerivationError> {
    let summary = registry.summary();
    let financials = derivation::calculate(&summary.revenue, &summary.expenses)?;

    let revenue_expense = chart::shape(
        &summary.months,
        &[
            SeriesInput {
                label: "Revenue",
                color: chart::SUMMARY_REVENUE,
                values: &summary.revenue,
            },
            SeriesInput {
                label: "Expenses",
                color: chart::SUMMARY_EXPENSE,
                values: &summary.expenses,
            },
        ],
        ChartStyle::Bar,
    );
    let profit_trend = chart::shape(
        &summary.months,
        &[SeriesInput {
            label: "Net Profit",
            color: chart::PROFIT,
            values: &financials.monthly_profit,
        }],
        ChartStyle::Line,
    );

    Ok(SummaryResponse {
        months: summary.months.clone(),
        charts: SummaryCharts {
            revenue_expense,
            profit_trend,
        },
        financials,
    })
}
