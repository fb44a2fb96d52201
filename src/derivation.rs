use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("series length mismatch: {left} values against {right}")]
pub struct DerivationError {
    pub left: usize,
    pub right: usize,
}

/// Totals and per-period differences of an income-like series against an
/// outgoing one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Financials {
    pub total_revenue: i64,
    pub total_expenses: i64,
    pub net_profit: i64,
    pub monthly_profit: Vec<i64>,
}

pub fn calculate(revenue: &[i64], expenses: &[i64]) -> Result<Financials, DerivationError> {
    if revenue.len() != expenses.len() {
        return Err(DerivationError {
            left: revenue.len(),
            right: expenses.len(),
        });
    }

    let total_revenue = revenue.iter().sum::<i64>();
    let total_expenses = expenses.iter().sum::<i64>();
    let monthly_profit = revenue
        .iter()
        .zip(expenses)
        .map(|(rev, exp)| rev - exp)
        .collect();

    Ok(Financials {
        total_revenue,
        total_expenses,
        net_profit: total_revenue - total_expenses,
        monthly_profit,
    })
}

/// Element-wise sum of equally long series, e.g. revenue across channels.
pub fn combine(series: &[&[i64]]) -> Result<Vec<i64>, DerivationError> {
    let Some(first) = series.first() else {
        return Ok(Vec::new());
    };

    let mut combined = first.to_vec();
    for values in &series[1..] {
        if values.len() != combined.len() {
            return Err(DerivationError {
                left: combined.len(),
                right: values.len(),
            });
        }
        for (total, value) in combined.iter_mut().zip(values.iter()) {
            *total += value;
        }
    }
    Ok(combined)
}
