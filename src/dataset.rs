use crate::models::{
    ExpenseBreakdown, SeriesName, SeriesRecord, StatsRecord, SummaryDataset, Trend, Trends,
};
use crate::period::{Bucket, Granularity, Quarter};
use chrono::Month;
use std::collections::BTreeMap;

const WEEKS: [&str; 4] = ["Week 1", "Week 2", "Week 3", "Week 4"];
const QUARTER_MONTHS: [&str; 3] = ["Month 1", "Month 2", "Month 3"];
const MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub const EXPENSE_CATEGORIES: [&str; 5] =
    ["Office Supplies", "Marketing", "Travel", "Software", "Utilities"];

fn strings(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|label| label.to_string()).collect()
}

fn record(
    labels: &[&str],
    xero: &[i64],
    paypal: &[i64],
    income: &[i64],
    expenses: &[i64],
) -> SeriesRecord {
    let series = BTreeMap::from([
        (SeriesName::XeroRevenue, xero.to_vec()),
        (SeriesName::PaypalRevenue, paypal.to_vec()),
        (SeriesName::Income, income.to_vec()),
        (SeriesName::Expenses, expenses.to_vec()),
    ]);
    SeriesRecord {
        labels: strings(labels),
        series,
    }
}

fn month(month: Month, year: i32) -> Bucket {
    Bucket::Month { month, year }
}

fn quarter(quarter: Quarter, year: i32) -> Bucket {
    Bucket::Quarter { quarter, year }
}

pub fn series_records() -> Vec<(Bucket, SeriesRecord)> {
    use Month::{February, January, March};
    use Quarter::{Q1, Q2, Q3, Q4};

    vec![
        (
            month(January, 2024),
            record(
                &WEEKS,
                &[3000, 4750, 3750, 6250],
                &[2000, 3000, 4500, 3750],
                &[5000, 7750, 8250, 10000],
                &[3750, 4500, 5250, 6250],
            ),
        ),
        (
            month(February, 2024),
            record(
                &WEEKS,
                &[3500, 5250, 4250, 7000],
                &[2500, 3500, 5000, 4250],
                &[6000, 8750, 9250, 11250],
                &[4000, 5000, 5750, 6750],
            ),
        ),
        (
            month(March, 2024),
            record(
                &WEEKS,
                &[4000, 6000, 5000, 8000],
                &[3000, 4000, 5500, 5000],
                &[7000, 10000, 10500, 13000],
                &[4500, 5500, 6250, 7500],
            ),
        ),
        (
            month(January, 2025),
            record(
                &WEEKS,
                &[4500, 6000, 5500, 8500],
                &[3200, 4500, 6000, 5200],
                &[7700, 10500, 11500, 13700],
                &[4200, 5800, 6500, 7800],
            ),
        ),
        (
            month(February, 2025),
            record(
                &WEEKS,
                &[5000, 7000, 6000, 9000],
                &[3500, 5000, 6500, 5800],
                &[8500, 12000, 12500, 14800],
                &[4800, 6200, 7000, 8500],
            ),
        ),
        (
            month(March, 2025),
            record(
                &WEEKS,
                &[5500, 7500, 6500, 9500],
                &[4000, 5500, 7000, 6200],
                &[9500, 13000, 13500, 15700],
                &[5200, 6800, 7500, 9000],
            ),
        ),
        (
            quarter(Q1, 2024),
            record(
                &QUARTER_MONTHS,
                &[36000, 57000, 45000],
                &[24000, 36000, 54000],
                &[60000, 93000, 99000],
                &[45000, 54000, 63000],
            ),
        ),
        (
            quarter(Q2, 2024),
            record(
                &QUARTER_MONTHS,
                &[42000, 63000, 51000],
                &[28000, 42000, 60000],
                &[70000, 105000, 111000],
                &[52000, 61000, 70000],
            ),
        ),
        (
            quarter(Q3, 2024),
            record(
                &QUARTER_MONTHS,
                &[48000, 69000, 57000],
                &[32000, 48000, 66000],
                &[80000, 117000, 123000],
                &[58000, 68000, 77000],
            ),
        ),
        (
            quarter(Q4, 2024),
            record(
                &QUARTER_MONTHS,
                &[54000, 75000, 63000],
                &[36000, 54000, 72000],
                &[90000, 129000, 135000],
                &[65000, 75000, 85000],
            ),
        ),
        (
            quarter(Q1, 2025),
            record(
                &QUARTER_MONTHS,
                &[60000, 81000, 69000],
                &[40000, 60000, 78000],
                &[100000, 141000, 147000],
                &[72000, 82000, 92000],
            ),
        ),
        (
            quarter(Q2, 2025),
            record(
                &QUARTER_MONTHS,
                &[66000, 87000, 75000],
                &[44000, 66000, 84000],
                &[110000, 153000, 159000],
                &[78000, 88000, 98000],
            ),
        ),
        (
            quarter(Q3, 2025),
            record(
                &QUARTER_MONTHS,
                &[72000, 93000, 81000],
                &[48000, 72000, 90000],
                &[120000, 165000, 171000],
                &[84000, 94000, 104000],
            ),
        ),
        (
            quarter(Q4, 2025),
            record(
                &QUARTER_MONTHS,
                &[78000, 99000, 87000],
                &[52000, 78000, 96000],
                &[130000, 177000, 183000],
                &[90000, 100000, 110000],
            ),
        ),
        (
            Bucket::Year { year: 2024 },
            record(
                &MONTHS_SHORT,
                &[
                    36000, 57000, 45000, 42000, 63000, 51000, 48000, 69000, 57000, 54000, 72000,
                    60000,
                ],
                &[
                    24000, 36000, 54000, 28000, 42000, 60000, 32000, 48000, 66000, 36000, 54000,
                    75000,
                ],
                &[
                    60000, 93000, 99000, 70000, 105000, 111000, 80000, 117000, 123000, 90000,
                    126000, 135000,
                ],
                &[
                    45000, 54000, 63000, 52000, 61000, 70000, 58000, 68000, 77000, 65000, 73000,
                    83000,
                ],
            ),
        ),
        (
            Bucket::Year { year: 2025 },
            record(
                &MONTHS_SHORT,
                &[
                    66000, 87000, 75000, 72000, 93000, 81000, 78000, 99000, 87000, 84000, 102000,
                    90000,
                ],
                &[
                    44000, 66000, 84000, 48000, 72000, 90000, 52000, 78000, 96000, 56000, 84000,
                    105000,
                ],
                &[
                    110000, 153000, 159000, 120000, 165000, 171000, 130000, 177000, 183000,
                    140000, 186000, 195000,
                ],
                &[
                    78000, 88000, 98000, 84000, 94000, 104000, 90000, 100000, 110000, 96000,
                    106000, 116000,
                ],
            ),
        ),
    ]
}

/// Trend percentages in card order: revenue, expense, profit, cashflow.
/// Expense trends are always shown as unfavourable.
fn stats(totals: [i64; 4], trends: [f64; 4]) -> StatsRecord {
    let [total_revenue, total_expense, net_profit, net_cashflow] = totals;
    let [revenue, expense, profit, cashflow] = trends;
    let up = |value| Trend {
        value,
        is_positive: true,
    };
    StatsRecord {
        total_revenue,
        total_expense,
        net_profit,
        net_cashflow,
        trends: Trends {
            revenue: up(revenue),
            expense: Trend {
                value: expense,
                is_positive: false,
            },
            profit: up(profit),
            cashflow: up(cashflow),
        },
    }
}

pub fn stats_records() -> Vec<(Bucket, StatsRecord)> {
    use Month::{February, January, March};
    use Quarter::{Q1, Q2, Q3, Q4};

    vec![
        (month(January, 2024), stats([17750, 20500, 2500, 31000], [12.5, 5.4, 18.7, 15.2])),
        (month(February, 2024), stats([20250, 17500, 2750, 35250], [14.1, 14.8, 10.0, 13.7])),
        (month(March, 2024), stats([23000, 19750, 3250, 40500], [13.6, 12.9, 18.2, 14.9])),
        (month(January, 2023), stats([15200, 13100, 2100, 26900], [8.7, 4.2, 16.8, 12.3])),
        (month(February, 2023), stats([16400, 14200, 2200, 30400], [9.2, 5.1, 17.5, 13.8])),
        (month(March, 2023), stats([18500, 15800, 2700, 34000], [11.8, 7.3, 19.2, 15.4])),
        (month(January, 2022), stats([12200, 10000, 2200, 21600], [6.8, 3.2, 14.1, 10.8])),
        (month(February, 2022), stats([13600, 11200, 2400, 24100], [7.5, 4.1, 15.3, 12.2])),
        (month(March, 2022), stats([14800, 12600, 2200, 27500], [8.9, 5.8, 13.7, 13.1])),
        (month(January, 2021), stats([10700, 8800, 1900, 18700], [5.2, 2.8, 12.4, 9.1])),
        (month(February, 2021), stats([11900, 9900, 2000, 20500], [6.1, 3.5, 13.2, 10.4])),
        (month(March, 2021), stats([13200, 11000, 2200, 24400], [7.3, 4.2, 14.8, 11.7])),
        (quarter(Q1, 2024), stats([252000, 162000, 90000, 252000], [8.3, 12.1, 15.5, 22.8])),
        (quarter(Q2, 2024), stats([286000, 183000, 103000, 286000], [13.5, 13.0, 14.4, 13.5])),
        (quarter(Q3, 2024), stats([320000, 203000, 117000, 320000], [11.9, 10.9, 13.6, 11.9])),
        (quarter(Q1, 2023), stats([224000, 144000, 80000, 224000], [7.1, 10.8, 12.5, 18.9])),
        (quarter(Q2, 2023), stats([258000, 162000, 96000, 258000], [8.8, 12.5, 20.0, 15.2])),
        (quarter(Q3, 2023), stats([278000, 177000, 101000, 278000], [7.8, 9.3, 5.2, 7.8])),
        (quarter(Q4, 2023), stats([304000, 192000, 112000, 304000], [9.4, 8.5, 10.9, 9.4])),
        (quarter(Q1, 2022), stats([195000, 126000, 69000, 195000], [6.0, 9.5, 10.2, 16.1])),
        (quarter(Q2, 2022), stats([222000, 142000, 80000, 222000], [13.8, 12.7, 15.9, 13.8])),
        (quarter(Q3, 2022), stats([249000, 158000, 91000, 249000], [12.2, 11.3, 13.8, 12.2])),
        (quarter(Q4, 2022), stats([276000, 174000, 102000, 276000], [10.8, 10.1, 12.1, 10.8])),
        (quarter(Q1, 2021), stats([168000, 108000, 60000, 168000], [5.0, 8.0, 8.8, 13.5])),
        (quarter(Q2, 2021), stats([192000, 124000, 68000, 192000], [14.3, 14.8, 13.3, 14.3])),
        (quarter(Q3, 2021), stats([217000, 140000, 77000, 217000], [13.0, 12.9, 13.2, 13.0])),
        (quarter(Q4, 2021), stats([244000, 156000, 88000, 244000], [12.4, 11.4, 14.3, 12.4])),
        (
            Bucket::Year { year: 2024 },
            stats([1371000, 909000, 462000, 1371000], [25.4, 18.9, 32.1, 28.7]),
        ),
        (
            Bucket::Year { year: 2025 },
            stats([1875000, 1164000, 711000, 1875000], [54.7, 28.1, 134.7, 54.7]),
        ),
    ]
}

fn breakdown(amounts: [i64; 5], trend_labels: &[&str], trend: [&[i64]; 5]) -> ExpenseBreakdown {
    ExpenseBreakdown {
        categories: strings(&EXPENSE_CATEGORIES),
        amounts: amounts.to_vec(),
        trend_labels: strings(trend_labels),
        trend: trend.iter().map(|values| values.to_vec()).collect(),
    }
}

pub fn expense_breakdowns() -> Vec<(Granularity, ExpenseBreakdown)> {
    vec![
        (
            Granularity::Monthly,
            breakdown(
                [3500, 8200, 2100, 4800, 1900],
                &WEEKS,
                [
                    &[875, 875, 875, 875],
                    &[2050, 2050, 2050, 2050],
                    &[525, 525, 525, 525],
                    &[1200, 1200, 1200, 1200],
                    &[475, 475, 475, 475],
                ],
            ),
        ),
        (
            Granularity::Quarterly,
            breakdown(
                [45000, 87500, 30000, 45000, 19750],
                &QUARTER_MONTHS,
                [
                    &[15000, 15000, 15000],
                    &[29000, 29000, 29500],
                    &[10000, 10000, 10000],
                    &[15000, 15000, 15000],
                    &[6750, 6750, 6750],
                ],
            ),
        ),
        (
            Granularity::Annually,
            breakdown(
                [180000, 350000, 120000, 180000, 79000],
                &MONTHS_SHORT,
                [
                    &[
                        15000, 15000, 15000, 15000, 15000, 15000, 15000, 15000, 15000, 15000,
                        15000, 15000,
                    ],
                    &[
                        29000, 29000, 29000, 29000, 29000, 29000, 29000, 29000, 29000, 29000,
                        29500, 29500,
                    ],
                    &[
                        8000, 12000, 15000, 10000, 8000, 5000, 12000, 15000, 10000, 8000, 12000,
                        15000,
                    ],
                    &[
                        15000, 15000, 15000, 15000, 15000, 15000, 15000, 15000, 15000, 15000,
                        15000, 15000,
                    ],
                    &[
                        6500, 6750, 7000, 6000, 5500, 7500, 8000, 7500, 6500, 6000, 6750, 7000,
                    ],
                ],
            ),
        ),
    ]
}

/// July to December figures shown on the summary page.
pub fn second_half_summary() -> SummaryDataset {
    SummaryDataset {
        months: strings(&["July", "August", "September", "October", "November", "December"]),
        revenue: vec![45000, 52000, 48000, 61000, 55000, 67000],
        expenses: vec![32000, 35000, 31000, 42000, 38000, 45000],
    }
}
