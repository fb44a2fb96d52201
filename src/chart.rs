use serde::Serialize;
use std::{fmt, str::FromStr};
use tracing::debug;

pub const XERO: &str = "hsl(268 83% 58%)";
pub const PAYPAL: &str = "hsl(188 95% 43%)";
pub const INCOME: &str = "hsl(249 83% 67%)";
pub const EXPENSE: &str = "hsl(25 95% 53%)";
pub const TRAVEL: &str = "hsl(142 76% 36%)";
pub const PROFIT: &str = "#3498db";
pub const SUMMARY_REVENUE: &str = "#27ae60";
pub const SUMMARY_EXPENSE: &str = "#e74c3c";

const WHITE: &str = "#ffffff";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartStyle {
    Line,
    Bar,
    HorizontalBar,
    Pie,
    Doughnut,
}

impl ChartStyle {
    pub const ALL: [ChartStyle; 5] = [
        ChartStyle::Line,
        ChartStyle::Bar,
        ChartStyle::HorizontalBar,
        ChartStyle::Pie,
        ChartStyle::Doughnut,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ChartStyle::Line => "line",
            ChartStyle::Bar => "bar",
            ChartStyle::HorizontalBar => "horizontalBar",
            ChartStyle::Pie => "pie",
            ChartStyle::Doughnut => "doughnut",
        }
    }

    /// Parses a style name, using `default` for anything unrecognised.
    pub fn parse_or(raw: Option<&str>, default: ChartStyle) -> ChartStyle {
        match raw.map(str::parse::<ChartStyle>) {
            Some(Ok(style)) => style,
            Some(Err(UnknownStyle(name))) => {
                debug!("unknown chart style '{name}', using {default}");
                default
            }
            None => default,
        }
    }

    pub fn is_radial(self) -> bool {
        matches!(self, ChartStyle::Pie | ChartStyle::Doughnut)
    }

    fn kind(self) -> ChartKind {
        match self {
            ChartStyle::Line => ChartKind::Line,
            ChartStyle::Bar | ChartStyle::HorizontalBar => ChartKind::Bar,
            ChartStyle::Pie => ChartKind::Pie,
            ChartStyle::Doughnut => ChartKind::Doughnut,
        }
    }
}

impl fmt::Display for ChartStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownStyle(pub String);

impl FromStr for ChartStyle {
    type Err = UnknownStyle;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        ChartStyle::ALL
            .into_iter()
            .find(|style| style.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownStyle(trimmed.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
    Pie,
    Doughnut,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Color {
    Single(String),
    PerPoint(Vec<String>),
}

impl From<&str> for Color {
    fn from(color: &str) -> Self {
        Color::Single(color.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
    pub border_width: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_radius: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub position: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tooltip {
    pub mode: &'static str,
    pub intersect: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plugins {
    pub legend: Legend,
    pub tooltip: Tooltip,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    pub display: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub begin_at_zero: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scales {
    pub x: Axis,
    pub y: Axis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub index_axis: &'static str,
    pub plugins: Plugins,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scales: Option<Scales>,
}

impl ChartOptions {
    pub fn for_style(style: ChartStyle) -> Self {
        let index_axis = if style == ChartStyle::HorizontalBar { "y" } else { "x" };
        let (x_zero, y_zero) = if style == ChartStyle::HorizontalBar {
            (true, false)
        } else {
            (false, true)
        };
        Self {
            responsive: true,
            maintain_aspect_ratio: false,
            index_axis,
            plugins: Plugins {
                legend: Legend { position: "top" },
                tooltip: Tooltip {
                    mode: "index",
                    intersect: false,
                },
            },
            scales: (!style.is_radial()).then_some(Scales {
                x: Axis {
                    display: true,
                    begin_at_zero: x_zero,
                },
                y: Axis {
                    display: true,
                    begin_at_zero: y_zero,
                },
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub style: &'static str,
    pub data: ChartData,
    pub options: ChartOptions,
}

impl ChartConfig {
    pub fn total(&self) -> i64 {
        self.data
            .datasets
            .iter()
            .flat_map(|dataset| dataset.data.iter())
            .sum()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SeriesInput<'a> {
    pub label: &'a str,
    pub color: &'a str,
    pub values: &'a [i64],
}

/// Shapes aligned series for the requested style.
///
/// Pie and doughnut charts collapse each series to its total and show one
/// slice per series. Line and bar charts keep every point.
pub fn shape(labels: &[String], series: &[SeriesInput<'_>], style: ChartStyle) -> ChartConfig {
    if style.is_radial() {
        let dataset = Dataset {
            data: series.iter().map(|s| s.values.iter().sum()).collect(),
            background_color: Some(Color::PerPoint(
                series.iter().map(|s| s.color.to_string()).collect(),
            )),
            border_color: Some(WHITE.into()),
            border_width: 3,
            ..Dataset::default()
        };
        return config(
            style,
            series.iter().map(|s| s.label.to_string()).collect(),
            vec![dataset],
        );
    }

    let datasets = series
        .iter()
        .map(|s| match style {
            ChartStyle::Line => line_dataset(s.label, s.color, s.values, true),
            _ => Dataset {
                label: Some(s.label.to_string()),
                data: s.values.to_vec(),
                background_color: Some(s.color.into()),
                border_color: Some(s.color.into()),
                border_width: 1,
                border_radius: Some(6),
                ..Dataset::default()
            },
        })
        .collect();
    config(style, labels.to_vec(), datasets)
}

pub fn shape_categories(
    label: &str,
    categories: &[String],
    amounts: &[i64],
    colors: &[&str],
    style: ChartStyle,
) -> ChartConfig {
    let palette: Vec<String> = colors.iter().map(|c| c.to_string()).collect();
    let dataset = if style.is_radial() {
        Dataset {
            data: amounts.to_vec(),
            background_color: Some(Color::PerPoint(palette)),
            border_color: Some(WHITE.into()),
            border_width: 3,
            ..Dataset::default()
        }
    } else {
        Dataset {
            label: Some(label.to_string()),
            data: amounts.to_vec(),
            background_color: Some(Color::PerPoint(palette.clone())),
            border_color: Some(Color::PerPoint(palette)),
            border_width: 1,
            border_radius: Some(6),
            ..Dataset::default()
        }
    };
    config(style, categories.to_vec(), vec![dataset])
}

pub fn line_dataset(label: &str, color: &str, values: &[i64], fill: bool) -> Dataset {
    Dataset {
        label: Some(label.to_string()),
        data: values.to_vec(),
        background_color: Some(Color::Single(translucent(color))),
        border_color: Some(color.into()),
        border_width: 3,
        fill: Some(fill),
        tension: Some(0.4),
        point_radius: Some(5),
        ..Dataset::default()
    }
}

fn config(style: ChartStyle, labels: Vec<String>, datasets: Vec<Dataset>) -> ChartConfig {
    ChartConfig {
        kind: style.kind(),
        style: style.as_str(),
        data: ChartData { labels, datasets },
        options: ChartOptions::for_style(style),
    }
}

fn translucent(color: &str) -> String {
    match color.strip_suffix(')') {
        Some(hsl) if hsl.starts_with("hsl(") => format!("{hsl} / 0.2)"),
        _ if color.starts_with('#') && color.len() == 7 => format!("{color}1a"),
        _ => color.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels() -> Vec<String> {
        ["Week 1", "Week 2", "Week 3"].map(String::from).to_vec()
    }

    fn inputs<'a>(xero: &'a [i64], paypal: &'a [i64]) -> [SeriesInput<'a>; 2] {
        [
            SeriesInput {
                label: "Xero Revenue",
                color: XERO,
                values: xero,
            },
            SeriesInput {
                label: "PayPal Revenue",
                color: PAYPAL,
                values: paypal,
            },
        ]
    }

    #[test]
    fn radial_total_matches_series_total() {
        let xero = [3000, 4750, 3750];
        let paypal = [2000, 3000, 4500];
        let series = inputs(&xero, &paypal);

        let bar = shape(&labels(), &series, ChartStyle::Bar);
        for style in [ChartStyle::Pie, ChartStyle::Doughnut] {
            let radial = shape(&labels(), &series, style);
            assert_eq!(radial.total(), bar.total());
            assert_eq!(radial.data.datasets.len(), 1);
            assert_eq!(radial.data.datasets[0].data, vec![11500, 9500]);
            assert_eq!(radial.data.labels, vec!["Xero Revenue", "PayPal Revenue"]);
            assert!(radial.options.scales.is_none());
        }
    }

    #[test]
    fn line_and_bar_pass_series_through() {
        let xero = [1, 2, 3];
        let paypal = [4, 5, 6];
        let series = inputs(&xero, &paypal);

        for style in [ChartStyle::Line, ChartStyle::Bar, ChartStyle::HorizontalBar] {
            let chart = shape(&labels(), &series, style);
            assert_eq!(chart.data.labels, labels());
            assert_eq!(chart.data.datasets[0].data, xero.to_vec());
            assert_eq!(chart.data.datasets[1].data, paypal.to_vec());
            assert!(chart.options.scales.is_some());
        }
    }

    #[test]
    fn horizontal_bar_swaps_index_axis() {
        let xero = [1];
        let paypal = [2];
        let chart = shape(&labels(), &inputs(&xero, &paypal), ChartStyle::HorizontalBar);
        assert_eq!(chart.kind, ChartKind::Bar);
        assert_eq!(chart.options.index_axis, "y");
        assert_eq!(chart.style, "horizontalBar");
    }

    #[test]
    fn unknown_style_falls_back_to_default() {
        assert_eq!(ChartStyle::parse_or(Some("radar"), ChartStyle::Bar), ChartStyle::Bar);
        assert_eq!(ChartStyle::parse_or(None, ChartStyle::Doughnut), ChartStyle::Doughnut);
        assert_eq!(
            ChartStyle::parse_or(Some("horizontalbar"), ChartStyle::Line),
            ChartStyle::HorizontalBar
        );
    }

    #[test]
    fn serializes_to_chartjs_schema() {
        let xero = [1, 2];
        let paypal = [3, 4];
        let chart = shape(&labels(), &inputs(&xero, &paypal), ChartStyle::Line);
        let json = serde_json::to_value(&chart).unwrap();

        assert_eq!(json["type"], "line");
        assert_eq!(json["options"]["maintainAspectRatio"], false);
        assert_eq!(json["options"]["scales"]["y"]["beginAtZero"], true);
        assert_eq!(json["data"]["datasets"][0]["borderColor"], XERO);
        assert_eq!(
            json["data"]["datasets"][0]["backgroundColor"],
            "hsl(268 83% 58% / 0.2)"
        );
    }

    #[test]
    fn categories_keep_one_colour_each() {
        let categories = ["Travel", "Software"].map(String::from).to_vec();
        let chart = shape_categories(
            "Expenses",
            &categories,
            &[2100, 4800],
            &[TRAVEL, XERO],
            ChartStyle::Doughnut,
        );
        assert_eq!(chart.kind, ChartKind::Doughnut);
        assert_eq!(chart.total(), 6900);
        assert_eq!(
            chart.data.datasets[0].background_color,
            Some(Color::PerPoint(vec![TRAVEL.to_string(), XERO.to_string()]))
        );
    }
}
