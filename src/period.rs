use chrono::Month;
use serde::{Deserialize, Serialize, Serializer};
use std::{fmt, str::FromStr};
use thiserror::Error;

pub const DEFAULT_YEAR: i32 = 2024;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyError {
    #[error("unknown granularity '{0}'")]
    UnknownGranularity(String),

    #[error("unknown period '{period}' for {granularity} granularity")]
    UnknownPeriod {
        granularity: Granularity,
        period: String,
    },

    #[error("invalid year '{0}'")]
    InvalidYear(String),

    #[error("malformed key '{0}'")]
    Malformed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Granularity {
    Monthly,
    Quarterly,
    Annually,
}

impl Granularity {
    pub const ALL: [Granularity; 3] = [
        Granularity::Monthly,
        Granularity::Quarterly,
        Granularity::Annually,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Granularity::Monthly => "Monthly",
            Granularity::Quarterly => "Quarterly",
            Granularity::Annually => "Annually",
        }
    }

    pub fn noun(self) -> &'static str {
        match self {
            Granularity::Monthly => "month",
            Granularity::Quarterly => "quarter",
            Granularity::Annually => "year",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Granularity {
    type Err = KeyError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        Granularity::ALL
            .into_iter()
            .find(|granularity| granularity.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| KeyError::UnknownGranularity(trimmed.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Quarter {
    Q1,
    Q2,
    Q3,
    Q4,
}

impl Quarter {
    pub const ALL: [Quarter; 4] = [Quarter::Q1, Quarter::Q2, Quarter::Q3, Quarter::Q4];

    pub fn label(self) -> &'static str {
        match self {
            Quarter::Q1 => "Q1",
            Quarter::Q2 => "Q2",
            Quarter::Q3 => "Q3",
            Quarter::Q4 => "Q4",
        }
    }
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Quarter {
    type Err = KeyError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        Quarter::ALL
            .into_iter()
            .find(|quarter| quarter.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| KeyError::UnknownPeriod {
                granularity: Granularity::Quarterly,
                period: trimmed.to_string(),
            })
    }
}

pub fn months() -> impl Iterator<Item = Month> {
    (1u8..=12).filter_map(|number| Month::try_from(number).ok())
}

pub fn parse_month(raw: &str) -> Result<Month, KeyError> {
    let trimmed = raw.trim();
    months()
        .find(|month| month.name().eq_ignore_ascii_case(trimmed))
        .ok_or_else(|| KeyError::UnknownPeriod {
            granularity: Granularity::Monthly,
            period: trimmed.to_string(),
        })
}

pub fn parse_year(raw: &str) -> Result<i32, KeyError> {
    let trimmed = raw.trim();
    if trimmed.len() != 4 || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(KeyError::InvalidYear(trimmed.to_string()));
    }
    trimmed
        .parse::<i32>()
        .map_err(|_| KeyError::InvalidYear(trimmed.to_string()))
}

/// One cell of the registry: granularity, sub-period and year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    Month { month: Month, year: i32 },
    Quarter { quarter: Quarter, year: i32 },
    Year { year: i32 },
}

impl Bucket {
    /// The record a lookup falls back to when the requested bucket is absent.
    pub fn default_for(granularity: Granularity) -> Self {
        match granularity {
            Granularity::Monthly => Bucket::Month {
                month: Month::January,
                year: DEFAULT_YEAR,
            },
            Granularity::Quarterly => Bucket::Quarter {
                quarter: Quarter::Q1,
                year: DEFAULT_YEAR,
            },
            Granularity::Annually => Bucket::Year { year: DEFAULT_YEAR },
        }
    }

    pub fn granularity(&self) -> Granularity {
        match self {
            Bucket::Month { .. } => Granularity::Monthly,
            Bucket::Quarter { .. } => Granularity::Quarterly,
            Bucket::Year { .. } => Granularity::Annually,
        }
    }

    pub fn year(&self) -> i32 {
        match *self {
            Bucket::Month { year, .. } | Bucket::Quarter { year, .. } | Bucket::Year { year } => {
                year
            }
        }
    }

    /// Sub-period label: month name, quarter, or the year for annual buckets.
    pub fn period_label(&self) -> String {
        match self {
            Bucket::Month { month, .. } => month.name().to_string(),
            Bucket::Quarter { quarter, .. } => quarter.label().to_string(),
            Bucket::Year { year } => year.to_string(),
        }
    }

    pub fn key(&self) -> String {
        match self {
            Bucket::Year { year } => year.to_string(),
            _ => format!("{}_{}", self.period_label(), self.year()),
        }
    }

    pub fn parse(key: &str) -> Result<Self, KeyError> {
        let trimmed = key.trim();
        let Some((period, year)) = trimmed.split_once('_') else {
            return parse_year(trimmed)
                .map(|year| Bucket::Year { year })
                .map_err(|_| KeyError::Malformed(trimmed.to_string()));
        };

        let year = parse_year(year)?;
        if period.len() == 2 && period.starts_with(['Q', 'q']) {
            let quarter = period.parse::<Quarter>()?;
            return Ok(Bucket::Quarter { quarter, year });
        }

        let month = parse_month(period)?;
        Ok(Bucket::Month { month, year })
    }

    pub fn sort_key(&self) -> (u8, i32, u32) {
        match *self {
            Bucket::Month { month, year } => (0, year, month.number_from_month()),
            Bucket::Quarter { quarter, year } => (1, year, quarter as u32),
            Bucket::Year { year } => (2, year, 0),
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

impl FromStr for Bucket {
    type Err = KeyError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Bucket::parse(raw)
    }
}

impl Serialize for Bucket {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_render_in_composite_form() {
        let month = Bucket::Month {
            month: Month::March,
            year: 2025,
        };
        let quarter = Bucket::Quarter {
            quarter: Quarter::Q3,
            year: 2024,
        };
        assert_eq!(month.key(), "March_2025");
        assert_eq!(quarter.key(), "Q3_2024");
        assert_eq!(Bucket::Year { year: 2025 }.key(), "2025");
    }

    #[test]
    fn parse_accepts_each_granularity() {
        assert_eq!(
            Bucket::parse("January_2024").unwrap(),
            Bucket::default_for(Granularity::Monthly)
        );
        assert_eq!(
            Bucket::parse("q1_2024").unwrap(),
            Bucket::default_for(Granularity::Quarterly)
        );
        assert_eq!(
            Bucket::parse("2024").unwrap(),
            Bucket::default_for(Granularity::Annually)
        );
    }

    #[test]
    fn parse_rejects_typos() {
        assert!(matches!(
            Bucket::parse("Janury_2024"),
            Err(KeyError::UnknownPeriod { .. })
        ));
        assert!(matches!(
            Bucket::parse("Q5_2024"),
            Err(KeyError::UnknownPeriod { .. })
        ));
        assert!(matches!(
            Bucket::parse("January_24"),
            Err(KeyError::InvalidYear(_))
        ));
        assert!(matches!(Bucket::parse("latest"), Err(KeyError::Malformed(_))));
    }

    #[test]
    fn month_abbreviations_are_rejected() {
        for raw in ["Jan_2024", "sept_2024", "Dec_2025"] {
            assert!(
                matches!(Bucket::parse(raw), Err(KeyError::UnknownPeriod { .. })),
                "{raw}"
            );
        }
        assert_eq!(parse_month("JANUARY"), Ok(Month::January));
    }

    #[test]
    fn granularity_parses_case_insensitively() {
        assert_eq!("quarterly".parse::<Granularity>(), Ok(Granularity::Quarterly));
        assert!("weekly".parse::<Granularity>().is_err());
    }

    #[test]
    fn months_are_in_calendar_order() {
        let names: Vec<_> = months().map(|month| month.name()).collect();
        assert_eq!(names.len(), 12);
        assert_eq!(names[0], "January");
        assert_eq!(names[11], "December");
    }
}
