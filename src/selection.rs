use crate::models::{OptionsResponse, SelectionView};
use crate::period::{self, Bucket, DEFAULT_YEAR, Granularity, KeyError, Quarter};
use chrono::Month;
use thiserror::Error;

pub const YEAR_OPTIONS: [i32; 2] = [2024, 2025];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error(transparent)]
    Key(#[from] KeyError),

    #[error("year {0} is not available")]
    YearUnavailable(i32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubPeriod {
    Month(Month),
    Quarter(Quarter),
}

/// The period picker state of one dashboard view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    granularity: Granularity,
    sub_period: Option<SubPeriod>,
    year: i32,
}

impl Default for Selection {
    fn default() -> Self {
        Self::defaults_for(Granularity::Monthly)
    }
}

impl Selection {
    pub fn defaults_for(granularity: Granularity) -> Self {
        let sub_period = match granularity {
            Granularity::Monthly => Some(SubPeriod::Month(Month::January)),
            Granularity::Quarterly => Some(SubPeriod::Quarter(Quarter::Q1)),
            Granularity::Annually => None,
        };
        Self {
            granularity,
            sub_period,
            year: DEFAULT_YEAR,
        }
    }

    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    pub fn sub_period(&self) -> Option<SubPeriod> {
        self.sub_period
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Switching granularity always resets period and year.
    pub fn set_granularity(&mut self, granularity: Granularity) {
        *self = Self::defaults_for(granularity);
    }

    /// Applies a period label valid for the current granularity. Annual
    /// selections take the year itself as their period.
    pub fn set_period(&mut self, label: &str) -> Result<(), SelectionError> {
        match self.granularity {
            Granularity::Monthly => {
                self.sub_period = Some(SubPeriod::Month(period::parse_month(label)?));
            }
            Granularity::Quarterly => {
                self.sub_period = Some(SubPeriod::Quarter(label.parse::<Quarter>()?));
            }
            Granularity::Annually => self.set_year(period::parse_year(label)?)?,
        }
        Ok(())
    }

    pub fn set_year(&mut self, year: i32) -> Result<(), SelectionError> {
        if !YEAR_OPTIONS.contains(&year) {
            return Err(SelectionError::YearUnavailable(year));
        }
        self.year = year;
        Ok(())
    }

    pub fn period_label(&self) -> String {
        self.bucket().period_label()
    }

    pub fn bucket(&self) -> Bucket {
        match self.sub_period {
            Some(SubPeriod::Month(month)) => Bucket::Month {
                month,
                year: self.year,
            },
            Some(SubPeriod::Quarter(quarter)) => Bucket::Quarter {
                quarter,
                year: self.year,
            },
            None => Bucket::Year { year: self.year },
        }
    }

    pub fn period_options(&self) -> Vec<String> {
        match self.granularity {
            Granularity::Monthly => period::months().map(|m| m.name().to_string()).collect(),
            Granularity::Quarterly => Quarter::ALL.iter().map(|q| q.to_string()).collect(),
            Granularity::Annually => YEAR_OPTIONS.iter().map(|y| y.to_string()).collect(),
        }
    }

    /// The separate year picker is hidden for annual views.
    pub fn shows_year(&self) -> bool {
        self.granularity != Granularity::Annually
    }

    pub fn view(&self) -> SelectionView {
        SelectionView {
            granularity: self.granularity,
            period: self.period_label(),
            year: self.year,
            key: self.bucket(),
        }
    }

    pub fn options(&self) -> OptionsResponse {
        OptionsResponse {
            granularity: self.granularity,
            periods: self.period_options(),
            years: YEAR_OPTIONS.to_vec(),
            show_year: self.shows_year(),
            defaults: Self::defaults_for(self.granularity).view(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_january_2024() {
        let selection = Selection::default();
        assert_eq!(selection.bucket().key(), "January_2024");
        assert_eq!(selection.period_label(), "January");
    }

    #[test]
    fn granularity_change_resets_period_and_year() {
        let mut selection = Selection::default();
        selection.set_period("March").unwrap();
        selection.set_year(2025).unwrap();
        assert_eq!(selection.bucket().key(), "March_2025");

        selection.set_granularity(Granularity::Quarterly);
        assert_eq!(selection.period_label(), "Q1");
        assert_eq!(selection.year(), 2024);

        selection.set_period("Q3").unwrap();
        selection.set_year(2025).unwrap();
        selection.set_granularity(Granularity::Annually);
        assert_eq!(selection.period_label(), "2024");
        assert_eq!(selection.sub_period(), None);
        assert_eq!(selection.bucket().key(), "2024");

        selection.set_granularity(Granularity::Monthly);
        assert_eq!(selection.bucket().key(), "January_2024");
    }

    #[test]
    fn annual_period_sets_the_year() {
        let mut selection = Selection::defaults_for(Granularity::Annually);
        selection.set_period("2025").unwrap();
        assert_eq!(selection.year(), 2025);
        assert_eq!(selection.bucket(), Bucket::Year { year: 2025 });
    }

    #[test]
    fn rejects_labels_from_other_granularities() {
        let mut selection = Selection::default();
        assert!(selection.set_period("Q2").is_err());

        selection.set_granularity(Granularity::Quarterly);
        assert!(selection.set_period("February").is_err());
        assert_eq!(selection.set_year(2019), Err(SelectionError::YearUnavailable(2019)));
        assert_eq!(selection.bucket().key(), "Q1_2024");
    }

    #[test]
    fn options_follow_granularity() {
        let monthly = Selection::default().options();
        assert_eq!(monthly.periods.len(), 12);
        assert!(monthly.show_year);

        let quarterly = Selection::defaults_for(Granularity::Quarterly).options();
        assert_eq!(quarterly.periods, vec!["Q1", "Q2", "Q3", "Q4"]);

        let annual = Selection::defaults_for(Granularity::Annually).options();
        assert_eq!(annual.periods, vec!["2024", "2025"]);
        assert!(!annual.show_year);
        assert_eq!(annual.defaults.period, "2024");
    }
}
