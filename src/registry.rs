use crate::dataset;
use crate::models::{ExpenseBreakdown, SeriesName, SeriesRecord, StatsRecord, SummaryDataset};
use crate::period::{Bucket, Granularity};
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("duplicate {table} entry for {key}")]
    Duplicate { table: &'static str, key: String },

    #[error("{table} table has no default entry {key}")]
    MissingDefault { table: &'static str, key: String },

    #[error("no expense breakdown for {0} granularity")]
    MissingBreakdown(Granularity),
}

/// Outcome of a lookup; `resolved` differs from `requested` on fallback.
#[derive(Debug, Clone, Copy)]
pub struct Lookup<'a, T> {
    pub requested: Bucket,
    pub resolved: Bucket,
    pub record: &'a T,
}

impl<T> Lookup<'_, T> {
    pub fn is_fallback(&self) -> bool {
        self.requested != self.resolved
    }
}

/// Read-only store of every dataset the dashboard can display.
#[derive(Debug)]
pub struct Registry {
    series: HashMap<Bucket, SeriesRecord>,
    stats: HashMap<Bucket, StatsRecord>,
    expenses: HashMap<Granularity, ExpenseBreakdown>,
    summary: SummaryDataset,
    misaligned: Vec<(Bucket, Vec<SeriesName>)>,
    misaligned_expenses: Vec<(Granularity, Vec<String>)>,
}

impl Registry {
    pub fn new(
        series: Vec<(Bucket, SeriesRecord)>,
        stats: Vec<(Bucket, StatsRecord)>,
        expenses: Vec<(Granularity, ExpenseBreakdown)>,
        summary: SummaryDataset,
    ) -> Result<Self, RegistryError> {
        let series = index("series", series)?;
        let stats = index("stats", stats)?;

        for granularity in Granularity::ALL {
            let key = Bucket::default_for(granularity);
            if !series.contains_key(&key) {
                return Err(RegistryError::MissingDefault {
                    table: "series",
                    key: key.key(),
                });
            }
            if !stats.contains_key(&key) {
                return Err(RegistryError::MissingDefault {
                    table: "stats",
                    key: key.key(),
                });
            }
        }

        let expenses: HashMap<_, _> = expenses.into_iter().collect();
        if let Some(missing) = Granularity::ALL
            .into_iter()
            .find(|granularity| !expenses.contains_key(granularity))
        {
            return Err(RegistryError::MissingBreakdown(missing));
        }

        // Length mismatches are reported, not corrected.
        let mut misaligned: Vec<_> = series
            .iter()
            .filter_map(|(bucket, record)| {
                let names = record.misaligned();
                (!names.is_empty()).then_some((*bucket, names))
            })
            .collect();
        misaligned.sort_by_key(|(bucket, _)| bucket.sort_key());
        for (bucket, names) in &misaligned {
            warn!("series {names:?} in {bucket} do not match the label count");
        }

        let misaligned_expenses: Vec<_> = Granularity::ALL
            .into_iter()
            .filter_map(|granularity| {
                let rows = expenses[&granularity].misaligned();
                (!rows.is_empty()).then_some((granularity, rows))
            })
            .collect();
        for (granularity, rows) in &misaligned_expenses {
            warn!("{granularity} expense rows {rows:?} do not match their labels");
        }

        Ok(Self {
            series,
            stats,
            expenses,
            summary,
            misaligned,
            misaligned_expenses,
        })
    }

    /// Registry over the built-in demo corpus.
    pub fn demo() -> Result<Self, RegistryError> {
        let registry = Self::new(
            dataset::series_records(),
            dataset::stats_records(),
            dataset::expense_breakdowns(),
            dataset::second_half_summary(),
        )?;
        info!(
            "registry loaded: {} series records, {} stats records",
            registry.series.len(),
            registry.stats.len()
        );
        Ok(registry)
    }

    pub fn series(&self, bucket: Bucket) -> Lookup<'_, SeriesRecord> {
        resolve("series", &self.series, bucket)
    }

    pub fn stats(&self, bucket: Bucket) -> Lookup<'_, StatsRecord> {
        resolve("stats", &self.stats, bucket)
    }

    pub fn expenses(&self, granularity: Granularity) -> &ExpenseBreakdown {
        &self.expenses[&granularity]
    }

    pub fn summary(&self) -> &SummaryDataset {
        &self.summary
    }

    pub fn series_keys(&self) -> Vec<Bucket> {
        sorted_keys(&self.series)
    }

    pub fn stats_keys(&self) -> Vec<Bucket> {
        sorted_keys(&self.stats)
    }

    /// Buckets whose series lengths disagree with their labels.
    pub fn misaligned(&self) -> &[(Bucket, Vec<SeriesName>)] {
        &self.misaligned
    }

    /// Expense breakdowns with rows that disagree with their labels.
    pub fn misaligned_expenses(&self) -> &[(Granularity, Vec<String>)] {
        &self.misaligned_expenses
    }
}

fn index<T>(
    table: &'static str,
    entries: Vec<(Bucket, T)>,
) -> Result<HashMap<Bucket, T>, RegistryError> {
    let mut map = HashMap::with_capacity(entries.len());
    for (bucket, record) in entries {
        if map.insert(bucket, record).is_some() {
            return Err(RegistryError::Duplicate {
                table,
                key: bucket.key(),
            });
        }
    }
    Ok(map)
}

fn resolve<'a, T>(table: &str, map: &'a HashMap<Bucket, T>, requested: Bucket) -> Lookup<'a, T> {
    if let Some(record) = map.get(&requested) {
        return Lookup {
            requested,
            resolved: requested,
            record,
        };
    }

    let resolved = Bucket::default_for(requested.granularity());
    debug!("{table} {requested} not found, falling back to {resolved}");
    Lookup {
        requested,
        resolved,
        // defaults are checked in Registry::new
        record: &map[&resolved],
    }
}

fn sorted_keys<T>(map: &HashMap<Bucket, T>) -> Vec<Bucket> {
    let mut keys: Vec<_> = map.keys().copied().collect();
    keys.sort_by_key(Bucket::sort_key);
    keys
}
