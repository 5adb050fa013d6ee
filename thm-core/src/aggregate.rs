//! Monthly roll-ups of daily records.
//!
//! [`AggregationIndex`] is the year -> month -> {max, min} lookup behind the
//! heatmap fill colours. [`DailyGroups`] keeps the raw days of each month for
//! the sparkline cells.

use crate::record::DailyRecord;
use std::collections::{BTreeMap, BTreeSet};

/// Extremes of one (year, month) group.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MonthAggregate {
    /// Highest daily maximum of the month.
    pub max_temperature: Option<f64>,
    /// Lowest daily minimum of the month.
    pub min_temperature: Option<f64>,
}

impl MonthAggregate {
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a DailyRecord>,
    {
        let mut aggregate = MonthAggregate::default();
        for record in records {
            aggregate.include(record);
        }
        aggregate
    }

    fn include(&mut self, record: &DailyRecord) {
        self.max_temperature = merge(self.max_temperature, record.max_temperature, f64::max);
        self.min_temperature = merge(self.min_temperature, record.min_temperature, f64::min);
    }

    /// True when no record of the group carried a usable temperature.
    pub fn is_empty(&self) -> bool {
        self.max_temperature.is_none() && self.min_temperature.is_none()
    }
}

fn merge(current: Option<f64>, next: Option<f64>, pick: fn(f64, f64) -> f64) -> Option<f64> {
    match (current, next) {
        (Some(a), Some(b)) => Some(pick(a, b)),
        (a, None) => a,
        (None, b) => b,
    }
}

/// Two-level lookup: year -> month -> [`MonthAggregate`].
///
/// Months without records have no entry; callers treat `None` from
/// [`AggregationIndex::get`] as "no data".
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AggregationIndex(BTreeMap<i32, BTreeMap<u32, MonthAggregate>>);

impl AggregationIndex {
    /// ```
    /// use chrono::NaiveDate;
    /// use thm_core::aggregate::AggregationIndex;
    /// use thm_core::record::DailyRecord;
    ///
    /// let day = |d| NaiveDate::from_ymd_opt(1997, 1, d).unwrap();
    /// let records = vec![
    ///     DailyRecord::new(day(5), Some(10.0), Some(2.0)),
    ///     DailyRecord::new(day(20), Some(15.0), Some(-1.0)),
    /// ];
    /// let index = AggregationIndex::build(&records);
    /// let january = index.get(1997, 1).unwrap();
    /// assert_eq!(january.max_temperature, Some(15.0));
    /// assert_eq!(january.min_temperature, Some(-1.0));
    /// ```
    pub fn build(records: &[DailyRecord]) -> Self {
        let mut index: BTreeMap<i32, BTreeMap<u32, MonthAggregate>> = BTreeMap::new();
        for record in records {
            index
                .entry(record.year)
                .or_default()
                .entry(record.month)
                .or_default()
                .include(record);
        }
        Self(index)
    }

    pub fn get(&self, year: i32, month: u32) -> Option<&MonthAggregate> {
        self.0.get(&year)?.get(&month)
    }

    /// Number of (year, month) entries.
    pub fn len(&self) -> usize {
        self.0.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Raw daily records grouped by year then month, each group in date order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DailyGroups(BTreeMap<i32, BTreeMap<u32, Vec<DailyRecord>>>);

impl DailyGroups {
    pub fn build(records: &[DailyRecord]) -> Self {
        let mut groups: BTreeMap<i32, BTreeMap<u32, Vec<DailyRecord>>> = BTreeMap::new();
        for record in records {
            groups
                .entry(record.year)
                .or_default()
                .entry(record.month)
                .or_default()
                .push(record.clone());
        }
        for days in groups.values_mut().flat_map(BTreeMap::values_mut) {
            days.sort_by_key(|r| r.date);
        }
        Self(groups)
    }

    /// Days recorded for (year, month); empty when the month has no rows.
    pub fn get(&self, year: i32, month: u32) -> &[DailyRecord] {
        self.0
            .get(&year)
            .and_then(|months| months.get(&month))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Closed [min, max] interval of observed temperatures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub min: f64,
    pub max: f64,
}

impl Extent {
    /// Extent of a sequence of values, `None` when it is empty.
    pub fn of<I: IntoIterator<Item = f64>>(values: I) -> Option<Extent> {
        values.into_iter().fold(None, |acc, v| match acc {
            None => Some(Extent { min: v, max: v }),
            Some(e) => Some(Extent {
                min: e.min.min(v),
                max: e.max.max(v),
            }),
        })
    }
}

/// Lowest daily minimum and highest daily maximum across `records`.
///
/// Falls back to the other field when one of them is absent everywhere.
pub fn temperature_extent(records: &[DailyRecord]) -> Option<Extent> {
    let aggregate = MonthAggregate::from_records(records);
    let min = aggregate.min_temperature.or(aggregate.max_temperature)?;
    let max = aggregate.max_temperature.or(aggregate.min_temperature)?;
    Some(Extent {
        min: min.min(max),
        max: max.max(min),
    })
}

/// Distinct years of `records`, ascending.
pub fn distinct_years(records: &[DailyRecord]) -> Vec<i32> {
    records
        .iter()
        .map(|r| r.year)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Keep the rows of the `count` most recent calendar years, counted back from
/// the latest year present (`year >= latest - (count - 1)`).
pub fn filter_recent_years(records: &[DailyRecord], count: usize) -> Vec<DailyRecord> {
    let Some(latest) = records.iter().map(|r| r.year).max() else {
        return Vec::new();
    };
    if count == 0 {
        return Vec::new();
    }
    let span = i32::try_from(count - 1).unwrap_or(i32::MAX);
    let first = latest.saturating_sub(span);
    records
        .iter()
        .filter(|r| r.year >= first)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(y: i32, m: u32, d: u32, max: Option<f64>, min: Option<f64>) -> DailyRecord {
        DailyRecord::new(NaiveDate::from_ymd_opt(y, m, d).unwrap(), max, min)
    }

    #[test]
    fn test_january_1997_aggregate() {
        let records = vec![
            record(1997, 1, 5, Some(10.0), Some(2.0)),
            record(1997, 1, 20, Some(15.0), Some(-1.0)),
        ];
        let index = AggregationIndex::build(&records);
        assert_eq!(
            index.get(1997, 1),
            Some(&MonthAggregate {
                max_temperature: Some(15.0),
                min_temperature: Some(-1.0),
            })
        );
    }

    #[test]
    fn test_absent_month_is_none() {
        let records = vec![record(1997, 1, 5, Some(10.0), Some(2.0))];
        let index = AggregationIndex::build(&records);
        assert!(index.get(1997, 2).is_none());
        assert!(index.get(1998, 1).is_none());
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_absent_values_are_skipped_by_reduction() {
        let records = vec![
            record(1997, 3, 9, None, Some(6.0)),
            record(1997, 3, 21, None, Some(7.0)),
            record(1997, 3, 22, Some(12.0), None),
        ];
        let aggregate = AggregationIndex::build(&records).get(1997, 3).copied().unwrap();
        assert_eq!(aggregate.max_temperature, Some(12.0));
        assert_eq!(aggregate.min_temperature, Some(6.0));
    }

    #[test]
    fn test_all_absent_group_is_empty() {
        let records = vec![record(1997, 3, 9, None, None)];
        let aggregate = AggregationIndex::build(&records).get(1997, 3).copied().unwrap();
        assert!(aggregate.is_empty());
    }

    #[test]
    fn test_max_never_below_min() {
        let records: Vec<DailyRecord> = (1..=28)
            .map(|d| {
                let base = (d as f64 * 7.3) % 19.0 - 5.0;
                record(2001, 2, d, Some(base + 8.0), Some(base))
            })
            .chain((1..=30).map(|d| record(2001, 4, d, Some(d as f64), Some(d as f64 - 3.0))))
            .collect();
        let index = AggregationIndex::build(&records);
        for aggregate in index.0.values().flat_map(BTreeMap::values) {
            let (max, min) = (aggregate.max_temperature.unwrap(), aggregate.min_temperature.unwrap());
            assert!(max >= min);
        }
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_years_sorted_ascending() {
        let records = vec![
            record(2003, 1, 1, Some(1.0), Some(0.0)),
            record(1999, 1, 1, Some(1.0), Some(0.0)),
            record(2001, 1, 1, Some(1.0), Some(0.0)),
            record(1999, 5, 1, Some(1.0), Some(0.0)),
        ];
        assert_eq!(distinct_years(&records), vec![1999, 2001, 2003]);
        let index = AggregationIndex::build(&records);
        assert_eq!(index.0.keys().copied().collect::<Vec<_>>(), vec![1999, 2001, 2003]);
    }

    #[test]
    fn test_filter_recent_years() {
        let records: Vec<DailyRecord> = (2005..=2020)
            .map(|y| record(y, 6, 1, Some(20.0), Some(10.0)))
            .collect();
        let filtered = filter_recent_years(&records, 10);
        assert!(filtered.iter().all(|r| r.year >= 2011));
        assert_eq!(distinct_years(&filtered), (2011..=2020).collect::<Vec<_>>());
    }

    #[test]
    fn test_filter_recent_years_with_gaps() {
        // counted back in calendar years, not distinct years present
        let records = vec![
            record(2000, 1, 1, Some(1.0), Some(0.0)),
            record(2012, 1, 1, Some(1.0), Some(0.0)),
            record(2020, 1, 1, Some(1.0), Some(0.0)),
        ];
        let filtered = filter_recent_years(&records, 10);
        assert_eq!(distinct_years(&filtered), vec![2012, 2020]);
        assert!(filter_recent_years(&records, 0).is_empty());
        assert!(filter_recent_years(&[], 10).is_empty());
    }

    #[test]
    fn test_daily_groups_sorted_by_date() {
        let records = vec![
            record(2015, 7, 20, Some(30.0), Some(20.0)),
            record(2015, 7, 2, Some(28.0), Some(18.0)),
            record(2015, 8, 1, Some(31.0), Some(21.0)),
        ];
        let groups = DailyGroups::build(&records);
        let july = groups.get(2015, 7);
        assert_eq!(july.len(), 2);
        assert_eq!(july[0].day, 2);
        assert_eq!(july[1].day, 20);
        assert!(groups.get(2015, 9).is_empty());
    }

    #[test]
    fn test_temperature_extent() {
        let records = vec![
            record(1997, 1, 5, Some(10.0), Some(2.0)),
            record(1997, 7, 20, Some(35.0), Some(-1.0)),
        ];
        assert_eq!(
            temperature_extent(&records),
            Some(Extent { min: -1.0, max: 35.0 })
        );
        assert_eq!(temperature_extent(&[]), None);
    }

    #[test]
    fn test_extent_of_values() {
        assert_eq!(Extent::of(vec![3.0, -2.0, 7.5]), Some(Extent { min: -2.0, max: 7.5 }));
        assert_eq!(Extent::of(Vec::<f64>::new()), None);
    }
}
