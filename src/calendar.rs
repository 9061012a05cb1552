use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Working-day calendar: a weekend rule plus an explicit excluded-date set.
/// Callers build one from their own configuration and thread it through
/// computations; nothing here is cached globally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkCalendar {
    excluded: HashSet<NaiveDate>,
    non_working_days: HashSet<Weekday>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkCalendarConfig {
    working_days: Vec<Weekday>,
    excluded: Vec<NaiveDate>,
}

impl Default for WorkCalendar {
    fn default() -> Self {
        Self {
            excluded: HashSet::new(),
            non_working_days: HashSet::from([Weekday::Sat, Weekday::Sun]),
        }
    }
}

impl WorkCalendar {
    const ALL_WEEKDAYS: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    /// Plain Mon-Fri calendar with no excluded dates.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mon-Fri calendar with the given dates excluded.
    pub fn with_excluded<I>(dates: I) -> Self
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        let mut calendar = Self::default();
        calendar.excluded = dates.into_iter().collect();
        calendar
    }

    pub fn from_config(config: &WorkCalendarConfig) -> Self {
        let working: HashSet<Weekday> = config.working_days.iter().copied().collect();
        let mut non_working_days = HashSet::new();
        for day in Self::ALL_WEEKDAYS {
            if !working.contains(&day) {
                non_working_days.insert(day);
            }
        }
        Self {
            excluded: config.excluded.iter().copied().collect(),
            non_working_days,
        }
    }

    pub fn to_config(&self) -> WorkCalendarConfig {
        WorkCalendarConfig::from(self)
    }

    /// Exclude a single date
    pub fn add_excluded_date(&mut self, date: NaiveDate) {
        self.excluded.insert(date);
    }

    /// Exclude multiple dates at once
    pub fn add_excluded_dates(&mut self, dates: &[NaiveDate]) {
        self.excluded.extend(dates);
    }

    /// Exclude the same fixed-date holiday for a range of years
    /// Example: exclude Dec 24 for 2025-2030
    pub fn add_recurring_excluded(&mut self, month: u32, day: u32, start_year: i32, end_year: i32) {
        for year in start_year..=end_year {
            if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                self.excluded.insert(date);
            }
        }
    }

    /// Check whether a date counts as a working day
    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        !self.excluded.contains(&date) && !self.non_working_days.contains(&date.weekday())
    }

    /// Count working days in `[start, end]` inclusive. A reversed range
    /// counts zero rather than erroring; callers rely on that during renders.
    pub fn business_days_between(&self, start: NaiveDate, end: NaiveDate) -> i64 {
        if end < start {
            return 0;
        }
        let mut count = 0;
        let mut current = start;
        while current <= end {
            if self.is_working_day(current) {
                count += 1;
            }
            current = current + Duration::days(1);
        }
        count
    }

    /// Signed working-day distance from a planned date to the matching actual
    /// date. Positive means the actual date landed later.
    pub fn working_days_diff(&self, planned: NaiveDate, actual: NaiveDate) -> i64 {
        if planned == actual {
            0
        } else if actual > planned {
            self.business_days_between(planned, actual) - 1
        } else {
            -(self.business_days_between(actual, planned) - 1)
        }
    }
}

impl WorkCalendarConfig {
    pub fn new<I, J>(working_days: I, excluded: J) -> Self
    where
        I: IntoIterator<Item = Weekday>,
        J: IntoIterator<Item = NaiveDate>,
    {
        let mut working: Vec<Weekday> = working_days.into_iter().collect();
        working.sort_by_key(|wd| wd.num_days_from_monday());
        working.dedup_by(|a, b| a.num_days_from_monday() == b.num_days_from_monday());

        let mut excluded: Vec<NaiveDate> = excluded.into_iter().collect();
        excluded.sort();
        excluded.dedup();

        Self {
            working_days: working,
            excluded,
        }
    }

    pub fn working_days(&self) -> &[Weekday] {
        &self.working_days
    }

    pub fn excluded(&self) -> &[NaiveDate] {
        &self.excluded
    }
}

impl Default for WorkCalendarConfig {
    fn default() -> Self {
        WorkCalendarConfig::from(&WorkCalendar::default())
    }
}

impl From<&WorkCalendar> for WorkCalendarConfig {
    fn from(calendar: &WorkCalendar) -> Self {
        let mut working = Vec::new();
        for day in WorkCalendar::ALL_WEEKDAYS {
            if !calendar.non_working_days.contains(&day) {
                working.push(day);
            }
        }
        let mut excluded: Vec<NaiveDate> = calendar.excluded.iter().copied().collect();
        excluded.sort();
        Self {
            working_days: working,
            excluded,
        }
    }
}
