use chrono::{Datelike, NaiveDate};
use mockable::Clock;
use std::sync::Arc;

/// Whole years elapsed between `birth_date` and `today`.
///
/// The year difference is reduced by one while this year's birthday is still ahead.
pub fn age_on(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age
}

#[derive(Clone)]
pub struct AgeCalculator {
    clock: Arc<dyn Clock>,
}

impl AgeCalculator {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// The calendar day on the host's local clock.
    pub fn today(&self) -> NaiveDate {
        self.clock.local().date_naive()
    }

    pub fn age(&self, birth_date: NaiveDate) -> i32 {
        age_on(birth_date, self.today())
    }
}

impl std::fmt::Debug for AgeCalculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgeCalculator")
            .field("today", &self.today())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_support::fixed_clock;
    use chrono::{DateTime, Local, TimeZone, Utc};

    /// Local and UTC readings deliberately a calendar day apart.
    struct SplitDayClock {
        local: DateTime<Local>,
        utc: DateTime<Utc>,
    }

    impl Clock for SplitDayClock {
        fn local(&self) -> DateTime<Local> {
            self.local
        }

        fn utc(&self) -> DateTime<Utc> {
            self.utc
        }
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_birthday_today_counts_full_year() {
        let today = date(2024, 6, 15);
        assert_eq!(age_on(date(2003, 6, 15), today), 21);
    }

    #[test]
    fn test_birthday_tomorrow_is_one_year_less() {
        let today = date(2024, 6, 15);
        assert_eq!(age_on(date(2003, 6, 16), today), 20);
    }

    #[test]
    fn test_earlier_month_later_day_has_had_birthday() {
        let today = date(2024, 6, 15);
        assert_eq!(age_on(date(2000, 5, 30), today), 24);
        assert_eq!(age_on(date(2000, 7, 1), today), 23);
    }

    #[test]
    fn test_leap_day_birthday_on_non_leap_year() {
        assert_eq!(age_on(date(2000, 2, 29), date(2021, 2, 28)), 20);
        assert_eq!(age_on(date(2000, 2, 29), date(2021, 3, 1)), 21);
    }

    #[test]
    fn test_calculator_reads_clock() {
        let calculator = AgeCalculator::new(fixed_clock(date(2024, 6, 15)));
        assert_eq!(calculator.today(), date(2024, 6, 15));
        assert_eq!(calculator.age(date(1994, 1, 1)), 30);
    }

    #[test]
    fn test_local_calendar_day_wins_over_utc() {
        let local = Local
            .from_local_datetime(&date(2024, 6, 15).and_hms_opt(12, 0, 0).unwrap())
            .earliest()
            .unwrap();
        let utc = date(2024, 6, 14).and_hms_opt(12, 0, 0).unwrap().and_utc();
        let calculator = AgeCalculator::new(Arc::new(SplitDayClock { local, utc }));

        assert_eq!(calculator.today(), date(2024, 6, 15));
        assert_eq!(calculator.age(date(2003, 6, 15)), 21);
    }
}
