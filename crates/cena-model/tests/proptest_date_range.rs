use cena_model::DateRange;
use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use proptest::test_runner::Config;

fn base() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).expect("base date")
}

proptest! {
    #![proptest_config(Config::with_cases(128))]
    #[test]
    fn range_contains_exactly_the_days_between_bounds(
        start in 0_i64..400,
        len in 0_i64..60,
        offset in 0_i64..500
    ) {
        let since = base() + Duration::days(start);
        let until = since + Duration::days(len);
        let date = base() + Duration::days(offset);
        let range = DateRange::new(since, until).expect("ordered range");
        prop_assert_eq!(range.contains(date), since <= date && date <= until);
    }

    #[test]
    fn reversed_ranges_are_always_rejected(start in 0_i64..400, gap in 1_i64..60) {
        let until = base() + Duration::days(start);
        let since = until + Duration::days(gap);
        prop_assert!(DateRange::new(since, until).is_err());
    }
}
