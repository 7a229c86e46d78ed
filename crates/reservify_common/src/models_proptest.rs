#[cfg(test)]
mod tests {
    use crate::models::TimeWindow;
    use chrono::{Duration, NaiveDate, NaiveTime, TimeZone, Utc};
    use proptest::prelude::*;

    proptest! {
        /// A window built from local time always spans exactly the requested duration.
        #[test]
        fn prop_local_window_spans_duration(
            day_offset in 0i64..730,
            hour in 0u32..24,
            minute in 0u32..60,
            duration_minutes in 1i64..600,
        ) {
            let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap() + Duration::days(day_offset);
            let time = NaiveTime::from_hms_opt(hour, minute, 0).unwrap();

            // Skipped local times are rejected; every other one yields an exact span
            if let Ok(window) = TimeWindow::starting_at_local(
                date,
                time,
                chrono_tz::America::New_York,
                Duration::minutes(duration_minutes),
            ) {
                prop_assert_eq!(window.end - window.start, Duration::minutes(duration_minutes));
                prop_assert!(window.start < window.end);
            }
        }

        /// Explicit bounds are accepted exactly when the end is after the start.
        #[test]
        fn prop_new_requires_end_after_start(
            start in 0i64..10_000,
            end in 0i64..10_000,
        ) {
            let base = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
            let window = TimeWindow::new(
                base + Duration::minutes(start),
                base + Duration::minutes(end),
            );

            prop_assert_eq!(window.is_ok(), end > start);
        }
    }
}
