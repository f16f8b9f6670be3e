#[cfg(test)]
mod tests {
    use crate::logic::{to_provider_start_time, translate_meetings};
    use crate::models::{ZoomMeeting, ZoomMeetingList};
    use proptest::prelude::*;

    // Split at the first '.' and append 'Z': what the calendar client has always relied on.
    fn split_rule(start_time: &str) -> String {
        format!("{}Z", start_time.split('.').next().unwrap_or_default())
    }

    fn zoom_meeting() -> impl Strategy<Value = ZoomMeeting> {
        ("[a-zA-Z0-9 ]{0,40}", "[0-9T:Z.-]{0,30}", 0..1440i64).prop_map(
            |(topic, start_time, duration)| ZoomMeeting {
                topic,
                start_time,
                duration,
            },
        )
    }

    proptest! {
        #[test]
        fn test_truncation_matches_split_rule_for_utc_timestamps(
            year in 1971..2100i32,
            month in 1..=12u32,
            day in 1..=28u32,
            hour in 0..24u32,
            minute in 0..60u32,
            second in 0..60u32,
            fraction in "[0-9]{1,9}",
        ) {
            let input = format!(
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{}Z",
                year, month, day, hour, minute, second, fraction
            );
            let converted = to_provider_start_time(&input).unwrap();
            prop_assert_eq!(&converted, &split_rule(&input));
            prop_assert_eq!(converted.matches('Z').count(), 1);
            prop_assert!(!converted.contains('.'));
        }

        #[test]
        fn test_translation_preserves_count_and_fields(
            meetings in proptest::collection::vec(zoom_meeting(), 0..20)
        ) {
            let translated = translate_meetings(ZoomMeetingList { meetings: meetings.clone() });
            prop_assert_eq!(translated.len(), meetings.len());
            for (source, target) in meetings.iter().zip(translated.iter()) {
                prop_assert_eq!(&target.topic, &source.topic);
                prop_assert_eq!(target.duration, source.duration);
                prop_assert_eq!(&target.start_time, &source.start_time);
            }
        }
    }
}
