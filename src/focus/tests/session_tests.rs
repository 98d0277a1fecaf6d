//! Unit tests for the countdown arithmetic.

use crate::focus::session::{FocusError, FocusSession, clock_face};
use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use rstest::{fixture, rstest};

#[fixture]
fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0)
        .single()
        .expect("valid timestamp")
}

#[rstest]
fn zero_minutes_is_rejected(start: DateTime<Utc>) {
    assert_eq!(
        FocusSession::new("Thesis draft", 0, start),
        Err(FocusError::ZeroDuration)
    );
}

#[rstest]
#[case(TimeDelta::zero(), TimeDelta::minutes(25))]
#[case(TimeDelta::seconds(90), TimeDelta::seconds(25 * 60 - 90))]
#[case(TimeDelta::minutes(25), TimeDelta::zero())]
#[case(TimeDelta::hours(2), TimeDelta::zero())]
#[case(TimeDelta::minutes(-5), TimeDelta::minutes(25))]
fn remaining_is_clamped(
    start: DateTime<Utc>,
    #[case] elapsed: TimeDelta,
    #[case] expected: TimeDelta,
) {
    let session = FocusSession::new("Thesis draft", 25, start).expect("valid session");

    assert_eq!(session.remaining(start + elapsed), expected);
}

#[rstest]
fn session_finishes_exactly_at_end(start: DateTime<Utc>) {
    let session = FocusSession::new("Thesis draft", 30, start).expect("valid session");

    assert!(!session.is_finished(start + TimeDelta::seconds(30 * 60 - 1)));
    assert!(session.is_finished(session.ends_at()));
    assert_eq!(session.task_name(), "Thesis draft");
    assert_eq!(session.started_at(), start);
}

#[rstest]
#[case(TimeDelta::minutes(25), "25:00")]
#[case(TimeDelta::seconds(61), "01:01")]
#[case(TimeDelta::milliseconds(59_900), "00:59")]
#[case(TimeDelta::zero(), "00:00")]
#[case(TimeDelta::seconds(-3), "00:00")]
#[case(TimeDelta::hours(3), "180:00")]
fn clock_face_renders_minutes_and_seconds(#[case] remaining: TimeDelta, #[case] expected: &str) {
    assert_eq!(clock_face(remaining), expected);
}
