use std::sync::{Arc, Barrier};
use std::thread;

use caltravel::{
    anchored, anchored_now, offset, CivilTime, Clock, ClockSource, Direction, Domain, FixedClock,
    Offset, Span, Traveller,
};

fn ymd(y: i32, mo: u32, d: u32) -> CivilTime {
    CivilTime::from_ymd(y, mo, d).unwrap()
}

#[test]
fn yesterday_from_boxing_day() {
    let result = offset(ymd(2012, 12, 26), Direction::Past, 1, Domain::Day).unwrap();
    assert_eq!(result, ymd(2012, 12, 25));
}

#[test]
fn days_wrap_forward_into_next_month() {
    let result = offset(ymd(2012, 6, 29), Direction::Future, 4, Domain::Day).unwrap();
    assert_eq!(result, ymd(2012, 7, 3));
}

#[test]
fn days_wrap_back_across_short_february() {
    let result = offset(ymd(2011, 3, 2), Direction::Past, 4, Domain::Day).unwrap();
    assert_eq!(result, ymd(2011, 2, 26));
}

#[test]
fn anchored_two_months_back_snaps_to_first() {
    let result = anchored(Direction::Past, 2, Domain::Month, ymd(2011, 3, 5)).unwrap();
    assert_eq!(result, ymd(2011, 1, 1));
}

#[test]
fn anchored_next_year_snaps_to_january_first() {
    let result = anchored(Direction::Future, 1, Domain::Year, ymd(2012, 4, 16)).unwrap();
    assert_eq!(result, ymd(2013, 1, 1));
}

#[test]
fn six_months_carry_into_next_year() {
    let result = offset(ymd(2020, 7, 30), Direction::Future, 6, Domain::Month).unwrap();
    assert_eq!(result, ymd(2021, 1, 30));
}

#[test]
fn leap_day_year_offsets() {
    assert_eq!(
        offset(ymd(2011, 2, 28), Direction::Future, 1, Domain::Year).unwrap(),
        ymd(2012, 2, 28)
    );
    assert_eq!(
        offset(ymd(2012, 2, 29), Direction::Future, 1, Domain::Year).unwrap(),
        ymd(2013, 2, 28)
    );
    assert_eq!(
        offset(ymd(2012, 2, 29), Direction::Future, 4, Domain::Year).unwrap(),
        ymd(2016, 2, 29)
    );
}

#[test]
fn clock_source_drives_now_defaults() {
    let source = ClockSource::new();
    let frozen = CivilTime::new(2012, 4, 16, 5, 32, 16).unwrap();

    source.with_fixed_time(frozen, |clock| {
        assert_eq!(
            Offset::hours(6).ago_now(clock).unwrap(),
            CivilTime::new(2012, 4, 15, 23, 32, 16).unwrap()
        );
        assert_eq!(Traveller::last(1).months(clock).unwrap(), ymd(2012, 3, 1));
        assert_eq!(
            anchored_now(Direction::Future, 2, Domain::Week, clock).unwrap(),
            ymd(2012, 4, 30)
        );
    });
}

#[test]
fn overlapping_scopes_never_see_each_other() {
    let source = Arc::new(ClockSource::with_clock(FixedClock::new(ymd(2000, 1, 1))));
    let start = Arc::new(Barrier::new(4));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let source = Arc::clone(&source);
            let start = Arc::clone(&start);
            thread::spawn(move || {
                let mine = ymd(2010 + i, 1, 1);
                start.wait();
                for _ in 0..200 {
                    source.with_fixed_time(mine, |clock| {
                        assert_eq!(clock.now(), mine);
                        thread::yield_now();
                        assert_eq!(clock.now(), mine);
                    });
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(source.fixed_time(), None);
    assert_eq!(source.now(), ymd(2000, 1, 1));
}

#[test]
fn span_between_anchored_periods() {
    let clock = FixedClock::new(CivilTime::new(2012, 4, 16, 5, 32, 16).unwrap());
    let span = Span::new(
        Traveller::last(1).months(&clock).unwrap(),
        Traveller::next(1).months(&clock).unwrap(),
    );
    assert_eq!(span.whole_months(), 2);
    assert_eq!(span.whole_days(), 31 + 30);
}

#[cfg(feature = "serde")]
#[test]
fn serde_value_types() {
    use caltravel::{OffsetOptions, OverflowPolicy};

    let time = CivilTime::new(2012, 4, 16, 5, 32, 16).unwrap();
    let json = serde_json::to_string(&time).unwrap();
    assert_eq!(
        serde_json::from_str::<CivilTime>(&json).unwrap(),
        time
    );
    assert!(serde_json::from_str::<CivilTime>(r#"{"year":2011,"month":2,"day":29}"#).is_err());
    assert_eq!(
        serde_json::from_str::<CivilTime>(r#"{"year":2012,"month":2,"day":29}"#).unwrap(),
        ymd(2012, 2, 29)
    );

    assert_eq!(serde_json::to_string(&Domain::Week).unwrap(), r#""week""#);
    assert_eq!(serde_json::to_string(&Direction::Past).unwrap(), r#""past""#);

    let options: OffsetOptions = serde_json::from_str(r#"{"overflow":"roll"}"#).unwrap();
    assert_eq!(options.overflow, OverflowPolicy::Roll);
    assert!(!options.zero_time);
}
