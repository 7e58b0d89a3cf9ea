use caltravel::{
    offset, CivilTime, Clock, ClockSource, Direction, Domain, Offset, OffsetOptions,
    OverflowPolicy, Span, Traveller,
};
use tracing_subscriber::EnvFilter;

fn main() -> caltravel::Result<()> {
    // `RUST_LOG=caltravel=trace` shows every resolved offset.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("caltravel=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let clock = ClockSource::new();
    println!("now:              {}", clock.now());
    println!("3 days ago:       {}", Offset::days(3).ago_now(&clock)?);
    println!("start of last mo: {}", Traveller::last(1).months(&clock)?);
    println!("start of next yr: {}", Traveller::next(1).years(&clock)?);

    let leap_day = CivilTime::from_ymd(2012, 2, 29)?;
    let clamped = offset(leap_day, Direction::Future, 1, Domain::Year)?;
    let rolled = Offset::years(1).apply_with(
        Direction::Future,
        leap_day,
        &OffsetOptions::new().with_overflow(OverflowPolicy::Roll),
    )?;
    println!("{leap_day} + 1 year: {clamped} (clamp), {rolled} (roll)");

    let frozen = CivilTime::new(2012, 4, 16, 5, 32, 16)?;
    clock.with_fixed_time(frozen, |clock| -> caltravel::Result<()> {
        let span = Span::new(Traveller::last(2).weeks(clock)?, clock.now());
        let days = span.duration_days().value();
        println!("two weeks back from {frozen}: {span} ({days} days)");
        Ok(())
    })
}
