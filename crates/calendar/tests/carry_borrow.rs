use rpgcal_calendar::{CalendarDate, GenerationArgs, LunarPhase, Season};

fn args(date: &CalendarDate) -> (u8, u8, u8, i64) {
    let GenerationArgs {
        day,
        week,
        month,
        year,
    } = date.generation_args();
    (day, week, month, year)
}

#[test]
fn last_day_of_year_carries_into_next_year() {
    let mut date = CalendarDate::new(7, 4, 12, 0).unwrap();
    date.forward_day();
    assert_eq!(args(&date), (1, 1, 1, 1));
    assert_eq!(date.season(), Season::Spring);
}

#[test]
fn first_day_of_year_zero_borrows_into_negative_year() {
    let mut date = CalendarDate::default();
    date.back_day();
    assert_eq!(args(&date), (7, 4, 12, -1));
    assert_eq!(date.season(), Season::Winter);
}

#[test]
fn full_year_of_days_returns_to_same_position() {
    // 7 * 4 * 12 = 336 days per year.
    let mut date = CalendarDate::new(3, 2, 5, 10).unwrap();
    date.forward_days(336);
    assert_eq!(args(&date), (3, 2, 5, 11));
    date.back_days(336);
    assert_eq!(args(&date), (3, 2, 5, 10));
}

#[test]
fn day_sequence_through_first_month() {
    let mut date = CalendarDate::default();
    let mut seen = Vec::new();
    for _ in 0..28 {
        seen.push(date.day_of_month());
        date.forward_day();
    }
    assert_eq!(seen, (1..=28).collect::<Vec<u8>>());
    assert_eq!(args(&date), (1, 1, 2, 0));
}

#[test]
fn forward_days_matches_repeated_single_steps() {
    for n in [0_u32, 1, 6, 8, 40] {
        let mut stepped = CalendarDate::new(5, 3, 11, 2).unwrap();
        for _ in 0..n {
            stepped.forward_day();
        }
        let mut batched = CalendarDate::new(5, 3, 11, 2).unwrap();
        batched.forward_days(n);
        assert_eq!(stepped, batched, "n = {n}");
        assert_eq!(stepped.lunar_phase(), batched.lunar_phase(), "n = {n}");
    }
}

#[test]
fn back_days_matches_repeated_single_steps() {
    for n in [0_u32, 1, 6, 8, 40] {
        let mut stepped = CalendarDate::new(2, 1, 1, 0).unwrap();
        for _ in 0..n {
            stepped.back_day();
        }
        let mut batched = CalendarDate::new(2, 1, 1, 0).unwrap();
        batched.back_days(n);
        assert_eq!(stepped, batched, "n = {n}");
    }
}

#[test]
fn weeks_carry_into_months() {
    let mut date = CalendarDate::new(4, 3, 6, 0).unwrap();
    date.forward_weeks(2);
    assert_eq!(args(&date), (4, 1, 7, 0));
    assert_eq!(date.season(), Season::Fall);
    date.back_weeks(5);
    assert_eq!(args(&date), (4, 4, 5, 0));
    assert_eq!(date.season(), Season::Summer);
}

#[test]
fn months_carry_into_years() {
    let mut date = CalendarDate::new(1, 1, 9, 0).unwrap();
    date.forward_months(4);
    assert_eq!(args(&date), (1, 1, 1, 1));
    date.back_months(13);
    assert_eq!(args(&date), (1, 1, 12, -1));
    assert_eq!(date.season(), Season::Winter);
}

#[test]
fn years_preserve_lower_units() {
    let mut date = CalendarDate::new(6, 2, 8, 0).unwrap();
    date.back_years(3);
    assert_eq!(args(&date), (6, 2, 8, -3));
    date.forward_years(5);
    assert_eq!(args(&date), (6, 2, 8, 2));
    assert_eq!(date.lunar_phase(), LunarPhase::Full);
}

#[test]
fn generation_args_round_trip() {
    let mut date = CalendarDate::default();
    date.forward_days(1000);
    let rebuilt = date.generation_args().into_date().unwrap();
    assert_eq!(rebuilt, date);
    assert_eq!(rebuilt.season(), date.season());
    assert_eq!(rebuilt.lunar_phase(), date.lunar_phase());
}
