use rpgcal_calendar::{
    CalendarDate, LunarCycle, LunarPhase, Season, WeeklyLunarPhase, YearlyLunarPhase,
};

#[test]
fn weekly_phase_follows_week() {
    let mut date = CalendarDate::default();
    let mut phases = Vec::new();
    for _ in 0..5 {
        phases.push(date.lunar_phase().get());
        date.forward_week();
    }
    // The fifth step lands on week 1 of the next month.
    assert_eq!(phases, vec![1, 2, 3, 4, 1]);
}

#[test]
fn weekly_phase_ignores_year_changes() {
    let mut date = CalendarDate::new(1, 3, 6, 0).unwrap();
    date.forward_years(7);
    assert_eq!(date.lunar_phase(), LunarPhase::Waning);
    date.back_years(20);
    assert_eq!(date.lunar_phase(), LunarPhase::Waning);
}

#[test]
fn yearly_phase_follows_year() {
    let phases: Vec<u8> = (0..=4)
        .map(|year| {
            CalendarDate::start_of(YearlyLunarPhase, year)
                .lunar_phase()
                .get()
        })
        .collect();
    assert_eq!(phases, vec![1, 2, 3, 4, 1]);
}

#[test]
fn yearly_phase_negative_years() {
    let phases: Vec<u8> = (-4..0)
        .map(|year| {
            CalendarDate::start_of(YearlyLunarPhase, year)
                .lunar_phase()
                .get()
        })
        .collect();
    assert_eq!(phases, vec![1, 2, 3, 4]);
}

#[test]
fn yearly_phase_ignores_week_changes() {
    let mut date = CalendarDate::start_of(YearlyLunarPhase, 1);
    date.forward_weeks(3);
    assert_eq!(date.lunar_phase(), LunarPhase::Full);
}

#[test]
fn yearly_phase_updates_on_day_carry_both_ways() {
    let mut date = CalendarDate::with_policy(YearlyLunarPhase, 7, 4, 12, 0).unwrap();
    date.forward_day();
    assert_eq!(date.year(), 1);
    assert_eq!(date.lunar_phase(), LunarPhase::Full);
    date.back_day();
    assert_eq!(date.year(), 0);
    assert_eq!(date.lunar_phase(), LunarPhase::Waxing);
}

#[test]
fn weekly_step_advances_to_next_week_start() {
    let mut date = CalendarDate::with_policy(WeeklyLunarPhase, 5, 2, 3, 0).unwrap();
    date.forward_lunar_phase();
    assert_eq!((date.day(), date.week(), date.month()), (1, 3, 3));
    assert_eq!(date.lunar_phase(), LunarPhase::Waning);

    date.back_lunar_phase();
    date.back_lunar_phase();
    assert_eq!((date.day(), date.week(), date.month()), (1, 1, 3));
    assert_eq!(date.lunar_phase(), LunarPhase::Waxing);
}

#[test]
fn yearly_step_advances_to_next_year_start() {
    let mut date = CalendarDate::with_policy(YearlyLunarPhase, 5, 2, 9, 3).unwrap();
    date.forward_lunar_phase();
    assert_eq!(
        (date.day(), date.week(), date.month(), date.year()),
        (1, 1, 1, 4)
    );
    assert_eq!(date.season(), Season::Spring);
    assert_eq!(date.lunar_phase(), LunarPhase::Waxing);

    date.back_lunar_phase();
    assert_eq!(date.year(), 3);
    assert_eq!(date.lunar_phase(), LunarPhase::New);
}

#[test]
fn runtime_cycle_agrees_with_static_policies() {
    let mut weekly = CalendarDate::with_policy(LunarCycle::Weekly, 1, 1, 1, 0).unwrap();
    let mut yearly = CalendarDate::with_policy(LunarCycle::Yearly, 1, 1, 1, 0).unwrap();
    let mut weekly_ref = CalendarDate::default();
    let mut yearly_ref = CalendarDate::start_of(YearlyLunarPhase, 0);

    for _ in 0..6 {
        weekly.forward_lunar_phase();
        yearly.forward_lunar_phase();
        weekly_ref.forward_lunar_phase();
        yearly_ref.forward_lunar_phase();
        assert_eq!(weekly.generation_args(), weekly_ref.generation_args());
        assert_eq!(weekly.lunar_phase(), weekly_ref.lunar_phase());
        assert_eq!(yearly.generation_args(), yearly_ref.generation_args());
        assert_eq!(yearly.lunar_phase(), yearly_ref.lunar_phase());
    }
}
