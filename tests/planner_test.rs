// Integration tests driving the engine the way the grid shell does:
// drops and dialog submissions produce mutations, the store applies them,
// and the week buckets reflect the result.

use chrono::NaiveDate;
use pretty_assertions::assert_eq;

use shift_planner::models::category::{IndicatorCategory, ShiftCategory};
use shift_planner::models::event::{Event, EventDraft};
use shift_planner::models::mutation::Mutation;
use shift_planner::models::roster::builtin_roster;
use shift_planner::services::dragdrop::DropPayload;
use shift_planner::services::indicator::{count, indicators};
use shift_planner::services::planner::WeekPlanner;
use shift_planner::services::store::StoreError;
use shift_planner::services::week::Direction;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn dragging_an_event_to_another_day_moves_it_immediately() {
    init_logging();
    let e1 = Event::new("E1", "Kitchen Morning", ShiftCategory::Kitchen, "1", ymd(2024, 11, 25), "08:00", "16:00");
    let mut planner =
        WeekPlanner::seeded(ymd(2024, 11, 25), builtin_roster(), vec![e1.clone()]).unwrap();

    let draft = planner
        .handle_drop(DropPayload::Event(e1.clone()), ymd(2024, 11, 26))
        .unwrap();
    assert!(draft.is_none(), "event drops never open a dialog");

    let moved = planner.snapshot().get("E1").unwrap();
    assert_eq!(moved.date, ymd(2024, 11, 26));
    assert_eq!(Event { date: e1.date, ..moved.clone() }, e1);

    let buckets = planner.buckets();
    assert!(buckets[0].events.is_empty());
    assert_eq!(buckets[1].events.len(), 1);
}

#[test]
fn dropping_a_person_only_prefills_the_dialog() {
    init_logging();
    let mut planner = WeekPlanner::new(ymd(2024, 11, 25), builtin_roster());

    let draft = planner
        .handle_drop(DropPayload::Person { person_id: "3".to_string() }, ymd(2024, 11, 27))
        .unwrap()
        .expect("person drops open the dialog");

    assert_eq!(draft.assignee_id, "3");
    assert_eq!(draft.date, ymd(2024, 11, 27));
    assert_eq!(draft.category, ShiftCategory::Kitchen);
    assert_eq!(draft.start_time, "09:00");
    assert_eq!(draft.end_time, "17:00");
    assert!(planner.snapshot().is_empty(), "nothing is written before the dialog confirms");

    // The human confirms; only now does the event reach the store.
    let mut confirmed = draft;
    confirmed.title = "Service Evening".to_string();
    planner.apply(Mutation::create(confirmed)).unwrap();

    let snapshot = planner.snapshot();
    assert_eq!(snapshot.len(), 1);
    let created = &snapshot.events()[0];
    assert!(!created.id.is_empty());
    assert_eq!(created.assignee_id, "3");
}

#[test]
fn delete_follows_the_strict_not_found_policy() {
    init_logging();
    let events = vec![
        Event::new("a", "Shift", ShiftCategory::Service, "3", ymd(2024, 11, 25), "12:00", "20:00"),
        Event::new("b", "Shift", ShiftCategory::Prep, "2", ymd(2024, 11, 26), "09:00", "17:00"),
    ];
    let mut planner = WeekPlanner::seeded(ymd(2024, 11, 25), builtin_roster(), events).unwrap();

    planner.apply(Mutation::delete("a")).unwrap();
    assert_eq!(planner.snapshot().len(), 1);
    assert!(planner.snapshot().contains("b"));

    let err = planner.apply(Mutation::delete("z")).unwrap_err();
    assert_eq!(err, StoreError::NotFound("z".to_string()));
    assert_eq!(planner.snapshot().len(), 1);
}

#[test]
fn the_week_window_runs_monday_through_sunday() {
    // Anchor on a Wednesday; the window runs Monday 2024-11-25 through
    // Sunday 2024-12-01.
    let planner = WeekPlanner::new(ymd(2024, 11, 27), builtin_roster());
    let week = planner.week();
    assert_eq!(week[0], ymd(2024, 11, 25));
    assert_eq!(week[6], ymd(2024, 12, 1));
    assert!(week.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn indicators_surface_in_the_day_header() {
    init_logging();
    let events = vec![
        Event::new("a", "Kitchen Morning", ShiftCategory::Kitchen, "1", ymd(2024, 11, 25), "08:00", "16:00")
            .with_indicator(IndicatorCategory::Birthday),
        Event::new("b", "Service Evening", ShiftCategory::Service, "3", ymd(2024, 11, 25), "16:00", "23:00")
            .with_indicator(IndicatorCategory::Birthday),
        Event::new("c", "Prep Shift", ShiftCategory::Prep, "2", ymd(2024, 11, 25), "09:00", "17:00"),
    ];
    let planner = WeekPlanner::seeded(ymd(2024, 11, 25), builtin_roster(), events).unwrap();

    let buckets = planner.buckets();
    assert_eq!(indicators(&buckets[0]), vec![IndicatorCategory::Birthday]);
    assert_eq!(count(&buckets[0]), 3);
    assert_eq!(count(&buckets[1]), 0);
}

#[test]
fn a_full_scheduling_session() {
    init_logging();
    let mut planner = WeekPlanner::demo();
    assert_eq!(planner.snapshot().len(), 13);

    // Move Monday's kitchen shift to Tuesday.
    let kitchen = planner.snapshot().get("1").unwrap().clone();
    planner.handle_drop(DropPayload::Event(kitchen), ymd(2024, 11, 26)).unwrap();

    // Assign Emma a new supervisor shift on Friday via drop + dialog.
    let mut draft = planner
        .handle_drop(DropPayload::Person { person_id: "4".to_string() }, ymd(2024, 11, 29))
        .unwrap()
        .unwrap();
    draft.title = "Supervisor Cover".to_string();
    draft.category = ShiftCategory::Supervisor;
    planner.apply(Mutation::create(draft)).unwrap();

    // Edit a shift through the dialog path.
    let mut edited = planner.snapshot().get("5").unwrap().clone();
    edited.indicator = Some(IndicatorCategory::Meeting);
    planner.apply(Mutation::Update(edited)).unwrap();

    // Drop Friday's day off entirely.
    planner.apply(Mutation::delete("6")).unwrap();

    assert_eq!(planner.snapshot().len(), 13);
    let buckets = planner.buckets();
    assert_eq!(count(&buckets[0]), 1);
    assert_eq!(count(&buckets[1]), 3);
    assert_eq!(indicators(&buckets[3]), vec![IndicatorCategory::Meeting]);

    // The far future is empty but reachable.
    for _ in 0..52 {
        planner.navigate(Direction::Next);
    }
    assert!(planner.buckets().iter().all(|b| b.events.is_empty()));
}

#[test]
fn double_booking_is_not_rejected() {
    init_logging();
    let mut planner = WeekPlanner::new(ymd(2024, 11, 25), builtin_roster());

    for _ in 0..2 {
        let mut draft = EventDraft::prefill("1", ymd(2024, 11, 25));
        draft.title = "Overlapping Shift".to_string();
        planner.apply(Mutation::create(draft)).unwrap();
    }

    // Same person, same day, identical hours: no conflict detection exists.
    let buckets = planner.buckets();
    assert_eq!(count(&buckets[0]), 2);
}
