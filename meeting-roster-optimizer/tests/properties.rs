use std::collections::BTreeSet;

use meeting_roster_optimizer::{events, EmployeeId, RosterEvent, Schedule, ScheduleParameters};
use proptest::prelude::*;

fn parameters() -> impl Strategy<Value = ScheduleParameters> {
    (
        2000_i32..=2100,
        1_u32..=12,
        2_u32..=400,
        1_u32..=50,
        1_u32..=4,
        0_u32..=23,
    )
        .prop_flat_map(|(year, month, total_employees, room_count, duration, start_hour)| {
            (1..=total_employees, start_hour..=23).prop_map(
                move |(employees_per_meeting, end_hour)| ScheduleParameters {
                    year,
                    month,
                    total_employees,
                    employees_per_meeting,
                    room_count,
                    meeting_duration_hours: duration,
                    start_hour,
                    end_hour,
                },
            )
        })
}

proptest! {
    #[test]
    fn employees_are_handed_out_in_order(params in parameters()) {
        let schedule = Schedule::plan(&params);
        let handed_out: Vec<EmployeeId> = schedule
            .assignments
            .iter()
            .flat_map(|assignment| assignment.employees.iter().copied())
            .collect();

        let scheduled = schedule.outcome.scheduled_employees;
        prop_assert!(scheduled <= params.total_employees);
        prop_assert_eq!(handed_out, (1..=scheduled).map(EmployeeId).collect::<Vec<_>>());
        prop_assert_eq!(
            scheduled + schedule.outcome.unscheduled_employees,
            params.total_employees
        );
    }

    #[test]
    fn only_the_last_meeting_is_partial(params in parameters()) {
        let schedule = Schedule::plan(&params);
        if let Some((last, full)) = schedule.assignments.split_last() {
            prop_assert!(!last.employees.is_empty());
            prop_assert!(last.employees.len() <= params.employees_per_meeting as usize);
            for assignment in full {
                prop_assert_eq!(
                    assignment.employees.len(),
                    params.employees_per_meeting as usize
                );
            }
        }
    }

    #[test]
    fn summary_matches_assignments(params in parameters()) {
        let events = events(&params);
        let assignments = events
            .iter()
            .filter(|event| matches!(event, RosterEvent::RoomAssignment { .. }))
            .count();
        let days: BTreeSet<_> = Schedule::plan(&params).by_day().into_keys().collect();

        prop_assert!(
            matches!(
                events.last(),
                Some(RosterEvent::Summary { total_days, total_meetings })
                    if *total_meetings as usize == assignments && *total_days as usize == days.len()
            ),
            "unexpected summary {:?}",
            events.last()
        );
    }

    #[test]
    fn every_day_slot_gets_a_meeting(params in parameters()) {
        let events = events(&params);
        for pair in events.windows(2) {
            if let [RosterEvent::DaySlot { .. }, next] = pair {
                prop_assert!(
                    matches!(next, RosterEvent::RoomAssignment { .. }),
                    "empty slot followed by {:?}",
                    next
                );
            }
        }
    }

    #[test]
    fn runs_are_deterministic(params in parameters()) {
        let encode = |events: Vec<RosterEvent>| {
            serde_json::to_vec(&events).map_err(|err| TestCaseError::fail(err.to_string()))
        };
        let first = encode(events(&params))?;
        let second = encode(events(&params))?;
        prop_assert_eq!(first, second);
    }

    #[test]
    fn meetings_fit_into_the_workday(params in parameters()) {
        let schedule = Schedule::plan(&params);
        for assignment in &schedule.assignments {
            let slot = assignment.booking.slot;
            prop_assert!(slot.start_hour >= params.start_hour);
            prop_assert!(slot.start_hour + params.meeting_duration_hours <= params.end_hour);
            prop_assert!((1..=params.room_count).contains(&assignment.booking.room.0));
        }
        if params.start_hour + params.meeting_duration_hours > params.end_hour {
            prop_assert!(schedule.assignments.is_empty());
            prop_assert_eq!(schedule.outcome.stats.total_days, 0);
        }
    }
}
