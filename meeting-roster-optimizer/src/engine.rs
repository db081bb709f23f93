use alloc::collections::BTreeMap;
use core::convert::Infallible;

use chrono::NaiveDate;
use itertools::Itertools as _;
use serde::Serialize;
use tracing::{debug, info, instrument, trace, warn};

use crate::cursor::EmployeeCursor;
use crate::model::{
    EmployeeAssignment, EmployeeId, RoomBooking, RoomNumber, ScheduleStats, TimeSlot,
};
use crate::params::ScheduleParameters;
use crate::slots::SlotEnumerator;

/// Receives the roster while it is being built.
///
/// Calls arrive in enumeration order: a `day_slot` followed by the
/// `room_assignment`s of that slot, repeated, then exactly one `summary`.
/// An error aborts the run and is handed back to the caller of [`run`].
pub trait RosterSink {
    type Error;

    fn day_slot(&mut self, slot: &TimeSlot) -> Result<(), Self::Error>;

    fn room_assignment(&mut self, assignment: &EmployeeAssignment) -> Result<(), Self::Error>;

    fn summary(&mut self, outcome: &RosterOutcome) -> Result<(), Self::Error>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct RosterOutcome {
    pub stats: ScheduleStats,
    pub scheduled_employees: u32,
    /// employees left over because the month ran out of slots
    pub unscheduled_employees: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum RosterEvent {
    DaySlot {
        date: NaiveDate,
        hour: u32,
    },
    RoomAssignment {
        room: RoomNumber,
        employees: Vec<EmployeeId>,
    },
    Summary {
        total_days: u32,
        total_meetings: u32,
    },
}

impl From<&TimeSlot> for RosterEvent {
    fn from(slot: &TimeSlot) -> Self {
        Self::DaySlot {
            date: slot.date,
            hour: slot.start_hour,
        }
    }
}

impl From<&EmployeeAssignment> for RosterEvent {
    fn from(assignment: &EmployeeAssignment) -> Self {
        Self::RoomAssignment {
            room: assignment.booking.room,
            employees: assignment.employees.clone(),
        }
    }
}

impl From<&RosterOutcome> for RosterEvent {
    fn from(outcome: &RosterOutcome) -> Self {
        Self::Summary {
            total_days: outcome.stats.total_days,
            total_meetings: outcome.stats.total_meetings,
        }
    }
}

impl RosterSink for Vec<RosterEvent> {
    type Error = Infallible;

    fn day_slot(&mut self, slot: &TimeSlot) -> Result<(), Self::Error> {
        self.push(slot.into());
        Ok(())
    }

    fn room_assignment(&mut self, assignment: &EmployeeAssignment) -> Result<(), Self::Error> {
        self.push(assignment.into());
        Ok(())
    }

    fn summary(&mut self, outcome: &RosterOutcome) -> Result<(), Self::Error> {
        self.push(outcome.into());
        Ok(())
    }
}

/// Fills bookings in enumeration order until either the employees or the
/// month run out.
///
/// Exhaustion is checked before every slot and every room, so once the last
/// employee is placed nothing else reaches the sink except the summary. The
/// last meeting takes whatever is left and may be smaller than
/// `employees_per_meeting`.
#[instrument(level = "debug", skip_all, fields(year = params.year, month = params.month))]
pub fn run<S: RosterSink>(
    params: &ScheduleParameters,
    sink: &mut S,
) -> Result<RosterOutcome, S::Error> {
    let enumerator = SlotEnumerator::new(params);
    let mut cursor = EmployeeCursor::new(params.total_employees);
    let mut stats = ScheduleStats::default();

    'days: for date in enumerator.workdays() {
        if cursor.is_exhausted() {
            break;
        }
        let mut day_booked = false;
        for slot in enumerator.slots_on(date) {
            if cursor.is_exhausted() {
                break 'days;
            }
            sink.day_slot(&slot)?;
            for room in enumerator.rooms() {
                let Some(employees) = cursor.draw(params.employees_per_meeting) else {
                    break 'days;
                };
                if !day_booked {
                    day_booked = true;
                    stats.total_days += 1;
                    debug!(%date, "booking meetings");
                }
                let assignment = EmployeeAssignment {
                    booking: RoomBooking { slot, room },
                    employees,
                };
                trace!(
                    hour = slot.start_hour,
                    %room,
                    attendees = assignment.employees.len(),
                    "assigned"
                );
                sink.room_assignment(&assignment)?;
                stats.total_meetings += 1;
            }
        }
    }

    let outcome = RosterOutcome {
        stats,
        scheduled_employees: cursor.scheduled(),
        unscheduled_employees: cursor.remaining(),
    };
    if outcome.unscheduled_employees > 0 {
        warn!(
            unscheduled = outcome.unscheduled_employees,
            "month ran out of meeting slots"
        );
    }
    info!(
        total_days = stats.total_days,
        total_meetings = stats.total_meetings,
        "roster complete"
    );
    sink.summary(&outcome)?;
    Ok(outcome)
}

/// The whole event stream of a run.
#[must_use]
pub fn events(params: &ScheduleParameters) -> Vec<RosterEvent> {
    let mut events = Vec::new();
    match run(params, &mut events) {
        Ok(_outcome) => events,
        Err(infallible) => match infallible {},
    }
}

#[derive(Default)]
struct AssignmentCollector(Vec<EmployeeAssignment>);

impl RosterSink for AssignmentCollector {
    type Error = Infallible;

    fn day_slot(&mut self, _slot: &TimeSlot) -> Result<(), Self::Error> {
        Ok(())
    }

    fn room_assignment(&mut self, assignment: &EmployeeAssignment) -> Result<(), Self::Error> {
        self.0.push(assignment.clone());
        Ok(())
    }

    fn summary(&mut self, _outcome: &RosterOutcome) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// A fully materialized roster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Schedule {
    pub assignments: Vec<EmployeeAssignment>,
    pub outcome: RosterOutcome,
}

impl Schedule {
    #[must_use]
    pub fn plan(params: &ScheduleParameters) -> Self {
        let mut collector = AssignmentCollector::default();
        match run(params, &mut collector) {
            Ok(outcome) => Self {
                assignments: collector.0,
                outcome,
            },
            Err(infallible) => match infallible {},
        }
    }

    #[must_use]
    pub fn by_day(&self) -> BTreeMap<NaiveDate, Vec<&EmployeeAssignment>> {
        self.assignments
            .iter()
            .into_group_map_by(|assignment| assignment.booking.slot.date)
            .into_iter()
            .collect()
    }

    /// Meeting of an employee, if they got one.
    #[must_use]
    pub fn meeting_of(&self, employee: EmployeeId) -> Option<&RoomBooking> {
        self.assignments
            .iter()
            .find(|assignment| assignment.employees.contains(&employee))
            .map(|assignment| &assignment.booking)
    }
}
