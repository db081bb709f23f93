use std::io::{self, Write};

use itertools::Itertools as _;
use meeting_roster_optimizer::{
    EmployeeAssignment, RosterEvent, RosterOutcome, RosterSink, TimeSlot,
};

/// Human readable listing, one header per slot and one line per room.
///
/// ```text
/// Tue Oct 01 2024 09:00
///  • Meeting Room 1: Employee 1, Employee 2
/// ```
pub struct TextReport<W> {
    out: W,
}

impl<W: Write> TextReport<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> RosterSink for TextReport<W> {
    type Error = io::Error;

    fn day_slot(&mut self, slot: &TimeSlot) -> Result<(), Self::Error> {
        writeln!(
            self.out,
            "{} {:02}:00",
            slot.date.format("%a %b %d %Y"),
            slot.start_hour
        )
    }

    fn room_assignment(&mut self, assignment: &EmployeeAssignment) -> Result<(), Self::Error> {
        writeln!(
            self.out,
            " • Meeting Room {}: {}",
            assignment.booking.room,
            assignment
                .employees
                .iter()
                .format_with(", ", |employee, f| f(&format_args!("Employee {employee}")))
        )
    }

    fn summary(&mut self, outcome: &RosterOutcome) -> Result<(), Self::Error> {
        writeln!(
            self.out,
            "Total days with meetings: {}",
            outcome.stats.total_days
        )?;
        writeln!(
            self.out,
            "Total number of meetings: {}",
            outcome.stats.total_meetings
        )?;
        if outcome.unscheduled_employees > 0 {
            writeln!(
                self.out,
                "Employees without a meeting: {}",
                outcome.unscheduled_employees
            )?;
        }
        Ok(())
    }
}

/// One JSON object per line, in event order.
pub struct JsonLinesReport<W> {
    out: W,
}

impl<W: Write> JsonLinesReport<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    fn write(&mut self, event: &RosterEvent) -> Result<(), serde_json::Error> {
        serde_json::to_writer(&mut self.out, event)?;
        self.out.write_all(b"\n").map_err(serde_json::Error::io)
    }
}

impl<W: Write> RosterSink for JsonLinesReport<W> {
    type Error = serde_json::Error;

    fn day_slot(&mut self, slot: &TimeSlot) -> Result<(), Self::Error> {
        self.write(&slot.into())
    }

    fn room_assignment(&mut self, assignment: &EmployeeAssignment) -> Result<(), Self::Error> {
        self.write(&assignment.into())
    }

    fn summary(&mut self, outcome: &RosterOutcome) -> Result<(), Self::Error> {
        self.write(&outcome.into())
    }
}
